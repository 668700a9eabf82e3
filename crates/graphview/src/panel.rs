//! Side panel showing the hovered paper.

use crate::node::PaperNode;

pub const VIEW_ABSTRACT: &str = "View Abstract";
pub const HIDE_ABSTRACT: &str = "Hide Abstract";
pub const DEFAULT_ABSTRACT_LENGTH: usize = 200;

/// Keep the first `max_chars` characters and append an ellipsis
pub fn truncate(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AbstractToggle {
    /// Button reads "View Abstract", no abstract shown
    #[default]
    Collapsed,
    /// Button reads "Hide Abstract", abstract of the last hovered paper shown
    Expanded,
}

impl AbstractToggle {
    pub fn label(self) -> &'static str {
        match self {
            AbstractToggle::Collapsed => VIEW_ABSTRACT,
            AbstractToggle::Expanded => HIDE_ABSTRACT,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            AbstractToggle::Collapsed => AbstractToggle::Expanded,
            AbstractToggle::Expanded => AbstractToggle::Collapsed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub title: String,
    pub author: String,
    pub abstract_text: String,
    pub toggle: AbstractToggle,
    // The toggle button stays hidden until a paper has been hovered
    pub toggle_visible: bool,
    abstract_length: usize,
}

impl DetailPanel {
    pub fn new(abstract_length: usize) -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            abstract_text: String::new(),
            toggle: AbstractToggle::default(),
            toggle_visible: false,
            abstract_length,
        }
    }

    pub fn abstract_length(&self) -> usize {
        self.abstract_length
    }

    /// Fill the panel from a hovered paper
    pub fn show(&mut self, paper: &PaperNode) {
        self.title = paper.title.clone();
        self.author = paper.first_author().to_string();
        self.toggle_visible = true;
        if self.toggle == AbstractToggle::Expanded {
            self.abstract_text = truncate(&paper.abstract_text, self.abstract_length);
        }
    }

    /// Flip the abstract toggle, showing or clearing the abstract of `paper`.
    /// Without a paper there is nothing to show and the toggle stays as is.
    pub fn toggle_abstract(&mut self, paper: Option<&PaperNode>) -> bool {
        let Some(paper) = paper else {
            return false;
        };
        self.toggle = self.toggle.flipped();
        self.abstract_text = match self.toggle {
            AbstractToggle::Expanded => truncate(&paper.abstract_text, self.abstract_length),
            AbstractToggle::Collapsed => String::new(),
        };
        true
    }
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self::new(DEFAULT_ABSTRACT_LENGTH)
    }
}
