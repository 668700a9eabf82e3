/// What a click on a submit-style button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Submit,
    /// Default submission suppressed: the button acts as disabled
    Prevent,
}

/// A button whose label doubles as its enabled state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn click(&self) -> SubmitAction {
        if self.label.trim().is_empty() {
            SubmitAction::Prevent
        } else {
            SubmitAction::Submit
        }
    }
}
