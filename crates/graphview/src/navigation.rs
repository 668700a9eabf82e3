use std::fmt;

use crate::node::PaperNode;

/// Route that renders the detail page of a paper
pub const DETAIL_ROUTE: &str = "/loading";

/// Where clicking a node leads: the detail lookup for its title and first author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLink {
    pub title: String,
    pub author: String,
}

impl DetailLink {
    pub fn for_paper(paper: &PaperNode) -> Self {
        Self {
            title: paper.title.clone(),
            author: paper.first_author().to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{DETAIL_ROUTE}?title={}&author={}",
            urlencoding::encode(&self.title),
            urlencoding::encode(&self.author)
        )
    }
}

impl fmt::Display for DetailLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
