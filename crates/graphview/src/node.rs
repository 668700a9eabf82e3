/// Circle radius per unit of weight
pub const RADIUS_PER_WEIGHT: f64 = 3.0;
/// Horizontal label offset per unit of weight, just past the circle edge
pub const LABEL_OFFSET_PER_WEIGHT: f64 = 3.2;

/// A paper shown as a node. Its position lives in the simulation at the same index.
#[derive(Clone, Debug, PartialEq)]
pub struct PaperNode {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub abstract_text: String,
    pub weight: f64,
    pub group: u32,
    // Label is shown while the pointer is over the node
    pub label_visible: bool,
}

impl PaperNode {
    pub fn new(id: impl Into<String>, title: impl Into<String>, weight: f64, group: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            abstract_text: String::new(),
            weight,
            group,
            label_visible: false,
        }
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = text.into();
        self
    }

    /// Display author, empty when the paper lists none
    pub fn first_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or("")
    }

    pub fn radius(&self) -> f64 {
        radius_for_weight(self.weight)
    }

    pub fn label_offset(&self) -> f64 {
        self.weight * LABEL_OFFSET_PER_WEIGHT
    }
}

pub fn radius_for_weight(weight: f64) -> f64 {
    weight * RADIUS_PER_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_grows_with_weight() {
        let weights = [0.5, 1.0, 3.0, 5.0, 7.0, 10.0, 13.0, 16.0];
        for pair in weights.windows(2) {
            assert!(radius_for_weight(pair[0]) < radius_for_weight(pair[1]));
        }
    }

    #[test]
    fn test_label_sits_outside_circle() {
        let node = PaperNode::new("p", "Paper", 5.0, 1);
        assert!(node.label_offset() > node.radius());
    }

    #[test]
    fn test_first_author() {
        let node = PaperNode::new("p", "Paper", 5.0, 1).with_authors(["Jane Doe", "John Roe"]);
        assert_eq!(node.first_author(), "Jane Doe");
        assert_eq!(PaperNode::new("q", "Other", 3.0, 1).first_author(), "");
    }
}
