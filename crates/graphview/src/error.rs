use scholarnet_layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node id `{0}` appears more than once")]
    DuplicateNode(String),
    #[error("link {link} references unknown node `{id}`")]
    UnknownNode { link: usize, id: String },
    #[error("node `{id}` has weight {weight}, weights must be positive")]
    InvalidWeight { id: String, weight: f64 },
    #[error("could not parse dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
