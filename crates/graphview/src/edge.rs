/// A link resolved from node ids to node indexes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
}

impl GraphEdge {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

impl From<GraphEdge> for scholarnet_layout::SimLink {
    fn from(edge: GraphEdge) -> Self {
        scholarnet_layout::SimLink::new(edge.source, edge.target)
    }
}
