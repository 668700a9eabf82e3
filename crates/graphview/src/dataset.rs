//! Wire format of the search results handed over by the hosting page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::edge::GraphEdge;
use crate::error::GraphError;
use crate::history::SearchHistory;
use crate::node::PaperNode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    /// Derived from the paper's link count when absent
    #[serde(default)]
    pub weight: Option<f64>,
    pub group: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

/// Everything the results page provides: the graph plus the user's recent queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(flatten)]
    pub dataset: Dataset,
    #[serde(default, rename = "searchHistory")]
    pub search_history: Vec<String>,
}

impl PageData {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Record the query these results answer as the newest history entry,
    /// keeping room for `slots` prior queries
    pub fn record_query(&mut self, query: &str, slots: usize) -> bool {
        let entries = std::mem::take(&mut self.search_history);
        let mut history = SearchHistory::from_entries(entries, slots + 1);
        let recorded = history.record(query);
        self.search_history = history.into_entries();
        debug!(query, recorded, "current query recorded");
        recorded
    }
}

/// Ids to indexes, links to index pairs
#[derive(Debug, Clone)]
pub struct ResolvedGraph {
    pub nodes: Vec<PaperNode>,
    pub edges: Vec<GraphEdge>,
    pub index: HashMap<String, usize>,
}

impl Dataset {
    pub fn resolve(&self) -> Result<ResolvedGraph, GraphError> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        let mut nodes = Vec::with_capacity(self.nodes.len());

        let mut neighbours: HashMap<&str, usize> = HashMap::new();
        for link in &self.links {
            *neighbours.entry(link.source.as_str()).or_default() += 1;
            *neighbours.entry(link.target.as_str()).or_default() += 1;
        }

        for record in &self.nodes {
            let weight = record.weight.unwrap_or_else(|| {
                weight_for_citations(neighbours.get(record.id.as_str()).copied().unwrap_or(0))
            });
            if !(weight > 0.0) {
                return Err(GraphError::InvalidWeight {
                    id: record.id.clone(),
                    weight,
                });
            }
            if index.insert(record.id.clone(), nodes.len()).is_some() {
                return Err(GraphError::DuplicateNode(record.id.clone()));
            }
            nodes.push(
                PaperNode::new(&record.id, &record.title, weight, record.group)
                    .with_authors(record.authors.iter().cloned())
                    .with_abstract(&record.abstract_text),
            );
        }

        let mut edges = Vec::with_capacity(self.links.len());
        for (link, record) in self.links.iter().enumerate() {
            let lookup = |id: &str| {
                index.get(id).copied().ok_or_else(|| GraphError::UnknownNode {
                    link,
                    id: id.to_string(),
                })
            };
            edges.push(GraphEdge::new(lookup(&record.source)?, lookup(&record.target)?));
        }

        debug!(nodes = nodes.len(), edges = edges.len(), "dataset resolved");
        Ok(ResolvedGraph {
            nodes,
            edges,
            index,
        })
    }
}

/// Weight bucket for a paper with `neighbours` citation links
pub fn weight_for_citations(neighbours: usize) -> f64 {
    match neighbours {
        n if n > 50 => 16.0,
        n if n > 25 => 13.0,
        n if n > 10 => 10.0,
        n if n > 5 => 7.0,
        n if n > 2 => 5.0,
        _ => 3.0,
    }
}
