//! Citation graph view: layout, interaction and rendering of search results.

mod canvas;
mod config;
mod dataset;
mod edge;
mod error;
mod form;
mod graph;
mod history;
mod interaction;
mod navigation;
mod node;
mod palette;
mod panel;
mod render;

pub use canvas::{Canvas, RecordingCanvas};
pub use config::GraphViewConfig;
pub use dataset::{Dataset, LinkRecord, NodeRecord, PageData, ResolvedGraph, weight_for_citations};
pub use edge::GraphEdge;
pub use error::GraphError;
pub use form::{SubmitAction, SubmitButton};
pub use graph::GraphView;
pub use history::{DEFAULT_HISTORY_SLOTS, HistorySlot, HistorySlots, SearchHistory};
pub use interaction::{Interaction, PointerEvent};
pub use navigation::{DETAIL_ROUTE, DetailLink};
pub use node::{PaperNode, radius_for_weight};
pub use palette::{CATEGORY10, Color, HIGHLIGHT, OrdinalPalette};
pub use panel::{AbstractToggle, DetailPanel, HIDE_ABSTRACT, VIEW_ABSTRACT, truncate};
pub use render::SvgCanvas;

pub use scholarnet_layout as layout;
