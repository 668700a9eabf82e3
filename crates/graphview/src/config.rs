use scholarnet_layout::{SimulationConfig, Viewport};
use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_HISTORY_SLOTS;
use crate::palette::{CATEGORY10, Color, HIGHLIGHT};
use crate::panel::DEFAULT_ABSTRACT_LENGTH;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphViewConfig {
    pub simulation: SimulationConfig,
    pub highlight: Color,
    pub scheme: Vec<Color>,
    pub abstract_length: usize,
    pub history_slots: usize,
}

impl GraphViewConfig {
    pub fn viewport(&self) -> Viewport {
        self.simulation.viewport
    }
}

impl Default for GraphViewConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            highlight: HIGHLIGHT,
            scheme: CATEGORY10.to_vec(),
            abstract_length: DEFAULT_ABSTRACT_LENGTH,
            history_slots: DEFAULT_HISTORY_SLOTS,
        }
    }
}
