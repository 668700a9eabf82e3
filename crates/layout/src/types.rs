use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin, which is the center of the layout
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Radius of the largest circle centered on the origin that fits the viewport
    pub fn inscribed_radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("link {link} references node {index}, but only {len} nodes exist")]
    InvalidNodeIndex {
        link: usize,
        index: usize,
        len: usize,
    },
    #[error("node {index} has weight {weight}, weights must be positive")]
    InvalidWeight { index: usize, weight: f64 },
}

/// A node as seen by the simulation. `fx`/`fy` pin the node while set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimNode {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub fx: Option<f64>,
    pub fy: Option<f64>,
    pub weight: f64,
    // Whether x/y were supplied by the caller rather than the initial spiral
    pub placed: bool,
}

impl SimNode {
    pub fn new(weight: f64) -> Self {
        Self {
            weight,
            ..Default::default()
        }
    }

    pub fn at(weight: f64, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            weight,
            placed: true,
            ..Default::default()
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn is_pinned(&self) -> bool {
        self.fx.is_some() || self.fy.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimLink {
    pub source: usize,
    pub target: usize,
}

impl SimLink {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

/// How the many-body strength reacts to the size of the result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeScaling {
    /// Strength is `-charge * weight` regardless of graph size
    Fixed,
    /// Strength is scaled by the viewport area available per node
    #[default]
    Area,
}

/// Where nodes may travel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Boundary {
    None,
    /// Clamp nodes onto a circle of half the smaller viewport dimension
    #[default]
    Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub viewport: Viewport,
    pub charge: f64,
    pub charge_scaling: ChargeScaling,
    pub link_distance: f64,
    pub center_strength: f64,
    pub velocity_decay: f64,
    pub alpha_min: f64,
    pub alpha_decay: f64,
    pub drag_alpha_target: f64,
    pub boundary: Boundary,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let alpha_min = 0.001;
        Self {
            viewport: Viewport::default(),
            charge: 23.0,
            charge_scaling: ChargeScaling::default(),
            link_distance: 30.0,
            center_strength: 0.1,
            velocity_decay: 0.4,
            alpha_min,
            alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
            drag_alpha_target: 0.3,
            boundary: Boundary::default(),
            seed: 7,
        }
    }
}

impl SimulationConfig {
    pub fn radius_bound(&self) -> Option<f64> {
        match self.boundary {
            Boundary::None => None,
            Boundary::Circle => Some(self.viewport.inscribed_radius()),
        }
    }
}
