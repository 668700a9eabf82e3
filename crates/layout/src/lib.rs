//! Force-directed layout for weighted graphs.
//!
//! The simulation follows the usual "alpha" cooling model: every tick applies
//! many-body repulsion, link springs and a pull toward the origin, scaled by the
//! current alpha, until alpha decays below its minimum and the layout idles.

mod bounds;
mod forces;
mod simulation;
mod types;

pub use bounds::clamp_to_circle;
pub use forces::{CenterForce, LinkForce, ManyBody, REFERENCE_AREA_PER_NODE, degrees};
pub use simulation::Simulation;
pub use types::*;
