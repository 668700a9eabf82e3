//! KDL config parsing for the viewer

use graphview::GraphViewConfig;
use graphview::layout::{Boundary, ChargeScaling, Viewport};
use kdl::{KdlDocument, KdlNode, KdlValue};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid KDL: {0}")]
    Parse(#[from] kdl::KdlError),
    #[error("`{key}` expects {expected}")]
    InvalidValue { key: String, expected: &'static str },
    #[error("`{key}` must be positive")]
    NotPositive { key: String },
}

/// Parse a viewer config document. Missing nodes keep their defaults and
/// unknown nodes are skipped with a warning.
pub fn parse_config(content: &str) -> Result<GraphViewConfig, ConfigError> {
    let doc = KdlDocument::parse(content)?;
    let mut config = GraphViewConfig::default();

    for node in doc.nodes() {
        match node.name().value() {
            "viewport" => {
                let width = positive("width", property(node, "width"))?;
                let height = positive("height", property(node, "height"))?;
                config.simulation.viewport = Viewport::new(
                    width.unwrap_or(config.simulation.viewport.width),
                    height.unwrap_or(config.simulation.viewport.height),
                );
            }
            "simulation" => apply_simulation(node, &mut config)?,
            "panel" => apply_panel(node, &mut config)?,
            other => warn!(node = other, "unknown config node ignored"),
        }
    }

    let viewport = config.viewport();
    debug!(?viewport, slots = config.history_slots, "config loaded");
    Ok(config)
}

fn apply_simulation(node: &KdlNode, config: &mut GraphViewConfig) -> Result<(), ConfigError> {
    let sim = &mut config.simulation;
    for child in children(node) {
        let key = child.name().value();
        let value = argument(child);
        match key {
            "charge" => sim.charge = number(key, value)?,
            "link-distance" => sim.link_distance = number(key, value)?,
            "center-strength" => sim.center_strength = number(key, value)?,
            "velocity-decay" => sim.velocity_decay = number(key, value)?,
            "alpha-min" => sim.alpha_min = number(key, value)?,
            "alpha-decay" => sim.alpha_decay = number(key, value)?,
            "drag-alpha-target" => sim.drag_alpha_target = number(key, value)?,
            "seed" => sim.seed = integer(key, value)?,
            "charge-scaling" => {
                sim.charge_scaling = match string(key, value)? {
                    "fixed" => ChargeScaling::Fixed,
                    "area" => ChargeScaling::Area,
                    _ => return Err(invalid(key, "\"fixed\" or \"area\"")),
                }
            }
            "boundary" => {
                sim.boundary = match string(key, value)? {
                    "none" => Boundary::None,
                    "circle" => Boundary::Circle,
                    _ => return Err(invalid(key, "\"none\" or \"circle\"")),
                }
            }
            other => warn!(key = other, "unknown simulation setting ignored"),
        }
    }
    Ok(())
}

fn apply_panel(node: &KdlNode, config: &mut GraphViewConfig) -> Result<(), ConfigError> {
    for child in children(node) {
        let key = child.name().value();
        let value = argument(child);
        match key {
            "abstract-length" => config.abstract_length = integer(key, value)?,
            "history-slots" => config.history_slots = integer(key, value)?,
            other => warn!(key = other, "unknown panel setting ignored"),
        }
    }
    Ok(())
}

fn children(node: &KdlNode) -> impl Iterator<Item = &KdlNode> {
    node.children().into_iter().flat_map(|doc| doc.nodes())
}

/// First positional argument
fn argument(node: &KdlNode) -> Option<&KdlValue> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .map(|e| e.value())
}

fn property<'a>(node: &'a KdlNode, key: &str) -> Option<&'a KdlValue> {
    node.entries()
        .iter()
        .find(|e| e.name().is_some_and(|n| n.value() == key))
        .map(|e| e.value())
}

fn invalid(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        expected,
    }
}

fn number(key: &str, value: Option<&KdlValue>) -> Result<f64, ConfigError> {
    value
        .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
        .ok_or_else(|| invalid(key, "a number"))
}

fn integer<T: TryFrom<i128>>(key: &str, value: Option<&KdlValue>) -> Result<T, ConfigError> {
    value
        .and_then(KdlValue::as_integer)
        .and_then(|i| T::try_from(i).ok())
        .ok_or_else(|| invalid(key, "a non-negative integer"))
}

fn string<'a>(key: &str, value: Option<&'a KdlValue>) -> Result<&'a str, ConfigError> {
    value
        .and_then(KdlValue::as_string)
        .ok_or_else(|| invalid(key, "a string"))
}

fn positive(key: &str, value: Option<&KdlValue>) -> Result<Option<f64>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let n = number(key, Some(value))?;
    if n <= 0.0 {
        return Err(ConfigError::NotPositive {
            key: key.to_string(),
        });
    }
    Ok(Some(n))
}
