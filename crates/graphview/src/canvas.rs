use scholarnet_layout::Position;

use crate::palette::Color;

/// Drawing surface the graph paints onto each frame.
///
/// Calls arrive in paint order: every link, then every node, then every label.
pub trait Canvas {
    fn line(&mut self, from: Position, to: Position);
    fn circle(&mut self, id: &str, center: Position, radius: f64, fill: Color);
    fn label(&mut self, id: &str, at: Position, text: &str, visible: bool);
}

/// Records draw calls, handy for inspecting a frame without rendering it
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingCanvas {
    pub lines: Vec<(Position, Position)>,
    pub circles: Vec<(String, Position, f64, Color)>,
    pub labels: Vec<(String, Position, String, bool)>,
}

impl Canvas for RecordingCanvas {
    fn line(&mut self, from: Position, to: Position) {
        self.lines.push((from, to));
    }

    fn circle(&mut self, id: &str, center: Position, radius: f64, fill: Color) {
        self.circles.push((id.to_string(), center, radius, fill));
    }

    fn label(&mut self, id: &str, at: Position, text: &str, visible: bool) {
        self.labels.push((id.to_string(), at, text.to_string(), visible));
    }
}
