use scholarnet_layout::{Position, Viewport};
use svg::{Document, Node};
use svg::node::element::{Circle, Group, Line, Text};

use crate::canvas::Canvas;
use crate::palette::Color;

/// Canvas that builds an SVG document centered on the origin
pub struct SvgCanvas {
    viewport: Viewport,
    links: Group,
    nodes: Group,
    labels: Group,
}

impl SvgCanvas {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            links: Group::new().set("class", "links"),
            nodes: Group::new().set("class", "nodes"),
            labels: Group::new().set("class", "labels"),
        }
    }

    pub fn finish(self) -> Document {
        let Viewport { width, height } = self.viewport;
        Document::new()
            .set("width", width)
            .set("height", height)
            .set(
                "viewBox",
                format!("{} {} {} {}", -width / 2.0, -height / 2.0, width, height),
            )
            .set("style", "max-width: 100%; height: auto;")
            .add(self.links)
            .add(self.nodes)
            .add(self.labels)
    }
}

impl Canvas for SvgCanvas {
    fn line(&mut self, from: Position, to: Position) {
        let line = Line::new()
            .set("class", "link")
            .set("x1", from.x)
            .set("y1", from.y)
            .set("x2", to.x)
            .set("y2", to.y);
        self.links.append(line);
    }

    fn circle(&mut self, id: &str, center: Position, radius: f64, fill: Color) {
        let circle = Circle::new()
            .set("class", "node")
            .set("data-id", id)
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", radius)
            .set("fill", fill.to_string());
        self.nodes.append(circle);
    }

    fn label(&mut self, id: &str, at: Position, text: &str, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let label = Text::new(text)
            .set("class", "label")
            .set("data-id", id)
            .set("x", at.x)
            .set("y", at.y)
            .set("style", format!("display: {display}"));
        self.labels.append(label);
    }
}
