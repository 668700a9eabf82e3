use std::collections::HashMap;

use scholarnet_layout::{Position, SimLink, SimNode, Simulation};
use svg::Document;
use tracing::{debug, info, trace};

use crate::canvas::Canvas;
use crate::config::GraphViewConfig;
use crate::dataset::PageData;
use crate::edge::GraphEdge;
use crate::error::GraphError;
use crate::history::HistorySlots;
use crate::interaction::{Interaction, PointerEvent};
use crate::navigation::DetailLink;
use crate::node::PaperNode;
use crate::palette::{CATEGORY10, Color, OrdinalPalette};
use crate::panel::DetailPanel;
use crate::render::SvgCanvas;

/// Interactive citation graph: papers laid out by a force simulation, with
/// hover highlighting, dragging, a detail panel and recent-search slots.
pub struct GraphView {
    config: GraphViewConfig,
    papers: Vec<PaperNode>,
    edges: Vec<GraphEdge>,
    index: HashMap<String, usize>,
    simulation: Simulation,
    palette: OrdinalPalette,
    interaction: Interaction,
    // Last hovered paper: keeps the highlight and feeds the abstract toggle
    last_hovered: Option<usize>,
    panel: DetailPanel,
    history: HistorySlots,
}

impl GraphView {
    pub fn new(page: &PageData, config: GraphViewConfig) -> Result<Self, GraphError> {
        let resolved = page.dataset.resolve()?;

        let sim_nodes = resolved.nodes.iter().map(|p| SimNode::new(p.weight)).collect();
        let sim_links = resolved.edges.iter().copied().map(SimLink::from).collect();
        let simulation = Simulation::new(sim_nodes, sim_links, config.simulation.clone())?;

        let mut palette = OrdinalPalette::new(&config.scheme);
        for paper in &resolved.nodes {
            palette.color(paper.group);
        }

        let mut history = HistorySlots::new(config.history_slots);
        history.apply(&page.search_history);

        info!(
            papers = resolved.nodes.len(),
            links = resolved.edges.len(),
            history = page.search_history.len(),
            "graph view ready"
        );

        Ok(Self {
            panel: DetailPanel::new(config.abstract_length),
            config,
            papers: resolved.nodes,
            edges: resolved.edges,
            index: resolved.index,
            simulation,
            palette,
            interaction: Interaction::Idle,
            last_hovered: None,
            history,
        })
    }

    pub fn from_json(json: &str, config: GraphViewConfig) -> Result<Self, GraphError> {
        Self::new(&PageData::from_json(json)?, config)
    }

    /// Animation-frame callback: advance the layout while it is still moving.
    /// Returns whether anything moved.
    pub fn on_frame(&mut self) -> bool {
        self.simulation.step()
    }

    /// Drive frames until the layout idles or `max_frames` have run
    pub fn run_until_settled(&mut self, max_frames: usize) -> usize {
        let frames = self.simulation.run(max_frames);
        debug!(frames, settled = !self.simulation.is_running(), "frames run");
        frames
    }

    /// Route a pointer event to the matching handler. Clicking a node yields
    /// the detail page to open.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<DetailLink> {
        match event {
            PointerEvent::Moved(p) => {
                if self.interaction.is_dragging() {
                    self.drag_moved(p);
                    return None;
                }
                let hit = self.hit_test(p);
                let current = self.interaction.hovered();
                if hit != current {
                    if let Some(prev) = current {
                        self.node_left(prev);
                    }
                    if let Some(next) = hit {
                        self.node_entered(next);
                    }
                }
                None
            }
            PointerEvent::Pressed(p) => {
                if let Some(i) = self.hit_test(p) {
                    self.drag_started(i);
                }
                None
            }
            PointerEvent::Released(_) => {
                if self.interaction.is_dragging() {
                    self.drag_ended();
                }
                None
            }
            PointerEvent::Clicked(p) => self.hit_test(p).and_then(|i| self.node_clicked(i)),
        }
    }

    /// Topmost node under `p`; later nodes are drawn above earlier ones
    pub fn hit_test(&self, p: Position) -> Option<usize> {
        (0..self.papers.len()).rev().find(|&i| {
            self.simulation
                .position(i)
                .is_some_and(|c| c.distance_to(p) <= self.papers[i].radius())
        })
    }

    pub fn node_entered(&mut self, index: usize) {
        if index >= self.papers.len() {
            return;
        }
        if self.interaction.is_dragging() {
            trace!(index, "hover suppressed while dragging");
            return;
        }
        if self.interaction == Interaction::Hovering(index) {
            return;
        }
        if let Some(prev) = self.interaction.hovered() {
            self.papers[prev].label_visible = false;
        }

        let paper = &mut self.papers[index];
        paper.label_visible = true;
        self.panel.show(paper);
        debug!(node = %paper.id, "hover");

        self.last_hovered = Some(index);
        self.interaction = Interaction::Hovering(index);
    }

    pub fn node_left(&mut self, index: usize) {
        if self.interaction.is_dragging() {
            return;
        }
        let Some(paper) = self.papers.get_mut(index) else {
            return;
        };
        paper.label_visible = false;
        if self.interaction == Interaction::Hovering(index) {
            self.interaction = Interaction::Idle;
        }
    }

    /// Pin the node where it is and reheat the layout around it
    pub fn drag_started(&mut self, index: usize) {
        if self.interaction.is_dragging() {
            return;
        }
        let Some(pos) = self.simulation.position(index) else {
            return;
        };
        let target = self.simulation.config().drag_alpha_target;
        self.simulation.set_alpha_target(target);
        self.simulation.restart();
        self.simulation.pin(index, pos.x, pos.y);
        self.interaction = Interaction::Dragging(index);
        debug!(node = %self.papers[index].id, "drag start");
    }

    pub fn drag_moved(&mut self, p: Position) {
        if let Some(index) = self.interaction.dragged() {
            self.simulation.pin(index, p.x, p.y);
        }
    }

    /// Release the pin and let the layout cool down again. The pointer is
    /// still on the released node, so it becomes the hovered one.
    pub fn drag_ended(&mut self) {
        let Some(index) = self.interaction.dragged() else {
            return;
        };
        self.simulation.set_alpha_target(0.0);
        self.simulation.unpin(index);
        self.interaction = Interaction::Idle;
        debug!(node = %self.papers[index].id, "drag end");
        self.node_entered(index);
    }

    pub fn node_clicked(&self, index: usize) -> Option<DetailLink> {
        let link = DetailLink::for_paper(self.papers.get(index)?);
        info!(url = %link, "open detail page");
        Some(link)
    }

    /// Flip the abstract panel. Does nothing before the first hover.
    pub fn toggle_abstract(&mut self) -> bool {
        let paper = self.last_hovered.map(|i| &self.papers[i]);
        let toggled = self.panel.toggle_abstract(paper);
        if toggled {
            debug!(label = self.panel.toggle.label(), "abstract toggled");
        }
        toggled
    }

    pub fn fill(&self, index: usize) -> Color {
        if self.last_hovered == Some(index) {
            return self.config.highlight;
        }
        self.papers
            .get(index)
            .and_then(|p| self.palette.get(p.group))
            .unwrap_or(CATEGORY10[0])
    }

    pub fn paint(&self, canvas: &mut impl Canvas) {
        let nodes = self.simulation.nodes();
        for edge in &self.edges {
            canvas.line(nodes[edge.source].position(), nodes[edge.target].position());
        }
        for (i, paper) in self.papers.iter().enumerate() {
            canvas.circle(&paper.id, nodes[i].position(), paper.radius(), self.fill(i));
        }
        for (i, paper) in self.papers.iter().enumerate() {
            let at = Position::new(nodes[i].x + paper.label_offset(), nodes[i].y);
            canvas.label(&paper.id, at, &paper.title, paper.label_visible);
        }
    }

    pub fn render_svg(&self) -> Document {
        let mut canvas = SvgCanvas::new(self.config.viewport());
        self.paint(&mut canvas);
        canvas.finish()
    }

    pub fn config(&self) -> &GraphViewConfig {
        &self.config
    }

    pub fn papers(&self) -> &[PaperNode] {
        &self.papers
    }

    pub fn paper(&self, index: usize) -> Option<&PaperNode> {
        self.papers.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn position(&self, index: usize) -> Option<Position> {
        self.simulation.position(index)
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn last_hovered(&self) -> Option<usize> {
        self.last_hovered
    }

    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    pub fn history(&self) -> &HistorySlots {
        &self.history
    }
}
