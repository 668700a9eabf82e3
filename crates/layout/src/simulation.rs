use std::f64::consts::PI;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::bounds::clamp_to_circle;
use crate::forces::{CenterForce, LinkForce, ManyBody};
use crate::types::*;

const INITIAL_RADIUS: f64 = 10.0;

/// Iterative force layout over weighted nodes.
///
/// Each [`tick`](Simulation::tick) moves alpha toward the alpha target, applies
/// charge, link and centering forces, integrates velocities (respecting pins)
/// and finally clamps nodes to the boundary circle when one is configured.
pub struct Simulation {
    nodes: Vec<SimNode>,
    links: Vec<SimLink>,
    config: SimulationConfig,
    charge: ManyBody,
    link_force: LinkForce,
    center: CenterForce,
    alpha: f64,
    alpha_target: f64,
    running: bool,
    ticks: u64,
    rng: StdRng,
}

impl Simulation {
    pub fn new(
        mut nodes: Vec<SimNode>,
        links: Vec<SimLink>,
        config: SimulationConfig,
    ) -> Result<Self, LayoutError> {
        for (index, node) in nodes.iter().enumerate() {
            if !(node.weight > 0.0) {
                return Err(LayoutError::InvalidWeight {
                    index,
                    weight: node.weight,
                });
            }
        }
        for (i, link) in links.iter().enumerate() {
            for index in [link.source, link.target] {
                if index >= nodes.len() {
                    return Err(LayoutError::InvalidNodeIndex {
                        link: i,
                        index,
                        len: nodes.len(),
                    });
                }
            }
        }

        initial_placement(&mut nodes);

        let charge = ManyBody::new(&nodes, &config);
        let link_force = LinkForce::new(nodes.len(), &links, config.link_distance);
        let center = CenterForce {
            strength: config.center_strength,
        };
        let rng = StdRng::seed_from_u64(config.seed);

        debug!(
            nodes = nodes.len(),
            links = links.len(),
            scale = ManyBody::scale(&config, nodes.len()),
            "simulation created"
        );

        Ok(Self {
            nodes,
            links,
            config,
            charge,
            link_force,
            center,
            alpha: 1.0,
            alpha_target: 0.0,
            running: true,
            ticks: 0,
            rng,
        })
    }

    /// Advance one iteration unconditionally
    pub fn tick(&mut self) {
        self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;
        let alpha = self.alpha;

        self.link_force.apply(&mut self.nodes, alpha, &mut self.rng);
        self.charge.apply(&mut self.nodes, alpha, &mut self.rng);
        self.center.apply(&mut self.nodes, alpha);

        let keep = 1.0 - self.config.velocity_decay;
        for node in self.nodes.iter_mut() {
            match node.fx {
                Some(fx) => {
                    node.x = fx;
                    node.vx = 0.0;
                }
                None => {
                    node.vx *= keep;
                    node.x += node.vx;
                }
            }
            match node.fy {
                Some(fy) => {
                    node.y = fy;
                    node.vy = 0.0;
                }
                None => {
                    node.vy *= keep;
                    node.y += node.vy;
                }
            }
        }

        if let Some(radius) = self.config.radius_bound() {
            let mut clamped = 0usize;
            for node in self.nodes.iter_mut() {
                if clamp_to_circle(node, radius) {
                    clamped += 1;
                }
            }
            if clamped > 0 {
                trace!(clamped, radius, "nodes clamped to boundary");
            }
        }

        self.ticks += 1;
        trace!(tick = self.ticks, alpha = self.alpha, "tick");
    }

    /// Advance one iteration if the simulation is still warm. Returns whether a
    /// tick happened.
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.tick();
        if self.alpha < self.config.alpha_min {
            self.running = false;
            debug!(ticks = self.ticks, "simulation settled");
        }
        true
    }

    /// Run until the simulation settles or `max_ticks` ticks have passed
    pub fn run(&mut self, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && self.step() {
            ticks += 1;
        }
        ticks
    }

    pub fn restart(&mut self) {
        if !self.running {
            debug!(alpha = self.alpha, "simulation restarted");
        }
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    pub fn alpha_target(&self) -> f64 {
        self.alpha_target
    }

    pub fn set_alpha_target(&mut self, target: f64) {
        self.alpha_target = target;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn radius_bound(&self) -> Option<f64> {
        self.config.radius_bound()
    }

    pub fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&SimNode> {
        self.nodes.get(index)
    }

    pub fn links(&self) -> &[SimLink] {
        &self.links
    }

    pub fn position(&self, index: usize) -> Option<Position> {
        self.nodes.get(index).map(SimNode::position)
    }

    /// Fix a node at `(x, y)` until [`unpin`](Simulation::unpin) is called
    pub fn pin(&mut self, index: usize, x: f64, y: f64) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.fx = Some(x);
            node.fy = Some(y);
        }
    }

    pub fn unpin(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.fx = None;
            node.fy = None;
        }
    }
}

/// Place nodes without a caller-supplied position on a phyllotaxis spiral
fn initial_placement(nodes: &mut [SimNode]) {
    let angle_step = PI * (3.0 - 5.0f64.sqrt());
    for (i, node) in nodes.iter_mut().enumerate() {
        if node.placed {
            continue;
        }
        let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
        let angle = i as f64 * angle_step;
        node.x = radius * angle.cos();
        node.y = radius * angle.sin();
        node.placed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig {
            viewport: Viewport::new(800.0, 600.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_placement_is_spread() {
        let nodes = vec![SimNode::new(3.0); 4];
        let sim = Simulation::new(nodes, vec![], config()).unwrap();
        for i in 0..4 {
            for j in (i + 1)..4 {
                let a = sim.position(i).unwrap();
                let b = sim.position(j).unwrap();
                assert!(a.distance_to(b) > 1.0);
            }
        }
    }

    #[test]
    fn test_rejects_dangling_link() {
        let nodes = vec![SimNode::new(3.0); 2];
        let err = Simulation::new(nodes, vec![SimLink::new(0, 5)], config())
            .err()
            .unwrap();
        assert_eq!(
            err,
            LayoutError::InvalidNodeIndex {
                link: 0,
                index: 5,
                len: 2
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        let nodes = vec![SimNode::new(3.0), SimNode::new(0.0)];
        assert!(matches!(
            Simulation::new(nodes, vec![], config()),
            Err(LayoutError::InvalidWeight { index: 1, .. })
        ));
    }

    #[test]
    fn test_alpha_moves_toward_target() {
        let mut sim = Simulation::new(vec![SimNode::new(3.0)], vec![], config()).unwrap();
        sim.tick();
        assert!(sim.alpha() < 1.0);
        sim.set_alpha(0.0);
        sim.set_alpha_target(0.3);
        sim.tick();
        assert!(sim.alpha() > 0.0 && sim.alpha() < 0.3);
    }

    #[test]
    fn test_pinned_node_stays() {
        let nodes = vec![SimNode::new(5.0), SimNode::new(5.0), SimNode::new(5.0)];
        let links = vec![SimLink::new(0, 1), SimLink::new(1, 2)];
        let mut sim = Simulation::new(nodes, links, config()).unwrap();
        sim.pin(1, 40.0, -20.0);
        for _ in 0..20 {
            sim.tick();
        }
        let node = sim.node(1).unwrap();
        assert_eq!((node.x, node.y), (40.0, -20.0));
        assert_eq!((node.vx, node.vy), (0.0, 0.0));
        sim.unpin(1);
        assert!(!sim.node(1).unwrap().is_pinned());
    }
}
