use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;

use crate::types::*;

/// Viewport area each node gets at the reference density of the area-scaled charge
pub const REFERENCE_AREA_PER_NODE: f64 = 40_000.0;

// Squared distance below which repulsion stops growing
const DISTANCE_MIN_SQUARED: f64 = 1.0;

fn jiggle(rng: &mut impl Rng) -> f64 {
    (rng.random::<f64>() - 0.5) * 1e-6
}

/// Pairwise repulsion, each node pushing with a strength proportional to its weight
#[derive(Debug, Clone)]
pub struct ManyBody {
    strengths: Vec<f64>,
}

impl ManyBody {
    pub fn new(nodes: &[SimNode], config: &SimulationConfig) -> Self {
        let scale = Self::scale(config, nodes.len());
        let strengths = nodes
            .iter()
            .map(|n| -config.charge * n.weight * scale)
            .collect();
        Self { strengths }
    }

    /// Multiplier applied to every strength for a graph of `node_count` nodes
    pub fn scale(config: &SimulationConfig, node_count: usize) -> f64 {
        match config.charge_scaling {
            ChargeScaling::Fixed => 1.0,
            ChargeScaling::Area => {
                if node_count == 0 {
                    return 1.0;
                }
                let per_node = config.viewport.area() / node_count as f64;
                (per_node / REFERENCE_AREA_PER_NODE).sqrt()
            }
        }
    }

    pub fn strength(&self, index: usize) -> f64 {
        self.strengths[index]
    }

    pub fn apply(&self, nodes: &mut [SimNode], alpha: f64, rng: &mut impl Rng) {
        let n = nodes.len();
        for i in 0..n {
            let (xi, yi) = (nodes[i].x, nodes[i].y);
            let mut dvx = 0.0;
            let mut dvy = 0.0;
            for j in 0..n {
                if i == j {
                    continue;
                }
                let mut dx = nodes[j].x - xi;
                let mut dy = nodes[j].y - yi;
                let mut l = dx * dx + dy * dy;
                if dx == 0.0 {
                    dx = jiggle(rng);
                    l += dx * dx;
                }
                if dy == 0.0 {
                    dy = jiggle(rng);
                    l += dy * dy;
                }
                if l < DISTANCE_MIN_SQUARED {
                    l = (DISTANCE_MIN_SQUARED * l).sqrt();
                }
                let w = self.strengths[j] * alpha / l;
                dvx += dx * w;
                dvy += dy * w;
            }
            nodes[i].vx += dvx;
            nodes[i].vy += dvy;
        }
    }
}

/// Spring force along links, weakened for nodes with many links
#[derive(Debug, Clone)]
pub struct LinkForce {
    links: Vec<SimLink>,
    strengths: Vec<f64>,
    bias: Vec<f64>,
    distance: f64,
}

impl LinkForce {
    pub fn new(node_count: usize, links: &[SimLink], distance: f64) -> Self {
        let degrees = degrees(node_count, links);
        let mut strengths = Vec::with_capacity(links.len());
        let mut bias = Vec::with_capacity(links.len());
        for link in links {
            let s = degrees[link.source].max(1) as f64;
            let t = degrees[link.target].max(1) as f64;
            strengths.push(1.0 / s.min(t));
            bias.push(s / (s + t));
        }
        Self {
            links: links.to_vec(),
            strengths,
            bias,
            distance,
        }
    }

    pub fn apply(&self, nodes: &mut [SimNode], alpha: f64, rng: &mut impl Rng) {
        for (i, link) in self.links.iter().enumerate() {
            let (s, t) = (link.source, link.target);
            let mut x = nodes[t].x + nodes[t].vx - nodes[s].x - nodes[s].vx;
            let mut y = nodes[t].y + nodes[t].vy - nodes[s].y - nodes[s].vy;
            if x == 0.0 {
                x = jiggle(rng);
            }
            if y == 0.0 {
                y = jiggle(rng);
            }
            let mut l = (x * x + y * y).sqrt();
            l = (l - self.distance) / l * alpha * self.strengths[i];
            x *= l;
            y *= l;

            let b = self.bias[i];
            nodes[t].vx -= x * b;
            nodes[t].vy -= y * b;
            nodes[s].vx += x * (1.0 - b);
            nodes[s].vy += y * (1.0 - b);
        }
    }
}

/// Undirected link count per node
pub fn degrees(node_count: usize, links: &[SimLink]) -> Vec<usize> {
    let mut graph: UnGraph<(), ()> = UnGraph::with_capacity(node_count, links.len());
    let indices: Vec<NodeIndex> = (0..node_count).map(|_| graph.add_node(())).collect();
    for link in links {
        graph.add_edge(indices[link.source], indices[link.target], ());
    }
    indices
        .iter()
        .map(|&idx| graph.edges(idx).count())
        .collect()
}

/// Pulls every node toward the origin, independently on each axis
#[derive(Debug, Clone, Copy)]
pub struct CenterForce {
    pub strength: f64,
}

impl CenterForce {
    pub fn apply(&self, nodes: &mut [SimNode], alpha: f64) {
        let k = self.strength * alpha;
        for node in nodes.iter_mut() {
            node.vx += (0.0 - node.x) * k;
            node.vy += (0.0 - node.y) * k;
        }
    }
}
