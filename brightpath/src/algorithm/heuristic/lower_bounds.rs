use super::reverse_dijkstra;
use crate::model::{graph::StreetGraph, RouteCost};

/// per-node lower bounds on the remaining time and darkness to the target. each table
/// is a consistent bound for its own objective. nodes that cannot reach the target
/// get `0` in both tables so no infinity reaches the priority queue.
#[derive(Debug, Clone)]
pub struct LowerBounds {
    pub time: Vec<f64>,
    pub dark: Vec<f64>,
}

impl LowerBounds {
    pub fn new(graph: &StreetGraph, target: usize) -> LowerBounds {
        let time = reverse_dijkstra(graph, target, |_, adj| adj.time);
        let dark = reverse_dijkstra(graph, target, |src, adj| graph.darkness(src, adj.dst));
        let unreachable = time.iter().filter(|d| !d.is_finite()).count();
        log::debug!(
            "computed lower bounds to target {target}, {unreachable} of {} nodes unreachable",
            time.len()
        );
        LowerBounds {
            time: time.into_iter().map(finite_or_zero).collect(),
            dark: dark.into_iter().map(finite_or_zero).collect(),
        }
    }

    /// lower bound pair `h` for `node`.
    pub fn get(&self, node: usize) -> RouteCost {
        RouteCost::new(
            self.time.get(node).copied().unwrap_or(0.0),
            self.dark.get(node).copied().unwrap_or(0.0),
        )
    }
}

fn finite_or_zero(d: f64) -> f64 {
    if d.is_finite() {
        d
    } else {
        0.0
    }
}
