use crate::model::graph::{Adjacency, StreetGraph};
use ordered_float::OrderedFloat;
use std::{cmp::Reverse, collections::BinaryHeap};

const RELAX_EPSILON: f64 = 1e-12;

/// single-objective Dijkstra from `target` over the undirected graph, which yields the
/// cost-to-target from every node. unreachable nodes keep an infinite distance.
///
/// # Arguments
///
/// * `graph`  - filtered street graph
/// * `target` - search target, the root of the reverse tree
/// * `weight` - edge weight as a function of (src, adjacency)
pub fn reverse_dijkstra<F>(graph: &StreetGraph, target: usize, weight: F) -> Vec<f64>
where
    F: Fn(usize, &Adjacency) -> f64,
{
    let mut dist = vec![f64::INFINITY; graph.node_count()];
    if target >= dist.len() {
        return dist;
    }
    let mut frontier: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();
    dist[target] = 0.0;
    frontier.push(Reverse((OrderedFloat(0.0), target)));

    while let Some(Reverse((OrderedFloat(d), u))) = frontier.pop() {
        if d > dist[u] + RELAX_EPSILON {
            continue;
        }
        for adj in graph.neighbors(u) {
            let candidate = dist[u] + weight(u, adj);
            if dist[adj.dst] > candidate + RELAX_EPSILON {
                dist[adj.dst] = candidate;
                frontier.push(Reverse((OrderedFloat(candidate), adj.dst)));
            }
        }
    }
    dist
}
