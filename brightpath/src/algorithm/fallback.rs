use crate::{
    config::SearchConfig,
    model::{
        graph::StreetGraph,
        path::{Path, PickName},
        RouteCost,
    },
};
use ordered_float::OrderedFloat;
use std::{cmp::Reverse, collections::BinaryHeap};

/// plain time-only Dijkstra from `source` to `target` over the filtered graph.
///
/// # Returns
///
/// the node sequence of a fastest path, or None if `target` is unreachable.
pub fn shortest_time_path(
    graph: &StreetGraph,
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    let n = graph.node_count();
    if source >= n || target >= n {
        return None;
    }
    let mut dist = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();
    dist[source] = 0.0;
    frontier.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((_, u))) = frontier.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        if u == target {
            break;
        }
        for adj in graph.neighbors(u) {
            let candidate = dist[u] + adj.time;
            if candidate < dist[adj.dst] {
                dist[adj.dst] = candidate;
                parent[adj.dst] = Some(u);
                frontier.push(Reverse((OrderedFloat(candidate), adj.dst)));
            }
        }
    }

    if !visited[target] {
        return None;
    }
    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = parent[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    Some(path)
}

/// routes returned when the frontier search leaves the target without labels. the
/// fastest path is repeated under all three names. when the target is unreachable a
/// `[source, target]` placeholder carrying the configured penalty costs is used instead,
/// so the result is never empty.
pub fn fallback_paths(
    graph: &StreetGraph,
    source: usize,
    target: usize,
    config: &SearchConfig,
) -> Vec<Path> {
    let found = shortest_time_path(graph, source, target)
        .and_then(|nodes| graph.path_cost(&nodes).map(|cost| (nodes, cost)));
    let (nodes, cost) = match found {
        Some(found) => {
            log::warn!(
                "frontier search found no route, falling back to fastest path with {} nodes",
                found.0.len()
            );
            found
        }
        None => {
            log::warn!(
                "no route from {source} to {target}, returning placeholder with penalty costs"
            );
            let cost = RouteCost::new(config.placeholder_time, config.placeholder_dark);
            (vec![source, target], cost)
        }
    };
    PickName::ALL
        .iter()
        .map(|name| Path {
            name: *name,
            chosen_label_index: 0,
            node_sequence: nodes.clone(),
            total_time: cost.time,
            total_dark: cost.dark,
        })
        .collect()
}
