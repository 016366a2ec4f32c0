use crate::{
    algorithm::{fallback, heuristic::LowerBounds, picks, search::BiCriteriaSearch},
    config::SearchConfig,
    model::{
        graph::{RawEdge, StreetGraph},
        path::Path,
        RouteError,
    },
};

/// computes the fastest, best-lit and balanced routes from `source` to `target` using
/// the default [`SearchConfig`].
///
/// # Arguments
///
/// * `node_count` - number of nodes, ids are `[0, node_count)`
/// * `edge_count` - number of entries in `edges`
/// * `light`      - light intensity per node
/// * `crime`      - crime flag per node. flagged nodes are impassable unless they are
///   the source or target
/// * `edges`      - undirected edges with their time cost
/// * `source`     - route origin
/// * `target`     - route destination
///
/// # Returns
///
/// exactly three paths named `fastest`, `best_lit` and `balanced`, in that order. the
/// only error channel is input validation.
pub fn solve(
    node_count: usize,
    edge_count: usize,
    light: &[f64],
    crime: &[bool],
    edges: &[RawEdge],
    source: usize,
    target: usize,
) -> Result<Vec<Path>, RouteError> {
    solve_with_config(
        node_count,
        edge_count,
        light,
        crime,
        edges,
        source,
        target,
        &SearchConfig::default(),
    )
}

/// [`solve`] with explicit search parameters.
#[allow(clippy::too_many_arguments)]
pub fn solve_with_config(
    node_count: usize,
    edge_count: usize,
    light: &[f64],
    crime: &[bool],
    edges: &[RawEdge],
    source: usize,
    target: usize,
    config: &SearchConfig,
) -> Result<Vec<Path>, RouteError> {
    config.validate()?;
    if edge_count != edges.len() {
        return Err(RouteError::EdgeCountMismatch {
            expected: edge_count,
            found: edges.len(),
        });
    }
    for (node, context) in [(source, "source"), (target, "target")] {
        if node >= node_count {
            return Err(RouteError::NodeOutOfRange {
                node,
                node_count,
                context: String::from(context),
            });
        }
    }
    let graph = StreetGraph::try_new(node_count, light, crime, edges)?;

    let bounds = LowerBounds::new(&graph, target);
    let result = BiCriteriaSearch::new(&graph, &bounds, source, target, config).run();
    match picks::pick_paths(&result) {
        Some(paths) => Ok(paths),
        None => Ok(fallback::fallback_paths(&graph, source, target, config)),
    }
}
