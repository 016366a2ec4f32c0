use super::{Adjacency, RawEdge};
use crate::model::{RouteCost, RouteError};

/// undirected street graph with per-node light intensity and crime flags.
///
/// edges incident to a crime-flagged node are dropped at construction time, even when
/// that node is later used as a search source or target. those exceptions are a concern
/// of the search expansion policy, see [`StreetGraph::is_traversable`].
#[derive(Debug, Clone)]
pub struct StreetGraph {
    adjacency: Vec<Vec<Adjacency>>,
    light: Vec<f64>,
    forbidden: Vec<bool>,
    max_light: f64,
}

impl StreetGraph {
    /// builds the adjacency lists after validating all inputs.
    ///
    /// # Arguments
    ///
    /// * `node_count` - number of nodes, ids are `[0, node_count)`
    /// * `light`      - light intensity per node, finite and non-negative
    /// * `crime`      - crime flag per node, flagged nodes become impassable
    /// * `edges`      - undirected edges with non-negative time costs
    pub fn try_new(
        node_count: usize,
        light: &[f64],
        crime: &[bool],
        edges: &[RawEdge],
    ) -> Result<StreetGraph, RouteError> {
        check_length("light", node_count, light.len())?;
        check_length("crime", node_count, crime.len())?;
        if let Some((node, value)) = light
            .iter()
            .enumerate()
            .find(|(_, l)| !l.is_finite() || **l < 0.0)
        {
            return Err(RouteError::InvalidLight(node, *value));
        }

        let mut adjacency: Vec<Vec<Adjacency>> = vec![vec![]; node_count];
        let mut dropped = 0;
        for (index, edge) in edges.iter().enumerate() {
            for node in [edge.src, edge.dst] {
                if node >= node_count {
                    return Err(RouteError::NodeOutOfRange {
                        node,
                        node_count,
                        context: format!("edge {index}"),
                    });
                }
            }
            if !edge.time.is_finite() || edge.time < 0.0 {
                return Err(RouteError::InvalidEdgeCost {
                    index,
                    src: edge.src,
                    dst: edge.dst,
                    time: edge.time,
                });
            }
            if crime[edge.src] || crime[edge.dst] {
                dropped += 1;
                continue;
            }
            adjacency[edge.src].push(Adjacency {
                dst: edge.dst,
                time: edge.time,
            });
            adjacency[edge.dst].push(Adjacency {
                dst: edge.src,
                time: edge.time,
            });
        }
        if dropped > 0 {
            log::debug!("dropped {dropped} edges incident to crime-flagged nodes");
        }

        let max_light = light.iter().copied().fold(0.0, f64::max);
        let max_light = if max_light <= 0.0 { 1.0 } else { max_light };

        Ok(StreetGraph {
            adjacency,
            light: light.to_vec(),
            forbidden: crime.to_vec(),
            max_light,
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// the light value every edge darkness is measured against.
    pub fn max_light(&self) -> f64 {
        self.max_light
    }

    pub fn neighbors(&self, node: usize) -> &[Adjacency] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_forbidden(&self, node: usize) -> bool {
        self.forbidden.get(node).copied().unwrap_or(false)
    }

    /// crime-flagged nodes may only be entered when they are the query endpoints.
    pub fn is_traversable(&self, node: usize, source: usize, target: usize) -> bool {
        node == source || node == target || !self.is_forbidden(node)
    }

    /// darkness cost of the edge between `src` and `dst`, derived from the endpoint lights.
    pub fn darkness(&self, src: usize, dst: usize) -> f64 {
        let avg_light = 0.5 * (self.light[src] + self.light[dst]);
        (self.max_light - avg_light).max(0.0)
    }

    /// cheapest time over the (possibly parallel) adjacencies from `src` to `dst`.
    pub fn edge_time(&self, src: usize, dst: usize) -> Option<f64> {
        self.neighbors(src)
            .iter()
            .filter(|adj| adj.dst == dst)
            .map(|adj| adj.time)
            .reduce(f64::min)
    }

    /// sums time and darkness along a node sequence. returns None if two consecutive
    /// nodes are not adjacent in the filtered graph.
    pub fn path_cost(&self, nodes: &[usize]) -> Option<RouteCost> {
        nodes
            .windows(2)
            .try_fold(RouteCost::default(), |acc, pair| {
                let time = self.edge_time(pair[0], pair[1])?;
                Some(acc.extend(time, self.darkness(pair[0], pair[1])))
            })
    }
}

fn check_length(attribute: &str, expected: usize, found: usize) -> Result<(), RouteError> {
    if expected != found {
        Err(RouteError::AttributeLengthMismatch {
            attribute: attribute.to_string(),
            expected,
            found,
        })
    } else {
        Ok(())
    }
}
