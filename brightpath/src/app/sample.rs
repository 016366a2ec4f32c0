use crate::{
    app::solve_with_config,
    config::SearchConfig,
    model::{graph::RawEdge, path::Path, RouteError},
};
use serde::{Deserialize, Serialize};

/// small in-memory network used by the demo binary. node 1 is crime-flagged and
/// node 5 is the darkest intersection.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SampleNetwork {
    pub light: Vec<f64>,
    pub crime: Vec<bool>,
    pub edges: Vec<RawEdge>,
    pub source: usize,
    pub target: usize,
}

impl Default for SampleNetwork {
    fn default() -> Self {
        let edges = [
            (0, 3, 3.0),
            (2, 3, 5.0),
            (2, 5, 2.0),
            (3, 5, 1.0),
            (5, 4, 1.0),
            (2, 4, 1.0),
        ]
        .into_iter()
        .map(RawEdge::from)
        .collect();
        Self {
            light: vec![1.0, 1.0, 1.0, 0.5, 1.0, 0.2],
            crime: vec![false, true, false, false, false, false],
            edges,
            source: 0,
            target: 4,
        }
    }
}

impl SampleNetwork {
    pub fn solve(&self, config: &SearchConfig) -> Result<Vec<Path>, RouteError> {
        solve_with_config(
            self.light.len(),
            self.edges.len(),
            &self.light,
            &self.crime,
            &self.edges,
            self.source,
            self.target,
            config,
        )
    }
}
