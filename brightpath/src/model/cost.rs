use serde::{Deserialize, Serialize};

/// accumulated (time, darkness) cost of a partial route.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct RouteCost {
    pub time: f64,
    pub dark: f64,
}

impl RouteCost {
    pub fn new(time: f64, dark: f64) -> RouteCost {
        RouteCost { time, dark }
    }

    /// cost after traversing one more edge.
    pub fn extend(&self, time: f64, dark: f64) -> RouteCost {
        RouteCost {
            time: self.time + time,
            dark: self.dark + dark,
        }
    }

    /// weak Pareto dominance with a numerical tolerance. `self` dominates `other` when
    /// it is no worse in both objectives (within `epsilon`) and better than `epsilon`
    /// in at least one of them. costs within `epsilon` of each other never dominate.
    pub fn dominates(&self, other: &RouteCost, epsilon: f64) -> bool {
        let no_worse = self.time <= other.time + epsilon && self.dark <= other.dark + epsilon;
        let better = self.time + epsilon < other.time || self.dark + epsilon < other.dark;
        no_worse && better
    }
}
