use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// why the frontier search loop stopped.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// the open set was drained
    Exhausted,
    /// a target label was popped while the target frontier held enough labels
    TargetLabelGoal,
    /// the iteration limit was reached
    IterationLimit,
    /// the wall-clock budget ran out
    Deadline,
}

impl Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TerminationReason::Exhausted => "open set exhausted",
            TerminationReason::TargetLabelGoal => "target label goal reached",
            TerminationReason::IterationLimit => "iteration limit reached",
            TerminationReason::Deadline => "runtime budget exceeded",
        };
        write!(f, "{s}")
    }
}
