use super::TerminationReason;
use crate::model::label::{Label, LabelArena};

/// final state of a frontier search. owns every label created during the search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub arena: LabelArena,
    pub source: usize,
    pub target: usize,
    pub iterations: usize,
    pub termination: TerminationReason,
}

impl SearchResult {
    /// live labels at the target, in frontier order.
    pub fn target_labels(&self) -> Vec<&Label> {
        self.arena.frontier_labels(self.target).collect()
    }

    pub fn found_target(&self) -> bool {
        !self.arena.frontier(self.target).is_empty()
    }
}
