use crate::model::{label::LabelId, RouteCost};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// open-set entry for a label. `f_time` and `f_dark` are `g + h` for the label.
#[derive(Debug, Clone, Copy)]
pub struct FrontierItem {
    pub f_time: OrderedFloat<f64>,
    pub f_dark: OrderedFloat<f64>,
    pub node: usize,
    pub label: LabelId,
}

impl FrontierItem {
    pub fn new(g: &RouteCost, h: &RouteCost, node: usize, label: LabelId) -> FrontierItem {
        FrontierItem {
            f_time: OrderedFloat(g.time + h.time),
            f_dark: OrderedFloat(g.dark + h.dark),
            node,
            label,
        }
    }
}

impl Ord for FrontierItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed so that BinaryHeap pops the lexicographically smallest (f_time, f_dark)
        other
            .f_time
            .cmp(&self.f_time)
            .then_with(|| other.f_dark.cmp(&self.f_dark))
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl PartialOrd for FrontierItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierItem {}
