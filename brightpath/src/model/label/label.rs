use super::LabelId;
use crate::model::RouteCost;

/// a partial route arriving at `node`. following `predecessor` back to a label with
/// no predecessor yields the route from the search source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    pub cost: RouteCost,
    pub node: usize,
    pub predecessor: Option<LabelId>,
}

impl Label {
    pub fn seed(node: usize, cost: RouteCost) -> Label {
        Label {
            cost,
            node,
            predecessor: None,
        }
    }
}
