use super::PickName;
use serde::{Deserialize, Serialize};

/// a named route produced at the end of a query.
///
/// `chosen_label_index` is the position of the chosen label in the target frontier.
/// routes produced by the fallback solver report `0`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Path {
    pub name: PickName,
    pub chosen_label_index: usize,
    pub node_sequence: Vec<usize>,
    pub total_time: f64,
    pub total_dark: f64,
}
