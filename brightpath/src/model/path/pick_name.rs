use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the representative routes returned for every query, in output order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PickName {
    Fastest,
    BestLit,
    Balanced,
}

impl PickName {
    pub const ALL: [PickName; 3] = [PickName::Fastest, PickName::BestLit, PickName::Balanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            PickName::Fastest => "fastest",
            PickName::BestLit => "best_lit",
            PickName::Balanced => "balanced",
        }
    }
}

impl Display for PickName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
