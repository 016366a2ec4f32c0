use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// stable index of a [`super::Label`] in its [`super::LabelArena`]. ids are never reused,
/// so predecessor links stay valid after frontier pruning.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelId(pub usize);

impl Display for LabelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
