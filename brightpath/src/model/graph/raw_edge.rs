use serde::{Deserialize, Serialize};

/// an undirected edge as supplied by the caller, before any forbidden-node filtering.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RawEdge {
    pub src: usize,
    pub dst: usize,
    pub time: f64,
}

impl RawEdge {
    pub fn new(src: usize, dst: usize, time: f64) -> RawEdge {
        RawEdge { src, dst, time }
    }
}

impl From<(usize, usize, f64)> for RawEdge {
    fn from((src, dst, time): (usize, usize, f64)) -> Self {
        RawEdge { src, dst, time }
    }
}
