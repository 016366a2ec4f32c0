pub mod extraction;
pub mod fallback;
pub mod heuristic;
pub mod picks;
pub mod search;
