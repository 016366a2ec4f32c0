mod sample;
mod solve;

pub use sample::SampleNetwork;
pub use solve::{solve, solve_with_config};
