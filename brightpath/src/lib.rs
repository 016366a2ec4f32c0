pub mod algorithm;
pub mod app;
pub mod config;
pub mod model;

pub use app::{solve, solve_with_config};
pub use config::SearchConfig;
pub use model::{
    graph::RawEdge,
    path::{Path, PickName},
    RouteError,
};
