pub mod cost;
pub mod graph;
pub mod label;
pub mod path;
mod route_error;

pub use cost::RouteCost;
pub use route_error::RouteError;
