mod lower_bounds;
mod reverse_dijkstra;

pub use lower_bounds::LowerBounds;
pub use reverse_dijkstra::reverse_dijkstra;
