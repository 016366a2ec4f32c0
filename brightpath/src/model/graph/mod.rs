mod adjacency;
mod raw_edge;
mod street_graph;

pub use adjacency::Adjacency;
pub use raw_edge::RawEdge;
pub use street_graph::StreetGraph;
