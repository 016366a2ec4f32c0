use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("node {node} referenced by {context} is outside of the graph with {node_count} nodes")]
    NodeOutOfRange {
        node: usize,
        node_count: usize,
        context: String,
    },
    #[error("edge {index} ({src}, {dst}) has invalid time cost {time}, must be finite and non-negative")]
    InvalidEdgeCost {
        index: usize,
        src: usize,
        dst: usize,
        time: f64,
    },
    #[error("node {0} has invalid light value {1}, must be finite and non-negative")]
    InvalidLight(usize, f64),
    #[error("expected {expected} {attribute} values (one per node), found {found}")]
    AttributeLengthMismatch {
        attribute: String,
        expected: usize,
        found: usize,
    },
    #[error("edge count {expected} does not match the {found} edges provided")]
    EdgeCountMismatch { expected: usize, found: usize },
    #[error("invalid search configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading configuration: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
