#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The compressed-row arrays do not describe a well-formed matrix.
    #[error("malformed sparse matrix: {0}")]
    Shape(String),
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    Dimension { expected: usize, actual: usize },
    #[error("graph has no nodes")]
    DegenerateGraph,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
