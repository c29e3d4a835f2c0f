use thiserror::Error;

/// Error type for everything the RNA contraction codec can fail on.
#[derive(Debug, Error)]
pub enum RnacError {
    /// The sequence/structure pair cannot be turned into a tree.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// The bit sequence ended early or holds a code no table knows.
    #[error("Undecodable bitstream: {0}")]
    UndecodableBitstream(String),
    /// Reading or writing files (only the file glue raises this).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RnacError>;
