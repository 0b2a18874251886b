use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
