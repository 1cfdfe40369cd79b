use thiserror::Error;

/// Error type for key generation, encoding, and storage operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Key generation failed; the underlying cause is carried as text only.
    #[error("Key generation error: {0}")]
    GenerationError(String),

    /// File open/read/write failure, wrapping the platform error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The expected armor/delimiter structure is absent or mislabeled.
    #[error("Format error: {0}")]
    FormatError(String),

    /// A payload was located but is structurally invalid for the target
    /// shape.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Serializing an in-memory key failed.
    #[error("Encode error: {0}")]
    EncodeError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
