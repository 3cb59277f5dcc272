use thiserror::Error;

/// vCard tokenizing and indexing errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid source: {0}")]
    InvalidSource(#[from] std::io::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid line range: {start}..={end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Line {line} does not hold a known field")]
    NotAField { line: usize },

    #[error("Decode error: {0}")]
    Decode(#[from] base64::DecodeError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
