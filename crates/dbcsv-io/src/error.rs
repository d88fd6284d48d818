use dbcsv_core::error::CoerceError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV header: {0}")]
    WriteHeader(#[source] csv::Error),

    #[error("failed to write CSV record: {0}")]
    WriteRecord(#[source] csv::Error),

    #[error("failed to flush CSV output: {0}")]
    Flush(#[source] std::io::Error),

    #[error("failed to read CSV header: no header row in input")]
    EmptyInput,

    #[error("failed to read CSV header: {0}")]
    ReadHeader(#[source] csv::Error),

    #[error("failed to read CSV record: {0}")]
    ReadRecord(#[source] csv::Error),

    #[error("failed to parse value for column {column}: {source}")]
    Coerce {
        column: String,
        value: String,
        #[source]
        source: CoerceError,
    },

    #[error("invalid call sequence: {0}")]
    State(&'static str),
}

impl Error {
    /// Column name for coercion failures.
    pub fn column(&self) -> Option<&str> {
        match self {
            Error::Coerce { column, .. } => Some(column),
            _ => None,
        }
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }
}
