use thiserror::Error;

use crate::schema::ColumnType;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error with context chain for better debugging
    #[error("Error in {context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// A field's text could not be converted to its declared column type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {expected} value '{value}': {reason}")]
pub struct CoerceError {
    pub expected: ColumnType,
    pub value: String,
    pub reason: String,
}

impl CoerceError {
    pub fn new(expected: ColumnType, value: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            expected,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

impl Error {
    /// Add context to an error, creating an error chain.
    ///
    /// # Example
    /// ```rust,no_run
    /// use dbcsv_core::error::Error;
    /// let err = Error::Schema("duplicate column 'id'".into());
    /// let err = err.with_context("while loading schema.yaml");
    /// ```
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self) as Box<dyn std::error::Error + Send + Sync>,
        }
    }

    /// Get suggestions for common errors.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Error::Schema(msg) => {
                if msg.contains("duplicate") {
                    vec!["Column names must be unique within a schema".into()]
                } else if msg.contains("column") {
                    vec!["Check that every column has a non-empty name".into()]
                } else {
                    vec![]
                }
            }
            Error::Config(msg) if msg.contains("delimiter") => {
                vec!["The delimiter must be a single ASCII character, e.g. ',' or ';'".into()]
            }
            Error::Yaml(_) => vec![
                "Expected a top-level `columns:` list of {name, type} entries".into(),
                "Supported types: int, uint, float, string, locstring".into(),
            ],
            _ => vec![],
        }
    }
}
