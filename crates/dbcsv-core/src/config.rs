//! Reader/writer configuration.
//!
//! The two sides of a converter are configured independently; nothing here
//! is shared between a reader and a writer.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::Schema;

pub const ENV_DELIMITER: &str = "DBCSV_DELIMITER";
pub const ENV_MISSING: &str = "DBCSV_MISSING";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Text emitted for a schema column the record has no value for.
    pub missing: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing: String::new(),
        }
    }
}

impl WriterConfig {
    /// Defaults overridden by `DBCSV_DELIMITER` / `DBCSV_MISSING`.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(d) = delimiter_from_env()? {
            cfg.delimiter = d;
        }
        if let Ok(m) = env::var(ENV_MISSING) {
            cfg.missing = m;
        }
        Ok(cfg)
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_missing(mut self, missing: impl Into<String>) -> Self {
        self.missing = missing.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    pub delimiter: u8,
    /// Schema used for typed parsing; `None` reads every field as text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            schema: None,
        }
    }
}

impl ReaderConfig {
    /// Defaults overridden by `DBCSV_DELIMITER`.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(d) = delimiter_from_env()? {
            cfg.delimiter = d;
        }
        Ok(cfg)
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Parse a delimiter given as text; it must be exactly one ASCII character.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => Ok(*b),
        _ => Err(Error::Config(format!(
            "invalid delimiter '{s}': expected a single ASCII character other than quote or newline"
        ))),
    }
}

fn delimiter_from_env() -> Result<Option<u8>> {
    match env::var(ENV_DELIMITER) {
        Ok(s) => parse_delimiter(&s).map(Some),
        Err(_) => Ok(None),
    }
}
