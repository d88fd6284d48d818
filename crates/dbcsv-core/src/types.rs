//! Typed cell values and the per-row `Record` map.
//!
//! `Value` is a closed set; downstream code matches it exhaustively. Its
//! `Display` impl is the canonical text form written to CSV cells.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::CoerceError;
use crate::schema::ColumnType;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i32),
    UInt(u32),
    Float(f32),
    Str(String),
}

/// One logical row: column name → value.
pub type Record = HashMap<String, Value>;

impl Value {
    /// Coerce already-trimmed field text into the declared column type.
    ///
    /// Numeric parsing is plain base-10 with no locale handling and no
    /// widening; anything that does not fit the 32-bit target is an error.
    pub fn parse(text: &str, column_type: &ColumnType) -> Result<Value, CoerceError> {
        match column_type {
            ColumnType::Int => text
                .parse::<i32>()
                .map(Value::Int)
                .map_err(|e| CoerceError::new(column_type.clone(), text, e)),
            // Unsigned columns take no sign at all, `+` included.
            ColumnType::UInt if text.starts_with('+') => Err(CoerceError::new(
                column_type.clone(),
                text,
                "unexpected sign",
            )),
            ColumnType::UInt => text
                .parse::<u32>()
                .map(Value::UInt)
                .map_err(|e| CoerceError::new(column_type.clone(), text, e)),
            ColumnType::Float => parse_f32(text)
                .map(Value::Float)
                .map_err(|reason| CoerceError::new(column_type.clone(), text, reason)),
            ColumnType::String | ColumnType::LocString | ColumnType::Other(_) => {
                Ok(Value::Str(text.to_string()))
            }
        }
    }
}

// `str::parse::<f32>` saturates out-of-range literals to infinity; only an
// explicit inf/infinity literal may produce one.
fn parse_f32(text: &str) -> Result<f32, String> {
    let v = text.parse::<f32>().map_err(|e| e.to_string())?;
    if v.is_infinite() {
        let lit = text.trim_start_matches(['+', '-']).to_ascii_lowercase();
        if lit != "inf" && lit != "infinity" {
            return Err("value out of range".into());
        }
    }
    Ok(v)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}
