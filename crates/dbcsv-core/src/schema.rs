//! Column schema types. Pure data; no CSV dependency here.
//!
//! A `Schema` is the ordered column list (the single source of truth for
//! emission order on write). A `ColumnMap` is the same descriptors keyed by
//! name, used for read-time coercion.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declared semantic type of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    Int,
    UInt,
    Float,
    String,
    LocString,
    /// A type name outside the known set; values are kept as text.
    Other(String),
}

impl ColumnType {
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::Int => "int",
            ColumnType::UInt => "uint",
            ColumnType::Float => "float",
            ColumnType::String => "string",
            ColumnType::LocString => "locstring",
            ColumnType::Other(name) => name,
        }
    }

    /// Map a declared type name to a column type; unknown names become `Other`.
    pub fn from_name(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "int" | "int32" | "i32" => ColumnType::Int,
            "uint" | "uint32" | "u32" => ColumnType::UInt,
            "float" | "float32" | "f32" => ColumnType::Float,
            "string" | "str" => ColumnType::String,
            "locstring" => ColumnType::LocString,
            _ => ColumnType::Other(s.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::UInt | ColumnType::Float)
    }
}

impl FromStr for ColumnType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for ColumnType {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl From<ColumnType> for String {
    fn from(t: ColumnType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Name-keyed lookup of column descriptors.
pub type ColumnMap = HashMap<String, ColumnDef>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<ColumnDef>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Column names in declared order.
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Build the name-keyed lookup. Later duplicates overwrite earlier ones.
    pub fn column_map(&self) -> ColumnMap {
        self.columns
            .iter()
            .map(|c| (c.name.clone(), c.clone()))
            .collect()
    }
}

impl FromIterator<ColumnDef> for Schema {
    fn from_iter<I: IntoIterator<Item = ColumnDef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
