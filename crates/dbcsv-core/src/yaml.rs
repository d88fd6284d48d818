//! YAML → `Schema` loader.
//!
//! Example:
//! ```yaml
//! columns:
//!   - { name: "id",   type: "uint" }
//!   - { name: "name", type: "locstring" }
//!   - { name: "rate", type: "float" }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::schema::{ColumnDef, Schema};

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaFile {
    pub columns: Vec<ColumnDef>,
}

pub fn parse_yaml_schema(yaml: &str) -> Result<Schema> {
    let file: SchemaFile = serde_yaml::from_str(yaml)?;
    validate(&file.columns)?;
    Ok(Schema::new(file.columns))
}

pub fn load_yaml_schema(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("cannot read schema file {}: {e}", path.display()))
    })?;
    parse_yaml_schema(&yaml).map_err(|e| e.with_context(format!("schema {}", path.display())))
}

fn validate(columns: &[ColumnDef]) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, c) in columns.iter().enumerate() {
        if c.name.trim().is_empty() {
            return Err(Error::Schema(format!("column #{i} has an empty name")));
        }
        if !seen.insert(c.name.as_str()) {
            return Err(Error::Schema(format!("duplicate column '{}'", c.name)));
        }
    }
    Ok(())
}
