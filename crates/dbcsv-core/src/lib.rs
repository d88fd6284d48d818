#![forbid(unsafe_code)]
//! dbcsv-core: shared kernel for the dbcsv tabular adapter.
//!
//! This crate contains only *pure* types and small helpers. There is **no
//! CSV handling** here; the adapter itself lives in `dbcsv-io`.
//!
//! - `schema`: column types, ordered schemas, and the name-keyed column map.
//! - `types`: the typed `Value` and the `Record` map, plus value coercion.
//! - `yaml`: loading a `Schema` from a YAML column list.
//! - `config`: reader/writer configuration structs.

pub mod config;
pub mod error;
pub mod prelude;
pub mod schema;
pub mod types;
pub mod yaml;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
