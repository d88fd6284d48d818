#![forbid(unsafe_code)]
//! dbcsv: typed CSV adapter for record-oriented data-file conversion.
//!
//! Facade over the workspace crates; see `dbcsv-core` for the data model
//! and `dbcsv-io` for the reader/writer.

pub use dbcsv_core::config::{ReaderConfig, WriterConfig};
pub use dbcsv_core::schema::{ColumnDef, ColumnMap, ColumnType, Schema};
pub use dbcsv_core::types::{Record, Value};
pub use dbcsv_core::yaml::{load_yaml_schema, parse_yaml_schema};
pub use dbcsv_io::{
    CsvConverter, CsvRecordReader, CsvRecordWriter, Error, RecordReader, RecordWriter, Result,
};
