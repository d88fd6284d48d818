#![forbid(unsafe_code)]
//! dbcsv-io: the CSV tabular adapter.
//!
//! - `writers`: `CsvRecordWriter` (schema → header row, records → rows).
//! - `readers`: `CsvRecordReader` (header row → names, rows → typed records).
//! - `convert`: `CsvConverter`, a reader and a writer driven together.
//! - `traits`: the `RecordWriter`/`RecordReader` seams the host tool calls.

pub mod convert;
pub mod error;
pub mod readers;
pub mod traits;
pub mod writers;

pub use convert::CsvConverter;
pub use error::{Error, Result};
pub use readers::csv::CsvRecordReader;
pub use traits::{RecordReader, RecordWriter};
pub use writers::csv::CsvRecordWriter;
