//! Record-oriented seams the host conversion tool drives.
//!
//! Write sessions: `write_header` once, `write_record` per row,
//! `write_footer` once. Read sessions: `read_header` once, then
//! `read_record` until it yields `None`, then `close`.

use dbcsv_core::schema::{ColumnMap, Schema};
use dbcsv_core::types::Record;

use crate::error::Result;

pub trait RecordWriter {
    /// Fix the column order from `schema` and emit the header.
    fn write_header(&mut self, schema: &Schema, columns: &ColumnMap) -> Result<()>;

    fn write_record(&mut self, record: &Record) -> Result<()>;

    /// Flush buffered output; surfaces any pending sink error.
    fn write_footer(&mut self) -> Result<()>;
}

pub trait RecordReader {
    /// Consume the header and return whatever schema was supplied out of band.
    fn read_header(&mut self) -> Result<(Option<&Schema>, &ColumnMap)>;

    /// `Ok(None)` once the input is exhausted.
    fn read_record(&mut self) -> Result<Option<Record>>;

    fn close(&mut self) -> Result<()>;
}
