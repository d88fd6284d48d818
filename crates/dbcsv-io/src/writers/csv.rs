//! Streaming CSV writer from `Record`s.
//!
//! The column order is taken from the schema once, when the header is
//! written, and every later row is emitted in exactly that order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv as csv_crate;
use dbcsv_core::config::WriterConfig;
use dbcsv_core::schema::{ColumnMap, Schema};
use dbcsv_core::types::Record;

use crate::error::{Error, Result};
use crate::traits::RecordWriter;

pub struct CsvRecordWriter<W: Write> {
    wtr: csv_crate::Writer<W>,
    missing: String,
    column_order: Option<Vec<String>>,
    written: u64,
}

impl CsvRecordWriter<File> {
    pub fn to_path(path: impl AsRef<Path>, config: WriterConfig) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_config(file, config))
    }
}

impl<W: Write> CsvRecordWriter<W> {
    pub fn to_writer(writer: W) -> Self {
        Self::with_config(writer, WriterConfig::default())
    }

    pub fn with_config(writer: W, config: WriterConfig) -> Self {
        let wtr = csv_crate::WriterBuilder::new()
            .delimiter(config.delimiter)
            .from_writer(writer);
        Self {
            wtr,
            missing: config.missing,
            column_order: None,
            written: 0,
        }
    }

    /// Persist the emission order from `schema` and write the header row.
    /// The column map carries no information the CSV header can hold.
    pub fn write_header(&mut self, schema: &Schema, _columns: &ColumnMap) -> Result<()> {
        if self.column_order.is_some() {
            return Err(Error::State("write_header called twice"));
        }
        let order = schema.column_names();
        self.wtr.write_record(&order).map_err(Error::WriteHeader)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(columns = order.len(), "wrote CSV header");

        self.column_order = Some(order);
        Ok(())
    }

    /// Write one row; absent columns get the configured placeholder.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let order = self
            .column_order
            .as_ref()
            .ok_or(Error::State("write_record called before write_header"))?;

        let mut row = Vec::with_capacity(order.len());
        for name in order {
            match record.get(name) {
                Some(v) => row.push(v.to_string()),
                None => row.push(self.missing.clone()),
            }
        }
        self.wtr.write_record(&row).map_err(Error::WriteRecord)?;
        self.written += 1;
        Ok(())
    }

    pub fn write_footer(&mut self) -> Result<()> {
        self.wtr.flush().map_err(Error::Flush)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(records = self.written, "flushed CSV output");

        Ok(())
    }

    /// Emission order, once the header has been written.
    pub fn column_order(&self) -> Option<&[String]> {
        self.column_order.as_deref()
    }

    pub fn records_written(&self) -> u64 {
        self.written
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.wtr.into_inner().map_err(|e| Error::Flush(e.into_error()))
    }
}

impl<W: Write> RecordWriter for CsvRecordWriter<W> {
    fn write_header(&mut self, schema: &Schema, columns: &ColumnMap) -> Result<()> {
        CsvRecordWriter::write_header(self, schema, columns)
    }

    fn write_record(&mut self, record: &Record) -> Result<()> {
        CsvRecordWriter::write_record(self, record)
    }

    fn write_footer(&mut self) -> Result<()> {
        CsvRecordWriter::write_footer(self)
    }
}
