//! A reader and a writer driven as one session.
//!
//! The two sides are built from their own configs and share no state; the
//! caller decides which schema each side sees.

use std::io::{Read, Write};

use dbcsv_core::config::{ReaderConfig, WriterConfig};
use dbcsv_core::schema::Schema;

use crate::error::Result;
use crate::readers::csv::CsvRecordReader;
use crate::writers::csv::CsvRecordWriter;

pub struct CsvConverter<R: Read, W: Write> {
    reader: CsvRecordReader<R>,
    writer: CsvRecordWriter<W>,
}

impl<R: Read, W: Write> CsvConverter<R, W> {
    pub fn new(reader: R, reader_cfg: ReaderConfig, writer: W, writer_cfg: WriterConfig) -> Self {
        Self {
            reader: CsvRecordReader::with_config(reader, reader_cfg),
            writer: CsvRecordWriter::with_config(writer, writer_cfg),
        }
    }

    pub fn reader_mut(&mut self) -> &mut CsvRecordReader<R> {
        &mut self.reader
    }

    pub fn writer_mut(&mut self) -> &mut CsvRecordWriter<W> {
        &mut self.writer
    }

    /// Write `schema`'s header, pump every input record through, and flush.
    /// Returns the number of records converted. Stops at the first error.
    pub fn convert_all(&mut self, schema: &Schema) -> Result<u64> {
        self.writer.write_header(schema, &schema.column_map())?;
        self.reader.read_header()?;
        while let Some(record) = self.reader.read_record()? {
            self.writer.write_record(&record)?;
        }
        self.writer.write_footer()?;
        self.reader.close()?;
        Ok(self.writer.records_written())
    }

    pub fn into_parts(self) -> (CsvRecordReader<R>, CsvRecordWriter<W>) {
        (self.reader, self.writer)
    }
}
