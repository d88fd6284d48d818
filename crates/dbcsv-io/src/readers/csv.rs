//! Streaming CSV reader → typed `Record`s.
//!
//! Caveats:
//! - CSV carries no type information; typed parsing needs a schema supplied
//!   through `ReaderConfig` or `set_schema`. Unmapped columns stay text.
//! - Rows may be shorter or longer than the header. Extra fields are
//!   dropped and missing trailing columns are simply absent from the record.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv as csv_crate;
use dbcsv_core::config::ReaderConfig;
use dbcsv_core::schema::{ColumnMap, Schema};
use dbcsv_core::types::{Record, Value};

use crate::error::{Error, Result};
use crate::traits::RecordReader;

pub struct CsvRecordReader<R: Read> {
    rdr: csv_crate::Reader<R>,
    schema: Option<Schema>,
    columns: ColumnMap,
    headers: Option<Vec<String>>,
    row: csv_crate::StringRecord,
    index: u64,
    last_line: Option<u64>,
    done: bool,
}

impl CsvRecordReader<File> {
    pub fn from_path(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::with_config(file, config))
    }
}

impl<R: Read> CsvRecordReader<R> {
    /// Reader with no schema; every field is read as text.
    pub fn from_reader(reader: R) -> Self {
        Self::with_config(reader, ReaderConfig::default())
    }

    pub fn with_config(reader: R, config: ReaderConfig) -> Self {
        // Header handling is ours, not the csv crate's: read_header consumes
        // the first row explicitly.
        let rdr = csv_crate::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(config.delimiter)
            .from_reader(reader);

        let columns = config
            .schema
            .as_ref()
            .map(Schema::column_map)
            .unwrap_or_default();

        Self {
            rdr,
            schema: config.schema,
            columns,
            headers: None,
            row: csv_crate::StringRecord::new(),
            index: 0,
            last_line: None,
            done: false,
        }
    }

    pub fn set_schema(&mut self, schema: Schema, columns: ColumnMap) {
        self.schema = Some(schema);
        self.columns = columns;
    }

    /// Read the first row as column names and reset the record counter.
    pub fn read_header(&mut self) -> Result<(Option<&Schema>, &ColumnMap)> {
        let mut rec = csv_crate::StringRecord::new();
        match self.rdr.read_record(&mut rec) {
            Ok(true) => {}
            Ok(false) => return Err(Error::EmptyInput),
            Err(e) => return Err(Error::ReadHeader(e)),
        }

        let headers: Vec<String> = rec.iter().map(str::to_string).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            columns = headers.len(),
            typed = self.columns.len(),
            "read CSV header"
        );

        self.headers = Some(headers);
        self.index = 0;
        self.last_line = rec.position().map(|p| p.line());
        Ok((self.schema.as_ref(), &self.columns))
    }

    /// Read and coerce the next row. `Ok(None)` marks end of input and is
    /// returned again on every later call.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        if self.done {
            return Ok(None);
        }
        let headers = self
            .headers
            .as_ref()
            .ok_or(Error::State("read_record called before read_header"))?;

        match self.rdr.read_record(&mut self.row) {
            Ok(true) => {}
            Ok(false) => {
                self.done = true;
                return Ok(None);
            }
            Err(e) => return Err(Error::ReadRecord(e)),
        }
        self.last_line = self.row.position().map(|p| p.line());

        let mut record = Record::with_capacity(headers.len().min(self.row.len()));
        for (name, field) in headers.iter().zip(self.row.iter()) {
            let text = field.trim();
            let value = match self.columns.get(name) {
                Some(def) => Value::parse(text, &def.column_type).map_err(|source| {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(column = %name, value = text, line = ?self.last_line, "coercion failed");

                    Error::Coerce {
                        column: name.clone(),
                        value: text.to_string(),
                        source,
                    }
                })?,
                None => Value::Str(text.to_string()),
            };
            record.insert(name.clone(), value);
        }

        self.index += 1;
        Ok(Some(record))
    }

    /// Nothing to release: the underlying source belongs to the caller.
    pub fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Header names from the last `read_header`.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn records_read(&self) -> u64 {
        self.index
    }

    /// 1-based input line of the most recently read row.
    pub fn last_line(&self) -> Option<u64> {
        self.last_line
    }

    /// Iterate `read_record` results until end of input.
    pub fn records(&mut self) -> Records<'_, R> {
        Records { reader: self }
    }
}

pub struct Records<'r, R: Read> {
    reader: &'r mut CsvRecordReader<R>,
}

impl<R: Read> Iterator for Records<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_record().transpose()
    }
}

impl<R: Read> RecordReader for CsvRecordReader<R> {
    fn read_header(&mut self) -> Result<(Option<&Schema>, &ColumnMap)> {
        CsvRecordReader::read_header(self)
    }

    fn read_record(&mut self) -> Result<Option<Record>> {
        CsvRecordReader::read_record(self)
    }

    fn close(&mut self) -> Result<()> {
        CsvRecordReader::close(self)
    }
}
