//! Writing formatted records to an output sink.
//!
//! ```rust
//! use sample_csv::{CsvOptions, CsvWriter, Schema};
//!
//! let mut writer = CsvWriter::new(Vec::new(), CsvOptions::new());
//! writer.write_header(&Schema::new(["name", "note"])).unwrap();
//! writer.write_fields(["alice", "says \"hi\""]).unwrap();
//! assert_eq!(writer.records_written(), 1);
//!
//! let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
//! assert_eq!(out, "name,note\nalice,\"says \"\"hi\"\"\"\n");
//! ```

use crate::format::format_line_with;
use crate::options::CsvOptions;
use crate::schema::Schema;
use crate::ser::to_fields;
use crate::{Error, Result};
use serde::Serialize;
use std::io::Write;

/// Writes one line per record, each followed by `\n`.
pub struct CsvWriter<W: Write> {
    sink: W,
    options: CsvOptions,
    line: String,
    records: usize,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(sink: W, options: CsvOptions) -> Self {
        CsvWriter {
            sink,
            options,
            line: String::with_capacity(256),
            records: 0,
        }
    }

    /// Writes the schema's column names. The header is not counted as a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink fails.
    pub fn write_header(&mut self, schema: &Schema) -> Result<()> {
        self.line = schema.header(self.options.delimiter.as_char());
        self.emit()
    }

    /// Formats and writes one record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink fails.
    pub fn write_fields<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line = format_line_with(fields, &self.options);
        self.emit()?;
        self.records += 1;
        Ok(())
    }

    /// Flattens `value` with [`to_fields`] and writes it as one record.
    ///
    /// # Errors
    ///
    /// Fails if the value has no flat representation or the sink fails.
    pub fn serialize<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let fields = to_fields(value)?;
        self.write_fields(&fields)
    }

    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink fails.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush().map_err(|e| Error::io(&e.to_string()))
    }

    /// Number of records written, excluding any header.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records
    }

    /// Flushes and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the final flush fails.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.sink)
    }

    fn emit(&mut self) -> Result<()> {
        self.line.push('\n');
        self.sink
            .write_all(self.line.as_bytes())
            .map_err(|e| Error::io(&e.to_string()))
    }
}
