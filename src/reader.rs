//! Streaming reads of logical records from line-oriented input.
//!
//! A logical record normally occupies one physical line. When a quoted field
//! contains a raw line break, the record continues on the following physical
//! lines; [`RecordReader`] keeps pulling lines from its source until the
//! quote is closed and a terminator is reached outside it.
//!
//! ```rust
//! use sample_csv::{Record, RecordReader};
//!
//! let input = "a,,\"c\nd\",e\n\n";
//! let mut reader = RecordReader::new(input.as_bytes(), ',');
//!
//! assert_eq!(reader.read_record().unwrap(), Record::Fields(vec![
//!     "a".into(), "".into(), "c\nd".into(), "e".into(),
//! ]));
//! // blank line: one empty field
//! assert_eq!(reader.read_record().unwrap(), Record::Fields(vec!["".into()]));
//! // exhausted, on every further call
//! assert_eq!(reader.read_record().unwrap(), Record::EndOfInput);
//! assert_eq!(reader.read_record().unwrap(), Record::EndOfInput);
//! ```

use crate::de::from_fields;
use crate::options::{CsvOptions, LineBreaks};
use crate::scan::{Scanner, Step};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::io::BufRead;

/// Result of one streaming read.
///
/// End of input and a blank line are different things: the first is
/// [`Record::EndOfInput`], the second is a record with a single empty field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    /// The source is exhausted; returned again on every further read.
    EndOfInput,
    /// One logical record. A blank line is a single empty field.
    Fields(Vec<String>),
}

impl Record {
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Record::EndOfInput)
    }

    /// Converts to a plain field vector; end of input becomes the empty vector.
    #[must_use]
    pub fn into_fields(self) -> Vec<String> {
        match self {
            Record::EndOfInput => Vec::new(),
            Record::Fields(fields) => fields,
        }
    }

    /// Returns the fields, or `None` at end of input.
    #[must_use]
    pub fn fields(&self) -> Option<&[String]> {
        match self {
            Record::EndOfInput => None,
            Record::Fields(fields) => Some(fields),
        }
    }
}

/// Reads logical records from a [`BufRead`] source.
///
/// The reader buffers at most one physical line. After each call it sits just
/// past the terminator of the last line consumed for the returned record, so
/// consecutive calls compose.
pub struct RecordReader<R> {
    source: R,
    delimiter: char,
    line_breaks: LineBreaks,
    buf: String,
    pos: usize,
    /// 1-based number of the physical line under the cursor.
    line: usize,
    exhausted: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Creates a reader that keeps raw line breaks and backslash text as-is.
    pub fn new(source: R, delimiter: char) -> Self {
        RecordReader {
            source,
            delimiter,
            line_breaks: LineBreaks::Raw,
            buf: String::new(),
            pos: 0,
            line: 1,
            exhausted: false,
        }
    }

    /// Creates a reader using the delimiter and line-break policy from `options`.
    ///
    /// With [`LineBreaks::Escaped`] the literals `\n` and `\r` inside quoted
    /// fields are decoded as well; raw line breaks still continue the record.
    pub fn with_options(source: R, options: &CsvOptions) -> Self {
        let mut reader = Self::new(source, options.delimiter.as_char());
        reader.line_breaks = options.line_breaks;
        reader
    }

    /// Physical line number of the next character to be read.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Reads the next logical record.
    ///
    /// # Errors
    ///
    /// - [`Error::UnterminatedOrMisplacedQuote`] for a misplaced quote
    /// - [`Error::UnexpectedEndOfInput`] if the source ends inside a quoted field
    /// - [`Error::Io`] if the source fails or is not valid UTF-8
    pub fn read_record(&mut self) -> Result<Record> {
        let start_line = self.line;
        let mut scanner = Scanner::new(self.delimiter, self.line_breaks, start_line);

        loop {
            let ch = match self.next_char()? {
                Some(ch) => ch,
                None => {
                    if scanner.is_quote_open() {
                        return Err(Error::unexpected_eof(scanner.line(), scanner.partial_field()));
                    }
                    return Ok(match scanner.end_of_input() {
                        Some(fields) => Record::Fields(fields),
                        None => Record::EndOfInput,
                    });
                }
            };

            if ch == '\n' {
                self.line += 1;
                if scanner.is_quote_open() {
                    log::trace!("quoted field continues on line {}", self.line);
                }
            }

            let step = match scanner.feed(ch) {
                Ok(step) => step,
                Err(e) => {
                    self.skip_line();
                    return Err(e);
                }
            };
            if step == Step::Terminated {
                if ch == '\r' {
                    if self.peek_char() == Some('\n') {
                        self.pos += 1;
                    }
                    self.line += 1;
                }
                if self.line - start_line > 1 {
                    log::debug!("record spanned lines {}..{}", start_line, self.line - 1);
                }
                return Ok(Record::Fields(scanner.take_record()));
            }
        }
    }

    /// Reads the next record and maps it onto `T`.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn deserialize<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        match self.read_record()? {
            Record::EndOfInput => Ok(None),
            Record::Fields(fields) => from_fields(&fields).map(Some),
        }
    }

    /// Iterates over the remaining records until end of input.
    pub fn records(&mut self) -> Records<'_, R> {
        Records { reader: self }
    }

    /// Returns the source, positioned just after the last terminator consumed.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Drops the rest of the buffered physical line so the next read starts
    /// on a fresh line after a malformed record.
    fn skip_line(&mut self) {
        if self.buf[self.pos..].ends_with(|c: char| c == '\n' || c == '\r') {
            self.line += 1;
        }
        self.pos = self.buf.len();
    }

    fn peek_char(&self) -> Option<char> {
        self.buf[self.pos..].chars().next()
    }

    fn next_char(&mut self) -> Result<Option<char>> {
        if self.pos >= self.buf.len() && !self.fill()? {
            return Ok(None);
        }
        let ch = self.peek_char();
        if let Some(ch) = ch {
            self.pos += ch.len_utf8();
        }
        Ok(ch)
    }

    /// Loads the next physical line, up to and including its LF, CR or CRLF
    /// terminator. Returns `false` once the source is exhausted.
    ///
    /// Bytes are consumed from the source only as far as that terminator, so
    /// the source never runs ahead of the last record returned.
    fn fill(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        let mut bytes = Vec::new();
        loop {
            let available = self.source.fill_buf()?;
            if available.is_empty() {
                break;
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    let cr = available[i] == b'\r';
                    bytes.extend_from_slice(&available[..=i]);
                    self.source.consume(i + 1);
                    if cr && self.source.fill_buf()?.first() == Some(&b'\n') {
                        bytes.push(b'\n');
                        self.source.consume(1);
                    }
                    break;
                }
                None => {
                    let n = available.len();
                    bytes.extend_from_slice(available);
                    self.source.consume(n);
                }
            }
        }
        if bytes.is_empty() {
            self.exhausted = true;
            return Ok(false);
        }
        self.buf = String::from_utf8(bytes).map_err(|e| Error::io(&e.to_string()))?;
        self.pos = 0;
        Ok(true)
    }
}

/// Iterator returned by [`RecordReader::records`].
///
/// A malformed record is yielded as an error and iteration resumes on the
/// next physical line. An I/O error ends the iteration.
pub struct Records<'r, R> {
    reader: &'r mut RecordReader<R>,
}

impl<'r, R: BufRead> Iterator for Records<'r, R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record() {
            Ok(Record::EndOfInput) => None,
            Ok(Record::Fields(fields)) => Some(Ok(fields)),
            Err(e) => {
                if !e.is_parse_error() {
                    self.reader.exhausted = true;
                    self.reader.pos = self.reader.buf.len();
                }
                Some(Err(e))
            }
        }
    }
}
