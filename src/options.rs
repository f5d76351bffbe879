//! Configuration options for reading and writing delimited records.
//!
//! This module provides types to customize the codec:
//!
//! - [`CsvOptions`]: Main configuration struct
//! - [`Delimiter`]: Validated single-character field separator
//! - [`LineBreaks`]: How line breaks inside quoted fields are represented
//!
//! ## Examples
//!
//! ```rust
//! use sample_csv::{CsvOptions, Delimiter, LineBreaks};
//!
//! // Tab separated, raw embedded newlines, header on the first line
//! let options = CsvOptions::new()
//!     .with_delimiter(Delimiter::TAB)
//!     .with_line_breaks(LineBreaks::Raw)
//!     .with_header(true);
//! assert_eq!(options.delimiter.as_char(), '\t');
//! ```

use crate::{Error, Result};

/// The quote character used to open, close and (doubled) escape quoted fields.
pub const QUOTE: char = '"';

/// Field delimiter.
///
/// Any single character except the quote character, carriage return and line
/// feed. Those three would make the grammar ambiguous and are rejected by
/// [`Delimiter::new`].
///
/// # Examples
///
/// ```rust
/// use sample_csv::Delimiter;
///
/// assert_eq!(Delimiter::default(), Delimiter::COMMA);
/// assert_eq!(Delimiter::new(';').unwrap(), Delimiter::SEMICOLON);
/// assert!(Delimiter::new('"').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Delimiter(char);

impl Delimiter {
    pub const COMMA: Delimiter = Delimiter(',');
    pub const TAB: Delimiter = Delimiter('\t');
    pub const PIPE: Delimiter = Delimiter('|');
    pub const SEMICOLON: Delimiter = Delimiter(';');

    /// Creates a delimiter, rejecting characters that collide with quoting or line breaks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDelimiter`] for `"`, `\r` and `\n`.
    pub fn new(ch: char) -> Result<Self> {
        match ch {
            QUOTE | '\r' | '\n' => Err(Error::InvalidDelimiter(ch)),
            _ => Ok(Delimiter(ch)),
        }
    }

    #[must_use]
    pub const fn as_char(&self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::COMMA
    }
}

impl TryFrom<char> for Delimiter {
    type Error = Error;

    fn try_from(ch: char) -> Result<Self> {
        Delimiter::new(ch)
    }
}

/// Representation of line breaks embedded in quoted fields.
///
/// - **Escaped**: CR and LF are written as the two-character literals `\r`
///   and `\n` so every record fits on one physical line. Readers decode the
///   literals back inside quoted content.
/// - **Raw**: CR and LF are kept as-is inside the quotes and a record may span
///   several physical lines. Readers keep any backslash text literally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineBreaks {
    #[default]
    Escaped,
    Raw,
}

/// Configuration for [`CsvWriter`](crate::CsvWriter), [`RecordReader`](crate::RecordReader)
/// and the crate-level helpers.
///
/// # Examples
///
/// ```rust
/// use sample_csv::{CsvOptions, Delimiter, LineBreaks};
///
/// let options = CsvOptions::new();
/// assert_eq!(options.delimiter, Delimiter::COMMA);
/// assert_eq!(options.line_breaks, LineBreaks::Escaped);
/// assert!(!options.has_header);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CsvOptions {
    pub delimiter: Delimiter,
    pub line_breaks: LineBreaks,
    pub has_header: bool,
}

impl CsvOptions {
    /// Creates default options (comma delimiter, escaped line breaks, no header).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets how line breaks inside quoted fields are written and read back.
    #[must_use]
    pub fn with_line_breaks(mut self, line_breaks: LineBreaks) -> Self {
        self.line_breaks = line_breaks;
        self
    }

    /// Marks the first record of an input as a header line.
    ///
    /// [`from_reader`](crate::from_reader) skips it instead of mapping it.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}
