//! Error types for delimited record parsing and mapping.
//!
//! ## Error Categories
//!
//! - **Quote errors**: a quote character where the grammar does not allow one
//! - **End of input**: the source ran dry while a quoted field was still open
//! - **Mapping errors**: wrong field count or an unparsable typed field
//! - **I/O errors**: reading from a source or writing to a sink failed
//!
//! The two parse kinds are fatal to the record being read. No partial record
//! is ever returned alongside them; the caller decides whether to skip the
//! record or abort the whole read.
//!
//! ## Examples
//!
//! ```rust
//! use sample_csv::{split_line, Error};
//!
//! let err = split_line("a\"b", ',').unwrap_err();
//! assert!(matches!(err, Error::UnterminatedOrMisplacedQuote { .. }));
//! assert!(err.is_parse_error());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while reading, writing or mapping records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A quote appeared mid-field, content followed a closing quote, or a
    /// quoted field was never closed on a single line.
    #[error("Misplaced or unterminated quote at line {line}, column {col}: [{context}]")]
    UnterminatedOrMisplacedQuote {
        line: usize,
        col: usize,
        context: String,
    },

    /// The source was exhausted while a quoted field was still open.
    #[error("Unexpected end of input at line {line}: missing closing quote in field [\"{context}]")]
    UnexpectedEndOfInput { line: usize, context: String },

    /// Delimiter collides with the quote character or a line terminator.
    #[error("Invalid delimiter {0:?}: must not be a quote or line break")]
    InvalidDelimiter(char),

    /// Record has a different number of fields than the target type.
    #[error("Field count mismatch: expected {expected}, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A field could not be converted to the requested type.
    #[error("Invalid field at index {index}: expected {expected}, found {found:?}")]
    InvalidField {
        index: usize,
        expected: String,
        found: String,
    },

    /// Value shape that has no flat field representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a misplaced/unterminated quote error.
    ///
    /// `context` is the field text accumulated before the offending character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sample_csv::Error;
    ///
    /// let err = Error::misplaced_quote(1, 2, "a");
    /// assert!(err.to_string().contains("column 2"));
    /// ```
    pub fn misplaced_quote(line: usize, col: usize, context: &str) -> Self {
        Error::UnterminatedOrMisplacedQuote {
            line,
            col,
            context: context.to_string(),
        }
    }

    /// Creates an end-of-input error for a quoted field left open.
    pub fn unexpected_eof(line: usize, context: &str) -> Self {
        Error::UnexpectedEndOfInput {
            line,
            context: context.to_string(),
        }
    }

    pub fn field_count(expected: usize, found: usize) -> Self {
        Error::FieldCount { expected, found }
    }

    /// Creates an error for a field whose text does not parse as `expected`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sample_csv::Error;
    ///
    /// let err = Error::invalid_field(3, "u64", "abc");
    /// assert!(err.to_string().contains("index 3"));
    /// ```
    pub fn invalid_field(index: usize, expected: &str, found: &str) -> Self {
        Error::InvalidField {
            index,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for the two record-level parse failures.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::UnterminatedOrMisplacedQuote { .. } | Error::UnexpectedEndOfInput { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
