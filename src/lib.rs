//! # sample_csv
//!
//! A delimited-text codec for test-result sample files, with a serde bridge
//! for typed records.
//!
//! ## The format
//!
//! A record is an ordered list of text fields joined by a single delimiter
//! character (comma by default). A field is wrapped in double quotes when it
//! contains the delimiter, a quote, a carriage return or a line feed; quotes
//! inside are doubled.
//!
//! Line breaks inside a quoted field have two representations, selected by
//! [`LineBreaks`]:
//!
//! - **Escaped** (default): written as the literals `\r` and `\n`, so every
//!   record is exactly one physical line.
//! - **Raw**: written as-is; a record may span several physical lines and is
//!   reassembled by [`RecordReader`].
//!
//! ## Key Features
//!
//! - **Streaming reads**: [`RecordReader`] pulls one logical record at a time
//!   from any `BufRead` and tells end of input apart from a blank line
//! - **Precise errors**: misplaced quotes report line, column and the field
//!   text read so far
//! - **Serde compatible**: map records onto `#[derive(Serialize, Deserialize)]`
//!   structs positionally
//! - **Sample layout**: [`SampleRecord`] and [`Schema::samples`] describe the
//!   17-column test-result format
//!
//! ## Quick Start
//!
//! ```rust
//! use sample_csv::{format_line, split_line};
//!
//! let fields = ["1", "message with comma, really", "line\nbreak", ""];
//! let line = format_line(fields, ',');
//! assert_eq!(line, "1,\"message with comma, really\",\"line\\nbreak\",");
//! assert_eq!(split_line(&line, ',').unwrap(), fields);
//! ```
//!
//! ### Typed records
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use sample_csv::{from_line, to_line};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Hit {
//!     path: String,
//!     status: u16,
//!     message: String,
//! }
//!
//! let hit = Hit { path: "/login".into(), status: 500, message: "boom, \"again\"".into() };
//! let line = to_line(&hit).unwrap();
//! assert_eq!(line, "/login,500,\"boom, \"\"again\"\"\"");
//!
//! let back: Hit = from_line(&line).unwrap();
//! assert_eq!(back, hit);
//! ```
//!
//! ### Streams
//!
//! ```rust
//! use sample_csv::{Record, RecordReader};
//!
//! let mut reader = RecordReader::new("a,\"b\nc\"\n\n".as_bytes(), ',');
//! assert_eq!(reader.read_record().unwrap(), Record::Fields(vec!["a".into(), "b\nc".into()]));
//! assert_eq!(reader.read_record().unwrap(), Record::Fields(vec!["".into()]));
//! assert_eq!(reader.read_record().unwrap(), Record::EndOfInput);
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: skipped trailing text at
//! `debug`, record continuation lines at `trace`. Nothing is printed unless
//! the application installs a logger such as `env_logger`.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - formatting, splitting and typed sample records
//! - **`custom_options.rs`** - delimiters, raw line breaks and headers
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod escape;
pub mod format;
pub mod options;
pub mod reader;
pub mod sample;
mod scan;
pub mod schema;
pub mod ser;
pub mod split;
pub mod writer;

pub use de::{from_fields, FieldDeserializer, RecordDeserializer};
pub use error::{Error, Result};
pub use escape::{escape, escape_with, needs_quoting};
pub use format::{format_line, format_line_with};
pub use options::{CsvOptions, Delimiter, LineBreaks, QUOTE};
pub use reader::{Record, RecordReader, Records};
pub use sample::SampleRecord;
pub use schema::{Schema, SAMPLE_FIELDS, SAMPLE_HEADER};
pub use ser::{to_fields, FieldSerializer, RecordSerializer};
pub use split::{split_line, split_line_with};
pub use writer::CsvWriter;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to one line with the default options.
///
/// # Examples
///
/// ```rust
/// use sample_csv::to_line;
///
/// assert_eq!(to_line(&(1, "a,b", true)).unwrap(), "1,\"a,b\",true");
/// ```
///
/// # Errors
///
/// Returns an error if the value has no flat field representation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_line<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_line_with_options(value, &CsvOptions::default())
}

/// Serialize any `T: Serialize` to one line with custom options.
///
/// With [`LineBreaks::Raw`] the result may contain raw line breaks inside
/// quoted fields.
///
/// # Errors
///
/// Returns an error if the value has no flat field representation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_line_with_options<T>(value: &T, options: &CsvOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let fields = to_fields(value)?;
    Ok(format_line_with(&fields, options))
}

/// Deserialize an instance of type `T` from one line of text.
///
/// # Examples
///
/// ```rust
/// use sample_csv::from_line;
///
/// let (id, name): (u32, String) = from_line("7,\"Smith, J\"").unwrap();
/// assert_eq!((id, name.as_str()), (7, "Smith, J"));
/// ```
///
/// # Errors
///
/// Returns an error if the line is malformed or its fields do not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_line<T>(line: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_line_with_options(line, &CsvOptions::default())
}

/// Deserialize an instance of type `T` from one line with custom options.
///
/// # Errors
///
/// Returns an error if the line is malformed or its fields do not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_line_with_options<T>(line: &str, options: &CsvOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let fields = split_line_with(line, options.delimiter.as_char(), options.line_breaks)?;
    from_fields(&fields)
}

/// Serialize every record to a writer, one line each.
///
/// No header is written; use [`CsvWriter::write_header`] for that.
///
/// # Examples
///
/// ```rust
/// use sample_csv::{to_writer, CsvOptions};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[(1, "a"), (2, "b")], &CsvOptions::new()).unwrap();
/// assert_eq!(buffer, b"1,a\n2,b\n");
/// ```
///
/// # Errors
///
/// Returns an error if a record cannot be flattened or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, I>(writer: W, records: I, options: &CsvOptions) -> Result<()>
where
    W: io::Write,
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut writer = CsvWriter::new(writer, options.clone());
    for record in records {
        writer.serialize(&record)?;
    }
    writer.flush()
}

/// Deserialize every record of a stream.
///
/// When [`CsvOptions::has_header`] is set the first record is skipped.
///
/// # Examples
///
/// ```rust
/// use sample_csv::{from_reader, CsvOptions};
///
/// let input = "id,name\n1,\"a\nb\"\n";
/// let options = CsvOptions::new()
///     .with_line_breaks(sample_csv::LineBreaks::Raw)
///     .with_header(true);
/// let rows: Vec<(u32, String)> = from_reader(input.as_bytes(), &options).unwrap();
/// assert_eq!(rows, vec![(1, "a\nb".to_string())]);
/// ```
///
/// # Errors
///
/// Stops at the first malformed record, mapping failure or I/O error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R, options: &CsvOptions) -> Result<Vec<T>>
where
    R: io::BufRead,
    T: DeserializeOwned,
{
    let mut reader = RecordReader::with_options(reader, options);
    if options.has_header {
        if let Record::Fields(header) = reader.read_record()? {
            log::debug!("skipping header with {} fields", header.len());
        }
    }
    let mut out = Vec::new();
    while let Some(record) = reader.deserialize()? {
        out.push(record);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Event {
        id: u32,
        message: String,
        ok: bool,
        code: Option<u16>,
    }

    #[test]
    fn test_line_round_trip_point() {
        let point = Point { x: 1, y: -2 };
        let line = to_line(&point).unwrap();
        assert_eq!(line, "1,-2");
        let point_back: Point = from_line(&line).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_line_round_trip_event() {
        let event = Event {
            id: 9,
            message: "first line\nsecond, \"quoted\"\r".to_string(),
            ok: false,
            code: None,
        };
        let line = to_line(&event).unwrap();
        assert!(!line.contains('\n'));
        let event_back: Event = from_line(&line).unwrap();
        assert_eq!(event, event_back);
    }

    #[test]
    fn test_options_round_trip() {
        let options = CsvOptions::new()
            .with_delimiter(Delimiter::PIPE)
            .with_line_breaks(LineBreaks::Raw);
        let event = Event {
            id: 1,
            message: "a|b\nc".to_string(),
            ok: true,
            code: Some(204),
        };
        let line = to_line_with_options(&event, &options).unwrap();
        assert_eq!(line, "1|\"a|b\nc\"|true|204");
        let event_back: Event = from_line_with_options(&line, &options).unwrap();
        assert_eq!(event, event_back);
    }

    #[test]
    fn test_writer_then_reader() {
        let events = vec![
            Event { id: 1, message: "plain".into(), ok: true, code: Some(200) },
            Event { id: 2, message: "two\nlines".into(), ok: false, code: None },
        ];
        for line_breaks in [LineBreaks::Escaped, LineBreaks::Raw] {
            let options = CsvOptions::new().with_line_breaks(line_breaks);
            let mut buffer = Vec::new();
            to_writer(&mut buffer, &events, &options).unwrap();
            let back: Vec<Event> = from_reader(buffer.as_slice(), &options).unwrap();
            assert_eq!(back, events);
        }
    }

    #[test]
    fn test_from_reader_skips_header() {
        let input = format!("{}\n", Schema::new(["x", "y"]).header(','));
        let options = CsvOptions::new().with_header(true);
        let only_header: Vec<Point> = from_reader(input.as_bytes(), &options).unwrap();
        assert!(only_header.is_empty());

        let input = input + "3,4\n";
        let points: Vec<Point> = from_reader(input.as_bytes(), &options).unwrap();
        assert_eq!(points, vec![Point { x: 3, y: 4 }]);
        let err = from_reader::<_, Point>(input.as_bytes(), &CsvOptions::new()).unwrap_err();
        assert_eq!(err, Error::invalid_field(0, "i32", "x"));
    }

    #[test]
    fn test_malformed_line() {
        let err = from_line::<Point>("1,2\"").unwrap_err();
        assert!(err.is_parse_error());
        assert_eq!(from_line::<Point>("").unwrap_err(), Error::field_count(2, 0));
    }
}
