//! Quoting and escaping of single field values.
//!
//! A value needs quoting when it contains the quote character, a carriage
//! return, a line feed or the active delimiter. Quoted values double every
//! embedded quote; in [`LineBreaks::Escaped`] mode CR and LF are additionally
//! written as the literals `\r` and `\n`.
//!
//! ```rust
//! use sample_csv::escape;
//!
//! assert_eq!(escape("plain", ','), "plain");
//! assert_eq!(escape("a,b", ','), "\"a,b\"");
//! assert_eq!(escape("say \"hi\"", ','), "\"say \"\"hi\"\"\"");
//! assert_eq!(escape("two\nlines", ','), "\"two\\nlines\"");
//! ```

use crate::options::{LineBreaks, QUOTE};
use std::borrow::Cow;

/// Returns `true` if `value` must be wrapped in quotes to survive a round trip.
#[inline]
#[must_use]
pub fn needs_quoting(value: &str, delimiter: char) -> bool {
    value
        .chars()
        .any(|ch| ch == QUOTE || ch == '\r' || ch == '\n' || ch == delimiter)
}

/// Escapes a field value using the single-line literal-escape convention.
///
/// Values that need no quoting are returned borrowed and unchanged.
#[must_use]
pub fn escape(value: &str, delimiter: char) -> Cow<'_, str> {
    escape_with(value, delimiter, LineBreaks::Escaped)
}

/// Escapes a field value with an explicit line-break representation.
///
/// ```rust
/// use sample_csv::{escape_with, LineBreaks};
///
/// assert_eq!(escape_with("a\r\nb", ',', LineBreaks::Escaped), "\"a\\r\\nb\"");
/// assert_eq!(escape_with("a\r\nb", ',', LineBreaks::Raw), "\"a\r\nb\"");
/// ```
#[must_use]
pub fn escape_with(value: &str, delimiter: char, line_breaks: LineBreaks) -> Cow<'_, str> {
    if !needs_quoting(value, delimiter) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    write_quoted(&mut out, value, line_breaks);
    Cow::Owned(out)
}

/// Appends the escaped form of `value` to `out`, quoting only when required.
pub(crate) fn write_escaped(out: &mut String, value: &str, delimiter: char, line_breaks: LineBreaks) {
    if needs_quoting(value, delimiter) {
        write_quoted(out, value, line_breaks);
    } else {
        out.push_str(value);
    }
}

fn write_quoted(out: &mut String, value: &str, line_breaks: LineBreaks) {
    out.push(QUOTE);
    for ch in value.chars() {
        match (ch, line_breaks) {
            (QUOTE, _) => {
                out.push(QUOTE);
                out.push(QUOTE);
            }
            ('\r', LineBreaks::Escaped) => out.push_str("\\r"),
            ('\n', LineBreaks::Escaped) => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push(QUOTE);
}
