//! Splitting one self-contained line into fields.
//!
//! The line is expected to come from a producer using the literal-escape
//! convention: an embedded line break is stored as the two characters `\n`
//! (or `\r`) inside a quoted field, so each record occupies one physical line.
//! Those literals are decoded back into control characters, but only inside
//! quoted content.
//!
//! ## Known limitation
//!
//! The convention cannot tell an escaped newline from a quoted value that
//! really contains a backslash followed by `n`. Such a value comes back with
//! a line feed in place of the two characters. Unquoted values are never
//! decoded, so the ambiguity only affects values that also needed quoting.

use crate::options::LineBreaks;
use crate::scan::{Scanner, Step};
use crate::{Error, Result};

/// Splits a single line into its field values.
///
/// An empty `line` yields an empty vector, the no-more-records signal. A line
/// holding only a terminator is a blank record with one empty field. One
/// trailing `\n` or `\r\n` is consumed as the terminator.
///
/// # Examples
///
/// ```rust
/// use sample_csv::split_line;
///
/// assert_eq!(split_line("a,\"b,c\",d", ',').unwrap(), vec!["a", "b,c", "d"]);
/// assert_eq!(split_line(",bc,d,e", ',').unwrap(), vec!["", "bc", "d", "e"]);
/// assert!(split_line("", ',').unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnterminatedOrMisplacedQuote`] for a quote inside an
/// unquoted field, text after a closing quote, or a quote left open at the
/// end of the line.
pub fn split_line(line: &str, delimiter: char) -> Result<Vec<String>> {
    split_line_with(line, delimiter, LineBreaks::Escaped)
}

/// Splits a single line with an explicit line-break policy.
///
/// With [`LineBreaks::Raw`] backslash text is kept as-is.
pub fn split_line_with(line: &str, delimiter: char, line_breaks: LineBreaks) -> Result<Vec<String>> {
    let mut scanner = Scanner::new(delimiter, line_breaks, 1);
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if scanner.feed(ch)? == Step::Terminated {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            if chars.peek().is_some() {
                log::debug!(
                    "ignoring {} characters after line terminator",
                    chars.clone().count()
                );
            }
            return Ok(scanner.take_record());
        }
    }

    if scanner.is_quote_open() {
        let col = line.chars().count();
        return Err(Error::misplaced_quote(scanner.line(), col, scanner.partial_field()));
    }
    Ok(scanner.end_of_input().unwrap_or_default())
}
