//! Joining escaped fields into one output line.

use crate::escape::write_escaped;
use crate::options::{CsvOptions, LineBreaks};

/// Formats fields as one delimited line using the literal-escape convention.
///
/// Fields are escaped with [`escape`](crate::escape) and joined with a single
/// delimiter. No trailing delimiter and no line terminator are added.
///
/// # Examples
///
/// ```rust
/// use sample_csv::{format_line, split_line};
///
/// let fields = ["1", "message with comma, really", "", "true"];
/// let line = format_line(fields, ',');
/// assert_eq!(line, "1,\"message with comma, really\",,true");
/// assert_eq!(split_line(&line, ',').unwrap(), fields);
/// ```
#[must_use]
pub fn format_line<I, S>(fields: I, delimiter: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join(fields, delimiter, LineBreaks::Escaped)
}

/// Formats fields using the delimiter and line-break policy from `options`.
#[must_use]
pub fn format_line_with<I, S>(fields: I, options: &CsvOptions) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join(fields, options.delimiter.as_char(), options.line_breaks)
}

fn join<I, S>(fields: I, delimiter: char, line_breaks: LineBreaks) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::with_capacity(128);
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push(delimiter);
        }
        write_escaped(&mut line, field.as_ref(), delimiter, line_breaks);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Delimiter;

    #[test]
    fn test_format_plain_and_empty() {
        assert_eq!(format_line(Vec::<String>::new(), ','), "");
        assert_eq!(format_line(["a"], ','), "a");
        assert_eq!(format_line(["", "", ""], ','), ",,");
    }

    #[test]
    fn test_format_sample_row() {
        let fields = [
            "1", "2", "3", "4", "message with comma, really", "6", "7", "true", "", "8", "9",
            "10", "11", "https://example.org", "12", "13", "14",
        ];
        assert_eq!(
            format_line(fields, ','),
            "1,2,3,4,\"message with comma, really\",6,7,true,,8,9,10,11,https://example.org,12,13,14"
        );
    }

    #[test]
    fn test_format_with_options() {
        let options = CsvOptions::new()
            .with_delimiter(Delimiter::PIPE)
            .with_line_breaks(LineBreaks::Raw);
        let fields = vec!["a|b".to_string(), "c\nd".to_string(), "e,f".to_string()];
        assert_eq!(format_line_with(&fields, &options), "\"a|b\"|\"c\nd\"|e,f");
    }
}
