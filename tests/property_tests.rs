//! Property-based tests for the codec's round-trip guarantees.
//!
//! Fields are drawn from a small alphabet that is dense in the characters the
//! grammar cares about (delimiters, quotes, CR, LF) so escaping paths are hit
//! often. Backslashes are included; only the literal pairs backslash-n and
//! backslash-r are excluded from escaped round trips, since they cannot be
//! told apart from an encoded line feed or carriage return.

use proptest::prelude::*;
use sample_csv::{
    escape, format_line, needs_quoting, split_line, CsvOptions, CsvWriter, Delimiter, LineBreaks,
    RecordReader,
};

fn delimiter() -> impl Strategy<Value = char> {
    prop::sample::select(vec![',', ';', '|', '\t'])
}

fn field() -> impl Strategy<Value = String> {
    "[a-cnr ,;|\t\"\r\n\\\\\u{e9}]{0,6}"
}

fn has_escape_literal(value: &str) -> bool {
    value.contains("\\n") || value.contains("\\r")
}

fn record() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(field(), 0..10)
}

proptest! {
    #[test]
    fn prop_format_then_split(fields in record(), delim in delimiter()) {
        // a lone empty field formats to the empty line, which is no fields at all
        prop_assume!(fields != [""]);
        prop_assume!(!fields.iter().any(|f| has_escape_literal(f)));
        let line = format_line(&fields, delim);
        prop_assert!(!line.contains('\n') && !line.contains('\r'));
        prop_assert_eq!(split_line(&line, delim).unwrap(), fields);
    }

    #[test]
    fn prop_escape_quotes_exactly_when_needed(value in field(), delim in delimiter()) {
        let escaped = escape(&value, delim);
        if needs_quoting(&value, delim) {
            prop_assert!(escaped.starts_with('"') && escaped.ends_with('"'));
            prop_assert!(escaped.len() >= value.len() + 2);
        } else {
            prop_assert_eq!(escaped.as_ref(), value.as_str());
        }
    }

    #[test]
    fn prop_single_field_split(value in field(), delim in delimiter()) {
        prop_assume!(!value.is_empty() && !has_escape_literal(&value));
        let line = escape(&value, delim).into_owned();
        prop_assert_eq!(split_line(&line, delim).unwrap(), vec![value]);
    }

    #[test]
    fn prop_unquoted_backslashes_kept(value in "[a-cnr\\\\]{1,8}", delim in delimiter()) {
        prop_assert_eq!(split_line(&value, delim).unwrap(), vec![value.clone()]);
    }

    #[test]
    fn prop_split_never_panics(line in any::<String>(), delim in delimiter()) {
        let _ = split_line(&line, delim);
    }

    #[test]
    fn prop_raw_writer_then_reader(
        records in prop::collection::vec(prop::collection::vec(field(), 1..8), 0..6),
        delim in delimiter(),
    ) {
        let options = CsvOptions::new()
            .with_delimiter(Delimiter::new(delim).unwrap())
            .with_line_breaks(LineBreaks::Raw);
        let mut writer = CsvWriter::new(Vec::new(), options.clone());
        for fields in &records {
            writer.write_fields(fields).unwrap();
        }
        let bytes = writer.into_inner().unwrap();

        let mut reader = RecordReader::with_options(bytes.as_slice(), &options);
        let back: Vec<Vec<String>> = reader.records().collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(back, records);
    }

    #[test]
    fn prop_reader_always_terminates(input in "[a,\"\r\n]{0,40}") {
        let mut reader = RecordReader::new(input.as_bytes(), ',');
        let seen = reader.records().take(100).count();
        prop_assert!(seen <= input.len() + 1);
    }
}
