use sample_csv::{
    format_line, split_line, Error, Record, RecordReader, SampleRecord, Schema, SAMPLE_HEADER,
};
use std::io::{BufRead, Cursor};

fn check_split(input: &str, delimiter: char, expected: &[&str]) {
    let out = split_line(input, delimiter).unwrap();
    assert_eq!(out, expected, "splitting {input:?}");
}

fn fields(items: &[&str]) -> Record {
    Record::Fields(items.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_split_empty() {
    check_split("", ',', &[]);
}

#[test]
fn test_split_unquoted() {
    check_split("a", ',', &["a"]);
    check_split("a,bc,d,e", ',', &["a", "bc", "d", "e"]);
    check_split(",bc,d,e", ',', &["", "bc", "d", "e"]);
    check_split("a,,d,e", ',', &["a", "", "d", "e"]);
    check_split("a,bc, ,e", ',', &["a", "bc", " ", "e"]);
    check_split("a,bc,d, ", ',', &["a", "bc", "d", " "]);
    check_split("a,bc,d,", ',', &["a", "bc", "d", ""]);
    check_split("a,bc,,", ',', &["a", "bc", "", ""]);
    check_split("a,,,", ',', &["a", "", "", ""]);
    check_split("a,bc,d,\n", ',', &["a", "bc", "d", ""]);
    check_split("a,b\u{e7},d,\u{e9}", ',', &["a", "b\u{e7}", "d", "\u{e9}"]);
}

#[test]
fn test_split_quoted() {
    check_split("a,bc,d,e", ',', &["a", "bc", "d", "e"]);
    check_split(",bc,d,e", ',', &["", "bc", "d", "e"]);
    check_split("\"\",bc,d,e", ',', &["", "bc", "d", "e"]);
    check_split("a,,d,e", ',', &["a", "", "d", "e"]);
    check_split("a,\"\",d,e", ',', &["a", "", "d", "e"]);
    check_split("a,bc, ,e", ',', &["a", "bc", " ", "e"]);
    check_split("a,bc,\" \",e", ',', &["a", "bc", " ", "e"]);
    check_split("a,bc,d, ", ',', &["a", "bc", "d", " "]);
    check_split("a,bc,d,\" \"", ',', &["a", "bc", "d", " "]);
    check_split("a,bc,d,", ',', &["a", "bc", "d", ""]);
    check_split("a,bc,d,\"\"", ',', &["a", "bc", "d", ""]);
    check_split("a,bc,d,\"\"\n", ',', &["a", "bc", "d", ""]);
    check_split(
        "\"a\",\"b\u{e7}\",\"d\",\"\u{e9}\"",
        ',',
        &["a", "b\u{e7}", "d", "\u{e9}"],
    );
}

#[test]
fn test_split_backslash_literals() {
    // decoded inside quotes only
    check_split("\"a\\nx\",bc,d,\"\"\n", ',', &["a\nx", "bc", "d", ""]);
    check_split("a\\nx,bc,d,\"\"\n", ',', &["a\\nx", "bc", "d", ""]);
    check_split("\"a\\tb\\\\\"", ',', &["a\\tb\\\\"]);
}

#[test]
fn test_split_bad_quote() {
    let err = split_line("a\"b", ',').unwrap_err();
    assert_eq!(err, Error::misplaced_quote(1, 2, "a\""));
    assert!(split_line("\"a\"b", ',').unwrap_err().is_parse_error());
    assert!(split_line("\"open", ',').unwrap_err().is_parse_error());
}

#[test]
fn test_split_multi_line() {
    let mut input = Cursor::new("a,,\"c\nd\",e\n,,f,g,\n\n");
    let mut reader = RecordReader::new(&mut input, ',');
    assert_eq!(reader.read_record().unwrap(), fields(&["a", "", "c\nd", "e"]));
    assert_eq!(reader.read_record().unwrap(), fields(&["", "", "f", "g", ""]));
    // blank line
    assert_eq!(reader.read_record().unwrap(), fields(&[""]));
    assert_eq!(reader.read_record().unwrap(), Record::EndOfInput);
    assert_eq!(reader.read_record().unwrap(), Record::EndOfInput);
    drop(reader);
    assert!(input.fill_buf().unwrap().is_empty());
}

#[test]
fn test_blank_line() {
    let mut input = Cursor::new("\n");
    let mut reader = RecordReader::new(&mut input, ',');
    assert_eq!(reader.read_record().unwrap(), fields(&[""]));
    drop(reader);
    assert!(input.fill_buf().unwrap().is_empty());
}

#[test]
fn test_blank_line_quoted() {
    let mut input = Cursor::new("\"\"\n");
    let mut reader = RecordReader::new(&mut input, ',');
    assert_eq!(reader.read_record().unwrap(), fields(&[""]));
    drop(reader);
    assert!(input.fill_buf().unwrap().is_empty());
}

#[test]
fn test_empty_file() {
    let mut reader = RecordReader::new(Cursor::new(""), ',');
    assert_eq!(reader.read_record().unwrap(), Record::EndOfInput);
    assert!(reader.into_inner().fill_buf().unwrap().is_empty());
}

#[test]
fn test_short_file() {
    let mut reader = RecordReader::new(Cursor::new("a"), ',');
    assert_eq!(reader.read_record().unwrap(), fields(&["a"]));
    assert_eq!(reader.read_record().unwrap(), Record::EndOfInput);
}

#[test]
fn test_unterminated_quote_at_eof() {
    let mut reader = RecordReader::new(Cursor::new("x,\"never closed\n"), ',');
    let err = reader.read_record().unwrap_err();
    assert!(matches!(err, Error::UnexpectedEndOfInput { line: 2, .. }));
}

#[test]
fn test_header() {
    // header text should not change unexpectedly
    let hdr = "timeStamp,elapsed,label,responseCode,responseMessage,threadName,dataType,success,\
               failureMessage,bytes,sentBytes,grpThreads,allThreads,URL,Latency,IdleTime,Connect";
    assert_eq!(SAMPLE_HEADER, hdr);
    assert_eq!(Schema::samples().header(','), hdr);
}

fn sample(message: &str) -> SampleRecord {
    SampleRecord {
        time_stamp: 1,
        elapsed: 2,
        label: "3".to_string(),
        response_code: "4".to_string(),
        response_message: message.to_string(),
        thread_name: "6".to_string(),
        data_type: "7".to_string(),
        success: true,
        failure_message: String::new(),
        bytes: 8,
        sent_bytes: 9,
        grp_threads: 10,
        all_threads: 11,
        url: "https://example.org".to_string(),
        latency: 12,
        idle_time: 13,
        connect: 14,
    }
}

fn escape_message(message: &str) -> String {
    if message.contains(['"', '\r', '\n', ',']) {
        format!(
            "\"{}\"",
            message
                .replace('"', "\"\"")
                .replace('\r', "\\r")
                .replace('\n', "\\n")
        )
    } else {
        message.to_string()
    }
}

#[test]
fn test_sample_lines() {
    // sample format should not change unexpectedly
    for message in [
        "normal message with no new line",
        "Something happened:\nmessage with new line",
        "message with comma, really",
        "message with comma,\nand a new line",
        "",
        "message with \r\nCR and NL",
    ] {
        let expected = format!(
            "1,2,3,4,{},6,7,true,,8,9,10,11,https://example.org,12,13,14",
            escape_message(message)
        );
        let record = sample(message);
        assert_eq!(record.to_line(','), expected);
        assert_eq!(SampleRecord::from_line(&expected, ',').unwrap(), record);
    }
}

#[test]
fn test_seventeen_field_row() {
    let row = [
        "1", "2", "3", "4", "message with comma, really", "6", "7", "true", "", "8", "9", "10",
        "11", "https://example.org", "12", "13", "14",
    ];
    let line = format_line(row, ',');
    let back = split_line(&line, ',').unwrap();
    assert_eq!(back.len(), 17);
    assert_eq!(back, row);
    assert!(Schema::samples().index_of("URL").is_some_and(|i| back[i] == "https://example.org"));
}

#[test]
fn test_file_with_header_and_samples() {
    let mut text = format!("{SAMPLE_HEADER}\n");
    for message in ["ok", "a, b", "x\ny"] {
        text.push_str(&sample(message).to_line(','));
        text.push('\n');
    }

    let schema = Schema::samples();
    let mut reader = RecordReader::new(Cursor::new(text), ',');
    let header = reader.read_record().unwrap().into_fields();
    assert!(schema.is_header(&header));

    let mut messages = Vec::new();
    while let Some(record) = reader.deserialize::<SampleRecord>().unwrap() {
        messages.push(record.response_message);
    }
    // the stream reader keeps backslash literals as written
    assert_eq!(messages, vec!["ok", "a, b", "x\\ny"]);
}
