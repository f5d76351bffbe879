//! Delimiters, raw line breaks and headers with CsvOptions.
//!
//! Run with: RUST_LOG=trace cargo run --example custom_options

use serde::{Deserialize, Serialize};
use sample_csv::{
    from_reader, to_line_with_options, CsvOptions, CsvWriter, Delimiter, LineBreaks, RecordReader,
    Schema,
};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Check {
    name: String,
    passed: bool,
    detail: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let check = Check {
        name: "latency|p99".to_string(),
        passed: false,
        detail: Some("over budget\nby 40ms".to_string()),
    };

    // Default format (comma, escaped line breaks)
    println!("Default:");
    println!("{}\n", sample_csv::to_line(&check)?);

    // Pipe delimiter
    println!("Pipe delimiter:");
    let pipe = CsvOptions::new().with_delimiter(Delimiter::PIPE);
    println!("{}\n", to_line_with_options(&check, &pipe)?);

    // Tab delimiter with raw line breaks, as a whole file with a header
    println!("Tab delimiter, raw line breaks, header:");
    let options = CsvOptions::new()
        .with_delimiter(Delimiter::try_from('\t')?)
        .with_line_breaks(LineBreaks::Raw)
        .with_header(true);
    let mut writer = CsvWriter::new(Vec::new(), options.clone());
    writer.write_header(&Schema::new(["name", "passed", "detail"]))?;
    writer.serialize(&check)?;
    writer.serialize(&Check {
        name: "errors".to_string(),
        passed: true,
        detail: None,
    })?;
    println!("{} records written", writer.records_written());
    let bytes = writer.into_inner()?;
    println!("{}", String::from_utf8_lossy(&bytes));

    // Read back typed
    let checks: Vec<Check> = from_reader(bytes.as_slice(), &options)?;
    assert_eq!(checks[0], check);
    println!("✓ Read back {} checks", checks.len());

    // Read back untyped, one logical record at a time
    let mut reader = RecordReader::with_options(bytes.as_slice(), &options);
    for fields in reader.records() {
        println!("{:?}", fields?);
    }

    // Rejected delimiter
    match Delimiter::new('"') {
        Ok(_) => unreachable!(),
        Err(e) => println!("\n{}", e),
    }

    Ok(())
}
