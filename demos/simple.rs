//! Formatting, splitting and typed sample records.
//!
//! Run with: RUST_LOG=debug cargo run --example simple

use sample_csv::{format_line, split_line, SampleRecord, SAMPLE_HEADER};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Plain fields
    let fields = ["login", "message with comma, really", "two\nlines", ""];
    let line = format_line(fields, ',');
    println!("Line: {}", line);
    let back = split_line(&line, ',')?;
    assert_eq!(back, fields);
    println!("✓ Split back into {} fields\n", back.len());

    // A typed sample record
    let sample = SampleRecord {
        time_stamp: 1_700_000_000_000,
        elapsed: 187,
        label: "GET /login".to_string(),
        response_code: "500".to_string(),
        response_message: "Internal error:\n\"db down\"".to_string(),
        thread_name: "Users 1-3".to_string(),
        data_type: "text".to_string(),
        success: false,
        failure_message: "Expected 200".to_string(),
        bytes: 512,
        sent_bytes: 120,
        grp_threads: 5,
        all_threads: 5,
        url: "https://example.org/login".to_string(),
        latency: 180,
        idle_time: 0,
        connect: 12,
    };

    println!("{}", SAMPLE_HEADER);
    let line = sample.to_line(',');
    println!("{}\n", line);

    let parsed = SampleRecord::from_line(&line, ',')?;
    assert_eq!(parsed, sample);
    if let Some(at) = parsed.timestamp() {
        println!("Started at {}", at.to_rfc3339());
    }
    println!("As JSON:\n{}", serde_json::to_string_pretty(&parsed)?);

    Ok(())
}
