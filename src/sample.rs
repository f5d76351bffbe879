//! The sample-result record and its fixed 17-column layout.

use crate::de::from_fields;
use crate::format::format_line;
use crate::split::split_line;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One test-result sample, in [`SAMPLE_FIELDS`](crate::SAMPLE_FIELDS) order.
///
/// ```rust
/// use sample_csv::SampleRecord;
///
/// let sample = SampleRecord {
///     time_stamp: 1_700_000_000_000,
///     elapsed: 42,
///     label: "login".into(),
///     response_code: "200".into(),
///     response_message: "OK".into(),
///     success: true,
///     ..SampleRecord::default()
/// };
/// let line = sample.to_line(',');
/// assert!(line.starts_with("1700000000000,42,login,200,OK,"));
/// assert_eq!(SampleRecord::from_line(&line, ',').unwrap(), sample);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Start time in milliseconds since the Unix epoch.
    pub time_stamp: i64,
    pub elapsed: u64,
    pub label: String,
    pub response_code: String,
    pub response_message: String,
    pub thread_name: String,
    pub data_type: String,
    pub success: bool,
    pub failure_message: String,
    pub bytes: u64,
    pub sent_bytes: u64,
    pub grp_threads: u32,
    pub all_threads: u32,
    pub url: String,
    pub latency: u64,
    pub idle_time: u64,
    pub connect: u64,
}

impl SampleRecord {
    /// Ordered field values of this sample.
    #[must_use]
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.time_stamp.to_string(),
            self.elapsed.to_string(),
            self.label.clone(),
            self.response_code.clone(),
            self.response_message.clone(),
            self.thread_name.clone(),
            self.data_type.clone(),
            self.success.to_string(),
            self.failure_message.clone(),
            self.bytes.to_string(),
            self.sent_bytes.to_string(),
            self.grp_threads.to_string(),
            self.all_threads.to_string(),
            self.url.clone(),
            self.latency.to_string(),
            self.idle_time.to_string(),
            self.connect.to_string(),
        ]
    }

    /// Formats the sample as one line using the literal-escape convention.
    #[must_use]
    pub fn to_line(&self, delimiter: char) -> String {
        format_line(self.to_fields(), delimiter)
    }

    /// Parses a sample from one line.
    ///
    /// # Errors
    ///
    /// Fails on malformed quoting, a line without exactly 17 fields, or a
    /// numeric/boolean column that does not parse.
    pub fn from_line(line: &str, delimiter: char) -> Result<Self> {
        let fields = split_line(line, delimiter)?;
        from_fields(&fields)
    }

    /// Start time as a UTC timestamp, if `time_stamp` is in chrono's range.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time_stamp)
    }
}

impl TryFrom<&[String]> for SampleRecord {
    type Error = Error;

    fn try_from(fields: &[String]) -> Result<Self> {
        from_fields(fields)
    }
}
