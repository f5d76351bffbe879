//! Column layout of test-result sample files.
//!
//! The codec itself is schema-agnostic: a record is just an ordered list of
//! fields. [`Schema`] supplies the printable column names that give those
//! positions their meaning, formats the header line and recognises a header
//! when one is read back.
//!
//! ```rust
//! use sample_csv::{Schema, SAMPLE_HEADER};
//!
//! let schema = Schema::samples();
//! assert_eq!(schema.len(), 17);
//! assert_eq!(schema.header(','), SAMPLE_HEADER);
//! assert_eq!(schema.index_of("responseMessage"), Some(4));
//! ```

use crate::format::format_line;
use indexmap::IndexSet;

/// Column names of a sample record, in output order.
pub const SAMPLE_FIELDS: [&str; 17] = [
    "timeStamp",
    "elapsed",
    "label",
    "responseCode",
    "responseMessage",
    "threadName",
    "dataType",
    "success",
    "failureMessage",
    "bytes",
    "sentBytes",
    "grpThreads",
    "allThreads",
    "URL",
    "Latency",
    "IdleTime",
    "Connect",
];

/// Header line of the default sample layout with the comma delimiter.
pub const SAMPLE_HEADER: &str = "timeStamp,elapsed,label,responseCode,responseMessage,threadName,\
dataType,success,failureMessage,bytes,sentBytes,grpThreads,allThreads,URL,Latency,IdleTime,Connect";

/// Ordered, duplicate-free set of column names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    names: IndexSet<String>,
}

impl Schema {
    /// Builds a schema from column names; later duplicates are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Schema {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The 17-column sample-result layout.
    #[must_use]
    pub fn samples() -> Self {
        Self::new(SAMPLE_FIELDS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of the column called `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Formats the header line; names are escaped like any other field.
    #[must_use]
    pub fn header(&self, delimiter: char) -> String {
        format_line(&self.names, delimiter)
    }

    /// Returns `true` if `fields` is exactly this schema's header.
    #[must_use]
    pub fn is_header<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        fields.len() == self.names.len()
            && fields
                .iter()
                .zip(&self.names)
                .all(|(field, name)| field.as_ref() == name)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::samples()
    }
}
