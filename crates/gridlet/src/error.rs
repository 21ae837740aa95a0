//! Error type for the record ingestion boundary.
//!
//! Table layout itself is a total function and never fails. Only turning
//! caller data into records has failure modes: the serializer can error,
//! or a row can serialize to something other than a key/value object.

use std::fmt;

/// Error converting caller data into table records.
#[derive(Debug)]
pub enum TableError {
    /// Serialization of a row failed.
    Serialization(String),

    /// A row serialized to a non-object value (array, scalar, null).
    NotAnObject {
        /// Index of the offending row in the input slice.
        index: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Serialization(msg) => write!(f, "serialization error: {}", msg),
            TableError::NotAnObject { index } => {
                write!(f, "row {} is not a key/value record", index)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Serialization(err.to_string())
    }
}
