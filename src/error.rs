//! Error types for metadata decoding and address derivation.

use thiserror::Error;

use crate::schema::RecordKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Buffer underrun: needed {needed} bytes, {remaining} remaining")]
    BufferUnderrun { needed: usize, remaining: usize },

    #[error("Invalid UTF-8 in string field")]
    InvalidUtf8,

    #[error("Invalid option flag: {0}")]
    InvalidOptionFlag(u8),

    #[error("Unknown record kind: {0}")]
    UnknownKind(String),

    #[error("Unknown account key: {0}")]
    UnknownAccountKey(u8),

    #[error("No valid program address found")]
    NoValidAddress,

    #[error("Bad index for edition: byte {0}")]
    IndexOutOfRange(usize),

    #[error("Value does not match schema: expected {expected}")]
    ValueMismatch { expected: String },

    #[error("{kind}.{field}: {source}")]
    Field {
        kind: RecordKind,
        field: &'static str,
        #[source]
        source: Box<MetadataError>,
    },
}

impl MetadataError {
    /// Wraps an error with the record kind and field it was raised from.
    pub fn in_field(self, kind: RecordKind, field: &'static str) -> Self {
        MetadataError::Field {
            kind,
            field,
            source: Box::new(self),
        }
    }

    /// Returns the originating error, stripping field context.
    pub fn root(&self) -> &MetadataError {
        match self {
            MetadataError::Field { source, .. } => source.root(),
            other => other,
        }
    }

    /// Field path from the outermost record to the failing field, e.g.
    /// `["Metadata.data", "Data.uri"]`.
    pub fn field_path(&self) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = self;
        while let MetadataError::Field { kind, field, source } = current {
            path.push(format!("{}.{}", kind, field));
            current = source;
        }
        path
    }

    pub(crate) fn mismatch(expected: impl Into<String>) -> Self {
        MetadataError::ValueMismatch {
            expected: expected.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetadataError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that nested field context unwinds to the originating error
    /// Why: Callers match on the root cause while logs show the full path
    #[test]
    fn test_root_and_field_path() {
        let err = MetadataError::InvalidUtf8
            .in_field(RecordKind::Data, "uri")
            .in_field(RecordKind::Metadata, "data");

        assert_eq!(err.root(), &MetadataError::InvalidUtf8);
        assert_eq!(err.field_path(), vec!["Metadata.data", "Data.uri"]);
        assert_eq!(
            err.to_string(),
            "Metadata.data: Data.uri: Invalid UTF-8 in string field"
        );
    }
}
