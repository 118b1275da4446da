//! Schema Registry Module
//!
//! Static field layouts for every account and instruction payload the decoder
//! understands. A layout is an ordered list of `(name, FieldType)` pairs whose
//! order is the wire order. Nested records refer to other kinds by name and are
//! resolved through the registry at decode time.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{MetadataError, Result};

pub mod layouts;

pub use layouts::{EDITION_MARKER_LEDGER_LEN, STANDARD_SCHEMAS};

// ============================================================================
// FIELD TYPES
// ============================================================================

/// Wire type of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U8,
    U16,
    U64,
    /// u32 length prefix followed by UTF-8 bytes
    String,
    /// 32 raw bytes
    Address,
    /// Presence byte followed by the payload when present
    Option(&'static FieldType),
    /// Exactly N elements, no prefix
    Array(&'static FieldType, usize),
    /// u32 element count followed by the elements
    List(&'static FieldType),
    /// Layout of another registered kind
    Record(RecordKind),
}

/// Identifies which layout a buffer should be read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Metadata,
    MasterEditionV1,
    MasterEditionV2,
    Edition,
    EditionMarker,
    Creator,
    Data,
    CreateMetadataArgs,
    UpdateMetadataArgs,
    CreateMasterEditionArgs,
    MintPrintingTokensArgs,
}

impl RecordKind {
    pub const ALL: [RecordKind; 11] = [
        RecordKind::Metadata,
        RecordKind::MasterEditionV1,
        RecordKind::MasterEditionV2,
        RecordKind::Edition,
        RecordKind::EditionMarker,
        RecordKind::Creator,
        RecordKind::Data,
        RecordKind::CreateMetadataArgs,
        RecordKind::UpdateMetadataArgs,
        RecordKind::CreateMasterEditionArgs,
        RecordKind::MintPrintingTokensArgs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecordKind::Metadata => "Metadata",
            RecordKind::MasterEditionV1 => "MasterEditionV1",
            RecordKind::MasterEditionV2 => "MasterEditionV2",
            RecordKind::Edition => "Edition",
            RecordKind::EditionMarker => "EditionMarker",
            RecordKind::Creator => "Creator",
            RecordKind::Data => "Data",
            RecordKind::CreateMetadataArgs => "CreateMetadataArgs",
            RecordKind::UpdateMetadataArgs => "UpdateMetadataArgs",
            RecordKind::CreateMasterEditionArgs => "CreateMasterEditionArgs",
            RecordKind::MintPrintingTokensArgs => "MintPrintingTokensArgs",
        }
    }

    /// Looks a kind up by its name, as used in tooling and configuration.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| MetadataError::UnknownKind(name.to_string()))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered field layout for one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    pub kind: RecordKind,
    pub fields: &'static [(&'static str, FieldType)],
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldType> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, ty)| ty)
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Immutable map from record kind to layout.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<RecordKind, RecordSchema>,
}

impl SchemaRegistry {
    /// Builds a registry from the given layouts. Later entries for the same
    /// kind replace earlier ones.
    pub fn from_schemas(schemas: &[RecordSchema]) -> Self {
        Self {
            schemas: schemas.iter().map(|s| (s.kind, *s)).collect(),
        }
    }

    /// Registry with every built-in layout. Built once per process.
    pub fn standard() -> &'static SchemaRegistry {
        static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| SchemaRegistry::from_schemas(STANDARD_SCHEMAS))
    }

    pub fn schema_for(&self, kind: RecordKind) -> Result<&RecordSchema> {
        self.schemas
            .get(&kind)
            .ok_or_else(|| MetadataError::UnknownKind(kind.to_string()))
    }

    pub fn contains(&self, kind: RecordKind) -> bool {
        self.schemas.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that every kind has a standard layout
    /// Why: A missing layout would only surface when that account is decoded
    #[test]
    fn test_standard_registry_is_complete() {
        let registry = SchemaRegistry::standard();
        for kind in RecordKind::ALL {
            let schema = registry.schema_for(kind).expect("layout registered");
            assert_eq!(schema.kind, kind);
        }
        assert_eq!(registry.len(), RecordKind::ALL.len());
    }

    /// Test that nested record fields point at registered kinds
    #[test]
    fn test_nested_kinds_resolve() {
        fn check(registry: &SchemaRegistry, ty: &FieldType) {
            match ty {
                FieldType::Option(inner) | FieldType::List(inner) | FieldType::Array(inner, _) => {
                    check(registry, inner)
                }
                FieldType::Record(kind) => assert!(registry.contains(*kind)),
                _ => {}
            }
        }

        let registry = SchemaRegistry::standard();
        for schema in STANDARD_SCHEMAS {
            for (_, ty) in schema.fields {
                check(registry, ty);
            }
        }
    }

    /// Test that a registry without a layout reports the kind
    #[test]
    fn test_unknown_kind() {
        let registry = SchemaRegistry::from_schemas(&[]);
        let err = registry.schema_for(RecordKind::Edition).unwrap_err();
        assert_eq!(err, MetadataError::UnknownKind("Edition".to_string()));
    }

    /// Test that kinds can be looked up by name regardless of case
    #[test]
    fn test_from_name() {
        assert_eq!(
            RecordKind::from_name("masteredition").unwrap_err(),
            MetadataError::UnknownKind("masteredition".to_string())
        );
        assert_eq!(
            RecordKind::from_name("editionMarker").unwrap(),
            RecordKind::EditionMarker
        );
    }
}
