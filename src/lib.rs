//! Token Metadata Decoding Library
//!
//! This crate decodes token metadata program accounts from raw bytes into typed
//! records and locates those accounts through program-derived addresses.
//!
//! Decoding is schema driven: every account and instruction payload has a static
//! layout in the [`schema`] registry, and one generic walker in [`decoder`]
//! reads any of them. Derived addresses are memoized by [`pda::AddressResolver`]
//! in an injected key-value store.

pub mod accounts;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod edition_marker;
pub mod error;
pub mod pda;
pub mod programs;
pub mod records;
pub mod schema;
pub mod value;

// Re-export commonly used types
pub use accounts::{Account, MetadataDecoder};
pub use codec::{Reader, Writer};
pub use config::Config;
pub use decoder::{decode, decode_record, encode, encode_record, Decoder, TypedRecord};
pub use edition_marker::{is_edition_taken, EDITION_MARKER_BIT_SIZE};
pub use error::MetadataError;
pub use pda::{AddressResolver, CacheStore, JsonFileStore, MemoryStore};
pub use programs::ProgramIds;
pub use records::{
    Creator, Data, Edition, EditionMarker, MasterEditionV1, MasterEditionV2, Metadata, MetadataKey,
};
pub use schema::{FieldType, RecordKind, RecordSchema, SchemaRegistry};
pub use value::{Record, Value};
