//! Account Decoding Module
//!
//! Entry points for turning raw account bytes into records. Metadata accounts
//! get their edition addresses derived as part of decoding.

use serde::Serialize;
use solana_program::pubkey::Pubkey;
use std::sync::Arc;
use tracing::debug;

use crate::decoder::{Decoder, TypedRecord};
use crate::error::{MetadataError, Result};
use crate::pda::AddressResolver;
use crate::records::{
    Edition, EditionMarker, MasterEditionV1, MasterEditionV2, Metadata, MetadataKey,
};
use crate::schema::RecordKind;

/// Any account owned by the metadata program, tagged by its key byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Account {
    Metadata(Metadata),
    MasterEditionV1(MasterEditionV1),
    MasterEditionV2(MasterEditionV2),
    Edition(Edition),
    EditionMarker(EditionMarker),
}

/// Decodes metadata accounts for one metadata program.
pub struct MetadataDecoder {
    program_id: Pubkey,
    resolver: Arc<AddressResolver>,
    decoder: Decoder<'static>,
}

impl MetadataDecoder {
    pub fn new(program_id: Pubkey, resolver: Arc<AddressResolver>) -> Self {
        Self {
            program_id,
            resolver,
            decoder: Decoder::standard(),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn resolver(&self) -> &Arc<AddressResolver> {
        &self.resolver
    }

    /// Decodes a metadata account and derives its edition addresses.
    ///
    /// # Returns
    ///
    /// * `Ok(Metadata)` - With `edition` and `master_edition` populated
    /// * `Err(MetadataError)` - Malformed bytes, or address derivation failed
    pub fn decode(&self, buf: &[u8]) -> Result<Metadata> {
        let metadata = self.decode_layout(buf)?;
        self.with_addresses(metadata)
    }

    /// Probes bytes that may or may not hold a metadata account.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Metadata))` - Decoded and addresses derived
    /// * `Ok(None)` - Bytes do not have the metadata layout
    /// * `Err(MetadataError)` - Decoded, but address derivation failed
    pub fn try_decode(&self, buf: &[u8]) -> Result<Option<Metadata>> {
        match self.decode_layout(buf) {
            Ok(metadata) => self.with_addresses(metadata).map(Some),
            Err(e) => {
                debug!("Not a metadata account: {}", e);
                Ok(None)
            }
        }
    }

    fn decode_layout(&self, buf: &[u8]) -> Result<Metadata> {
        Metadata::from_layout(&self.decoder.decode(RecordKind::Metadata, buf)?)
    }

    fn with_addresses(&self, mut metadata: Metadata) -> Result<Metadata> {
        let edition = self.resolver.edition_address(&self.program_id, &metadata.mint)?;
        metadata.edition = Some(edition);
        metadata.master_edition = Some(edition);
        Ok(metadata)
    }

    /// Decodes an account by its leading key byte.
    ///
    /// Prefer decoding with an explicit kind when the account type is known;
    /// this is for scanning accounts of mixed type. Metadata accounts get
    /// their edition addresses like [`MetadataDecoder::decode`].
    pub fn decode_account(&self, buf: &[u8]) -> Result<Account> {
        let key = *buf.first().ok_or(MetadataError::BufferUnderrun {
            needed: 1,
            remaining: 0,
        })?;
        match MetadataKey::try_from(key)? {
            MetadataKey::Uninitialized => Err(MetadataError::UnknownAccountKey(key)),
            MetadataKey::MetadataV1 => self.decode(buf).map(Account::Metadata),
            MetadataKey::MasterEditionV1 => self.decode_other(buf).map(Account::MasterEditionV1),
            MetadataKey::MasterEditionV2 => self.decode_other(buf).map(Account::MasterEditionV2),
            MetadataKey::EditionV1 => self.decode_other(buf).map(Account::Edition),
            MetadataKey::EditionMarker => self.decode_other(buf).map(Account::EditionMarker),
        }
    }

    /// Decodes any other record kind with the same decoder.
    pub fn decode_other<T: TypedRecord>(&self, buf: &[u8]) -> Result<T> {
        self.decoder.decode_typed(buf)
    }

    pub fn metadata_address(&self, mint: &Pubkey) -> Result<Pubkey> {
        self.resolver.metadata_address(&self.program_id, mint)
    }

    pub fn edition_address(&self, mint: &Pubkey) -> Result<Pubkey> {
        self.resolver.edition_address(&self.program_id, mint)
    }

    pub fn edition_marker_address(&self, mint: &Pubkey, edition: u64) -> Result<Pubkey> {
        self.resolver
            .edition_marker_address(&self.program_id, mint, edition)
    }
}
