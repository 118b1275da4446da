//! Typed Record Module
//!
//! Strongly typed account and instruction structures, converted to and from the
//! dynamic [`Record`] produced by the schema walker.

use serde::Serialize;
use solana_program::pubkey::Pubkey;

use crate::decoder::TypedRecord;
use crate::error::{MetadataError, Result};
use crate::schema::{RecordKind, EDITION_MARKER_LEDGER_LEN};
use crate::value::{Record, Value};

// ============================================================================
// ACCOUNT KEYS
// ============================================================================

/// Leading discriminant byte of a metadata program account.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetadataKey {
    Uninitialized = 0,
    EditionV1 = 1,
    MasterEditionV1 = 2,
    MetadataV1 = 4,
    MasterEditionV2 = 6,
    EditionMarker = 7,
}

impl MetadataKey {
    /// Layout used for accounts carrying this key, if any.
    pub fn record_kind(self) -> Option<RecordKind> {
        match self {
            MetadataKey::Uninitialized => None,
            MetadataKey::EditionV1 => Some(RecordKind::Edition),
            MetadataKey::MasterEditionV1 => Some(RecordKind::MasterEditionV1),
            MetadataKey::MetadataV1 => Some(RecordKind::Metadata),
            MetadataKey::MasterEditionV2 => Some(RecordKind::MasterEditionV2),
            MetadataKey::EditionMarker => Some(RecordKind::EditionMarker),
        }
    }
}

impl TryFrom<u8> for MetadataKey {
    type Error = MetadataError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(MetadataKey::Uninitialized),
            1 => Ok(MetadataKey::EditionV1),
            2 => Ok(MetadataKey::MasterEditionV1),
            4 => Ok(MetadataKey::MetadataV1),
            6 => Ok(MetadataKey::MasterEditionV2),
            7 => Ok(MetadataKey::EditionMarker),
            other => Err(MetadataError::UnknownAccountKey(other)),
        }
    }
}

fn flag(value: &Value) -> Result<bool> {
    Ok(value.as_u8()? != 0)
}

fn opt<T>(value: &Value, read: impl FnOnce(&Value) -> Result<T>) -> Result<Option<T>> {
    value.as_option()?.map(read).transpose()
}

fn opt_value<T>(value: Option<&T>, write: impl FnOnce(&T) -> Value) -> Value {
    match value {
        Some(inner) => Value::some(write(inner)),
        None => Value::none(),
    }
}

// ============================================================================
// ACCOUNT RECORDS
// ============================================================================

/// Creator share entry inside [`Data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creator {
    #[serde(serialize_with = "serialize_address")]
    pub address: Pubkey,
    pub verified: bool,
    /// Share of royalties out of 100
    pub share: u8,
}

impl TypedRecord for Creator {
    const KIND: RecordKind = RecordKind::Creator;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            address: record.read_field("address", Value::as_address)?,
            verified: record.read_field("verified", flag)?,
            share: record.read_field("share", Value::as_u8)?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("address", Value::Address(self.address))
            .with("verified", Value::U8(self.verified as u8))
            .with("share", Value::U8(self.share))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Data {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<Creator>>,
}

impl TypedRecord for Data {
    const KIND: RecordKind = RecordKind::Data;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            name: record.read_field("name", |v| v.as_str().map(str::to_owned))?,
            symbol: record.read_field("symbol", |v| v.as_str().map(str::to_owned))?,
            uri: record.read_field("uri", |v| v.as_str().map(str::to_owned))?,
            seller_fee_basis_points: record.read_field("seller_fee_basis_points", Value::as_u16)?,
            creators: record.read_field("creators", |v| {
                opt(v, |list| {
                    list.as_list()?
                        .iter()
                        .map(|item| Creator::from_record(item.as_record()?))
                        .collect()
                })
            })?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("name", Value::String(self.name.clone()))
            .with("symbol", Value::String(self.symbol.clone()))
            .with("uri", Value::String(self.uri.clone()))
            .with("seller_fee_basis_points", Value::U16(self.seller_fee_basis_points))
            .with(
                "creators",
                opt_value(self.creators.as_ref(), |creators| {
                    Value::List(creators.iter().map(|c| Value::Record(c.to_record())).collect())
                }),
            )
    }
}

/// Metadata account attached to a mint.
///
/// `edition` and `master_edition` are not on the wire. Decoding goes through
/// [`MetadataDecoder`](crate::accounts::MetadataDecoder), which derives them
/// as part of the decode, so this type has no [`TypedRecord`] impl. The
/// dynamic [`Record`] from [`crate::decode`] is the bytes-only layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub key: u8,
    #[serde(serialize_with = "serialize_address")]
    pub update_authority: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub mint: Pubkey,
    pub data: Data,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    #[serde(serialize_with = "serialize_opt_address")]
    pub edition: Option<Pubkey>,
    #[serde(serialize_with = "serialize_opt_address")]
    pub master_edition: Option<Pubkey>,
}

impl Metadata {
    /// Wire fields only; the caller fills in the derived addresses.
    pub(crate) fn from_layout(record: &Record) -> Result<Self> {
        Ok(Self {
            key: record.read_field("key", Value::as_u8)?,
            update_authority: record.read_field("update_authority", Value::as_address)?,
            mint: record.read_field("mint", Value::as_address)?,
            data: record.read_field("data", |v| Data::from_record(v.as_record()?))?,
            primary_sale_happened: record.read_field("primary_sale_happened", flag)?,
            is_mutable: record.read_field("is_mutable", flag)?,
            edition: None,
            master_edition: None,
        })
    }

    /// Wire form of this account. The derived addresses are not encoded.
    pub fn to_record(&self) -> Record {
        Record::new(RecordKind::Metadata)
            .with("key", Value::U8(self.key))
            .with("update_authority", Value::Address(self.update_authority))
            .with("mint", Value::Address(self.mint))
            .with("data", Value::Record(self.data.to_record()))
            .with("primary_sale_happened", Value::U8(self.primary_sale_happened as u8))
            .with("is_mutable", Value::U8(self.is_mutable as u8))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterEditionV1 {
    pub key: u8,
    pub supply: u64,
    pub max_supply: Option<u64>,
    #[serde(serialize_with = "serialize_address")]
    pub printing_mint: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub one_time_printing_authorization_mint: Pubkey,
}

impl TypedRecord for MasterEditionV1 {
    const KIND: RecordKind = RecordKind::MasterEditionV1;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            key: record.read_field("key", Value::as_u8)?,
            supply: record.read_field("supply", Value::as_u64)?,
            max_supply: record.read_field("max_supply", |v| opt(v, Value::as_u64))?,
            printing_mint: record.read_field("printing_mint", Value::as_address)?,
            one_time_printing_authorization_mint: record
                .read_field("one_time_printing_authorization_mint", Value::as_address)?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("key", Value::U8(self.key))
            .with("supply", Value::U64(self.supply))
            .with("max_supply", opt_value(self.max_supply.as_ref(), |v| Value::U64(*v)))
            .with("printing_mint", Value::Address(self.printing_mint))
            .with(
                "one_time_printing_authorization_mint",
                Value::Address(self.one_time_printing_authorization_mint),
            )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterEditionV2 {
    pub key: u8,
    pub supply: u64,
    pub max_supply: Option<u64>,
}

impl TypedRecord for MasterEditionV2 {
    const KIND: RecordKind = RecordKind::MasterEditionV2;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            key: record.read_field("key", Value::as_u8)?,
            supply: record.read_field("supply", Value::as_u64)?,
            max_supply: record.read_field("max_supply", |v| opt(v, Value::as_u64))?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("key", Value::U8(self.key))
            .with("supply", Value::U64(self.supply))
            .with("max_supply", opt_value(self.max_supply.as_ref(), |v| Value::U64(*v)))
    }
}

/// Print of a master edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edition {
    pub key: u8,
    /// Master edition this print was made from
    #[serde(serialize_with = "serialize_address")]
    pub parent: Pubkey,
    pub edition: u64,
}

impl TypedRecord for Edition {
    const KIND: RecordKind = RecordKind::Edition;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            key: record.read_field("key", Value::as_u8)?,
            parent: record.read_field("parent", Value::as_address)?,
            edition: record.read_field("edition", Value::as_u64)?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("key", Value::U8(self.key))
            .with("parent", Value::Address(self.parent))
            .with("edition", Value::U64(self.edition))
    }
}

/// Bitset of printed editions; see [`crate::edition_marker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditionMarker {
    pub key: u8,
    pub ledger: [u8; EDITION_MARKER_LEDGER_LEN],
}

impl TypedRecord for EditionMarker {
    const KIND: RecordKind = RecordKind::EditionMarker;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            key: record.read_field("key", Value::as_u8)?,
            ledger: record.read_field("ledger", Value::as_byte_array::<EDITION_MARKER_LEDGER_LEN>)?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("key", Value::U8(self.key))
            .with("ledger", Value::byte_array(&self.ledger))
    }
}

// ============================================================================
// INSTRUCTION PAYLOADS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMetadataArgs {
    pub instruction: u8,
    pub data: Data,
    pub is_mutable: bool,
}

impl TypedRecord for CreateMetadataArgs {
    const KIND: RecordKind = RecordKind::CreateMetadataArgs;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            instruction: record.read_field("instruction", Value::as_u8)?,
            data: record.read_field("data", |v| Data::from_record(v.as_record()?))?,
            is_mutable: record.read_field("is_mutable", flag)?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("instruction", Value::U8(self.instruction))
            .with("data", Value::Record(self.data.to_record()))
            .with("is_mutable", Value::U8(self.is_mutable as u8))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateMetadataArgs {
    pub instruction: u8,
    pub data: Option<Data>,
    #[serde(serialize_with = "serialize_opt_address")]
    pub update_authority: Option<Pubkey>,
    pub primary_sale_happened: Option<bool>,
}

impl TypedRecord for UpdateMetadataArgs {
    const KIND: RecordKind = RecordKind::UpdateMetadataArgs;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            instruction: record.read_field("instruction", Value::as_u8)?,
            data: record.read_field("data", |v| {
                opt(v, |inner| Data::from_record(inner.as_record()?))
            })?,
            update_authority: record.read_field("update_authority", |v| opt(v, Value::as_address))?,
            primary_sale_happened: record.read_field("primary_sale_happened", |v| opt(v, flag))?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("instruction", Value::U8(self.instruction))
            .with("data", opt_value(self.data.as_ref(), |d| Value::Record(d.to_record())))
            .with(
                "update_authority",
                opt_value(self.update_authority.as_ref(), |a| Value::Address(*a)),
            )
            .with(
                "primary_sale_happened",
                opt_value(self.primary_sale_happened.as_ref(), |f| Value::U8(*f as u8)),
            )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMasterEditionArgs {
    pub instruction: u8,
    pub max_supply: Option<u64>,
}

impl TypedRecord for CreateMasterEditionArgs {
    const KIND: RecordKind = RecordKind::CreateMasterEditionArgs;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            instruction: record.read_field("instruction", Value::as_u8)?,
            max_supply: record.read_field("max_supply", |v| opt(v, Value::as_u64))?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("instruction", Value::U8(self.instruction))
            .with("max_supply", opt_value(self.max_supply.as_ref(), |v| Value::U64(*v)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MintPrintingTokensArgs {
    pub instruction: u8,
    pub supply: u64,
}

impl TypedRecord for MintPrintingTokensArgs {
    const KIND: RecordKind = RecordKind::MintPrintingTokensArgs;

    fn from_record(record: &Record) -> Result<Self> {
        Ok(Self {
            instruction: record.read_field("instruction", Value::as_u8)?,
            supply: record.read_field("supply", Value::as_u64)?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(Self::KIND)
            .with("instruction", Value::U8(self.instruction))
            .with("supply", Value::U64(self.supply))
    }
}

// ============================================================================
// SERDE HELPERS
// ============================================================================

pub(crate) fn serialize_address<S: serde::Serializer>(
    address: &Pubkey,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&address.to_string())
}

pub(crate) fn serialize_opt_address<S: serde::Serializer>(
    address: &Option<Pubkey>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match address {
        Some(address) => serializer.serialize_some(&address.to_string()),
        None => serializer.serialize_none(),
    }
}
