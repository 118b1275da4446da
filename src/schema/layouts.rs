//! Built-in layouts for token metadata accounts and instruction payloads.
//!
//! Flags documented as bools are stored as a single u8 on the wire.

use super::{FieldType, RecordKind, RecordSchema};

/// Bytes in an edition marker ledger (248 editions per marker).
pub const EDITION_MARKER_LEDGER_LEN: usize = 31;

const CREATOR_LIST: FieldType = FieldType::List(&FieldType::Record(RecordKind::Creator));

pub const METADATA: RecordSchema = RecordSchema {
    kind: RecordKind::Metadata,
    fields: &[
        ("key", FieldType::U8),
        ("update_authority", FieldType::Address),
        ("mint", FieldType::Address),
        ("data", FieldType::Record(RecordKind::Data)),
        ("primary_sale_happened", FieldType::U8),
        ("is_mutable", FieldType::U8),
    ],
};

pub const MASTER_EDITION_V1: RecordSchema = RecordSchema {
    kind: RecordKind::MasterEditionV1,
    fields: &[
        ("key", FieldType::U8),
        ("supply", FieldType::U64),
        ("max_supply", FieldType::Option(&FieldType::U64)),
        ("printing_mint", FieldType::Address),
        ("one_time_printing_authorization_mint", FieldType::Address),
    ],
};

pub const MASTER_EDITION_V2: RecordSchema = RecordSchema {
    kind: RecordKind::MasterEditionV2,
    fields: &[
        ("key", FieldType::U8),
        ("supply", FieldType::U64),
        ("max_supply", FieldType::Option(&FieldType::U64)),
    ],
};

pub const EDITION: RecordSchema = RecordSchema {
    kind: RecordKind::Edition,
    fields: &[
        ("key", FieldType::U8),
        ("parent", FieldType::Address),
        ("edition", FieldType::U64),
    ],
};

pub const EDITION_MARKER: RecordSchema = RecordSchema {
    kind: RecordKind::EditionMarker,
    fields: &[
        ("key", FieldType::U8),
        (
            "ledger",
            FieldType::Array(&FieldType::U8, EDITION_MARKER_LEDGER_LEN),
        ),
    ],
};

pub const CREATOR: RecordSchema = RecordSchema {
    kind: RecordKind::Creator,
    fields: &[
        ("address", FieldType::Address),
        ("verified", FieldType::U8),
        ("share", FieldType::U8),
    ],
};

pub const DATA: RecordSchema = RecordSchema {
    kind: RecordKind::Data,
    fields: &[
        ("name", FieldType::String),
        ("symbol", FieldType::String),
        ("uri", FieldType::String),
        ("seller_fee_basis_points", FieldType::U16),
        ("creators", FieldType::Option(&CREATOR_LIST)),
    ],
};

pub const CREATE_METADATA_ARGS: RecordSchema = RecordSchema {
    kind: RecordKind::CreateMetadataArgs,
    fields: &[
        ("instruction", FieldType::U8),
        ("data", FieldType::Record(RecordKind::Data)),
        ("is_mutable", FieldType::U8),
    ],
};

pub const UPDATE_METADATA_ARGS: RecordSchema = RecordSchema {
    kind: RecordKind::UpdateMetadataArgs,
    fields: &[
        ("instruction", FieldType::U8),
        (
            "data",
            FieldType::Option(&FieldType::Record(RecordKind::Data)),
        ),
        ("update_authority", FieldType::Option(&FieldType::Address)),
        ("primary_sale_happened", FieldType::Option(&FieldType::U8)),
    ],
};

pub const CREATE_MASTER_EDITION_ARGS: RecordSchema = RecordSchema {
    kind: RecordKind::CreateMasterEditionArgs,
    fields: &[
        ("instruction", FieldType::U8),
        ("max_supply", FieldType::Option(&FieldType::U64)),
    ],
};

pub const MINT_PRINTING_TOKENS_ARGS: RecordSchema = RecordSchema {
    kind: RecordKind::MintPrintingTokensArgs,
    fields: &[("instruction", FieldType::U8), ("supply", FieldType::U64)],
};

pub static STANDARD_SCHEMAS: &[RecordSchema] = &[
    METADATA,
    MASTER_EDITION_V1,
    MASTER_EDITION_V2,
    EDITION,
    EDITION_MARKER,
    CREATOR,
    DATA,
    CREATE_METADATA_ARGS,
    UPDATE_METADATA_ARGS,
    CREATE_MASTER_EDITION_ARGS,
    MINT_PRINTING_TOKENS_ARGS,
];
