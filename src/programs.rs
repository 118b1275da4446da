//! Well-known program ids and PDA seed prefixes.

use serde::Serialize;
use solana_program::{pubkey, pubkey::Pubkey};

use crate::records::serialize_address;

pub const METADATA_PREFIX: &str = "metadata";
pub const EDITION: &str = "edition";
pub const RESERVATION: &str = "reservation";

pub const METADATA_PROGRAM_ID: Pubkey = pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
pub const BPF_UPGRADE_LOADER_ID: Pubkey = pubkey!("BPFLoaderUpgradeab1e11111111111111111111111");
pub const MEMO_PROGRAM_ID: Pubkey = pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");
pub const VAULT_PROGRAM_ID: Pubkey = pubkey!("vau1zxA2LbssAUEF7Gpw91zMM1LvXrvpzJtmZ58rPsn");
pub const AUCTION_PROGRAM_ID: Pubkey = pubkey!("auctxRXPeJoc4817jDhf4HbjnhEcr1cCXenosMhK5R8");
pub const METAPLEX_PROGRAM_ID: Pubkey = pubkey!("p1exdMJcjVao65QdewkaZRUnU6VPSXhus9n2GzWfh98");
pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");
pub const WRAPPED_SOL_MINT: Pubkey = pubkey!("So11111111111111111111111111111111111111112");

/// Program ids a metadata client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramIds {
    #[serde(serialize_with = "serialize_address")]
    pub token: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub associated_token: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub bpf_upgrade_loader: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub system: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub metadata: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub memo: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub vault: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub auction: Pubkey,
    #[serde(serialize_with = "serialize_address")]
    pub metaplex: Pubkey,
}

impl Default for ProgramIds {
    fn default() -> Self {
        Self {
            token: TOKEN_PROGRAM_ID,
            associated_token: ASSOCIATED_TOKEN_PROGRAM_ID,
            bpf_upgrade_loader: BPF_UPGRADE_LOADER_ID,
            system: SYSTEM_PROGRAM_ID,
            metadata: METADATA_PROGRAM_ID,
            memo: MEMO_PROGRAM_ID,
            vault: VAULT_PROGRAM_ID,
            auction: AUCTION_PROGRAM_ID,
            metaplex: METAPLEX_PROGRAM_ID,
        }
    }
}

impl ProgramIds {
    /// Same ids with a different metadata program, e.g. a local deployment.
    pub fn with_metadata(metadata: Pubkey) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }
}
