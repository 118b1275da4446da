//! Test helpers: wire fixtures built with Borsh, and temp paths.
#![allow(dead_code)]

use borsh::BorshSerialize;
use solana_program::pubkey::Pubkey;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use token_metadata::programs::METADATA_PROGRAM_ID;
use token_metadata::{AddressResolver, MetadataDecoder};

// ============================================================================
// WIRE FIXTURES
// ============================================================================
// Borsh structs with the same field order as the on-chain accounts. Bools are
// u8 on the wire, addresses are raw 32-byte arrays.

#[derive(BorshSerialize, Debug, Clone)]
pub struct WireCreator {
    pub address: [u8; 32],
    pub verified: u8,
    pub share: u8,
}

#[derive(BorshSerialize, Debug, Clone)]
pub struct WireData {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<WireCreator>>,
}

#[derive(BorshSerialize, Debug, Clone)]
pub struct WireMetadata {
    pub key: u8,
    pub update_authority: [u8; 32],
    pub mint: [u8; 32],
    pub data: WireData,
    pub primary_sale_happened: u8,
    pub is_mutable: u8,
}

#[derive(BorshSerialize, Debug, Clone)]
pub struct WireMasterEditionV1 {
    pub key: u8,
    pub supply: u64,
    pub max_supply: Option<u64>,
    pub printing_mint: [u8; 32],
    pub one_time_printing_authorization_mint: [u8; 32],
}

#[derive(BorshSerialize, Debug, Clone)]
pub struct WireMasterEditionV2 {
    pub key: u8,
    pub supply: u64,
    pub max_supply: Option<u64>,
}

#[derive(BorshSerialize, Debug, Clone)]
pub struct WireEdition {
    pub key: u8,
    pub parent: [u8; 32],
    pub edition: u64,
}

#[derive(BorshSerialize, Debug, Clone)]
pub struct WireEditionMarker {
    pub key: u8,
    pub ledger: [u8; 31],
}

#[derive(BorshSerialize, Debug, Clone)]
pub struct WireUpdateMetadataArgs {
    pub instruction: u8,
    pub data: Option<WireData>,
    pub update_authority: Option<[u8; 32]>,
    pub primary_sale_happened: Option<u8>,
}

pub fn addr(first: u8, last: u8) -> [u8; 32] {
    let mut a = [0u8; 32];
    a[0] = first;
    a[31] = last;
    a
}

pub fn pubkey(first: u8, last: u8) -> Pubkey {
    Pubkey::new_from_array(addr(first, last))
}

pub fn test_mint() -> Pubkey {
    pubkey(0x33, 0x44)
}

pub fn sample_creators() -> Vec<WireCreator> {
    vec![
        WireCreator {
            address: addr(0x55, 0x66),
            verified: 1,
            share: 70,
        },
        WireCreator {
            address: addr(0x77, 0x88),
            verified: 0,
            share: 30,
        },
    ]
}

pub fn sample_data(creators: Option<Vec<WireCreator>>) -> WireData {
    WireData {
        name: "Degen Ape #1".to_string(),
        symbol: "DAPE".to_string(),
        uri: "https://arweave.net/abc123".to_string(),
        seller_fee_basis_points: 420,
        creators,
    }
}

pub fn sample_metadata() -> WireMetadata {
    WireMetadata {
        key: 4,
        update_authority: addr(0x11, 0x22),
        mint: test_mint().to_bytes(),
        data: sample_data(Some(sample_creators())),
        primary_sale_happened: 1,
        is_mutable: 0,
    }
}

pub fn to_bytes<T: BorshSerialize>(value: &T) -> Vec<u8> {
    value.try_to_vec().expect("borsh serialize")
}

/// Metadata accounts are allocated at their maximum size; pad like the chain does.
pub fn pad_to(mut bytes: Vec<u8>, len: usize) -> Vec<u8> {
    bytes.resize(len.max(bytes.len()), 0);
    bytes
}

/// Mainnet metadata program over a fresh in-memory address cache.
pub fn metadata_decoder() -> MetadataDecoder {
    MetadataDecoder::new(METADATA_PROGRAM_ID, Arc::new(AddressResolver::in_memory()))
}

// ============================================================================
// FILESYSTEM
// ============================================================================

/// Unique path under the system temp dir. The file is not created.
pub fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "token-metadata-{}-{}-{}",
        std::process::id(),
        nanos,
        name
    ))
}
