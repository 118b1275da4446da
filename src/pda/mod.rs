//! Derived-Address Resolver Module
//!
//! Finds program-derived addresses (PDAs) and memoizes them in an injected
//! [`CacheStore`]. Derivation is deterministic, so a cached pair is always what
//! a fresh bump search would return; entries are written once per key and never
//! invalidated here.

use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::edition_marker::marker_number;
use crate::error::{MetadataError, Result};
use crate::programs::{EDITION, METADATA_PREFIX};

pub mod store;

pub use store::{CacheStore, JsonFileStore, MemoryStore};

/// Cached derivation result as stored in the [`CacheStore`].
///
/// Older entries written as `{"key": ..., "nonce": ...}` are still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedAddress {
    /// Base58 address
    #[serde(alias = "key")]
    pub address: String,
    #[serde(alias = "nonce")]
    pub bump: u8,
}

/// Hit/miss counters for a resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    pub hits: u64,
    pub misses: u64,
}

/// Builds the cache key for a seed set: `pda-` + hex of each seed + base58
/// program id.
pub fn cache_key(seeds: &[&[u8]], program_id: &Pubkey) -> String {
    let mut key = String::from("pda-");
    for seed in seeds {
        key.push_str(&hex::encode(seed));
    }
    key.push_str(&program_id.to_string());
    key
}

/// Memoizing PDA resolver.
pub struct AddressResolver {
    store: Arc<dyn CacheStore>,
    /// Serializes check-then-derive-then-store so concurrent misses on one key
    /// run the bump search once.
    lock: Mutex<()>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AddressResolver {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Resolver over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn stats(&self) -> ResolverStats {
        ResolverStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Returns the PDA and bump for `seeds` under `program_id`.
    ///
    /// # Returns
    ///
    /// * `Ok((Pubkey, u8))` - From the cache, or from a fresh bump search
    /// * `Err(MetadataError::NoValidAddress)` - No bump yields an off-curve
    ///   address (also the case for invalid seeds); nothing is cached
    pub fn derive(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
        let key = cache_key(seeds, program_id);
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(cached) = self.lookup(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("PDA cache hit for {}", key);
            return Ok(cached);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let (address, bump) = Pubkey::try_find_program_address(seeds, program_id)
            .ok_or(MetadataError::NoValidAddress)?;
        debug!("PDA cache miss for {}, derived {} (bump {})", key, address, bump);

        let entry = CachedAddress {
            address: address.to_string(),
            bump,
        };
        match serde_json::to_string(&entry) {
            Ok(value) => {
                if let Err(e) = self.store.set(&key, &value) {
                    warn!("Failed to store PDA cache entry {}: {:#}", key, e);
                }
            }
            Err(e) => warn!("Failed to encode PDA cache entry {}: {}", key, e),
        }

        Ok((address, bump))
    }

    /// Reads a cache entry. Store errors and corrupt entries count as misses.
    fn lookup(&self, key: &str) -> Option<(Pubkey, u8)> {
        let raw = match self.store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Failed to read PDA cache entry {}: {:#}", key, e);
                return None;
            }
        };
        let parsed = serde_json::from_str::<CachedAddress>(&raw)
            .ok()
            .and_then(|entry| Some((Pubkey::from_str(&entry.address).ok()?, entry.bump)));
        if parsed.is_none() {
            warn!("Ignoring corrupt PDA cache entry {}", key);
        }
        parsed
    }

    /// Metadata account of `mint`: `["metadata", program, mint]`.
    pub fn metadata_address(&self, program_id: &Pubkey, mint: &Pubkey) -> Result<Pubkey> {
        self.derive(
            &[METADATA_PREFIX.as_bytes(), program_id.as_ref(), mint.as_ref()],
            program_id,
        )
        .map(|(address, _)| address)
    }

    /// Edition (or master edition) account of `mint`:
    /// `["metadata", program, mint, "edition"]`.
    pub fn edition_address(&self, program_id: &Pubkey, mint: &Pubkey) -> Result<Pubkey> {
        self.derive(
            &[
                METADATA_PREFIX.as_bytes(),
                program_id.as_ref(),
                mint.as_ref(),
                EDITION.as_bytes(),
            ],
            program_id,
        )
        .map(|(address, _)| address)
    }

    /// Edition marker account covering `edition`:
    /// `["metadata", program, mint, "edition", (edition / 248) as decimal]`.
    pub fn edition_marker_address(
        &self,
        program_id: &Pubkey,
        mint: &Pubkey,
        edition: u64,
    ) -> Result<Pubkey> {
        let marker = marker_number(edition).to_string();
        self.derive(
            &[
                METADATA_PREFIX.as_bytes(),
                program_id.as_ref(),
                mint.as_ref(),
                EDITION.as_bytes(),
                marker.as_bytes(),
            ],
            program_id,
        )
        .map(|(address, _)| address)
    }
}
