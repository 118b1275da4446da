//! Configuration Management Module
//!
//! This module handles loading configuration for the metadata decoder: which
//! metadata program to derive addresses under, and where derived addresses are
//! cached.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::accounts::MetadataDecoder;
use crate::pda::{AddressResolver, CacheStore, JsonFileStore, MemoryStore};
use crate::programs::METADATA_PROGRAM_ID;

// ============================================================================
// CONFIGURATION STRUCTURES
// ============================================================================

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Metadata program settings
    pub metadata: MetadataConfig,
    /// Derived-address cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Metadata program id (base58)
    pub program_id: String,
}

/// Where derived addresses are memoized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process lifetime only
    #[default]
    Memory,
    /// JSON file at `cache.path`
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,
    /// Cache file path (required for the file backend)
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::Memory,
            path: None,
        }
    }
}

// ============================================================================
// CONFIGURATION LOADING AND MANAGEMENT
// ============================================================================

impl Config {
    /// Loads configuration from the TOML file.
    ///
    /// The path comes from `METADATA_CONFIG_PATH`, defaulting to
    /// `config/metadata.toml`.
    ///
    /// # Returns
    ///
    /// - `Ok(Config)` - Successfully loaded configuration
    /// - `Err(anyhow::Error)` - File missing or invalid
    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var("METADATA_CONFIG_PATH")
            .unwrap_or_else(|_| "config/metadata.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path))?;
            let config = Self::from_toml(&content)?;
            info!("Loaded configuration from {}", config_path);
            Ok(config)
        } else {
            Err(anyhow::anyhow!(
                "Configuration file '{}' not found. Please copy the template:\n\
                cp config/metadata.template.toml config/metadata.toml",
                config_path
            ))
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid configuration TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.program_id()?;
        if self.cache.backend == CacheBackend::File && self.cache.path.is_none() {
            anyhow::bail!("cache.path is required when cache.backend = \"file\"");
        }
        Ok(())
    }

    pub fn program_id(&self) -> anyhow::Result<Pubkey> {
        Pubkey::from_str(&self.metadata.program_id)
            .context("Invalid metadata.program_id (expected base58 string)")
    }

    /// Opens the configured cache store.
    pub fn build_store(&self) -> anyhow::Result<Arc<dyn CacheStore>> {
        Ok(match self.cache.backend {
            CacheBackend::Memory => Arc::new(MemoryStore::new()),
            CacheBackend::File => {
                let path = self
                    .cache
                    .path
                    .as_deref()
                    .context("cache.path is required for the file backend")?;
                Arc::new(JsonFileStore::open(path)?)
            }
        })
    }

    pub fn build_resolver(&self) -> anyhow::Result<AddressResolver> {
        Ok(AddressResolver::new(self.build_store()?))
    }

    pub fn build_decoder(&self) -> anyhow::Result<MetadataDecoder> {
        Ok(MetadataDecoder::new(
            self.program_id()?,
            Arc::new(self.build_resolver()?),
        ))
    }
}

impl Default for Config {
    /// Mainnet metadata program with an in-memory cache.
    fn default() -> Self {
        Self {
            metadata: MetadataConfig {
                program_id: METADATA_PROGRAM_ID.to_string(),
            },
            cache: CacheConfig::default(),
        }
    }
}
