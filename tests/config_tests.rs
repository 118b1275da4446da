//! Unit tests for configuration loading

use std::sync::Mutex;
use token_metadata::config::CacheBackend;
use token_metadata::programs::METADATA_PROGRAM_ID;
use token_metadata::Config;

#[path = "mod.rs"]
mod test_helpers;
use test_helpers::*;

/// Tests that touch METADATA_CONFIG_PATH run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// What is tested: Default configuration targets the mainnet program with a memory cache
#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.program_id().unwrap(), METADATA_PROGRAM_ID);
    assert_eq!(config.cache.backend, CacheBackend::Memory);
    assert!(config.cache.path.is_none());
    assert!(config.validate().is_ok());
}

/// What is tested: A minimal TOML document parses with the cache section defaulted
#[test]
fn test_minimal_toml() {
    let config = Config::from_toml(
        r#"
[metadata]
program_id = "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s"
"#,
    )
    .unwrap();

    assert_eq!(config.program_id().unwrap(), METADATA_PROGRAM_ID);
    assert_eq!(config.cache.backend, CacheBackend::Memory);
}

/// What is tested: The file backend requires a path
#[test]
fn test_file_backend_requires_path() {
    let result = Config::from_toml(
        r#"
[metadata]
program_id = "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s"

[cache]
backend = "file"
"#,
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("cache.path"), "unexpected error: {}", err);
}

/// What is tested: A malformed program id is rejected
#[test]
fn test_invalid_program_id() {
    let result = Config::from_toml(
        r#"
[metadata]
program_id = "not-a-key"
"#,
    );

    assert!(result.is_err());
}

/// What is tested: Config loads from the path in METADATA_CONFIG_PATH and builds a decoder
/// Why: Deployments point at their config through the environment
#[test]
fn test_load_from_env_path() {
    let config_path = temp_path("metadata.toml");
    let cache_path = temp_path("cache/pda.json");
    std::fs::write(
        &config_path,
        format!(
            r#"
[metadata]
program_id = "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s"

[cache]
backend = "file"
path = "{}"
"#,
            cache_path.display()
        ),
    )
    .unwrap();

    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var("METADATA_CONFIG_PATH", &config_path);
    let loaded = Config::load();
    std::env::remove_var("METADATA_CONFIG_PATH");
    let config = loaded.unwrap();

    assert_eq!(config.cache.backend, CacheBackend::File);
    let decoder = config.build_decoder().unwrap();
    decoder.edition_address(&test_mint()).unwrap();
    assert!(cache_path.exists(), "derivation should persist the cache file");

    std::fs::remove_file(&config_path).unwrap();
    std::fs::remove_file(&cache_path).unwrap();
}

/// What is tested: A missing config file is reported with the template hint
#[test]
fn test_load_missing_file() {
    let missing = temp_path("missing.toml");
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    std::env::set_var("METADATA_CONFIG_PATH", &missing);
    let result = Config::load();
    std::env::remove_var("METADATA_CONFIG_PATH");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("metadata.template.toml"));
}
