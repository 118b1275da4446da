//! Account Decoding Utility
//!
//! Decodes a metadata program account (or instruction payload) and prints it
//! as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Detect the account type from its key byte
//! cargo run --bin decode_account -- auto <base64 data>
//!
//! # Decode with an explicit layout; hex input is accepted with a 0x prefix
//! cargo run --bin decode_account -- MasterEditionV2 0x06...
//!
//! # Metadata accounts also get their edition address derived, in both modes
//! cargo run --bin decode_account -- Metadata <base64 data>
//! ```
//!
//! The metadata program and address cache come from `config/metadata.toml`
//! (or `METADATA_CONFIG_PATH`); without a config file the mainnet program and
//! an in-memory cache are used.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{info, warn};

use token_metadata::{decode, Config, MetadataDecoder, RecordKind};

fn parse_data(input: &str) -> Result<Vec<u8>> {
    match input.strip_prefix("0x") {
        Some(hex_data) => hex::decode(hex_data).context("Invalid hex account data"),
        None => STANDARD
            .decode(input.trim())
            .context("Invalid base64 account data"),
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("decode_account")
}

fn metadata_decoder() -> Result<MetadataDecoder> {
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Using default configuration: {}", e);
        Config::default()
    });
    config.build_decoder()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!(
            "Usage: {} <auto|RecordKind> <base64 or 0x-hex data>",
            program_name(&args)
        );
        std::process::exit(2);
    }

    let data = parse_data(&args[2])?;
    info!("Decoding {} bytes", data.len());

    let json = if args[1].eq_ignore_ascii_case("auto") {
        serde_json::to_value(metadata_decoder()?.decode_account(&data)?)?
    } else {
        match RecordKind::from_name(&args[1])? {
            RecordKind::Metadata => serde_json::to_value(metadata_decoder()?.decode(&data)?)?,
            kind => decode(kind, &data)?.to_json(),
        }
    };

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that usage output survives an empty argument list
    #[test]
    fn test_program_name_without_args() {
        assert_eq!(program_name(&[]), "decode_account");
        assert_eq!(program_name(&["/usr/bin/decode".to_string()]), "/usr/bin/decode");
    }

    #[test]
    fn test_parse_data_formats() {
        assert_eq!(parse_data("0x0607").unwrap(), vec![6, 7]);
        assert_eq!(parse_data("BgcI").unwrap(), vec![6, 7, 8]);
        assert!(parse_data("0xzz").is_err());
    }
}
