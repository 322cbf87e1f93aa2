// src/bin/protector_keygen.rs
//! Provision a passphrase/salt pair for data protection.

use aesprotect_rs::consts::{DEFAULT_FRIENDLY_WORD_COUNT, DEFAULT_SECURE_KEY_LENGTH};
use aesprotect_rs::keygen::friendly_word_count;
use aesprotect_rs::{generate_friendly_key_pair, generate_secure_key_pair, KeyPair};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// DATA_PROTECTION_PASSPHRASE=... lines
    Env,
    /// [data_protection] section
    Toml,
}

/// Generate the secrets a Protector is built from
#[derive(Parser, Debug)]
#[command(name = "protector-keygen", version, about, long_about = None)]
struct Cli {
    /// Human-typable word phrases instead of random base64
    #[arg(long)]
    friendly: bool,

    /// Words per secret (with --friendly; 0 means the default)
    #[arg(long, default_value_t = DEFAULT_FRIENDLY_WORD_COUNT)]
    words: usize,

    /// Random bytes per secret (without --friendly)
    #[arg(long, default_value_t = DEFAULT_SECURE_KEY_LENGTH)]
    length: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Env)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let pair: KeyPair = if cli.friendly {
        let words = friendly_word_count(cli.words);
        let bits = KeyPair::friendly_entropy_bits(words);
        if bits < 64.0 {
            warn!(words, bits, "friendly secrets are low-entropy; prefer the default mode");
        }
        generate_friendly_key_pair(words).context("failed to generate friendly key pair")?
    } else {
        generate_secure_key_pair(cli.length).context("failed to generate secure key pair")?
    };

    info!(friendly = cli.friendly, "generated key pair");

    let rendered = match cli.format {
        OutputFormat::Env => pair.to_env_lines(),
        OutputFormat::Toml => pair.to_toml(),
    };
    print!("{rendered}");
    Ok(())
}
