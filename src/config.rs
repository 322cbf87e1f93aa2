// src/config.rs
//! Protector configuration
//!
//! TOML file with a `[data_protection]` section, falling back to the
//! `DATA_PROTECTION_PASSPHRASE` / `DATA_PROTECTION_SALT` environment variables.
//! The result is an explicit value handed to [`Protector::from_config`]; nothing
//! is cached globally.
//!
//! ```toml
//! [data_protection]
//! passphrase = "..."
//! salt = "..."
//! # iterations = 100000
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::consts::{PASSPHRASE_ENV_VAR, PBKDF2_ITERATIONS, SALT_ENV_VAR};
use crate::error::{ProtectorError, Result};
use crate::protector::Protector;

/// Top-level configuration document.
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtectorConfig {
    /// The `[data_protection]` table; absent means everything comes from the environment.
    #[serde(default)]
    pub data_protection: DataProtectionSection,
}

/// `[data_protection]` table. Every key is optional.
#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataProtectionSection {
    /// Operator passphrase; falls back to `DATA_PROTECTION_PASSPHRASE`.
    pub passphrase: Option<String>,
    /// PBKDF2 salt; falls back to `DATA_PROTECTION_SALT`.
    pub salt: Option<String>,
    /// PBKDF2 iteration count; defaults to 100 000.
    pub iterations: Option<u32>,
}

/// Fully resolved secrets, ready for the KDF.
#[derive(Clone)]
pub struct ResolvedSecrets {
    /// Non-empty passphrase.
    pub passphrase: String,
    /// Non-empty salt.
    pub salt: String,
    /// PBKDF2 iteration count.
    pub iterations: u32,
}

impl ProtectorConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ProtectorError::Config(format!("invalid TOML: {e}")))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when given and present; otherwise start empty so the
    /// environment can supply everything.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p.exists() => Self::from_file(p),
            Some(p) => {
                tracing::warn!(path = %p.display(), "config file not found, relying on environment");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<ResolvedSecrets> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with an injected variable lookup: config value first, then
    /// `lookup(DATA_PROTECTION_PASSPHRASE)` / `lookup(DATA_PROTECTION_SALT)`.
    /// Empty strings count as missing.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<ResolvedSecrets>
    where
        F: Fn(&str) -> Option<String>,
    {
        let section = &self.data_protection;
        let pick = |configured: &Option<String>, var: &str| {
            configured
                .clone()
                .filter(|v| !v.is_empty())
                .or_else(|| lookup(var).filter(|v| !v.is_empty()))
        };

        let passphrase = pick(&section.passphrase, PASSPHRASE_ENV_VAR);
        let salt = pick(&section.salt, SALT_ENV_VAR);

        match (passphrase, salt) {
            (Some(passphrase), Some(salt)) => Ok(ResolvedSecrets {
                passphrase,
                salt,
                iterations: section.iterations.unwrap_or(PBKDF2_ITERATIONS),
            }),
            _ => Err(ProtectorError::Config(format!(
                "missing passphrase and/or salt for data protection \
                 (set [data_protection] in config or {PASSPHRASE_ENV_VAR}/{SALT_ENV_VAR})"
            ))),
        }
    }
}

impl std::fmt::Debug for ProtectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtectorConfig")
            .field("data_protection", &self.data_protection)
            .finish()
    }
}

impl std::fmt::Debug for DataProtectionSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataProtectionSection")
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .field("salt", &self.salt.as_ref().map(|_| "[REDACTED]"))
            .field("iterations", &self.iterations)
            .finish()
    }
}

impl std::fmt::Debug for ResolvedSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedSecrets")
            .field("passphrase", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .field("iterations", &self.iterations)
            .finish()
    }
}

impl Protector {
    /// Build a protector from configuration, consulting the environment for
    /// anything the config leaves out.
    pub fn from_config(config: &ProtectorConfig) -> Result<Self> {
        Self::from_secrets(&config.resolve()?)
    }

    /// Build a protector from already-resolved secrets.
    pub fn from_secrets(secrets: &ResolvedSecrets) -> Result<Self> {
        Protector::builder()
            .iterations(secrets.iterations)
            .build(&secrets.passphrase, &secrets.salt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn config_values_win_over_environment() {
        let config = ProtectorConfig::from_toml_str(
            "[data_protection]\npassphrase = \"from-file\"\nsalt = \"file-salt\"\n",
        )
        .unwrap();
        let resolved = config
            .resolve_with(|_| Some("from-env".to_string()))
            .unwrap();
        assert_eq!(resolved.passphrase, "from-file");
        assert_eq!(resolved.salt, "file-salt");
        assert_eq!(resolved.iterations, PBKDF2_ITERATIONS);
    }

    #[test]
    fn environment_fills_gaps() {
        let config =
            ProtectorConfig::from_toml_str("[data_protection]\npassphrase = \"p\"\n").unwrap();
        let resolved = config
            .resolve_with(|name| (name == SALT_ENV_VAR).then(|| "env-salt".to_string()))
            .unwrap();
        assert_eq!(resolved.passphrase, "p");
        assert_eq!(resolved.salt, "env-salt");
    }

    #[test]
    fn empty_values_count_as_missing() {
        let config = ProtectorConfig::from_toml_str(
            "[data_protection]\npassphrase = \"\"\nsalt = \"s\"\n",
        )
        .unwrap();
        assert!(matches!(
            config.resolve_with(no_env),
            Err(ProtectorError::Config(_))
        ));
    }

    #[test]
    fn nothing_configured_is_config_error() {
        assert!(matches!(
            ProtectorConfig::default().resolve_with(no_env),
            Err(ProtectorError::Config(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            ProtectorConfig::from_toml_str("[data_protection]\npasphrase = \"typo\"\n"),
            Err(ProtectorError::Config(_))
        ));
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = ProtectorConfig::from_toml_str(
            "[data_protection]\npassphrase = \"hunter2\"\nsalt = \"pepper\"\n",
        )
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("pepper"));
    }
}
