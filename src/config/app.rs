// src/config/app.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{DEFAULT_CONFIG_FILE, MIN_ENTROPY_LEVEL};
use crate::core::KdfParams;
use crate::error::CoreError;

type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub kdf: Kdf,
    pub password: Password,
    pub vault: Vault,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Kdf {
    /// 32-byte salt as 64 hex characters
    pub salt: String,
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Password {
    pub entropy_level: u32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Vault {
    /// Directory processed when none is given explicitly
    pub root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kdf: default_kdf(),
            password: default_password(),
            vault: Vault::default(),
        }
    }
}

impl Default for Kdf {
    fn default() -> Self {
        default_kdf()
    }
}

impl Default for Password {
    fn default() -> Self {
        default_password()
    }
}

impl Config {
    /// Key derivation settings in the form [`crate::core::derive_key`] takes them
    pub fn kdf_params(&self) -> Result<KdfParams> {
        let bytes = hex::decode(self.kdf.salt.trim())
            .map_err(|e| CoreError::Config(format!("kdf.salt is not valid hex: {e}")))?;
        let salt: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            CoreError::Config(format!("kdf.salt must be 32 bytes, got {}", bytes.len()))
        })?;

        Ok(KdfParams {
            salt,
            log_n: self.kdf.log_n,
            r: self.kdf.r,
            p: self.kdf.p,
            entropy_level: self.password.entropy_level,
        })
    }

    fn validate(self) -> Result<Self> {
        if self.password.entropy_level < MIN_ENTROPY_LEVEL {
            return Err(CoreError::Config(format!(
                "password.entropy_level must be at least {MIN_ENTROPY_LEVEL}, got {}",
                self.password.entropy_level
            )));
        }
        self.kdf_params()?;
        Ok(self)
    }
}

/// Parse a TOML document; missing sections and fields take their defaults
pub fn from_toml_str(content: &str) -> Result<Config> {
    let conf: Config = toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))?;
    conf.validate()
}

pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| CoreError::Config(format!("failed to read {}: {e}", path.display())))?;
    from_toml_str(&content)
}

/// Load the config named by `CRYPTSIDIAN_CONFIG`, or `cryptsidian.toml` when unset.
///
/// Only a missing default file falls back to built-in defaults. A path named
/// explicitly must exist: a wrong salt decrypts to garbage without any error.
/// `CRYPTSIDIAN_VAULT` overrides `vault.root`.
pub fn load() -> Result<Config> {
    let mut conf = match std::env::var(CONFIG_ENV) {
        Ok(config_path) => {
            if !Path::new(&config_path).exists() {
                return Err(CoreError::Config(format!(
                    "{config_path} (from {CONFIG_ENV}) does not exist"
                )));
            }
            debug!(path = %config_path, "loading config");
            load_from(&config_path)?
        }
        Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            debug!(path = DEFAULT_CONFIG_FILE, "loading config");
            load_from(DEFAULT_CONFIG_FILE)?
        }
        Err(_) => {
            warn!("{DEFAULT_CONFIG_FILE} not found, using built-in defaults");
            Config::default()
        }
    };

    if let Ok(root) = std::env::var(VAULT_ENV) {
        conf.vault.root = Some(PathBuf::from(root));
    }

    Ok(conf)
}
