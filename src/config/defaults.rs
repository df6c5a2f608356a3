// src/config/defaults.rs
use crate::config::app::{Kdf, Password};
use crate::consts::{DEFAULT_ENTROPY_LEVEL, FIXED_SALT, SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R};

/// Path to a TOML config file
pub const CONFIG_ENV: &str = "CRYPTSIDIAN_CONFIG";

/// Overrides `vault.root`
pub const VAULT_ENV: &str = "CRYPTSIDIAN_VAULT";

pub fn default_kdf() -> Kdf {
    Kdf {
        salt: hex::encode(FIXED_SALT),
        log_n: SCRYPT_LOG_N,
        r: SCRYPT_R,
        p: SCRYPT_P,
    }
}

pub fn default_password() -> Password {
    Password {
        entropy_level: DEFAULT_ENTROPY_LEVEL,
    }
}
