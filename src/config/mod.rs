// src/config/mod.rs
//! Configuration system for cryptsidian-vault
//!
//! TOML file + env overrides. Nothing here is global: callers load a
//! [`Config`] and pass what they need down.

pub use app::{from_toml_str, load, load_from, Config, Kdf, Password, Vault};
pub use defaults::{CONFIG_ENV, VAULT_ENV};

mod app;
mod defaults;
