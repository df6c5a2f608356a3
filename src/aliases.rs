// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout cryptsidian-vault.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(SecretKey32, 32); // 256-bit AES-CTR session key

// Dynamic secrets
dynamic_alias!(UserPassword, String); // Raw password as typed, before normalization
