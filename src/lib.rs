// src/lib.rs
//! cryptsidian-vault — password-based, in-place encryption of a directory of notes
//!
//! Features:
//! - NFC normalization + entropy check on every password
//! - scrypt key derivation (configurable salt, fixed default)
//! - AES-256-CTR with a fresh 16-byte IV prepended to each file
//! - Lazy, non-recursive vault scan that skips dot-entries
//!
//! ```no_run
//! use cryptsidian_vault::{scan_vault, process_batch, KdfParams, Operation, Session};
//!
//! let session = Session::establish("Tr0ub4dor&3!LongEnough", &KdfParams::default())?;
//! let files = scan_vault("/home/me/notes")?;
//! process_batch(&files, Operation::Encrypt, &session)?;
//! # Ok::<(), cryptsidian_vault::CoreError>(())
//! ```

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{SecretKey32, UserPassword};
pub use config::load as load_config;
pub use crate::core::{
    decrypt_file, derive_key, encrypt_file, has_enough_entropy, process_batch,
    process_batch_str, scan_vault, validate_password, KdfParams, Result as CoreResult, Session,
    VaultScanner,
};
pub use enums::Operation;
pub use error::{CoreError, ErrorKind};
