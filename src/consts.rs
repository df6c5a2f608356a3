// src/consts.rs
//! Shared constants — security parameters and defaults

/// Length of the session key in bytes (AES-256)
pub const KEY_LENGTH: usize = 32;

/// Length of the IV prepended to every encrypted file
pub const IV_LENGTH: usize = 16;

/// Salt shipped with every build of this tool.
///
/// Shared by all users: the same password always yields the same key,
/// so there is no extra secret to lose. Override it through `kdf.salt` in the config
/// if you can keep track of your own. Files encrypted under one salt cannot be
/// decrypted under another.
pub const FIXED_SALT: [u8; 32] = [
    0x31, 0x70, 0xeb, 0xab, 0x43, 0xb9, 0xcc, 0xaa, 0xac, 0xbb, 0xb0, 0xee, 0x72, 0x28, 0x5a, 0x21,
    0xc3, 0x9f, 0xa3, 0x24, 0x31, 0x5d, 0xb3, 0xdd, 0xcc, 0x11, 0xda, 0x1e, 0x3f, 0xf8, 0x16, 0xe5,
];

/// scrypt cost defaults (N = 2^14, r = 8, p = 1)
// Existing vaults were encrypted with these; changing them changes every key
pub const SCRYPT_LOG_N: u8 = 14;
pub const SCRYPT_R: u32 = 8;
pub const SCRYPT_P: u32 = 1;

/// Default password strength requirement, in bits
pub const DEFAULT_ENTROPY_LEVEL: u32 = 80;

/// Levels below this are refused outright
pub const MIN_ENTROPY_LEVEL: u32 = 64;

/// Size of the largest charspace a password can draw from: 10 + 26 + 26 + 32
pub const MAX_CHARSPACE: u32 = 94;

/// Config file looked up when `CRYPTSIDIAN_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "cryptsidian.toml";
