// src/core/key.rs
//! Password → key derivation and the per-session key holder

use scrypt::Params;
use tracing::debug;
use zeroize::Zeroizing;

use crate::aliases::SecretKey32;
use crate::consts::{
    DEFAULT_ENTROPY_LEVEL, FIXED_SALT, KEY_LENGTH, SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R,
};
use crate::error::KeyIssue;

use super::password::validate_password_with_level;
use super::Result;

/// Everything besides the password that goes into a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParams {
    pub salt: [u8; 32],
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
    /// Strength a password must reach before it is accepted
    pub entropy_level: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            salt: FIXED_SALT,
            log_n: SCRYPT_LOG_N,
            r: SCRYPT_R,
            p: SCRYPT_P,
            entropy_level: DEFAULT_ENTROPY_LEVEL,
        }
    }
}

/// Derive `key_length` bytes from `password`.
///
/// The password is validated (and NFC-normalized) first; a weak password fails
/// with the validator's error. Same password + same params always gives the
/// same bytes.
pub fn derive_key(
    password: &str,
    params: &KdfParams,
    key_length: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let normalized = Zeroizing::new(validate_password_with_level(
        password,
        params.entropy_level,
    )?);

    let scrypt_params = Params::new(params.log_n, params.r, params.p, key_length)
        .map_err(|e| KeyIssue::Derivation(e.to_string()))?;

    let mut key = Zeroizing::new(vec![0u8; key_length]);
    scrypt::scrypt(
        normalized.as_bytes(),
        &params.salt,
        &scrypt_params,
        key.as_mut_slice(),
    )
    .map_err(|e| KeyIssue::Derivation(e.to_string()))?;

    debug!(key_length, log_n = params.log_n, "derived key");
    Ok(key)
}

/// Holds the key for one user action.
///
/// Every file operation borrows the session and goes through
/// [`Session::current_key`]. The key is zeroized when the session is dropped.
#[derive(Default)]
pub struct Session {
    key: Option<SecretKey32>,
}

impl Session {
    pub fn new() -> Self {
        Self { key: None }
    }

    /// Derive a key from `password` and return a session holding it
    pub fn establish(password: &str, params: &KdfParams) -> Result<Self> {
        let mut session = Self::new();
        session.set_key(password, params)?;
        Ok(session)
    }

    /// Wrap key bytes obtained elsewhere; anything but 32 bytes is refused
    pub fn from_key_bytes(bytes: &[u8]) -> Result<Self> {
        let key = key_from_slice(bytes)?;
        Ok(Self { key: Some(key) })
    }

    /// Replace the session key with one derived from `password`.
    ///
    /// On failure the previous key (if any) is left untouched.
    pub fn set_key(&mut self, password: &str, params: &KdfParams) -> Result<()> {
        let derived = derive_key(password, params, KEY_LENGTH)?;
        self.key = Some(key_from_slice(&derived)?);
        Ok(())
    }

    pub fn current_key(&self) -> Result<&SecretKey32> {
        let key = self.key.as_ref().ok_or(KeyIssue::Unset)?;
        let actual = key.expose_secret().len();
        if actual != KEY_LENGTH {
            return Err(KeyIssue::WrongLength {
                expected: KEY_LENGTH,
                actual,
            }
            .into());
        }
        Ok(key)
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    /// Drop the key before the session itself goes away
    pub fn clear(&mut self) {
        self.key = None;
    }
}

fn key_from_slice(bytes: &[u8]) -> Result<SecretKey32> {
    let array: [u8; KEY_LENGTH] = bytes.try_into().map_err(|_| KeyIssue::WrongLength {
        expected: KEY_LENGTH,
        actual: bytes.len(),
    })?;
    Ok(SecretKey32::new(array))
}
