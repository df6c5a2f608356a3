// src/core/crypto.rs
//! Pure cryptographic primitives — no I/O
//!
//! AES-256 in CTR mode with a 128-bit big-endian counter spanning the whole IV.
//! This is a plain stream cipher: there is no authentication tag, so a
//! corrupted ciphertext decrypts to garbage without any error.

use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use rand::RngCore;

use crate::aliases::SecretKey32;
use crate::consts::IV_LENGTH;

type Aes256Ctr = ctr::Ctr128BE<Aes256>;

pub type Iv = [u8; IV_LENGTH];

/// Fresh random IV. Never reuse one under the same key
pub fn generate_iv() -> Iv {
    let mut iv = [0u8; IV_LENGTH];
    rand::rng().fill_bytes(&mut iv);
    iv
}

/// XOR the keystream for (`key`, `iv`) into `buf`. Encryption and decryption are the same call.
pub fn apply_keystream(key: &SecretKey32, iv: &Iv, buf: &mut [u8]) {
    let mut cipher = Aes256Ctr::new(&(*key.expose_secret()).into(), &(*iv).into());
    cipher.apply_keystream(buf);
}

/// Encrypt plaintext in memory → `IV || ciphertext`
pub fn encrypt_to_vec(plaintext: &[u8], key: &SecretKey32) -> Vec<u8> {
    let iv = generate_iv();
    let mut out = Vec::with_capacity(IV_LENGTH + plaintext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(plaintext);
    apply_keystream(key, &iv, &mut out[IV_LENGTH..]);
    out
}

/// Decrypt `IV || ciphertext` in memory. Returns `None` when the input is shorter than an IV.
pub fn decrypt_to_vec(data: &[u8], key: &SecretKey32) -> Option<Vec<u8>> {
    let (iv, ciphertext) = split_iv(data)?;
    let mut out = ciphertext.to_vec();
    apply_keystream(key, &iv, &mut out);
    Some(out)
}

pub(crate) fn split_iv(data: &[u8]) -> Option<(Iv, &[u8])> {
    if data.len() < IV_LENGTH {
        return None;
    }
    let (head, rest) = data.split_at(IV_LENGTH);
    let iv: Iv = head.try_into().ok()?;
    Some((iv, rest))
}
