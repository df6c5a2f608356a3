// src/core/file.rs
//! In-place file encryption/decryption
//!
//! Builds on the pure primitives in crypto.rs. On disk an encrypted file is
//! `IV (16 bytes) || ciphertext`, with no header or tag. Both directions load
//! the whole file into memory and rewrite it through the same handle.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, error};
use zeroize::Zeroizing;

use crate::consts::IV_LENGTH;
use crate::error::{CoreError, FsOp};

use super::crypto::{apply_keystream, generate_iv, Iv};
use super::key::Session;
use super::Result;

/// Encrypt `path` in place with the session key.
///
/// The file grows by exactly 16 bytes. Nothing is truncated first: the
/// ciphertext is as long as the plaintext, so IV + ciphertext overwrites
/// every original byte.
pub fn encrypt_file<P: AsRef<Path>>(path: P, session: &Session) -> Result<()> {
    let path = path.as_ref();
    let mut buf = Zeroizing::new(fs::read(path).map_err(|e| CoreError::fs(FsOp::Read, path, e))?);
    let key = session.current_key()?;

    let iv = generate_iv();
    apply_keystream(key, &iv, &mut buf);

    let mut file = open_rw(path)?;
    file.write_all(&iv)
        .and_then(|()| file.write_all(&buf))
        .map_err(|e| CoreError::fs(FsOp::Write, path, e))?;
    flush(&file, path)?;

    debug!(path = %path.display(), bytes = buf.len(), "encrypted");
    Ok(())
}

/// Decrypt `path` in place with the session key.
///
/// The IV is read back from the first 16 bytes, the plaintext is written from
/// offset 0 and the file is then truncated to the plaintext length. A file
/// shorter than 16 bytes fails with [`CoreError::Format`] before anything is read.
pub fn decrypt_file<P: AsRef<Path>>(path: P, session: &Session) -> Result<()> {
    let path = path.as_ref();
    let size = fs::metadata(path)
        .map_err(|e| CoreError::fs(FsOp::Stat, path, e))?
        .len();
    let key = session.current_key()?;

    let Some(cipher_len) = size.checked_sub(IV_LENGTH as u64) else {
        return Err(CoreError::Format {
            path: path.to_path_buf(),
            size,
        });
    };

    let mut file = open_rw(path)?;

    let mut iv: Iv = [0u8; IV_LENGTH];
    let mut buf = Zeroizing::new(vec![0u8; cipher_len as usize]);
    file.read_exact(&mut iv)
        .and_then(|()| file.read_exact(&mut buf))
        .map_err(|e| CoreError::fs(FsOp::Read, path, e))?;

    apply_keystream(key, &iv, &mut buf);

    file.seek(SeekFrom::Start(0))
        .and_then(|_| file.write_all(&buf))
        .map_err(|e| CoreError::fs(FsOp::Write, path, e))?;

    if let Err(e) = file.set_len(cipher_len) {
        error!(path = %path.display(), "failed truncating file after decryption: {e}");
        return Err(CoreError::fs(FsOp::Truncate, path, e));
    }
    flush(&file, path)?;

    debug!(path = %path.display(), bytes = buf.len(), "decrypted");
    Ok(())
}

fn open_rw(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| CoreError::fs(FsOp::Open, path, e))
}

/// Push the rewritten bytes to disk before the handle is released
fn flush(file: &File, path: &Path) -> Result<()> {
    file.sync_all().map_err(|e| {
        error!(path = %path.display(), "failed to flush file: {e}");
        CoreError::fs(FsOp::Flush, path, e)
    })
}
