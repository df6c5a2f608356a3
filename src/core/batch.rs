// src/core/batch.rs
//! Sequential batch processing over a vault file list
//!
//! A batch is not transactional: it stops at the first failing file and
//! leaves every file before it in its new state. Recovering from a partial
//! batch is up to the caller.

use std::path::Path;

use tracing::{error, info};

use crate::enums::Operation;

use super::file::{decrypt_file, encrypt_file};
use super::key::Session;
use super::Result;

/// Apply `operation` to each path in order, stopping at the first failure
pub fn process_batch<P: AsRef<Path>>(
    paths: &[P],
    operation: Operation,
    session: &Session,
) -> Result<()> {
    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let outcome = match operation {
            Operation::Encrypt => encrypt_file(path, session),
            Operation::Decrypt => decrypt_file(path, session),
        };
        if let Err(err) = outcome {
            error!(
                %operation,
                path = %path.display(),
                completed = index,
                total = paths.len(),
                "batch halted: {err}"
            );
            return Err(err);
        }
    }

    info!(%operation, files = paths.len(), "batch complete");
    Ok(())
}

/// Like [`process_batch`] with the operation given as text.
///
/// Only `ENCRYPT` and `DECRYPT` are accepted; anything else fails before any
/// file is touched.
pub fn process_batch_str<P: AsRef<Path>>(
    paths: &[P],
    operation: &str,
    session: &Session,
) -> Result<()> {
    let operation: Operation = operation.parse()?;
    process_batch(paths, operation, session)
}
