// src/core/scan.rs
//! Vault discovery — every regular, non-hidden file under a root
//!
//! Traversal is driven by walkdir's explicit stack, so arbitrarily deep vaults
//! never hit a recursion limit. Results come out depth-first in directory
//! listing order; nothing is sorted.

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{CoreError, FsOp};

use super::Result;

/// Lazy iterator over the files of a vault.
///
/// Dot-entries are pruned at every depth below the root, which also keeps the
/// walk out of hidden directories entirely. Symlinks are not followed and are
/// not yielded.
pub struct VaultScanner {
    root: PathBuf,
    inner: walkdir::FilterEntry<walkdir::IntoIter, fn(&DirEntry) -> bool>,
}

impl VaultScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let raw = root.as_ref();
        let root = std::path::absolute(raw)
            .map(|abs| normalize_lexically(&abs))
            .map_err(|e| CoreError::fs(FsOp::ReadDir, raw, e))?;

        let meta = std::fs::metadata(&root).map_err(|e| CoreError::fs(FsOp::ReadDir, &root, e))?;
        if !meta.is_dir() {
            return Err(CoreError::fs(
                FsOp::ReadDir,
                &root,
                std::io::Error::other("vault root is not a directory"),
            ));
        }

        let inner = WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(is_visible as fn(&DirEntry) -> bool);

        Ok(Self { root, inner })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for VaultScanner {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(walk_error(err, &self.root))),
            };
            if entry.file_type().is_file() {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

/// Collect every file under `root`
pub fn scan_vault<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let scanner = VaultScanner::new(root)?;
    let root = scanner.root().to_path_buf();
    let files = scanner.collect::<Result<Vec<_>>>()?;
    debug!(root = %root.display(), count = files.len(), "scanned vault");
    Ok(files)
}

/// Drop `.` and fold `..` into its parent without touching the filesystem.
/// `..` above the root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

fn is_visible(entry: &DirEntry) -> bool {
    entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
}

fn walk_error(err: walkdir::Error, root: &Path) -> CoreError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    CoreError::fs(FsOp::ReadDir, path, source)
}
