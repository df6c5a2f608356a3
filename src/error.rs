// src/error.rs
//! Public error type for the entire crate

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("bad argument `{argument}`: {received}")]
    Type {
        argument: &'static str,
        received: String,
    },

    #[error(transparent)]
    PasswordStrength(#[from] WeakPassword),

    #[error("secret key error: {0}")]
    Key(#[from] KeyIssue),

    #[error("failed to {op} {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        op: FsOp,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{} is {size} bytes, too short to hold a 16-byte IV, not an encrypted vault file",
        path.display()
    )]
    Format { path: PathBuf, size: u64 },

    #[error("invalid operation {received:?}, must be ENCRYPT or DECRYPT")]
    Operation { received: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// The closed set of failure categories callers match on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    PasswordStrength,
    Key,
    FileSystem,
    Operation,
    Config,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Type { .. } => ErrorKind::Type,
            CoreError::PasswordStrength(_) => ErrorKind::PasswordStrength,
            CoreError::Key(_) => ErrorKind::Key,
            CoreError::FileSystem { .. } | CoreError::Format { .. } => ErrorKind::FileSystem,
            CoreError::Operation { .. } => ErrorKind::Operation,
            CoreError::Config(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn fs(op: FsOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::FileSystem {
            path: path.into(),
            op,
            source,
        }
    }
}

/// Why a password was refused. The `Display` text is meant to be shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeakPassword {
    #[error("Your password is not long enough. It must be {min_length} characters or longer.")]
    TooShort { min_length: usize, length: usize },

    #[error(
        "Your password is not strong enough. Try adding different kinds of characters, \
         like numbers, special characters, or uppercase letters."
    )]
    LowEntropy { entropy_bits: f64, required_bits: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyIssue {
    #[error("no key has been established for this session")]
    Unset,

    #[error("key is {actual} bytes, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("key derivation failed: {0}")]
    Derivation(String),
}

/// Filesystem step that failed, carried by [`CoreError::FileSystem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    Read,
    Open,
    Stat,
    Write,
    Truncate,
    Flush,
    ReadDir,
}

impl fmt::Display for FsOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            FsOp::Read => "read",
            FsOp::Open => "open",
            FsOp::Stat => "stat",
            FsOp::Write => "write",
            FsOp::Truncate => "truncate",
            FsOp::Flush => "flush",
            FsOp::ReadDir => "list directory",
        };
        f.write_str(verb)
    }
}
