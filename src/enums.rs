// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// What a batch does to every file it visits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Encrypt => "ENCRYPT",
            Operation::Decrypt => "DECRYPT",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match only: `"encrypt"` or `" ENCRYPT"` are refused.
impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENCRYPT" => Ok(Operation::Encrypt),
            "DECRYPT" => Ok(Operation::Decrypt),
            other => Err(CoreError::Operation {
                received: other.to_owned(),
            }),
        }
    }
}
