// src/core/mod.rs
pub mod batch;
pub mod crypto;
pub mod file;
pub mod key;
pub mod password;
pub mod scan;

pub use batch::*;
pub use crypto::*;
pub use file::*;
pub use key::*;
pub use password::*;
pub use scan::*;

// Keep only the absolute top-level public API here if needed
pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
