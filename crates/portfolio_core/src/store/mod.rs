//! Key-value persistence adapter contracts and implementations.
//!
//! # Responsibility
//! - Define the synchronous string-keyed get/set/remove substrate the
//!   repositories persist through.
//! - Keep filesystem details inside the store boundary.
//!
//! # Invariants
//! - `set` is a full overwrite of the value under the key (last writer wins).
//! - Store failures are recoverable errors, never panics; callers decide how
//!   to surface them.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub mod file;
pub mod memory;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by a key-value store operation.
#[derive(Debug)]
pub enum StoreError {
    Io { key: String, source: io::Error },
    InvalidKey(String),
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { key, source } => write!(f, "store io error for key `{key}`: {source}"),
            Self::InvalidKey(key) => write!(f, "invalid store key `{key}`"),
            Self::Backend(message) => write!(f, "store backend error: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidKey(_) => None,
            Self::Backend(_) => None,
        }
    }
}

/// Synchronous string-keyed blob store.
///
/// Values are UTF-8 JSON documents; the store itself never inspects them.
/// Single-writer, single-reader: no locking is required.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`; absent keys are a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
