//! # Ports
//!
//! Any adapter must implement these traits to be wired in by the binary.

use secrecy::SecretString;

use crate::error::StorageResult;

/// Durable string key-value storage holding whole serialized documents.
///
/// `set` replaces the previous value in full. A failed `set` must leave the
/// previous value readable.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Decides whether a credential pair unlocks admin operations.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AccessGate: Send + Sync {
    fn authenticate(&self, username: &str, password: &SecretString) -> bool;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
