//! Opaque string-keyed persistence used for favorites and search history.
//!
//! The catalog layer only sees the [`KeyValueStore`] contract; values are
//! JSON-encoded strings owned by the caller.

mod error;
mod file;
mod memory;

use async_trait::async_trait;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, StorageError>;

/// String-keyed get/set/remove storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value for a key, `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the value for a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key entirely. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
