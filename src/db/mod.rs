use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::utils::StorageError;

pub mod file_store;
pub mod memory;
pub mod transaction;
pub mod wallet;

pub use file_store::JsonFileStore;
pub use memory::MemoryStore;

/// Whole-value key/value persistence
///
/// Values are complete JSON documents. `put` replaces the previous value;
/// nothing is patched incrementally.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Open the file-backed store, creating the state directory if needed
pub async fn init_store(state_dir: &Path) -> Result<JsonFileStore, StorageError> {
    let store = JsonFileStore::open(state_dir).await?;
    info!("Persisted state directory: {}", state_dir.display());
    Ok(store)
}
