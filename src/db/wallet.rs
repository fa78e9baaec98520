use tracing::warn;

use super::KeyValueStore;
use crate::models::WalletState;
use crate::utils::StorageError;

pub const WALLET_KEY: &str = "wallet";

/// Load the stored wallet snapshot; an unreadable snapshot counts as absent
pub async fn load_wallet(store: &dyn KeyValueStore) -> Result<Option<WalletState>, StorageError> {
    let Some(raw) = store.get(WALLET_KEY).await? else {
        return Ok(None);
    };

    match serde_json::from_str::<WalletState>(&raw) {
        Ok(wallet) => Ok(Some(wallet)),
        Err(e) => {
            warn!("Ignoring corrupt wallet snapshot: {}", e);
            Ok(None)
        }
    }
}

/// Replace the stored wallet snapshot
pub async fn save_wallet(store: &dyn KeyValueStore, wallet: &WalletState) -> Result<(), StorageError> {
    let json = serde_json::to_string(wallet)?;
    store.put(WALLET_KEY, &json).await
}

/// Forget the stored wallet (disconnect)
pub async fn clear_wallet(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(WALLET_KEY).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::{Address, Balances};

    #[tokio::test]
    async fn wallet_roundtrip_and_clear() {
        let store = MemoryStore::new();
        assert!(load_wallet(&store).await.unwrap().is_none());

        let wallet = WalletState::connected(
            Address::from("0xabc"),
            Balances { eth: 1.5, memex: 200.0, area: 0.0 },
        );
        save_wallet(&store, &wallet).await.unwrap();
        assert_eq!(load_wallet(&store).await.unwrap(), Some(wallet));

        clear_wallet(&store).await.unwrap();
        assert!(load_wallet(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_snapshot_is_treated_as_absent() {
        let store = MemoryStore::new();
        store.put(WALLET_KEY, "{not json").await.unwrap();
        assert!(load_wallet(&store).await.unwrap().is_none());
    }
}
