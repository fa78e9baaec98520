use tracing::warn;

use super::KeyValueStore;
use crate::models::TransactionRecord;
use crate::utils::StorageError;

pub const TRANSACTIONS_KEY: &str = "transactions";

/// Load the full ledger, newest first. A corrupt ledger loads as empty.
pub async fn load_transactions(
    store: &dyn KeyValueStore,
) -> Result<Vec<TransactionRecord>, StorageError> {
    let Some(raw) = store.get(TRANSACTIONS_KEY).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<TransactionRecord>>(&raw) {
        Ok(ledger) => Ok(ledger),
        Err(e) => {
            warn!("Ignoring corrupt transaction ledger: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Replace the stored ledger with `ledger`
pub async fn save_transactions(
    store: &dyn KeyValueStore,
    ledger: &[TransactionRecord],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(ledger)?;
    store.put(TRANSACTIONS_KEY, &json).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[tokio::test]
    async fn missing_ledger_is_empty() {
        let store = MemoryStore::new();
        assert!(load_transactions(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reads_the_persisted_layout() {
        let store = MemoryStore::new();
        let raw = r#"[{
            "id": "1705300000000",
            "type": "purchase",
            "nftId": "1",
            "nftTitle": "Cosmic Dragon #001",
            "nftImage": "https://example.invalid/dragon.jpeg",
            "price": {"memex": 150, "area": 75},
            "currency": "memex",
            "from": "0xABC...123",
            "to": "0xbuyer",
            "timestamp": "2024-01-15T10:00:00.000Z",
            "txHash": "0xdeadbeef"
        }]"#;
        store.put(TRANSACTIONS_KEY, raw).await.unwrap();

        let ledger = load_transactions(&store).await.unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].item_title, "Cosmic Dragon #001");
        assert_eq!(ledger[0].price.area, 75.0);
        assert_eq!(ledger[0].tx_hash, "0xdeadbeef");

        save_transactions(&store, &ledger).await.unwrap();
        assert_eq!(load_transactions(&store).await.unwrap(), ledger);
    }
}
