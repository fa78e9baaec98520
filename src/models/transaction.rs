//! Ledger models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::item::{Item, ItemId, Price};
use crate::models::wallet::{Address, Denomination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Purchase,
    /// Seller-side record. Nothing emits it yet.
    Sale,
    Listing,
    Delisting,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransactionKind::Purchase => "purchase",
            TransactionKind::Sale => "sale",
            TransactionKind::Listing => "listing",
            TransactionKind::Delisting => "delisting",
        };
        f.write_str(s)
    }
}

/// Immutable ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(rename = "nftId")]
    pub item_id: ItemId,
    #[serde(rename = "nftTitle")]
    pub item_title: String,
    #[serde(rename = "nftImage")]
    pub item_image: String,
    pub price: Price,
    #[serde(rename = "currency")]
    pub denomination: Denomination,
    pub from: Address,
    pub to: Address,
    pub timestamp: DateTime<Utc>,
    pub tx_hash: String,
}

impl TransactionRecord {
    /// Snapshot `item` into a new record with a fresh id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: TransactionKind,
        item: &Item,
        price: Price,
        denomination: Denomination,
        from: Address,
        to: Address,
        timestamp: DateTime<Utc>,
        tx_hash: String,
    ) -> Self {
        TransactionRecord {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            item_id: item.id.clone(),
            item_title: item.title.clone(),
            item_image: item.image.clone(),
            price,
            denomination,
            from,
            to,
            timestamp,
            tx_hash,
        }
    }

    pub fn involves(&self, address: &Address) -> bool {
        self.from == *address || self.to == *address
    }

    /// Price in the denomination that was actually used
    pub fn amount_paid(&self) -> f64 {
        match self.denomination {
            Denomination::Area => self.price.area,
            _ => self.price.memex,
        }
    }
}
