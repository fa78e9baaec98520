use thiserror::Error;

use crate::models::{Denomination, ItemId};

/// Persistence failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A partial commit could not be undone; `key` is ahead of memory
    #[error("Persisted {key} is ahead of memory and could not be restored: {source}")]
    Diverged {
        key: String,
        #[source]
        source: Box<StorageError>,
    },
}

/// Every failure a marketplace operation can report
///
/// None of these are fatal: the operation leaves state unchanged and the
/// caller may retry.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("Please connect your wallet first")]
    NotConnected,
    #[error("You cannot buy your own NFT")]
    SelfPurchase,
    #[error("Insufficient {denomination} balance: have {available:.2}, need {required:.2}")]
    InsufficientBalance {
        denomination: Denomination,
        available: f64,
        required: f64,
    },
    #[error("Please choose a currency (memex or area)")]
    MissingDenomination,
    #[error("Unknown currency '{0}'")]
    UnknownDenomination(String),
    #[error("Items are not priced in {0}")]
    UnpricedDenomination(Denomination),
    #[error("Unknown rarity '{0}'")]
    UnknownRarity(String),
    #[error("Listing needs a {0}")]
    IncompleteListing(&'static str),
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
    #[error("NFT {0} not found")]
    NotFound(ItemId),
    #[error("You do not own NFT {0}")]
    NotOwner(ItemId),
    #[error("NFT {0} is already listed for sale")]
    AlreadyListed(ItemId),
    #[error("NFT {0} is not for sale")]
    NotForSale(ItemId),
    #[error("Another transaction is still processing")]
    Busy,
    #[error("Collaborator failure: {0}")]
    Collaborator(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl MarketError {
    /// Input or precondition failures, reported verbatim to the user
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            MarketError::Busy | MarketError::Collaborator(_) | MarketError::Storage(_)
        )
    }

    /// Notification text shown to the user.
    ///
    /// Collaborator and storage failures collapse to a generic message for
    /// the operation; the detail goes to the log instead.
    pub fn user_message(&self, operation: &str) -> String {
        match self {
            MarketError::Collaborator(_) | MarketError::Storage(_) => {
                format!("{} failed", operation)
            }
            other => other.to_string(),
        }
    }
}
