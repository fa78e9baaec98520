//! Data models for the marketplace
//!
//! Items, wallets and ledger records are plain serde types. The JSON field
//! names match the persisted layout so stored snapshots reload unchanged.

pub mod item;
pub mod wallet;
pub mod transaction;
pub mod listing;

// Re-export commonly used types for convenience
pub use item::{Item, ItemId, Price, Rarity};
pub use wallet::{Address, Balances, Denomination, WalletState};
pub use transaction::{TransactionKind, TransactionRecord};
pub use listing::NewItem;
