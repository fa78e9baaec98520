pub mod table;
pub mod page;
pub mod errors;

pub use table::Table;
pub use page::Page;
pub use errors::{MarketError, StorageError};

/// Format a token amount the way balances are shown everywhere
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
