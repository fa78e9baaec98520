use crate::models::{Address, Balances, Item, TransactionKind, TransactionRecord};
use crate::services::catalog_service::{owned_items, owned_transactions};
use crate::services::MarketState;
use crate::utils::format_amount;

/// Overview of the connected actor's holdings
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub address: Address,
    pub balance: Balances,
    pub owned: Vec<Item>,
    pub listed: usize,
    pub unlisted: usize,
    /// Sum of aMEMEX prices of owned items currently for sale
    pub listed_value: f64,
    pub history: Vec<TransactionRecord>,
}

/// `None` when no wallet is connected
pub fn build_profile(state: &MarketState) -> Option<ProfileSummary> {
    let address = state.wallet.actor()?.clone();

    let owned: Vec<Item> = owned_items(&state.items, &address).into_iter().cloned().collect();
    let listed = owned.iter().filter(|item| item.is_for_sale).count();
    let listed_value: f64 = owned
        .iter()
        .filter(|item| item.is_for_sale)
        .map(|item| item.price.memex)
        .sum();
    let history = owned_transactions(&state.ledger, &address)
        .into_iter()
        .cloned()
        .collect();

    Some(ProfileSummary {
        unlisted: owned.len() - listed,
        address,
        balance: state.wallet.balance,
        owned,
        listed,
        listed_value,
        history,
    })
}

/// One-line description such as `Purchased Cosmic Dragon #001 for 150.00 aMEMEX`
pub fn describe_transaction(record: &TransactionRecord) -> String {
    let verb = match record.kind {
        TransactionKind::Purchase => "Purchased",
        TransactionKind::Sale => "Sold",
        TransactionKind::Listing => "Listed",
        TransactionKind::Delisting => "Delisted",
    };
    format!(
        "{} {} for {} {}",
        verb,
        record.item_title,
        format_amount(record.amount_paid()),
        record.denomination
    )
}
