use super::Session;
use crate::services::catalog_service::owned_transactions;
use crate::services::profile_service::{build_profile, describe_transaction};
use crate::utils::{format_amount, Page, Table};

pub async fn execute(session: &Session) -> Result<String, String> {
    let state = session.store.snapshot().await;
    let profile =
        build_profile(&state).ok_or_else(|| "Please connect your wallet first".to_string())?;

    let mut out = format!("👤 {}\n", profile.address);
    out.push_str(&format!(
        "Balances: {} ETH | {} aMEMEX | {} AREA\n",
        format_amount(profile.balance.eth),
        format_amount(profile.balance.memex),
        format_amount(profile.balance.area)
    ));
    out.push_str(&format!(
        "Owned: {} ({} for sale, {} unlisted)\nListed value: {} aMEMEX\nTransactions: {}",
        profile.owned.len(),
        profile.listed,
        profile.unlisted,
        format_amount(profile.listed_value),
        profile.history.len()
    ));
    Ok(out)
}

pub async fn history(session: &Session, args: &[&str]) -> Result<String, String> {
    let page_number = match args.first() {
        Some(n) => n
            .parse::<usize>()
            .map_err(|_| format!("Invalid page number '{}'", n))?,
        None => 1,
    };

    let state = session.store.snapshot().await;
    let Some(actor) = state.wallet.actor() else {
        return Err("Please connect your wallet first".to_string());
    };

    let records = owned_transactions(&state.ledger, actor);
    if records.is_empty() {
        return Ok("📜 No transactions yet".to_string());
    }

    let mut page = Page::new(records, session.page_size);
    if !page.go_to(page_number) {
        return Err(format!(
            "Page {} does not exist (1-{})",
            page_number,
            page.total_pages()
        ));
    }

    let mut table = Table::new(vec!["When", "Type", "Details", "Tx"]);
    for record in page.current() {
        let hash = record.tx_hash.get(..10).unwrap_or(record.tx_hash.as_str());
        table.add_row(vec![
            record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            record.kind.to_string(),
            describe_transaction(record),
            format!("{}...", hash),
        ]);
    }
    Ok(format!("📜 Transaction history\n{}{}", table.render(), page.footer()))
}
