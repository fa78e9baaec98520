use super::{report, Session};
use crate::models::{Denomination, ItemId};
use crate::utils::format_amount;

pub async fn execute(session: &Session, args: &[&str]) -> Result<String, String> {
    let Some(id) = args.first() else {
        return Err("Usage: buy <id> [memex|area]".to_string());
    };
    let denomination: Denomination = match args.get(1) {
        Some(d) => d.parse().map_err(|e| report(e, "Purchase"))?,
        None => Denomination::Memex,
    };

    println!("⏳ Processing purchase...");
    let receipt = session
        .store
        .purchase(&ItemId::from(*id), denomination)
        .await
        .map_err(|e| report(e, "Purchase"))?;

    let (title, paid) = match &receipt.record {
        Some(record) => (record.item_title.clone(), record.amount_paid()),
        None => (id.to_string(), 0.0),
    };
    Ok(format!(
        "✅ {} purchased for {} {}\nTx: {}",
        title,
        format_amount(paid),
        denomination,
        receipt.tx_hash
    ))
}
