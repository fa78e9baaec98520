use super::browse::item_table;
use super::{report, Session};
use crate::models::{ItemId, Price};
use crate::services::catalog_service::owned_items;
use crate::services::Receipt;
use crate::utils::format_amount;

fn parse_price(args: &[&str], usage: &str) -> Result<(ItemId, Price), String> {
    let [id, memex, area] = args else {
        return Err(usage.to_string());
    };
    let memex: f64 = memex
        .parse()
        .map_err(|_| format!("Invalid aMEMEX price '{}'", memex))?;
    let area: f64 = area
        .parse()
        .map_err(|_| format!("Invalid AREA price '{}'", area))?;
    Ok((ItemId::from(*id), Price::new(memex, area)))
}

fn confirmation(receipt: &Receipt, id: &ItemId, done: &str) -> String {
    match &receipt.item {
        Some(item) => format!(
            "✅ {} {} ({} aMEMEX / {} AREA)\nTx: {}",
            item.title,
            done,
            format_amount(item.price.memex),
            format_amount(item.price.area),
            receipt.tx_hash
        ),
        None => format!("⚠️ No NFT {}; nothing changed\nTx: {}", id, receipt.tx_hash),
    }
}

pub async fn update_price(session: &Session, args: &[&str]) -> Result<String, String> {
    let (id, price) = parse_price(args, "Usage: price <id> <memex> <area>")?;

    println!("⏳ Updating price...");
    let receipt = session
        .store
        .update_price(&id, price)
        .await
        .map_err(|e| report(e, "Price update"))?;
    Ok(confirmation(&receipt, &id, "repriced"))
}

pub async fn relist(session: &Session, args: &[&str]) -> Result<String, String> {
    let (id, price) = parse_price(args, "Usage: relist <id> <memex> <area>")?;

    println!("⏳ Relisting NFT...");
    let receipt = session
        .store
        .relist(&id, price)
        .await
        .map_err(|e| report(e, "Relisting"))?;
    Ok(confirmation(&receipt, &id, "is back on sale"))
}

pub async fn delist(session: &Session, args: &[&str]) -> Result<String, String> {
    let [id] = args else {
        return Err("Usage: delist <id>".to_string());
    };
    let id = ItemId::from(*id);

    println!("⏳ Removing from sale...");
    let receipt = session
        .store
        .remove_from_sale(&id)
        .await
        .map_err(|e| report(e, "Delisting"))?;
    Ok(confirmation(&receipt, &id, "removed from sale"))
}

pub async fn collection(session: &Session) -> Result<String, String> {
    let state = session.store.snapshot().await;
    let Some(actor) = state.wallet.actor() else {
        return Err("Please connect your wallet first".to_string());
    };

    let owned = owned_items(&state.items, actor);
    if owned.is_empty() {
        return Ok("🎨 You don't own any NFTs yet".to_string());
    }
    Ok(format!("🎨 Your collection\n{}", item_table(owned).render()))
}
