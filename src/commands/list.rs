use super::{report, Session};
use crate::models::{NewItem, Price, Rarity};
use crate::utils::format_amount;

const USAGE: &str =
    "Usage: list <title> | <description> | <category> | <rarity> | <memex> | <area> [| <image>]";

fn parse_amount(field: &str, name: &str) -> Result<f64, String> {
    field
        .parse::<f64>()
        .map_err(|_| format!("Invalid {} price '{}'", name, field))
}

/// Split the `|`-separated listing form
pub fn parse_listing(args: &[&str]) -> Result<NewItem, String> {
    let line = args.join(" ");
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 6 || fields.len() > 7 {
        return Err(USAGE.to_string());
    }

    let rarity: Rarity = fields[3].parse().map_err(|e| report(e, "Listing"))?;
    let price = Price::new(
        parse_amount(fields[4], "aMEMEX")?,
        parse_amount(fields[5], "AREA")?,
    );

    let mut item = NewItem::new(fields[0], fields[1], price);
    item.category = fields[2].to_string();
    item.rarity = rarity;
    item.image = fields.get(6).filter(|s| !s.is_empty()).map(|s| s.to_string());
    Ok(item)
}

pub async fn execute(session: &Session, args: &[&str]) -> Result<String, String> {
    let new_item = parse_listing(args)?;

    println!("⏳ Listing NFT...");
    let receipt = session
        .store
        .list(new_item)
        .await
        .map_err(|e| report(e, "Listing"))?;

    let Some(item) = receipt.item else {
        return Ok(format!("✅ Listed\nTx: {}", receipt.tx_hash));
    };
    Ok(format!(
        "✅ {} listed as #{} for {} aMEMEX / {} AREA\nTx: {}",
        item.title,
        item.id,
        format_amount(item.price.memex),
        format_amount(item.price.area),
        receipt.tx_hash
    ))
}
