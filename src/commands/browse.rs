use super::Session;
use crate::models::{Item, ItemId, Rarity};
use crate::services::catalog_service::visible_items;
use crate::services::{CatalogQuery, Filter};
use crate::utils::{format_amount, Page, Table};

const USAGE: &str = "Usage: browse [search=<text>] [category=<name>] [rarity=<name>] [sort=<key>] [page=N]";

/// Parse `key=value` arguments. Bare words are joined into the search text.
pub fn parse_query(args: &[&str]) -> Result<(CatalogQuery, usize), String> {
    let mut query = CatalogQuery::default();
    let mut page = 1;
    let mut search = Vec::new();

    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            search.push(*arg);
            continue;
        };
        match key.to_lowercase().as_str() {
            "search" | "q" => search.push(value),
            "category" | "cat" => query.category = Filter::<String>::category(&value.replace('_', " ")),
            "rarity" => query.rarity = Filter::<Rarity>::rarity(value).map_err(|e| e.to_string())?,
            "sort" => query.sort = value.parse()?,
            "page" => {
                page = value
                    .parse()
                    .map_err(|_| format!("Invalid page number '{}'", value))?
            }
            other => return Err(format!("Unknown filter '{}'\n{}", other, USAGE)),
        }
    }

    query.search = search.join(" ");
    Ok((query, page))
}

pub(crate) fn item_row(item: &Item) -> Vec<String> {
    vec![
        item.id.to_string(),
        item.title.clone(),
        item.category.clone(),
        item.rarity.to_string(),
        format_amount(item.price.memex),
        format_amount(item.price.area),
        item.owner.short(),
    ]
}

pub(crate) fn item_table<'a>(items: impl IntoIterator<Item = &'a Item>) -> Table {
    let mut table = Table::new(vec!["ID", "Title", "Category", "Rarity", "aMEMEX", "AREA", "Owner"]);
    for item in items {
        table.add_row(item_row(item));
    }
    table
}

pub async fn execute(session: &Session, args: &[&str]) -> Result<String, String> {
    let (query, page_number) = parse_query(args)?;
    let state = session.store.snapshot().await;

    let visible = visible_items(&state.items, &query);
    if visible.is_empty() {
        return Ok("🔍 No NFTs match your filters".to_string());
    }

    let mut page = Page::new(visible, session.page_size);
    if !page.go_to(page_number) {
        return Err(format!(
            "Page {} does not exist (1-{})",
            page_number,
            page.total_pages()
        ));
    }

    let table = item_table(page.current().iter().copied());
    Ok(format!("🛒 Marketplace\n{}{}", table.render(), page.footer()))
}

pub async fn show(session: &Session, args: &[&str]) -> Result<String, String> {
    let Some(id) = args.first() else {
        return Err("Usage: show <id>".to_string());
    };
    let id = ItemId::from(*id);
    let item = session
        .store
        .item(&id)
        .await
        .ok_or_else(|| format!("NFT {} not found", id))?;

    let status = if item.is_for_sale { "For sale" } else { "Not for sale" };
    Ok(format!(
        "🖼️ {} ({})\n{}\n\nCategory: {}\nRarity:   {}\nPrice:    {} aMEMEX / {} AREA\nStatus:   {}\nCreator:  {}\nOwner:    {}\nListed:   {}\nImage:    {}",
        item.title,
        item.id,
        item.description,
        item.category,
        item.rarity,
        format_amount(item.price.memex),
        format_amount(item.price.area),
        status,
        item.creator,
        item.owner,
        item.created_at.format("%Y-%m-%d"),
        item.image
    ))
}
