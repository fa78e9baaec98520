//! Derived catalog views
//!
//! Pure functions over a state snapshot. Nothing here is stored; views are
//! recomputed on every read.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::{Address, Item, Rarity, TransactionRecord};
use crate::utils::MarketError;

/// Categories offered by the browse filter, `All` first
pub const CATEGORIES: &[&str] = &[
    "All",
    "Art",
    "Digital Art",
    "Photography",
    "Music",
    "Gaming",
    "Sports",
    "Portrait",
    "Science",
    "Nature",
    "Landscape",
];

/// `All`, or exactly one value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl Filter<String> {
    /// Known categories match case-insensitively; anything else is taken verbatim.
    pub fn category(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            return Filter::All;
        }
        let known = CATEGORIES
            .iter()
            .find(|c| c.eq_ignore_ascii_case(input))
            .map(|c| c.to_string());
        Filter::Only(known.unwrap_or_else(|| input.to_string()))
    }
}

impl Filter<Rarity> {
    pub fn rarity(input: &str) -> Result<Self, MarketError> {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        Ok(Filter::Only(input.parse()?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    /// No ranking data exists, so this keeps catalog order
    Popular,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "price-low" | "cheapest" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "popular" => Ok(SortKey::Popular),
            other => Err(format!(
                "Unknown sort '{}' (newest, oldest, price-low, price-high, popular)",
                other
            )),
        }
    }
}

/// What the browse view is showing
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub search: String,
    pub category: Filter<String>,
    pub rarity: Filter<Rarity>,
    pub sort: SortKey,
}

impl CatalogQuery {
    pub fn matches_search(&self, item: &Item) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.title.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
            || item.creator.as_str().to_lowercase().contains(&needle)
    }

    pub fn matches_category(&self, item: &Item) -> bool {
        self.category.matches(&item.category)
    }

    pub fn matches_rarity(&self, item: &Item) -> bool {
        self.rarity.matches(&item.rarity)
    }

    /// Whether `item` belongs in the marketplace listing
    pub fn matches(&self, item: &Item) -> bool {
        item.is_for_sale
            && self.matches_search(item)
            && self.matches_category(item)
            && self.matches_rarity(item)
    }
}

/// Stable sort; equal keys keep their input order
pub fn sort_items(items: &mut [&Item], key: SortKey) {
    let compare = |a: &&Item, b: &&Item| -> Ordering {
        match key {
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::Oldest => a.created_at.cmp(&b.created_at),
            SortKey::PriceLow => a.price.memex.total_cmp(&b.price.memex),
            SortKey::PriceHigh => b.price.memex.total_cmp(&a.price.memex),
            SortKey::Popular => Ordering::Equal,
        }
    };
    items.sort_by(compare);
}

/// Items for sale that pass every filter, in the requested order
pub fn visible_items<'a>(items: &'a [Item], query: &CatalogQuery) -> Vec<&'a Item> {
    let mut visible: Vec<&Item> = items.iter().filter(|item| query.matches(item)).collect();
    sort_items(&mut visible, query.sort);
    visible
}

pub fn owned_items<'a>(items: &'a [Item], owner: &Address) -> Vec<&'a Item> {
    items.iter().filter(|item| item.is_owned_by(owner)).collect()
}

/// Ledger records the actor sent or received, newest first
pub fn owned_transactions<'a>(
    ledger: &'a [TransactionRecord],
    actor: &Address,
) -> Vec<&'a TransactionRecord> {
    ledger.iter().filter(|record| record.involves(actor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_catalog;
    use crate::models::ItemId;

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id.0.clone()).collect()
    }

    #[test]
    fn default_query_shows_everything_for_sale_newest_first() {
        let mut items = seed_catalog();
        items[2].is_for_sale = false;

        let visible = visible_items(&items, &CatalogQuery::default());
        assert_eq!(ids(&visible), vec!["1", "2", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let items = seed_catalog();
        let mut query = CatalogQuery {
            search: "DRAGON".into(),
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&visible_items(&items, &query)), vec!["1"]);

        // Description match
        query.search = "fractal".into();
        assert_eq!(ids(&visible_items(&items, &query)), vec!["6"]);

        // Creator match
        query.search = "0xvwx".into();
        assert_eq!(ids(&visible_items(&items, &query)), vec!["8"]);

        // Surrounding whitespace is part of the needle
        query.search = "#001 ".into();
        assert!(visible_items(&items, &query).is_empty());
        query.search = "#001".into();
        assert_eq!(ids(&visible_items(&items, &query)), vec!["1"]);
    }

    #[test]
    fn category_and_rarity_filters() {
        let items = seed_catalog();
        let query = CatalogQuery {
            category: Filter::<String>::category("art"),
            rarity: Filter::<Rarity>::rarity("rare").unwrap(),
            ..CatalogQuery::default()
        };
        assert_eq!(query.category, Filter::Only("Art".to_string()));
        assert_eq!(ids(&visible_items(&items, &query)), vec!["3"]);

        assert!(Filter::<Rarity>::rarity("mythic").is_err());
        assert_eq!(Filter::<Rarity>::rarity("All").unwrap(), Filter::All);
    }

    #[test]
    fn filter_clauses_commute() {
        let items = seed_catalog();
        let query = CatalogQuery {
            search: "a".into(),
            category: Filter::Only("Art".into()),
            rarity: Filter::Only(Rarity::Legendary),
            sort: SortKey::Popular,
        };
        let clauses: [fn(&CatalogQuery, &Item) -> bool; 3] = [
            CatalogQuery::matches_search,
            CatalogQuery::matches_category,
            CatalogQuery::matches_rarity,
        ];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

        let expected = ids(&visible_items(&items, &query));
        for order in orders {
            let mut remaining: Vec<&Item> = items.iter().filter(|i| i.is_for_sale).collect();
            for idx in order {
                remaining.retain(|item| clauses[idx](&query, item));
                // Applying the same clause twice changes nothing
                let again: Vec<&Item> =
                    remaining.iter().copied().filter(|item| clauses[idx](&query, item)).collect();
                assert_eq!(ids(&again), ids(&remaining));
            }
            assert_eq!(ids(&remaining), expected);
        }
    }

    #[test]
    fn price_sorts_are_reverses_of_each_other() {
        let items = seed_catalog();
        let mut low: Vec<&Item> = items.iter().collect();
        let mut high = low.clone();
        sort_items(&mut low, SortKey::PriceLow);
        sort_items(&mut high, SortKey::PriceHigh);

        let mut reversed = ids(&high);
        reversed.reverse();
        assert_eq!(ids(&low), reversed);
        assert_eq!(low[0].price.memex, 35.0);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut items = seed_catalog();
        for item in items.iter_mut() {
            item.price.memex = 10.0;
            item.created_at = items_epoch();
        }
        let mut refs: Vec<&Item> = items.iter().collect();
        sort_items(&mut refs, SortKey::PriceHigh);
        assert_eq!(ids(&refs), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        sort_items(&mut refs, SortKey::Oldest);
        assert_eq!(ids(&refs), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    fn items_epoch() -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc)
    }

    #[test]
    fn oldest_first_reverses_seed_order() {
        let items = seed_catalog();
        let query = CatalogQuery {
            sort: SortKey::Oldest,
            ..CatalogQuery::default()
        };
        assert_eq!(
            ids(&visible_items(&items, &query)),
            vec!["8", "7", "6", "5", "4", "3", "2", "1"]
        );
    }

    #[test]
    fn parses_sort_keys() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert_eq!("NEWEST".parse::<SortKey>().unwrap(), SortKey::Newest);
        assert!("random".parse::<SortKey>().is_err());
    }

    #[test]
    fn ownership_views() {
        let mut items = seed_catalog();
        let me = Address::from("0xme");
        items[0].owner = me.clone();
        items[0].is_for_sale = false;

        let mine = owned_items(&items, &me);
        assert_eq!(ids(&mine), vec!["1"]);
        assert!(owned_transactions(&[], &me).is_empty());
        assert_eq!(mine[0].id, ItemId::from("1"));
    }
}
