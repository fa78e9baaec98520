//! Catalog item models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::wallet::{Address, Denomination};
use crate::utils::MarketError;

/// Unique item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn generate() -> Self {
        ItemId(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

/// Price of an item in both marketplace denominations
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Price {
    pub memex: f64,
    pub area: f64,
}

impl Price {
    pub fn new(memex: f64, area: f64) -> Self {
        Price { memex, area }
    }

    /// Amount charged when paying in `denomination`.
    ///
    /// Items are never priced in the reference denomination.
    pub fn amount_in(&self, denomination: Denomination) -> Result<f64, MarketError> {
        match denomination {
            Denomination::Memex => Ok(self.memex),
            Denomination::Area => Ok(self.area),
            Denomination::Eth => Err(MarketError::UnpricedDenomination(denomination)),
        }
    }

    /// Both components must be finite and non-negative.
    pub fn validate(&self) -> Result<(), MarketError> {
        for value in [self.memex, self.area] {
            if !value.is_finite() || value < 0.0 {
                return Err(MarketError::InvalidPrice(value));
            }
        }
        Ok(())
    }
}

/// Item rarity, ordered from least to most rare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn all() -> &'static [Rarity] {
        &[Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rarity {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::all()
            .iter()
            .copied()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MarketError::UnknownRarity(s.to_string()))
    }
}

/// A collectible in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: Price,
    pub creator: Address,
    pub owner: Address,
    pub category: String,
    pub rarity: Rarity,
    pub is_for_sale: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn is_owned_by(&self, address: &Address) -> bool {
        self.owner == *address
    }
}
