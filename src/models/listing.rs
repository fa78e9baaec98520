//! Listing form model

use serde::{Deserialize, Serialize};

use crate::models::item::{Price, Rarity};

/// Image used when a listing does not supply one
pub const DEFAULT_IMAGE: &str =
    "https://images.pexels.com/photos/8566477/pexels-photo-8566477.jpeg?auto=compress&cs=tinysrgb&w=800";

/// Data collected when an actor lists a new item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub rarity: Rarity,
    pub price: Price,
}

impl NewItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>, price: Price) -> Self {
        NewItem {
            title: title.into(),
            description: description.into(),
            image: None,
            category: "Art".to_string(),
            rarity: Rarity::Common,
            price,
        }
    }

    pub fn image_or_default(&self) -> String {
        match &self.image {
            Some(image) if !image.trim().is_empty() => image.clone(),
            _ => DEFAULT_IMAGE.to_string(),
        }
    }
}
