//! Items the storefront opens with

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Address, Item, ItemId, Price, Rarity};

const PEXELS: &str = "https://images.pexels.com/photos";
const IMAGE_QUERY: &str = "auto=compress&cs=tinysrgb&w=800";

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    photo: u32,
    memex: f64,
    area: f64,
    creator: &'static str,
    category: &'static str,
    rarity: Rarity,
    day: u32,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title: "Cosmic Dragon #001",
        description: "A legendary cosmic dragon soaring through digital galaxies. This rare NFT features stunning visual effects and intricate details.",
        photo: 8471888,
        memex: 150.0,
        area: 75.0,
        creator: "0xABC...123",
        category: "Art",
        rarity: Rarity::Legendary,
        day: 15,
    },
    Seed {
        id: "2",
        title: "Neon City Dreams",
        description: "Cyberpunk-inspired digital artwork depicting a futuristic neon-lit cityscape with stunning architectural details.",
        photo: 8566473,
        memex: 89.0,
        area: 45.0,
        creator: "0xDEF...456",
        category: "Digital Art",
        rarity: Rarity::Epic,
        day: 14,
    },
    Seed {
        id: "3",
        title: "Abstract Geometry #42",
        description: "Minimalist geometric patterns creating mesmerizing visual illusions with mathematical precision.",
        photo: 8566468,
        memex: 45.0,
        area: 25.0,
        creator: "0xGHI...789",
        category: "Art",
        rarity: Rarity::Rare,
        day: 13,
    },
    Seed {
        id: "4",
        title: "Digital Portrait Series",
        description: "Hyperrealistic digital portrait showcasing advanced AI-assisted artistic techniques.",
        photo: 8566477,
        memex: 120.0,
        area: 60.0,
        creator: "0xJKL...012",
        category: "Portrait",
        rarity: Rarity::Epic,
        day: 12,
    },
    Seed {
        id: "5",
        title: "Quantum Waves",
        description: "Dynamic visualization of quantum wave functions rendered in stunning detail.",
        photo: 8566474,
        memex: 200.0,
        area: 100.0,
        creator: "0xMNO...345",
        category: "Science",
        rarity: Rarity::Legendary,
        day: 11,
    },
    Seed {
        id: "6",
        title: "Nature Fractals",
        description: "Beautiful fractal patterns inspired by natural formations and organic growth.",
        photo: 8566479,
        memex: 67.0,
        area: 35.0,
        creator: "0xPQR...678",
        category: "Nature",
        rarity: Rarity::Rare,
        day: 10,
    },
    Seed {
        id: "7",
        title: "Ethereal Landscapes",
        description: "Dreamlike landscapes that blend reality with fantasy, creating otherworldly environments.",
        photo: 1323550,
        memex: 95.0,
        area: 50.0,
        creator: "0xSTU...901",
        category: "Landscape",
        rarity: Rarity::Epic,
        day: 9,
    },
    Seed {
        id: "8",
        title: "Pixel Warriors Collection",
        description: "Retro-style pixel art warriors with unique attributes and battle-ready poses.",
        photo: 2047905,
        memex: 35.0,
        area: 20.0,
        creator: "0xVWX...234",
        category: "Gaming",
        rarity: Rarity::Common,
        day: 8,
    },
];

fn created_on(day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// The eight launch items, newest first, each still owned by its creator
pub fn seed_catalog() -> Vec<Item> {
    SEEDS
        .iter()
        .map(|s| Item {
            id: ItemId::from(s.id),
            title: s.title.to_string(),
            description: s.description.to_string(),
            image: format!("{}/{}/pexels-photo-{}.jpeg?{}", PEXELS, s.photo, s.photo, IMAGE_QUERY),
            price: Price::new(s.memex, s.area),
            creator: Address::from(s.creator),
            owner: Address::from(s.creator),
            category: s.category.to_string(),
            rarity: s.rarity,
            is_for_sale: true,
            created_at: created_on(s.day),
        })
        .collect()
}
