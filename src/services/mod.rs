pub mod catalog_service;
pub mod market_service;
pub mod profile_service;

pub use catalog_service::{CatalogQuery, Filter, SortKey};
pub use market_service::{MarketState, MarketStore, Receipt};
