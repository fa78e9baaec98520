pub mod catalog;

pub use catalog::seed_catalog;
