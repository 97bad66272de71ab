//! Battle Factory Utility
//!
//! Looks up which catalog sets an opponent could be running, given a partial
//! view of its name, moves and held item, and derives battle stats from base
//! stats and a training configuration.

// --- MODULE DECLARATIONS ---
pub mod catalog;
pub mod errors;
pub mod query;
pub mod stats;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    nature_multiplier, BaseStats, Entity, EntityRecord, MatchedVariant, Nature, StatBlock,
    StatType, Variant,
};

// --- From this crate's modules (`src/`) ---
pub use catalog::{Catalog, DEFAULT_CATALOG_FILE};
pub use query::{search, SearchQuery};
pub use stats::{derive_all_stats, derive_one_stat, StatLookup, TrainingConfig};

pub use errors::{CatalogError, CatalogResult, StatDerivationError, StatResult};
