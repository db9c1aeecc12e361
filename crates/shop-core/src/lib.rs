//! Core types for the item shop: magic items, catalogs, and settlements.
//!
//! This crate holds the data model and the catalog filter. It performs no
//! randomness of its own; dice and draws live in `shop-mechanics`.

/// Item catalogs, source filtering, and aura strength buckets.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Magic items, aura strength, and price parsing.
pub mod item;
/// Settlement sizes and their fixed availability rules.
pub mod settlement;

/// Re-export catalog types.
pub use catalog::{AuraBuckets, Catalog, available_sources, filter, partition};
/// Re-export error types.
pub use error::{ShopError, ShopResult};
/// Re-export item types.
pub use item::{AuraStrength, Item, parse_price};
/// Re-export settlement types.
pub use settlement::{PRICE_CAP_MULTIPLIER, SettlementProfile, TierRule, TownSize};
