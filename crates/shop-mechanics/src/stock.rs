//! Drawing items and collapsing repeats into quantities.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use shop_core::{AuraStrength, Item, ShopError, ShopResult};

/// One stocked item and how many copies were drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// The drawn item.
    pub item: Item,
    /// Copies drawn, at least 1.
    pub quantity: u32,
}

/// Drawn items keyed by name, in first-drawn order.
#[derive(Debug, Clone, Default)]
pub struct Stock {
    entries: Vec<StockEntry>,
}

impl Stock {
    /// Create an empty stock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one copy. Items are matched by name only.
    pub fn add(&mut self, item: &Item) {
        match self.entries.iter_mut().find(|e| e.item.name == item.name) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(StockEntry {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    /// The entries in first-drawn order.
    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies drawn of the named item, 0 if absent.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item.name == name)
            .map_or(0, |e| e.quantity)
    }

    /// Total copies across all entries.
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Consume the stock, returning its entries.
    pub fn into_entries(self) -> Vec<StockEntry> {
        self.entries
    }
}

/// Draw one priced item uniformly from `bucket`.
///
/// Unpriced items are never drawn. Fails with [`ShopError::TierExhausted`]
/// when no priced item is left.
pub fn draw<'a, R: Rng + ?Sized>(
    bucket: &[&'a Item],
    tier: AuraStrength,
    rng: &mut R,
) -> ShopResult<&'a Item> {
    let priced: Vec<&'a Item> = bucket.iter().copied().filter(|i| i.is_priced()).collect();
    priced
        .choose(rng)
        .copied()
        .ok_or(ShopError::TierExhausted(tier))
}
