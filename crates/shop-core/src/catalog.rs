//! Item catalogs and the filter that narrows them to what a settlement sells.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShopResult;
use crate::item::{AuraStrength, Item};

/// The full list of known magic items, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create a catalog from a list of items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse a catalog from a JSON array of item records.
    pub fn from_json_str(text: &str) -> ShopResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a catalog from a JSON file.
    pub fn load(path: &Path) -> ShopResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by exact name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Distinct non-empty sources, sorted.
    pub fn sources(&self) -> BTreeSet<String> {
        available_sources(&self.items)
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Distinct non-empty `Source` values, sorted.
pub fn available_sources(items: &[Item]) -> BTreeSet<String> {
    items
        .iter()
        .filter(|item| !item.source.is_empty())
        .map(|item| item.source.clone())
        .collect()
}

/// Items from an allowed source whose price parses and is at most `max_price`.
pub fn filter<'a>(
    items: &'a [Item],
    allowed_sources: &BTreeSet<String>,
    max_price: u64,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| allowed_sources.contains(&item.source))
        .filter(|item| item.price_value().is_ok_and(|price| price <= max_price))
        .collect()
}

/// Filtered items split by aura strength.
#[derive(Debug, Clone, Default)]
pub struct AuraBuckets<'a> {
    /// Faint items.
    pub faint: Vec<&'a Item>,
    /// Moderate items.
    pub moderate: Vec<&'a Item>,
    /// Strong items.
    pub strong: Vec<&'a Item>,
    /// Items dropped for lacking a usable aura strength.
    pub unclassified: usize,
}

impl<'a> AuraBuckets<'a> {
    /// The bucket for a tier; always empty for `None`.
    pub fn get(&self, tier: AuraStrength) -> &[&'a Item] {
        match tier {
            AuraStrength::Faint => &self.faint,
            AuraStrength::Moderate => &self.moderate,
            AuraStrength::Strong => &self.strong,
            AuraStrength::None => &[],
        }
    }

    /// Total number of items across all three buckets.
    pub fn classified(&self) -> usize {
        self.faint.len() + self.moderate.len() + self.strong.len()
    }

    /// Narration line reporting the unclassified count.
    pub fn unclassified_line(&self) -> String {
        format!("{} items had no feasible aura strength.", self.unclassified)
    }
}

/// Split items by aura strength, counting the ones without a tier.
pub fn partition<'a>(items: impl IntoIterator<Item = &'a Item>) -> AuraBuckets<'a> {
    let mut buckets = AuraBuckets::default();
    for item in items {
        match item.aura_strength {
            AuraStrength::Faint => buckets.faint.push(item),
            AuraStrength::Moderate => buckets.moderate.push(item),
            AuraStrength::Strong => buckets.strong.push(item),
            AuraStrength::None => buckets.unclassified += 1,
        }
    }
    buckets
}
