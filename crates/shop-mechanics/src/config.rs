//! Configuration for a stock generation.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use shop_core::{Catalog, TownSize};

use crate::error::MechResult;
use crate::generator::{Selection, run};

/// Rule sets selected when the user picks none.
pub const DEFAULT_SOURCES: &[&str] = &[
    "PFRPG Core",
    "APG",
    "RotRL-AE-Appendix",
    "Advanced Race Guide",
    "Advanced Class Guide",
    "Adventurer's Guide",
    "Ultimate Equipment",
    "Occult Adventures",
    "Ultimate Intrigue",
];

/// Configuration for generating a settlement's stock.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// RNG seed for reproducible rolls; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Settlement size.
    pub town: TownSize,
    /// Sourcebooks items may come from.
    pub sources: BTreeSet<String>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            seed: None,
            town: TownSize::Grossstadt,
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ShopConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the settlement size.
    pub fn with_town(mut self, town: TownSize) -> Self {
        self.town = town;
        self
    }

    /// Replace the allowed sources. Empty names are dropped.
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = sources
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .collect();
        self
    }

    /// The random source this configuration describes.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Generate stock from `catalog` with a fresh RNG.
    pub fn generate(&self, catalog: &Catalog) -> MechResult<Selection> {
        tracing::debug!(
            town = %self.town,
            seed = ?self.seed,
            sources = self.sources.len(),
            "generating stock"
        );
        run(catalog.items(), self.town, &self.sources, &mut self.rng())
    }
}
