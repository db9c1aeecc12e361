//! Rolls up what a settlement has for sale.
//!
//! One call filters the catalog by source and price cap, sorts the rest into
//! aura strength buckets, and walks the tiers faint, moderate, strong. Each
//! tier is skipped, declared fully available, or rolled for and drawn from
//! according to the settlement's rules. Every step is narrated.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use shop_core::{AuraBuckets, AuraStrength, Item, ShopError, TierRule, TownSize, catalog};

use crate::dice::roll_n_d_m;
use crate::error::MechResult;
use crate::narration::Narration;
use crate::stock::{Stock, StockEntry, draw};

/// The outcome of one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Stocked items, or `None` if nothing was drawn.
    pub stock: Option<Vec<StockEntry>>,
    /// What happened, step by step.
    pub narration: Narration,
}

impl Selection {
    /// The stocked entries; empty if nothing was drawn.
    pub fn entries(&self) -> &[StockEntry] {
        self.stock.as_deref().unwrap_or_default()
    }

    /// Returns true if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.stock.is_none()
    }
}

/// Generate the magic items for sale in a settlement of size `town`.
///
/// An empty `allowed_sources` yields only the "select a rule set" error
/// line. Buckets are built fresh for this call.
pub fn run<R: Rng + ?Sized>(
    items: &[Item],
    town: TownSize,
    allowed_sources: &BTreeSet<String>,
    rng: &mut R,
) -> MechResult<Selection> {
    let mut narration = Narration::new();

    if allowed_sources.is_empty() {
        narration.push(ShopError::NoSourcesSelected.to_string());
        return Ok(Selection {
            stock: None,
            narration,
        });
    }

    let profile = town.profile();
    narration.push(format!("Number of all magic items: {}", items.len()));

    let allowed = catalog::filter(items, allowed_sources, profile.max_price());
    narration.push(format!(
        "Number of magic items that are allowed: {}",
        allowed.len()
    ));

    let buckets = catalog::partition(allowed.iter().copied());
    narration.push(buckets.unclassified_line());
    tracing::debug!(
        %town,
        allowed = allowed.len(),
        faint = buckets.faint.len(),
        moderate = buckets.moderate.len(),
        strong = buckets.strong.len(),
        unclassified = buckets.unclassified,
        "filtered catalog"
    );

    let mut stock = Stock::new();
    for tier in AuraStrength::TIERS {
        match profile.rule(tier) {
            TierRule::FullyOffered => {
                narration.push(format!("All {tier} magic items are available."));
            }
            TierRule::NotOffered => {
                narration.push(format!("No {tier} magic items are available."));
            }
            TierRule::Roll { count, sides } => {
                let roll = roll_n_d_m(count, sides, rng)?;
                tracing::debug!(%tier, total = roll.total(), "rolled item count");
                narration.push(format!("Rolling for {count}d{sides} {tier} items: {roll}"));
                draw_tier(&buckets, tier, roll.total(), &mut stock, &mut narration, rng);
            }
        }
    }

    narration.push(format!(
        "Any magic items that cost at most {} are by a 75% chance available.",
        profile.obtainable
    ));

    Ok(Selection {
        stock: (!stock.is_empty()).then(|| stock.into_entries()),
        narration,
    })
}

/// Like [`run`], with the settlement size given by name.
pub fn run_named<R: Rng + ?Sized>(
    items: &[Item],
    town: &str,
    allowed_sources: &BTreeSet<String>,
    rng: &mut R,
) -> MechResult<Selection> {
    let town: TownSize = town.parse()?;
    run(items, town, allowed_sources, rng)
}

/// Draw `count` items of one tier; stops at the first exhausted draw.
fn draw_tier<R: Rng + ?Sized>(
    buckets: &AuraBuckets<'_>,
    tier: AuraStrength,
    count: u32,
    stock: &mut Stock,
    narration: &mut Narration,
    rng: &mut R,
) {
    for _ in 0..count {
        match draw(buckets.get(tier), tier, rng) {
            Ok(item) => stock.add(item),
            Err(err) => {
                tracing::debug!(%tier, "no items left to draw");
                narration.push(err.to_string());
                return;
            }
        }
    }
}
