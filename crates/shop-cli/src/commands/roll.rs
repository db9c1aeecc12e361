use std::path::Path;

use colored::Colorize;

use shop_core::TownSize;
use shop_mechanics::ShopConfig;

use crate::state::LastRoll;

pub struct RollArgs<'a> {
    pub catalog: &'a Path,
    pub town: &'a str,
    pub sources: Vec<String>,
    pub all_sources: bool,
    pub seed: Option<u64>,
    /// `None` skips saving.
    pub state: Option<&'a Path>,
    pub json: bool,
}

pub fn run(args: RollArgs<'_>) -> Result<(), String> {
    let town = args.town.parse::<TownSize>().map_err(|e| e.to_string())?;
    let catalog = super::load_catalog(args.catalog)?;

    let mut config = ShopConfig::default().with_town(town);
    if args.all_sources {
        config = config.with_sources(catalog.sources());
    } else if !args.sources.is_empty() {
        config = config.with_sources(args.sources);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let selection = config
        .generate(&catalog)
        .map_err(|e| format!("generation failed: {e}"))?;

    let last = LastRoll::new(town, config.sources, selection);

    if let Some(path) = args.state {
        last.save(path)?;
        tracing::debug!(path = %path.display(), "saved last roll");
    }

    if args.json {
        let text = serde_json::to_string_pretty(&last.selection)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    println!("  {} {town}", "Item Shop".bold());
    println!();
    super::print_selection(&last.selection);
    Ok(())
}
