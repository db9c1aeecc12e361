//! The last roll, saved so it can be shown again without rolling.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shop_core::TownSize;
use shop_mechanics::Selection;

#[derive(Debug, Serialize, Deserialize)]
pub struct LastRoll {
    pub generated_at: DateTime<Utc>,
    pub town: TownSize,
    pub sources: BTreeSet<String>,
    #[serde(flatten)]
    pub selection: Selection,
}

impl LastRoll {
    pub fn new(town: TownSize, sources: BTreeSet<String>, selection: Selection) -> Self {
        Self {
            generated_at: Utc::now(),
            town,
            sources,
            selection,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("cannot write to {}: {e}", path.display()))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Err(format!("no previous roll found at {}", path.display()));
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_json::from_str(&text)
            .map_err(|e| format!("corrupt state file {}: {e}", path.display()))
    }
}
