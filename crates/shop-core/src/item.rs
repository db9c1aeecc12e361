use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ShopError, ShopResult};

/// The rarity tier of a magic item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuraStrength {
    /// Low-power items, stocked even in hamlets.
    Faint,
    /// Mid-power items.
    Moderate,
    /// High-power items, only found in larger towns.
    Strong,
    /// Missing or unrecognized tag. Such items are never stocked.
    #[default]
    None,
}

impl AuraStrength {
    /// The rollable tiers, in the order they are stocked.
    pub const TIERS: [AuraStrength; 3] = [Self::Faint, Self::Moderate, Self::Strong];

    /// Parse a catalog tag such as `"faint"`. Anything unrecognized is `None`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("faint") {
            Self::Faint
        } else if s.eq_ignore_ascii_case("moderate") {
            Self::Moderate
        } else if s.eq_ignore_ascii_case("strong") {
            Self::Strong
        } else {
            Self::None
        }
    }

    /// The lowercase catalog tag; empty for `None`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Faint => "faint",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::None => "",
        }
    }
}

impl From<String> for AuraStrength {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<AuraStrength> for String {
    fn from(aura: AuraStrength) -> Self {
        aura.as_str().to_string()
    }
}

impl fmt::Display for AuraStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// A magic item as listed in the catalog.
///
/// Field names follow the catalog's column headers (`Name`, `Slot`, `Price`,
/// `Source`, `Description`, `AuraStrength`). Missing or `null` cells default
/// to empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Item {
    /// Display name, unique within a catalog.
    #[serde(deserialize_with = "text")]
    pub name: String,
    /// Equipment slot, e.g. "ring" or "none".
    #[serde(deserialize_with = "text")]
    pub slot: String,
    /// Raw price text, e.g. "750 gp". May be empty for unpriced curiosities.
    #[serde(deserialize_with = "price_text")]
    pub price: String,
    /// Sourcebook the item is published in.
    #[serde(deserialize_with = "text")]
    pub source: String,
    /// Rules text.
    #[serde(deserialize_with = "text")]
    pub description: String,
    /// Rarity tier.
    #[serde(deserialize_with = "aura_tag")]
    pub aura_strength: AuraStrength,
}

impl Item {
    /// Create an item with the given name and aura strength and empty fields.
    pub fn new(name: impl Into<String>, aura_strength: AuraStrength) -> Self {
        Self {
            name: name.into(),
            aura_strength,
            ..Self::default()
        }
    }

    /// Set the price text.
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Set the source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// The numeric price, see [`parse_price`].
    pub fn price_value(&self) -> ShopResult<u64> {
        parse_price(&self.price)
    }

    /// Returns true if the price field holds a number.
    pub fn is_priced(&self) -> bool {
        self.price_value().is_ok()
    }
}

/// Parse the numeric part of a price such as `"750 gp"` or `"1,500 gp"`.
///
/// Takes the first run of digits, skipping `,` group separators inside it.
/// Anything after the run (currency units, decimals) is ignored.
pub fn parse_price(text: &str) -> ShopResult<u64> {
    let unparsable = || ShopError::UnparsablePrice(text.to_string());
    let start = text.find(|c: char| c.is_ascii_digit()).ok_or_else(unparsable)?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().map_err(|_| unparsable())
}

/// Spreadsheet exports write prices as numbers; keep them as text.
fn price_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Whole(u64),
        Fractional(f64),
    }

    Ok(match Option::<RawPrice>::deserialize(deserializer)? {
        Some(RawPrice::Text(text)) => text,
        Some(RawPrice::Whole(n)) => n.to_string(),
        Some(RawPrice::Fractional(f)) if f.is_finite() && f >= 0.0 => {
            (f.trunc() as u64).to_string()
        }
        _ => String::new(),
    })
}

/// Empty cells come through as `null`.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn aura_tag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AuraStrength, D::Error> {
    Ok(Option::<AuraStrength>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_with_unit() {
        assert_eq!(parse_price("750 gp").unwrap(), 750);
        assert_eq!(parse_price("gp 20").unwrap(), 20);
        assert_eq!(parse_price("0 gp").unwrap(), 0);
    }

    #[test]
    fn parse_price_group_separators() {
        assert_eq!(parse_price("1,500 gp").unwrap(), 1500);
        assert_eq!(parse_price("120,000 gp").unwrap(), 120_000);
    }

    #[test]
    fn parse_price_stops_at_decimal_point() {
        assert_eq!(parse_price("750.0").unwrap(), 750);
        assert_eq!(parse_price("5 gp, 2 sp").unwrap(), 5);
    }

    #[test]
    fn parse_price_without_digits() {
        assert!(matches!(
            parse_price(""),
            Err(ShopError::UnparsablePrice(s)) if s.is_empty()
        ));
        assert!(parse_price("priceless").is_err());
        assert!(parse_price("99999999999999999999999 gp").is_err());
    }

    #[test]
    fn aura_parse() {
        assert_eq!(AuraStrength::parse("faint"), AuraStrength::Faint);
        assert_eq!(AuraStrength::parse(" Moderate "), AuraStrength::Moderate);
        assert_eq!(AuraStrength::parse("STRONG"), AuraStrength::Strong);
        assert_eq!(AuraStrength::parse("overwhelming"), AuraStrength::None);
        assert_eq!(AuraStrength::parse(""), AuraStrength::None);
    }

    #[test]
    fn aura_display() {
        assert_eq!(AuraStrength::Faint.to_string(), "faint");
        assert_eq!(AuraStrength::Strong.to_string(), "strong");
        assert_eq!(AuraStrength::None.to_string(), "none");
    }

    #[test]
    fn item_priced() {
        let wand = Item::new("Wand", AuraStrength::Moderate).with_price("750 gp");
        assert!(wand.is_priced());
        assert_eq!(wand.price_value().unwrap(), 750);
        assert!(!Item::new("Curio", AuraStrength::Faint).is_priced());
    }

    #[test]
    fn deserialize_catalog_row() {
        let item: Item = serde_json::from_str(
            r#"{
                "Name": "Wand of Fireball",
                "Slot": "none",
                "Price": "750 gp",
                "Source": "PFRPG Core",
                "Description": "A wand.",
                "AuraStrength": "moderate"
            }"#,
        )
        .unwrap();
        assert_eq!(item.name, "Wand of Fireball");
        assert_eq!(item.slot, "none");
        assert_eq!(item.price, "750 gp");
        assert_eq!(item.source, "PFRPG Core");
        assert_eq!(item.aura_strength, AuraStrength::Moderate);
    }

    #[test]
    fn deserialize_numeric_and_missing_fields() {
        let item: Item =
            serde_json::from_str(r#"{"Name": "Ring", "Price": 2000.0, "AuraStrength": "odd"}"#)
                .unwrap();
        assert_eq!(item.price, "2000");
        assert_eq!(item.source, "");
        assert_eq!(item.aura_strength, AuraStrength::None);

        let item: Item = serde_json::from_str(r#"{"Name": "Cloak", "Price": 12}"#).unwrap();
        assert_eq!(item.price, "12");

        let item: Item = serde_json::from_str(r#"{"Name": "Curio", "Price": null}"#).unwrap();
        assert_eq!(item.price, "");
    }

    #[test]
    fn deserialize_null_cells() {
        let item: Item = serde_json::from_str(
            r#"{
                "Name": null,
                "Slot": null,
                "Price": "5 gp",
                "Source": null,
                "Description": null,
                "AuraStrength": null
            }"#,
        )
        .unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.slot, "");
        assert_eq!(item.source, "");
        assert_eq!(item.description, "");
        assert_eq!(item.aura_strength, AuraStrength::None);
        assert!(item.is_priced());
    }

    #[test]
    fn serialize_uses_catalog_columns() {
        let item = Item::new("Wand", AuraStrength::Moderate)
            .with_price("750 gp")
            .with_source("Core");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["Name"], "Wand");
        assert_eq!(json["Price"], "750 gp");
        assert_eq!(json["AuraStrength"], "moderate");
    }
}
