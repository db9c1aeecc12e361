use crate::item::AuraStrength;

/// Alias for `Result<T, ShopError>`.
pub type ShopResult<T> = Result<T, ShopError>;

/// Errors that can occur while filtering a catalog or generating stock.
///
/// The display text of [`ShopError::NoSourcesSelected`] and
/// [`ShopError::TierExhausted`] is the narration line shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    /// No sourcebook was selected.
    #[error("ERROR: Please select at least one rule set.")]
    NoSourcesSelected,

    /// A rolled tier had nothing left to draw from.
    #[error("ERROR : No {0} items available in selected rule sets!")]
    TierExhausted(AuraStrength),

    /// A price field contained no digits.
    #[error("unparsable price: \"{0}\"")]
    UnparsablePrice(String),

    /// The settlement size is not one of the eight known sizes.
    #[error("unknown settlement size: \"{0}\"")]
    InvalidSettlement(String),

    /// The catalog file could not be read.
    #[error("cannot read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a valid JSON item list.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
