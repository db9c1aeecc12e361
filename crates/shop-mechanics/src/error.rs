//! Error types for the mechanics engine.

use shop_core::ShopError;

/// Errors that can occur while rolling dice or generating stock.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A dice formula cannot be rolled.
    #[error("invalid pool: {0}")]
    InvalidPool(String),

    /// A catalog or settlement error.
    #[error(transparent)]
    Shop(#[from] ShopError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
