//! Dice and draws for the item shop.
//!
//! Rolls the per-tier item counts a settlement's rules call for, draws the
//! items from the filtered catalog, and narrates every step.

pub mod config;
pub mod dice;
pub mod error;
pub mod generator;
pub mod narration;
pub mod stock;

pub use config::{DEFAULT_SOURCES, ShopConfig};
pub use dice::{DicePool, Die, DieResult, RollResult, roll_n_d_m};
pub use error::{MechError, MechResult};
pub use generator::{Selection, run, run_named};
pub use narration::{Narration, is_error_line};
pub use stock::{Stock, StockEntry, draw};
