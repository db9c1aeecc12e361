//! Dice types, pools, and rolling.
//!
//! Settlement rules are written as `NdM` formulas. [`roll_n_d_m`] rolls one
//! and returns the individual results, which display as the narration
//! fragment `"7 (3 + 4)"`.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{DieResult, RollResult};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::Custom(n) => n,
        }
    }

    /// The die with `sides` faces. A zero-sided die cannot be rolled.
    pub fn with_sides(sides: u32) -> MechResult<Self> {
        Ok(match sides {
            0 => return Err(MechError::InvalidPool("a die needs at least one side".into())),
            4 => Self::D4,
            6 => Self::D6,
            n => Self::Custom(n),
        })
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Roll `n` dice with `m` sides each.
///
/// `n = 0` is valid and yields an empty roll with total 0.
pub fn roll_n_d_m<R: Rng + ?Sized>(n: u32, m: u32, rng: &mut R) -> MechResult<RollResult> {
    let die = Die::with_sides(m)?;
    Ok(DicePool::new().add(die, n).roll(rng))
}
