//! Dice roll results.

use serde::{Deserialize, Serialize};

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling an entire dice pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.value).sum()
    }

    /// The individual values in roll order.
    pub fn values(&self) -> Vec<u32> {
        self.dice.iter().map(|d| d.value).collect()
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

/// Formats as `"{total} ({d1} + {d2} + ...)"`.
impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "{} ({})", self.total(), values.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(die: Die, values: &[u32]) -> RollResult {
        RollResult {
            dice: values
                .iter()
                .map(|value| DieResult { die, value: *value })
                .collect(),
        }
    }

    #[test]
    fn total() {
        let r = make_result(Die::D6, &[5, 2]);
        assert_eq!(r.total(), 7);
        assert_eq!(r.count(), 2);
        assert_eq!(r.values(), vec![5, 2]);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.count(), 0);
        assert_eq!(r.to_string(), "0 ()");
    }

    #[test]
    fn display() {
        assert_eq!(make_result(Die::D4, &[1]).to_string(), "1 (1)");
        assert_eq!(make_result(Die::D4, &[3, 4, 1]).to_string(), "8 (3 + 4 + 1)");
    }
}
