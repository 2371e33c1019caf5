//! The single error kind of the core: a caller broke an input contract.

use thiserror::Error;

use crate::category::Category;

/// Raised when inputs violate the stated invariants of a hand, hold mask,
/// roll budget, or scoreboard. Nothing inside the core recovers from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("hand must have exactly 5 dice, got {len}")]
    HandLength { len: usize },
    #[error("die value {value} out of range 1..=6")]
    DieOutOfRange { value: u8 },
    #[error("hold mask must have exactly 5 entries, got {len}")]
    HoldLength { len: usize },
    #[error("roll budget {remaining} out of range 0..=3")]
    RollBudgetOutOfRange { remaining: u8 },
    #[error("no rolls left in this turn")]
    RollBudgetExhausted,
    #[error("category {category} is already filled")]
    CategoryFilled { category: Category },
    #[error("scoreboard is complete; nothing left to commit")]
    ScoreboardComplete,
    #[error("unknown category {name:?}")]
    UnknownCategory { name: String },
}
