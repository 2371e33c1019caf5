//! yc-bot: the bot's turn-decision policy.
//!
//! Three decision points, all pure functions of the current hand and the
//! bot's scoreboard:
//! - `should_stop`: keep a rare, high-value hand instead of rolling on
//! - `decide_hold`: which dice survive the next roll
//! - `choose_category`: where to commit when rolling ends
//!
//! `decide_bot_turn` drives them through one bounded turn against an
//! injected `RollSource`.

pub mod policy;
pub mod turn;

pub use policy::{
    choose_category, decide_hold, should_stop, Commit, HoldDecision, HoldRule,
    EARLY_STOP_CATEGORIES,
};
pub use turn::{decide_bot_turn, BotTurn, RollStep, TurnEnd};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
