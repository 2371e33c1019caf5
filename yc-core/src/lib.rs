//! yc-core: Yacht dice rules, scoring, scoreboards, roll sources, and configuration.

pub mod category;
pub mod chance;
pub mod config;
pub mod error;
pub mod hand;
pub mod scoreboard;
pub mod scoring;

pub use category::{Category, NUM_CATEGORIES, PRIORITY_ORDER, SACRIFICE_ORDER};
pub use chance::{EventKeyedRoller, RngRoller, RollKey, RollSource, ScriptedRoller};
pub use config::{ChanceKind, Config, ConfigError, LoggingConfig, SimConfig};
pub use error::ContractViolation;
pub use hand::{Hand, HoldMask, RollBudget, HAND_SIZE, MAX_ROLLS};
pub use scoreboard::Scoreboard;
pub use scoring::{evaluate, CategoryScores};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ruleset identifier stamped into logs and reports.
pub const RULESET_ID: &str = "yacht_12cat_v1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}

#[cfg(test)]
mod chance_tests;
#[cfg(test)]
mod scoring_tests;
