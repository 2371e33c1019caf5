//! yc-sim: plays whole bot games on top of the decision policy.
//!
//! Solo games, 1:1 duels, and parallel batch runs with score statistics and
//! optional NDJSON event logging. Every game is an independent, seeded
//! computation, so batches parallelize without coordination.

pub mod events;
pub mod game;
pub mod report;

use thiserror::Error;

pub use events::EventLog;
pub use game::{
    play_duel, play_solo_game, roller_for, DuelOutcome, DuelRecord, GameRecord, GameResult,
    PlayedTurn,
};
pub use report::{
    render_histogram, simulate_games, simulate_games_logged, simulate_games_on, summarize_scores,
    ScoreSummary, SimulationReport, LOG_CHUNK_GAMES,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
pub enum SimError {
    #[error("contract violation: {0}")]
    Contract(#[from] yc_core::ContractViolation),
    #[error("event log: {0}")]
    Log(#[from] yc_logging::NdjsonError),
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}


#[cfg(test)]
mod game_tests;
