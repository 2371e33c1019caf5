//! Batch simulation and score statistics.

use std::collections::BTreeMap;

use rayon::prelude::*;
use yc_core::ChanceKind;

use crate::events::EventLog;
use crate::game::{play_solo_game, GameRecord, GameResult};
use crate::SimError;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub mean: f64,
    pub median: u32,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
}

/// Summary statistics; `None` for an empty slice.
pub fn summarize_scores(scores: &[u32]) -> Option<ScoreSummary> {
    if scores.is_empty() {
        return None;
    }

    let n = scores.len() as f64;
    let mut sum = 0f64;
    let mut sum_sq = 0f64;
    for &s in scores {
        let sf = s as f64;
        sum += sf;
        sum_sq += sf * sf;
    }
    let mean = sum / n;
    let std_dev = ((sum_sq / n) - mean * mean).max(0.0).sqrt();

    let mut sorted = scores.to_vec();
    sorted.sort_unstable();

    Some(ScoreSummary {
        mean,
        median: sorted[sorted.len() / 2],
        std_dev,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

/// Render a histogram of scores (bucket size = 10).
pub fn render_histogram(scores: &[u32]) -> String {
    const BUCKET: u32 = 10;
    const BAR_WIDTH: usize = 50;

    let mut buckets: BTreeMap<u32, usize> = BTreeMap::new();
    for &s in scores {
        *buckets.entry((s / BUCKET) * BUCKET).or_insert(0) += 1;
    }
    let (Some(&lo), Some(&hi)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return String::new();
    };
    let max_count = buckets.values().copied().max().unwrap_or(1).max(1);

    let mut out = format!("Score histogram (N={}, bin={}):\n", scores.len(), BUCKET);
    out.push_str(&"─".repeat(70));
    out.push('\n');
    let mut bucket = lo;
    while bucket <= hi {
        let count = buckets.get(&bucket).copied().unwrap_or(0);
        let bar = "█".repeat(count * BAR_WIDTH / max_count);
        out.push_str(&format!(
            "{:3}-{:3} │{:<50} {:4} ({:.1}%)\n",
            bucket,
            bucket + BUCKET - 1,
            bar,
            count,
            count as f64 / scores.len() as f64 * 100.0
        ));
        bucket += BUCKET;
    }
    out.push_str(&"─".repeat(70));
    out.push('\n');
    out
}

/// Number of full game records held at once while a batch is logged.
pub const LOG_CHUNK_GAMES: usize = 256;

/// Results of a batch run, in game order. Only per-game totals are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub seed: u64,
    pub chance: ChanceKind,
    pub results: Vec<GameResult>,
}

impl SimulationReport {
    pub fn games(&self) -> usize {
        self.results.len()
    }

    pub fn totals(&self) -> Vec<u32> {
        self.results.iter().map(|r| r.total).collect()
    }

    pub fn summary(&self) -> Option<ScoreSummary> {
        summarize_scores(&self.totals())
    }

    /// Fraction of games that scored a yacht.
    pub fn yacht_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let n = self.results.iter().filter(|r| r.scored_yacht).count();
        n as f64 / self.results.len() as f64
    }
}

fn game_seed(seed: u64, i: usize) -> u64 {
    seed.wrapping_add(i as u64)
}

/// Play `n` independent solo games in parallel. Game `i` is seeded
/// `seed + i`, so results do not depend on scheduling.
pub fn simulate_games(n: usize, seed: u64, chance: ChanceKind) -> Result<SimulationReport, SimError> {
    simulate_games_logged(n, seed, chance, None)
}

/// Like `simulate_games`, writing every game to `log` in game order.
///
/// Games are played in chunks of `LOG_CHUNK_GAMES`; each chunk's records
/// are logged and reduced to `GameResult`s before the next chunk starts.
pub fn simulate_games_logged(
    n: usize,
    seed: u64,
    chance: ChanceKind,
    log: Option<&mut EventLog>,
) -> Result<SimulationReport, SimError> {
    let results = match log {
        None => (0..n)
            .into_par_iter()
            .map(|i| play_solo_game(game_seed(seed, i), chance).map(|g| g.result()))
            .collect::<Result<Vec<_>, _>>()?,
        Some(log) => {
            let mut results = Vec::with_capacity(n);
            let mut lo = 0;
            while lo < n {
                let hi = (lo + LOG_CHUNK_GAMES).min(n);
                let chunk = (lo..hi)
                    .into_par_iter()
                    .map(|i| play_solo_game(game_seed(seed, i), chance))
                    .collect::<Result<Vec<GameRecord>, _>>()?;
                for game in &chunk {
                    log.log_game(game)?;
                    results.push(game.result());
                }
                lo = hi;
            }
            results
        }
    };
    Ok(SimulationReport {
        seed,
        chance,
        results,
    })
}

/// Like `simulate_games_logged`, on a dedicated pool of `threads` workers.
pub fn simulate_games_on(
    n: usize,
    seed: u64,
    chance: ChanceKind,
    threads: usize,
    log: Option<&mut EventLog>,
) -> Result<SimulationReport, SimError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    pool.install(|| simulate_games_logged(n, seed, chance, log))
}
