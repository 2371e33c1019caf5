//! Mapping game records onto NDJSON event schemas.

use yc_bot::{HoldRule, TurnEnd};
use yc_core::{LoggingConfig, RULESET_ID};
use yc_logging::{
    now_ms, BotTurnEventV1, GameEndEventV1, NdjsonWriter, RollStepV1, SimSummaryEventV1,
    VersionInfoV1,
};

use crate::game::{DuelOutcome, DuelRecord, GameRecord, PlayedTurn};
use crate::report::SimulationReport;
use crate::SimError;

fn hold_rule_name(rule: HoldRule) -> &'static str {
    match rule {
        HoldRule::Multiples { .. } => "multiples",
        HoldRule::Run { .. } => "run",
        HoldRule::HighFaces => "high_faces",
    }
}

pub fn turn_event(game_seed: u64, played: &PlayedTurn) -> BotTurnEventV1 {
    let t = &played.turn;
    BotTurnEventV1 {
        event: "bot_turn".to_string(),
        ts_ms: now_ms(),
        v: VersionInfoV1::new(RULESET_ID),
        game_seed,
        player: played.player,
        turn_idx: played.turn_idx,
        rolls: t
            .steps
            .iter()
            .map(|s| RollStepV1 {
                roll_idx: s.roll_idx,
                dice: s.hand.dice(),
                held: s.hold.map(|h| h.mask.held()),
                hold_rule: s.hold.map(|h| hold_rule_name(h.rule).to_string()),
            })
            .collect(),
        end: match t.end {
            TurnEnd::EarlyStop(_) => "early_stop",
            TurnEnd::BudgetExhausted => "budget_exhausted",
        }
        .to_string(),
        category: t.category().name().to_string(),
        score: t.score(),
        sacrifice: t.commit.sacrifice,
    }
}

pub fn game_end_event(game: &GameRecord) -> GameEndEventV1 {
    GameEndEventV1 {
        event: "game_end".to_string(),
        ts_ms: now_ms(),
        v: VersionInfoV1::new(RULESET_ID),
        game_seed: game.seed,
        totals: vec![game.total()],
        winner: None,
    }
}

pub fn duel_end_event(duel: &DuelRecord) -> GameEndEventV1 {
    GameEndEventV1 {
        event: "game_end".to_string(),
        ts_ms: now_ms(),
        v: VersionInfoV1::new(RULESET_ID),
        game_seed: duel.seed,
        totals: duel.totals().to_vec(),
        winner: match duel.outcome() {
            DuelOutcome::Win(p) => Some(p),
            DuelOutcome::Draw => None,
        },
    }
}

pub fn summary_event(
    report: &SimulationReport,
    config_hash: Option<String>,
    elapsed_ms: u64,
) -> Option<SimSummaryEventV1> {
    let s = report.summary()?;
    Some(SimSummaryEventV1 {
        event: "sim_summary".to_string(),
        ts_ms: now_ms(),
        v: VersionInfoV1::new(RULESET_ID),
        games: report.games() as u64,
        seed: report.seed,
        chance: report.chance.name().to_string(),
        config_hash,
        mean: s.mean,
        median: s.median,
        std_dev: s.std_dev,
        min: s.min,
        max: s.max,
        yacht_rate: report.yacht_rate(),
        elapsed_ms,
    })
}

/// Event sink configured from `LoggingConfig`.
pub struct EventLog {
    writer: NdjsonWriter,
    log_turns: bool,
}

impl EventLog {
    /// `Ok(None)` when no events path is configured.
    pub fn open(cfg: &LoggingConfig) -> Result<Option<Self>, SimError> {
        let Some(path) = cfg.events_path.as_deref() else {
            return Ok(None);
        };
        let writer = NdjsonWriter::open_append_with_flush(path, cfg.flush_every_lines)?;
        Ok(Some(Self {
            writer,
            log_turns: cfg.log_turns,
        }))
    }

    fn log_turns(&mut self, seed: u64, turns: &[PlayedTurn]) -> Result<(), SimError> {
        if self.log_turns {
            for t in turns {
                self.writer.write_event(&turn_event(seed, t))?;
            }
        }
        Ok(())
    }

    pub fn log_game(&mut self, game: &GameRecord) -> Result<(), SimError> {
        self.log_turns(game.seed, &game.turns)?;
        self.writer.write_event(&game_end_event(game))?;
        Ok(())
    }

    pub fn log_duel(&mut self, duel: &DuelRecord) -> Result<(), SimError> {
        self.log_turns(duel.seed, &duel.turns)?;
        self.writer.write_event(&duel_end_event(duel))?;
        Ok(())
    }

    /// Closing `sim_summary` line for a batch whose games were already logged.
    pub fn log_summary(
        &mut self,
        report: &SimulationReport,
        config_hash: Option<String>,
        elapsed_ms: u64,
    ) -> Result<(), SimError> {
        if let Some(ev) = summary_event(report, config_hash, elapsed_ms) {
            self.writer.write_event(&ev)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), SimError> {
        self.writer.flush()?;
        Ok(())
    }
}
