//! One bounded bot turn: up to three rolls, then exactly one commitment.
//!
//! START -> (ROLL -> EVALUATE -> {STOP | HOLD then ROLL})* -> COMMIT -> END

use yc_core::{
    Category, ContractViolation, Hand, HoldMask, RollBudget, RollKey, RollSource, Scoreboard,
    MAX_ROLLS,
};

use crate::policy::{choose_category, decide_hold, should_stop, Commit, HoldDecision};

/// Why rolling ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// The hand already scored this open high-value category.
    EarlyStop(Category),
    /// All three rolls were spent.
    BudgetExhausted,
}

/// The hand seen after one roll and what the bot did about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollStep {
    pub roll_idx: u8,
    pub hand: Hand,
    /// `None` on the final roll of the turn.
    pub hold: Option<HoldDecision>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotTurn {
    pub final_hand: Hand,
    pub commit: Commit,
    pub end: TurnEnd,
    pub steps: Vec<RollStep>,
}

impl BotTurn {
    pub fn category(&self) -> Category {
        self.commit.category
    }

    pub fn score(&self) -> u32 {
        self.commit.score
    }

    pub fn rolls_used(&self) -> u8 {
        self.steps.len() as u8
    }

    /// Record the commitment on `board`.
    pub fn apply(&self, board: &mut Scoreboard) -> Result<(), ContractViolation> {
        board.record(self.commit.category, self.commit.score)
    }
}

/// Play one turn for the bot owning `board`.
///
/// `key` identifies the game, player and turn; `roll_idx` is filled in per
/// roll. The scoreboard is only read: call `BotTurn::apply` to record the
/// result.
pub fn decide_bot_turn<S: RollSource + ?Sized>(
    board: &Scoreboard,
    source: &mut S,
    key: RollKey,
) -> Result<BotTurn, ContractViolation> {
    if board.is_complete() {
        return Err(ContractViolation::ScoreboardComplete);
    }

    let mut budget = RollBudget::default();
    let mut steps = Vec::with_capacity(MAX_ROLLS as usize);

    let mut hand = Hand::from_array(source.roll5(RollKey { roll_idx: 0, ..key }))?;
    budget.consume()?;

    let end = loop {
        let roll_idx = budget.rolls_used() - 1;

        if budget.is_exhausted() {
            steps.push(RollStep {
                roll_idx,
                hand,
                hold: None,
            });
            break TurnEnd::BudgetExhausted;
        }
        if let Some(category) = should_stop(&hand, board) {
            steps.push(RollStep {
                roll_idx,
                hand,
                hold: None,
            });
            break TurnEnd::EarlyStop(category);
        }

        let decision = decide_hold(&hand, board);
        steps.push(RollStep {
            roll_idx,
            hand,
            hold: Some(decision),
        });

        hand = reroll(source, key, &hand, &decision.mask, budget.rolls_used())?;
        budget.consume()?;
    };

    let commit = choose_category(&hand, board)?;

    Ok(BotTurn {
        final_hand: hand,
        commit,
        end,
        steps,
    })
}

fn reroll<S: RollSource + ?Sized>(
    source: &mut S,
    key: RollKey,
    hand: &Hand,
    hold: &HoldMask,
    roll_idx: u8,
) -> Result<Hand, ContractViolation> {
    let fresh = source.roll5(RollKey { roll_idx, ..key });
    hand.reroll(hold, fresh)
}
