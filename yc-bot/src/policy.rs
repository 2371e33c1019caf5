//! Per-roll and end-of-turn decisions.

use yc_core::{
    evaluate, Category, ContractViolation, Hand, HoldMask, Scoreboard, PRIORITY_ORDER,
    SACRIFICE_ORDER,
};

/// Hands worth banking immediately when their category is still open.
pub const EARLY_STOP_CATEGORIES: [Category; 3] = [
    Category::Yacht,
    Category::LargeStraight,
    Category::FullHouse,
];

/// Minimum run of consecutive faces worth chasing a straight with.
const MIN_RUN: u8 = 3;

/// Early-stop rule: the first of `EARLY_STOP_CATEGORIES` that the hand
/// already scores and that is still open, if any.
pub fn should_stop(hand: &Hand, board: &Scoreboard) -> Option<Category> {
    let scores = evaluate(hand);
    EARLY_STOP_CATEGORIES
        .into_iter()
        .find(|&c| board.is_open(c) && scores.get(c) > 0)
}

/// Which rule of the hold priority produced a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldRule {
    /// Keep every die showing `face`, the most frequent face (lowest on ties).
    Multiples { face: u8, count: u8 },
    /// Keep the run of consecutive faces `low..=high`.
    Run { low: u8, high: u8 },
    /// Keep every die showing 4 or more.
    HighFaces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldDecision {
    pub mask: HoldMask,
    pub rule: HoldRule,
}

/// Hold decision, re-derived after every roll.
///
/// Fixed priority: multiples, then a partial straight (only while a straight
/// category is open), then high faces.
pub fn decide_hold(hand: &Hand, board: &Scoreboard) -> HoldDecision {
    let counts = hand.counts();

    let mut face = 1u8;
    let mut count = 0u8;
    for v in 1..=6u8 {
        if counts[v as usize] > count {
            face = v;
            count = counts[v as usize];
        }
    }

    if count >= 2 {
        return HoldDecision {
            mask: HoldMask::select(hand, |d| d == face),
            rule: HoldRule::Multiples { face, count },
        };
    }

    let straight_open =
        board.is_open(Category::SmallStraight) || board.is_open(Category::LargeStraight);
    if straight_open {
        if let Some((low, high)) = longest_run(hand.distinct_faces()) {
            if high - low + 1 >= MIN_RUN {
                return HoldDecision {
                    mask: HoldMask::select(hand, |d| (low..=high).contains(&d)),
                    rule: HoldRule::Run { low, high },
                };
            }
        }
    }

    HoldDecision {
        mask: HoldMask::select(hand, |d| d >= 4),
        rule: HoldRule::HighFaces,
    }
}

/// Longest run of consecutive faces in a face bitset (bit `v` = face `v`).
/// The lowest run wins a tie.
fn longest_run(faces: u8) -> Option<(u8, u8)> {
    let mut best: Option<(u8, u8)> = None;
    let mut start: Option<u8> = None;
    for v in 1..=7u8 {
        let present = v <= 6 && faces & (1 << v) != 0;
        match (present, start) {
            (true, None) => start = Some(v),
            (false, Some(s)) => {
                let longer = best.map_or(true, |(lo, hi)| v - s > hi - lo + 1);
                if longer {
                    best = Some((s, v - 1));
                }
                start = None;
            }
            _ => {}
        }
    }
    best
}

/// End-of-turn commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub category: Category,
    pub score: u32,
    /// True when no open category scored and one was filled with 0.
    pub sacrifice: bool,
}

/// Pick the first open category in `PRIORITY_ORDER` with a positive score;
/// on a bust hand, fill the first open category in `SACRIFICE_ORDER` with 0.
///
/// Fails only when the scoreboard has no open category.
pub fn choose_category(hand: &Hand, board: &Scoreboard) -> Result<Commit, ContractViolation> {
    let scores = evaluate(hand);

    if let Some(category) = PRIORITY_ORDER
        .into_iter()
        .find(|&c| board.is_open(c) && scores.get(c) > 0)
    {
        return Ok(Commit {
            category,
            score: scores.get(category),
            sacrifice: false,
        });
    }

    SACRIFICE_ORDER
        .into_iter()
        .find(|&c| board.is_open(c))
        .map(|category| Commit {
            category,
            score: 0,
            sacrifice: true,
        })
        .ok_or(ContractViolation::ScoreboardComplete)
}
