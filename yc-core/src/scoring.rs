//! Scoring evaluator: map a hand to the achievable score of every category.
//!
//! Pure and total over legal hands. Evaluation never consults a scoreboard;
//! whether a category is still open is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::category::{Category, NUM_CATEGORIES};
use crate::hand::Hand;

pub const SMALL_STRAIGHT_SCORE: u32 = 15;
pub const LARGE_STRAIGHT_SCORE: u32 = 30;
pub const YACHT_SCORE: u32 = 50;

/// Face bitsets (bit `v` = face `v`) of every four-long run.
const SMALL_RUNS: [u8; 3] = [0b001_1110, 0b011_1100, 0b111_1000];
/// Face bitsets of every five-long run.
const LARGE_RUNS: [u8; 2] = [0b011_1110, 0b111_1100];

/// Achievable score per category, indexed in `Category::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores([u32; NUM_CATEGORIES]);

impl CategoryScores {
    #[inline]
    pub fn get(&self, category: Category) -> u32 {
        self.0[category.index()]
    }

    pub fn as_array(&self) -> [u32; NUM_CATEGORIES] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Compute the raw score of every category for `hand`.
pub fn evaluate(hand: &Hand) -> CategoryScores {
    let counts = hand.counts();
    let total = hand.sum();
    let faces = hand.distinct_faces();

    let mut s = [0u32; NUM_CATEGORIES];

    for face in 1..=6u8 {
        let cat = Category::ALL[(face - 1) as usize];
        s[cat.index()] = counts[face as usize] as u32 * face as u32;
    }

    s[Category::Choice.index()] = total;

    let max_count = counts.iter().copied().max().unwrap_or(0);
    if max_count >= 4 {
        s[Category::FourOfAKind.index()] = total;
    }

    // Five of a kind also counts as a full house in this ruleset.
    let has3 = counts.contains(&3);
    let has2 = counts.contains(&2);
    if (has3 && has2) || max_count == 5 {
        s[Category::FullHouse.index()] = total;
    }

    if SMALL_RUNS.iter().any(|&run| faces & run == run) {
        s[Category::SmallStraight.index()] = SMALL_STRAIGHT_SCORE;
    }
    if LARGE_RUNS.iter().any(|&run| faces & run == run) {
        s[Category::LargeStraight.index()] = LARGE_STRAIGHT_SCORE;
    }

    if max_count == 5 {
        s[Category::Yacht.index()] = YACHT_SCORE;
    }

    CategoryScores(s)
}

/// Score of a single category for `hand`.
pub fn score_for(hand: &Hand, category: Category) -> u32 {
    evaluate(hand).get(category)
}
