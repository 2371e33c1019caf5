//! Injected dice randomness.
//!
//! The core never draws random numbers itself. A `RollSource` hands out five
//! fresh faces per roll; the caller merges them with the hold mask through
//! `Hand::reroll`, so only non-held positions ever change.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::hand::HAND_SIZE;

/// Structural identity of one roll within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RollKey {
    pub game_seed: u64,
    pub player: u8,
    pub turn_idx: u8,
    /// 0 for the opening roll of a turn, then 1 and 2.
    pub roll_idx: u8,
}

/// Supplier of fresh dice faces.
pub trait RollSource {
    /// Five faces in 1..=6, one per hand position.
    fn roll5(&mut self, key: RollKey) -> [u8; HAND_SIZE];
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll5(&mut self, key: RollKey) -> [u8; HAND_SIZE] {
        (**self).roll5(key)
    }
}

/// SplitMix64 step.
fn splitmix64_next(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

fn mix_key(key: RollKey) -> u64 {
    let mut x = key.game_seed;
    x ^= (key.player as u64).wrapping_mul(0xD6E8FEB86659FD93);
    x ^= (key.turn_idx as u64).wrapping_mul(0xA5A35625E4F7C1AD);
    x ^= (key.roll_idx as u64).wrapping_mul(0x9E3779B97F4A7C15);
    let mut s = x;
    splitmix64_next(&mut s)
}

/// Deterministically generate five faces for `key`.
pub fn roll5_keyed(key: RollKey) -> [u8; HAND_SIZE] {
    let mut state = mix_key(key);
    let mut out = [0u8; HAND_SIZE];
    for o in &mut out {
        *o = ((splitmix64_next(&mut state) % 6) + 1) as u8;
    }
    out
}

/// Dice defined by the roll's structural key rather than an evolving RNG
/// state: the same game seed yields the same faces for a given
/// (player, turn, roll) no matter what was held before.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventKeyedRoller;

impl RollSource for EventKeyedRoller {
    fn roll5(&mut self, key: RollKey) -> [u8; HAND_SIZE] {
        roll5_keyed(key)
    }
}

/// Pseudorandom dice from a seeded ChaCha8 stream. The key is ignored.
#[derive(Debug, Clone)]
pub struct RngRoller {
    rng: ChaCha8Rng,
}

impl RngRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RollSource for RngRoller {
    fn roll5(&mut self, _key: RollKey) -> [u8; HAND_SIZE] {
        let mut out = [0u8; HAND_SIZE];
        for o in &mut out {
            *o = self.rng.gen_range(1..=6);
        }
        out
    }
}

/// Replays a fixed list of rolls in order.
///
/// # Panics
/// `roll5` panics once the script is exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    rolls: VecDeque<[u8; HAND_SIZE]>,
}

impl ScriptedRoller {
    pub fn new(rolls: impl IntoIterator<Item = [u8; HAND_SIZE]>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RollSource for ScriptedRoller {
    fn roll5(&mut self, key: RollKey) -> [u8; HAND_SIZE] {
        self.rolls
            .pop_front()
            .unwrap_or_else(|| panic!("scripted rolls exhausted at {:?}", key))
    }
}
