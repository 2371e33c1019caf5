//! Turn-level value objects: the five dice in play, which of them are held,
//! and how many rolls remain.

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

pub const HAND_SIZE: usize = 5;

/// Rolls granted at the start of every turn.
pub const MAX_ROLLS: u8 = 3;

/// Five dice, each in 1..=6, in roll order. Positions matter: a `HoldMask`
/// refers to them by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>")]
pub struct Hand([u8; HAND_SIZE]);

impl Hand {
    pub fn new(dice: &[u8]) -> Result<Self, ContractViolation> {
        let arr: [u8; HAND_SIZE] = dice
            .try_into()
            .map_err(|_| ContractViolation::HandLength { len: dice.len() })?;
        Self::from_array(arr)
    }

    pub fn from_array(dice: [u8; HAND_SIZE]) -> Result<Self, ContractViolation> {
        if let Some(&value) = dice.iter().find(|d| !(1..=6).contains(*d)) {
            return Err(ContractViolation::DieOutOfRange { value });
        }
        Ok(Self(dice))
    }

    #[inline]
    pub fn dice(&self) -> [u8; HAND_SIZE] {
        self.0
    }

    /// Frequency table indexed by face: `counts()[v]` is the number of dice
    /// showing `v`. Index 0 is always zero.
    pub fn counts(&self) -> [u8; 7] {
        let mut counts = [0u8; 7];
        for &d in &self.0 {
            counts[d as usize] += 1;
        }
        counts
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| d as u32).sum()
    }

    /// Bit `v` set iff some die shows `v`.
    pub fn distinct_faces(&self) -> u8 {
        self.0.iter().fold(0u8, |acc, &d| acc | (1 << d))
    }

    /// Derive the next hand: held positions keep their value, the rest take
    /// the face at the same index of `fresh`.
    pub fn reroll(&self, hold: &HoldMask, fresh: [u8; HAND_SIZE]) -> Result<Hand, ContractViolation> {
        let mut next = self.0;
        for (i, die) in next.iter_mut().enumerate() {
            if !hold.is_held(i) {
                *die = fresh[i];
            }
        }
        Hand::from_array(next)
    }
}

impl TryFrom<Vec<u8>> for Hand {
    type Error = ContractViolation;

    fn try_from(v: Vec<u8>) -> Result<Self, Self::Error> {
        Hand::new(&v)
    }
}

/// Which positions of a hand survive the next roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HoldMask([bool; HAND_SIZE]);

impl HoldMask {
    pub const NONE: HoldMask = HoldMask([false; HAND_SIZE]);

    pub fn new(held: &[bool]) -> Result<Self, ContractViolation> {
        let arr: [bool; HAND_SIZE] = held
            .try_into()
            .map_err(|_| ContractViolation::HoldLength { len: held.len() })?;
        Ok(Self(arr))
    }

    /// Hold every position whose die satisfies `keep`.
    pub fn select(hand: &Hand, mut keep: impl FnMut(u8) -> bool) -> Self {
        let dice = hand.dice();
        let mut held = [false; HAND_SIZE];
        for (h, &d) in held.iter_mut().zip(dice.iter()) {
            *h = keep(d);
        }
        Self(held)
    }

    #[inline]
    pub fn is_held(&self, idx: usize) -> bool {
        self.0[idx]
    }

    pub fn held(&self) -> [bool; HAND_SIZE] {
        self.0
    }

    pub fn held_count(&self) -> usize {
        self.0.iter().filter(|&&h| h).count()
    }
}

/// Remaining rolls in the current turn, 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct RollBudget(u8);

impl Default for RollBudget {
    fn default() -> Self {
        Self(MAX_ROLLS)
    }
}

impl RollBudget {
    pub fn new(remaining: u8) -> Result<Self, ContractViolation> {
        if remaining > MAX_ROLLS {
            return Err(ContractViolation::RollBudgetOutOfRange { remaining });
        }
        Ok(Self(remaining))
    }

    #[inline]
    pub fn remaining(&self) -> u8 {
        self.0
    }

    pub fn rolls_used(&self) -> u8 {
        MAX_ROLLS - self.0
    }

    pub fn is_exhausted(&self) -> bool {
        self.0 == 0
    }

    /// Spend one roll.
    pub fn consume(&mut self) -> Result<(), ContractViolation> {
        self.0 = self
            .0
            .checked_sub(1)
            .ok_or(ContractViolation::RollBudgetExhausted)?;
        Ok(())
    }
}

impl TryFrom<u8> for RollBudget {
    type Error = ContractViolation;

    fn try_from(remaining: u8) -> Result<Self, Self::Error> {
        RollBudget::new(remaining)
    }
}
