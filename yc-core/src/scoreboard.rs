//! Per-player record of filled and open categories for one game.

use serde::{Deserialize, Serialize};

use crate::category::{Category, NUM_CATEGORIES};
use crate::error::ContractViolation;

/// A category is open until recorded; once recorded its score never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    slots: [Option<u32>; NUM_CATEGORIES],
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, category: Category) -> Option<u32> {
        self.slots[category.index()]
    }

    #[inline]
    pub fn is_open(&self, category: Category) -> bool {
        self.get(category).is_none()
    }

    /// Fill `category` with `score`. Filling a category twice is rejected and
    /// leaves the board untouched.
    pub fn record(&mut self, category: Category, score: u32) -> Result<(), ContractViolation> {
        let slot = &mut self.slots[category.index()];
        if slot.is_some() {
            return Err(ContractViolation::CategoryFilled { category });
        }
        *slot = Some(score);
        Ok(())
    }

    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |&c| self.is_open(c))
    }

    pub fn filled(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(move |c| self.get(c).map(|s| (c, s)))
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled_count() == NUM_CATEGORIES
    }

    /// Sum of all filled scores. There is no upper-section bonus.
    pub fn total(&self) -> u32 {
        self.slots.iter().flatten().sum()
    }
}
