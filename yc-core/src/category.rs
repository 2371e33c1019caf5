//! The closed set of 12 scoring categories and the bot's ordering tables.
//!
//! Category order in `Category::ALL` is the scoreboard layout (upper section
//! first). It carries no meaning beyond display; decision orderings are the
//! explicit `PRIORITY_ORDER` and `SACRIFICE_ORDER` tables below.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

pub const NUM_CATEGORIES: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Choice,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yacht,
}

impl Category {
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Choice,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yacht,
    ];

    /// Position in `Category::ALL`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face value counted by an upper-section category.
    pub fn upper_face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    pub fn is_straight(self) -> bool {
        matches!(self, Category::SmallStraight | Category::LargeStraight)
    }

    /// Stable snake_case key, identical to the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Choice => "choice",
            Category::FourOfAKind => "four_of_a_kind",
            Category::FullHouse => "full_house",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::Yacht => "yacht",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ContractViolation;

    /// Accepts the snake_case key, or a face digit `1`..`6` for the upper section.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let by_digit = match key.as_str() {
            "1" => Some(Category::Ones),
            "2" => Some(Category::Twos),
            "3" => Some(Category::Threes),
            "4" => Some(Category::Fours),
            "5" => Some(Category::Fives),
            "6" => Some(Category::Sixes),
            _ => None,
        };
        by_digit
            .or_else(|| Category::ALL.into_iter().find(|c| c.name() == key))
            .ok_or(ContractViolation::UnknownCategory { name: s.to_string() })
    }
}

/// Final-commit walk: rarest / highest value first. The first open category
/// with a strictly positive score wins.
pub const PRIORITY_ORDER: [Category; NUM_CATEGORIES] = [
    Category::Yacht,
    Category::LargeStraight,
    Category::SmallStraight,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Sixes,
    Category::Fives,
    Category::Fours,
    Category::Choice,
    Category::Threes,
    Category::Twos,
    Category::Ones,
];

/// Bust walk: lowest opportunity cost first. The first open category is
/// filled with 0.
pub const SACRIFICE_ORDER: [Category; NUM_CATEGORIES] = [
    Category::Ones,
    Category::Twos,
    Category::Threes,
    Category::Choice,
    Category::SmallStraight,
    Category::LargeStraight,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Yacht,
    Category::Fours,
    Category::Fives,
    Category::Sixes,
];
