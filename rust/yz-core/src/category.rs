//! Scoring categories and their canonical scoresheet order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidCategoryError;
use crate::roll::{MAX_FACE, MIN_FACE};

pub const NUM_CATS: usize = 15;

/// Category names in index order (0..14).
pub const CAT_NAMES: [&str; NUM_CATS] = [
    "ones",
    "twos",
    "threes",
    "fours",
    "fives",
    "sixes",
    "pair",
    "two_pairs",
    "three_kind",
    "four_kind",
    "small_straight",
    "large_straight",
    "house",
    "chance",
    "yatzy",
];

/// A die face in 1..=6, used as the upper-section target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face(u8);

impl Face {
    pub fn new(n: u8) -> Result<Self, InvalidCategoryError> {
        if (MIN_FACE..=MAX_FACE).contains(&n) {
            Ok(Face(n))
        } else {
            Err(InvalidCategoryError::UpperTargetOutOfRange { target: n })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// A named scoring rule.
///
/// `Upper(face)` scores the dice showing `face`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Upper(Face),
    Chance,
    Yatzy,
    SmallStraight,
    LargeStraight,
    FourOfAKind,
    ThreeOfAKind,
    OnePair,
    TwoPairs,
    FullHouse,
}

impl Category {
    /// All categories in scoresheet order.
    pub const ALL: [Category; NUM_CATS] = [
        Category::Upper(Face(1)),
        Category::Upper(Face(2)),
        Category::Upper(Face(3)),
        Category::Upper(Face(4)),
        Category::Upper(Face(5)),
        Category::Upper(Face(6)),
        Category::OnePair,
        Category::TwoPairs,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FullHouse,
        Category::Chance,
        Category::Yatzy,
    ];

    /// Upper-section category for target face `n` in 1..=6.
    pub fn upper(n: u8) -> Result<Self, InvalidCategoryError> {
        Face::new(n).map(Category::Upper)
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Upper(face) => (face.get() - 1) as usize,
            Category::OnePair => 6,
            Category::TwoPairs => 7,
            Category::ThreeOfAKind => 8,
            Category::FourOfAKind => 9,
            Category::SmallStraight => 10,
            Category::LargeStraight => 11,
            Category::FullHouse => 12,
            Category::Chance => 13,
            Category::Yatzy => 14,
        }
    }

    pub fn from_index(index: usize) -> Result<Self, InvalidCategoryError> {
        Category::ALL
            .get(index)
            .copied()
            .ok_or(InvalidCategoryError::IndexOutOfRange { index })
    }

    pub fn name(self) -> &'static str {
        CAT_NAMES[self.index()]
    }
}

impl FromStr for Category {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        if let Some(i) = CAT_NAMES.iter().position(|&n| n == key) {
            return Ok(Category::ALL[i]);
        }
        match key.as_str() {
            "one_pair" => Ok(Category::OnePair),
            "three_of_a_kind" => Ok(Category::ThreeOfAKind),
            "four_of_a_kind" => Ok(Category::FourOfAKind),
            "full_house" => Ok(Category::FullHouse),
            _ => Err(InvalidCategoryError::UnknownName {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = InvalidCategoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
