//! Five-dice roll representation.
//!
//! A `Roll` keeps the dice in the order they were supplied. No scoring rule
//! depends on that order; callers that want a canonical view use [`Roll::sorted`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidRollError;

/// Number of dice in a roll.
pub const NUM_DICE: usize = 5;

/// Inclusive face range of a standard die.
pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;

/// How strictly incoming dice are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Length must be 5 and every face in 1..=6.
    #[default]
    Strict,
    /// Only the length is checked; out-of-range faces are scored as-is.
    Permissive,
}

/// A single roll of five dice.
///
/// Serializes as a five-element sequence. Deserialization always validates
/// strictly, so a roll built with [`Validation::Permissive`] from faces outside
/// 1..=6 serializes but does not deserialize back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "[u8; 5]")]
pub struct Roll([u8; NUM_DICE]);

impl Roll {
    /// Build a roll, rejecting any face outside 1..=6.
    pub fn new(dice: [u8; NUM_DICE]) -> Result<Self, InvalidRollError> {
        check_faces(&dice)?;
        Ok(Self(dice))
    }

    /// Build a roll from an arbitrary slice with strict validation.
    pub fn from_slice(dice: &[u8]) -> Result<Self, InvalidRollError> {
        Self::with_validation(dice, Validation::Strict)
    }

    pub fn with_validation(dice: &[u8], validation: Validation) -> Result<Self, InvalidRollError> {
        let arr: [u8; NUM_DICE] = dice
            .try_into()
            .map_err(|_| InvalidRollError::WrongLength { len: dice.len() })?;
        if validation == Validation::Strict {
            check_faces(&arr)?;
        }
        Ok(Self(arr))
    }

    /// Dice in input order.
    pub fn dice(&self) -> [u8; NUM_DICE] {
        self.0
    }

    /// Dice sorted ascending.
    pub fn sorted(&self) -> [u8; NUM_DICE] {
        let mut d = self.0;
        d.sort_unstable();
        d
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| d as u32).sum()
    }

    /// Number of dice showing `face`.
    pub fn count(&self, face: u8) -> usize {
        self.0.iter().filter(|&&d| d == face).count()
    }

    /// Parse `"2,3,1,2,1"`, `"2 3 1 2 1"` or the compact `"23121"`.
    pub fn parse_with(s: &str, validation: Validation) -> Result<Self, InvalidRollError> {
        let parse_err = || InvalidRollError::Parse {
            input: s.to_string(),
        };

        let t = s.trim();
        let tokens: Vec<&str> = t
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .collect();

        let dice: Vec<u8> = if tokens.len() == 1 && t.chars().all(|c| c.is_ascii_digit()) {
            // Compact form: one digit per die.
            t.bytes().map(|b| b - b'0').collect()
        } else {
            tokens
                .iter()
                .map(|tok| tok.parse::<u8>().map_err(|_| parse_err()))
                .collect::<Result<_, _>>()?
        };

        if dice.is_empty() {
            return Err(parse_err());
        }
        Self::with_validation(&dice, validation)
    }
}

fn check_faces(dice: &[u8; NUM_DICE]) -> Result<(), InvalidRollError> {
    match dice
        .iter()
        .position(|d| !(MIN_FACE..=MAX_FACE).contains(d))
    {
        Some(index) => Err(InvalidRollError::FaceOutOfRange {
            index,
            face: dice[index],
        }),
        None => Ok(()),
    }
}

impl TryFrom<[u8; NUM_DICE]> for Roll {
    type Error = InvalidRollError;

    fn try_from(dice: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        Self::new(dice)
    }
}

impl TryFrom<&[u8]> for Roll {
    type Error = InvalidRollError;

    fn try_from(dice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(dice)
    }
}

impl TryFrom<Vec<u8>> for Roll {
    type Error = InvalidRollError;

    fn try_from(dice: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_slice(&dice)
    }
}

impl From<Roll> for [u8; NUM_DICE] {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

impl FromStr for Roll {
    type Err = InvalidRollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, Validation::Strict)
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
