//! Error types for roll construction and category selection.

use thiserror::Error;

/// A roll that is not exactly five dice in 1..=6.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRollError {
    #[error("a roll has exactly 5 dice, got {len}")]
    WrongLength { len: usize },
    #[error("die {index} shows {face}, expected 1..=6")]
    FaceOutOfRange { index: usize, face: u8 },
    #[error("cannot parse roll from {input:?}")]
    Parse { input: String },
}

/// A category selector that does not name a scoring rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCategoryError {
    #[error("upper target must be in 1..=6, got {target}")]
    UpperTargetOutOfRange { target: u8 },
    #[error("unknown category {name:?}")]
    UnknownName { name: String },
    #[error("category index {index} out of range 0..15")]
    IndexOutOfRange { index: usize },
}
