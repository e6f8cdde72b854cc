//! yz-core: Yatzy scoring rules for a single five-dice roll.
//!
//! The engine is a set of pure functions, one per category, plus a dispatcher
//! over [`Category`]. Nothing here holds state between calls.

pub mod category;
pub mod config;
pub mod error;
pub mod profile;
pub mod roll;
pub mod scoring;

pub use category::{Category, Face, CAT_NAMES, NUM_CATS};
pub use config::{Config, ConfigError, LoggingConfig, ScoringConfig};
pub use error::{InvalidCategoryError, InvalidRollError};
pub use profile::{normalize, occurrence_profile, Group, OccurrenceProfile, Shape};
pub use roll::{Roll, Validation, MAX_FACE, MIN_FACE, NUM_DICE};
pub use scoring::{
    best_category, chance, four_of_a_kind, full_house, large_straight, one_pair, score,
    scores_for_roll, small_straight, three_of_a_kind, two_pairs, upper, yatzy, Score,
    LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE, YATZY_SCORE,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ruleset identifier recorded alongside logged scores.
pub const RULESET_ID: &str = "yatzy_single_roll_v1";
