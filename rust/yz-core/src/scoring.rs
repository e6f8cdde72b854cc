//! Per-category scoring rules.
//!
//! Every function is pure and only looks at the multiset of dice. Returned
//! scores are raw category values; scoresheet bonuses are not applied here.
//!
//! The occurrence-based categories (pairs, n-of-a-kind, house) decide from the
//! roll's [`Shape`]: each category accepts a fixed set of shapes and scores the
//! faces of the leading groups. Nothing searches alternative groupings.

use crate::category::{Category, Face, NUM_CATS};
use crate::error::InvalidCategoryError;
use crate::profile::{occurrence_profile, Group, OccurrenceProfile, Shape};
use crate::roll::Roll;

/// Points awarded by a category.
pub type Score = u32;

pub const YATZY_SCORE: Score = 50;
pub const SMALL_STRAIGHT_SCORE: Score = 15;
pub const LARGE_STRAIGHT_SCORE: Score = 20;

const SMALL_STRAIGHT: [u8; 5] = [1, 2, 3, 4, 5];
const LARGE_STRAIGHT: [u8; 5] = [2, 3, 4, 5, 6];

/// Sum of the dice showing `n`.
pub fn upper(roll: &Roll, n: u8) -> Result<Score, InvalidCategoryError> {
    Ok(upper_face(roll, Face::new(n)?))
}

fn upper_face(roll: &Roll, face: Face) -> Score {
    let n = face.get();
    roll.count(n) as Score * n as Score
}

pub fn chance(roll: &Roll) -> Score {
    roll.sum()
}

pub fn yatzy(roll: &Roll) -> Score {
    let d = roll.dice();
    if d.iter().all(|&x| x == d[0]) {
        YATZY_SCORE
    } else {
        0
    }
}

/// 15 for exactly 1-2-3-4-5.
pub fn small_straight(roll: &Roll) -> Score {
    if roll.sorted() == SMALL_STRAIGHT {
        SMALL_STRAIGHT_SCORE
    } else {
        0
    }
}

/// 20 for exactly 2-3-4-5-6.
pub fn large_straight(roll: &Roll) -> Score {
    if roll.sorted() == LARGE_STRAIGHT {
        LARGE_STRAIGHT_SCORE
    } else {
        0
    }
}

pub fn four_of_a_kind(roll: &Roll) -> Score {
    let p = occurrence_profile(roll);
    match p.shape() {
        Shape::Yatzy | Shape::FourOne => 4 * lead_face(&p, 0),
        _ => 0,
    }
}

pub fn three_of_a_kind(roll: &Roll) -> Score {
    let p = occurrence_profile(roll);
    match p.shape() {
        Shape::Yatzy | Shape::FourOne | Shape::ThreeTwo | Shape::ThreeOneOne => {
            3 * lead_face(&p, 0)
        }
        _ => 0,
    }
}

/// Twice the face of the largest group (highest face among equal groups).
pub fn one_pair(roll: &Roll) -> Score {
    let p = occurrence_profile(roll);
    match p.shape() {
        Shape::AllDistinct => 0,
        _ => 2 * lead_face(&p, 0),
    }
}

/// Exactly two of one face, two of another, and a single.
pub fn two_pairs(roll: &Roll) -> Score {
    let p = occurrence_profile(roll);
    match p.shape() {
        Shape::TwoTwoOne => 2 * lead_face(&p, 0) + 2 * lead_face(&p, 1),
        _ => 0,
    }
}

/// Exactly three of one face and two of another.
pub fn full_house(roll: &Roll) -> Score {
    let p = occurrence_profile(roll);
    match p.shape() {
        Shape::ThreeTwo => 3 * lead_face(&p, 0) + 2 * lead_face(&p, 1),
        _ => 0,
    }
}

// Shapes guarantee the group exists; a missing group scores nothing.
fn lead_face(p: &OccurrenceProfile, i: usize) -> Score {
    p.group(i).map_or(0, |Group { face, .. }| face as Score)
}

/// Score `roll` in `category`.
pub fn score(category: Category, roll: &Roll) -> Score {
    match category {
        Category::Upper(face) => upper_face(roll, face),
        Category::Chance => chance(roll),
        Category::Yatzy => yatzy(roll),
        Category::SmallStraight => small_straight(roll),
        Category::LargeStraight => large_straight(roll),
        Category::FourOfAKind => four_of_a_kind(roll),
        Category::ThreeOfAKind => three_of_a_kind(roll),
        Category::OnePair => one_pair(roll),
        Category::TwoPairs => two_pairs(roll),
        Category::FullHouse => full_house(roll),
    }
}

/// Scores for every category, in [`Category::ALL`] order.
pub fn scores_for_roll(roll: &Roll) -> [Score; NUM_CATS] {
    Category::ALL.map(|c| score(c, roll))
}

/// Highest-scoring category; the earliest in scoresheet order wins ties.
pub fn best_category(roll: &Roll) -> (Category, Score) {
    let scores = scores_for_roll(roll);
    let mut best = 0usize;
    for (i, &s) in scores.iter().enumerate() {
        if s > scores[best] {
            best = i;
        }
    }
    (Category::ALL[best], scores[best])
}
