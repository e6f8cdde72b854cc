//! Occurrence profile: the roll's faces grouped by value and ordered by group size.
//!
//! Groups are ordered by descending count; equal-size groups by descending face.
//! The ordering only depends on the multiset of dice, so every consumer of the
//! profile is permutation-invariant.

use crate::roll::{Roll, NUM_DICE};

/// One face value and how many dice show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub face: u8,
    pub count: u8,
}

/// Group sizes of a roll, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// 5
    Yatzy,
    /// 4+1
    FourOne,
    /// 3+2
    ThreeTwo,
    /// 3+1+1
    ThreeOneOne,
    /// 2+2+1
    TwoTwoOne,
    /// 2+1+1+1
    TwoOneOneOne,
    /// 1+1+1+1+1
    AllDistinct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceProfile {
    groups: Vec<Group>,
}

impl OccurrenceProfile {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The `i`-th largest group, if the roll has that many distinct faces.
    pub fn group(&self, i: usize) -> Option<Group> {
        self.groups.get(i).copied()
    }

    pub fn shape(&self) -> Shape {
        let counts: Vec<u8> = self.groups.iter().map(|g| g.count).collect();
        match counts.as_slice() {
            [5] => Shape::Yatzy,
            [4, 1] => Shape::FourOne,
            [3, 2] => Shape::ThreeTwo,
            [3, 1, 1] => Shape::ThreeOneOne,
            [2, 2, 1] => Shape::TwoTwoOne,
            [2, 1, 1, 1] => Shape::TwoOneOneOne,
            _ => Shape::AllDistinct,
        }
    }

    /// Flatten back into five faces, largest group first.
    pub fn normalized(&self) -> [u8; NUM_DICE] {
        let mut out = [0u8; NUM_DICE];
        let faces = self
            .groups
            .iter()
            .flat_map(|g| std::iter::repeat(g.face).take(g.count as usize));
        for (slot, face) in out.iter_mut().zip(faces) {
            *slot = face;
        }
        out
    }
}

/// Group the roll by face value, largest group first.
pub fn occurrence_profile(roll: &Roll) -> OccurrenceProfile {
    let mut groups: Vec<Group> = Vec::with_capacity(NUM_DICE);
    for face in roll.dice() {
        match groups.iter().position(|g| g.face == face) {
            Some(i) => groups[i].count += 1,
            None => groups.push(Group { face, count: 1 }),
        }
    }
    // Equal-size groups go by descending face rather than first-seen order, so the
    // profile depends only on the multiset of dice.
    groups.sort_by(|a, b| b.count.cmp(&a.count).then(b.face.cmp(&a.face)));
    OccurrenceProfile { groups }
}

/// Faces of the roll ordered by group size, then by face (both descending).
pub fn normalize(roll: &Roll) -> [u8; NUM_DICE] {
    occurrence_profile(roll).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::Validation;

    fn roll(d: [u8; 5]) -> Roll {
        Roll::new(d).unwrap()
    }

    #[test]
    fn groups_are_ordered_by_count_then_face() {
        let p = occurrence_profile(&roll([2, 4, 6, 2, 6]));
        assert_eq!(
            p.groups(),
            &[
                Group { face: 6, count: 2 },
                Group { face: 2, count: 2 },
                Group { face: 4, count: 1 },
            ]
        );
        assert_eq!(p.normalized(), [6, 6, 2, 2, 4]);
    }

    #[test]
    fn normalize_is_permutation_invariant() {
        assert_eq!(normalize(&roll([3, 3, 6, 3, 6])), [3, 3, 3, 6, 6]);
        assert_eq!(normalize(&roll([6, 3, 6, 3, 3])), [3, 3, 3, 6, 6]);
        assert_eq!(normalize(&roll([5, 1, 3, 2, 4])), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn shapes() {
        let cases = [
            ([4, 4, 4, 4, 4], Shape::Yatzy),
            ([5, 5, 5, 2, 5], Shape::FourOne),
            ([3, 3, 6, 3, 6], Shape::ThreeTwo),
            ([4, 1, 4, 2, 4], Shape::ThreeOneOne),
            ([2, 4, 6, 2, 6], Shape::TwoTwoOne),
            ([4, 6, 6, 2, 5], Shape::TwoOneOneOne),
            ([6, 2, 4, 3, 5], Shape::AllDistinct),
        ];
        for (d, want) in cases {
            assert_eq!(occurrence_profile(&roll(d)).shape(), want, "dice {:?}", d);
        }
    }

    #[test]
    fn group_accessor() {
        let p = occurrence_profile(&roll([1, 1, 1, 1, 1]));
        assert_eq!(p.group(0), Some(Group { face: 1, count: 5 }));
        assert_eq!(p.group(1), None);
    }

    #[test]
    fn permissive_faces_are_grouped_too() {
        let r = Roll::with_validation(&[0, 9, 9, 0, 9], Validation::Permissive).unwrap();
        assert_eq!(normalize(&r), [9, 9, 9, 0, 0]);
        assert_eq!(occurrence_profile(&r).shape(), Shape::ThreeTwo);
    }
}
