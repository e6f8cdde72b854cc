//! Property-based tests for the scoring rules.

use proptest::prelude::*;

use yz_core::{
    chance, full_house, large_straight, normalize, score, scores_for_roll, small_straight, upper,
    yatzy, Category, Roll,
};

/// Strategy: a valid roll (each die 1-6).
fn dice_strategy() -> impl Strategy<Value = [u8; 5]> {
    prop::array::uniform5(1..=6u8)
}

fn category_strategy() -> impl Strategy<Value = Category> {
    (0..Category::ALL.len()).prop_map(|i| Category::ALL[i])
}

/// Strategy: a permutation of the five dice positions.
fn perm_strategy() -> impl Strategy<Value = Vec<usize>> {
    Just(vec![0usize, 1, 2, 3, 4]).prop_shuffle()
}

fn permute(dice: [u8; 5], perm: &[usize]) -> [u8; 5] {
    let mut out = [0u8; 5];
    for (o, &i) in out.iter_mut().zip(perm) {
        *o = dice[i];
    }
    out
}

fn roll(d: [u8; 5]) -> Roll {
    Roll::new(d).unwrap()
}

proptest! {
    #[test]
    fn upper_is_filtered_sum(dice in dice_strategy(), n in 1..=6u8) {
        let want: u32 = dice.iter().filter(|&&d| d == n).map(|&d| d as u32).sum();
        let got = upper(&roll(dice), n).unwrap();
        prop_assert_eq!(got, want);
        prop_assert_eq!(got == 0, !dice.contains(&n));
    }

    #[test]
    fn chance_is_total(dice in dice_strategy()) {
        let total: u32 = dice.iter().map(|&d| d as u32).sum();
        prop_assert_eq!(chance(&roll(dice)), total);
    }

    #[test]
    fn yatzy_iff_all_equal(dice in dice_strategy()) {
        let all_equal = dice.iter().all(|&d| d == dice[0]);
        prop_assert_eq!(yatzy(&roll(dice)), if all_equal { 50 } else { 0 });
    }

    #[test]
    fn straights_iff_exact_multiset(dice in dice_strategy()) {
        let mut sorted = dice;
        sorted.sort();
        let r = roll(dice);
        prop_assert_eq!(small_straight(&r), if sorted == [1, 2, 3, 4, 5] { 15 } else { 0 });
        prop_assert_eq!(large_straight(&r), if sorted == [2, 3, 4, 5, 6] { 20 } else { 0 });
    }

    #[test]
    fn full_house_iff_three_and_two(a in 1..=6u8, b in 1..=6u8, perm in perm_strategy()) {
        let dice = permute([a, a, a, b, b], &perm);
        let want = if a != b { 3 * a as u32 + 2 * b as u32 } else { 0 };
        prop_assert_eq!(full_house(&roll(dice)), want);
    }

    #[test]
    fn scores_are_permutation_invariant(dice in dice_strategy(), perm in perm_strategy()) {
        let shuffled = permute(dice, &perm);
        prop_assert_eq!(scores_for_roll(&roll(dice)), scores_for_roll(&roll(shuffled)));
        prop_assert_eq!(normalize(&roll(dice)), normalize(&roll(shuffled)));
    }

    #[test]
    fn score_is_deterministic(dice in dice_strategy(), cat in category_strategy()) {
        let r = roll(dice);
        prop_assert_eq!(score(cat, &r), score(cat, &r));
    }

    #[test]
    fn normalize_is_a_rearrangement(dice in dice_strategy()) {
        let mut a = normalize(&roll(dice));
        let mut b = dice;
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_faces_are_rejected(
        dice in dice_strategy(),
        idx in 0..5usize,
        bad in prop_oneof![Just(0u8), 7..=255u8],
    ) {
        let mut d = dice;
        d[idx] = bad;
        prop_assert!(Roll::new(d).is_err());
    }
}
