//! Head sequences.
//!
//! A sequence lists one frequency label per head. It starts as all 28 kHz
//! heads followed by all 40 kHz heads, then gets shuffled so one class does
//! not cluster on one side of the grid. The shuffle is seeded, so the same
//! counts always produce the same layout.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use sf_sizing::FrequencyClass;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SHUFFLE_SEED: u64 = 42;

/// Strategy for reordering a head sequence in place.
pub trait HeadShuffle {
    fn shuffle(&self, heads: &mut [FrequencyClass]);
}

/// Fisher-Yates shuffle driven by `StdRng` seeded from `seed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededShuffle {
    pub seed: u64,
}

impl SeededShuffle {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for SeededShuffle {
    fn default() -> Self {
        Self::new(DEFAULT_SHUFFLE_SEED)
    }
}

impl HeadShuffle for SeededShuffle {
    fn shuffle(&self, heads: &mut [FrequencyClass]) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        heads.shuffle(&mut rng);
    }
}

/// Leaves the sequence in its grouped order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShuffle;

impl HeadShuffle for NoShuffle {
    fn shuffle(&self, _heads: &mut [FrequencyClass]) {}
}

/// `count_28` labels of 28 kHz followed by `count_40` labels of 40 kHz.
pub fn ordered_heads(count_28: u32, count_40: u32) -> Vec<FrequencyClass> {
    let mut heads = Vec::with_capacity((count_28 as usize).saturating_add(count_40 as usize));
    heads.extend(std::iter::repeat_n(FrequencyClass::K28, count_28 as usize));
    heads.extend(std::iter::repeat_n(FrequencyClass::K40, count_40 as usize));
    heads
}

/// Shuffled head sequence for the given counts.
pub fn build_head_sequence(count_28: u32, count_40: u32, seed: u64) -> Vec<FrequencyClass> {
    build_head_sequence_with(count_28, count_40, &SeededShuffle::new(seed))
}

pub fn build_head_sequence_with(
    count_28: u32,
    count_40: u32,
    shuffle: &dyn HeadShuffle,
) -> Vec<FrequencyClass> {
    let mut heads = ordered_heads(count_28, count_40);
    shuffle.shuffle(&mut heads);
    heads
}

/// Split a sequence between two side walls; the second gets the odd head.
pub fn split_for_side_walls(heads: &[FrequencyClass]) -> (&[FrequencyClass], &[FrequencyClass]) {
    heads.split_at(heads.len() / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(heads: &[FrequencyClass], class: FrequencyClass) -> usize {
        heads.iter().filter(|&&h| h == class).count()
    }

    #[test]
    fn ordered_groups_28_first() {
        let heads = ordered_heads(2, 3);
        assert_eq!(
            heads,
            vec![
                FrequencyClass::K28,
                FrequencyClass::K28,
                FrequencyClass::K40,
                FrequencyClass::K40,
                FrequencyClass::K40,
            ]
        );
    }

    #[test]
    fn shuffle_keeps_counts() {
        let heads = build_head_sequence(3, 2, DEFAULT_SHUFFLE_SEED);
        assert_eq!(heads.len(), 5);
        assert_eq!(count(&heads, FrequencyClass::K28), 3);
        assert_eq!(count(&heads, FrequencyClass::K40), 2);
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = build_head_sequence(14, 9, DEFAULT_SHUFFLE_SEED);
        let b = build_head_sequence(14, 9, DEFAULT_SHUFFLE_SEED);
        assert_eq!(a, b);
    }

    #[test]
    fn single_class_is_unaffected_by_shuffle() {
        assert_eq!(build_head_sequence(4, 0, 7), ordered_heads(4, 0));
        assert_eq!(build_head_sequence(0, 4, 7), ordered_heads(0, 4));
        assert!(build_head_sequence(0, 0, 7).is_empty());
    }

    #[test]
    fn ordered_heads_counts_each_class() {
        let heads = ordered_heads(1_000, 2_500);
        assert_eq!(heads.len(), 3_500);
        assert_eq!(count(&heads, FrequencyClass::K40), 2_500);
    }

    #[test]
    fn no_shuffle_is_the_grouped_order() {
        assert_eq!(
            build_head_sequence_with(3, 2, &NoShuffle),
            ordered_heads(3, 2)
        );
    }

    #[test]
    fn side_wall_split_favors_second_wall() {
        let heads = ordered_heads(3, 2);
        let (a, b) = split_for_side_walls(&heads);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);

        let (a, b) = split_for_side_walls(&heads[..1]);
        assert!(a.is_empty());
        assert_eq!(b.len(), 1);
    }
}
