// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unordered two-way partitions of a sub-multiset.
//!
//! For a group of size `s`, only splits into sizes `(m, s - m)` with
//! `m >= s - m` are enumerated, taking every size-`m` combination of
//! positions as the first side and the remaining positions, in order, as the
//! second.
//!
//! When `s` is even the split `m = s/2` is its own mirror: each split is
//! reachable from either half. Combinations are generated in lexicographic
//! order, so the first `C(s, s/2) / 2` of them are those containing position
//! zero and already cover every split once. Enumeration stops there.
//!
//! Repeated values make different position choices produce the same content.
//! A split is dropped when its first side's content was seen before, and for
//! equal-size splits both sides are recorded so the mirror is dropped too.
//!
//! # Example
//!
//! `(4, 2, 1, 1)` has five partitions, found in this order:
//!
//! ```text
//! (4, 2)    + (1, 1)
//! (4, 1)    + (2, 1)
//! (4, 2, 1) + (1)
//! (4, 1, 1) + (2)
//! (2, 1, 1) + (4)
//! ```

use crate::memo::HalfBinomials;
use itertools::Itertools;
use std::collections::HashSet;

/// The content of one side of a partition.
pub type Side = Vec<u64>;

/// Enumerate every distinct unordered partition of `numbers` into two
/// non-empty sides.
///
/// Each side preserves the relative order of `numbers`. The larger side (or
/// either side for an even split) comes first. A single number has no
/// partitions.
pub fn unique_pairs(numbers: &[u64], binomials: &mut HalfBinomials) -> Vec<(Side, Side)> {
    let size = numbers.len();
    let mut pairs = Vec::new();
    if size < 2 {
        return pairs;
    }

    let mut seen: HashSet<Side> = HashSet::new();
    for m in (size + 1) / 2..size {
        let even_split = 2 * m == size;
        let limit = if even_split {
            binomials.get(size, m)
        } else {
            None
        };

        for (count, chosen) in (0..size).combinations(m).enumerate() {
            let (first, second) = split(numbers, &chosen);
            let mirrored = even_split && seen.contains(&second);
            if !seen.contains(&first) && !mirrored {
                seen.insert(first.clone());
                if even_split {
                    seen.insert(second.clone());
                }
                log::trace!("[Partition] {:?} + {:?}", first, second);
                pairs.push((first, second));
            }
            if limit == Some(count as u64 + 1) {
                break;
            }
        }
    }
    pairs
}

/// Split `numbers` into the values at the `chosen` positions and the rest.
///
/// `chosen` must be in ascending order.
fn split(numbers: &[u64], chosen: &[usize]) -> (Side, Side) {
    let mut first = Vec::with_capacity(chosen.len());
    let mut second = Vec::with_capacity(numbers.len() - chosen.len());
    let mut next = chosen.iter().peekable();
    for (position, &number) in numbers.iter().enumerate() {
        if next.peek() == Some(&&position) {
            next.next();
            first.push(number);
        } else {
            second.push(number);
        }
    }
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs_of(numbers: &[u64]) -> Vec<(Side, Side)> {
        unique_pairs(numbers, &mut HalfBinomials::new())
    }

    fn sorted(mut side: Side) -> Side {
        side.sort_unstable();
        side
    }

    #[test]
    fn test_single_number_has_no_partitions() {
        assert!(pairs_of(&[7]).is_empty());
    }

    #[test]
    fn test_two_numbers() {
        assert_eq!(pairs_of(&[5, 3]), vec![(vec![5], vec![3])]);
        assert_eq!(pairs_of(&[4, 4]), vec![(vec![4], vec![4])]);
    }

    #[test]
    fn test_documented_example() {
        let pairs = pairs_of(&[4, 2, 1, 1]);
        assert_eq!(
            pairs,
            vec![
                (vec![4, 2], vec![1, 1]),
                (vec![4, 1], vec![2, 1]),
                (vec![4, 2, 1], vec![1]),
                (vec![4, 1, 1], vec![2]),
                (vec![2, 1, 1], vec![4]),
            ]
        );
    }

    #[test]
    fn test_distinct_numbers_count() {
        // Unordered two-way splits of n distinct items: 2^(n-1) - 1
        assert_eq!(pairs_of(&[6, 5, 4, 3]).len(), 7);
        assert_eq!(pairs_of(&[9, 7, 5, 3, 1]).len(), 15);
        assert_eq!(pairs_of(&[75, 50, 25, 10, 6, 2]).len(), 31);
    }

    #[test]
    fn test_equal_split_mirrors_dropped() {
        // (3, 2) + (3, 1) and (3, 1) + (3, 2) are the same partition
        let pairs = pairs_of(&[3, 3, 2, 1]);
        let even: Vec<_> = pairs.iter().filter(|(a, b)| a.len() == b.len()).collect();
        assert_eq!(even.len(), 2);
        assert_eq!(even[0], &(vec![3, 3], vec![2, 1]));
        assert_eq!(even[1], &(vec![3, 2], vec![3, 1]));
    }

    #[test]
    fn test_sides_are_complementary() {
        let numbers = [10, 5, 5, 2, 2, 1];
        for (first, second) in pairs_of(&numbers) {
            assert!(!first.is_empty() && !second.is_empty());
            assert!(first.len() >= second.len());
            let mut union = first.clone();
            union.extend(&second);
            assert_eq!(sorted(union), sorted(numbers.to_vec()));
        }
    }

    #[test]
    fn test_no_duplicate_partitions() {
        let numbers = [5, 5, 5, 2, 2, 2];
        let pairs = pairs_of(&numbers);
        let mut keys: Vec<(Side, Side)> = pairs
            .into_iter()
            .map(|(a, b)| {
                let (a, b) = (sorted(a), sorted(b));
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_all_equal_numbers() {
        // Only one split per size
        assert_eq!(
            pairs_of(&[1, 1, 1, 1]),
            vec![(vec![1, 1], vec![1, 1]), (vec![1, 1, 1], vec![1])]
        );
    }

    #[test]
    fn test_split_preserves_order() {
        assert_eq!(
            split(&[9, 8, 7, 6, 5], &[1, 3]),
            (vec![8, 6], vec![9, 7, 5])
        );
    }
}
