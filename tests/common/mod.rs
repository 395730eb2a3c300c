// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use countdown_solver::{BestResults, Calculation, SubsetIndex};

/// Inputs exercised by the property tests: distinct values, repeats, ones,
/// a single number and a five-number draw.
pub const SAMPLE_INPUTS: &[&[u64]] = &[
    &[7],
    &[4, 4],
    &[5, 5, 2, 1],
    &[6, 3, 2, 1],
    &[1, 1, 1, 1],
    &[10, 5, 5, 2, 2],
    &[75, 50, 10, 6, 3],
];

/// `(result, expression)` pairs, for concise assertions.
pub fn pairs<'a, I>(calculations: I) -> Vec<(u64, String)>
where
    I: IntoIterator<Item = &'a Calculation>,
{
    calculations
        .into_iter()
        .map(|c| (c.result(), c.expression().to_string()))
        .collect()
}

pub fn best_pairs(best: &BestResults) -> Vec<(u64, String)> {
    pairs(best.calculations())
}

/// Values sorted ascending, for multiset comparison.
pub fn sorted(numbers: &[u64]) -> Vec<u64> {
    let mut numbers = numbers.to_vec();
    numbers.sort_unstable();
    numbers
}

pub fn build(numbers: &[u64]) -> SubsetIndex {
    SubsetIndex::build(numbers)
}
