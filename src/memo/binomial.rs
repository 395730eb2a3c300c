// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Half central binomial coefficients.
//!
//! Splitting a group of even size `n` into two halves of size `n/2` yields
//! every split twice, once from each side. Enumerating the size-`n/2`
//! combinations in lexicographic order, the first `C(n, n/2) / 2` of them are
//! exactly those containing the first element, so stopping there emits each
//! split once.

use std::collections::HashMap;

/// Compute `C(n, k) / 2`, or `None` when `n` is odd.
///
/// The coefficient is built as a running product over the top `k` factors of
/// `n!`, dividing at every step so intermediate values stay exact.
pub fn half_binomial(n: usize, k: usize) -> Option<u64> {
    if n % 2 == 1 {
        return None;
    }
    if k > n {
        return Some(0);
    }
    let mut product = 1u64;
    for (factor, divisor) in ((n + 1 - k)..=n).rev().zip(1..=k) {
        product = product * factor as u64 / divisor as u64;
    }
    Some(product / 2)
}

/// Memoizing wrapper around [`half_binomial`].
///
/// Every group of a given size asks for the same coefficient, so each
/// distinct `(n, k)` is computed once per solve.
#[derive(Debug, Default, Clone)]
pub struct HalfBinomials {
    table: HashMap<(usize, usize), Option<u64>>,
}

impl HalfBinomials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `C(n, k) / 2`, computing and caching it on first use.
    pub fn get(&mut self, n: usize, k: usize) -> Option<u64> {
        *self
            .table
            .entry((n, k))
            .or_insert_with(|| half_binomial(n, k))
    }

    /// Number of distinct `(n, k)` pairs computed so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
