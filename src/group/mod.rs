// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Groups: every calculation reachable from one sub-multiset.
//!
//! A group of size one holds the singleton calculation for its number. A
//! larger group is split into all its unique partitions (see
//! [`partition`]); for each partition `(A, B)` every calculation of `A` is
//! combined with every calculation of `B`.
//!
//! Groups refer to the groups of their partitions by [`GroupId`], a handle
//! into the [`SubsetIndex`] arena. Partitions always refer to strictly
//! smaller groups, so the references form a DAG and the index can be built
//! bottom-up by size.
//!
//! Calculations are not deduplicated across partitions: two derivations with
//! the same value, or even the same text, are both kept.

pub mod partition;

use crate::calculation::Calculation;
use crate::index::SubsetIndex;
use crate::memo::HalfBinomials;
use crate::state::{Counters, Statistics};
use itertools::Itertools;
use std::fmt;

/// Handle to a group stored in a [`SubsetIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the group in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// All calculations for one sub-multiset.
#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    numbers: Vec<u64>,
    partitions: Vec<(GroupId, GroupId)>,
    calculations: Vec<Calculation>,
}

impl Group {
    /// Build the group for `numbers` from the smaller groups already in `index`.
    ///
    /// # Panics
    ///
    /// Panics if a partition side is missing from `index`, which means the
    /// index was not built in order of increasing size.
    pub(crate) fn new(
        id: GroupId,
        numbers: Vec<u64>,
        index: &SubsetIndex,
        binomials: &mut HalfBinomials,
        statistics: &mut Statistics,
    ) -> Self {
        let partitions: Vec<(GroupId, GroupId)> = partition::unique_pairs(&numbers, binomials)
            .into_iter()
            .map(|(first, second)| (resolve(index, &first), resolve(index, &second)))
            .collect();
        statistics.add(Counters::Partitions, partitions.len() as u64);

        let calculations = if numbers.len() == 1 {
            vec![Calculation::singleton(numbers[0])]
        } else {
            let mut calculations = Vec::new();
            for &(first, second) in &partitions {
                let pairings = index
                    .group(first)
                    .calculations()
                    .iter()
                    .cartesian_product(index.group(second).calculations());
                for (a, b) in pairings {
                    statistics.increment_counter(Counters::Pairings);
                    calculations.extend(Calculation::generate(a, b));
                }
            }
            calculations
        };
        statistics.add(Counters::Calculations, calculations.len() as u64);

        log::trace!(
            "[Group] {:?}: {} partitions, {} calculations",
            numbers,
            partitions.len(),
            calculations.len()
        );

        Self {
            id,
            numbers,
            partitions,
            calculations,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// The sub-multiset, in canonical (descending) order.
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    pub fn size(&self) -> usize {
        self.numbers.len()
    }

    /// The unique unordered partitions into two smaller groups.
    pub fn partitions(&self) -> &[(GroupId, GroupId)] {
        &self.partitions
    }

    /// Calculations in the order they were generated.
    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.numbers.iter().join(", "))
    }
}

fn resolve(index: &SubsetIndex, side: &[u64]) -> GroupId {
    index.find(side).unwrap_or_else(|| {
        panic!(
            "partition side {:?} is not in the subset index; groups must be built smallest first",
            side
        )
    })
}
