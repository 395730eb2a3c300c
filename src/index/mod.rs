// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The subset index: one [`Group`] per distinct sub-multiset of the input.
//!
//! # Construction
//!
//! For each size `m` from 1 to `n`, every size-`m` combination of input
//! positions is considered. Repeated input values make many combinations
//! share the same content; membership is checked on the canonical content
//! (values sorted in descending order), so each distinct sub-multiset gets
//! exactly one group, built the first time its content is seen.
//!
//! Groups are stored in an arena in creation order and addressed by
//! [`GroupId`]. A group only refers to strictly smaller groups, all of which
//! were built in an earlier round, so the index is a DAG built bottom-up and
//! read-only once [`SubsetIndex::build`] returns.
//!
//! # Example
//!
//! ```
//! use countdown_solver::index::SubsetIndex;
//!
//! let index = SubsetIndex::build(&[5, 5, 2]);
//!
//! // (5), (2), (5, 5), (5, 2), (5, 5, 2)
//! assert_eq!(index.len(), 5);
//! assert!(index.walk().any(|c| c.expression() == "5 + 5"));
//! ```

use crate::calculation::Calculation;
use crate::group::{Group, GroupId};
use crate::memo::HalfBinomials;
use crate::state::{Counters, Statistics};
use itertools::Itertools;
use std::collections::HashMap;

/// Arena of groups keyed by canonical sub-multiset content.
#[derive(Debug, Clone)]
pub struct SubsetIndex {
    groups: Vec<Group>,
    lookup: HashMap<Vec<u64>, GroupId>,
    statistics: Statistics,
}

impl SubsetIndex {
    /// Build every group for the sub-multisets of `numbers`, smallest first.
    ///
    /// The order of `numbers` only affects the order in which groups, and
    /// therefore calculations, are discovered.
    pub fn build(numbers: &[u64]) -> Self {
        log::debug!("[SubsetIndex] Building groups for {:?}...", numbers);

        let mut index = Self {
            groups: Vec::new(),
            lookup: HashMap::new(),
            statistics: Statistics::new(),
        };
        let mut binomials = HalfBinomials::new();
        let mut statistics = Statistics::new();

        for m in 1..=numbers.len() {
            let before = index.groups.len();
            for combination in numbers.iter().copied().combinations(m) {
                let content = canonical(&combination);
                if index.lookup.contains_key(&content) {
                    continue;
                }
                let id = GroupId::new(index.groups.len());
                let group = Group::new(id, content.clone(), &index, &mut binomials, &mut statistics);
                index.groups.push(group);
                index.lookup.insert(content, id);
                statistics.increment_counter(Counters::Groups);
            }
            log::debug!(
                "[SubsetIndex] Size {}: {} groups",
                m,
                index.groups.len() - before
            );
        }

        log::debug!(
            "[SubsetIndex] Complete ({} groups, {} coefficients cached)",
            index.groups.len(),
            binomials.len()
        );
        index.statistics = statistics;
        index
    }

    /// Look up the group whose content equals `numbers`, in any order.
    pub fn find(&self, numbers: &[u64]) -> Option<GroupId> {
        self.lookup.get(&canonical(numbers)).copied()
    }

    /// The group for a handle issued by this index.
    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.index()]
    }

    /// All groups, in creation order (by size, then discovery).
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Every calculation of every group, in generation order.
    ///
    /// Calculations from smaller groups come first. Each call starts a fresh
    /// pass over the index.
    pub fn walk(&self) -> impl Iterator<Item = &Calculation> + '_ {
        self.groups.iter().flat_map(|group| group.calculations())
    }
}

/// The canonical content of a sub-multiset: its values in descending order.
pub fn canonical(numbers: &[u64]) -> Vec<u64> {
    let mut content = numbers.to_vec();
    content.sort_unstable_by(|a, b| b.cmp(a));
    content
}
