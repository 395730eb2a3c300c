// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive solver for the numbers round of Countdown.
//!
//! Given a target and a handful of positive integers, find every way of
//! combining some of the numbers with `+`, `-`, `x` and `/` that comes as
//! close as possible to the target. Each number is used at most once and
//! every intermediate result must be a positive integer.
//!
//! # Architecture
//!
//! All work is done once per solve, eagerly and bottom-up:
//!
//! 1. **SubsetIndex** ([`index`]): one [`Group`] per distinct sub-multiset of
//!    the input, built in order of increasing size.
//! 2. **Group** ([`group`]): splits its sub-multiset into unique unordered
//!    partitions and combines the calculations of the two (smaller) sides.
//! 3. **Calculation** ([`calculation`]): an expression and its value; the
//!    generation rule admits only positive, non-trivial, integral results.
//! 4. **Solver** ([`solver`]): a single pass over every calculation keeps
//!    those with the smallest distance to the target.
//!
//! Half central binomial coefficients, used to stop partition enumeration for
//! even splits, are memoized in [`memo`].
//!
//! Arithmetically equivalent calculations reached through different
//! partitions (associativity and commutativity variants) are all kept.
//!
//! # Example
//!
//! ```
//! use countdown_solver::{solve, Puzzle, SolveOptions};
//!
//! let puzzle = Puzzle::new(7, vec![2, 2]).unwrap();
//! let best = solve(&puzzle, &SolveOptions::default());
//!
//! assert_eq!(best.difference(), 3);
//! assert!(best.calculations().iter().all(|c| c.result() == 4));
//! ```

pub mod calculation;
pub mod group;
pub mod index;
pub mod memo;
pub mod solver;
pub mod state;

// Re-export commonly used types
pub use calculation::{Calculation, Operation};
pub use group::{Group, GroupId};
pub use index::SubsetIndex;
pub use solver::{solve, BestResults, InputError, Puzzle, SolveOptions};
