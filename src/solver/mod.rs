// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solving a puzzle: build the index, then keep the closest calculations.
//!
//! The search is a single pass over [`SubsetIndex::walk`], keeping a running
//! minimum difference. A calculation equal to the minimum is appended; a
//! strictly closer one replaces everything kept so far. There is no sort, so
//! results using fewer numbers come first, and ties between groups of the
//! same size follow discovery order.
//!
//! # Example
//!
//! ```
//! use countdown_solver::solver::{solve, Puzzle, SolveOptions};
//!
//! let puzzle = Puzzle::new(10, vec![5, 5, 2, 1]).unwrap();
//! let best = solve(&puzzle, &SolveOptions::default());
//!
//! assert_eq!(best.difference(), 0);
//! assert!(best.calculations().iter().any(|c| c.expression() == "5 + 5"));
//! ```

pub mod errors;

pub use errors::InputError;

use crate::calculation::Calculation;
use crate::index::SubsetIndex;
use std::fmt;

/// A validated target and multiset of numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    target: u64,
    numbers: Vec<u64>,
}

impl Puzzle {
    /// Validate the input: at least one number, all strictly positive.
    pub fn new(target: u64, numbers: Vec<u64>) -> Result<Self, InputError> {
        if numbers.is_empty() {
            return Err(InputError::NoNumbers);
        }
        if let Some(position) = numbers.iter().position(|&n| n == 0) {
            return Err(InputError::NonPositiveNumber {
                position: position + 1,
            });
        }
        Ok(Self { target, numbers })
    }

    /// Validate the input, also requiring exactly `count` numbers.
    pub fn with_count(target: u64, numbers: Vec<u64>, count: usize) -> Result<Self, InputError> {
        if numbers.len() != count {
            return Err(InputError::WrongCount {
                expected: count,
                actual: numbers.len(),
            });
        }
        Self::new(target, numbers)
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }
}

/// Options controlling how a puzzle is solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOptions {
    /// Sort the numbers in descending order before building the index.
    ///
    /// This changes only the order in which equally good results are listed.
    pub sort_descending: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            sort_descending: true,
        }
    }
}

/// The closest calculations found for a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResults {
    target: u64,
    difference: u64,
    calculations: Vec<Calculation>,
}

impl BestResults {
    pub fn target(&self) -> u64 {
        self.target
    }

    /// The smallest distance from the target over all calculations.
    pub fn difference(&self) -> u64 {
        self.difference
    }

    /// Every calculation at that distance, in discovery order.
    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }
}

impl fmt::Display for BestResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "The closest results differ from {} by {}. They are:",
            self.target, self.difference
        )?;
        writeln!(f)?;
        for calculation in &self.calculations {
            writeln!(f, "{}", calculation)?;
        }
        Ok(())
    }
}

/// Keep every calculation with the minimal distance to `target`.
///
/// The first calculation seeds the minimum. An empty stream gives an empty
/// result with difference equal to the target.
pub fn select_best<'a, I>(target: u64, calculations: I) -> BestResults
where
    I: IntoIterator<Item = &'a Calculation>,
{
    let mut smallest: Option<u64> = None;
    let mut best = Vec::new();
    for calculation in calculations {
        let difference = calculation.difference(target);
        match smallest {
            Some(current) if difference > current => {}
            Some(current) if difference == current => best.push(calculation.clone()),
            _ => {
                smallest = Some(difference);
                best.clear();
                best.push(calculation.clone());
            }
        }
    }
    BestResults {
        target,
        difference: smallest.unwrap_or(target),
        calculations: best,
    }
}

/// Solve a puzzle, returning every closest calculation.
pub fn solve(puzzle: &Puzzle, options: &SolveOptions) -> BestResults {
    let mut numbers = puzzle.numbers.clone();
    if options.sort_descending {
        numbers.sort_unstable_by(|a, b| b.cmp(a));
    }

    let index = SubsetIndex::build(&numbers);
    log::info!("[Solver] {}", index.statistics());

    let best = select_best(puzzle.target, index.walk());
    log::debug!(
        "[Solver] {} results at difference {}",
        best.calculations.len(),
        best.difference
    );
    best
}
