// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Calculations: an arithmetic expression together with its value.
//!
//! A calculation is either a bare input number (a singleton) or the result
//! of applying one [`Operation`] to two smaller calculations. Intermediate
//! values are always strictly positive integers.
//!
//! # Canonical operand order
//!
//! Two calculations are combined with the larger value on the left
//! (`hi`) and the smaller on the right (`lo`). Every operation is evaluated
//! in that order only, so `+` and `x` are emitted once per pairing and the
//! textual left operand never has a smaller value than the right one.
//!
//! # Admissibility
//!
//! | Operation | Result    | Admitted when                    |
//! |-----------|-----------|----------------------------------|
//! | `+`       | `hi + lo` | always                           |
//! | `-`       | `hi - lo` | `hi > lo`                        |
//! | `x`       | `hi * lo` | `hi > 1` and `lo > 1`            |
//! | `/`       | `hi / lo` | `lo > 1` and `lo` divides `hi`   |
//!
//! # Examples
//!
//! ```
//! use countdown_solver::calculation::Calculation;
//!
//! let four = Calculation::singleton(4);
//! let results: Vec<_> = Calculation::generate(&four, &four)
//!     .map(|c| (c.result(), c.expression().to_string()))
//!     .collect();
//!
//! assert_eq!(
//!     results,
//!     vec![
//!         (8, "4 + 4".to_string()),
//!         (16, "4 x 4".to_string()),
//!         (1, "4 / 4".to_string()),
//!     ]
//! );
//! ```

use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// The four arithmetic operations, in the order they are tried.
///
/// `Display` renders the symbol used in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCountMacro)]
pub enum Operation {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "x")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
}

impl Operation {
    /// Apply the operation to `hi` and `lo` (where `hi >= lo`).
    ///
    /// Returns `None` when the result is not admitted: zero or negative,
    /// trivial (multiplying or dividing by one), fractional, or too large to
    /// represent.
    pub fn apply(self, hi: u64, lo: u64) -> Option<u64> {
        debug_assert!(hi >= lo, "operands out of order: {} < {}", hi, lo);
        match self {
            Operation::Add => hi.checked_add(lo),
            Operation::Subtract if hi > lo => Some(hi - lo),
            Operation::Multiply if hi > 1 && lo > 1 => hi.checked_mul(lo),
            Operation::Divide if lo > 1 && hi % lo == 0 => Some(hi / lo),
            _ => None,
        }
    }
}

/// One concrete expression and the strictly positive value it evaluates to.
///
/// Calculations are immutable once built and are owned by the
/// [`Group`](crate::group::Group) that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    expression: String,
    result: u64,
    operation: Option<Operation>,
}

impl Calculation {
    /// The calculation consisting of a single input number.
    ///
    /// Its expression is the decimal literal, with no operator or parentheses.
    pub fn singleton(number: u64) -> Self {
        Self {
            expression: number.to_string(),
            result: number,
            operation: None,
        }
    }

    /// The textual expression, e.g. `"(5 + 5) x 2"`.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The value of the expression.
    pub fn result(&self) -> u64 {
        self.result
    }

    /// The outermost operation, or `None` for a singleton.
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Whether this wraps a single input number.
    pub fn is_singleton(&self) -> bool {
        self.operation.is_none()
    }

    /// Absolute distance between the result and `target`.
    pub fn difference(&self, target: u64) -> u64 {
        self.result.abs_diff(target)
    }

    /// Generate every admissible combination of two calculations.
    ///
    /// Yields zero to four calculations, in [`Operation`] order. The inputs may
    /// be given in either order; they are arranged by descending value first.
    pub fn generate<'a>(
        a: &'a Calculation,
        b: &'a Calculation,
    ) -> impl Iterator<Item = Calculation> + 'a {
        let (hi, lo) = if a.result < b.result { (b, a) } else { (a, b) };
        Operation::iter().filter_map(move |op| {
            op.apply(hi.result, lo.result).map(|result| Calculation {
                expression: format!("{} {} {}", hi.operand_text(), op, lo.operand_text()),
                result,
                operation: Some(op),
            })
        })
    }

    /// The expression as it appears when used as an operand.
    fn operand_text(&self) -> String {
        if self.is_singleton() {
            self.expression.clone()
        } else {
            format!("({})", self.expression)
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.result, self.expression)
    }
}
