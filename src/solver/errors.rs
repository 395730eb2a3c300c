// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for puzzle input.

use thiserror::Error;

/// Reasons a target and set of numbers cannot be solved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("You must provide a target and numbers!")]
    NoNumbers,

    #[error("Number {position} must be a positive integer")]
    NonPositiveNumber { position: usize },

    #[error("Expected {expected} numbers, got {actual}")]
    WrongCount { expected: usize, actual: usize },
}
