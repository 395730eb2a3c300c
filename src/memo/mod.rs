// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed lookup data shared by every group during a solve.

pub mod binomial;

pub use binomial::{half_binomial, HalfBinomials};
