// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-solve bookkeeping that is not part of the results themselves.

pub mod statistics;

pub use statistics::{Counters, Statistics};
