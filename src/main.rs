// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! ```bash
//! countdown 952 25 50 75 100 3 6
//! countdown --any-count 10 5 5 2 1
//! RUST_LOG=debug countdown 812 75 50 2 3 8 7
//! ```

use clap::Parser;
use countdown_solver::solver::{solve, InputError, Puzzle, SolveOptions};
use std::process::ExitCode;

/// Find every calculation that comes closest to the target.
#[derive(Parser, Debug)]
#[command(name = "countdown", version, about)]
struct Args {
    /// The number to aim for.
    target: u64,

    /// The numbers available, each usable at most once.
    numbers: Vec<u64>,

    /// Number of numbers required.
    #[arg(long, default_value_t = 6)]
    count: usize,

    /// Accept any number of numbers instead of exactly --count.
    #[arg(long)]
    any_count: bool,

    /// Keep the numbers in the order given instead of sorting them.
    #[arg(long)]
    keep_order: bool,
}

impl Args {
    fn puzzle(&self) -> Result<Puzzle, InputError> {
        if self.any_count {
            Puzzle::new(self.target, self.numbers.clone())
        } else {
            Puzzle::with_count(self.target, self.numbers.clone(), self.count)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let puzzle = match args.puzzle() {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let options = SolveOptions {
        sort_descending: !args.keep_order,
    };
    print!("{}", solve(&puzzle, &options));
    ExitCode::SUCCESS
}
