// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end solves with known answers.

mod common;

use common::{best_pairs, pairs};
use countdown_solver::{solve, Puzzle, SolveOptions, SubsetIndex};

fn solve_default(target: u64, numbers: &[u64]) -> countdown_solver::BestResults {
    let puzzle = Puzzle::new(target, numbers.to_vec()).unwrap();
    solve(&puzzle, &SolveOptions::default())
}

#[test]
fn test_pair_of_fives_reaches_ten() {
    let best = solve_default(10, &[5, 5, 2, 1]);
    assert_eq!(best.difference(), 0);
    assert!(best_pairs(&best).contains(&(10, "5 + 5".to_string())));
    assert!(best.calculations().iter().all(|c| c.result() == 10));
}

#[test]
fn test_fewer_numbers_listed_first() {
    let best = solve_default(10, &[5, 5, 2, 1]);
    // "5 + 5" uses two numbers; it precedes every three- and four-number answer
    assert_eq!(best.calculations()[0].expression(), "5 + 5");
    let operators: Vec<usize> = best
        .calculations()
        .iter()
        .map(|c| c.expression().matches(' ').count() / 2)
        .collect();
    let mut ordered = operators.clone();
    ordered.sort();
    assert_eq!(operators, ordered);
}

#[test]
fn test_two_twos_cannot_reach_seven() {
    let best = solve_default(7, &[2, 2]);
    assert_eq!(best.difference(), 3);
    // Addition and multiplication both give 4; 2 alone and 2 / 2 are further
    // away, and 2 - 2 is never generated
    assert_eq!(
        best_pairs(&best),
        vec![(4, "2 + 2".to_string()), (4, "2 x 2".to_string())]
    );
}

#[test]
fn test_group_of_two_fours() {
    let index = SubsetIndex::build(&[4, 4]);
    let id = index.find(&[4, 4]).unwrap();
    let calculations = pairs(index.group(id).calculations());
    assert_eq!(
        calculations,
        vec![
            (8, "4 + 4".to_string()),
            (16, "4 x 4".to_string()),
            (1, "4 / 4".to_string()),
        ]
    );
    assert!(calculations.iter().all(|(_, expr)| expr != "4 - 4"));
}

#[test]
fn test_single_number() {
    let best = solve_default(100, &[25]);
    assert_eq!(best.difference(), 75);
    assert_eq!(best_pairs(&best), vec![(25, "25".to_string())]);
}

#[test]
fn test_large_numbers_draw() {
    let best = solve_default(250, &[25, 50, 75, 100, 3]);
    assert_eq!(best.difference(), 0);
    assert!(best_pairs(&best).contains(&(250, "((100 + 75) + 50) + 25".to_string())));
    for calculation in best.calculations() {
        assert_eq!(calculation.result(), 250);
    }
}

#[test]
fn test_unreachable_target_reports_closest() {
    let best = solve_default(1000, &[1, 1]);
    assert_eq!(best.difference(), 998);
    assert_eq!(best_pairs(&best), vec![(2, "1 + 1".to_string())]);
}

#[test]
fn test_report_format() {
    let best = solve_default(7, &[2, 2]);
    assert_eq!(
        best.to_string(),
        "\nThe closest results differ from 7 by 3. They are:\n\n4 = 2 + 2\n4 = 2 x 2\n"
    );
}
