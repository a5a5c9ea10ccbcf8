use std::cell::Cell;

use approx::assert_relative_eq;
use monosearch_core::TieBreak;
use test_log::test;

use super::{Action, BracketError, Config, Error, Event, Status, search, search_unobserved};

fn config(epsilon: f64) -> Config {
    Config::new(epsilon, 200).expect("valid config")
}

#[test]
fn finds_smallest_feasible_value() {
    let solution = search_unobserved(
        [0.0, 2.0],
        &|x: f64| x * x >= 2.0,
        TieBreak::SmallestFeasible,
        &config(1e-9),
    )
    .expect("valid bracket");

    let value = solution.value.expect("feasible");
    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(value, 2.0_f64.sqrt(), epsilon = 1e-9);
    // The reported edge is always on the feasible side.
    assert!(value * value >= 2.0);
}

#[test]
fn finds_largest_feasible_value() {
    let solution = search_unobserved(
        [0.0, 2.0],
        &|x: f64| x * x <= 2.0,
        TieBreak::LargestFeasible,
        &config(1e-9),
    )
    .expect("valid bracket");

    let value = solution.value.expect("feasible");
    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(value, 2.0_f64.sqrt(), epsilon = 1e-9);
    assert!(value * value <= 2.0);
}

#[test]
fn infeasible_anchor_reports_none() {
    let calls = Cell::new(0_usize);
    let predicate = |x: f64| {
        calls.set(calls.get() + 1);
        x > 10.0
    };

    let solution = search_unobserved(
        [0.0, 5.0],
        &predicate,
        TieBreak::SmallestFeasible,
        &Config::default(),
    )
    .expect("valid bracket");

    assert_eq!(solution.value, None);
    assert_eq!(solution.value_or(-1.0), -1.0);
    assert_eq!(solution.iters, 0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn zero_width_bracket() {
    let config = Config::default();

    let feasible = search_unobserved(
        [3.5, 3.5],
        &|x: f64| x >= 3.0,
        TieBreak::SmallestFeasible,
        &config,
    )
    .expect("valid bracket");
    assert_eq!(feasible.value, Some(3.5));

    let infeasible = search_unobserved(
        [3.5, 3.5],
        &|x: f64| x >= 4.0,
        TieBreak::SmallestFeasible,
        &config,
    )
    .expect("valid bracket");
    assert_eq!(infeasible.value, None);
}

#[test]
fn errors_on_invalid_bracket() {
    let config = Config::default();
    let predicate = |_: f64| true;

    let result = search_unobserved([1.0, 0.0], &predicate, TieBreak::SmallestFeasible, &config);
    assert_eq!(result, Err(Error::InvalidBracket(BracketError::Inverted)));

    let result = search_unobserved(
        [f64::NEG_INFINITY, 0.0],
        &predicate,
        TieBreak::LargestFeasible,
        &config,
    );
    assert_eq!(result, Err(Error::InvalidBracket(BracketError::NonFinite)));
}

#[test]
fn iteration_count_follows_precision() {
    let run = |epsilon: f64| {
        search_unobserved(
            [0.0, 1.0],
            &|x: f64| x >= 0.3,
            TieBreak::SmallestFeasible,
            &config(epsilon),
        )
        .expect("valid bracket")
    };

    let coarse = run(1e-3);
    let fine = run(1e-9);

    // ⌈log₂(1 / 1e-3)⌉ = 10, ⌈log₂(1 / 1e-9)⌉ = 30
    assert_eq!(coarse.iters, 10);
    assert_eq!(fine.iters, 30);

    let [lo, hi] = coarse.bracket;
    assert!(hi - lo <= 1e-3);
    assert_relative_eq!(coarse.value.expect("feasible"), 0.3, epsilon = 1e-3);
}

#[test]
fn stops_at_iteration_cap() {
    let config = Config::new(1e-12, 5).expect("valid config");

    let solution = search_unobserved(
        [0.0, 32.0],
        &|x: f64| x >= 7.3,
        TieBreak::SmallestFeasible,
        &config,
    )
    .expect("valid bracket");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.bracket, [7.0, 8.0]);
    assert_eq!(solution.value, Some(8.0));
}

#[test]
fn converges_when_floats_run_out() {
    // An epsilon far below f64 resolution still terminates.
    let config = Config::new(1e-300, 10_000).expect("valid config");

    let solution = search_unobserved(
        [1.0, 2.0],
        &|x: f64| x >= 1.5,
        TieBreak::SmallestFeasible,
        &config,
    )
    .expect("valid bracket");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters < 100);
    assert_eq!(solution.value, Some(1.5));
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<'_>| (event.iter == 3).then_some(Action::StopEarly);

    let solution = search(
        [0.0, 8.0],
        &|x: f64| x >= 1.0,
        TieBreak::SmallestFeasible,
        &Config::default(),
        observer,
    )
    .expect("valid bracket");

    // Midpoints 4 and 2 are feasible; the third (1) is never applied.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.value, Some(2.0));
}

#[test]
fn observer_sees_shrinking_brackets() {
    let mut widths = Vec::new();
    let observer = |event: &Event<'_>| -> Option<Action> {
        widths.push(event.bracket.width());
        None
    };

    search(
        [0.0, 1.0],
        &|x: f64| x <= 0.7,
        TieBreak::LargestFeasible,
        &config(1e-2),
        observer,
    )
    .expect("valid bracket");

    assert_eq!(widths.len(), 7);
    for pair in widths.windows(2) {
        assert_relative_eq!(pair[1], pair[0] / 2.0);
    }
}

#[test]
fn observer_can_override_verdicts() {
    let observer = |event: &Event<'_>| (event.x > 0.25).then_some(Action::AssumeFeasible);

    let solution = search(
        [0.0, 1.0],
        &|x: f64| x >= 0.9,
        TieBreak::SmallestFeasible,
        &config(1e-6),
        observer,
    )
    .expect("valid bracket");

    assert_relative_eq!(solution.value.expect("feasible"), 0.25, epsilon = 1e-6);
}
