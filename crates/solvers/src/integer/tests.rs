use std::cell::{Cell, RefCell};

use monosearch_core::{Predicate, TieBreak};
use test_log::test;

use super::{
    Action, Error, Event, Status, largest_feasible, search, search_unobserved, smallest_feasible,
};

#[test]
fn finds_smallest_feasible() {
    // Smallest x with x² >= 50 is 8.
    let solution = search_unobserved(
        [0_u64, 100],
        &|x: u64| x * x >= 50,
        TieBreak::SmallestFeasible,
    )
    .expect("valid domain");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.value, Some(8));
}

#[test]
fn finds_largest_feasible() {
    // Largest x with x² <= 50 is 7.
    let solution = search_unobserved(
        [0_u64, 100],
        &|x: u64| x * x <= 50,
        TieBreak::LargestFeasible,
    )
    .expect("valid domain");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.value, Some(7));
}

#[test]
fn reports_none_when_nothing_is_feasible() {
    let smallest = smallest_feasible([1_i32, 50], &|x: i32| x > 50).expect("valid domain");
    let largest = largest_feasible([1_i32, 50], &|x: i32| x < 1).expect("valid domain");

    assert_eq!(smallest, None);
    assert_eq!(largest, None);
}

#[test]
fn feasible_everywhere_returns_the_domain_edge() {
    assert_eq!(smallest_feasible([3_u32, 40], &|_: u32| true), Ok(Some(3)));
    assert_eq!(largest_feasible([3_u32, 40], &|_: u32| true), Ok(Some(40)));
}

#[test]
fn single_candidate_domain() {
    assert_eq!(smallest_feasible([9_u64, 9], &|x: u64| x == 9), Ok(Some(9)));
    assert_eq!(smallest_feasible([9_u64, 9], &|x: u64| x != 9), Ok(None));
    assert_eq!(largest_feasible([9_u64, 9], &|x: u64| x == 9), Ok(Some(9)));
    assert_eq!(largest_feasible([9_u64, 9], &|x: u64| x != 9), Ok(None));
}

#[test]
fn errors_on_inverted_domain() {
    let result = search_unobserved([10_i64, 2], &|_: i64| true, TieBreak::SmallestFeasible);
    assert!(matches!(result, Err(Error::InvalidDomain { lo: 10, hi: 2 })));
}

#[test]
fn handles_signed_full_range() {
    let at_least = |x: i64| x >= -1_000_000_007;
    let at_most = |x: i64| x <= i64::MAX - 3;

    assert_eq!(
        smallest_feasible([i64::MIN, i64::MAX], &at_least),
        Ok(Some(-1_000_000_007))
    );
    assert_eq!(
        largest_feasible([i64::MIN, i64::MAX], &at_most),
        Ok(Some(i64::MAX - 3))
    );
}

#[test]
fn handles_unsigned_extremes_without_overflow() {
    assert_eq!(smallest_feasible([0_u64, u64::MAX], &|_: u64| true), Ok(Some(0)));
    assert_eq!(
        largest_feasible([0_u64, u64::MAX], &|_: u64| true),
        Ok(Some(u64::MAX))
    );
    assert_eq!(smallest_feasible([0_u64, u64::MAX], &|_: u64| false), Ok(None));
}

#[test]
fn evaluation_count_is_logarithmic() {
    let calls = Cell::new(0_usize);
    let predicate = |x: u32| {
        calls.set(calls.get() + 1);
        x >= 777_777
    };

    let solution =
        search_unobserved([0_u32, 1_000_000], &predicate, TieBreak::SmallestFeasible)
            .expect("valid domain");

    assert_eq!(solution.value, Some(777_777));
    assert_eq!(solution.iters, calls.get());
    // ⌈log₂(1_000_001)⌉ = 20
    assert!(calls.get() <= 21, "too many evaluations: {}", calls.get());
}

#[test]
fn midpoint_sequence_is_deterministic() {
    let record = |tie_break| {
        let seen = RefCell::new(Vec::new());
        let predicate = |x: i32| {
            seen.borrow_mut().push(x);
            x >= 13
        };
        search_unobserved([0, 31], &predicate, tie_break).expect("valid domain");
        seen.into_inner()
    };

    let first = record(TieBreak::SmallestFeasible);
    let second = record(TieBreak::SmallestFeasible);

    assert_eq!(first, second);
    assert_eq!(first, vec![15, 7, 11, 13, 12]);
}

#[test]
fn accepts_trait_objects() {
    struct Threshold(u16);

    impl Predicate<u16> for Threshold {
        fn is_feasible(&self, candidate: u16) -> bool {
            candidate >= self.0
        }
    }

    let predicate: &dyn Predicate<u16> = &Threshold(300);
    assert_eq!(smallest_feasible([0, u16::MAX], predicate), Ok(Some(300)));
}

#[test]
fn observer_sees_every_evaluation() {
    let mut events = Vec::new();
    let observer = |event: &Event<'_, u32>| -> Option<Action> {
        events.push((
            event.iter,
            event.domain.as_array(),
            event.candidate,
            event.feasible,
        ));
        None
    };

    let solution = search(
        [1_u32, 8],
        &|x: u32| x >= 6,
        TieBreak::SmallestFeasible,
        observer,
    )
    .expect("valid domain");

    assert_eq!(solution.value, Some(6));
    assert_eq!(
        events,
        vec![
            (1, [1, 8], 4, false),
            (2, [5, 8], 6, true),
            (3, [5, 5], 5, false),
        ]
    );
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<'_, u32>| (event.iter >= 2).then_some(Action::StopEarly);

    let solution = search(
        [0_u32, 1000],
        &|x: u32| x >= 10,
        TieBreak::SmallestFeasible,
        observer,
    )
    .expect("valid domain");

    // First evaluation (500) is feasible; the second is never applied.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.value, Some(500));
}

#[test]
fn observer_can_override_verdicts() {
    // Rejecting everything above 20 steers a largest-feasible search down.
    let observer =
        |event: &Event<'_, i32>| (event.candidate > 20).then_some(Action::AssumeInfeasible);

    let solution = search(
        [0_i32, 100],
        &|_: i32| true,
        TieBreak::LargestFeasible,
        observer,
    )
    .expect("valid domain");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.value, Some(20));

    // Accepting a candidate the predicate rejects records it as the answer.
    let observer =
        |event: &Event<'_, i32>| (event.candidate == 50).then_some(Action::AssumeFeasible);

    let solution = search(
        [0_i32, 100],
        &|_: i32| false,
        TieBreak::SmallestFeasible,
        observer,
    )
    .expect("valid domain");

    assert_eq!(solution.value, Some(50));
}
