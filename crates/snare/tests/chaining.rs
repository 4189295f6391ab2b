// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(clippy::panic, reason = "panicking closures are the test fixtures")]

//! Integration tests exercising the chaining algebra through the public API.

use std::panic::{AssertUnwindSafe, catch_unwind, panic_any};
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;
use snare::{Attempt, Caught, Unsatisfied};

#[derive(Debug, PartialEq)]
struct Transient(u32);

#[derive(Debug, PartialEq)]
struct Permanent(&'static str);

/// `run` is total: whatever the operation does, the factory returns instead of unwinding.
#[rstest]
#[case::literal_panic(0)]
#[case::typed_panic(1)]
#[case::arithmetic_panic(2)]
fn run_never_unwinds(#[case] mode: u32) {
    let outcome = catch_unwind(|| {
        Attempt::run(move || -> u32 {
            match mode {
                0 => panic!("boom"),
                1 => panic_any(Transient(7)),
                2 => 1_u32.checked_div(0).expect("division by zero"),
                _ => mode,
            }
        })
        .is_failure()
    });

    assert_eq!(outcome.ok(), Some(true));
}

#[test]
fn transforms_are_skipped_after_a_failure() {
    let map_calls = AtomicUsize::new(0);
    let bind_calls = AtomicUsize::new(0);
    let predicate_calls = AtomicUsize::new(0);

    let attempt = Attempt::run(|| -> i32 { panic!("boom") })
        .map(|n| {
            map_calls.fetch_add(1, Ordering::Relaxed);
            n + 1
        })
        .and_then(|n| {
            bind_calls.fetch_add(1, Ordering::Relaxed);
            Attempt::run(move || n * 2)
        })
        .filter(|_| {
            predicate_calls.fetch_add(1, Ordering::Relaxed);
            true
        });

    assert!(attempt.is_failure());
    assert_eq!(attempt.failure().and_then(Caught::message), Some("boom"));
    assert_eq!(map_calls.load(Ordering::Relaxed), 0);
    assert_eq!(bind_calls.load(Ordering::Relaxed), 0);
    assert_eq!(predicate_calls.load(Ordering::Relaxed), 0);
}

#[test]
fn recovery_is_skipped_on_success() {
    let recover_calls = AtomicUsize::new(0);

    let attempt = Attempt::run(|| 42).recover(|_| {
        recover_calls.fetch_add(1, Ordering::Relaxed);
        0
    });

    assert_eq!(attempt.get(), 42);
    assert_eq!(recover_calls.load(Ordering::Relaxed), 0);
}

/// `r.and_then(f).and_then(g)` and `r.and_then(|x| f(x).and_then(g))` agree,
/// for both starting variants.
#[rstest]
#[case::from_success(false)]
#[case::from_failure(true)]
fn bind_chains_associate(#[case] fail: bool) {
    let seed = move || {
        Attempt::run(move || {
            assert!(!fail, "seed failed");
            6
        })
    };
    let double = |n: i32| Attempt::run(move || n * 2);
    let describe = |n: i32| Attempt::run(move || format!("result {n}"));

    let left = seed().and_then(double).and_then(describe);
    let right = seed().and_then(|n| double(n).and_then(describe));

    assert_eq!(left.is_success(), right.is_success());
    assert_eq!(left.success(), right.success());
    assert_eq!(
        left.failure().and_then(Caught::message),
        right.failure().and_then(Caught::message)
    );
}

#[rstest]
#[case::matching_type_resolves(true)]
#[case::other_type_passes_through(false)]
fn typed_recovery_is_selective(#[case] matching: bool) {
    let attempt = Attempt::run(move || -> u32 {
        if matching {
            panic_any(Transient(3));
        }
        panic_any(Permanent("bad config"));
    })
    .recover_for::<Transient, _>(|Transient(n)| n * 10);

    if matching {
        assert_eq!(attempt.get(), 30);
    } else {
        let caught = attempt.into_result().expect_err("must pass through");
        assert_eq!(caught.downcast_ref(), Some(&Permanent("bad config")));
    }
}

#[test]
fn cascade_applies_the_first_matching_stage() {
    let first = AtomicUsize::new(0);

    let value = Attempt::run(|| -> u32 { panic_any(Permanent("gone")) })
        .recover_for::<Transient, _>(|_| {
            first.fetch_add(1, Ordering::Relaxed);
            1
        })
        .recover_for::<Permanent, _>(|_| 2)
        .recover(|_| 3)
        .get();

    assert_eq!(value, 2);
    assert_eq!(first.load(Ordering::Relaxed), 0);
}

#[rstest]
#[case::accepted(42, true)]
#[case::rejected(43, false)]
fn filter_verdicts(#[case] input: i32, #[case] kept: bool) {
    let attempt = Attempt::run(move || input).filter(|n| n % 2 == 0);

    assert_eq!(attempt.is_success(), kept);
    if !kept {
        assert!(attempt.failure().is_some_and(|caught| caught.is::<Unsatisfied>()));
    }
}

#[test]
fn filter_rejection_is_recoverable_by_type() {
    let value = Attempt::run(|| 43)
        .filter(|n| n % 2 == 0)
        .recover_for::<Unsatisfied, _>(|_| 0)
        .get();

    assert_eq!(value, 0);
}

#[test]
fn get_resumes_the_original_payload() {
    let attempt = Attempt::run(|| -> u32 { panic_any(Transient(9)) });

    let payload = catch_unwind(AssertUnwindSafe(|| attempt.get())).expect_err("must rethrow");
    assert_eq!(payload.downcast_ref(), Some(&Transient(9)));
}

#[test]
fn queries_are_total() {
    let success = Attempt::run(|| 1);
    let failure = Attempt::run(|| -> i32 { panic!("boom") });

    assert!(success.is_success() && !success.is_failure());
    assert!(failure.is_failure() && !failure.is_success());
    assert_eq!(success.success(), Some(&1));
    assert!(failure.success().is_none());
}

// The three end-to-end scenarios from the crate's design discussions.

#[test]
fn scenario_transform_then_extract() {
    assert_eq!(Attempt::run(|| 42).map(|x| x + 1).get(), 43);
}

#[test]
fn scenario_failed_factory() {
    assert!(Attempt::run(|| -> i32 { panic!("boom") }).is_failure());
}

#[test]
fn scenario_bind_failure_then_recover() {
    let value = Attempt::run(|| 1)
        .and_then(|_| Attempt::run(|| -> i32 { panic!("x") }))
        .recover(|_| 99)
        .get();

    assert_eq!(value, 99);
}
