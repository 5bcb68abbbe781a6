//! Property-based tests for pullflow using proptest.

use proptest::prelude::*;
use pullflow::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

/// Drain `it`, then check it keeps reporting exhaustion.
fn drains_then_stays_exhausted<P: Pull>(mut it: Iter<P>) -> bool {
    while it.next().is_some() {}
    (0..3).all(|_| it.next().is_none())
}

fn items() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50..50_i32, 0..40)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Once an adapter reports `None` it never yields again.
    #[test]
    fn exhaustion_is_idempotent_across_adapters(a in items(), b in items(), n in 0usize..50) {
        prop_assert!(drains_then_stays_exhausted(vector(a.clone())));
        prop_assert!(drains_then_stays_exhausted(vector(a.clone()).map(|x| x * 2)));
        prop_assert!(drains_then_stays_exhausted(vector(a.clone()).filter(|x| *x > 0)));
        prop_assert!(drains_then_stays_exhausted(vector(a.clone()).chain(vector(b.clone()))));
        prop_assert!(drains_then_stays_exhausted(vector(a.clone()).zip(vector(b.clone()))));
        prop_assert!(drains_then_stays_exhausted(vector(a.clone()).enumerate()));
        prop_assert!(drains_then_stays_exhausted(vector(a.clone()).take(n)));
        prop_assert!(drains_then_stays_exhausted(vector(a).take_while(|x| *x % 7 != 0)));
    }

    /// `take(n)` yields the first `min(n, len)` items in order.
    #[test]
    fn take_yields_prefix(a in items(), n in 0usize..60) {
        let taken = vector(a.clone()).take(n).collect();
        prop_assert_eq!(taken.len(), n.min(a.len()));
        prop_assert_eq!(&taken[..], &a[..taken.len()]);
    }

    /// `zip` is as long as its shorter input.
    #[test]
    fn zip_length_is_minimum(a in items(), b in items()) {
        let zipped = vector(a.clone()).zip(vector(b.clone())).collect();
        prop_assert_eq!(zipped.len(), a.len().min(b.len()));
        for (i, (x, y)) in zipped.into_iter().enumerate() {
            prop_assert_eq!(x, a[i]);
            prop_assert_eq!(y, b[i]);
        }
    }

    /// `chain` is concatenation.
    #[test]
    fn chain_concatenates(a in items(), b in items()) {
        let joined = vector(a.clone()).chain(vector(b.clone())).collect();
        let expected: Vec<i32> = a.into_iter().chain(b).collect();
        prop_assert_eq!(joined, expected);
    }

    /// `filter` keeps exactly the matching items, in order.
    #[test]
    fn filter_matches_std(a in items()) {
        let filtered = vector(a.clone()).filter(|x| *x < 0).collect();
        let expected: Vec<i32> = a.into_iter().filter(|x| *x < 0).collect();
        prop_assert_eq!(filtered, expected);
    }

    /// `count` and `fold` agree with the source length and sum.
    #[test]
    fn fold_terminals_agree(a in items()) {
        prop_assert_eq!(vector(a.clone()).count(), a.len());
        prop_assert_eq!(vector(a.clone()).fold(0i64, |acc, x| acc + i64::from(x)),
            a.iter().map(|x| i64::from(*x)).sum::<i64>());
        prop_assert_eq!(vector(a.clone()).last(), a.last().copied());
    }

    /// `position` counts from the current cursor and stops right after the match.
    #[test]
    fn position_stops_after_match(a in items(), target in -50..50_i32) {
        let mut it = vector(a.clone());
        let found = it.position(|x| x == target);
        prop_assert_eq!(found, a.iter().position(|x| *x == target));
        let rest = it.collect();
        match found {
            Some(i) => prop_assert_eq!(&rest[..], &a[i + 1..]),
            None => prop_assert!(rest.is_empty()),
        }
    }

    /// `advance_by` past the end reports how far it fell short and keeps what it consumed.
    #[test]
    fn advance_by_past_end_keeps_progress(a in items(), extra in 1usize..10) {
        let requested = a.len() + extra;
        let mut it = vector(a);
        prop_assert_eq!(
            it.advance_by(requested),
            Err(Error::AdvancePastEnd { requested, remaining: extra })
        );
        prop_assert_eq!(it.next(), None);
    }

    /// `skip_while` drops only the matching prefix.
    #[test]
    fn skip_while_matches_std(a in items()) {
        let mut it = vector(a.clone());
        let rest = it.skip_while(|x| *x < 0).collect();
        let expected: Vec<i32> = a.into_iter().skip_while(|x| *x < 0).collect();
        prop_assert_eq!(rest, expected);
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn all_and_any_on_empty_sources() {
    assert!(range(0, 0, 1).all(|_| false));
    assert!(!range(0, 0, 1).any(|_| true));
    assert!(vector(Vec::<i32>::new()).all(|_| false));
    assert!(!vector(Vec::<i32>::new()).any(|_| true));
}

#[test]
fn unwrap_failures() {
    let none: Option<i32> = None;
    assert_eq!(none.try_unwrap(), Err(Error::EmptyUnwrap));
    assert_eq!(none.unwrap_or(9), 9);
    assert_eq!(range(0, 0, 0).next().unwrap_or_else(|| -1), -1);
}

#[test]
fn readme_pipeline() {
    let labels = range(0, 10, 1)
        .filter(|x| x % 3 == 0)
        .enumerate()
        .map(|e| format!("{}:{}", e.index, e.element))
        .collect();
    assert_eq!(labels, vec!["0:0", "1:3", "2:6", "3:9"]);
}
