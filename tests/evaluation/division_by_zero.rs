//! The canonical scenario: divide by zero, report, and skip everything after.

use super::common::*;
use std::cell::Cell;

#[test]
fn division_by_zero_resumes_at_driver() {
    let mut session = session(MoveStrategy::Native);
    let after_division = Cell::new(false);

    let outcome = session
        .evaluate(|cx| {
            let q = divide(cx, 42, 0)?;
            after_division.set(true);
            Ok(q)
        })
        .unwrap();

    assert!(!after_division.get(), "code after the raising call must not run");
    match outcome {
        Outcome::Failed(signal) => {
            assert_eq!(signal.kind(), ErrorKind::DivisionByZero);
            assert_eq!(signal.message(), "division by zero");
            assert_eq!(signal.to_string(), "division_by_zero: division by zero");
        }
        Outcome::Completed(q) => panic!("expected a raised signal, got {}", q),
    }
    assert_eq!(session.metrics().failures, 1);
}

#[test]
fn session_recovers_for_next_evaluation() {
    let mut session = session(MoveStrategy::Fallback);
    assert!(session.evaluate(|cx| divide(cx, 1, 0)).unwrap().is_failed());
    assert_eq!(
        session.evaluate(|cx| divide(cx, 10, 5)).unwrap(),
        Outcome::Completed(2)
    );
    assert_eq!(session.metrics().evaluations, 2);
    assert_eq!(session.metrics().failures, 1);
}
