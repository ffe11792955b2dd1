//! Raises from several levels down, including routines that move buffers.

use super::common::*;

#[test]
fn overflow_from_second_step() {
    let mut session = session(MoveStrategy::Native);
    let outcome = session
        .evaluate(|cx| scaled_quotient(cx, i64::MAX, 1, 2))
        .unwrap();
    let signal = outcome.into_result().unwrap_err();
    assert_eq!(signal.kind(), ErrorKind::NumericOverflow);
    assert!(signal.message().contains("overflows"));
}

#[test]
fn scaled_quotient_completes() {
    let mut session = session(MoveStrategy::Native);
    assert_eq!(
        session.evaluate(|cx| scaled_quotient(cx, 100, 7, 3)).unwrap(),
        Outcome::Completed(42)
    );
}

#[test]
fn limb_shift_uses_mover_under_both_strategies() {
    for strategy in [MoveStrategy::Native, MoveStrategy::Fallback] {
        let mut session = session(strategy);
        let outcome = session
            .evaluate(|cx| {
                let mut limbs = vec![1u8, 2, 3, 4, 0, 0, 0];
                shift_limbs(cx, &mut limbs, 3)?;
                Ok(limbs)
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Completed(vec![0, 0, 0, 1, 2, 3, 4]));
    }
}

#[test]
fn limb_shift_raises_when_significant_limbs_lost() {
    let mut session = session(MoveStrategy::Fallback);
    let mut limbs = vec![1u8, 2, 3, 4];
    let outcome = session
        .evaluate(|cx| shift_limbs(cx, &mut limbs, 1))
        .unwrap();
    let signal = outcome.into_result().unwrap_err();
    assert_eq!(signal.kind(), ErrorKind::NumericOverflow);
    // The raise happened before any bytes moved
    assert_eq!(limbs, vec![1, 2, 3, 4]);
}

#[test]
fn oversized_shift_is_invalid_operand() {
    let mut session = session(MoveStrategy::Native);
    let mut limbs = vec![0u8; 2];
    let signal = session
        .evaluate(|cx| shift_limbs(cx, &mut limbs, 5))
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(signal.kind(), ErrorKind::InvalidOperand);
    assert_eq!(signal.message(), "shift of 5 exceeds 2 limbs");
}
