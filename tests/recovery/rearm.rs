//! Re-arming semantics: last established point wins under `Replace`,
//! refused under `Reject`.

use zcalc::{ControlError, ErrorKind, RearmPolicy, RecoveryConfig, RecoveryController};


#[test]
fn second_establish_is_the_resume_site() {
    let mut cx = RecoveryController::new();
    let first = cx.establish().unwrap();
    let second = cx.establish().unwrap();

    let unwind = cx.raise(ErrorKind::InternalInconsistency, "limb count mismatch");
    let resumed = cx.resume::<()>(Err(unwind)).unwrap();

    assert_eq!(resumed.point(), second);
    assert_ne!(resumed.point(), first);
    assert_eq!(
        resumed.signal().unwrap().kind(),
        ErrorKind::InternalInconsistency
    );
}

#[test]
fn many_rearms_resume_at_latest() {
    let mut cx = RecoveryController::new();
    let points: Vec<_> = (0..10).map(|_| cx.establish().unwrap()).collect();
    let unwind = cx.raise(ErrorKind::Aborted, "stop");
    assert_eq!(unwind.target(), *points.last().unwrap());
}

#[test]
fn reject_policy_reports_nested_establish() {
    let config = RecoveryConfig {
        rearm: RearmPolicy::Reject,
        ..RecoveryConfig::default()
    };
    let mut cx = RecoveryController::with_config(&config);
    let outer = cx.establish().unwrap();

    let err = cx
        .run(|_| Ok::<_, zcalc::Unwind>(()))
        .unwrap_err();
    assert_eq!(err, ControlError::AlreadyArmed { active: outer });

    let core_err: zcalc::Error = err.into();
    assert!(matches!(core_err, zcalc::Error::Control(_)));
}
