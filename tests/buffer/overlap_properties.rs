//! Property tests: every move equals a copy staged through a temporary.

use super::common::*;
use proptest::prelude::*;
use zcalc::CopyDirection;

fn strategy() -> impl Strategy<Value = MoveStrategy> {
    prop_oneof![Just(MoveStrategy::Native), Just(MoveStrategy::Fallback)]
}

/// A range that fits inside a buffer of `len` bytes
fn range_in(len: usize) -> impl Strategy<Value = ByteRange> {
    (0..=len).prop_flat_map(move |offset| {
        (0..=len - offset).prop_map(move |l| ByteRange::new(offset, l))
    })
}

/// Buffer plus two in-bounds ranges
fn buffer_and_ranges() -> impl Strategy<Value = (Vec<u8>, ByteRange, ByteRange)> {
    (0usize..64).prop_flat_map(|len| {
        (
            proptest::collection::vec(any::<u8>(), len),
            range_in(len),
            range_in(len),
        )
    })
}

proptest! {
    #[test]
    fn move_matches_staged_copy(
        strategy in strategy(),
        (buf, dest, src) in buffer_and_ranges(),
    ) {
        let expected = staged_move(&buf, dest, src);
        let mut actual = buf.clone();
        let copied = BufferMover::new(strategy).move_within(&mut actual, dest, src);
        prop_assert_eq!(copied, dest.len.min(src.len));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn self_move_is_observably_noop(
        strategy in strategy(),
        (buf, range, _) in buffer_and_ranges(),
    ) {
        let mut actual = buf.clone();
        BufferMover::new(strategy).move_within(&mut actual, range, range);
        prop_assert_eq!(actual, buf);
    }

    #[test]
    fn strategies_agree(
        (buf, dest, src) in buffer_and_ranges(),
    ) {
        let mut native = buf.clone();
        let mut fallback = buf;
        BufferMover::new(MoveStrategy::Native).move_within(&mut native, dest, src);
        BufferMover::new(MoveStrategy::Fallback).move_within(&mut fallback, dest, src);
        prop_assert_eq!(native, fallback);
    }

    #[test]
    fn bytes_outside_copied_destination_untouched(
        strategy in strategy(),
        (buf, dest, src) in buffer_and_ranges(),
    ) {
        let n = dest.len.min(src.len);
        let mut actual = buf.clone();
        BufferMover::new(strategy).move_within(&mut actual, dest, src);
        for (i, (a, b)) in actual.iter().zip(buf.iter()).enumerate() {
            if i < dest.offset || i >= dest.offset + n {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn direction_is_pure_function_of_offsets(
        d in 0usize..100, s in 0usize..100, dl in 0usize..50, sl in 0usize..50,
    ) {
        let dir = CopyDirection::between(ByteRange::new(d, dl), ByteRange::new(s, sl));
        let expected = if dl.min(sl) == 0 || d == s {
            CopyDirection::Skip
        } else if d < s {
            CopyDirection::Forward
        } else {
            CopyDirection::Backward
        };
        prop_assert_eq!(dir, expected);
    }
}
