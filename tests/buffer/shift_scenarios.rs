//! Fixed overlap scenarios and block moves.

use super::common::*;
use zcalc::Block;

#[test]
fn fallback_sixteen_byte_buffer_ten_bytes_three_forward() {
    let original = pattern(16);
    let dest = ByteRange::new(3, 10);
    let src = ByteRange::new(0, 10);

    let mut buf = original.clone();
    BufferMover::new(MoveStrategy::Fallback).move_within(&mut buf, dest, src);

    assert_eq!(buf, staged_move(&original, dest, src));
    assert_eq!(&buf[..3], &original[..3]);
    assert_eq!(&buf[13..], &original[13..]);
}

#[test]
fn fallback_sixteen_byte_buffer_ten_bytes_three_backward() {
    let original = pattern(16);
    let dest = ByteRange::new(0, 10);
    let src = ByteRange::new(3, 10);

    let mut buf = original.clone();
    BufferMover::new(MoveStrategy::Fallback).move_within(&mut buf, dest, src);

    assert_eq!(buf, staged_move(&original, dest, src));
}

#[test]
fn adjacent_ranges_without_overlap() {
    for strategy in [MoveStrategy::Native, MoveStrategy::Fallback] {
        let original = pattern(20);
        let dest = ByteRange::new(10, 10);
        let src = ByteRange::new(0, 10);
        let mut buf = original.clone();
        BufferMover::new(strategy).move_within(&mut buf, dest, src);
        assert_eq!(buf, staged_move(&original, dest, src));
    }
}

#[test]
fn one_byte_shift_across_whole_buffer() {
    for strategy in [MoveStrategy::Native, MoveStrategy::Fallback] {
        let original = pattern(256);
        let dest = ByteRange::new(1, 255);
        let src = ByteRange::new(0, 255);
        let mut buf = original.clone();
        BufferMover::new(strategy).move_within(&mut buf, dest, src);
        assert_eq!(buf[0], original[0]);
        assert_eq!(&buf[1..], &original[..255]);
    }
}

#[test]
fn block_blkmove_overlapping() {
    let mover = BufferMover::new(MoveStrategy::Fallback);
    let mut blk = Block::from_bytes(b"abcdefghij");
    blk.move_within(&mover, 0, Some(7), Some(3), false).unwrap();
    assert_eq!(blk.data(), b"abcabcdefg");
}

#[test]
fn block_copy_appends_across_chunk_boundary() {
    let mover = BufferMover::new(MoveStrategy::Native);
    let mut dest = Block::new(0, 8).unwrap();
    let src = Block::from_bytes(&pattern(30));
    dest.copy_from(&mover, &src, 0, None, None, false).unwrap();
    dest.copy_from(&mover, &src, 10, Some(5), None, false).unwrap();
    assert_eq!(dest.datalen(), 35);
    assert_eq!(&dest.data()[30..], &pattern(30)[10..15]);
    assert_eq!(dest.maxsize() % 8, 0);
    assert!(dest.maxsize() > dest.datalen());
}
