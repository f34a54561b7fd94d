//! # Word Writer Tests
//!
//! Deterministic tests for the word-addressed memory model: little-endian
//! composition, base-relative indexing, tail padding, alignment rejection,
//! collision detection under mask aliasing, and wraparound at the top of the
//! 16-bit window.

use pretty_assertions::assert_eq;
use rvhex_core::ImageError;
use rvhex_core::mem::WordMemory;

/// The RTL's 16-bit index window.
const MASK: u64 = 0xFFFF;

fn mem() -> WordMemory {
    WordMemory::new(MASK)
}

#[test]
fn write_composes_words_little_endian() {
    let mut m = mem();
    m.write(0, 0, &[0x13, 0x00, 0x00, 0x00], "IMEM .text").unwrap();
    assert_eq!(m.get(0), Some(0x0000_0013));
}

#[test]
fn write_is_base_relative() {
    let mut m = mem();
    m.write(0x8000_0000, 0x8000_0004, &[0xAA, 0xBB, 0xCC, 0xDD], "DMEM .data")
        .unwrap();
    assert_eq!(m.get(1), Some(0xDDCC_BBAA));
    assert_eq!(m.len(), 1);
}

#[test]
fn short_tail_is_zero_padded_to_a_word() {
    let mut m = mem();
    m.write(0, 0, &[0x01, 0x02, 0x03, 0x04, 0x05], "DMEM .data")
        .unwrap();
    assert_eq!(m.get(0), Some(0x0403_0201));
    assert_eq!(m.get(1), Some(0x0000_0005));
    assert_eq!(m.max_index(), Some(1));
}

#[test]
fn unaligned_offset_is_rejected_not_rounded() {
    let mut m = mem();
    let err = m.write(0, 1, &[0xFF], "IMEM .text").unwrap_err();
    match err {
        ImageError::UnalignedWrite {
            label,
            addr,
            base,
            offset,
        } => {
            assert_eq!(label, "IMEM .text");
            assert_eq!(addr, 1);
            assert_eq!(base, 0);
            assert_eq!(offset, 1);
        }
        other => panic!("expected UnalignedWrite, got {other}"),
    }
    // Nothing may be stored after a rejected write.
    assert!(m.is_empty());
}

#[test]
fn unalignment_is_checked_after_masking() {
    let mut m = mem();
    // 0x1_0002 masks to offset 2: still unaligned.
    let err = m.write(0, 0x1_0002, &[0xFF], "DMEM .data").unwrap_err();
    match err {
        ImageError::UnalignedWrite { offset, .. } => assert_eq!(offset, 2),
        other => panic!("expected UnalignedWrite, got {other}"),
    }
}

#[test]
fn conflicting_rewrite_is_a_collision() {
    let mut m = mem();
    m.write(0, 8, &0x0000_0001u32.to_le_bytes(), "DMEM .data")
        .unwrap();
    let err = m
        .write(0, 8, &0x0000_0002u32.to_le_bytes(), "DMEM .sdata")
        .unwrap_err();
    match err {
        ImageError::AddressCollision {
            label,
            addr,
            index,
            offset,
            existing,
            new,
        } => {
            assert_eq!(label, "DMEM .sdata");
            assert_eq!(addr, 8);
            assert_eq!(index, 2);
            assert_eq!(offset, 8);
            assert_eq!(existing, 1);
            assert_eq!(new, 2);
        }
        other => panic!("expected AddressCollision, got {other}"),
    }
}

#[test]
fn identical_rewrite_is_silent() {
    let mut m = mem();
    m.write(0, 8, &0x0000_0001u32.to_le_bytes(), "DMEM .data")
        .unwrap();
    m.write(0, 8, &0x0000_0001u32.to_le_bytes(), "DMEM .data")
        .unwrap();
    assert_eq!(m.get(2), Some(1));
    assert_eq!(m.len(), 1);
}

#[test]
fn rewriting_a_whole_section_is_idempotent() {
    let payload: Vec<u8> = (0..32).collect();
    let mut m = mem();
    m.write(0, 0x100, &payload, "DMEM .rodata").unwrap();
    m.write(0, 0x100, &payload, "DMEM .rodata").unwrap();
    assert_eq!(m.len(), 8);
}

#[test]
fn high_address_bits_alias_through_the_mask() {
    let mut m = mem();
    m.write(0, 0, &0x1111_1111u32.to_le_bytes(), "DMEM .data")
        .unwrap();
    // 0x1_0000 masks to offset 0: same word index, different value.
    let err = m
        .write(0, 0x1_0000, &0x2222_2222u32.to_le_bytes(), "DMEM .tohost")
        .unwrap_err();
    match err {
        ImageError::AddressCollision { index, addr, .. } => {
            assert_eq!(index, 0);
            assert_eq!(addr, 0x1_0000);
        }
        other => panic!("expected AddressCollision, got {other}"),
    }
}

#[test]
fn write_wraps_at_the_window_top() {
    let mut m = mem();
    m.write(
        0,
        0xFFFC,
        &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88],
        "DMEM .data",
    )
    .unwrap();
    // First word at the last index of the window, second wrapped to zero.
    assert_eq!(m.get(0x3FFF), Some(0x4433_2211));
    assert_eq!(m.get(0x0000), Some(0x8877_6655));
    assert_eq!(m.len(), 2);
    assert_eq!(m.max_index(), Some(0x3FFF));
}

#[test]
fn errors_format_hex_diagnostics() {
    let mut m = mem();
    m.write(0, 8, &0x0000_0001u32.to_le_bytes(), "DMEM .data")
        .unwrap();
    let collision = m
        .write(0, 8, &0x0000_0002u32.to_le_bytes(), "DMEM .data")
        .unwrap_err()
        .to_string();
    assert!(collision.contains("existing=0x00000001"), "{collision}");
    assert!(collision.contains("new=0x00000002"), "{collision}");
    assert!(collision.contains("word index 2"), "{collision}");

    let unaligned = m
        .write(0x10, 0x13, &[0xFF], "IMEM .init")
        .unwrap_err()
        .to_string();
    assert!(unaligned.contains("addr=0x00000013"), "{unaligned}");
    assert!(unaligned.contains("base=0x00000010"), "{unaligned}");
    assert!(unaligned.contains("offset=0x0003"), "{unaligned}");
}
