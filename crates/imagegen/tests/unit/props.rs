//! # Pipeline Properties
//!
//! Property tests over the memory model and dumper: the dump always covers
//! index zero through the maximum written index, and identical rewrites are
//! always accepted.

use proptest::prelude::*;
use rvhex_core::dump::write_hex;
use rvhex_core::mem::WordMemory;

const MASK: u64 = 0xFFFF;

proptest! {
    #[test]
    fn dump_covers_zero_through_max_with_fill(
        indices in prop::collection::btree_set(0u64..0x4000, 1..64),
    ) {
        let mut mem = WordMemory::new(MASK);
        for &index in &indices {
            let word = (index as u32).wrapping_mul(0x9E37_79B9);
            mem.write(0, index * 4, &word.to_le_bytes(), "prop").unwrap();
        }

        let mut buf = Vec::new();
        write_hex(&mut buf, &mem, 0xFFFF_FFFF).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let max = *indices.iter().max().unwrap();
        prop_assert_eq!(text.lines().count() as u64, max + 1);

        for (i, line) in text.lines().enumerate() {
            prop_assert_eq!(line.len(), 8);
            prop_assert!(
                line.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
                "lowercase digit in {}", line
            );
            let value = u32::from_str_radix(line, 16).unwrap();
            match mem.get(i as u64) {
                Some(stored) => prop_assert_eq!(value, stored),
                None => prop_assert_eq!(value, 0xFFFF_FFFF),
            }
        }
    }

    #[test]
    fn identical_rewrites_never_collide(
        payload in prop::collection::vec(any::<u8>(), 1..256),
        offset_words in 0u64..0x3F00,
    ) {
        let mut mem = WordMemory::new(MASK);
        let addr = offset_words * 4;
        mem.write(0, addr, &payload, "prop").unwrap();
        mem.write(0, addr, &payload, "prop").unwrap();
        prop_assert_eq!(mem.len(), payload.len().div_ceil(4));
    }
}
