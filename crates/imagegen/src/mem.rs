//! Word-addressed memory model and collision-safe word writer.
//!
//! This module implements the in-memory model of one physical memory. It
//! provides:
//! 1. **Model:** A sparse map from word index to 32-bit value, append-only within a run.
//! 2. **Writer:** Byte-to-word composition (little-endian), alignment checking, and collision detection under the address mask.
//!
//! The mask reproduces the RTL's address-decoding truncation: only the low
//! bits of an address select a memory word, so two distant addresses can
//! alias the same index. A rewrite with the same value is tolerated; a
//! rewrite with a different value is a fatal collision.

use std::collections::BTreeMap;

use tracing::trace;

use crate::error::ImageError;

/// A sparse, word-addressed 32-bit memory model.
///
/// Keys are word indices; entries are only ever added, never mutated or
/// removed. Iteration order is ascending, which the hex dumper relies on.
#[derive(Debug, Clone)]
pub struct WordMemory {
    words: BTreeMap<u64, u32>,
    mask: u64,
}

impl WordMemory {
    /// Creates an empty memory model with the given address mask.
    pub fn new(addr_mask: u64) -> Self {
        Self {
            words: BTreeMap::new(),
            mask: addr_mask,
        }
    }

    /// Writes `data` into the model as 32-bit little-endian words.
    ///
    /// The first word lands at `(addr - base) & mask`, which must be 4-byte
    /// aligned. Content is zero-padded on the right to a whole word. The
    /// offset re-applies the mask after every word, so a write straddling the
    /// top of the window wraps back to index zero exactly as the hardware
    /// index would.
    ///
    /// # Errors
    ///
    /// [`ImageError::UnalignedWrite`] if the masked offset is not a multiple
    /// of 4; [`ImageError::AddressCollision`] if a word index already holds a
    /// different value.
    pub fn write(
        &mut self,
        base: u64,
        addr: u64,
        data: &[u8],
        label: &str,
    ) -> Result<(), ImageError> {
        let mut offset = addr.wrapping_sub(base) & self.mask;

        if offset % 4 != 0 {
            return Err(ImageError::UnalignedWrite {
                label: label.to_string(),
                addr,
                base,
                offset,
            });
        }

        let mut addr = addr;
        for chunk in data.chunks(4) {
            // Short tail chunks compose against zero bytes (right padding).
            let mut bytes = [0u8; 4];
            bytes[..chunk.len()].copy_from_slice(chunk);
            let word = u32::from_le_bytes(bytes);

            let index = offset / 4;
            match self.words.get(&index) {
                Some(&existing) if existing != word => {
                    return Err(ImageError::AddressCollision {
                        label: label.to_string(),
                        addr,
                        index,
                        offset,
                        existing,
                        new: word,
                    });
                }
                Some(_) => {
                    // Identical rewrite; nothing to store.
                }
                None => {
                    let _ = self.words.insert(index, word);
                }
            }

            offset = (offset + 4) & self.mask;
            addr = addr.wrapping_add(4);
        }

        trace!(label, words = data.len().div_ceil(4), "section written");
        Ok(())
    }

    /// Returns the value stored at `index`, if any.
    pub fn get(&self, index: u64) -> Option<u32> {
        self.words.get(&index).copied()
    }

    /// Returns the highest written word index, or `None` if the model is empty.
    pub fn max_index(&self) -> Option<u64> {
        self.words.last_key_value().map(|(&index, _)| index)
    }

    /// Returns the number of explicitly written words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word has been written.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
