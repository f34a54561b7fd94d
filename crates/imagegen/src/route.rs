//! Section classification and address rebasing.
//!
//! Routing is a pure decision over two fixed, ordered prefix lists: the
//! instruction-memory family is checked first, and anything matching neither
//! family is assumed to be data rather than dropped.

use tracing::debug;

use crate::config::{Config, DMEM_SECTION_PREFIXES, IMEM_SECTION_PREFIXES};

/// Destination memory for a classified section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Instruction memory (`imem.hex`).
    Instruction,
    /// Data memory (`dmem.hex`).
    Data,
}

/// Classifies a section by name prefix.
///
/// Unknown mapped sections land in data memory; renamed or custom sections
/// must never be silently dropped.
pub fn classify(name: &str) -> Destination {
    if starts_with_any(name, IMEM_SECTION_PREFIXES) {
        return Destination::Instruction;
    }
    if !starts_with_any(name, DMEM_SECTION_PREFIXES) {
        debug!(name, "unrecognized section assumed to be data");
    }
    Destination::Data
}

/// Translates a link-time virtual address into the destination's address space.
///
/// Text is linked at the data-memory base but physically loaded starting at
/// instruction address zero, so instruction sections subtract `dmem_base`.
/// Data addresses are relative to the data base by construction and pass
/// through unchanged. The subtraction wraps: the writer's address mask makes
/// the high bits irrelevant.
pub fn rebase(dest: Destination, addr: u64, config: &Config) -> u64 {
    match dest {
        Destination::Instruction => addr.wrapping_sub(config.dmem_base),
        Destination::Data => addr,
    }
}

fn starts_with_any(name: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| name.starts_with(prefix))
}
