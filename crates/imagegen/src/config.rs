//! Configuration for the memory image generator.
//!
//! This module defines the fixed parameters of the target Harvard memory
//! system. It provides:
//! 1. **Defaults:** Baseline address-space constants (bases, mask, fill words).
//! 2. **Prefix lists:** The section-name families routed to each memory.
//! 3. **Structure:** A `Config` carrying the parameters through the pipeline.
//!
//! The layout is not externally configurable; the constants exist so that
//! embedders reusing the library against a different RTL can construct a
//! `Config` by hand instead of patching literals.

/// Default address-space constants for the target RTL.
///
/// These values mirror the hardware memory decoder: both memories are indexed
/// with `address[15:0]`, code is linked at the data-space base, and unwritten
/// instruction words decode as a no-op.
mod defaults {
    /// Base address of instruction memory.
    ///
    /// Code physically resides at instruction address zero even though it is
    /// linked at the data-space base.
    pub const IMEM_BASE: u64 = 0x0000_0000;

    /// Base address of data memory (2 GiB), the link-time base of the image.
    pub const DMEM_BASE: u64 = 0x8000_0000;

    /// Address mask applied to computed offsets before word indexing.
    ///
    /// The RTL indexes both memories with `address[15:0]`; higher bits are
    /// ignored, so two distant addresses can alias the same word.
    pub const ADDR_MASK: u64 = 0xFFFF;

    /// Fill word for unwritten instruction memory gaps.
    ///
    /// The canonical RISC-V `nop` (`addi x0, x0, 0`), so a stray fetch from a
    /// gap executes harmlessly.
    pub const IMEM_FILL_WORD: u32 = 0x0000_0013;

    /// Fill word for unwritten data memory gaps.
    pub const DMEM_FILL_WORD: u32 = 0x0000_0000;
}

/// Section-name prefixes routed to instruction memory.
///
/// Startup and text code regions. Checked before the data family; a name
/// matching both would classify as instruction memory.
pub const IMEM_SECTION_PREFIXES: &[&str] = &[".text", ".text.init", ".init", ".text.startup"];

/// Section-name prefixes routed to data memory.
///
/// Initialized data, uninitialized data, read-only data, and the
/// `tohost`/`fromhost` handshake regions used by bare-metal test suites.
pub const DMEM_SECTION_PREFIXES: &[&str] = &[
    ".data",
    ".bss",
    ".sbss",
    ".sdata",
    ".rodata",
    ".tohost",
    ".fromhost",
];

/// Output file name for the instruction memory image.
pub const IMEM_IMAGE_NAME: &str = "imem.hex";

/// Output file name for the data memory image.
pub const DMEM_IMAGE_NAME: &str = "dmem.hex";

/// Address-space parameters carried through the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Base address of instruction memory.
    pub imem_base: u64,
    /// Base address of data memory; also the link-time base of text sections.
    pub dmem_base: u64,
    /// Low-bit window applied to offsets before word indexing.
    pub addr_mask: u64,
    /// Fill word for unwritten instruction memory gaps.
    pub imem_fill_word: u32,
    /// Fill word for unwritten data memory gaps.
    pub dmem_fill_word: u32,
}

impl Default for Config {
    /// Returns the fixed layout of the target RTL.
    fn default() -> Self {
        Self {
            imem_base: defaults::IMEM_BASE,
            dmem_base: defaults::DMEM_BASE,
            addr_mask: defaults::ADDR_MASK,
            imem_fill_word: defaults::IMEM_FILL_WORD,
            dmem_fill_word: defaults::DMEM_FILL_WORD,
        }
    }
}
