//! ELF to Harvard memory-image converter library.
//!
//! This crate converts a compiled ELF executable's loadable sections into two
//! flat, word-addressed memory images suitable for preloading into an RTL
//! simulation or synthesizable memory model. It provides:
//! 1. **Loading:** Section-table iteration with zero-fill synthesis for no-bits sections.
//! 2. **Routing:** Name-prefix classification into instruction or data memory, with address rebasing.
//! 3. **Writing:** Collision-safe 32-bit little-endian word writes through a 16-bit address window.
//! 4. **Dumping:** Gap-filled, one-word-per-line uppercase hex serialization.
//!
//! The target is a Harvard-architecture design with separate instruction and
//! data address spaces, each indexed by the low 16 bits of an address, the way
//! the RTL's memory decoder truncates it.

/// Fixed address-space parameters, fill words, and section prefix lists.
pub mod config;
/// Hex image serialization.
pub mod dump;
/// ELF section-table loading.
pub mod elf;
/// Conversion error taxonomy.
pub mod error;
/// Conversion pipeline (section routing and image assembly).
pub mod image;
/// Word-addressed memory model and collision-safe word writer.
pub mod mem;
/// Section classification and address rebasing.
pub mod route;

/// Root configuration type; use `Config::default()` for the fixed RTL layout.
pub use crate::config::Config;
/// Aggregated error type for the whole conversion pipeline.
pub use crate::error::ImageError;
/// Pipeline-scoped pair of instruction and data memory models.
pub use crate::image::MemoryImages;
