//! Error taxonomy for the conversion pipeline.
//!
//! All fatal conditions are unrecoverable within a run: there is no retry
//! policy and no partial-success mode. Every variant carries the addresses,
//! offsets, and values needed for a maximally diagnostic message, formatted
//! in hex the way they appear in a linker map.

use thiserror::Error;

/// Fatal errors raised while converting an executable into memory images.
#[derive(Debug, Error)]
pub enum ImageError {
    /// A computed offset was not 32-bit word aligned after masking.
    #[error(
        "unaligned write ({label}): addr={addr:#010x} base={base:#010x} offset={offset:#06x}"
    )]
    UnalignedWrite {
        /// Source region being written, e.g. `IMEM .text.init`.
        label: String,
        /// Faulting address at the point of the write.
        addr: u64,
        /// Base address of the destination memory.
        base: u64,
        /// Masked offset that failed the alignment check.
        offset: u64,
    },

    /// Two writes targeted the same word index with different values.
    ///
    /// A consequence of the address-mask truncation: two distant addresses can
    /// legitimately alias the same word index, and the collision surfaces here.
    #[error(
        "address collision ({label}): addr={addr:#010x} maps to word index {index} \
         (offset={offset:#06x}), existing={existing:#010x}, new={new:#010x}"
    )]
    AddressCollision {
        /// Source region being written, e.g. `DMEM .sdata`.
        label: String,
        /// Address whose word collided.
        addr: u64,
        /// Word index both addresses map to.
        index: u64,
        /// Masked offset of the colliding word.
        offset: u64,
        /// Value already stored at the index.
        existing: u32,
        /// Conflicting value from the new write.
        new: u32,
    },

    /// The input could not be parsed as a section-table-bearing executable.
    #[error("malformed executable image: {0}")]
    MalformedImage(#[from] object::read::Error),

    /// Reading the input or writing an output image failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
