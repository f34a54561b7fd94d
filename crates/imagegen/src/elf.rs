//! ELF section-table loading.
//!
//! This module turns an executable's section table into a lazy sequence of
//! loadable section descriptors. It performs:
//! 1. **Filtering:** Sections with zero size or a zero virtual address are unmapped and skipped.
//! 2. **Content resolution:** No-bits (BSS-style) sections synthesize all-zero content; others borrow their stored bytes.
//!
//! Only the section table and section contents are read; instructions,
//! symbols, and relocations are never interpreted.

use std::borrow::Cow;

use object::{File, Object, ObjectSection, SectionKind};
use tracing::debug;

use crate::error::ImageError;

/// A mapped section ready to be routed and written into a memory model.
#[derive(Debug)]
pub struct LoadableSection<'data> {
    /// Section name from the section table.
    pub name: String,
    /// Link-time virtual address.
    pub addr: u64,
    /// Section content: stored bytes, or synthesized zeros for no-bits sections.
    pub data: Cow<'data, [u8]>,
    /// Whether the content was synthesized (no-bits) rather than read from the image.
    pub zero_fill: bool,
}

/// Parses an executable image from raw bytes.
pub fn parse(data: &[u8]) -> Result<File<'_>, ImageError> {
    Ok(File::parse(data)?)
}

/// Iterates the loadable sections of a parsed executable.
///
/// Lazy, single-pass, and finite: each section table entry is visited once,
/// in table order. Sections with zero size or a zero virtual address yield
/// nothing; malformed entries yield an error item.
pub fn loadable_sections<'data: 'file, 'file>(
    file: &'file File<'data>,
) -> impl Iterator<Item = Result<LoadableSection<'data>, ImageError>> + 'file {
    file.sections().filter_map(|section| {
        if section.size() == 0 {
            debug!(
                name = section.name().unwrap_or("<unnamed>"),
                "skipping empty section"
            );
            return None;
        }
        if section.address() == 0 {
            debug!(
                name = section.name().unwrap_or("<unnamed>"),
                "skipping unmapped section"
            );
            return None;
        }
        Some(load_section(&section))
    })
}

/// Resolves one nonzero, mapped section into a descriptor.
fn load_section<'data>(
    section: &object::Section<'data, '_>,
) -> Result<LoadableSection<'data>, ImageError> {
    let name = section.name()?.to_string();
    let addr = section.address();

    let (data, zero_fill) = match section.kind() {
        // No-bits sections occupy address space with no stored bytes.
        SectionKind::UninitializedData | SectionKind::UninitializedTls => {
            (Cow::Owned(vec![0u8; section.size() as usize]), true)
        }
        _ => (Cow::Borrowed(section.data()?), false),
    };

    Ok(LoadableSection {
        name,
        addr,
        data,
        zero_fill,
    })
}
