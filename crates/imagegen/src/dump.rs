//! Hex image serialization.
//!
//! Dumps a memory model as one 8-hex-digit uppercase word per line, from
//! index 0 through the maximum written index, filling unwritten gaps with a
//! default word. An empty model dumps to an empty file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::ImageError;
use crate::mem::WordMemory;

/// Serializes `mem` to `w`, one word per line, gaps filled with `fill`.
pub fn write_hex<W: Write>(mut w: W, mem: &WordMemory, fill: u32) -> io::Result<()> {
    let Some(max) = mem.max_index() else {
        return Ok(());
    };
    for index in 0..=max {
        writeln!(w, "{:08X}", mem.get(index).unwrap_or(fill))?;
    }
    Ok(())
}

/// Creates (or overwrites) `path` and serializes `mem` into it.
pub fn write_hex_file<P: AsRef<Path>>(
    path: P,
    mem: &WordMemory,
    fill: u32,
) -> Result<(), ImageError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_hex(&mut out, mem, fill)?;
    out.flush()?;

    info!(
        path = %path.display(),
        lines = mem.max_index().map_or(0, |max| max + 1),
        "image written"
    );
    Ok(())
}
