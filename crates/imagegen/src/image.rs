//! Conversion pipeline from executable image to Harvard memory images.
//!
//! This module owns the run-scoped state: the instruction and data memory
//! models, built by a single forward pass over the section table and consumed
//! exactly once by the hex dumper. It performs:
//! 1. **Assembly:** Parse, load, classify, rebase, and write every mapped section.
//! 2. **Output:** Dump both models to `imem.hex` and `dmem.hex` in a chosen directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{Config, DMEM_IMAGE_NAME, IMEM_IMAGE_NAME};
use crate::dump;
use crate::elf::{self, LoadableSection};
use crate::error::ImageError;
use crate::mem::WordMemory;
use crate::route::{self, Destination};

/// The pair of memory models populated from one executable.
#[derive(Debug)]
pub struct MemoryImages {
    /// Instruction memory model.
    pub imem: WordMemory,
    /// Data memory model.
    pub dmem: WordMemory,
}

impl MemoryImages {
    /// Creates two empty memory models sharing the configured address mask.
    pub fn new(config: &Config) -> Self {
        Self {
            imem: WordMemory::new(config.addr_mask),
            dmem: WordMemory::new(config.addr_mask),
        }
    }

    /// Builds both memory images from a raw executable.
    ///
    /// Control flows strictly forward, one section at a time; the first fatal
    /// condition aborts the whole build.
    pub fn from_elf(data: &[u8], config: &Config) -> Result<Self, ImageError> {
        let file = elf::parse(data)?;
        let mut images = Self::new(config);
        for section in elf::loadable_sections(&file) {
            images.load_section(&section?, config)?;
        }
        Ok(images)
    }

    /// Routes one section to its destination memory and writes its words.
    fn load_section(
        &mut self,
        section: &LoadableSection<'_>,
        config: &Config,
    ) -> Result<(), ImageError> {
        let dest = route::classify(&section.name);
        let addr = route::rebase(dest, section.addr, config);

        let vaddr = format!("{:#010x}", section.addr);
        let dest_addr = format!("{addr:#010x}");
        debug!(
            name = %section.name,
            dest = ?dest,
            vaddr = %vaddr,
            addr = %dest_addr,
            bytes = section.data.len(),
            zero_fill = section.zero_fill,
            "routing section"
        );

        match dest {
            Destination::Instruction => self.imem.write(
                config.imem_base,
                addr,
                &section.data,
                &format!("IMEM {}", section.name),
            ),
            Destination::Data => self.dmem.write(
                config.dmem_base,
                addr,
                &section.data,
                &format!("DMEM {}", section.name),
            ),
        }
    }

    /// Dumps both models into `out_dir` and returns the written paths
    /// (instruction image first).
    pub fn write_hex_files(
        &self,
        out_dir: &Path,
        config: &Config,
    ) -> Result<(PathBuf, PathBuf), ImageError> {
        let imem_path = out_dir.join(IMEM_IMAGE_NAME);
        let dmem_path = out_dir.join(DMEM_IMAGE_NAME);

        dump::write_hex_file(&imem_path, &self.imem, config.imem_fill_word)?;
        dump::write_hex_file(&dmem_path, &self.dmem, config.dmem_fill_word)?;

        Ok((imem_path, dmem_path))
    }
}
