//! ELF to Harvard memory-image converter CLI.
//!
//! This binary converts one compiled executable into two preload images for
//! an RTL simulation. It performs:
//! 1. **Input:** Reads the ELF named on the command line.
//! 2. **Conversion:** Routes every mapped section into instruction or data memory.
//! 3. **Output:** Writes `imem.hex` and `dmem.hex` into the output directory.
//!
//! Any fatal condition (malformed image, unaligned write, address collision,
//! I/O failure) aborts with a diagnostic message and a nonzero exit status.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rvhex_core::{Config, ImageError, MemoryImages};

#[derive(Parser, Debug)]
#[command(
    name = "rvhex",
    version,
    about = "Convert an ELF executable into imem.hex / dmem.hex preload images",
    long_about = "Convert a compiled ELF executable's loadable sections into two flat,\n\
                  word-addressed memory images for a Harvard-architecture RTL design.\n\
                  Text sections land in instruction memory rebased to address zero;\n\
                  data, BSS, rodata, and tohost/fromhost sections land in data memory.\n\n\
                  Examples:\n  rvhex firmware.elf\n  rvhex -o build/sim firmware.elf"
)]
struct Cli {
    /// ELF executable to convert.
    elf: PathBuf,

    /// Directory receiving imem.hex and dmem.hex.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Runs the full pipeline: read, convert, dump, report.
fn run(cli: &Cli) -> Result<(), ImageError> {
    let data = fs::read(&cli.elf)?;
    let config = Config::default();

    let images = MemoryImages::from_elf(&data, &config)?;
    let (imem_path, dmem_path) = images.write_hex_files(&cli.out_dir, &config)?;

    println!("Done -> {}  {}", imem_path.display(), dmem_path.display());
    Ok(())
}
