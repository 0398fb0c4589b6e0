//! ipl3sum CLI
//!
//! Computes and verifies the IPL3 checksum of N64 ROMs and detects their
//! CIC variant. Accepts .z64, .v64, and .n64 dumps; everything is
//! normalized to big-endian in memory before the core sees it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ipl3sum_core::{CicKind, WordView, calculate_checksum, detect_cic};

mod byteorder;
use crate::byteorder::{DumpFormat, normalize_to_big_endian, sniff_format};

#[derive(Parser)]
#[command(name = "ipl3sum")]
#[command(about = "Compute and verify N64 IPL3 checksums", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the IPL3 checksum of a ROM, autodetecting its CIC variant
    Sum {
        /// Path to a .z64/.v64/.n64 ROM file
        rom_path: PathBuf,
    },

    /// Check the checksum in the ROM header against the computed one
    Check {
        /// Path to a .z64/.v64/.n64 ROM file
        rom_path: PathBuf,

        /// Use this CIC variant instead of autodetecting it
        /// (e.g. 6102, X103, 7105)
        #[arg(short, long)]
        kind: Option<CicKind>,
    },

    /// Detect the CIC variant of a ROM
    DetectCic {
        /// Path to a .z64/.v64/.n64 ROM file
        rom_path: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Sum { rom_path } => run_sum(&rom_path),
        Commands::Check { rom_path, kind } => run_check(&rom_path, kind),
        Commands::DetectCic { rom_path } => run_detect_cic(&rom_path),
    }
}

/// Read a ROM file and normalize it to big-endian in memory.
fn load_rom(path: &Path) -> Option<Vec<u8>> {
    let mut rom = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!(
                "{} Error reading {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                path.display(),
                e,
            );
            return None;
        }
    };
    log::debug!("read 0x{:X} bytes from {}", rom.len(), path.display());

    let format = match sniff_format(&rom) {
        Some(f) => f,
        None => {
            eprintln!(
                "{} {}: unrecognized N64 magic bytes \
                 (expected z64=[80,37,12,40], v64=[37,80,40,12], n64=[40,12,37,80])",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                path.display(),
            );
            return None;
        }
    };

    if format != DumpFormat::BigEndian {
        println!(
            "{}",
            format!("Normalizing {} dump to big-endian", format.label())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    normalize_to_big_endian(&mut rom, format);

    Some(rom)
}

/// Run the sum command.
fn run_sum(rom_path: &Path) -> ExitCode {
    let Some(rom) = load_rom(rom_path) else {
        return ExitCode::FAILURE;
    };

    let kind = match detect_cic(&rom) {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Detected kind is '{}'",
        kind.if_supports_color(Stdout, |t| t.cyan()),
    );

    match calculate_checksum(&rom, kind) {
        Ok((chk0, chk1)) => {
            println!("Calculated checksum: {:08X} {:08X}", chk0, chk1);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            ExitCode::FAILURE
        }
    }
}

/// Run the check command.
fn run_check(rom_path: &Path, kind: Option<CicKind>) -> ExitCode {
    let Some(rom) = load_rom(rom_path) else {
        return ExitCode::FAILURE;
    };

    let kind = match kind {
        Some(kind) => kind,
        None => match detect_cic(&rom) {
            Ok(kind) => {
                println!(
                    "Detected kind is '{}'",
                    kind.if_supports_color(Stdout, |t| t.cyan()),
                );
                kind
            }
            Err(e) => {
                eprintln!(
                    "{} {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    e,
                );
                return ExitCode::FAILURE;
            }
        },
    };

    // Header words at 0x10/0x14 hold the checksum the boot code expects.
    let view = WordView::new(&rom);
    let header = match (view.word_at(0x10), view.word_at(0x14)) {
        (Ok(chk0), Ok(chk1)) => (chk0, chk1),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return ExitCode::FAILURE;
        }
    };
    println!("Checksum in ROM:     {:08X} {:08X}", header.0, header.1);

    let computed = match calculate_checksum(&rom, kind) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return ExitCode::FAILURE;
        }
    };
    println!("Calculated checksum: {:08X} {:08X}", computed.0, computed.1);

    if computed != header {
        println!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            "Checksum doesn't match".if_supports_color(Stdout, |t| t.red()),
        );
        return ExitCode::FAILURE;
    }

    println!(
        "{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        "Checksum matches".if_supports_color(Stdout, |t| t.green()),
    );
    ExitCode::SUCCESS
}

/// Run the detect-cic command.
fn run_detect_cic(rom_path: &Path) -> ExitCode {
    let Some(rom) = load_rom(rom_path) else {
        return ExitCode::FAILURE;
    };

    match detect_cic(&rom) {
        Ok(kind) => {
            println!(
                "Detected kind is '{}'",
                kind.if_supports_color(Stdout, |t| t.cyan()),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            ExitCode::FAILURE
        }
    }
}
