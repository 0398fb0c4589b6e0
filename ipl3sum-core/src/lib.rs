//! IPL3 checksum computation and CIC detection for Nintendo 64 ROMs.
//!
//! The N64 boot code (IPL3) checksums the first megabyte of the cartridge
//! and refuses to boot unless the result matches the two words stored in
//! the ROM header. The exact algorithm varies with the CIC lockout chip the
//! cartridge shipped with. This crate reproduces the computation
//! bit-for-bit for every retail CIC variant and identifies the variant from
//! the IPL3 blob itself.
//!
//! Buffers are expected in big-endian (.z64) byte order; normalizing other
//! dump layouts is the caller's job.

pub mod checksum;
pub mod cickind;
pub mod detect;
pub mod error;
pub mod wordview;

pub use checksum::{MIN_ROM_SIZE, calculate_checksum, calculate_checksum_autodetect};
pub use cickind::CicKind;
pub use detect::{IPL3_SIZE, detect_cic, detect_cic_raw};
pub use error::ChecksumError;
pub use wordview::WordView;
