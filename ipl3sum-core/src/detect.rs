//! CIC autodetection from IPL3 content.
//!
//! Each known variant's IPL3 blob has a stable MD5 digest, so detection is
//! a pure hash lookup. It never falls back to checksum matching.

use crate::cickind::CicKind;
use crate::error::ChecksumError;

/// ROM offset where the IPL3 blob starts, right after the 0x40-byte header.
pub const IPL3_START: usize = 0x40;
/// ROM offset one past the end of the IPL3 blob.
pub const IPL3_END: usize = 0x1000;
/// Exact size of the IPL3 blob.
pub const IPL3_SIZE: usize = IPL3_END - IPL3_START;

/// Detect the CIC variant from a bare IPL3 blob.
///
/// The buffer must be exactly the [`IPL3_SIZE`]-byte blob in big-endian
/// order, with the rest of the ROM stripped.
pub fn detect_cic_raw(ipl3_bytes: &[u8]) -> Result<CicKind, ChecksumError> {
    if ipl3_bytes.len() != IPL3_SIZE {
        return Err(ChecksumError::BufferSizeIsWrong {
            buffer_len: ipl3_bytes.len(),
            expected_len: IPL3_SIZE,
        });
    }

    let digest = md5::compute(ipl3_bytes);
    let kind = CicKind::from_md5(&digest.0)?;
    log::debug!("IPL3 hash {:x} matched CIC {}", digest, kind);
    Ok(kind)
}

/// Detect the CIC variant of a full big-endian ROM.
///
/// Extracts the IPL3 region and delegates to [`detect_cic_raw`]. The buffer
/// must reach at least to the end of that region.
pub fn detect_cic(rom_bytes: &[u8]) -> Result<CicKind, ChecksumError> {
    if rom_bytes.len() < IPL3_END {
        return Err(ChecksumError::BufferNotBigEnough {
            buffer_len: rom_bytes.len(),
            expected_len: IPL3_END,
        });
    }
    detect_cic_raw(&rom_bytes[IPL3_START..IPL3_END])
}

#[cfg(test)]
#[path = "tests/detect_tests.rs"]
mod tests;
