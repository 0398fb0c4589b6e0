//! CIC lockout-chip variants and their checksum parameters.
//!
//! Every retail cartridge pairs its IPL3 revision with a CIC chip. The chip
//! decides the seed the PIF deposits before the CPU boots, and the IPL3 blob
//! carries the magic multiplier the checksum loop is parameterized with.
//! 6104/7104 was never manufactured, so the set is closed at six variants.

use crate::error::ChecksumError;

/// A CIC lockout-chip variant.
///
/// Variants are never constructed from scratch; they are looked up by index,
/// name, or IPL3 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CicKind {
    Cic6101,
    /// Covers both the 6102 (NTSC) and 7101 (PAL) labels; same silicon.
    Cic6102,
    Cic7102,
    /// 6103 and 7103.
    CicX103,
    // 6104/7104 does not exist
    /// 6105 and 7105.
    CicX105,
    /// 6106 and 7106.
    CicX106,
}

/// All variants in index order.
const ALL_KINDS: &[CicKind] = &[
    CicKind::Cic6101,
    CicKind::Cic6102,
    CicKind::Cic7102,
    CicKind::CicX103,
    CicKind::CicX105,
    CicKind::CicX106,
];

const MD5_6101: [u8; 16] = [
    0x90, 0x0b, 0x4a, 0x5b, 0x68, 0xed, 0xb7, 0x1f, 0x4c, 0x7e, 0xd5, 0x2a, 0xcd, 0x81, 0x4f, 0xc5,
];
const MD5_6102: [u8; 16] = [
    0xe2, 0x4d, 0xd7, 0x96, 0xb2, 0xfa, 0x16, 0x51, 0x15, 0x21, 0x13, 0x9d, 0x28, 0xc8, 0x35, 0x6b,
];
const MD5_7102: [u8; 16] = [
    0x95, 0x58, 0x94, 0xc2, 0xe4, 0x0a, 0x69, 0x8b, 0xf9, 0x8a, 0x67, 0xb7, 0x8a, 0x4e, 0x28, 0xfa,
];
const MD5_X103: [u8; 16] = [
    0x31, 0x90, 0x38, 0x09, 0x73, 0x46, 0xe1, 0x2c, 0x26, 0xc3, 0xc2, 0x1b, 0x56, 0xf8, 0x6f, 0x23,
];
const MD5_X105: [u8; 16] = [
    0xff, 0x22, 0xa2, 0x96, 0xe5, 0x5d, 0x34, 0xab, 0x0a, 0x07, 0x7d, 0xc2, 0xba, 0x5f, 0x57, 0x96,
];
const MD5_X106: [u8; 16] = [
    0x64, 0x60, 0x38, 0x77, 0x49, 0xac, 0x0b, 0xd9, 0x25, 0xaa, 0x54, 0x30, 0xbc, 0x78, 0x64, 0xfe,
];

impl CicKind {
    /// Seed value the PIF deposits for the IPL3 before the CPU runs.
    pub fn seed(&self) -> u32 {
        match self {
            Self::Cic6101 | Self::Cic6102 | Self::Cic7102 => 0x3F,
            Self::CicX103 => 0x78,
            Self::CicX105 => 0x91,
            Self::CicX106 => 0x85,
        }
    }

    /// Multiplier constant hardcoded inside the IPL3 blob itself.
    pub fn magic(&self) -> u32 {
        match self {
            Self::Cic6101 | Self::Cic6102 | Self::Cic7102 | Self::CicX105 => 0x5D588B65,
            Self::CicX103 | Self::CicX106 => 0x6C078965,
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cic6101 => "6101",
            Self::Cic6102 => "6102-7101",
            Self::Cic7102 => "7102",
            Self::CicX103 => "X103",
            Self::CicX105 => "X105",
            Self::CicX106 => "X106",
        }
    }

    /// Alternative names accepted by [`CicKind::from_name`].
    ///
    /// The X-kinds answer to both of their marketed numbers, and 6102-7101
    /// answers to each label on its own.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Cic6101 => &[],
            Self::Cic6102 => &["6102", "7101"],
            Self::Cic7102 => &[],
            Self::CicX103 => &["6103", "7103"],
            Self::CicX105 => &["6105", "7105"],
            Self::CicX106 => &["6106", "7106"],
        }
    }

    /// Expected MD5 digest of this variant's IPL3 blob, when one is on
    /// record.
    pub fn ipl3_md5(&self) -> Option<&'static [u8; 16]> {
        match self {
            Self::Cic6101 => Some(&MD5_6101),
            Self::Cic6102 => Some(&MD5_6102),
            Self::Cic7102 => Some(&MD5_7102),
            Self::CicX103 => Some(&MD5_X103),
            Self::CicX105 => Some(&MD5_X105),
            Self::CicX106 => Some(&MD5_X106),
        }
    }

    /// All six variants.
    pub fn all() -> &'static [CicKind] {
        ALL_KINDS
    }

    /// Position of this variant in [`CicKind::all`].
    pub fn index(&self) -> usize {
        match self {
            Self::Cic6101 => 0,
            Self::Cic6102 => 1,
            Self::Cic7102 => 2,
            Self::CicX103 => 3,
            Self::CicX105 => 4,
            Self::CicX106 => 5,
        }
    }

    /// Look up a variant by its position in [`CicKind::all`].
    pub fn from_index(index: usize) -> Result<CicKind, ChecksumError> {
        ALL_KINDS
            .get(index)
            .copied()
            .ok_or(ChecksumError::OutOfBounds {
                offset: index,
                requested_bytes: 1,
                buffer_len: ALL_KINDS.len(),
            })
    }

    /// Look up a variant by name. Matches the canonical name and any alias,
    /// case-sensitively.
    pub fn from_name(name: &str) -> Result<CicKind, ChecksumError> {
        for &kind in ALL_KINDS {
            if kind.name() == name || kind.aliases().contains(&name) {
                return Ok(kind);
            }
        }
        Err(ChecksumError::UnableToDetectCic)
    }

    /// Look up a variant by the MD5 digest of its IPL3 blob.
    pub fn from_md5(digest: &[u8; 16]) -> Result<CicKind, ChecksumError> {
        for &kind in ALL_KINDS {
            if kind.ipl3_md5() == Some(digest) {
                return Ok(kind);
            }
        }
        Err(ChecksumError::UnableToDetectCic)
    }
}

impl std::fmt::Display for CicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CicKind {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
#[path = "tests/cickind_tests.rs"]
mod tests;
