//! N64 dump byte orderings.
//!
//! Cartridge dumps circulate in three layouts, distinguished by the first
//! word of the header. The checksum core consumes big-endian bytes only, so
//! anything else is rearranged in memory right after loading.

/// Byte layout of an N64 dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    /// .z64 — big-endian, the native layout
    BigEndian,
    /// .v64 — every byte pair swapped
    ByteSwapped,
    /// .n64 — every 4-byte group reversed
    LittleEndian,
}

impl DumpFormat {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BigEndian => "z64 (big-endian)",
            Self::ByteSwapped => "v64 (byte-swapped)",
            Self::LittleEndian => "n64 (little-endian)",
        }
    }
}

/// Identify the dump format from the first word of the header.
///
/// Returns `None` when the magic matches no known layout.
pub fn sniff_format(rom: &[u8]) -> Option<DumpFormat> {
    match rom.get(..4)? {
        [0x80, 0x37, 0x12, 0x40] => Some(DumpFormat::BigEndian),
        [0x37, 0x80, 0x40, 0x12] => Some(DumpFormat::ByteSwapped),
        [0x40, 0x12, 0x37, 0x80] => Some(DumpFormat::LittleEndian),
        _ => None,
    }
}

/// Rearrange `rom` into big-endian order in place.
pub fn normalize_to_big_endian(rom: &mut [u8], format: DumpFormat) {
    match format {
        DumpFormat::BigEndian => {}
        DumpFormat::ByteSwapped => {
            for pair in rom.chunks_exact_mut(2) {
                pair.swap(0, 1);
            }
        }
        DumpFormat::LittleEndian => {
            for group in rom.chunks_exact_mut(4) {
                group.reverse();
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/byteorder_tests.rs"]
mod tests;
