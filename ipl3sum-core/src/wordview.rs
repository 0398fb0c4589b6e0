//! Bounds-checked big-endian word access over a byte buffer.

use crate::error::ChecksumError;

/// A read-only view that serves aligned big-endian `u32` reads.
///
/// The checksum loop only ever reads whole words at 4-byte offsets, so the
/// aligned read is the sole access path; misuse surfaces as `UnalignedRead`
/// or `OutOfBounds` instead of a panic.
#[derive(Debug, Clone, Copy)]
pub struct WordView<'a> {
    bytes: &'a [u8],
}

impl<'a> WordView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read the big-endian word at `offset`.
    ///
    /// `offset` must be 4-byte aligned and `offset + 4` must not run past
    /// the end of the buffer.
    pub fn word_at(&self, offset: usize) -> Result<u32, ChecksumError> {
        if offset % 4 != 0 {
            return Err(ChecksumError::UnalignedRead { offset });
        }
        if offset.checked_add(4).is_none_or(|end| end > self.bytes.len()) {
            return Err(ChecksumError::OutOfBounds {
                offset,
                requested_bytes: 4,
                buffer_len: self.bytes.len(),
            });
        }
        let word: [u8; 4] = self.bytes[offset..offset + 4]
            .try_into()
            .map_err(|_| ChecksumError::ByteConversion { offset })?;
        Ok(u32::from_be_bytes(word))
    }

    /// Read `count` consecutive words starting at `offset`.
    pub fn words(&self, offset: usize, count: usize) -> Result<Vec<u32>, ChecksumError> {
        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            out.push(self.word_at(offset + i * 4)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "tests/wordview_tests.rs"]
mod tests;
