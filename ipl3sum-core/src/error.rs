use thiserror::Error;

/// Errors produced by checksum computation and CIC detection.
///
/// `Okay`, `NullPointer`, `ByteConversion`, and `StringConversion` exist so
/// that boundary adapters (FFI shims, argument marshalling) can report their
/// status with the same tags; the library functions themselves only return
/// the buffer-shape, access, and detection variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ChecksumError {
    /// Not an error.
    #[error("not an error")]
    Okay,

    /// A word read at an offset that is not 4-byte aligned.
    #[error("unaligned read at offset 0x{offset:X}")]
    UnalignedRead { offset: usize },

    /// The bytes at the given offset could not be converted to a word.
    #[error("failed to convert bytes at offset 0x{offset:X}")]
    ByteConversion { offset: usize },

    /// A read past the end of the buffer.
    #[error(
        "out of bounds access at offset 0x{offset:X}: requested 0x{requested_bytes:X} bytes, buffer is 0x{buffer_len:X} bytes"
    )]
    OutOfBounds {
        offset: usize,
        requested_bytes: usize,
        buffer_len: usize,
    },

    /// Reserved for adapters that accept nullable handles.
    #[error("pointer is null")]
    NullPointer,

    /// The buffer is shorter than the minimum size the operation needs.
    #[error(
        "buffer too small: expected at least 0x{expected_len:X} bytes, got 0x{buffer_len:X}"
    )]
    BufferNotBigEnough {
        buffer_len: usize,
        expected_len: usize,
    },

    /// The buffer does not have the exact size the operation requires.
    #[error(
        "buffer has the wrong size: expected exactly 0x{expected_len:X} bytes, got 0x{buffer_len:X}"
    )]
    BufferSizeIsWrong {
        buffer_len: usize,
        expected_len: usize,
    },

    /// The IPL3 hash, name, or index matches no known CIC variant.
    #[error("unable to detect CIC variant")]
    UnableToDetectCic,

    /// A string failed to cross a foreign-function boundary.
    #[error("failed to convert a foreign string")]
    StringConversion,
}
