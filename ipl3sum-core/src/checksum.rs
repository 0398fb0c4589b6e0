//! The IPL3 checksum algorithm.
//!
//! The boot code checksums the first megabyte of the cartridge (everything
//! after the header and the IPL3 blob itself) and compares the result
//! against the two words stored at header offsets 0x10 and 0x14. This
//! module reproduces that loop bit-for-bit.
//!
//! All arithmetic is unsigned 32-bit with wraparound. The rotate amounts,
//! the overflow carries, and the per-variant fold rules all feed the final
//! words, so checked or widened arithmetic anywhere in the loop diverges
//! from hardware output.

use crate::cickind::CicKind;
use crate::detect::detect_cic;
use crate::error::ChecksumError;
use crate::wordview::WordView;

/// Minimum ROM size the algorithm can run on: header plus IPL3 (0x1000
/// bytes) plus the 0x100000-byte checksum window.
pub const MIN_ROM_SIZE: usize = 0x101000;

/// ROM offset where the checksum window starts.
const WINDOW_START: usize = 0x1000;
/// Bytes covered by the checksum loop.
const WINDOW_SIZE: usize = 0x100000;

/// Virtual address the X105 auxiliary pointer starts at.
const AUX_PTR_BASE: u32 = 0xA0000200;
/// Mask applied to the auxiliary pointer after each advance.
const AUX_PTR_MASK: u32 = 0xA00002FF;
/// Virtual address IPL3 6105 copies its auxiliary block to.
const AUX_VRAM_BASE: u32 = 0xA0000004;
/// ROM offset of the auxiliary block, relative to the IPL3 copy source.
const AUX_ROM_OFFSET: u32 = 0x000554;

/// How the three terms of each output pair are folded together.
#[derive(Debug, Clone, Copy)]
enum Finalize {
    /// XOR all three terms.
    Xor,
    /// XOR the first two terms, then add the third.
    XorAdd,
    /// Multiply the first two terms, then add the third.
    MulAdd,
}

/// Per-variant divergences, resolved once before the main loop.
#[derive(Debug, Clone, Copy)]
struct VariantParams {
    /// Amount subtracted from the boot entry point before it is used.
    entrypoint_bias: u32,
    /// Fold words from the auxiliary ROM window instead of the rotate sum.
    aux_window: bool,
    finalize: Finalize,
}

impl VariantParams {
    fn for_kind(kind: CicKind) -> Self {
        match kind {
            CicKind::CicX103 => Self {
                entrypoint_bias: 0x100000,
                aux_window: false,
                finalize: Finalize::XorAdd,
            },
            CicKind::CicX105 => Self {
                entrypoint_bias: 0,
                aux_window: true,
                finalize: Finalize::Xor,
            },
            CicKind::CicX106 => Self {
                entrypoint_bias: 0x200000,
                aux_window: false,
                finalize: Finalize::MulAdd,
            },
            _ => Self {
                entrypoint_bias: 0,
                aux_window: false,
                finalize: Finalize::Xor,
            },
        }
    }
}

/// Compute the IPL3 checksum of a big-endian ROM for the given CIC variant.
///
/// Returns the pair of words the boot code would expect to find at header
/// offsets 0x10 and 0x14. The buffer must be at least [`MIN_ROM_SIZE`]
/// bytes.
pub fn calculate_checksum(
    rom_bytes: &[u8],
    kind: CicKind,
) -> Result<(u32, u32), ChecksumError> {
    if rom_bytes.len() < MIN_ROM_SIZE {
        return Err(ChecksumError::BufferNotBigEnough {
            buffer_len: rom_bytes.len(),
            expected_len: MIN_ROM_SIZE,
        });
    }

    log::debug!("checksumming 0x{:X} bytes as CIC {}", WINDOW_SIZE, kind);

    let words = WordView::new(rom_bytes).words(0, MIN_ROM_SIZE / 4)?;
    let params = VariantParams::for_kind(kind);

    // Boot entry point at header offset 0x08, adjusted for the variants
    // that relocate their payload before jumping to it.
    let entrypoint = words[0x08 / 4].wrapping_sub(params.entrypoint_bias);

    let init = kind.seed().wrapping_mul(kind.magic()).wrapping_add(1);

    let mut sum = init; // running word sum
    let mut carries = init; // counts unsigned wraparounds of `sum`
    let mut xor_all = init; // XOR of every word
    let mut rot_sum = init; // sum of rotated words
    let mut cond_xor = init; // XORed with the rotate or the sum, per compare
    let mut delta = init; // variant-specific fold

    // X105 reads its fold words through this virtual pointer.
    let mut aux_ptr = AUX_PTR_BASE;

    // The hardware walks a RAM pointer starting at the entry point;
    // subtracting the entry point back out maps read `i` to ROM offset
    // WINDOW_START + 4 * i.
    let mut ram_ptr = entrypoint;
    for _ in 0..WINDOW_SIZE / 4 {
        let offset = ram_ptr
            .wrapping_sub(entrypoint)
            .wrapping_add(WINDOW_START as u32);
        let w = words[(offset / 4) as usize];

        let next = sum.wrapping_add(w);
        if next < sum {
            carries = carries.wrapping_add(1);
        }

        let rotated = w.rotate_left(w & 0x1F);

        xor_all ^= w;
        rot_sum = rot_sum.wrapping_add(rotated);

        // Compares against the pre-iteration value, but mixes in the
        // already-updated sum.
        if cond_xor < w {
            cond_xor ^= next ^ w;
        } else {
            cond_xor ^= rotated;
        }

        sum = next;

        if params.aux_window {
            let aux_offset = aux_ptr
                .wrapping_sub(AUX_VRAM_BASE)
                .wrapping_add(AUX_ROM_OFFSET);
            let aux = words[(aux_offset / 4) as usize];
            delta = delta.wrapping_add(w ^ aux);
            aux_ptr = aux_ptr.wrapping_add(4) & AUX_PTR_MASK;
        } else {
            delta = delta.wrapping_add(w ^ rot_sum);
        }

        ram_ptr = ram_ptr.wrapping_add(4);
    }

    let pair = match params.finalize {
        Finalize::Xor => (sum ^ carries ^ xor_all, rot_sum ^ cond_xor ^ delta),
        Finalize::XorAdd => (
            (sum ^ carries).wrapping_add(xor_all),
            (rot_sum ^ cond_xor).wrapping_add(delta),
        ),
        Finalize::MulAdd => (
            sum.wrapping_mul(carries).wrapping_add(xor_all),
            rot_sum.wrapping_mul(cond_xor).wrapping_add(delta),
        ),
    };

    Ok(pair)
}

/// Detect the CIC variant of a big-endian ROM, then compute its checksum.
///
/// Surfaces the detection error when the IPL3 blob is not recognized, and
/// the computation error otherwise.
pub fn calculate_checksum_autodetect(
    rom_bytes: &[u8],
) -> Result<(u32, u32), ChecksumError> {
    let kind = detect_cic(rom_bytes)?;
    calculate_checksum(rom_bytes, kind)
}

#[cfg(test)]
#[path = "tests/checksum_tests.rs"]
mod tests;
