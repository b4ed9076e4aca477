//! P10 unpackers: the 20-byte chunk layout and the 4-byte word layout.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::TransferError;
use crate::image::Resolution;

const MASK_10: u32 = 0x3FF;
const STOP_INTERVAL: usize = 1024;

/// Unpack 20-byte chunks into 16 samples each.
///
/// A chunk is a 160-bit big-endian integer carrying sixteen 10-bit fields;
/// fields decode most-significant first. The rolling accumulator walks the
/// chunk's bytes high to low, emitting a sample whenever 10 bits are
/// buffered — the low bits of the accumulator always hold the newest data,
/// so stale high bits shifting out are harmless.
pub(super) fn unpack_chunks(data: &[u8], stop: &dyn Stop) -> Result<Vec<u16>, TransferError> {
    if data.len() % 20 != 0 {
        return Err(TransferError::MalformedLength {
            len: data.len(),
            unit: 20,
        });
    }
    let mut out = Vec::with_capacity(data.len() / 20 * 16);
    for (chunk_idx, chunk) in data.chunks_exact(20).enumerate() {
        if chunk_idx % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        let mut acc: u32 = 0;
        let mut buffered: u32 = 0;
        for &byte in chunk {
            acc = (acc << 8) | u32::from(byte);
            buffered += 8;
            while buffered >= 10 {
                buffered -= 10;
                out.push(((acc >> buffered) & MASK_10) as u16);
            }
        }
        // 20 bytes split evenly into 10-bit fields.
        debug_assert_eq!(buffered, 0);
    }
    Ok(out)
}

/// Unpack 4-byte big-endian words, the inverse of the word-layout packer.
///
/// Every word but the last carries 3 samples; the last carries whatever the
/// grid's pixel count leaves over, sitting in the low fields of `word >> 2`.
pub(super) fn unpack_words(
    data: &[u8],
    resolution: Resolution,
    stop: &dyn Stop,
) -> Result<Vec<u16>, TransferError> {
    if data.len() % 4 != 0 {
        return Err(TransferError::MalformedLength {
            len: data.len(),
            unit: 4,
        });
    }
    let expected = resolution.pixel_count()?;
    let words = data.len() / 4;
    if words != expected.div_ceil(3) {
        return Err(TransferError::ShapeMismatch {
            samples: words * 3,
            width: resolution.width,
            height: resolution.height,
        });
    }
    let mut out = Vec::with_capacity(expected);
    for (word_idx, raw) in data.chunks_exact(4).enumerate() {
        if word_idx % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        let word = u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]) >> 2;
        let count = 3.min(expected - out.len());
        for field in (0..count).rev() {
            out.push(((word >> (10 * field)) & MASK_10) as u16);
        }
    }
    Ok(out)
}
