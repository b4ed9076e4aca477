//! P10 transfer format: packed 10-bit samples.
//!
//! Two distinct bit layouts exist on this data channel, and they are **not**
//! inverses of one another:
//!
//! - **Word layout** — 3 samples per 32-bit big-endian word, 2 low padding
//!   bits. [`encode_word_layout`] produces it; [`decode_word_layout`] is its
//!   exact inverse.
//! - **Chunk layout** — 16 samples per 20-byte chunk, no padding: the
//!   10-bit fields of the 160-bit big-endian chunk, most-significant field
//!   first. [`decode_chunk_layout`] consumes it.
//!
//! The transmit path packs frames in the word layout while the shipped
//! receive path unpacks in the chunk layout, so feeding the word encoder's
//! output through the chunk decoder does not recover the image. Both
//! behaviors are kept verbatim; callers must pick the layout matching the
//! framing their camera actually speaks. [`crate::DecodeRequest`] wires the
//! chunk layout, [`crate::EncodeRequest`] the word layout.

mod decode;
mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::TransferError;
use crate::image::Resolution;

/// Pack samples into the word layout: row-major groups of up to 3 samples,
/// each group one 32-bit big-endian word.
///
/// Per group the accumulator ORs in each 10-bit-truncated sample and shifts
/// left by 10; the final extra shift is undone and the result shifted left
/// by 2. A full group fills bits 2..32 of the word; a short tail group does
/// fewer OR/shift steps, so its samples land in the low bits and the rest
/// of the word is implicitly zero.
pub fn encode_word_layout(
    samples: &[u16],
    stop: impl Stop,
) -> Result<Vec<u8>, TransferError> {
    encode::pack_words(samples, &stop)
}

/// Unpack the chunk layout: each 20-byte chunk is a 160-bit big-endian
/// integer holding sixteen 10-bit fields, decoded most-significant field
/// first.
///
/// `resolution` is the wire-side grid (no transposition is applied here).
/// Fails with [`TransferError::MalformedLength`] when the input is not a
/// whole number of 20-byte chunks and [`TransferError::ShapeMismatch`] when
/// the field count does not fill the grid.
pub fn decode_chunk_layout(
    data: &[u8],
    resolution: impl Into<Resolution>,
    stop: impl Stop,
) -> Result<Vec<u16>, TransferError> {
    decode(data, resolution.into(), &stop)
}

/// Unpack the word layout: the inverse of [`encode_word_layout`].
///
/// Each 32-bit big-endian word is shifted right by 2 and split into 10-bit
/// fields, most-significant first. The grid's pixel count determines how
/// many samples the final word carries; a short tail group occupies only
/// the low fields of its word.
///
/// `resolution` is the wire-side grid (no transposition is applied here).
/// Fails with [`TransferError::MalformedLength`] when the input is not a
/// whole number of 4-byte words and [`TransferError::ShapeMismatch`] when
/// the word count does not match the grid.
pub fn decode_word_layout(
    data: &[u8],
    resolution: impl Into<Resolution>,
    stop: impl Stop,
) -> Result<Vec<u16>, TransferError> {
    let resolution = resolution.into();
    decode::unpack_words(data, resolution, &stop)
}

/// Registry encode path: the word layout.
pub(crate) fn encode(samples: &[u16], stop: &dyn Stop) -> Result<Vec<u8>, TransferError> {
    encode::pack_words(samples, stop)
}

/// Registry decode path: the chunk layout (the shipped wire-decode
/// behavior).
pub(crate) fn decode(
    data: &[u8],
    resolution: Resolution,
    stop: &dyn Stop,
) -> Result<Vec<u16>, TransferError> {
    let samples = decode::unpack_chunks(data, stop)?;
    let expected = resolution.pixel_count()?;
    if samples.len() != expected {
        return Err(TransferError::ShapeMismatch {
            samples: samples.len(),
            width: resolution.width,
            height: resolution.height,
        });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use enough::Unstoppable;

    #[test]
    fn word_layout_packs_three_samples_into_high_bits() {
        // ((1 << 10 | 2) << 10 | 3) << 2
        let encoded = encode_word_layout(&[1, 2, 3], Unstoppable).unwrap();
        assert_eq!(encoded, vec![0x00, 0x40, 0x20, 0x0C]);
    }

    #[test]
    fn word_layout_short_tail_group_sits_low() {
        // A lone sample does one OR/shift step: (1 << 10 >> 10) << 2 == 4.
        let encoded = encode_word_layout(&[1], Unstoppable).unwrap();
        assert_eq!(encoded, vec![0x00, 0x00, 0x00, 0x04]);

        // Two samples: ((1 << 10 | 2)) << 2 == 0x1008.
        let encoded = encode_word_layout(&[1, 2], Unstoppable).unwrap();
        assert_eq!(encoded, vec![0x00, 0x00, 0x10, 0x08]);
    }

    #[test]
    fn word_layout_truncates_samples_to_ten_bits() {
        // 0x7FF & 0x3FF == 0x3FF
        let encoded = encode_word_layout(&[0x7FF, 0, 0], Unstoppable).unwrap();
        let full = encode_word_layout(&[0x3FF, 0, 0], Unstoppable).unwrap();
        assert_eq!(encoded, full);
    }

    #[test]
    fn word_layout_roundtrips() {
        let samples: Vec<u16> = (0..7).map(|i| i * 123 % 1024).collect();
        let encoded = encode_word_layout(&samples, Unstoppable).unwrap();
        assert_eq!(encoded.len(), 12); // ceil(7/3) words
        let decoded = decode_word_layout(&encoded, (7, 1), Unstoppable).unwrap();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn chunk_layout_reads_fields_most_significant_first() {
        // 0x3FF in the top 10 bits of a 20-byte chunk, zero elsewhere.
        let mut chunk = [0u8; 20];
        chunk[0] = 0xFF;
        chunk[1] = 0xC0;
        let decoded = decode_chunk_layout(&chunk, (16, 1), Unstoppable).unwrap();
        assert_eq!(decoded[0], 0x3FF);
        assert!(decoded[1..].iter().all(|&v| v == 0));
    }

    #[test]
    fn chunk_layout_rejects_partial_chunk() {
        assert!(matches!(
            decode_chunk_layout(&[0u8; 19], (16, 1), Unstoppable),
            Err(TransferError::MalformedLength { len: 19, unit: 20 })
        ));
    }

    #[test]
    fn layouts_are_not_inverses() {
        // 48 samples pack to 64 bytes in the word layout, which the chunk
        // decoder rejects outright (not a whole number of 20-byte chunks).
        let samples: Vec<u16> = (0..48).collect();
        let encoded = encode_word_layout(&samples, Unstoppable).unwrap();
        assert_eq!(encoded.len(), 64);
        assert!(decode_chunk_layout(&encoded, (48, 1), Unstoppable).is_err());

        // 240 bytes is valid in both layouts, yet the chunk decoder reads
        // different field boundaries and different sample counts.
        let samples: Vec<u16> = (0..180).map(|i| i % 1024).collect();
        let encoded = encode_word_layout(&samples, Unstoppable).unwrap();
        assert_eq!(encoded.len(), 240);
        let chunked = decode_chunk_layout(&encoded, (192, 1), Unstoppable).unwrap();
        assert_ne!(&chunked[..180], &samples[..]);
    }
}
