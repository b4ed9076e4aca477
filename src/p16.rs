//! P16 transfer format: two bytes per sample, little-endian.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::TransferError;
use crate::image::Resolution;

const STOP_INTERVAL: usize = 4096;

/// Encode samples in row-major order as little-endian u16 pairs.
pub(crate) fn encode(samples: &[u16], stop: &dyn Stop) -> Result<Vec<u8>, TransferError> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for chunk in samples.chunks(STOP_INTERVAL) {
        stop.check()?;
        for &v in chunk {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }
    Ok(out)
}

/// Decode little-endian u16 pairs and check the count against the
/// resolution.
///
/// A trailing partial element is an error, never silently dropped.
pub(crate) fn decode(
    data: &[u8],
    resolution: Resolution,
    stop: &dyn Stop,
) -> Result<Vec<u16>, TransferError> {
    if data.len() % 2 != 0 {
        return Err(TransferError::MalformedLength {
            len: data.len(),
            unit: 2,
        });
    }
    let expected = resolution.pixel_count()?;
    if data.len() / 2 != expected {
        return Err(TransferError::ShapeMismatch {
            samples: data.len() / 2,
            width: resolution.width,
            height: resolution.height,
        });
    }
    let mut out = Vec::with_capacity(expected);
    for chunk in data.chunks(STOP_INTERVAL * 2) {
        stop.check()?;
        for pair in chunk.chunks_exact(2) {
            out.push(u16::from_le_bytes([pair[0], pair[1]]));
        }
    }
    Ok(out)
}
