//! P8 transfer format: one unsigned byte per sample.
//!
//! Byte order is nominally big-endian, which is immaterial for a single
//! byte but keeps the wire table symmetric with the other formats.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::TransferError;
use crate::image::Resolution;

const STOP_INTERVAL: usize = 4096;

/// Encode samples in row-major order, one byte each (truncated to 0-255).
pub(crate) fn encode(samples: &[u16], stop: &dyn Stop) -> Result<Vec<u8>, TransferError> {
    let mut out = Vec::with_capacity(samples.len());
    for chunk in samples.chunks(STOP_INTERVAL) {
        stop.check()?;
        out.extend(chunk.iter().map(|&v| v as u8));
    }
    Ok(out)
}

/// Decode one sample per input byte and check the count against the
/// resolution.
pub(crate) fn decode(
    data: &[u8],
    resolution: Resolution,
    stop: &dyn Stop,
) -> Result<Vec<u16>, TransferError> {
    let expected = resolution.pixel_count()?;
    if data.len() != expected {
        return Err(TransferError::ShapeMismatch {
            samples: data.len(),
            width: resolution.width,
            height: resolution.height,
        });
    }
    let mut out = Vec::with_capacity(expected);
    for chunk in data.chunks(STOP_INTERVAL) {
        stop.check()?;
        out.extend(chunk.iter().map(|&b| u16::from(b)));
    }
    Ok(out)
}
