//! The in-memory image entity exchanged with the codec.

use alloc::vec::Vec;
use core::fmt;

use crate::error::TransferError;

/// A `(width, height)` pair describing a pixel grid's dimensions.
///
/// The wire-side dimension order is the transpose of the resolution the
/// camera quotes; see [`crate::DecodeRequest::decode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Swap the two components.
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Total pixel count, checked against the address space.
    pub(crate) fn pixel_count(self) -> Result<usize, TransferError> {
        let pixels = u64::from(self.width) * u64::from(self.height);
        usize::try_from(pixels).map_err(|_| TransferError::DimensionsTooLarge {
            width: self.width,
            height: self.height,
        })
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An intensity image: a flat row-major sample grid plus its resolution.
///
/// Samples are `u16`, wide enough for every transfer format's bit depth
/// (8, 10, or 16 bits). The entity does not enforce a value range — encoders
/// truncate to their format's depth during packing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelImage {
    samples: Vec<u16>,
    resolution: Resolution,
}

impl PixelImage {
    /// Construct from a flat row-major sample buffer and its resolution.
    ///
    /// Returns [`TransferError::ShapeMismatch`] if the buffer does not
    /// reshape exactly into the resolution.
    pub fn new(samples: Vec<u16>, resolution: impl Into<Resolution>) -> Result<Self, TransferError> {
        let resolution: Resolution = resolution.into();
        let expected = resolution.pixel_count()?;
        if samples.len() != expected {
            return Err(TransferError::ShapeMismatch {
                samples: samples.len(),
                width: resolution.width,
                height: resolution.height,
            });
        }
        Ok(Self {
            samples,
            resolution,
        })
    }

    /// Construct from a 2-D row grid; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<u16>>) -> Result<Self, TransferError> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for row in &rows {
            if row.len() != width as usize {
                return Err(TransferError::ShapeMismatch {
                    samples: rows.iter().map(|r| r.len()).sum(),
                    width,
                    height,
                });
            }
            samples.extend_from_slice(row);
        }
        Ok(Self {
            samples,
            resolution: Resolution::new(width, height),
        })
    }

    /// Construct from a one-dimensional buffer, interpreted as a single row:
    /// the resolution becomes `(length, 1)`.
    pub fn from_flat(samples: Vec<u16>) -> Self {
        let resolution = Resolution::new(samples.len() as u32, 1);
        Self {
            samples,
            resolution,
        }
    }

    /// Read a grayscale image file into a `PixelImage`.
    ///
    /// Color inputs are converted to single-channel luma first. 8-bit
    /// sample values carry over unscaled.
    #[cfg(feature = "file-io")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TransferError> {
        let luma = image::open(path)?.into_luma8();
        let resolution = Resolution::new(luma.width(), luma.height());
        let samples = luma.into_raw().into_iter().map(u16::from).collect();
        Self::new(samples, resolution)
    }

    /// Fill a grid of the given resolution with independent uniform samples
    /// in `[0, 256)`.
    #[cfg(feature = "rand")]
    pub fn random(resolution: impl Into<Resolution>) -> Result<Self, TransferError> {
        use rand::Rng;

        let resolution: Resolution = resolution.into();
        let count = resolution.pixel_count()?;
        let mut rng = rand::thread_rng();
        let samples = (0..count).map(|_| rng.gen_range(0..256u16)).collect();
        Ok(Self {
            samples,
            resolution,
        })
    }

    /// Encode this image as the transfer format named by `token`.
    ///
    /// Convenience wrapper over [`crate::EncodeRequest`].
    pub fn to_transfer_format<'a>(
        &self,
        token: impl Into<crate::FormatToken<'a>>,
    ) -> Result<Vec<u8>, TransferError> {
        crate::EncodeRequest::new(token)?.encode(self, enough::Unstoppable)
    }

    /// Decode wire bytes as the transfer format named by `token`, at the
    /// resolution the camera advertised.
    ///
    /// Convenience wrapper over [`crate::DecodeRequest`]; the resolution is
    /// transposed before codec dispatch (wire data is ordered by the
    /// sensor's transposed dimensions).
    pub fn from_transfer_format<'a>(
        token: impl Into<crate::FormatToken<'a>>,
        raw_bytes: &[u8],
        resolution: impl Into<Resolution>,
    ) -> Result<Self, TransferError> {
        crate::DecodeRequest::new(raw_bytes).decode(token, resolution, enough::Unstoppable)
    }

    /// The flat row-major sample buffer.
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Take ownership of the sample buffer.
    pub fn into_samples(self) -> Vec<u16> {
        self.samples
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    pub(crate) fn from_decoded(samples: Vec<u16>, resolution: Resolution) -> Self {
        Self {
            samples,
            resolution,
        }
    }
}

/// Rescale a sample grid so its maximum maps to `2^(bit_depth - 1)`.
///
/// Export helper for writing intensity data into 8-bit-oriented display and
/// file formats; not part of the wire codec. Every sample is divided by the
/// grid maximum and multiplied by `2^(bit_depth - 1)`, in integer
/// arithmetic.
///
/// Returns [`TransferError::ZeroMaximum`] when the grid is empty or all
/// zero, and [`TransferError::InvalidBitDepth`] outside `1..=16`.
pub fn rescale(samples: &[u16], bit_depth: u8) -> Result<Vec<u16>, TransferError> {
    if !(1..=16).contains(&bit_depth) {
        return Err(TransferError::InvalidBitDepth(bit_depth));
    }
    let max = samples.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Err(TransferError::ZeroMaximum);
    }
    let scale = 1u32 << (bit_depth - 1);
    Ok(samples
        .iter()
        .map(|&v| (u32::from(v) * scale / u32::from(max)) as u16)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn flat_input_becomes_single_row() {
        let img = PixelImage::from_flat(vec![1, 2, 3, 4]);
        assert_eq!(img.resolution(), Resolution::new(4, 1));
        assert_eq!(img.samples(), &[1, 2, 3, 4]);
    }

    #[test]
    fn new_rejects_wrong_sample_count() {
        let err = PixelImage::new(vec![0; 5], (2, 3)).unwrap_err();
        assert!(matches!(err, TransferError::ShapeMismatch { samples: 5, .. }));
    }

    #[test]
    fn from_rows_rejects_ragged_grid() {
        let err = PixelImage::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, TransferError::ShapeMismatch { .. }));
    }

    #[test]
    fn rescale_maps_maximum_to_power_of_two() {
        let scaled = rescale(&[0, 50, 100], 8).unwrap();
        assert_eq!(scaled, vec![0, 64, 128]);
    }

    #[test]
    fn rescale_rejects_all_zero_grid() {
        assert!(matches!(
            rescale(&[0, 0, 0], 8),
            Err(TransferError::ZeroMaximum)
        ));
        assert!(matches!(rescale(&[], 8), Err(TransferError::ZeroMaximum)));
    }

    #[test]
    fn rescale_rejects_bad_bit_depth() {
        assert!(matches!(
            rescale(&[1], 0),
            Err(TransferError::InvalidBitDepth(0))
        ));
        assert!(matches!(
            rescale(&[1], 17),
            Err(TransferError::InvalidBitDepth(17))
        ));
    }
}
