use alloc::vec::Vec;
use enough::Stop;

use crate::error::TransferError;
use crate::format::{FormatToken, TransferFormat};
use crate::image::PixelImage;
use crate::{p8, p10, p16};

/// An encode operation: resolves the format token up front, then packs an
/// image's samples into the wire byte stream.
///
/// ```
/// use enough::Unstoppable;
/// use pixelwire::{EncodeRequest, PixelImage};
///
/// let image = PixelImage::from_flat(vec![0, 1, 65535]);
/// let bytes = EncodeRequest::new("P16")?.encode(&image, Unstoppable)?;
/// assert_eq!(bytes, [0x00, 0x00, 0x01, 0x00, 0xFF, 0xFF]);
/// # Ok::<(), pixelwire::TransferError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: TransferFormat,
}

impl EncodeRequest {
    /// Resolve `token` against the format registry.
    ///
    /// Fails with [`TransferError::UnsupportedFormat`] before any work is
    /// done.
    pub fn new<'a>(token: impl Into<FormatToken<'a>>) -> Result<Self, TransferError> {
        Ok(Self {
            format: TransferFormat::resolve(token)?,
        })
    }

    /// The resolved transfer format.
    pub fn format(&self) -> TransferFormat {
        self.format
    }

    /// Encode `image`'s samples in row-major order.
    pub fn encode(&self, image: &PixelImage, stop: impl Stop) -> Result<Vec<u8>, TransferError> {
        let samples = image.samples();
        match self.format {
            TransferFormat::P8 => p8::encode(samples, &stop),
            TransferFormat::P16 => p16::encode(samples, &stop),
            TransferFormat::P10 => p10::encode(samples, &stop),
        }
    }
}
