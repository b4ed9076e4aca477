use enough::Stop;

use crate::error::TransferError;
use crate::format::{FormatToken, TransferFormat};
use crate::image::{PixelImage, Resolution};
use crate::limits::Limits;
use crate::{p8, p10, p16};

/// A decode operation over fully-received wire bytes.
///
/// The resolution passed to [`decode`](Self::decode) is the one the camera
/// advertises; the wire stream is ordered by the sensor's transposed
/// dimensions, so the two components are swapped before codec dispatch and
/// the decoded image carries the transposed resolution.
///
/// ```
/// use enough::Unstoppable;
/// use pixelwire::DecodeRequest;
///
/// let image = DecodeRequest::new(&[0x00, 0x00, 0x01, 0x00, 0xFF, 0xFF])
///     .decode("P16", (3, 1), Unstoppable)?;
/// assert_eq!(image.samples(), &[0, 1, 65535]);
/// assert_eq!((image.width(), image.height()), (1, 3));
/// # Ok::<(), pixelwire::TransferError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource limits, checked against the wire-side dimensions
    /// before any allocation.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the bytes as the transfer format named by `token` at the
    /// camera-quoted `resolution`.
    pub fn decode<'t>(
        self,
        token: impl Into<FormatToken<'t>>,
        resolution: impl Into<Resolution>,
        stop: impl Stop,
    ) -> Result<PixelImage, TransferError> {
        let format = TransferFormat::resolve(token)?;
        // Wire data is ordered by the sensor's transposed dimensions.
        let quoted: Resolution = resolution.into();
        let wire = quoted.transposed();

        if let Some(limits) = self.limits {
            limits.check(wire.width, wire.height)?;
            let sample_bytes = wire
                .pixel_count()?
                .checked_mul(2)
                .ok_or(TransferError::DimensionsTooLarge {
                    width: wire.width,
                    height: wire.height,
                })?;
            limits.check_memory(sample_bytes)?;
        }
        stop.check()?;

        let samples = match format {
            TransferFormat::P8 => p8::decode(self.data, wire, &stop)?,
            TransferFormat::P16 => p16::decode(self.data, wire, &stop)?,
            TransferFormat::P10 => p10::decode(self.data, wire, &stop)?,
        };
        Ok(PixelImage::from_decoded(samples, wire))
    }
}
