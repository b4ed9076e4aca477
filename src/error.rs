use alloc::string::String;
use enough::StopReason;

/// Errors from transfer-format encoding and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransferError {
    #[error("unsupported transfer format token: {0}")]
    UnsupportedFormat(String),

    #[error("{samples} samples do not fill a {width}x{height} image")]
    ShapeMismatch {
        samples: usize,
        width: u32,
        height: u32,
    },

    #[error("input length {len} is not a multiple of the {unit}-byte element size")]
    MalformedLength { len: usize, unit: usize },

    #[error("cannot rescale a grid whose maximum sample is zero")]
    ZeroMaximum,

    #[error("bit depth {0} is outside 1..=16")]
    InvalidBitDepth(u8),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "file-io")]
    #[error("image file error: {0}")]
    ImageFile(#[from] image::ImageError),
}

impl From<StopReason> for TransferError {
    fn from(r: StopReason) -> Self {
        TransferError::Cancelled(r)
    }
}
