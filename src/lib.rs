//! # pixelwire
//!
//! Codec for the fixed pixel transfer formats used on a high-speed
//! camera's data channel. Converts between an in-memory intensity image
//! ([`PixelImage`]) and the wire byte streams; the surrounding control
//! protocol, socket handling, and display are deliberately out of scope.
//!
//! ## Transfer formats
//!
//! | Token(s) | Bytes/sample | Byte order | Codec |
//! |---|---|---|---|
//! | `P8`, `P8R`, `8`, `-8` | 1 | big-endian | P8 |
//! | `P16`, `P16R`, `272`, `-272` | 2 | little-endian | P16 |
//! | `P10`, `266` | 10 bits (packed) | big-endian word-oriented | P10 |
//!
//! The "reversed" aliases are accepted as plain synonyms, and the numeric
//! codes are the camera's legacy identifiers. String tokens are
//! case-sensitive.
//!
//! P10 carries two distinct bit layouts that are not inverses of each
//! other; see the [`p10`] module for which operation speaks which layout.
//!
//! ## Resolution transposition
//!
//! The wire stream is ordered by the sensor's transposed dimensions
//! relative to the resolution the camera quotes. [`DecodeRequest::decode`]
//! swaps the two components before codec dispatch, and the decoded image
//! carries the transposed resolution.
//!
//! ## Usage
//!
//! ```
//! use enough::Unstoppable;
//! use pixelwire::{DecodeRequest, EncodeRequest, PixelImage};
//!
//! let image = PixelImage::from_rows(vec![vec![0, 128], vec![255, 64]])?;
//!
//! let bytes = EncodeRequest::new("P8")?.encode(&image, Unstoppable)?;
//! assert_eq!(bytes, [0, 128, 255, 64]);
//!
//! let decoded = DecodeRequest::new(&bytes).decode("P8", (2, 2), Unstoppable)?;
//! assert_eq!(decoded.samples(), image.samples());
//! # Ok::<(), pixelwire::TransferError>(())
//! ```
//!
//! All codec operations are pure, synchronous transforms over
//! caller-supplied buffers; there is no shared mutable state, so concurrent
//! use from multiple threads needs no locking.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod format;
mod image;
mod limits;

mod p8;
pub mod p10;
mod p16;

// Re-exports
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::TransferError;
pub use format::{FormatToken, TransferFormat};
pub use image::{PixelImage, Resolution, rescale};
pub use limits::Limits;
