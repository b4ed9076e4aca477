//! Transfer-format registry: token resolution and codec selection.
//!
//! The camera's control channel identifies a transfer format either by a
//! canonical name (`P8`, `P16`, `P10`), a "reversed" alias (`P8R`, `P16R` —
//! accepted as plain synonyms, no distinct bit order is applied), or a
//! legacy numeric code (`8`, `-8`, `272`, `-272`, `266`). Every accepted
//! token maps to exactly one of the three codecs.

use alloc::string::ToString;
use core::fmt;

use crate::error::TransferError;

/// One of the camera's pixel transfer formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransferFormat {
    /// 1 byte per sample, big-endian.
    P8,
    /// 2 bytes per sample, little-endian.
    P16,
    /// Packed 10-bit samples, big-endian word-oriented.
    P10,
}

/// A format identifier as quoted by the control channel: either a
/// case-sensitive name or a legacy numeric code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatToken<'a> {
    Name(&'a str),
    Code(i32),
}

impl<'a> From<&'a str> for FormatToken<'a> {
    fn from(name: &'a str) -> Self {
        FormatToken::Name(name)
    }
}

impl From<i32> for FormatToken<'_> {
    fn from(code: i32) -> Self {
        FormatToken::Code(code)
    }
}

impl fmt::Display for FormatToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatToken::Name(name) => f.write_str(name),
            FormatToken::Code(code) => write!(f, "{code}"),
        }
    }
}

// Token tables are pure data, fixed at compile time.
const NAME_TOKENS: &[(&str, TransferFormat)] = &[
    ("P8", TransferFormat::P8),
    ("P8R", TransferFormat::P8),
    ("P16", TransferFormat::P16),
    ("P16R", TransferFormat::P16),
    ("P10", TransferFormat::P10),
];

const CODE_TOKENS: &[(i32, TransferFormat)] = &[
    (8, TransferFormat::P8),
    (-8, TransferFormat::P8),
    (272, TransferFormat::P16),
    (-272, TransferFormat::P16),
    (266, TransferFormat::P10),
];

impl TransferFormat {
    /// Resolve a token to its codec.
    ///
    /// Returns [`TransferError::UnsupportedFormat`] for anything outside the
    /// closed token set. String matching is case-sensitive.
    pub fn resolve<'a>(token: impl Into<FormatToken<'a>>) -> Result<Self, TransferError> {
        let token = token.into();
        let found = match token {
            FormatToken::Name(name) => NAME_TOKENS
                .iter()
                .find(|(t, _)| *t == name)
                .map(|(_, f)| *f),
            FormatToken::Code(code) => CODE_TOKENS
                .iter()
                .find(|(t, _)| *t == code)
                .map(|(_, f)| *f),
        };
        found.ok_or_else(|| TransferError::UnsupportedFormat(token.to_string()))
    }

    /// Canonical name of this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::P8 => "P8",
            Self::P16 => "P16",
            Self::P10 => "P10",
        }
    }

    /// Bits used to represent one sample's intensity.
    pub fn bit_depth(&self) -> u8 {
        match self {
            Self::P8 => 8,
            Self::P16 => 16,
            Self::P10 => 10,
        }
    }
}

impl fmt::Display for TransferFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
