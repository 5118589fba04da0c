//! Error types for BC1 encode operations.

use thiserror::Error;

/// Errors reported when the caller violates the buffer or dimension contract of an encode call.
///
/// All checks run before the first block is written, so a failed call leaves the
/// output buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Width or height is zero.
    #[error("Invalid dimensions {width}x{height}: width and height must be at least 1.")]
    ZeroDimension {
        /// The requested width in pixels
        width: u32,
        /// The requested height in pixels
        height: u32,
    },

    /// The source buffer holds fewer than `width * height * 4` bytes.
    #[error("Source buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    SourceTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The output buffer cannot hold every block of the image.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The buffer sizes implied by the dimensions do not fit in `usize`.
    #[error("Image dimensions {width}x{height} overflow the addressable buffer size.")]
    SizeOverflow {
        /// The requested width in pixels
        width: u32,
        /// The requested height in pixels
        height: u32,
    },
}

impl EncodeError {
    /// Returns true when the error is a caller contract violation.
    ///
    /// This holds for every variant: the encode path itself has no runtime failure mode.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            EncodeError::ZeroDimension { .. }
                | EncodeError::SourceTooSmall { .. }
                | EncodeError::OutputBufferTooSmall { .. }
                | EncodeError::SizeOverflow { .. }
        )
    }
}
