//! Output format selection and encoder errors.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted lossy quality.
pub const MIN_QUALITY: u32 = 1;

/// Highest accepted lossy quality.
pub const MAX_QUALITY: u32 = 100;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Lossy quality outside 1..=100
    #[error("Quality {0} is out of range (expected 1-100)")]
    QualityOutOfRange(u32),

    /// The target codec cannot store this color model
    #[error("{format} output cannot store {color:?} pixels")]
    UnsupportedColorModel {
        format: OutputFormat,
        color: crate::decode::ColorModel,
    },

    /// The codec reported a failure
    #[error("{0} encoding failed: {1}")]
    EncodingFailed(OutputFormat, String),
}

/// Encoded output format, chosen from the destination file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy, quality-controlled.
    Jpeg,
    /// Lossless.
    Png,
}

impl OutputFormat {
    /// Select the format from a path's extension.
    ///
    /// `.jpg` and `.jpeg` (any case) select JPEG. Every other extension, or
    /// none at all, selects PNG. The input's format plays no part.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
                OutputFormat::Jpeg
            }
            _ => OutputFormat::Png,
        }
    }

    /// Whether the quality setting applies.
    #[inline]
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }

    /// Matching `image` crate format.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Png => image::ImageFormat::Png,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Jpeg => f.write_str("JPEG"),
            OutputFormat::Png => f.write_str("PNG"),
        }
    }
}

/// Check a lossy quality value and narrow it to the encoder's type.
///
/// # Errors
///
/// Returns `EncodeError::QualityOutOfRange` for values outside 1..=100.
pub fn validate_quality(quality: u32) -> Result<u8, EncodeError> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(EncodeError::QualityOutOfRange(quality));
    }
    Ok(quality as u8)
}
