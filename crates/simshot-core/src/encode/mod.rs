//! Image encoding for simshot.
//!
//! This module provides functionality for:
//! - Choosing the output format from a destination path
//! - Encoding images to JPEG with a validated quality setting
//! - Encoding images to PNG with maximum compression
//!
//! # Examples
//!
//! ```ignore
//! use simshot_core::encode::{encode_image, OutputFormat};
//!
//! let format = OutputFormat::from_path("clean.jpg".as_ref());
//! let bytes = encode_image(&image, format, 90).unwrap();
//! println!("Encoded {} bytes", bytes.len());
//! ```

mod jpeg;
mod png;
mod types;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{validate_quality, EncodeError, OutputFormat, MAX_QUALITY, MIN_QUALITY};

use crate::decode::DecodedImage;

/// Encode `image` in `format`.
///
/// `quality` is used for JPEG only, which checks it; PNG ignores it entirely.
pub fn encode_image(
    image: &DecodedImage,
    format: OutputFormat,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Jpeg => encode_jpeg(image, quality),
        OutputFormat::Png => encode_png(image),
    }
}

/// Validate dimensions and buffer length before handing pixels to a codec.
fn check_buffer(image: &DecodedImage) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let expected = image.expected_len();
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}
