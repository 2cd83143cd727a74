//! PNG encoding for lossless output.
//!
//! Uses the `image` crate's PNG encoder at its strongest compression setting
//! with adaptive per-row filtering. Output is a pure function of the pixels.

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{check_buffer, EncodeError, OutputFormat};
use crate::decode::{ColorModel, DecodedImage};

/// Encode an image to PNG bytes, keeping the alpha channel when present.
pub fn encode_png(image: &DecodedImage) -> Result<Vec<u8>, EncodeError> {
    check_buffer(image)?;

    let color = match image.color {
        ColorModel::Rgb8 => ExtendedColorType::Rgb8,
        ColorModel::Rgba8 => ExtendedColorType::Rgba8,
    };

    let mut buffer = Cursor::new(Vec::new());
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilterType::Adaptive);

    encoder
        .write_image(&image.pixels, image.width, image.height, color)
        .map_err(|e| EncodeError::EncodingFailed(OutputFormat::Png, e.to_string()))?;

    Ok(buffer.into_inner())
}
