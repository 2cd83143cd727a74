//! JPEG encoding for lossy output.
//!
//! This module provides JPEG encoding using the `jpeg-encoder` crate with
//! optimized Huffman tables, which shrinks output without touching pixel
//! data. JPEG has no alpha channel, so callers must flatten `Rgba8` images
//! first (see [`crate::transform::drop_alpha`]).

use jpeg_encoder::{ColorType, Encoder};

use super::{check_buffer, validate_quality, EncodeError, OutputFormat};
use crate::decode::{ColorModel, DecodedImage};

/// Encode an RGB image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - `Rgb8` image to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for documentation screenshots (default: 90)
/// * 60-80: Medium quality, acceptable for web previews
/// * Below 60: Low quality, visible artifacts around text
pub fn encode_jpeg(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let quality = validate_quality(u32::from(quality))?;

    if image.color != ColorModel::Rgb8 {
        return Err(EncodeError::UnsupportedColorModel {
            format: OutputFormat::Jpeg,
            color: image.color,
        });
    }
    check_buffer(image)?;

    // JPEG frame headers store dimensions as 16-bit values
    let (width, height) = match (u16::try_from(image.width), u16::try_from(image.height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(EncodeError::EncodingFailed(
                OutputFormat::Jpeg,
                format!("{}x{} exceeds 65535x65535", image.width, image.height),
            ))
        }
    };

    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, quality);
    encoder.set_optimized_huffman_tables(true);

    encoder
        .encode(&image.pixels, width, height, ColorType::Rgb)
        .map_err(|e| EncodeError::EncodingFailed(OutputFormat::Jpeg, e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32) -> DecodedImage {
        DecodedImage::new(
            width,
            height,
            ColorModel::Rgb8,
            vec![128u8; (width * height * 3) as usize],
        )
    }

    fn gradient(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(128u8);
            }
        }
        DecodedImage::new(width, height, ColorModel::Rgb8, pixels)
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let jpeg_bytes = encode_jpeg(&gray(100, 100), 90).unwrap();

        // Check JPEG magic bytes (SOI marker)
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);

        // Check JPEG ends with EOI marker
        let len = jpeg_bytes.len();
        assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_rejects_quality_zero() {
        let result = encode_jpeg(&gray(10, 10), 0);
        assert!(matches!(result, Err(EncodeError::QualityOutOfRange(0))));
    }

    #[test]
    fn test_encode_jpeg_rejects_quality_above_100() {
        let result = encode_jpeg(&gray(10, 10), 101);
        assert!(matches!(result, Err(EncodeError::QualityOutOfRange(101))));
    }

    #[test]
    fn test_encode_jpeg_rejects_alpha() {
        let img = DecodedImage::new(2, 2, ColorModel::Rgba8, vec![0u8; 16]);
        let result = encode_jpeg(&img, 90);
        assert!(matches!(
            result,
            Err(EncodeError::UnsupportedColorModel {
                color: ColorModel::Rgba8,
                ..
            })
        ));
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let img = DecodedImage {
            width: 100,
            height: 100,
            color: ColorModel::Rgb8,
            pixels: vec![128u8; 99 * 100 * 3], // One row short
        };
        let result = encode_jpeg(&img, 90);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_jpeg_zero_height() {
        let img = DecodedImage {
            width: 100,
            height: 0,
            color: ColorModel::Rgb8,
            pixels: vec![],
        };
        let result = encode_jpeg(&img, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_jpeg_deterministic() {
        let img = gradient(40, 30);
        assert_eq!(encode_jpeg(&img, 75).unwrap(), encode_jpeg(&img, 75).unwrap());
    }

    #[test]
    fn test_encode_jpeg_uses_optimized_huffman_tables() {
        let img = gradient(320, 240);

        let mut baseline = Vec::new();
        Encoder::new(&mut baseline, 90)
            .encode(&img.pixels, 320, 240, ColorType::Rgb)
            .unwrap();

        let optimized = encode_jpeg(&img, 90).unwrap();
        assert!(
            optimized.len() < baseline.len(),
            "optimized={} baseline={}",
            optimized.len(),
            baseline.len()
        );
    }

    #[test]
    fn test_encode_jpeg_oversized_dimensions() {
        let img = DecodedImage {
            width: 70_000,
            height: 1,
            color: ColorModel::Rgb8,
            pixels: vec![0u8; 70_000 * 3],
        };
        let result = encode_jpeg(&img, 90);
        assert!(matches!(result, Err(EncodeError::EncodingFailed(OutputFormat::Jpeg, _))));
    }

    #[test]
    fn test_encode_jpeg_decodes_to_same_size() {
        let jpeg = encode_jpeg(&gradient(37, 21), 85).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (37, 21));
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        let img = gradient(64, 64);

        let low_q = encode_jpeg(&img, 10).unwrap();
        let high_q = encode_jpeg(&img, 100).unwrap();

        assert!(high_q.len() > low_q.len());
    }
}
