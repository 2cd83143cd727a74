//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// I/O error while reading the encoded bytes.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Pixel layout of a [`DecodedImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorModel {
    /// 8-bit RGB, 3 bytes per pixel.
    #[default]
    Rgb8,
    /// 8-bit RGB with straight alpha, 4 bytes per pixel.
    Rgba8,
}

impl ColorModel {
    /// Bytes per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ColorModel::Rgb8 => 3,
            ColorModel::Rgba8 => 4,
        }
    }

    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorModel::Rgba8)
    }
}

/// A decoded image with interleaved 8-bit pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Layout of `pixels`.
    pub color: ColorModel,
    /// Pixel data in row-major order.
    /// Length should be width * height * color.channels().
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, color: ColorModel, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * color.channels(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            color,
            pixels,
        }
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            color: ColorModel::Rgb8,
            pixels: img.into_raw(),
        }
    }

    /// Create a DecodedImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            color: ColorModel::Rgba8,
            pixels: img.into_raw(),
        }
    }

    /// Bytes in a single row of pixels.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.color.channels()
    }

    /// Expected pixel buffer length for the current dimensions.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.row_stride() * self.height as usize
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
