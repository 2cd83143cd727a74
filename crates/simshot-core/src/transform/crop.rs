//! Chrome cropping in pixel coordinates.
//!
//! Screenshots carry fixed-height device chrome: the status bar and camera
//! housing along the top edge and the home indicator along the bottom edge
//! (in landscape orientation). A [`CropSpec`] names those two margins, and
//! [`CropSpec::rect_for`] turns them into a concrete [`CropRect`] for an image
//! of a given size. The full width is always retained.
//!
//! # Coordinate System
//!
//! - Margins are measured in pixels of the *rotated* image
//! - Origin is top-left corner

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodedImage;

/// Pixels removed from the top: status bar plus camera housing
/// (iPad Pro 13" at 2x scale).
pub const DEFAULT_CROP_TOP: u32 = 130;

/// Pixels removed from the bottom: home indicator (iPad Pro 13" at 2x scale).
pub const DEFAULT_CROP_BOTTOM: u32 = 42;

/// Errors produced by geometric transforms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The margins leave no rows behind.
    #[error(
        "Degenerate crop: top ({top}) + bottom ({bottom}) must be less than image height ({height})"
    )]
    DegenerateCrop { top: u32, bottom: u32, height: u32 },

    /// The image has no columns to keep.
    #[error("Degenerate crop: image width is zero")]
    ZeroWidth,

    /// The rectangle does not fit inside the image.
    #[error("Crop rectangle {rect:?} exceeds image bounds {width}x{height}")]
    CropOutOfBounds {
        rect: CropRect,
        width: u32,
        height: u32,
    },
}

/// Top and bottom margins to strip from a rotated screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSpec {
    /// Rows removed from the top edge.
    pub top: u32,
    /// Rows removed from the bottom edge.
    pub bottom: u32,
}

impl Default for CropSpec {
    fn default() -> Self {
        Self {
            top: DEFAULT_CROP_TOP,
            bottom: DEFAULT_CROP_BOTTOM,
        }
    }
}

impl CropSpec {
    pub fn new(top: u32, bottom: u32) -> Self {
        Self { top, bottom }
    }

    /// Margins that keep the whole image.
    pub fn none() -> Self {
        Self { top: 0, bottom: 0 }
    }

    /// Resolve the margins against an image of `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::DegenerateCrop` unless `top + bottom < height`,
    /// and `TransformError::ZeroWidth` for an image without columns.
    pub fn rect_for(&self, width: u32, height: u32) -> Result<CropRect, TransformError> {
        let removed = u64::from(self.top) + u64::from(self.bottom);
        if removed >= u64::from(height) {
            return Err(TransformError::DegenerateCrop {
                top: self.top,
                bottom: self.bottom,
                height,
            });
        }
        if width == 0 {
            return Err(TransformError::ZeroWidth);
        }

        Ok(CropRect {
            left: 0,
            top: self.top,
            width,
            height: height - self.top - self.bottom,
        })
    }
}

/// A pixel-aligned rectangle inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    #[inline]
    pub fn right(&self) -> u64 {
        u64::from(self.left) + u64::from(self.width)
    }

    #[inline]
    pub fn bottom(&self) -> u64 {
        u64::from(self.top) + u64::from(self.height)
    }

    fn fits(&self, width: u32, height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.right() <= u64::from(width)
            && self.bottom() <= u64::from(height)
    }
}

/// Copy the pixels inside `rect` into a new image. No scaling is performed.
///
/// # Errors
///
/// Returns `TransformError::CropOutOfBounds` if `rect` is empty or extends
/// past the image edges.
///
/// # Example
///
/// ```
/// use simshot_core::decode::{ColorModel, DecodedImage};
/// use simshot_core::transform::{apply_crop, CropSpec};
///
/// let image = DecodedImage::new(100, 60, ColorModel::Rgb8, vec![128u8; 100 * 60 * 3]);
/// let rect = CropSpec::new(10, 5).rect_for(image.width, image.height).unwrap();
/// let cropped = apply_crop(&image, rect).unwrap();
/// assert_eq!((cropped.width, cropped.height), (100, 45));
/// ```
pub fn apply_crop(image: &DecodedImage, rect: CropRect) -> Result<DecodedImage, TransformError> {
    if !rect.fits(image.width, image.height) {
        return Err(TransformError::CropOutOfBounds {
            rect,
            width: image.width,
            height: image.height,
        });
    }

    // Fast path: full crop returns a clone
    if rect.width == image.width && rect.height == image.height {
        return Ok(image.clone());
    }

    let channels = image.color.channels();
    let src_stride = image.row_stride();
    let row_bytes = rect.width as usize * channels;
    let left_offset = rect.left as usize * channels;

    let mut output = Vec::with_capacity(row_bytes * rect.height as usize);

    // Copy pixel data row by row
    for y in rect.top..rect.top + rect.height {
        let start = y as usize * src_stride + left_offset;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    Ok(DecodedImage {
        width: rect.width,
        height: rect.height,
        color: image.color,
        pixels: output,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
