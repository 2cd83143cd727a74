//! Quarter-turn rotation from framebuffer (portrait) to landscape orientation.
//!
//! Simulator captures store the framebuffer in portrait layout. Rotating by
//! exactly 90° counter-clockwise is a pure pixel permutation, so unlike
//! arbitrary-angle rotation no interpolation or background fill is involved
//! and every source pixel lands in exactly one destination pixel.
//!
//! # Mapping
//!
//! For a source of size `(w, h)` the destination is `(h, w)` and:
//! ```text
//! dst(x, y) = src(w - 1 - y, x)
//! ```

use crate::decode::DecodedImage;

/// Compute the bounding box of an image rotated by a quarter turn.
///
/// The canvas expands so nothing is clipped; a 90° rotation simply swaps the
/// dimensions.
///
/// # Example
///
/// ```
/// use simshot_core::transform::rotated_dimensions;
///
/// assert_eq!(rotated_dimensions(2048, 2732), (2732, 2048));
/// ```
#[inline]
pub fn rotated_dimensions(width: u32, height: u32) -> (u32, u32) {
    (height, width)
}

/// Rotate an image 90 degrees counter-clockwise.
///
/// The top-right corner of the source becomes the top-left corner of the
/// result. The color model is preserved.
///
/// # Arguments
///
/// * `image` - Source image in portrait framebuffer orientation
///
/// # Returns
///
/// New `DecodedImage` of size `(image.height, image.width)`.
pub fn rotate_ccw90(image: &DecodedImage) -> DecodedImage {
    let channels = image.color.channels();
    let (src_w, src_h) = (image.width as usize, image.height as usize);
    let (dst_w, dst_h) = rotated_dimensions(image.width, image.height);

    let mut output = vec![0u8; image.pixels.len()];
    let src_stride = src_w * channels;
    let dst_stride = dst_w as usize * channels;

    for dst_y in 0..dst_h as usize {
        // Each destination row is one source column, read top to bottom
        let src_x = src_w - 1 - dst_y;
        let dst_row = dst_y * dst_stride;

        for dst_x in 0..src_h {
            let src_idx = dst_x * src_stride + src_x * channels;
            let dst_idx = dst_row + dst_x * channels;
            output[dst_idx..dst_idx + channels]
                .copy_from_slice(&image.pixels[src_idx..src_idx + channels]);
        }
    }

    DecodedImage {
        width: dst_w,
        height: dst_h,
        color: image.color,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
