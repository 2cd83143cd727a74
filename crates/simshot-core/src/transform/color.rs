//! Color model normalization ahead of lossy encoding.

use crate::decode::{ColorModel, DecodedImage};

/// Strip the alpha channel, producing an `Rgb8` image.
///
/// Color values are kept as stored; nothing is composited against a
/// background, so fully transparent pixels keep whatever RGB they carried
/// (black for typical captures). `Rgb8` input is returned unchanged.
pub fn drop_alpha(image: DecodedImage) -> DecodedImage {
    if !image.color.has_alpha() {
        return image;
    }

    let mut pixels = Vec::with_capacity(image.pixel_count() as usize * 3);
    for px in image.pixels.chunks_exact(4) {
        pixels.extend_from_slice(&px[..3]);
    }

    DecodedImage {
        width: image.width,
        height: image.height,
        color: ColorModel::Rgb8,
        pixels,
    }
}
