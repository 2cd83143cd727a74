//! Screenshot decoding via the `image` crate.

use std::io::Cursor;

use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage};

/// Decode an encoded image (PNG, JPEG) from bytes.
///
/// The container format is sniffed from the content, never from a file name.
/// Images with an alpha channel decode to [`ColorModel::Rgba8`], everything
/// else to [`ColorModel::Rgb8`]. Gray and 16-bit sources are widened or
/// narrowed to 8-bit RGB(A).
///
/// No EXIF orientation is applied: simulator captures are stored in
/// framebuffer orientation and the caller rotates explicitly.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes match no enabled codec.
/// Returns `DecodeError::CorruptedFile` if the codec rejects the data.
///
/// [`ColorModel::Rgba8`]: super::ColorModel::Rgba8
/// [`ColorModel::Rgb8`]: super::ColorModel::Rgb8
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(from_dynamic(img))
}

fn from_dynamic(img: DynamicImage) -> DecodedImage {
    if img.color().has_alpha() {
        DecodedImage::from_rgba_image(img.into_rgba8())
    } else {
        DecodedImage::from_rgb_image(img.into_rgb8())
    }
}
