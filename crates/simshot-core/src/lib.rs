//! Simshot Core - simulator screenshot processing
//!
//! Turns a raw simulator capture (portrait framebuffer orientation) into a
//! landscape, chrome-free PNG or JPEG suitable for documentation.
//!
//! The pipeline is a single synchronous pass:
//! decode → rotate 90° CCW → crop top/bottom chrome → drop alpha (JPEG only)
//! → encode → atomic write.

pub mod decode;
pub mod encode;
pub mod process;
pub mod transform;

pub use decode::{decode_image, ColorModel, DecodeError, DecodedImage};
pub use encode::{encode_image, EncodeError, OutputFormat};
pub use process::{
    ensure_codecs, orient_and_crop, process_screenshot, process_screenshot_with_report,
    transform_bytes, ProcessError, ProcessOptions, ProcessReport, ProcessedImage,
    DEFAULT_QUALITY,
};
pub use transform::{
    apply_crop, drop_alpha, rotate_ccw90, CropRect, CropSpec, TransformError,
    DEFAULT_CROP_BOTTOM, DEFAULT_CROP_TOP,
};
