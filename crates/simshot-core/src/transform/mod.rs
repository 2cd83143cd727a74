//! Geometric transforms applied to a decoded screenshot.
//!
//! # Transform Order
//!
//! A capture is processed in this order:
//! 1. Rotation (90° counter-clockwise, portrait framebuffer to landscape)
//! 2. Crop (top and bottom chrome, full width kept)
//! 3. Alpha removal (lossy output only)
//!
//! # Coordinate System
//!
//! - Crop margins are in pixels of the rotated image
//! - Origin is top-left corner

mod color;
mod crop;
mod rotation;

pub use color::drop_alpha;
pub use crop::{
    apply_crop, CropRect, CropSpec, TransformError, DEFAULT_CROP_BOTTOM, DEFAULT_CROP_TOP,
};
pub use rotation::{rotate_ccw90, rotated_dimensions};
