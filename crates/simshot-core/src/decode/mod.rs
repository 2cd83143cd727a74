//! Image decoding for simshot.
//!
//! This module provides functionality for:
//! - Decoding PNG (and JPEG) screenshots into an 8-bit pixel buffer
//! - Preserving whether the source carried an alpha channel
//!
//! # Examples
//!
//! ```ignore
//! use simshot_core::decode::decode_image;
//!
//! let png_bytes = std::fs::read("raw.png").unwrap();
//! let image = decode_image(&png_bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod screenshot;
mod types;

pub use screenshot::decode_image;
pub use types::{ColorModel, DecodeError, DecodedImage};
