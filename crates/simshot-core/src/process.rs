//! The screenshot pipeline: decode, rotate, crop, encode, write.
//!
//! [`process_screenshot`] is the file-based entry point used by the CLI.
//! [`transform_bytes`] runs the same pipeline entirely in memory.
//!
//! Each call owns its image from decode to encode; nothing is shared between
//! calls, so independent input/output pairs may be processed in parallel by
//! the caller without coordination.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::{encode_image, validate_quality, EncodeError, OutputFormat};
use crate::transform::{apply_crop, drop_alpha, rotate_ccw90, CropSpec, TransformError};

/// Default lossy quality.
pub const DEFAULT_QUALITY: u32 = 90;

/// Errors surfaced by the pipeline. Every variant aborts the whole call.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// A codec this pipeline relies on was compiled out of the `image` crate.
    #[error("{0} codec support is not available in this build")]
    CodecUnavailable(&'static str),

    /// The input path does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination could not be created or replaced.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Tunables for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Lossy quality (1-100). Ignored for lossless output.
    pub quality: u32,
    /// Chrome margins, in pixels of the rotated image.
    pub crop: CropSpec,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            crop: CropSpec::default(),
        }
    }
}

/// Result of an in-memory pipeline run.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// Final width, after rotation and crop.
    pub width: u32,
    /// Final height, after rotation and crop.
    pub height: u32,
    pub format: OutputFormat,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
}

/// Summary of a completed file-based run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
    pub bytes_written: usize,
    pub options: ProcessOptions,
}

/// Fail early if the codecs the pipeline needs are missing.
///
/// PNG must be readable (simulator captures) and writable. JPEG output goes
/// through `jpeg-encoder`, which is always built in.
pub fn ensure_codecs() -> Result<(), ProcessError> {
    let png = OutputFormat::Png.to_image_format();
    if !png.reading_enabled() || !png.writing_enabled() {
        return Err(ProcessError::CodecUnavailable("PNG"));
    }
    Ok(())
}

/// Rotate a portrait capture to landscape and strip its chrome.
///
/// For lossy output the alpha channel is dropped as well, so the returned
/// image is ready for [`encode_image`].
pub fn orient_and_crop(
    image: &DecodedImage,
    crop: CropSpec,
    format: OutputFormat,
) -> Result<DecodedImage, ProcessError> {
    let rotated = rotate_ccw90(image);
    debug!(width = rotated.width, height = rotated.height, "rotated to landscape");

    let rect = crop.rect_for(rotated.width, rotated.height)?;
    let cropped = apply_crop(&rotated, rect)?;
    debug!(
        top = crop.top,
        bottom = crop.bottom,
        width = cropped.width,
        height = cropped.height,
        "cropped chrome"
    );

    if format.is_lossy() && cropped.color.has_alpha() {
        debug!("dropping alpha channel for lossy output");
        return Ok(drop_alpha(cropped));
    }
    Ok(cropped)
}

/// Run the whole pipeline on encoded bytes.
///
/// # Errors
///
/// Quality is checked before anything is decoded when `format` is lossy.
/// Decode, crop and encode failures are returned as the matching
/// [`ProcessError`] variant.
pub fn transform_bytes(
    bytes: &[u8],
    format: OutputFormat,
    options: &ProcessOptions,
) -> Result<ProcessedImage, ProcessError> {
    // Narrowed once here; lossless encoders ignore the value
    let quality = if format.is_lossy() {
        validate_quality(options.quality)?
    } else {
        0
    };

    let decoded = decode_image(bytes)?;
    debug!(
        width = decoded.width,
        height = decoded.height,
        color = ?decoded.color,
        "decoded source"
    );

    let image = orient_and_crop(&decoded, options.crop, format)?;
    drop(decoded);

    let encoded = encode_image(&image, format, quality)?;

    Ok(ProcessedImage {
        width: image.width,
        height: image.height,
        format,
        bytes: encoded,
    })
}

/// Process a simulator screenshot file.
///
/// The output format follows `output`'s extension (see
/// [`OutputFormat::from_path`]). Returns the final `(width, height)`.
///
/// The destination is replaced atomically: bytes are written to a temporary
/// file next to it and renamed into place only once encoding succeeded. A
/// failed run leaves any previous output untouched.
pub fn process_screenshot(
    input: &Path,
    output: &Path,
    options: &ProcessOptions,
) -> Result<(u32, u32), ProcessError> {
    let report = process_screenshot_with_report(input, output, options)?;
    Ok((report.width, report.height))
}

/// Like [`process_screenshot`], returning a full [`ProcessReport`].
pub fn process_screenshot_with_report(
    input: &Path,
    output: &Path,
    options: &ProcessOptions,
) -> Result<ProcessReport, ProcessError> {
    if !input.exists() {
        return Err(ProcessError::InputNotFound(input.to_path_buf()));
    }

    let bytes = fs::read(input).map_err(|source| ProcessError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let format = OutputFormat::from_path(output);
    debug!(input = %input.display(), %format, bytes = bytes.len(), "read source");

    let processed = transform_bytes(&bytes, format, options)?;

    write_atomically(output, &processed.bytes).map_err(|source| ProcessError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        output = %output.display(),
        width = processed.width,
        height = processed.height,
        bytes = processed.bytes.len(),
        "wrote {format}"
    );

    Ok(ProcessReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        format,
        width: processed.width,
        height: processed.height,
        bytes_written: processed.bytes.len(),
        options: *options,
    })
}

/// Write `bytes` to a sibling temporary file, then rename it over `path`.
fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".simshot-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Match a freshly created file rather than tempfile's owner-only mode
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    let mut tmp: NamedTempFile = builder.tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
