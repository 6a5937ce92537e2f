//! Encoding the working image for save and export.
//!
//! The output format follows the target file extension. JPEG quality is
//! configurable; the lossless formats ignore it.

use std::io::Cursor;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::tiff::TiffEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::RasterImage;

/// Errors that can occur while encoding or saving.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The target extension does not name a supported format
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// There is no working image to write
    #[error("No image to save")]
    NothingToSave,

    /// The encoder rejected the image
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// The target path could not be written
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Formats the editor can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl OutputFormat {
    /// Match a file extension, case-insensitively and without the dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "bmp" => Some(OutputFormat::Bmp),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::UnsupportedFormat` for a missing or unknown
    /// extension.
    pub fn from_path(path: &Path) -> Result<Self, EncodeError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| {
            EncodeError::UnsupportedFormat(if ext.is_empty() {
                format!("no extension on {}", path.display())
            } else {
                ext.to_string()
            })
        })
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tiff",
        }
    }
}

/// Encode an image to bytes in the given format.
///
/// `jpeg_quality` is clamped to 1-100 and only used for JPEG.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - The pixel data length doesn't match width * height * 3
/// - Encoding fails internally
pub fn encode_image(
    image: &RasterImage,
    format: OutputFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = width as usize * height as usize * 3;
    if image.byte_size() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.byte_size(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let pixels = image.pixels.as_slice();
    let color = ExtendedColorType::Rgb8;

    let result = match format {
        OutputFormat::Png => PngEncoder::new(&mut buffer).write_image(pixels, width, height, color),
        OutputFormat::Jpeg => {
            JpegEncoder::new_with_quality(&mut buffer, jpeg_quality.clamp(1, 100))
                .write_image(pixels, width, height, color)
        }
        OutputFormat::Bmp => BmpEncoder::new(&mut buffer).write_image(pixels, width, height, color),
        OutputFormat::Tiff => TiffEncoder::new(&mut buffer).write_image(pixels, width, height, color),
    };
    result.map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an image and write it to `path`, choosing the format from the
/// extension.
///
/// Nothing is written when encoding fails.
pub fn encode_file(
    image: &RasterImage,
    path: impl AsRef<Path>,
    jpeg_quality: u8,
) -> Result<OutputFormat, EncodeError> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let bytes = encode_image(image, format, jpeg_quality)?;

    std::fs::write(path, bytes)
        .map_err(|e| EncodeError::IoError(format!("{}: {}", path.display(), e)))?;

    Ok(format)
}
