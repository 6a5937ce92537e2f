//! Image encoding for save and export.
//!
//! This module provides functionality for:
//! - Choosing an output format from a file extension
//! - Encoding RGB8 images to PNG, JPEG, BMP or TIFF
//! - Writing the result to disk
//!
//! # Examples
//!
//! ```ignore
//! use cropdesk_core::encode::encode_file;
//!
//! encode_file(&image, "crop.png", 90)?;
//! ```

mod writer;

pub use writer::{encode_file, encode_image, EncodeError, OutputFormat};
