//! Source image decoding for Cropdesk.
//!
//! This module provides functionality for:
//! - Decoding PNG, JPEG, BMP and TIFF images from bytes or files
//! - Applying EXIF orientation so the pixels match what cameras intended
//!
//! All decoded images are RGB8 [`RasterImage`](crate::raster::RasterImage)s.
//! A failed decode never touches editor state; callers decide how to report it.
//!
//! # Examples
//!
//! ```ignore
//! use cropdesk_core::decode::decode_file;
//!
//! let image = decode_file("photo.jpg")?;
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod load;
mod types;

pub use load::{decode_bytes, decode_file};
pub use types::DecodeError;

use types::Orientation;
