//! Cropdesk Core - region editing engine
//!
//! This crate provides the state and pixel logic behind the Cropdesk editor:
//! loading a source image, cropping a region out of it, adjusting that region
//! (grayscale, brightness, rotation, resize preview) with linear undo/redo,
//! and saving the result. Rendering and input handling live in the host.
//!
//! # Module Structure
//!
//! - `session` - the cropped working image and its undo/redo history
//! - `editor` - source image lifecycle, viewport mapping, save/export
//! - `history` - generic linear undo/redo stacks
//! - `viewport` - fit-to-box display scaling and coordinate mapping
//! - `transform` - crop, quarter-turn rotation, resize
//! - `adjustments` - grayscale and brightness
//! - `decode` / `encode` - image file I/O

pub mod adjustments;
pub mod config;
pub mod decode;
pub mod editor;
pub mod encode;
pub mod history;
pub mod luminance;
pub mod raster;
pub mod session;
pub mod transform;
pub mod viewport;

pub use config::EditorConfig;
pub use decode::DecodeError;
pub use editor::{Editor, EditorState};
pub use encode::{EncodeError, OutputFormat};
pub use history::{History, Undone};
pub use raster::RasterImage;
pub use session::{EditSession, SessionState};
pub use transform::{FilterType, PixelRect, RegionError};
pub use viewport::{DisplayRect, Viewport};
