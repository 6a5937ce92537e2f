//! Geometric operations on the cropped region.
//!
//! # Coordinate System
//!
//! - All coordinates are source-image pixels, origin at the top-left corner
//! - Rotation is in quarter turns, clockwise
//! - Resizing either targets exact dimensions or an integer percentage

mod crop;
mod resize;
mod rotation;

pub use crop::{crop_region, PixelRect, RegionError};
pub use resize::{resize, scale_by_percent, scaled_dimensions, shrink_to_fit, FilterType, ResizeError};
pub use rotation::rotate_clockwise;
