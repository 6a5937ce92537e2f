//! Editor configuration.
//!
//! Hosts usually build this from their own settings store or, in the browser,
//! from a plain object passed through the wasm bindings. Every field has a
//! default, so partial configurations deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::transform::FilterType;

/// Settings for an [`Editor`](crate::editor::Editor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Width of the display viewport in pixels
    pub viewport_width: u32,
    /// Height of the display viewport in pixels
    pub viewport_height: u32,
    /// Bounding box edge for the cropped-region thumbnail
    pub thumbnail_size: u32,
    /// JPEG quality used on save/export (1-100)
    pub jpeg_quality: u8,
    /// Filter for resize previews and display fitting
    pub preview_filter: FilterType,
    /// Maximum undo entries kept; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800,
            viewport_height: 600,
            thumbnail_size: 200,
            jpeg_quality: 90,
            preview_filter: FilterType::Area,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp out-of-range values into something usable.
    ///
    /// Zero sizes become 1, JPEG quality is clamped to 1-100 and a zero
    /// history limit becomes 1.
    pub fn validated(mut self) -> Self {
        self.viewport_width = self.viewport_width.max(1);
        self.viewport_height = self.viewport_height.max(1);
        self.thumbnail_size = self.thumbnail_size.max(1);
        self.jpeg_quality = self.jpeg_quality.clamp(1, 100);
        self.history_limit = self.history_limit.map(|l| l.max(1));
        self
    }
}
