//! Application-level editor: source image lifecycle around an [`EditSession`].
//!
//! The editor is what an event-dispatch layer talks to. It owns the loaded
//! source, maps viewport drags into source pixels and handles save/export.
//! Loading a new source always discards the whole session.

use std::path::Path;

use log::{debug, info, warn};

use crate::config::EditorConfig;
use crate::decode::{decode_bytes, decode_file, DecodeError};
use crate::encode::{encode_file, encode_image, EncodeError, OutputFormat};
use crate::raster::RasterImage;
use crate::session::{EditSession, SessionState};
use crate::transform::PixelRect;
use crate::viewport::{thumbnail, DisplayRect, Viewport};

/// Editor lifecycle: Empty → Loaded → Cropped ⇄ Edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Nothing loaded.
    Empty,
    /// A source is loaded but no region is being edited.
    Loaded,
    /// A fresh crop with no committed edits on top.
    Cropped,
    /// Committed edits exist on top of the crop.
    Edited,
}

impl EditorState {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorState::Empty => "empty",
            EditorState::Loaded => "loaded",
            EditorState::Cropped => "cropped",
            EditorState::Edited => "edited",
        }
    }
}

/// A single-document editor.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    viewport: Viewport,
    source: Option<RasterImage>,
    session: EditSession,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let config = config.validated();
        Self {
            viewport: Viewport::new(config.viewport_width, config.viewport_height),
            session: EditSession::with_options(config.history_limit, config.preview_filter),
            source: None,
            config,
        }
    }

    /// Decode and load an image file.
    ///
    /// On failure the current source and session are left untouched.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<&RasterImage, DecodeError> {
        let path = path.as_ref();
        match decode_file(path) {
            Ok(image) => {
                info!("Loaded {}", path.display());
                Ok(self.set_source(image))
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Decode and load an in-memory image.
    ///
    /// On failure the current source and session are left untouched.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<&RasterImage, DecodeError> {
        match decode_bytes(bytes) {
            Ok(image) => Ok(self.set_source(image)),
            Err(e) => {
                warn!("Failed to decode {} bytes: {}", bytes.len(), e);
                Err(e)
            }
        }
    }

    /// Replace the source image and discard all session state.
    pub fn set_source(&mut self, image: RasterImage) -> &RasterImage {
        info!("Source image {}x{}", image.width, image.height);
        self.session.clear();
        self.source.insert(image)
    }

    /// The source fitted into the viewport, for the main canvas.
    pub fn display_image(&self) -> Option<RasterImage> {
        let source = self.source.as_ref()?;
        self.viewport
            .fit_image(source, self.config.preview_filter)
            .map_err(|e| debug!("Cannot fit source for display: {}", e))
            .ok()
    }

    /// Crop using a rectangle dragged on the viewport.
    ///
    /// Drag points are clamped to the viewport before mapping.
    pub fn crop_display(&mut self, start: (f64, f64), end: (f64, f64)) -> Option<&RasterImage> {
        let source = self.source.as_ref()?;
        let rect = DisplayRect::from_corners(
            self.viewport.clamp_point(start),
            self.viewport.clamp_point(end),
        );
        let mapped = self.viewport.display_to_source(&rect, source.dimensions());
        debug!("Display {:?} maps to source {:?}", rect, mapped);
        self.session.crop(source, &mapped)
    }

    /// Crop using a rectangle in source pixel coordinates.
    pub fn crop(&mut self, rect: &PixelRect) -> Option<&RasterImage> {
        let source = self.source.as_ref()?;
        self.session.crop(source, rect)
    }

    pub fn toggle_grayscale(&mut self) -> Option<&RasterImage> {
        self.session.toggle_grayscale()
    }

    pub fn adjust_brightness(&mut self, factor: f32) -> Option<&RasterImage> {
        self.session.adjust_brightness(factor)
    }

    pub fn rotate(&mut self) -> Option<&RasterImage> {
        self.session.rotate()
    }

    pub fn preview_resize(&mut self, scale_percent: u32) -> Option<RasterImage> {
        self.session.preview_resize(scale_percent)
    }

    pub fn undo(&mut self) -> Option<&RasterImage> {
        self.session.undo()
    }

    pub fn redo(&mut self) -> Option<&RasterImage> {
        self.session.redo()
    }

    /// The working image shrunk for the side-panel preview.
    pub fn thumbnail(&self) -> Option<RasterImage> {
        let working = self.session.working()?;
        thumbnail(working, self.config.thumbnail_size, self.config.preview_filter)
            .map_err(|e| debug!("Cannot build thumbnail: {}", e))
            .ok()
    }

    /// Write the working image to `path`; the extension picks the format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<OutputFormat, EncodeError> {
        let path = path.as_ref();
        let working = self.session.working().ok_or(EncodeError::NothingToSave)?;

        match encode_file(working, path, self.config.jpeg_quality) {
            Ok(format) => {
                info!("Saved {}x{} to {}", working.width, working.height, path.display());
                Ok(format)
            }
            Err(e) => {
                warn!("Failed to save {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Encode the working image to bytes.
    pub fn export(&self, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
        let working = self.session.working().ok_or(EncodeError::NothingToSave)?;
        encode_image(working, format, self.config.jpeg_quality)
    }

    pub fn state(&self) -> EditorState {
        match (self.source.is_some(), self.session.state()) {
            (_, SessionState::Cropped) => EditorState::Cropped,
            (_, SessionState::Edited) => EditorState::Edited,
            (true, SessionState::Empty) => EditorState::Loaded,
            (false, SessionState::Empty) => EditorState::Empty,
        }
    }

    pub fn source(&self) -> Option<&RasterImage> {
        self.source.as_ref()
    }

    pub fn working(&self) -> Option<&RasterImage> {
        self.session.working()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}
