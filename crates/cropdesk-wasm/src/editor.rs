//! Editor WASM bindings.
//!
//! [`JsEditor`] wraps one core [`Editor`]. The host forwards UI events to it
//! one at a time and redraws from the images it hands back. Operations that
//! do nothing (no source loaded, nothing to undo) return `undefined`.
//!
//! ```typescript
//! import { JsEditor } from '@cropdesk/wasm';
//!
//! const editor = new JsEditor({ viewportWidth: 800, viewportHeight: 600 });
//! editor.load_bytes(new Uint8Array(await file.arrayBuffer()));
//! drawCanvas(editor.display_image());
//!
//! const region = editor.crop_display(dragStart.x, dragStart.y, x, y);
//! if (region) drawRegion(region);
//! ```

use crate::types::{format_from_extension, JsRasterImage};
use cropdesk_core::{Editor, EditorConfig, PixelRect, RasterImage};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Snapshot of editor state for toolbar and menu updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorStatus {
    pub state: &'static str,
    pub has_source: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub is_grayscale: bool,
    pub brightness: f32,
    pub scale_percent: u32,
    pub working_width: Option<u32>,
    pub working_height: Option<u32>,
}

impl EditorStatus {
    pub(crate) fn from_editor(editor: &Editor) -> Self {
        let session = editor.session();
        let working = session.working();
        Self {
            state: editor.state().as_str(),
            has_source: editor.source().is_some(),
            can_undo: session.can_undo(),
            can_redo: session.can_redo(),
            is_grayscale: session.is_grayscale(),
            brightness: session.brightness(),
            scale_percent: session.scale_percent(),
            working_width: working.map(|w| w.width),
            working_height: working.map(|w| w.height),
        }
    }
}

fn to_js(image: Option<&RasterImage>) -> Option<JsRasterImage> {
    image.cloned().map(JsRasterImage::from_raster)
}

/// A single-document editor exposed to JavaScript.
#[wasm_bindgen]
pub struct JsEditor {
    inner: Editor,
}

#[wasm_bindgen]
impl JsEditor {
    /// Create an editor. `config` is an optional plain object with
    /// camelCase `EditorConfig` fields; missing fields take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsEditor, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Ok(Self::with_config(config))
    }

    /// Decode and load a new source image, discarding any edits.
    ///
    /// On error the previous source and edits are kept.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner
            .load_bytes(bytes)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn has_source(&self) -> bool {
        self.inner.source().is_some()
    }

    /// The source fitted to the viewport.
    pub fn display_image(&self) -> Option<JsRasterImage> {
        self.inner.display_image().map(JsRasterImage::from_raster)
    }

    /// Crop with a rectangle dragged on the viewport.
    pub fn crop_display(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<JsRasterImage> {
        to_js(self.inner.crop_display((x1, y1), (x2, y2)))
    }

    /// Crop with a rectangle in source pixel coordinates.
    pub fn crop(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Option<JsRasterImage> {
        to_js(self.inner.crop(&PixelRect::new(x1, y1, x2, y2)))
    }

    pub fn toggle_grayscale(&mut self) -> Option<JsRasterImage> {
        to_js(self.inner.toggle_grayscale())
    }

    /// Preview brightness; not recorded in history.
    pub fn adjust_brightness(&mut self, factor: f32) -> Option<JsRasterImage> {
        to_js(self.inner.adjust_brightness(factor))
    }

    pub fn rotate(&mut self) -> Option<JsRasterImage> {
        to_js(self.inner.rotate())
    }

    /// A resized copy of the working image; the working image is unchanged.
    pub fn preview_resize(&mut self, scale_percent: u32) -> Option<JsRasterImage> {
        self.inner.preview_resize(scale_percent).map(JsRasterImage::from_raster)
    }

    pub fn undo(&mut self) -> Option<JsRasterImage> {
        to_js(self.inner.undo())
    }

    pub fn redo(&mut self) -> Option<JsRasterImage> {
        to_js(self.inner.redo())
    }

    pub fn thumbnail(&self) -> Option<JsRasterImage> {
        self.inner.thumbnail().map(JsRasterImage::from_raster)
    }

    pub fn working_image(&self) -> Option<JsRasterImage> {
        to_js(self.inner.working())
    }

    /// Encode the working image in the format named by `extension`.
    pub fn export(&self, extension: &str) -> Result<Vec<u8>, JsValue> {
        let format = format_from_extension(extension).map_err(|e| JsValue::from_str(&e))?;
        self.inner.export(format).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn can_undo(&self) -> bool {
        self.inner.session().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.session().can_redo()
    }

    pub fn is_grayscale(&self) -> bool {
        self.inner.session().is_grayscale()
    }

    /// One of `empty`, `loaded`, `cropped`, `edited`.
    pub fn state(&self) -> String {
        self.inner.state().as_str().to_string()
    }

    /// Full status as a plain object (see `EditorStatus`).
    pub fn status(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&EditorStatus::from_editor(&self.inner))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsEditor {
    pub(crate) fn with_config(config: EditorConfig) -> Self {
        Self {
            inner: Editor::new(config),
        }
    }
}
