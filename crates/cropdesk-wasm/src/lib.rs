//! Cropdesk WASM - WebAssembly bindings for Cropdesk
//!
//! This crate exposes the cropdesk-core editor to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `editor` - `JsEditor`, the stateful editor the UI dispatches events to
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings
//! - `encode` - Image encoding bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditor } from '@cropdesk/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new JsEditor();
//! editor.load_bytes(new Uint8Array(await file.arrayBuffer()));
//! console.log(editor.state()); // "loaded"
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod encode;
mod types;

pub use decode::decode_image;
pub use editor::{EditorStatus, JsEditor};
pub use encode::encode_image;
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
