//! Image encoding WASM bindings.
//!
//! ```typescript
//! import { encode_image } from '@cropdesk/wasm';
//!
//! const jpeg = encode_image(image, 'jpg', 90);
//! const writable = await fileHandle.createWritable();
//! await writable.write(new Blob([jpeg], { type: 'image/jpeg' }));
//! await writable.close();
//! ```

use crate::types::{format_from_extension, JsRasterImage};
use cropdesk_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image into the format named by `extension`
/// (`png`, `jpg`/`jpeg`, `bmp`, `tif`/`tiff`).
///
/// `quality` only affects JPEG output and is clamped to 1-100.
#[wasm_bindgen]
pub fn encode_image(image: &JsRasterImage, extension: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    let format = format_from_extension(extension).map_err(|e| JsValue::from_str(&e))?;
    encode::encode_image(&image.to_raster(), format, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_basic() {
        let img = JsRasterImage::new(50, 50, vec![128u8; 50 * 50 * 3]);
        let jpeg = encode_image(&img, "jpg", 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_invalid_pixel_data() {
        let img = JsRasterImage::new(100, 100, vec![128u8; 50 * 50 * 3]);
        assert!(encode_image(&img, "png", 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_unknown_extension() {
        let img = JsRasterImage::new(2, 2, vec![0u8; 12]);
        assert!(encode_image(&img, "gif", 90).is_err());
    }
}
