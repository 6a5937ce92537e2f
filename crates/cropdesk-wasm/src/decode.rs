//! Image decoding WASM bindings.
//!
//! ```typescript
//! import { decode_image } from '@cropdesk/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsRasterImage;
use cropdesk_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG, JPEG, BMP or TIFF file from bytes.
///
/// EXIF orientation is applied, so the result is upright.
///
/// # Errors
///
/// Returns an error if the bytes are empty, not a known format, or corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_bytes(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use cropdesk_core::decode::{decode_bytes, DecodeError};

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_bytes(&[]), Err(DecodeError::InvalidFormat)));
        assert!(decode_bytes(&[0x00, 0x01, 0x02, 0x03]).is_err());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use cropdesk_core::encode::{encode_image, OutputFormat};
    use cropdesk_core::RasterImage;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_png() {
        let png = encode_image(&RasterImage::filled(8, 4, [1, 2, 3]), OutputFormat::Png, 90).unwrap();
        let img = decode_image(&png).unwrap();
        assert_eq!(img.width(), 8);
        assert_eq!(img.height(), 4);
        assert_eq!(&img.pixels()[0..3], &[1, 2, 3]);
    }

    #[wasm_bindgen_test]
    fn test_decode_invalid() {
        assert!(decode_image(&[0xFF, 0x00]).is_err());
    }
}
