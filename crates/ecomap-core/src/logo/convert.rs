//! Icon format normalization: whatever the CDN served, store PNG.

use std::io::Cursor;

use crate::remote::RemoteError;

/// Decode `bytes` (PNG, GIF, or JPEG) and re-encode as RGBA PNG.
///
/// Animated GIFs keep their first frame. Decode failures are classified as
/// fetch failures so the batch skips the record instead of aborting.
pub fn to_png_rgba(bytes: &[u8]) -> Result<Vec<u8>, RemoteError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = image::DynamicImage::ImageRgba8(decoded.to_rgba8());

    let mut out = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
        let mut out = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn png_roundtrips() {
        let png = tiny_png();
        let converted = to_png_rgba(&png).unwrap();
        let decoded = image::load_from_memory(&converted).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = to_png_rgba(b"definitely not an image").unwrap_err();
        assert!(matches!(err, RemoteError::Decode(_)));
    }
}
