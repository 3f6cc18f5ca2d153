//! Validation of uploaded injury photos.

use firstaid_gemini::ImagePayload;
use image::ImageFormat;

use crate::error::AssistError;

/// Checks that `bytes` decode as a PNG, JPEG, or WebP image and wraps them
/// with the matching media type.
///
/// # Errors
///
/// Returns [`AssistError::InvalidImage`] for empty or undecodable bytes and
/// [`AssistError::UnsupportedImageFormat`] for other raster formats.
pub fn load_injury_image(bytes: &[u8]) -> Result<ImagePayload, AssistError> {
    if bytes.is_empty() {
        return Err(AssistError::InvalidImage("image is empty".to_string()));
    }

    let format =
        image::guess_format(bytes).map_err(|e| AssistError::InvalidImage(e.to_string()))?;
    let mime_type = match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::WebP => "image/webp",
        other => return Err(AssistError::UnsupportedImageFormat(format!("{other:?}"))),
    };

    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| AssistError::InvalidImage(e.to_string()))?;

    Ok(ImagePayload {
        mime_type: mime_type.to_string(),
        data: bytes.to_vec(),
    })
}

#[cfg(test)]
pub(crate) fn png_fixture() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(2, 2, image::Rgb([200, 30, 30]));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("encoding a 2x2 png should not fail");
    buf.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_is_accepted_with_png_mime_type() {
        let payload = load_injury_image(&png_fixture()).expect("valid png");
        assert_eq!(payload.mime_type, "image/png");
        assert!(!payload.data.is_empty());
    }

    #[test]
    fn empty_bytes_are_rejected() {
        assert!(matches!(
            load_injury_image(&[]),
            Err(AssistError::InvalidImage(_))
        ));
    }

    #[test]
    fn text_bytes_are_rejected() {
        assert!(matches!(
            load_injury_image(b"definitely not an image"),
            Err(AssistError::InvalidImage(_))
        ));
    }

    #[test]
    fn gif_is_unsupported() {
        assert!(matches!(
            load_injury_image(b"GIF89a\x01\x00\x01\x00\x00\x00\x00"),
            Err(AssistError::UnsupportedImageFormat(_))
        ));
    }

    #[test]
    fn truncated_png_is_rejected() {
        let mut bytes = png_fixture();
        bytes.truncate(20);
        assert!(matches!(
            load_injury_image(&bytes),
            Err(AssistError::InvalidImage(_))
        ));
    }
}
