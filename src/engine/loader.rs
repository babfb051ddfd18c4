//! Artwork loading and decoding
//!
//! The async half of the export pipeline: resolve an `ImageSource` to
//! decoded pixels before any compositing starts. Compose never sees a
//! partially-read image; a failure here aborts the whole export.

use base64::Engine;
use bytes::Bytes;
use image::{DynamicImage, ImageFormat};
use thiserror::Error;
use tracing::debug;

use crate::domain::ImageSource;

/// Artwork loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read artwork file {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode artwork: {0}")]
    Decode(#[from] image::ImageError),
    #[error("artwork data URI is malformed")]
    MalformedDataUri,
    #[error("failed to decode artwork base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A fully decoded artwork image plus its original encoded bytes
pub struct DecodedImage {
    pub pixels: DynamicImage,
    bytes: Bytes,
    format: ImageFormat,
}

impl DecodedImage {
    /// Re-encode the original bytes as a `data:` URI for document export
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            mime_for(self.format),
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

fn mime_for(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Gif => "image/gif",
        ImageFormat::Bmp => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Resolve an image source to decoded pixels.
///
/// This is the export pipeline's only suspension point: file sources read
/// through `tokio::fs`, the other variants decode in place.
pub async fn load_image(source: &ImageSource) -> Result<DecodedImage, LoadError> {
    let bytes = match source {
        ImageSource::Memory(bytes) => bytes.clone(),
        ImageSource::File(path) => {
            let data = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            Bytes::from(data)
        }
        ImageSource::DataUri(uri) => decode_data_uri(uri)?,
    };

    let format = image::guess_format(&bytes)?;
    let pixels = image::load_from_memory_with_format(&bytes, format)?;

    debug!(
        width = pixels.width(),
        height = pixels.height(),
        format = ?format,
        "Artwork decoded"
    );

    Ok(DecodedImage {
        pixels,
        bytes,
        format,
    })
}

fn decode_data_uri(uri: &str) -> Result<Bytes, LoadError> {
    let (_, payload) = uri.split_once("base64,").ok_or(LoadError::MalformedDataUri)?;
    let data = base64::engine::general_purpose::STANDARD.decode(payload.trim())?;
    Ok(Bytes::from(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([40, 90, 200, 255]));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buffer, ImageOutputFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[tokio::test]
    async fn test_memory_source_decodes() {
        let source = ImageSource::Memory(Bytes::from(png_fixture(8, 6)));
        let decoded = load_image(&source).await.unwrap();
        assert_eq!(decoded.pixels.width(), 8);
        assert_eq!(decoded.pixels.height(), 6);
        assert_eq!(decoded.format, ImageFormat::Png);
    }

    #[tokio::test]
    async fn test_data_uri_round_trip() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(png_fixture(4, 4));
        let source = ImageSource::DataUri(format!("data:image/png;base64,{encoded}"));
        let decoded = load_image(&source).await.unwrap();
        assert_eq!(decoded.pixels.width(), 4);
        assert!(decoded.to_data_uri().starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_corrupt_bytes_fail_decode() {
        let source = ImageSource::Memory(Bytes::from_static(b"not an image at all"));
        assert!(matches!(
            load_image(&source).await,
            Err(LoadError::Decode(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = ImageSource::File("/nonexistent/artwork.png".into());
        let result = tokio_test::block_on(load_image(&source));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[tokio::test]
    async fn test_data_uri_without_marker_is_malformed() {
        let source = ImageSource::DataUri("data:image/png,rawbytes".into());
        assert!(matches!(
            load_image(&source).await,
            Err(LoadError::MalformedDataUri)
        ));
    }
}
