//! Output formats, scales and surface encoding

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, RgbaImage};
use serde::{Deserialize, Serialize};

/// Default JPEG quality (canvas exports used 0.9)
pub const JPEG_QUALITY: u8 = 90;

/// Selectable raster output format
///
/// GIF shares the static encode path; an animated holographic GIF is a
/// possible future addition but not part of this pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpg,
    Gif,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Gif => "gif",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpg => "image/jpeg",
            ExportFormat::Gif => "image/gif",
        }
    }
}

/// Export resolution multiplier over the 660x921 logical canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportScale {
    #[serde(rename = "1x")]
    X1,
    #[serde(rename = "2x")]
    X2,
    #[serde(rename = "4x")]
    X4,
}

impl ExportScale {
    pub fn factor(&self) -> u32 {
        match self {
            ExportScale::X1 => 1,
            ExportScale::X2 => 2,
            ExportScale::X4 => 4,
        }
    }

    /// Resolution tag used in export filenames
    pub fn label(&self) -> &'static str {
        match self {
            ExportScale::X1 => "1x",
            ExportScale::X2 => "2x",
            ExportScale::X4 => "4x",
        }
    }
}

/// Encode a composed surface to the requested format.
///
/// PNG keeps the alpha channel (transparent corners); JPEG cannot carry
/// alpha, so the surface is flattened to RGB first.
pub fn encode(
    surface: RgbaImage,
    format: ExportFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, image::ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    match format {
        ExportFormat::Png => {
            DynamicImage::ImageRgba8(surface).write_to(&mut buffer, ImageOutputFormat::Png)?;
        }
        ExportFormat::Jpg => {
            let flattened = DynamicImage::ImageRgba8(surface).to_rgb8();
            DynamicImage::ImageRgb8(flattened)
                .write_to(&mut buffer, ImageOutputFormat::Jpeg(jpeg_quality))?;
        }
        ExportFormat::Gif => {
            DynamicImage::ImageRgba8(surface).write_to(&mut buffer, ImageOutputFormat::Gif)?;
        }
    }
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_surface() -> RgbaImage {
        RgbaImage::from_pixel(66, 92, Rgba([20, 30, 40, 255]))
    }

    #[test]
    fn test_png_round_trips_dimensions() {
        let bytes = encode(solid_surface(), ExportFormat::Png, JPEG_QUALITY).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 66);
        assert_eq!(decoded.height(), 92);
    }

    #[test]
    fn test_jpg_and_gif_encode() {
        for format in [ExportFormat::Jpg, ExportFormat::Gif] {
            let bytes = encode(solid_surface(), format, JPEG_QUALITY).unwrap();
            assert!(!bytes.is_empty());
            let decoded = image::load_from_memory(&bytes).unwrap();
            assert_eq!(decoded.width(), 66);
        }
    }

    #[test]
    fn test_scale_factors_and_labels() {
        assert_eq!(ExportScale::X1.factor(), 1);
        assert_eq!(ExportScale::X4.factor(), 4);
        assert_eq!(ExportScale::X2.label(), "2x");
    }

    #[test]
    fn test_format_serde_names() {
        assert_eq!(serde_json::to_string(&ExportFormat::Jpg).unwrap(), "\"jpg\"");
        assert_eq!(serde_json::to_string(&ExportScale::X4).unwrap(), "\"4x\"");
    }
}
