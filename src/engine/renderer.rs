//! Export rendering entry points
//!
//! Validates the card, loads the artwork (the one async stage), then runs
//! the synchronous compose/encode pipeline and names the artifact. Each
//! invocation builds its own surface; concurrent exports share only the
//! font cache.

use std::path::PathBuf;

use bytes::Bytes;
use thiserror::Error;
use tracing::info;

use crate::config::Settings;
use crate::domain::CardRecord;

use super::compositor;
use super::document;
use super::encode::{self, ExportFormat, ExportScale};
use super::fonts::{FontError, FontLibrary};
use super::loader::{self, LoadError};

/// Drawing-surface and encoding failures
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("typeface unavailable: {0}")]
    Font(#[from] FontError),
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Export failures, one per failed export attempt
#[derive(Debug, Error)]
pub enum ExportError {
    /// Caller precondition: exports require an uploaded image
    #[error("card has no artwork to export")]
    MissingImage,
    #[error("artwork load failed: {0}")]
    Load(#[from] LoadError),
    #[error("drawing surface failed: {0}")]
    Surface(#[from] SurfaceError),
}

/// A finished export: filename hint plus the complete artifact bytes.
///
/// Bytes are always fully assembled in memory before this exists, so a
/// failed export can never leave a truncated artifact behind.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

/// Renders card records to downloadable artifacts
pub struct ExportRenderer {
    fonts: FontLibrary,
    jpeg_quality: u8,
}

impl ExportRenderer {
    pub fn new(font_dir: impl Into<PathBuf>) -> Self {
        ExportRenderer {
            fonts: FontLibrary::new(font_dir),
            jpeg_quality: encode::JPEG_QUALITY,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        ExportRenderer {
            fonts: FontLibrary::new(settings.assets.fonts_path.clone()),
            jpeg_quality: settings.export.jpeg_quality,
        }
    }

    /// Render the card to a raster image at the requested format and scale.
    pub async fn render_to_image(
        &self,
        card: &CardRecord,
        format: ExportFormat,
        scale: ExportScale,
    ) -> Result<ExportArtifact, ExportError> {
        let source = card.image.as_ref().ok_or(ExportError::MissingImage)?;

        let typeface = self.fonts.get().map_err(SurfaceError::from)?;
        let artwork = loader::load_image(source).await?;

        let surface = compositor::compose(card, &artwork, scale.factor(), &typeface);
        let encoded = encode::encode(surface, format, self.jpeg_quality)
            .map_err(SurfaceError::from)?;

        let filename = raster_filename(&card.name, scale, format);
        info!(
            filename = %filename,
            bytes = encoded.len(),
            format = ?format,
            scale = scale.label(),
            "Card image export complete"
        );

        Ok(ExportArtifact {
            filename,
            content_type: format.content_type(),
            bytes: Bytes::from(encoded),
        })
    }

    /// Render the card to a self-contained interactive HTML document.
    pub async fn render_to_document(&self, card: &CardRecord) -> Result<ExportArtifact, ExportError> {
        let source = card.image.as_ref().ok_or(ExportError::MissingImage)?;
        let artwork = loader::load_image(source).await?;

        let html = document::render(card, &artwork.to_data_uri());
        let filename = format!("{}_interactive.html", sanitize_name(&card.name));
        info!(filename = %filename, bytes = html.len(), "Card document export complete");

        Ok(ExportArtifact {
            filename,
            content_type: "text/html",
            bytes: Bytes::from(html),
        })
    }
}

/// Replace every character outside `[A-Za-z0-9]` with an underscore,
/// one-for-one.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn raster_filename(name: &str, scale: ExportScale, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        sanitize_name(name),
        scale.label(),
        format.extension()
    )
}
