//! Export rendering engine
//!
//! This module contains the export pipeline:
//! - Artwork loading and decoding (the one async stage)
//! - Gradient, overlay and text compositing onto a raster surface
//! - Encoding to PNG/JPG/GIF and interactive HTML document generation

mod compositor;
mod document;
mod encode;
mod fonts;
mod gradient;
mod layout;
pub mod loader;
mod renderer;

pub use compositor::compose;
pub use encode::{ExportFormat, ExportScale, JPEG_QUALITY};
pub use fonts::{FontError, FontLibrary, Typeface};
pub use layout::{wrap_description, CanvasGeometry, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use loader::{load_image, DecodedImage, LoadError};
pub use renderer::{sanitize_name, ExportArtifact, ExportError, ExportRenderer, SurfaceError};
