//! Holocard
//!
//! Holographic trading card engine. Two independent components consume the
//! same flat card record:
//!
//! - the **presentation mapper** ([`view`]) turns pointer positions into
//!   tilt/highlight parameters and scatters decorative glitter for the
//!   live preview;
//! - the **export renderer** ([`engine`]) replays the same visual
//!   parameters onto a raster surface (PNG/JPG/GIF at 1x/2x/4x) or into a
//!   self-contained interactive HTML document.
//!
//! The embedding shell owns the record and the event loop; this crate owns
//! the math and the pixels. Exports report through [`export::ExportSink`]
//! with exactly one outcome per attempt.

pub mod config;
pub mod domain;
pub mod engine;
pub mod export;
pub mod view;

pub use config::Settings;
pub use domain::{CardRecord, ColorPalette, ImageSource, Rarity, TemplateStyle};
pub use engine::{
    ExportArtifact, ExportError, ExportFormat, ExportRenderer, ExportScale, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
pub use export::{run_export, ExportOutcome, ExportRequest, ExportSink, LogSink};
pub use view::{
    compute_tilt, normalize_pointer, CardBounds, CardViewModel, GlitterParticle, PointerEvent,
    PointerState, TiltTransform, TILT_DEGREES_PER_PERCENT,
};
