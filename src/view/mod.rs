//! Presentation mapper
//!
//! Translates the card record and pointer position into the visual
//! parameters of the live preview: tilt transform, highlight position,
//! overlay styling and glitter placement. Everything here is synchronous
//! and side-effect free; applying the result to a surface is the
//! embedding shell's job.

mod glitter;
mod model;
mod tilt;

pub use glitter::{particle_count, scatter, scatter_default, GlitterParticle};
pub use model::CardViewModel;
pub use tilt::{
    compute_tilt, normalize_pointer, CardBounds, PointerEvent, PointerState, TiltTransform,
    TILT_DEGREES_PER_PERCENT,
};
