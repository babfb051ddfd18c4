//! Pointer-to-tilt math for the live holographic preview
//!
//! Pure functions over plain numbers: the embedding shell feeds pointer
//! events in, reads the resulting state out, and applies it to whatever
//! visual surface it owns. Nothing here suspends or allocates, so the
//! shell can call it on every pointer-move without latency concerns.

use serde::{Deserialize, Serialize};

/// Degrees of card rotation per percentage point of pointer travel.
///
/// Tunable visual parameter, not derived from anything.
pub const TILT_DEGREES_PER_PERCENT: f32 = 0.35;

/// Screen-space bounding box of the card surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Rotation angles and highlight position derived from one pointer position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TiltTransform {
    /// Rotation around the horizontal axis, degrees
    pub rotate_x: f32,
    /// Rotation around the vertical axis, degrees
    pub rotate_y: f32,
    /// Highlight center, percent of card width
    pub highlight_x: f32,
    /// Highlight center, percent of card height
    pub highlight_y: f32,
}

/// Map a cursor position to percentages of the card bounding box.
///
/// Values outside [0,100] are valid and simply produce larger tilt angles.
pub fn normalize_pointer(cursor_x: f32, cursor_y: f32, bounds: &CardBounds) -> (f32, f32) {
    let px = 100.0 * (cursor_x - bounds.left) / bounds.width;
    let py = 100.0 * (cursor_y - bounds.top) / bounds.height;
    (px, py)
}

/// Compute the tilt transform for a normalized pointer position.
///
/// Total over all finite inputs; no clamping.
pub fn compute_tilt(px: f32, py: f32) -> TiltTransform {
    TiltTransform {
        rotate_x: (py - 50.0) * TILT_DEGREES_PER_PERCENT,
        rotate_y: (px - 50.0) * -TILT_DEGREES_PER_PERCENT,
        highlight_x: px,
        highlight_y: py,
    }
}

/// Pointer interaction events forwarded by the shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { cursor_x: f32, cursor_y: f32 },
    Left,
}

/// Live interaction state of one card surface
///
/// Only the most recent position matters; if the shell coalesces move
/// events, applying just the last one produces the same state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub highlight_x: f32,
    pub highlight_y: f32,
}

impl PointerState {
    /// Resting state: no rotation, highlight centered
    pub fn neutral() -> Self {
        PointerState {
            rotate_x: 0.0,
            rotate_y: 0.0,
            highlight_x: 50.0,
            highlight_y: 50.0,
        }
    }

    /// Advance the state by one pointer event.
    ///
    /// Leaving the card zeroes the rotation but keeps the highlight where
    /// it last was.
    pub fn apply(self, event: PointerEvent, bounds: &CardBounds) -> Self {
        match event {
            PointerEvent::Moved { cursor_x, cursor_y } => {
                let (px, py) = normalize_pointer(cursor_x, cursor_y, bounds);
                let tilt = compute_tilt(px, py);
                PointerState {
                    rotate_x: tilt.rotate_x,
                    rotate_y: tilt.rotate_y,
                    highlight_x: tilt.highlight_x,
                    highlight_y: tilt.highlight_y,
                }
            }
            PointerEvent::Left => PointerState {
                rotate_x: 0.0,
                rotate_y: 0.0,
                ..self
            },
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::neutral()
    }
}
