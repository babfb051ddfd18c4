//! Canvas geometry and text layout
//!
//! All card layout is expressed in logical units on a 660x921 canvas and
//! multiplied by the export scale factor at draw time, so higher
//! resolutions are true re-renders rather than upscales.

/// Logical canvas width in pixels
pub const CANVAS_WIDTH: u32 = 660;
/// Logical canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 921;

/// Card corner radius
pub const CORNER_RADIUS: f32 = 12.0;

/// Artwork inset from the left/right/top edges
pub const ARTWORK_INSET: f32 = 40.0;
/// Artwork corner radius
pub const ARTWORK_CORNER_RADIUS: f32 = 8.0;
/// Artwork height as a fraction of canvas height
pub const ARTWORK_HEIGHT_RATIO: f32 = 0.6;

/// Name text size and baseline offset below the artwork
pub const NAME_SIZE: f32 = 24.0;
pub const NAME_BASELINE_OFFSET: f32 = 40.0;

/// Description text size, first-baseline offset below the artwork,
/// per-line spacing, and fixed wrap width in characters
pub const DESCRIPTION_SIZE: f32 = 14.0;
pub const DESCRIPTION_BASELINE_OFFSET: f32 = 70.0;
pub const DESCRIPTION_LINE_SPACING: f32 = 20.0;
pub const DESCRIPTION_LINE_CHARS: usize = 40;

/// Footer text size and inset from the bottom and side edges
pub const FOOTER_SIZE: f32 = 12.0;
pub const FOOTER_INSET: f32 = 40.0;

/// Axis-aligned rectangle in scaled pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Per-export geometry: logical layout times an integer scale factor
#[derive(Debug, Clone, Copy)]
pub struct CanvasGeometry {
    factor: f32,
    pub width: u32,
    pub height: u32,
}

impl CanvasGeometry {
    pub fn new(scale: u32) -> Self {
        CanvasGeometry {
            factor: scale as f32,
            width: CANVAS_WIDTH * scale,
            height: CANVAS_HEIGHT * scale,
        }
    }

    /// Convert a logical measure to scaled pixels
    pub fn px(&self, logical: f32) -> f32 {
        logical * self.factor
    }

    pub fn corner_radius(&self) -> f32 {
        self.px(CORNER_RADIUS)
    }

    pub fn artwork_rect(&self) -> RectF {
        RectF {
            x: self.px(ARTWORK_INSET),
            y: self.px(ARTWORK_INSET),
            width: self.px(CANVAS_WIDTH as f32 - 2.0 * ARTWORK_INSET),
            height: self.px(CANVAS_HEIGHT as f32 * ARTWORK_HEIGHT_RATIO),
        }
    }

    pub fn artwork_corner_radius(&self) -> f32 {
        self.px(ARTWORK_CORNER_RADIUS)
    }

    fn artwork_bottom(&self) -> f32 {
        let rect = self.artwork_rect();
        rect.y + rect.height
    }

    pub fn center_x(&self) -> f32 {
        self.width as f32 / 2.0
    }

    pub fn name_baseline(&self) -> f32 {
        self.artwork_bottom() + self.px(NAME_BASELINE_OFFSET)
    }

    pub fn name_size(&self) -> f32 {
        self.px(NAME_SIZE)
    }

    pub fn description_baseline(&self, line: usize) -> f32 {
        self.artwork_bottom()
            + self.px(DESCRIPTION_BASELINE_OFFSET)
            + self.px(DESCRIPTION_LINE_SPACING) * line as f32
    }

    pub fn description_size(&self) -> f32 {
        self.px(DESCRIPTION_SIZE)
    }

    pub fn footer_baseline(&self) -> f32 {
        self.height as f32 - self.px(FOOTER_INSET)
    }

    pub fn footer_left_x(&self) -> f32 {
        self.px(FOOTER_INSET)
    }

    pub fn footer_right_x(&self) -> f32 {
        self.width as f32 - self.px(FOOTER_INSET)
    }

    pub fn footer_size(&self) -> f32 {
        self.px(FOOTER_SIZE)
    }
}

/// Split the description into fixed-width lines of 40 characters.
///
/// Chunking is by Unicode code point, not by word boundary or rendered
/// width; wide scripts get fewer effective characters per visual line.
pub fn wrap_description(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(DESCRIPTION_LINE_CHARS)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_85_chars_without_spaces() {
        let text = "a".repeat(85);
        let lines = wrap_description(&text);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), 40);
        assert_eq!(lines[1].chars().count(), 40);
        assert_eq!(lines[2].chars().count(), 5);
    }

    #[test]
    fn test_wrap_empty_is_no_lines() {
        assert!(wrap_description("").is_empty());
    }

    #[test]
    fn test_wrap_counts_code_points_not_bytes() {
        // 41 two-byte characters must still split 40/1
        let text = "é".repeat(41);
        let lines = wrap_description(&text);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 40);
        assert_eq!(lines[1].chars().count(), 1);
    }

    #[test]
    fn test_geometry_scales_uniformly() {
        let geom = CanvasGeometry::new(2);
        assert_eq!(geom.width, 1320);
        assert_eq!(geom.height, 1842);

        let rect = geom.artwork_rect();
        assert_eq!(rect.x, 80.0);
        assert_eq!(rect.width, 1160.0);
        assert!((rect.height - 921.0 * 0.6 * 2.0).abs() < 1e-3);

        assert_eq!(geom.footer_baseline(), 1842.0 - 80.0);
        assert_eq!(geom.name_size(), 48.0);
    }
}
