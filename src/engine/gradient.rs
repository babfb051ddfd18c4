//! Gradient fills, rounded-rect coverage and the holographic overlay pass
//!
//! Per-pixel work runs row-parallel: each row is computed independently
//! into a buffer, then written back sequentially.

use image::{Rgba, RgbaImage};
use rayon::prelude::*;

/// Background gradient: three dark navy stops along the card diagonal
pub const BACKGROUND_STOPS: [(f32, [u8; 3]); 3] = [
    (0.0, [0x1a, 0x1a, 0x2e]),
    (0.5, [0x16, 0x21, 0x3e]),
    (1.0, [0x0f, 0x17, 0x2a]),
];

/// Diagonal offsets of the four holographic overlay stops
pub const OVERLAY_OFFSETS: [f32; 4] = [0.0, 0.3, 0.6, 1.0];

/// Rounded-rectangle region used for masking and clipping
#[derive(Debug, Clone, Copy)]
pub struct RoundedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl RoundedRect {
    /// Whether a point (pixel center) falls inside the rounded region
    pub fn contains(&self, px: f32, py: f32) -> bool {
        if px < self.x || py < self.y || px >= self.x + self.width || py >= self.y + self.height {
            return false;
        }
        // Clamp toward the interior; near a corner this yields the corner
        // circle center, elsewhere it yields the point itself.
        let cx = px.clamp(self.x + self.radius, self.x + self.width - self.radius);
        let cy = py.clamp(self.y + self.radius, self.y + self.height - self.radius);
        let dx = px - cx;
        let dy = py - cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Position of a point along the top-left to bottom-right diagonal, 0..=1
fn diagonal_t(x: f32, y: f32, width: f32, height: f32) -> f32 {
    ((x * width + y * height) / (width * width + height * height)).clamp(0.0, 1.0)
}

fn lerp_channel(a: u8, b: u8, f: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * f).clamp(0.0, 255.0) as u8
}

/// Sample a multi-stop gradient at offset `t`; stops must be sorted
pub fn sample_stops(stops: &[(f32, [u8; 3])], t: f32) -> [u8; 3] {
    if t <= stops[0].0 {
        return stops[0].1;
    }
    for pair in stops.windows(2) {
        let (offset0, color0) = pair[0];
        let (offset1, color1) = pair[1];
        if t <= offset1 {
            let f = if offset1 > offset0 {
                (t - offset0) / (offset1 - offset0)
            } else {
                0.0
            };
            return [
                lerp_channel(color0[0], color1[0], f),
                lerp_channel(color0[1], color1[1], f),
                lerp_channel(color0[2], color1[2], f),
            ];
        }
    }
    stops[stops.len() - 1].1
}

/// Fill the surface with the diagonal background gradient, masked to a
/// rounded rect; pixels outside the corners stay fully transparent.
pub fn fill_background(surface: &mut RgbaImage, radius: f32) {
    let (width, height) = surface.dimensions();
    let card = RoundedRect {
        x: 0.0,
        y: 0.0,
        width: width as f32,
        height: height as f32,
        radius,
    };

    let rows: Vec<Vec<Rgba<u8>>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    let fx = x as f32 + 0.5;
                    let fy = y as f32 + 0.5;
                    if card.contains(fx, fy) {
                        let [r, g, b] = sample_stops(
                            &BACKGROUND_STOPS,
                            diagonal_t(fx, fy, width as f32, height as f32),
                        );
                        Rgba([r, g, b, 255])
                    } else {
                        Rgba([0, 0, 0, 0])
                    }
                })
                .collect()
        })
        .collect();

    write_rows(surface, rows);
}

/// Screen blend: lighten the base toward the overlay color, weighted by alpha
fn blend_screen(base: Rgba<u8>, overlay: [u8; 3], alpha: f32) -> Rgba<u8> {
    let mut out = base.0;
    for i in 0..3 {
        let screened = 255 - ((255 - base.0[i] as u32) * (255 - overlay[i] as u32)) / 255;
        out[i] = (screened as f32 * alpha + base.0[i] as f32 * (1.0 - alpha))
            .clamp(0.0, 255.0) as u8;
    }
    Rgba(out)
}

/// Composite the four-stop holographic gradient over the card with a
/// screen-style lightening blend.
///
/// `alpha` is the per-stop opacity (intensity / 400, so at most 0.25).
/// Transparent pixels (the masked-off corners) are left untouched.
pub fn screen_overlay(surface: &mut RgbaImage, stops: [[u8; 3]; 4], alpha: f32) {
    let (width, height) = surface.dimensions();
    let stop_pairs: Vec<(f32, [u8; 3])> = OVERLAY_OFFSETS.into_iter().zip(stops).collect();

    let src = &*surface;
    let rows: Vec<Vec<Rgba<u8>>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| {
                    let base = *src.get_pixel(x, y);
                    if base.0[3] == 0 {
                        return base;
                    }
                    let fx = x as f32 + 0.5;
                    let fy = y as f32 + 0.5;
                    let overlay = sample_stops(
                        &stop_pairs,
                        diagonal_t(fx, fy, width as f32, height as f32),
                    );
                    blend_screen(base, overlay, alpha)
                })
                .collect()
        })
        .collect();

    write_rows(surface, rows);
}

fn write_rows(surface: &mut RgbaImage, rows: Vec<Vec<Rgba<u8>>>) {
    for (y, row) in rows.into_iter().enumerate() {
        for (x, pixel) in row.into_iter().enumerate() {
            surface.put_pixel(x as u32, y as u32, pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stops_endpoints_and_midpoint() {
        assert_eq!(sample_stops(&BACKGROUND_STOPS, 0.0), [0x1a, 0x1a, 0x2e]);
        assert_eq!(sample_stops(&BACKGROUND_STOPS, 1.0), [0x0f, 0x17, 0x2a]);
        assert_eq!(sample_stops(&BACKGROUND_STOPS, 0.5), [0x16, 0x21, 0x3e]);

        let quarter = sample_stops(&BACKGROUND_STOPS, 0.25);
        assert_eq!(quarter[0], 0x18);
    }

    #[test]
    fn test_rounded_rect_excludes_corner_tips() {
        let rect = RoundedRect {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            radius: 12.0,
        };
        assert!(!rect.contains(0.5, 0.5));
        assert!(rect.contains(50.0, 50.0));
        assert!(rect.contains(12.0, 12.0));
        assert!(!rect.contains(100.5, 50.0));
    }

    #[test]
    fn test_background_corners_transparent() {
        let mut surface = RgbaImage::new(100, 140);
        fill_background(&mut surface, 12.0);
        assert_eq!(surface.get_pixel(0, 0).0[3], 0);
        assert_eq!(surface.get_pixel(99, 139).0[3], 0);
        assert_eq!(surface.get_pixel(50, 70).0[3], 255);
    }

    #[test]
    fn test_screen_blend_lightens() {
        let base = Rgba([10, 20, 30, 255]);
        let out = blend_screen(base, [255, 0, 255], 0.25);
        assert!(out.0[0] > base.0[0]);
        assert_eq!(out.0[1], base.0[1]);
        assert!(out.0[2] > base.0[2]);
        assert_eq!(out.0[3], 255);
    }

    #[test]
    fn test_overlay_skips_transparent_pixels() {
        let mut surface = RgbaImage::new(50, 50);
        fill_background(&mut surface, 12.0);
        let corner_before = *surface.get_pixel(0, 0);
        screen_overlay(&mut surface, [[255, 0, 255]; 4], 0.25);
        assert_eq!(*surface.get_pixel(0, 0), corner_before);
    }

    #[test]
    fn test_zero_alpha_overlay_is_identity() {
        let mut surface = RgbaImage::new(40, 40);
        fill_background(&mut surface, 4.0);
        let before = surface.clone();
        screen_overlay(&mut surface, [[255, 255, 0]; 4], 0.0);
        assert_eq!(surface, before);
    }
}
