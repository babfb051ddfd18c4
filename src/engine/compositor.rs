//! Card compositing pipeline
//!
//! Reproduces the live card presentation on a fixed-resolution raster
//! surface: gradient background, cover-fitted artwork, holographic screen
//! overlay and the text layout. Fully synchronous and deterministic; the
//! artwork arrives already decoded.

use image::{imageops::FilterType, DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use rusttype::{Font, Scale};
use tracing::debug;

use crate::domain::CardRecord;

use super::fonts::Typeface;
use super::gradient::{self, RoundedRect};
use super::layout::{self, CanvasGeometry};
use super::loader::DecodedImage;

const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Alpha applied to each overlay stop: intensity / 400, at most 0.25
fn overlay_alpha(intensity: u8) -> f32 {
    intensity as f32 / 400.0
}

/// Compose one card onto a fresh surface of `(660 * scale, 921 * scale)`.
pub fn compose(
    card: &CardRecord,
    artwork: &DecodedImage,
    scale: u32,
    typeface: &Typeface,
) -> RgbaImage {
    let geom = CanvasGeometry::new(scale);
    let mut surface = RgbaImage::new(geom.width, geom.height);

    gradient::fill_background(&mut surface, geom.corner_radius());
    draw_artwork(&mut surface, &artwork.pixels, &geom);

    let intensity = card.effect_intensity();
    if intensity > 0 {
        gradient::screen_overlay(
            &mut surface,
            card.color_palette.overlay_stops(),
            overlay_alpha(intensity),
        );
    }

    draw_text_layer(&mut surface, card, &geom, typeface);

    debug!(
        scale = scale,
        intensity = intensity,
        width = geom.width,
        height = geom.height,
        "Card composed"
    );

    surface
}

/// Cover-fit the artwork into its inset rounded region
fn draw_artwork(surface: &mut RgbaImage, artwork: &DynamicImage, geom: &CanvasGeometry) {
    let rect = geom.artwork_rect();
    let clip = RoundedRect {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        radius: geom.artwork_corner_radius(),
    };

    let target_width = rect.width.round() as u32;
    let target_height = rect.height.round() as u32;
    let fitted = artwork
        .resize_to_fill(target_width, target_height, FilterType::Lanczos3)
        .to_rgba8();

    let offset_x = rect.x.round() as u32;
    let offset_y = rect.y.round() as u32;
    for (dx, dy, pixel) in fitted.enumerate_pixels() {
        let x = offset_x + dx;
        let y = offset_y + dy;
        if x >= surface.width() || y >= surface.height() {
            continue;
        }
        if !clip.contains(x as f32 + 0.5, y as f32 + 0.5) {
            continue;
        }
        if pixel.0[3] == 0 {
            continue;
        }
        let blended = blend_over(*surface.get_pixel(x, y), *pixel);
        surface.put_pixel(x, y, blended);
    }
}

/// Normal alpha blending onto the opaque card interior
fn blend_over(base: Rgba<u8>, top: Rgba<u8>) -> Rgba<u8> {
    let alpha = top.0[3] as f32 / 255.0;
    let inv_alpha = 1.0 - alpha;
    Rgba([
        (top.0[0] as f32 * alpha + base.0[0] as f32 * inv_alpha) as u8,
        (top.0[1] as f32 * alpha + base.0[1] as f32 * inv_alpha) as u8,
        (top.0[2] as f32 * alpha + base.0[2] as f32 * inv_alpha) as u8,
        255,
    ])
}

fn draw_text_layer(
    surface: &mut RgbaImage,
    card: &CardRecord,
    geom: &CanvasGeometry,
    typeface: &Typeface,
) {
    draw_centered(
        surface,
        &card.name,
        geom.center_x(),
        geom.name_baseline(),
        geom.name_size(),
        &typeface.bold,
    );

    for (line_index, line) in layout::wrap_description(&card.description).iter().enumerate() {
        draw_centered(
            surface,
            line,
            geom.center_x(),
            geom.description_baseline(line_index),
            geom.description_size(),
            &typeface.regular,
        );
    }

    let number = format!("#{}", card.card_number);
    draw_at_baseline(
        surface,
        &number,
        geom.footer_left_x(),
        geom.footer_baseline(),
        geom.footer_size(),
        &typeface.regular,
    );

    let info_width = text_size(
        Scale::uniform(geom.footer_size()),
        &typeface.regular,
        &card.set_info,
    )
    .0 as f32;
    draw_at_baseline(
        surface,
        &card.set_info,
        geom.footer_right_x() - info_width,
        geom.footer_baseline(),
        geom.footer_size(),
        &typeface.regular,
    );
}

fn draw_centered(
    surface: &mut RgbaImage,
    text: &str,
    center_x: f32,
    baseline_y: f32,
    size: f32,
    font: &Font<'static>,
) {
    if text.is_empty() {
        return;
    }
    let width = text_size(Scale::uniform(size), font, text).0 as f32;
    draw_at_baseline(surface, text, center_x - width / 2.0, baseline_y, size, font);
}

/// Draw with a canvas-style baseline anchor; imageproc positions glyph
/// tops, so shift up by the face ascent.
fn draw_at_baseline(
    surface: &mut RgbaImage,
    text: &str,
    x: f32,
    baseline_y: f32,
    size: f32,
    font: &Font<'static>,
) {
    if text.is_empty() {
        return;
    }
    let scale = Scale::uniform(size);
    let ascent = font.v_metrics(scale).ascent;
    draw_text_mut(
        surface,
        TEXT_COLOR,
        x.round() as i32,
        (baseline_y - ascent).round() as i32,
        scale,
        font,
        text,
    );
}
