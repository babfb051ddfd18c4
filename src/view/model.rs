//! Owned view model for the live card preview
//!
//! Collects every style parameter the preview surface needs into one
//! explicit snapshot, so the rendering adapter reads a single object
//! instead of scattered mutable style state.

use rand::Rng;

use crate::domain::{CardRecord, TemplateStyle};

use super::glitter::{self, GlitterParticle};
use super::tilt::{PointerState, TiltTransform};

/// Snapshot of all visual parameters for one preview frame
#[derive(Debug, Clone, PartialEq)]
pub struct CardViewModel {
    pub tilt: TiltTransform,
    /// Holographic shine opacity, 0.0..=1.0
    pub overlay_opacity: f32,
    /// Artwork brightness multiplier
    pub image_brightness: f32,
    /// Artwork contrast multiplier
    pub image_contrast: f32,
    pub rarity_color: &'static str,
    pub rarity_glyph: char,
    pub rarity_label: &'static str,
    /// Overlay gradient stop colors from the selected palette
    pub overlay_stops: [[u8; 3]; 4],
    pub template: TemplateStyle,
    pub show_scanlines: bool,
    pub glitter: Vec<GlitterParticle>,
}

impl CardViewModel {
    /// Build a fresh snapshot from the record and the pointer state.
    ///
    /// Glitter positions are re-rolled on every build.
    pub fn build<R: Rng + ?Sized>(card: &CardRecord, pointer: &PointerState, rng: &mut R) -> Self {
        CardViewModel {
            tilt: TiltTransform {
                rotate_x: pointer.rotate_x,
                rotate_y: pointer.rotate_y,
                highlight_x: pointer.highlight_x,
                highlight_y: pointer.highlight_y,
            },
            overlay_opacity: card.effect_intensity() as f32 / 100.0,
            image_brightness: card.image_brightness(),
            image_contrast: card.image_contrast(),
            rarity_color: card.rarity.color_hex(),
            rarity_glyph: card.rarity.glyph(),
            rarity_label: card.rarity.label(),
            overlay_stops: card.color_palette.overlay_stops(),
            template: card.template,
            show_scanlines: card.show_scanlines,
            glitter: glitter::scatter(card.glitter_density(), rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorPalette, Rarity};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_snapshot_tracks_record() {
        let mut card = CardRecord::default();
        card.rarity = Rarity::Legendary;
        card.color_palette = ColorPalette::Blue;
        card.set_effect_intensity(40);
        card.set_glitter_density(30);

        let mut rng = StdRng::seed_from_u64(1);
        let vm = CardViewModel::build(&card, &PointerState::neutral(), &mut rng);

        assert!((vm.overlay_opacity - 0.4).abs() < 1e-6);
        assert_eq!(vm.rarity_glyph, '✦');
        assert_eq!(vm.rarity_label, "LEGENDARY");
        assert_eq!(vm.overlay_stops, ColorPalette::Blue.overlay_stops());
        assert_eq!(vm.glitter.len(), 3);
        assert_eq!(vm.tilt.rotate_x, 0.0);
    }

    #[test]
    fn test_zero_density_means_no_particles() {
        let mut card = CardRecord::default();
        card.set_glitter_density(0);
        let mut rng = StdRng::seed_from_u64(1);
        let vm = CardViewModel::build(&card, &PointerState::neutral(), &mut rng);
        assert!(vm.glitter.is_empty());
    }
}
