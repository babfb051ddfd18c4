//! Card data record and display attributes
//!
//! The record is owned by the embedding shell and handed to the view and
//! engine components by reference. Mutation happens through whole-field
//! replacement; the percentage fields clamp on every write so downstream
//! consumers never see out-of-range values.

use std::path::PathBuf;

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};

/// Rarity tier shown on the card face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    Common,
    Rare,
    UltraRare,
    Legendary,
}

impl Rarity {
    /// Accent color used for the rarity line
    pub fn color_hex(&self) -> &'static str {
        match self {
            Rarity::Common => "#9ca3af",
            Rarity::Rare => "#60a5fa",
            Rarity::UltraRare => "#c084fc",
            Rarity::Legendary => "#facc15",
        }
    }

    /// Decorative glyph flanking the rarity label
    pub fn glyph(&self) -> char {
        match self {
            Rarity::Common => '●',
            Rarity::Rare => '◆',
            Rarity::UltraRare => '★',
            Rarity::Legendary => '✦',
        }
    }

    /// Uppercased display label, e.g. "ULTRA RARE"
    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "COMMON",
            Rarity::Rare => "RARE",
            Rarity::UltraRare => "ULTRA RARE",
            Rarity::Legendary => "LEGENDARY",
        }
    }
}

/// Decorative visual treatment of the card surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateStyle {
    Regular,
    Rainbow,
    Cosmos,
}

/// Hue set used by the holographic overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorPalette {
    Rainbow,
    Blue,
    Red,
    Custom,
}

impl ColorPalette {
    /// Four gradient stop colors for the overlay, placed at offsets
    /// 0 / 0.3 / 0.6 / 1.0 along the card diagonal.
    ///
    /// `Custom` has no picker in the product yet and falls back to the
    /// rainbow set.
    pub fn overlay_stops(&self) -> [[u8; 3]; 4] {
        match self {
            ColorPalette::Rainbow | ColorPalette::Custom => [
                [0xff, 0x00, 0xff],
                [0x00, 0xff, 0xff],
                [0xff, 0xff, 0x00],
                [0xff, 0x00, 0xff],
            ],
            ColorPalette::Blue => [
                [0x38, 0xbd, 0xf8],
                [0x81, 0x8c, 0xf8],
                [0x22, 0xd3, 0xee],
                [0x38, 0xbd, 0xf8],
            ],
            ColorPalette::Red => [
                [0xf8, 0x71, 0x71],
                [0xfb, 0x92, 0x3c],
                [0xf4, 0x72, 0xb6],
                [0xf8, 0x71, 0x71],
            ],
        }
    }
}

/// Where the card artwork comes from
///
/// The intake shell enforces type and size limits (10 MiB); this crate only
/// decodes. `DataUri` covers the common browser-style upload flow where the
/// file arrives as a base64 data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Memory(Bytes),
    File(PathBuf),
    DataUri(String),
}

/// Flat record of user-editable card fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub image: Option<ImageSource>,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub card_number: String,
    pub set_info: String,
    pub template: TemplateStyle,
    #[serde(deserialize_with = "de_percent")]
    effect_intensity: u8,
    pub color_palette: ColorPalette,
    #[serde(deserialize_with = "de_percent")]
    glitter_density: u8,
    pub show_scanlines: bool,
}

fn de_percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u8::deserialize(deserializer)?.min(100))
}

impl CardRecord {
    /// Holographic effect strength, always in 0..=100
    pub fn effect_intensity(&self) -> u8 {
        self.effect_intensity
    }

    /// Replace the effect intensity, clamping to 100
    pub fn set_effect_intensity(&mut self, value: u8) {
        self.effect_intensity = value.min(100);
    }

    /// Glitter particle density, always in 0..=100
    pub fn glitter_density(&self) -> u8 {
        self.glitter_density
    }

    /// Replace the glitter density, clamping to 100
    pub fn set_glitter_density(&mut self, value: u8) {
        self.glitter_density = value.min(100);
    }

    /// Brightness lift applied to the artwork in the live preview
    pub fn image_brightness(&self) -> f32 {
        1.0 + self.effect_intensity as f32 / 200.0
    }

    /// Contrast lift applied to the artwork in the live preview
    pub fn image_contrast(&self) -> f32 {
        1.0 + self.effect_intensity as f32 / 400.0
    }
}

impl Default for CardRecord {
    fn default() -> Self {
        CardRecord {
            image: None,
            name: "Holographic Card".to_string(),
            description: "A special card made with the holographic card maker".to_string(),
            rarity: Rarity::UltraRare,
            card_number: "001".to_string(),
            set_info: "Holographic Series".to_string(),
            template: TemplateStyle::Rainbow,
            effect_intensity: 75,
            color_palette: ColorPalette::Rainbow,
            glitter_density: 50,
            show_scanlines: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_clamps_on_write() {
        let mut card = CardRecord::default();
        card.set_effect_intensity(250);
        assert_eq!(card.effect_intensity(), 100);
        card.set_effect_intensity(42);
        assert_eq!(card.effect_intensity(), 42);
    }

    #[test]
    fn test_density_clamps_on_deserialize() {
        let json = serde_json::json!({
            "image": null,
            "name": "n",
            "description": "",
            "rarity": "ultra-rare",
            "card_number": "001",
            "set_info": "s",
            "template": "cosmos",
            "effect_intensity": 180,
            "color_palette": "blue",
            "glitter_density": 255,
            "show_scanlines": false
        });
        let card: CardRecord = serde_json::from_value(json).unwrap();
        assert_eq!(card.effect_intensity(), 100);
        assert_eq!(card.glitter_density(), 100);
        assert_eq!(card.rarity, Rarity::UltraRare);
        assert_eq!(card.template, TemplateStyle::Cosmos);
    }

    #[test]
    fn test_rarity_display_table() {
        assert_eq!(Rarity::Common.glyph(), '●');
        assert_eq!(Rarity::Legendary.glyph(), '✦');
        assert_eq!(Rarity::UltraRare.label(), "ULTRA RARE");
        assert_eq!(Rarity::Rare.color_hex(), "#60a5fa");
    }

    #[test]
    fn test_preview_filters_track_intensity() {
        let mut card = CardRecord::default();
        card.set_effect_intensity(100);
        assert!((card.image_brightness() - 1.5).abs() < f32::EPSILON);
        assert!((card.image_contrast() - 1.25).abs() < f32::EPSILON);
    }
}
