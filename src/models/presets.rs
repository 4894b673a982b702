//! Curated preset and palette data for the editor.
//!
//! Presets are statically defined partial-card configurations; applying one
//! is always an immediate, committed update. The gradient swatches and color
//! pool feed the gradient panel and the random generator.

use super::card::{BorderRadius, CardUpdate, FontWeight, RadiusUnit, ShadowSettings};

/// A named, statically defined card styling preset.
#[derive(Debug, Clone)]
pub struct CardPreset {
    /// Display name (e.g. "Glassmorphism")
    pub name: &'static str,
    /// One-line description shown in the preset list
    pub description: &'static str,
    /// Partial configuration merged into the card on apply
    pub config: CardUpdate,
}

/// A two-stop gradient swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPreset {
    /// Start color (hex)
    pub from: &'static str,
    /// End color (hex)
    pub to: &'static str,
    /// Display name
    pub name: &'static str,
}

/// Color pool used by the gradient swatch grid and the random generator.
pub const COLOR_PALETTE: [&str; 20] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dda0dd", "#98d8c8", "#f8a5c2",
    "#6a89cc", "#f5cd79", "#f78fb3", "#ff7f50", "#ffdab9", "#b2f7ef", "#c7ceea", "#a8e6cf",
    "#ffd3a5", "#fd9644", "#fe9090", "#87ceeb",
];

/// Two-stop gradient swatches offered in the gradient panel.
pub const GRADIENT_PRESETS: [GradientPreset; 10] = [
    GradientPreset { from: "#667eea", to: "#764ba2", name: "Royal Blue to Purple" },
    GradientPreset { from: "#f093fb", to: "#f5576c", name: "Pink to Red" },
    GradientPreset { from: "#4facfe", to: "#00f2fe", name: "Sky Blue to Cyan" },
    GradientPreset { from: "#43e97b", to: "#38f9d7", name: "Green to Mint" },
    GradientPreset { from: "#fa709a", to: "#fee140", name: "Rose to Gold" },
    GradientPreset { from: "#a8edea", to: "#fed6e3", name: "Aqua to Light Pink" },
    GradientPreset { from: "#ff9a9e", to: "#fecfef", name: "Coral to Lavender" },
    GradientPreset { from: "#a18cd1", to: "#fbc2eb", name: "Purple to Pink" },
    GradientPreset { from: "#fad0c4", to: "#ffd1ff", name: "Peach to Pink" },
    GradientPreset { from: "#ff8a80", to: "#ea4c89", name: "Light Red to Dark Pink" },
];

impl GradientPreset {
    /// Converts the swatch into a card update selecting this gradient.
    #[must_use]
    pub fn to_update(&self) -> CardUpdate {
        CardUpdate {
            bg_gradient_from: Some(self.from.to_string()),
            bg_gradient_to: Some(Some(self.to.to_string())),
            ..CardUpdate::default()
        }
    }
}

/// The named card styling presets.
#[must_use]
pub fn card_presets() -> Vec<CardPreset> {
    vec![
        CardPreset {
            name: "Glassmorphism",
            description: "Modern frosted glass effect",
            config: CardUpdate {
                bg_gradient_from: Some("#ffffff".to_string()),
                bg_gradient_to: Some(Some("#f8fafc".to_string())),
                bg_opacity_from: Some(15),
                bg_opacity_to: Some(5),
                card_border_radius: Some(BorderRadius::uniform(20, RadiusUnit::Px)),
                enable_hover_effects: Some(true),
                card_opacity: Some(85),
                shadow_color: Some("#000000".to_string()),
                shadow_opacity: Some(0.1),
                shadow_settings: Some(ShadowSettings::new(0, 8, 32, 0)),
                ..CardUpdate::default()
            },
        },
        CardPreset {
            name: "Neon Glow",
            description: "Vibrant and energetic",
            config: CardUpdate {
                bg_gradient_from: Some("#8b5cf6".to_string()),
                bg_gradient_to: Some(Some("#3b82f6".to_string())),
                card_opacity: Some(100),
                shadow_color: Some("#8b5cf6".to_string()),
                shadow_opacity: Some(0.4),
                shadow_settings: Some(ShadowSettings::new(0, 0, 25, 2)),
                enable_animations: Some(true),
                title_weight: Some(FontWeight::Bold),
                card_border_radius: Some(BorderRadius::uniform(16, RadiusUnit::Px)),
                ..CardUpdate::default()
            },
        },
        CardPreset {
            name: "Gradient Dream",
            description: "Smooth color transitions",
            config: CardUpdate {
                bg_gradient_from: Some("#ec4899".to_string()),
                bg_gradient_to: Some(Some("#8b5cf6".to_string())),
                card_opacity: Some(100),
                card_border_radius: Some(BorderRadius::uniform(16, RadiusUnit::Px)),
                gradient_angle: Some(45),
                shadow_color: Some("#000000".to_string()),
                shadow_opacity: Some(0.15),
                shadow_settings: Some(ShadowSettings::new(0, 6, 12, 0)),
                ..CardUpdate::default()
            },
        },
        CardPreset {
            name: "Minimal Clean",
            description: "Simple and elegant",
            config: CardUpdate {
                bg_gradient_from: Some("#f3f4f6".to_string()),
                bg_gradient_to: Some(Some("#e5e7eb".to_string())),
                card_opacity: Some(100),
                card_border_radius: Some(BorderRadius::uniform(8, RadiusUnit::Px)),
                shadow_color: Some("#000000".to_string()),
                shadow_opacity: Some(0.08),
                shadow_settings: Some(ShadowSettings::new(0, 4, 6, -1)),
                ..CardUpdate::default()
            },
        },
    ]
}

/// Looks up a preset by name, case-insensitively.
#[must_use]
pub fn find_preset(name: &str) -> Option<CardPreset> {
    card_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RgbColor;

    #[test]
    fn test_palette_colors_all_parse() {
        for hex in COLOR_PALETTE {
            assert!(RgbColor::from_hex(hex).is_ok(), "bad palette entry {hex}");
        }
    }

    #[test]
    fn test_gradient_presets_all_parse() {
        for preset in GRADIENT_PRESETS {
            assert!(RgbColor::from_hex(preset.from).is_ok());
            assert!(RgbColor::from_hex(preset.to).is_ok());
        }
    }

    #[test]
    fn test_find_preset_case_insensitive() {
        assert!(find_preset("glassmorphism").is_some());
        assert!(find_preset("Neon Glow").is_some());
        assert!(find_preset("no such preset").is_none());
    }

    #[test]
    fn test_gradient_swatch_update_sets_both_stops() {
        let update = GRADIENT_PRESETS[0].to_update();
        assert_eq!(update.bg_gradient_from.as_deref(), Some("#667eea"));
        assert_eq!(
            update.bg_gradient_to,
            Some(Some("#764ba2".to_string()))
        );
    }
}
