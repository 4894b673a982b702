//! Card data structures: the styled entity being edited.
//!
//! The card model is the single domain entity of the application. All mutation
//! flows through [`CardUpdate`], which clamps out-of-range values on write and
//! refreshes the modification timestamp. Reads never clamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unit used for border radius values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RadiusUnit {
    /// Pixels
    #[default]
    #[serde(rename = "px")]
    Px,
    /// Percentage of the card dimension
    #[serde(rename = "%")]
    Percent,
    /// Relative to the font size
    #[serde(rename = "em")]
    Em,
    /// Relative to the root font size
    #[serde(rename = "rem")]
    Rem,
}

impl RadiusUnit {
    /// All units in cycling order for the editor UI.
    pub const ALL: [Self; 4] = [Self::Px, Self::Percent, Self::Em, Self::Rem];
}

impl fmt::Display for RadiusUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Em => "em",
            Self::Rem => "rem",
        };
        write!(f, "{s}")
    }
}

/// Border radius with four independent corners and a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderRadius {
    /// Top-left corner radius
    pub top_left: u32,
    /// Top-right corner radius
    pub top_right: u32,
    /// Bottom-left corner radius
    pub bottom_left: u32,
    /// Bottom-right corner radius
    pub bottom_right: u32,
    /// Unit applied to all four corners
    pub unit: RadiusUnit,
}

impl BorderRadius {
    /// Creates a radius with the same value on all four corners.
    #[must_use]
    pub const fn uniform(value: u32, unit: RadiusUnit) -> Self {
        Self {
            top_left: value,
            top_right: value,
            bottom_left: value,
            bottom_right: value,
            unit,
        }
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self::uniform(16, RadiusUnit::Px)
    }
}

/// Drop shadow offsets and dimensions, in pixels.
///
/// `x`, `y` and `spread` may be negative; `blur` cannot be by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShadowSettings {
    /// Horizontal offset
    pub x: i32,
    /// Vertical offset
    pub y: i32,
    /// Blur radius
    pub blur: u32,
    /// Spread distance
    pub spread: i32,
}

impl ShadowSettings {
    /// Creates shadow settings from individual components.
    #[must_use]
    pub const fn new(x: i32, y: i32, blur: u32, spread: i32) -> Self {
        Self { x, y, blur, spread }
    }
}

/// Text alignment for the title and description blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Align to the left edge
    #[default]
    Left,
    /// Center between the edges
    Center,
    /// Align to the right edge
    Right,
    /// Stretch lines to both edges
    Justify,
}

impl TextAlign {
    /// All alignments in cycling order for the editor UI.
    pub const ALL: [Self; 4] = [Self::Left, Self::Center, Self::Right, Self::Justify];

    /// SVG `text-anchor` value for this alignment.
    ///
    /// SVG has no justify anchor; justify falls through to `start`.
    #[must_use]
    pub const fn svg_anchor(self) -> &'static str {
        match self {
            Self::Center => "middle",
            Self::Right => "end",
            Self::Left | Self::Justify => "start",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        };
        write!(f, "{s}")
    }
}

/// Font family options offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontFamily {
    /// Inter
    #[default]
    Inter,
    /// Arial
    Arial,
    /// Helvetica
    Helvetica,
    /// Georgia
    Georgia,
    /// Verdana
    Verdana,
    /// Times New Roman
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
}

impl FontFamily {
    /// All families in cycling order for the editor UI.
    pub const ALL: [Self; 6] = [
        Self::Inter,
        Self::Arial,
        Self::Helvetica,
        Self::Georgia,
        Self::Verdana,
        Self::TimesNewRoman,
    ];
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Inter => "Inter",
            Self::Arial => "Arial",
            Self::Helvetica => "Helvetica",
            Self::Georgia => "Georgia",
            Self::Verdana => "Verdana",
            Self::TimesNewRoman => "Times New Roman",
        };
        write!(f, "{s}")
    }
}

/// Font weight options, stored as the CSS numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum FontWeight {
    /// 300
    #[serde(rename = "300")]
    Light,
    /// 400
    #[default]
    #[serde(rename = "400")]
    Normal,
    /// 500
    #[serde(rename = "500")]
    Medium,
    /// 600
    #[serde(rename = "600")]
    Semibold,
    /// 700
    #[serde(rename = "700")]
    Bold,
    /// 800
    #[serde(rename = "800")]
    ExtraBold,
}

impl FontWeight {
    /// All weights in cycling order for the editor UI.
    pub const ALL: [Self; 6] = [
        Self::Light,
        Self::Normal,
        Self::Medium,
        Self::Semibold,
        Self::Bold,
        Self::ExtraBold,
    ];

    /// Human-readable label for pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Normal => "Normal",
            Self::Medium => "Medium",
            Self::Semibold => "Semibold",
            Self::Bold => "Bold",
            Self::ExtraBold => "ExtraBold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Light => "300",
            Self::Normal => "400",
            Self::Medium => "500",
            Self::Semibold => "600",
            Self::Bold => "700",
            Self::ExtraBold => "800",
        };
        write!(f, "{s}")
    }
}

/// The styled card entity.
///
/// Field ranges are clamped when an update is applied, never on read:
/// opacity-like fields to 0-100 (`shadow_opacity` to 0.0-1.0), rotation to
/// -180..=180, brightness/contrast/saturation to 0..=200, and
/// `gradient_angle` normalized modulo 360.
///
/// `bg_gradient_to` presence is the sole discriminator between gradient and
/// solid background modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    /// Stable identity of the card
    pub id: String,
    /// Heading text
    pub title: String,
    /// Body text
    pub description: String,
    /// Gradient start color (hex), always present
    pub bg_gradient_from: String,
    /// Gradient end color (hex); absence means solid background mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient_to: Option<String>,
    /// Overall opacity percentage used in solid mode (0-100)
    pub card_opacity: u8,
    /// Corner rounding
    pub card_border_radius: BorderRadius,
    /// Presentational hover extras toggle
    pub enable_hover_effects: bool,
    /// Card width in pixels
    pub card_width: u32,
    /// Card height in pixels
    pub card_height: u32,
    /// Opacity of the gradient start stop (0-100)
    pub bg_opacity_from: u8,
    /// Opacity of the gradient end stop (0-100)
    pub bg_opacity_to: u8,
    /// Gradient direction in degrees, normalized to [0, 360)
    pub gradient_angle: u16,
    /// Drop shadow offsets and dimensions
    pub shadow_settings: ShadowSettings,
    /// Drop shadow color (hex)
    pub shadow_color: String,
    /// Drop shadow opacity (0.0-1.0)
    pub shadow_opacity: f64,
    /// Title font family
    pub title_font: FontFamily,
    /// Title font weight
    pub title_weight: FontWeight,
    /// Title font size in pixels
    pub title_size: u32,
    /// Title text alignment
    pub title_align: TextAlign,
    /// Description font family
    pub description_font: FontFamily,
    /// Description font weight
    pub description_weight: FontWeight,
    /// Description font size in pixels
    pub description_size: u32,
    /// Description text alignment
    pub description_align: TextAlign,
    /// Rotation in degrees (-180..=180)
    pub rotation: i16,
    /// Horizontal scale multiplier (1.0 = 100%)
    pub scale_x: f64,
    /// Vertical scale multiplier (1.0 = 100%)
    pub scale_y: f64,
    /// Blur filter radius in pixels
    pub blur: u32,
    /// Brightness filter percentage (0-200)
    pub brightness: u16,
    /// Contrast filter percentage (0-200)
    pub contrast: u16,
    /// Saturation filter percentage (0-200)
    pub saturation: u16,
    /// Presentational animation toggle
    pub enable_animations: bool,
    /// Inner padding in pixels
    pub card_padding: u32,
    /// Creation timestamp, set once and never mutated afterwards
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp, refreshed on every applied update
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Creates a fresh card with a generated id and the default styling.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            ..Self::default()
        }
    }

    /// Refreshes the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Applies a sparse update, clamping values to their documented ranges
    /// and stamping `updated_at`. Identity and `created_at` are untouchable.
    pub fn apply(&mut self, update: &CardUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(from) = &update.bg_gradient_from {
            self.bg_gradient_from = from.clone();
        }
        if let Some(to) = &update.bg_gradient_to {
            self.bg_gradient_to = to.clone();
        }
        if let Some(opacity) = update.card_opacity {
            self.card_opacity = opacity.min(100);
        }
        if let Some(radius) = update.card_border_radius {
            self.card_border_radius = radius;
        }
        if let Some(hover) = update.enable_hover_effects {
            self.enable_hover_effects = hover;
        }
        if let Some(width) = update.card_width {
            self.card_width = width;
        }
        if let Some(height) = update.card_height {
            self.card_height = height;
        }
        if let Some(opacity) = update.bg_opacity_from {
            self.bg_opacity_from = opacity.min(100);
        }
        if let Some(opacity) = update.bg_opacity_to {
            self.bg_opacity_to = opacity.min(100);
        }
        if let Some(angle) = update.gradient_angle {
            self.gradient_angle = angle % 360;
        }
        if let Some(shadow) = update.shadow_settings {
            self.shadow_settings = shadow;
        }
        if let Some(color) = &update.shadow_color {
            self.shadow_color = color.clone();
        }
        if let Some(opacity) = update.shadow_opacity {
            self.shadow_opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(font) = update.title_font {
            self.title_font = font;
        }
        if let Some(weight) = update.title_weight {
            self.title_weight = weight;
        }
        if let Some(size) = update.title_size {
            self.title_size = size;
        }
        if let Some(align) = update.title_align {
            self.title_align = align;
        }
        if let Some(font) = update.description_font {
            self.description_font = font;
        }
        if let Some(weight) = update.description_weight {
            self.description_weight = weight;
        }
        if let Some(size) = update.description_size {
            self.description_size = size;
        }
        if let Some(align) = update.description_align {
            self.description_align = align;
        }
        if let Some(rotation) = update.rotation {
            self.rotation = rotation.clamp(-180, 180);
        }
        if let Some(scale) = update.scale_x {
            self.scale_x = scale.max(0.0);
        }
        if let Some(scale) = update.scale_y {
            self.scale_y = scale.max(0.0);
        }
        if let Some(blur) = update.blur {
            self.blur = blur;
        }
        if let Some(brightness) = update.brightness {
            self.brightness = brightness.min(200);
        }
        if let Some(contrast) = update.contrast {
            self.contrast = contrast.min(200);
        }
        if let Some(saturation) = update.saturation {
            self.saturation = saturation.min(200);
        }
        if let Some(animations) = update.enable_animations {
            self.enable_animations = animations;
        }
        if let Some(padding) = update.card_padding {
            self.card_padding = padding;
        }
        self.touch();
    }

    /// Returns a copy with the update applied. The receiver is untouched.
    #[must_use]
    pub fn with_update(&self, update: &CardUpdate) -> Self {
        let mut card = self.clone();
        card.apply(update);
        card
    }

    /// Re-applies range clamps and angle normalization in place.
    ///
    /// Documents loaded from disk may carry out-of-range values; they are
    /// repaired here rather than rejected.
    pub fn sanitize(&mut self) {
        self.card_opacity = self.card_opacity.min(100);
        self.bg_opacity_from = self.bg_opacity_from.min(100);
        self.bg_opacity_to = self.bg_opacity_to.min(100);
        self.gradient_angle %= 360;
        self.shadow_opacity = self.shadow_opacity.clamp(0.0, 1.0);
        self.rotation = self.rotation.clamp(-180, 180);
        self.scale_x = self.scale_x.max(0.0);
        self.scale_y = self.scale_y.max(0.0);
        self.brightness = self.brightness.min(200);
        self.contrast = self.contrast.min(200);
        self.saturation = self.saturation.min(200);
    }

    /// Produces a copy with a fresh derived id, "(Copy)" title suffix and
    /// fresh timestamps.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        let now = Utc::now();
        Self {
            id: format!("{}-copy-{}", self.id, now.timestamp_millis()),
            title: format!("{} (Copy)", self.title),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }
}

impl Default for Card {
    /// The default card styling: a purple-to-cyan gradient card.
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: "default".to_string(),
            title: "Modern Card".to_string(),
            description: "Live preview with real-time updates".to_string(),
            bg_gradient_from: "#8b5cf6".to_string(),
            bg_gradient_to: Some("#06b6d4".to_string()),
            card_opacity: 100,
            card_border_radius: BorderRadius::uniform(16, RadiusUnit::Px),
            enable_hover_effects: true,
            card_width: 320,
            card_height: 200,
            bg_opacity_from: 90,
            bg_opacity_to: 60,
            gradient_angle: 135,
            shadow_settings: ShadowSettings::new(0, 8, 32, 0),
            shadow_color: "#8b5cf6".to_string(),
            shadow_opacity: 0.3,
            title_font: FontFamily::Inter,
            title_weight: FontWeight::Semibold,
            title_size: 18,
            title_align: TextAlign::Left,
            description_font: FontFamily::Inter,
            description_weight: FontWeight::Normal,
            description_size: 14,
            description_align: TextAlign::Left,
            rotation: 0,
            scale_x: 1.0,
            scale_y: 1.0,
            blur: 0,
            brightness: 100,
            contrast: 100,
            saturation: 100,
            enable_animations: true,
            card_padding: 24,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Sparse partial update: the only mutation currency for cards.
///
/// Every settable field is optional; unset fields leave the card untouched.
/// `bg_gradient_to` is doubly optional so an update can distinguish "leave
/// alone" (absent) from "clear to solid mode" (explicit null).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CardUpdate {
    /// New heading text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New gradient start color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_gradient_from: Option<String>,
    /// New gradient end color; `Some(None)` switches to solid mode
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub bg_gradient_to: Option<Option<String>>,
    /// New solid-mode opacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_opacity: Option<u8>,
    /// New corner rounding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_border_radius: Option<BorderRadius>,
    /// Toggle hover extras
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_hover_effects: Option<bool>,
    /// New width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_width: Option<u32>,
    /// New height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_height: Option<u32>,
    /// New gradient start stop opacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_opacity_from: Option<u8>,
    /// New gradient end stop opacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_opacity_to: Option<u8>,
    /// New gradient angle in degrees (normalized modulo 360 on apply)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_angle: Option<u16>,
    /// New shadow offsets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_settings: Option<ShadowSettings>,
    /// New shadow color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    /// New shadow opacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<f64>,
    /// New title font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font: Option<FontFamily>,
    /// New title font weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_weight: Option<FontWeight>,
    /// New title font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_size: Option<u32>,
    /// New title alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_align: Option<TextAlign>,
    /// New description font family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_font: Option<FontFamily>,
    /// New description font weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_weight: Option<FontWeight>,
    /// New description font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_size: Option<u32>,
    /// New description alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_align: Option<TextAlign>,
    /// New rotation in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i16>,
    /// New horizontal scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    /// New vertical scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    /// New blur radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<u32>,
    /// New brightness percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u16>,
    /// New contrast percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<u16>,
    /// New saturation percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<u16>,
    /// Toggle animations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_animations: Option<bool>,
    /// New inner padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_padding: Option<u32>,
}

/// Deserializes a doubly-optional field so an explicit `null` maps to
/// `Some(None)` instead of collapsing into "absent".
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl CardUpdate {
    /// Update restoring transform, filter and opacity adjustments to their
    /// defaults. Colors, geometry and typography are left alone.
    #[must_use]
    pub fn reset_adjustments() -> Self {
        Self {
            rotation: Some(0),
            scale_x: Some(1.0),
            scale_y: Some(1.0),
            blur: Some(0),
            brightness: Some(100),
            contrast: Some(100),
            saturation: Some(100),
            card_opacity: Some(100),
            bg_opacity_from: Some(90),
            bg_opacity_to: Some(60),
            gradient_angle: Some(135),
            shadow_opacity: Some(0.3),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_styling() {
        let card = Card::default();
        assert_eq!(card.bg_gradient_from, "#8b5cf6");
        assert_eq!(card.bg_gradient_to.as_deref(), Some("#06b6d4"));
        assert_eq!(card.card_width, 320);
        assert_eq!(card.card_height, 200);
        assert_eq!(card.gradient_angle, 135);
        assert_eq!(card.title_weight, FontWeight::Semibold);
        assert_eq!(card.shadow_settings, ShadowSettings::new(0, 8, 32, 0));
    }

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Card::new();
        let b = Card::new();
        assert_ne!(a.id, b.id);
        assert_ne!(a.id, "default");
    }

    #[test]
    fn test_apply_merges_and_stamps_updated_at() {
        let mut card = Card::default();
        let before = card.updated_at;
        let created = card.created_at;

        card.apply(&CardUpdate {
            title: Some("Renamed".to_string()),
            card_width: Some(400),
            ..CardUpdate::default()
        });

        assert_eq!(card.title, "Renamed");
        assert_eq!(card.card_width, 400);
        // Untouched fields survive the merge
        assert_eq!(card.card_height, 200);
        assert!(card.updated_at >= before);
        assert_eq!(card.created_at, created);
    }

    #[test]
    fn test_apply_clamps_on_write() {
        let mut card = Card::default();
        card.apply(&CardUpdate {
            card_opacity: Some(150),
            bg_opacity_from: Some(255),
            shadow_opacity: Some(4.2),
            rotation: Some(300),
            brightness: Some(999),
            scale_x: Some(-1.0),
            ..CardUpdate::default()
        });

        assert_eq!(card.card_opacity, 100);
        assert_eq!(card.bg_opacity_from, 100);
        assert!((card.shadow_opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(card.rotation, 180);
        assert_eq!(card.brightness, 200);
        assert!((card.scale_x - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gradient_angle_normalizes_modulo_360() {
        let mut card = Card::default();
        card.apply(&CardUpdate {
            gradient_angle: Some(400),
            ..CardUpdate::default()
        });
        assert_eq!(card.gradient_angle, 40);

        card.apply(&CardUpdate {
            gradient_angle: Some(360),
            ..CardUpdate::default()
        });
        assert_eq!(card.gradient_angle, 0);
    }

    #[test]
    fn test_gradient_to_clear_switches_to_solid() {
        let mut card = Card::default();
        assert!(card.bg_gradient_to.is_some());

        card.apply(&CardUpdate {
            bg_gradient_to: Some(None),
            ..CardUpdate::default()
        });
        assert!(card.bg_gradient_to.is_none());

        card.apply(&CardUpdate {
            bg_gradient_to: Some(Some("#112233".to_string())),
            ..CardUpdate::default()
        });
        assert_eq!(card.bg_gradient_to.as_deref(), Some("#112233"));
    }

    #[test]
    fn test_duplicate_gets_fresh_identity() {
        let card = Card::default();
        let copy = card.duplicate();
        assert!(copy.id.starts_with("default-copy-"));
        assert_eq!(copy.title, "Modern Card (Copy)");
        assert_eq!(copy.card_width, card.card_width);
        assert!(copy.created_at >= card.created_at);
    }

    #[test]
    fn test_serde_uses_original_field_names() {
        let card = Card::default();
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("bgGradientFrom").is_some());
        assert!(json.get("cardBorderRadius").is_some());
        assert!(json.get("shadowSettings").is_some());
        assert_eq!(json["titleWeight"], "600");
        assert_eq!(json["cardBorderRadius"]["unit"], "px");
        assert_eq!(json["titleAlign"], "left");
    }

    #[test]
    fn test_card_deserializes_with_missing_fields() {
        let card: Card = serde_json::from_str(r#"{"title": "Sparse"}"#).unwrap();
        assert_eq!(card.title, "Sparse");
        assert_eq!(card.bg_gradient_from, "#8b5cf6");
        assert_eq!(card.card_padding, 24);
    }

    #[test]
    fn test_sanitize_repairs_loaded_values() {
        let mut card: Card =
            serde_json::from_str(r#"{"gradientAngle": 400, "cardOpacity": 250}"#).unwrap();
        card.sanitize();
        assert_eq!(card.gradient_angle, 40);
        assert_eq!(card.card_opacity, 100);
    }

    #[test]
    fn test_update_roundtrip_skips_unset_fields() {
        let update = CardUpdate {
            card_width: Some(400),
            ..CardUpdate::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"cardWidth":400}"#);

        let parsed: CardUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, update);
    }

    #[test]
    fn test_update_null_gradient_to_parses_as_clear() {
        let parsed: CardUpdate = serde_json::from_str(r#"{"bgGradientTo": null}"#).unwrap();
        assert_eq!(parsed.bg_gradient_to, Some(None));

        let untouched: CardUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(untouched.bg_gradient_to, None);
    }
}
