//! Static panel and field model for the editor sidebar.
//!
//! Panels are a fixed enum over editing concerns; each panel owns a fixed
//! list of typed fields. Slider-style fields adjust as live debounced
//! updates; discrete choices (fonts, alignments, units, toggles) commit
//! immediately.

use crate::models::{Card, CardUpdate, FontFamily, FontWeight, RadiusUnit, TextAlign};

/// The editor panels, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Geometry, rounding and flags
    Style,
    /// Background colors, angle and stop opacities
    Gradient,
    /// Drop shadow offsets, color and opacity
    Shadow,
    /// Title/description content and typography
    Text,
    /// Transform and filter adjustments
    Effects,
    /// Named presets and gradient swatches
    Presets,
}

impl Panel {
    /// All panels in tab order.
    pub const ALL: [Self; 6] = [
        Self::Style,
        Self::Gradient,
        Self::Shadow,
        Self::Text,
        Self::Effects,
        Self::Presets,
    ];

    /// Display title for the panel tab.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Style => "Style",
            Self::Gradient => "Gradient",
            Self::Shadow => "Shadow",
            Self::Text => "Text",
            Self::Effects => "Effects",
            Self::Presets => "Presets",
        }
    }

    /// The fields shown in this panel, top to bottom.
    ///
    /// The presets panel renders its own selection list and has no fields.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldId] {
        match self {
            Self::Style => &[
                FieldId::Width,
                FieldId::Height,
                FieldId::Padding,
                FieldId::CornerRadius,
                FieldId::CornerUnit,
                FieldId::CardOpacity,
                FieldId::HoverEffects,
                FieldId::Animations,
            ],
            Self::Gradient => &[
                FieldId::GradientFrom,
                FieldId::GradientTo,
                FieldId::GradientAngle,
                FieldId::BgOpacityFrom,
                FieldId::BgOpacityTo,
            ],
            Self::Shadow => &[
                FieldId::ShadowX,
                FieldId::ShadowY,
                FieldId::ShadowBlur,
                FieldId::ShadowSpread,
                FieldId::ShadowColor,
                FieldId::ShadowOpacity,
            ],
            Self::Text => &[
                FieldId::Title,
                FieldId::TitleFont,
                FieldId::TitleWeight,
                FieldId::TitleSize,
                FieldId::TitleAlign,
                FieldId::Description,
                FieldId::DescriptionFont,
                FieldId::DescriptionWeight,
                FieldId::DescriptionSize,
                FieldId::DescriptionAlign,
            ],
            Self::Effects => &[
                FieldId::Rotation,
                FieldId::ScaleX,
                FieldId::ScaleY,
                FieldId::Blur,
                FieldId::Brightness,
                FieldId::Contrast,
                FieldId::Saturation,
            ],
            Self::Presets => &[],
        }
    }

    /// The next panel in tab order, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The previous panel in tab order, wrapping.
    #[must_use]
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which color field a picker dialog is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    /// Gradient start color
    GradientFrom,
    /// Gradient end color
    GradientTo,
    /// Shadow color
    Shadow,
}

/// Which text field an inline edit is targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    /// Card title
    Title,
    /// Card description
    Description,
}

/// Result of activating (Enter) a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldAction {
    /// Open the color picker for the given target
    OpenColorPicker(ColorTarget),
    /// Start inline text editing for the given target
    EditText(TextTarget),
    /// Apply an immediate update (toggles, solid/gradient switch)
    Apply(CardUpdate),
    /// Nothing to do
    None,
}

/// Every editable card field addressable by the panel UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)] // Variant names mirror the card fields they edit
pub enum FieldId {
    Title,
    Description,
    GradientFrom,
    GradientTo,
    GradientAngle,
    BgOpacityFrom,
    BgOpacityTo,
    Width,
    Height,
    Padding,
    CornerRadius,
    CornerUnit,
    CardOpacity,
    HoverEffects,
    Animations,
    ShadowX,
    ShadowY,
    ShadowBlur,
    ShadowSpread,
    ShadowColor,
    ShadowOpacity,
    TitleFont,
    TitleWeight,
    TitleSize,
    TitleAlign,
    DescriptionFont,
    DescriptionWeight,
    DescriptionSize,
    DescriptionAlign,
    Rotation,
    ScaleX,
    ScaleY,
    Blur,
    Brightness,
    Contrast,
    Saturation,
}

impl FieldId {
    /// Row label in the panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::GradientFrom => "From color",
            Self::GradientTo => "To color",
            Self::GradientAngle => "Angle",
            Self::BgOpacityFrom => "From opacity",
            Self::BgOpacityTo => "To opacity",
            Self::Width => "Width",
            Self::Height => "Height",
            Self::Padding => "Padding",
            Self::CornerRadius => "Corner radius",
            Self::CornerUnit => "Radius unit",
            Self::CardOpacity => "Card opacity",
            Self::HoverEffects => "Hover effects",
            Self::Animations => "Animations",
            Self::ShadowX => "Offset X",
            Self::ShadowY => "Offset Y",
            Self::ShadowBlur => "Blur",
            Self::ShadowSpread => "Spread",
            Self::ShadowColor => "Color",
            Self::ShadowOpacity => "Opacity",
            Self::TitleFont => "Title font",
            Self::TitleWeight => "Title weight",
            Self::TitleSize => "Title size",
            Self::TitleAlign => "Title align",
            Self::DescriptionFont => "Desc font",
            Self::DescriptionWeight => "Desc weight",
            Self::DescriptionSize => "Desc size",
            Self::DescriptionAlign => "Desc align",
            Self::Rotation => "Rotation",
            Self::ScaleX => "Scale X",
            Self::ScaleY => "Scale Y",
            Self::Blur => "Blur",
            Self::Brightness => "Brightness",
            Self::Contrast => "Contrast",
            Self::Saturation => "Saturation",
        }
    }

    /// Current display value for the row.
    #[must_use]
    pub fn value_text(self, card: &Card) -> String {
        match self {
            Self::Title => card.title.clone(),
            Self::Description => card.description.clone(),
            Self::GradientFrom => card.bg_gradient_from.clone(),
            Self::GradientTo => card
                .bg_gradient_to
                .clone()
                .unwrap_or_else(|| "solid".to_string()),
            Self::GradientAngle => format!("{}°", card.gradient_angle),
            Self::BgOpacityFrom => format!("{}%", card.bg_opacity_from),
            Self::BgOpacityTo => format!("{}%", card.bg_opacity_to),
            Self::Width => format!("{}px", card.card_width),
            Self::Height => format!("{}px", card.card_height),
            Self::Padding => format!("{}px", card.card_padding),
            Self::CornerRadius => format!(
                "{}{}",
                card.card_border_radius.top_left, card.card_border_radius.unit
            ),
            Self::CornerUnit => card.card_border_radius.unit.to_string(),
            Self::CardOpacity => format!("{}%", card.card_opacity),
            Self::HoverEffects => on_off(card.enable_hover_effects),
            Self::Animations => on_off(card.enable_animations),
            Self::ShadowX => format!("{}px", card.shadow_settings.x),
            Self::ShadowY => format!("{}px", card.shadow_settings.y),
            Self::ShadowBlur => format!("{}px", card.shadow_settings.blur),
            Self::ShadowSpread => format!("{}px", card.shadow_settings.spread),
            Self::ShadowColor => card.shadow_color.clone(),
            Self::ShadowOpacity => format!("{:.2}", card.shadow_opacity),
            Self::TitleFont => card.title_font.to_string(),
            Self::TitleWeight => {
                format!("{} ({})", card.title_weight, card.title_weight.label())
            }
            Self::TitleSize => format!("{}px", card.title_size),
            Self::TitleAlign => card.title_align.to_string(),
            Self::DescriptionFont => card.description_font.to_string(),
            Self::DescriptionWeight => format!(
                "{} ({})",
                card.description_weight,
                card.description_weight.label()
            ),
            Self::DescriptionSize => format!("{}px", card.description_size),
            Self::DescriptionAlign => card.description_align.to_string(),
            Self::Rotation => format!("{}°", card.rotation),
            Self::ScaleX => format!("{:.2}", card.scale_x),
            Self::ScaleY => format!("{:.2}", card.scale_y),
            Self::Blur => format!("{}px", card.blur),
            Self::Brightness => format!("{}%", card.brightness),
            Self::Contrast => format!("{}%", card.contrast),
            Self::Saturation => format!("{}%", card.saturation),
        }
    }

    /// Adjusts the field by one step in the given direction.
    ///
    /// Returns the update and whether it should commit immediately: sliders
    /// are live debounced updates, discrete choices commit right away.
    /// `coarse` selects the larger step for slider fields.
    #[must_use]
    pub fn adjust(self, card: &Card, direction: i64, coarse: bool) -> Option<(CardUpdate, bool)> {
        let step = |fine: i64, big: i64| if coarse { big * direction } else { fine * direction };
        let mut update = CardUpdate::default();
        let mut immediate = false;

        match self {
            // Inline-edited or picker-backed fields do not adjust
            Self::Title | Self::Description | Self::GradientFrom | Self::ShadowColor => {
                return None;
            }
            Self::GradientTo => {
                // Edited via the picker; cleared to solid mode via Delete
                return None;
            }
            Self::GradientAngle => {
                let delta = step(5, 15);
                let angle = (i64::from(card.gradient_angle) + delta).rem_euclid(360);
                update.gradient_angle = Some(angle as u16);
            }
            Self::BgOpacityFrom => {
                update.bg_opacity_from = Some(step_u8(card.bg_opacity_from, step(1, 10)));
            }
            Self::BgOpacityTo => {
                update.bg_opacity_to = Some(step_u8(card.bg_opacity_to, step(1, 10)));
            }
            Self::Width => {
                update.card_width = Some(step_u32(card.card_width, step(10, 50), 40, 1280));
            }
            Self::Height => {
                update.card_height = Some(step_u32(card.card_height, step(10, 50), 40, 1280));
            }
            Self::Padding => {
                update.card_padding = Some(step_u32(card.card_padding, step(2, 8), 0, 200));
            }
            Self::CornerRadius => {
                let mut radius = card.card_border_radius;
                let value = step_u32(radius.top_left, step(1, 8), 0, 500);
                radius.top_left = value;
                radius.top_right = value;
                radius.bottom_left = value;
                radius.bottom_right = value;
                update.card_border_radius = Some(radius);
            }
            Self::CornerUnit => {
                let mut radius = card.card_border_radius;
                radius.unit = cycle(&RadiusUnit::ALL, radius.unit, direction);
                update.card_border_radius = Some(radius);
                immediate = true;
            }
            Self::CardOpacity => {
                update.card_opacity = Some(step_u8(card.card_opacity, step(1, 10)));
            }
            Self::HoverEffects => {
                update.enable_hover_effects = Some(!card.enable_hover_effects);
                immediate = true;
            }
            Self::Animations => {
                update.enable_animations = Some(!card.enable_animations);
                immediate = true;
            }
            Self::ShadowX => {
                let mut shadow = card.shadow_settings;
                shadow.x = step_i32(shadow.x, step(1, 4), -100, 100);
                update.shadow_settings = Some(shadow);
            }
            Self::ShadowY => {
                let mut shadow = card.shadow_settings;
                shadow.y = step_i32(shadow.y, step(1, 4), -100, 100);
                update.shadow_settings = Some(shadow);
            }
            Self::ShadowBlur => {
                let mut shadow = card.shadow_settings;
                shadow.blur = step_u32(shadow.blur, step(1, 4), 0, 200);
                update.shadow_settings = Some(shadow);
            }
            Self::ShadowSpread => {
                let mut shadow = card.shadow_settings;
                shadow.spread = step_i32(shadow.spread, step(1, 4), -50, 50);
                update.shadow_settings = Some(shadow);
            }
            Self::ShadowOpacity => {
                let delta = f64::from(step(5, 15) as i32) / 100.0;
                update.shadow_opacity = Some((card.shadow_opacity + delta).clamp(0.0, 1.0));
            }
            Self::TitleFont => {
                update.title_font = Some(cycle(&FontFamily::ALL, card.title_font, direction));
                immediate = true;
            }
            Self::TitleWeight => {
                update.title_weight = Some(cycle(&FontWeight::ALL, card.title_weight, direction));
                immediate = true;
            }
            Self::TitleSize => {
                update.title_size = Some(step_u32(card.title_size, step(1, 4), 6, 96));
            }
            Self::TitleAlign => {
                update.title_align = Some(cycle(&TextAlign::ALL, card.title_align, direction));
                immediate = true;
            }
            Self::DescriptionFont => {
                update.description_font =
                    Some(cycle(&FontFamily::ALL, card.description_font, direction));
                immediate = true;
            }
            Self::DescriptionWeight => {
                update.description_weight =
                    Some(cycle(&FontWeight::ALL, card.description_weight, direction));
                immediate = true;
            }
            Self::DescriptionSize => {
                update.description_size = Some(step_u32(card.description_size, step(1, 4), 6, 96));
            }
            Self::DescriptionAlign => {
                update.description_align =
                    Some(cycle(&TextAlign::ALL, card.description_align, direction));
                immediate = true;
            }
            Self::Rotation => {
                let delta = step(1, 15) as i16;
                update.rotation = Some((card.rotation + delta).clamp(-180, 180));
            }
            Self::ScaleX => {
                let delta = f64::from(step(5, 25) as i32) / 100.0;
                update.scale_x = Some((card.scale_x + delta).clamp(0.1, 3.0));
            }
            Self::ScaleY => {
                let delta = f64::from(step(5, 25) as i32) / 100.0;
                update.scale_y = Some((card.scale_y + delta).clamp(0.1, 3.0));
            }
            Self::Blur => {
                update.blur = Some(step_u32(card.blur, step(1, 5), 0, 50));
            }
            Self::Brightness => {
                update.brightness = Some(step_u16(card.brightness, step(5, 25)));
            }
            Self::Contrast => {
                update.contrast = Some(step_u16(card.contrast, step(5, 25)));
            }
            Self::Saturation => {
                update.saturation = Some(step_u16(card.saturation, step(5, 25)));
            }
        }

        Some((update, immediate))
    }

    /// Activates the field (Enter).
    #[must_use]
    pub fn activate(self, card: &Card) -> FieldAction {
        match self {
            Self::Title => FieldAction::EditText(TextTarget::Title),
            Self::Description => FieldAction::EditText(TextTarget::Description),
            Self::GradientFrom => FieldAction::OpenColorPicker(ColorTarget::GradientFrom),
            Self::GradientTo => FieldAction::OpenColorPicker(ColorTarget::GradientTo),
            Self::ShadowColor => FieldAction::OpenColorPicker(ColorTarget::Shadow),
            Self::HoverEffects => FieldAction::Apply(CardUpdate {
                enable_hover_effects: Some(!card.enable_hover_effects),
                ..CardUpdate::default()
            }),
            Self::Animations => FieldAction::Apply(CardUpdate {
                enable_animations: Some(!card.enable_animations),
                ..CardUpdate::default()
            }),
            _ => FieldAction::None,
        }
    }

    /// Whether Delete has a meaning on this field (clearing the gradient end
    /// color back to solid mode).
    #[must_use]
    pub fn clear_action(self) -> Option<CardUpdate> {
        match self {
            Self::GradientTo => Some(CardUpdate {
                bg_gradient_to: Some(None),
                ..CardUpdate::default()
            }),
            _ => None,
        }
    }
}

fn on_off(value: bool) -> String {
    if value { "on" } else { "off" }.to_string()
}

/// Steps through a cycle of options in either direction.
fn cycle<T: Copy + PartialEq>(options: &[T], current: T, direction: i64) -> T {
    let len = options.len() as i64;
    let index = options.iter().position(|o| *o == current).unwrap_or(0) as i64;
    options[((index + direction).rem_euclid(len)) as usize]
}

fn step_u8(value: u8, delta: i64) -> u8 {
    (i64::from(value) + delta).clamp(0, 100) as u8
}

fn step_u16(value: u16, delta: i64) -> u16 {
    (i64::from(value) + delta).clamp(0, 200) as u16
}

fn step_u32(value: u32, delta: i64, min: u32, max: u32) -> u32 {
    (i64::from(value) + delta).clamp(i64::from(min), i64::from(max)) as u32
}

fn step_i32(value: i32, delta: i64, min: i32, max: i32) -> i32 {
    (i64::from(value) + delta).clamp(i64::from(min), i64::from(max)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_cycle_wraps() {
        assert_eq!(Panel::Style.next(), Panel::Gradient);
        assert_eq!(Panel::Presets.next(), Panel::Style);
        assert_eq!(Panel::Style.prev(), Panel::Presets);
    }

    #[test]
    fn test_slider_adjust_is_debounced() {
        let card = Card::default();
        let (update, immediate) = FieldId::Width.adjust(&card, 1, false).unwrap();
        assert_eq!(update.card_width, Some(330));
        assert!(!immediate);
    }

    #[test]
    fn test_choice_adjust_is_immediate() {
        let card = Card::default();
        let (update, immediate) = FieldId::TitleAlign.adjust(&card, 1, false).unwrap();
        assert_eq!(update.title_align, Some(TextAlign::Center));
        assert!(immediate);
    }

    #[test]
    fn test_angle_adjust_wraps_backwards() {
        let mut card = Card::default();
        card.gradient_angle = 0;
        let (update, _) = FieldId::GradientAngle.adjust(&card, -1, false).unwrap();
        assert_eq!(update.gradient_angle, Some(355));
    }

    #[test]
    fn test_corner_radius_adjust_moves_all_corners() {
        let card = Card::default();
        let (update, _) = FieldId::CornerRadius.adjust(&card, 1, true).unwrap();
        let radius = update.card_border_radius.unwrap();
        assert_eq!(radius.top_left, 24);
        assert_eq!(radius.bottom_right, 24);
    }

    #[test]
    fn test_color_fields_activate_picker() {
        let card = Card::default();
        assert_eq!(
            FieldId::ShadowColor.activate(&card),
            FieldAction::OpenColorPicker(ColorTarget::Shadow)
        );
        assert!(FieldId::ShadowColor.adjust(&card, 1, false).is_none());
    }

    #[test]
    fn test_gradient_to_clear_action() {
        let update = FieldId::GradientTo.clear_action().unwrap();
        assert_eq!(update.bg_gradient_to, Some(None));
        assert!(FieldId::Width.clear_action().is_none());
    }

    #[test]
    fn test_scale_adjust_clamps() {
        let mut card = Card::default();
        card.scale_x = 3.0;
        let (update, _) = FieldId::ScaleX.adjust(&card, 1, true).unwrap();
        assert!((update.scale_x.unwrap() - 3.0).abs() < f64::EPSILON);
    }
}
