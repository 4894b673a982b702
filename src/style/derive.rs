//! Pure card-to-style derivation.
//!
//! [`derive_style`] maps a card and a viewport zoom level to the exact set of
//! rendering parameters needed to paint it. It has no side effects and no
//! reference back to history or UI state; calling it twice with the same
//! inputs yields identical output.

use crate::models::{Card, RgbColor};
use crate::style::StyleDescriptor;

/// Derives the renderable style for a card at the given viewport zoom.
///
/// Color strings that fail to parse fall back to a fixed default rather than
/// erroring; the UI always supplies valid colors from a picker, so leniency
/// here cannot lose user data.
///
/// `zoom` is a viewport-level multiplier applied as the last transform step;
/// it never feeds back into stored card state.
#[must_use]
pub fn derive_style(card: &Card, zoom: f64) -> StyleDescriptor {
    let bg_from = RgbColor::from_hex_lenient(&card.bg_gradient_from);
    let bg_to = RgbColor::from_hex_lenient(
        card.bg_gradient_to
            .as_deref()
            .unwrap_or(&card.bg_gradient_from),
    );
    let shadow = RgbColor::from_hex_lenient(&card.shadow_color);

    let background = if card.bg_gradient_to.is_some() {
        // Defensive re-normalization: documents straight from disk may not
        // have passed through the write-side clamp yet.
        let angle = card.gradient_angle % 360;
        format!(
            "linear-gradient({angle}deg, {}, {})",
            rgba(bg_from, f64::from(card.bg_opacity_from) / 100.0),
            rgba(bg_to, f64::from(card.bg_opacity_to) / 100.0),
        )
    } else {
        rgba(bg_from, f64::from(card.card_opacity) / 100.0)
    };

    let box_shadow = format!(
        "{}px {}px {}px {}px {}",
        card.shadow_settings.x,
        card.shadow_settings.y,
        card.shadow_settings.blur,
        card.shadow_settings.spread,
        rgba(shadow, card.shadow_opacity),
    );

    let transform = format!(
        "rotate({}deg) scaleX({}) scaleY({}) scale({zoom})",
        card.rotation, card.scale_x, card.scale_y,
    );

    let filter = format!(
        "blur({}px) brightness({}%) contrast({}%) saturate({}%)",
        card.blur, card.brightness, card.contrast, card.saturation,
    );

    let (backdrop_filter, border) = if card.enable_hover_effects {
        (
            "blur(20px)".to_string(),
            "1px solid rgba(255, 255, 255, 0.1)".to_string(),
        )
    } else {
        ("none".to_string(), "none".to_string())
    };

    StyleDescriptor {
        width: format!("{}px", card.card_width),
        height: format!("{}px", card.card_height),
        background,
        border_radius: format!(
            "{}{}",
            card.card_border_radius.top_left, card.card_border_radius.unit
        ),
        box_shadow,
        padding: format!("{}px", card.card_padding),
        color: "white".to_string(),
        transform,
        filter,
        transition: "all 0.3s ease".to_string(),
        backdrop_filter,
        border,
    }
}

/// Formats a color with an alpha channel as a CSS `rgba()` value.
fn rgba(color: RgbColor, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {alpha})", color.r, color.g, color.b)
}
