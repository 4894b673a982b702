//! The derived, ready-to-render style value type.

use serde::Serialize;

/// Rendering parameters derived from a card.
///
/// Every field holds the final CSS value string; serializers reuse these
/// verbatim so exported output is textually identical to what the preview
/// derivation computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    /// `width` value (e.g. "320px")
    pub width: String,
    /// `height` value (e.g. "200px")
    pub height: String,
    /// `background` value: a linear-gradient() or a flat rgba()
    pub background: String,
    /// `border-radius` value (e.g. "16px")
    pub border_radius: String,
    /// `box-shadow` value
    pub box_shadow: String,
    /// `padding` value (e.g. "24px")
    pub padding: String,
    /// Foreground text color
    pub color: String,
    /// `transform` chain: rotate, scaleX, scaleY, viewport scale
    pub transform: String,
    /// `filter` chain: blur, brightness, contrast, saturate
    pub filter: String,
    /// `transition` value
    pub transition: String,
    /// `backdrop-filter` value, "none" when hover effects are off
    pub backdrop_filter: String,
    /// `border` value, "none" when hover effects are off
    pub border: String,
}
