//! SVG export: gradient definition, rounded rect and positioned text.

use crate::export::escape_text;
use crate::models::Card;

/// Renders the card as a standalone SVG document.
///
/// The `linearGradient` uses the same two-stop color/opacity model as the
/// derived background; title and description are positioned from the card
/// padding, stacked by font size, and anchored per their alignment.
#[must_use]
pub fn generate_svg(card: &Card) -> String {
    let gradient_to = card
        .bg_gradient_to
        .as_deref()
        .unwrap_or(&card.bg_gradient_from);

    let title_y = card.card_padding + card.title_size;
    let description_y = card.card_padding + card.title_size + 20 + card.description_size;

    format!(
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="gradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{from};stop-opacity:{from_opacity}" />
      <stop offset="100%" style="stop-color:{to};stop-opacity:{to_opacity}" />
    </linearGradient>
  </defs>
  <rect width="100%" height="100%" fill="url(#gradient)" rx="{rx}" />
  <text x="{padding}" y="{title_y}"
        font-family="{title_font}"
        font-size="{title_size}"
        font-weight="{title_weight}"
        fill="white"
        text-anchor="{title_anchor}">
    {title}
  </text>
  <text x="{padding}" y="{description_y}"
        font-family="{description_font}"
        font-size="{description_size}"
        font-weight="{description_weight}"
        fill="rgba(255,255,255,0.9)"
        text-anchor="{description_anchor}">
    {description}
  </text>
</svg>"#,
        width = card.card_width,
        height = card.card_height,
        from = card.bg_gradient_from,
        from_opacity = f64::from(card.bg_opacity_from) / 100.0,
        to = gradient_to,
        to_opacity = f64::from(card.bg_opacity_to) / 100.0,
        rx = card.card_border_radius.top_left,
        padding = card.card_padding,
        title_y = title_y,
        title_font = card.title_font,
        title_size = card.title_size,
        title_weight = card.title_weight,
        title_anchor = card.title_align.svg_anchor(),
        title = escape_text(&card.title),
        description_y = description_y,
        description_font = card.description_font,
        description_size = card.description_size,
        description_weight = card.description_weight,
        description_anchor = card.description_align.svg_anchor(),
        description = escape_text(&card.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardUpdate, TextAlign};

    #[test]
    fn test_svg_structure() {
        let svg = generate_svg(&Card::default());
        assert!(svg.starts_with("<svg width=\"320\" height=\"200\""));
        assert!(svg.contains("<linearGradient id=\"gradient\""));
        assert!(svg.contains("stop-color:#8b5cf6;stop-opacity:0.9"));
        assert!(svg.contains("stop-color:#06b6d4;stop-opacity:0.6"));
        assert!(svg.contains("rx=\"16\""));
    }

    #[test]
    fn test_solid_mode_repeats_from_color() {
        let card = Card::default().with_update(&CardUpdate {
            bg_gradient_to: Some(None),
            ..CardUpdate::default()
        });
        let svg = generate_svg(&card);
        assert!(svg.contains("stop-color:#8b5cf6;stop-opacity:0.9"));
        assert!(svg.contains("stop-color:#8b5cf6;stop-opacity:0.6"));
    }

    #[test]
    fn test_text_positioning_stacks_by_font_size() {
        let svg = generate_svg(&Card::default());
        // title: padding 24 + size 18; description: 24 + 18 + 20 + 14
        assert!(svg.contains("y=\"42\""));
        assert!(svg.contains("y=\"76\""));
        assert!(svg.contains("x=\"24\""));
    }

    #[test]
    fn test_anchor_follows_alignment() {
        let card = Card::default().with_update(&CardUpdate {
            title_align: Some(TextAlign::Center),
            description_align: Some(TextAlign::Right),
            ..CardUpdate::default()
        });
        let svg = generate_svg(&card);
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("text-anchor=\"end\""));
    }
}
