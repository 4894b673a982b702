//! CSS export: a `.card` rule block plus typography rules.

use crate::models::Card;
use crate::style::derive_style;

/// Renders the card as CSS rules.
///
/// The `.card` block reuses the derived style values verbatim; typography
/// rules come straight from the card's font fields. Backdrop-filter and
/// border lines appear only when hover effects enable them.
#[must_use]
pub fn generate_css(card: &Card) -> String {
    let style = derive_style(card, 1.0);

    let mut card_rule = format!(
        ".card {{\n  width: {};\n  height: {};\n  background: {};\n  border-radius: {};\n  box-shadow: {};\n  padding: {};\n  color: {};\n  filter: {};\n  transition: {};\n",
        style.width,
        style.height,
        style.background,
        style.border_radius,
        style.box_shadow,
        style.padding,
        style.color,
        style.filter,
        style.transition,
    );
    if style.backdrop_filter != "none" {
        card_rule.push_str(&format!("  backdrop-filter: {};\n", style.backdrop_filter));
    }
    if style.border != "none" {
        card_rule.push_str(&format!("  border: {};\n", style.border));
    }
    card_rule.push('}');

    format!(
        "{card_rule}\n\n.card-title {{\n  font-family: {};\n  font-weight: {};\n  font-size: {}px;\n  text-align: {};\n}}\n\n.card-description {{\n  font-family: {};\n  font-weight: {};\n  font-size: {}px;\n  text-align: {};\n}}",
        card.title_font,
        card.title_weight,
        card.title_size,
        card.title_align,
        card.description_font,
        card.description_weight,
        card.description_size,
        card.description_align,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardUpdate;

    #[test]
    fn test_css_reuses_derived_values() {
        let card = Card::default();
        let style = derive_style(&card, 1.0);
        let css = generate_css(&card);

        assert!(css.contains(&format!("background: {};", style.background)));
        assert!(css.contains(&format!("box-shadow: {};", style.box_shadow)));
        assert!(css.contains(&format!("filter: {};", style.filter)));
        assert!(css.contains("width: 320px;"));
    }

    #[test]
    fn test_typography_rules() {
        let css = generate_css(&Card::default());
        assert!(css.contains(".card-title {"));
        assert!(css.contains("font-family: Inter;"));
        assert!(css.contains("font-weight: 600;"));
        assert!(css.contains("font-size: 18px;"));
        assert!(css.contains(".card-description {"));
        assert!(css.contains("font-weight: 400;"));
    }

    #[test]
    fn test_hover_lines_omitted_when_disabled() {
        let card = Card::default().with_update(&CardUpdate {
            enable_hover_effects: Some(false),
            ..CardUpdate::default()
        });
        let css = generate_css(&card);
        assert!(!css.contains("backdrop-filter"));
        assert!(!css.contains("border:"));
    }
}
