//! HTML export: a minimal standalone document embedding the generated CSS.

use crate::export::css::generate_css;
use crate::export::escape_text;
use crate::models::Card;

/// Renders the card markup fragment matching the CSS class names.
#[must_use]
pub fn generate_markup(card: &Card) -> String {
    format!(
        "<div class=\"card\">\n  <h2 class=\"card-title\">{}</h2>\n  <p class=\"card-description\">{}</p>\n</div>",
        escape_text(&card.title),
        escape_text(&card.description),
    )
}

/// Renders a complete standalone HTML document for the card.
#[must_use]
pub fn generate_html(card: &Card) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    <title>{}</title>\n    <style>\n{}\n    </style>\n</head>\n<body>\n    {}\n</body>\n</html>",
        escape_text(&card.title),
        generate_css(card),
        generate_markup(card),
    )
}
