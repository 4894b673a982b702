//! Live card preview rendered in terminal cells.
//!
//! The preview approximates the derived style inside the terminal's
//! constraints: the gradient is interpolated per cell along the configured
//! angle, stop opacities blend toward the canvas color (terminals have no
//! alpha), and brightness/saturation filters are applied per channel.
//! Rotation, blur and contrast cannot be represented in cells; they are
//! visible in the derived style pane instead.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Card, FontWeight, RgbColor, TextAlign};
use crate::style::StyleDescriptor;
use crate::tui::Theme;

/// Approximate pixel size of one terminal cell.
const CELL_WIDTH_PX: f64 = 8.0;
const CELL_HEIGHT_PX: f64 = 16.0;

/// Canvas color the card's translucent stops blend into.
const CANVAS: RgbColor = RgbColor::new(24, 24, 28);

/// The live preview widget.
pub struct CardPreview;

impl CardPreview {
    /// Renders the card preview centered in `area`.
    pub fn render(f: &mut Frame, area: Rect, card: &Card, zoom: f64, theme: &Theme) {
        let title = format!(
            " Preview {:.0}% · rot {}° · {:.2}x{:.2} ",
            zoom * 100.0,
            card.rotation,
            card.scale_x,
            card.scale_y,
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(title);
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.width < 4 || inner.height < 3 {
            return;
        }

        // Card size in cells, scale multipliers folded in
        let width_px = f64::from(card.card_width) * card.scale_x * zoom;
        let height_px = f64::from(card.card_height) * card.scale_y * zoom;
        let card_cols = ((width_px / CELL_WIDTH_PX).round() as u16).clamp(4, inner.width);
        let card_rows = ((height_px / CELL_HEIGHT_PX).round() as u16).clamp(2, inner.height - 1);

        let left = inner.x + (inner.width - card_cols) / 2;
        let top = inner.y + (inner.height - card_rows) / 2;

        let from = RgbColor::from_hex_lenient(&card.bg_gradient_from);
        let to = card
            .bg_gradient_to
            .as_deref()
            .map(RgbColor::from_hex_lenient);

        // CSS angle: 0deg points up, 90deg right; cells go right/down
        let angle = f64::from(card.gradient_angle % 360).to_radians();
        let dx = angle.sin();
        let dy = -angle.cos();
        let extent = dx.abs() + dy.abs();

        for row in 0..card_rows {
            let mut spans: Vec<Span> = Vec::with_capacity(card_cols as usize);
            for col in 0..card_cols {
                let color = match to {
                    Some(to_color) => {
                        let x = f64::from(col) / f64::from(card_cols.max(1)) - 0.5;
                        let y = f64::from(row) / f64::from(card_rows.max(1)) - 0.5;
                        let t = if extent > f64::EPSILON {
                            (x * dx + y * dy) / extent + 0.5
                        } else {
                            0.5
                        };
                        let alpha = lerp_alpha(
                            f64::from(card.bg_opacity_from),
                            f64::from(card.bg_opacity_to),
                            t,
                        );
                        let blended = from.lerp(&to_color, t as f32);
                        composite(apply_filters(blended, card), alpha)
                    }
                    None => composite(
                        apply_filters(from, card),
                        f64::from(card.card_opacity) / 100.0,
                    ),
                };
                spans.push(Span::styled(" ", Style::default().bg(color.to_color())));
            }
            let line_area = Rect::new(left, top + row, card_cols, 1);
            f.render_widget(Paragraph::new(Line::from(spans)), line_area);
        }

        // Shadow hint: one dim row below the card, offset by the x direction
        if card.shadow_opacity > 0.0 && top + card_rows < inner.y + inner.height {
            let shadow = RgbColor::from_hex_lenient(&card.shadow_color);
            let shadow_color = composite(shadow, card.shadow_opacity * 0.6);
            let offset = (card.shadow_settings.x / 8).clamp(-4, 4);
            let shadow_left = (i32::from(left) + offset).max(i32::from(inner.x)) as u16;
            let shadow_cols = card_cols.min(inner.x + inner.width - shadow_left);
            let shadow_area = Rect::new(shadow_left, top + card_rows, shadow_cols, 1);
            let shadow_line = Line::from(Span::styled(
                "▀".repeat(shadow_cols as usize),
                Style::default().fg(shadow_color.to_color()),
            ));
            f.render_widget(Paragraph::new(shadow_line), shadow_area);
        }

        Self::render_text(f, card, left, top, card_cols, card_rows, zoom);
    }

    /// Overlays the title and description onto the card cells.
    fn render_text(
        f: &mut Frame,
        card: &Card,
        left: u16,
        top: u16,
        card_cols: u16,
        card_rows: u16,
        zoom: f64,
    ) {
        let padding_rows =
            ((f64::from(card.card_padding) * zoom / CELL_HEIGHT_PX).round() as u16).min(card_rows / 2);
        let padding_cols =
            ((f64::from(card.card_padding) * zoom / CELL_WIDTH_PX).round() as u16).min(card_cols / 2);

        let title_row = top + padding_rows.min(card_rows.saturating_sub(1));
        Self::overlay_line(
            f,
            &card.title,
            card.title_align,
            card.title_weight,
            left,
            title_row,
            card_cols,
            padding_cols,
            ratatui::style::Color::White,
        );

        if card_rows > padding_rows + 2 {
            Self::overlay_line(
                f,
                &card.description,
                card.description_align,
                card.description_weight,
                left,
                title_row + 2,
                card_cols,
                padding_cols,
                ratatui::style::Color::Rgb(230, 230, 230),
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn overlay_line(
        f: &mut Frame,
        text: &str,
        align: TextAlign,
        weight: FontWeight,
        left: u16,
        row: u16,
        card_cols: u16,
        padding_cols: u16,
        fg: ratatui::style::Color,
    ) {
        let usable = card_cols.saturating_sub(padding_cols * 2);
        if usable == 0 {
            return;
        }

        let mut shown: String = text.chars().take(usable as usize).collect();
        let shown_len = shown.chars().count() as u16;
        let col = match align {
            TextAlign::Left | TextAlign::Justify => left + padding_cols,
            TextAlign::Center => left + padding_cols + (usable - shown_len) / 2,
            TextAlign::Right => left + padding_cols + (usable - shown_len),
        };
        if shown.is_empty() {
            shown.push(' ');
        }

        let mut style = Style::default().fg(fg);
        if weight >= FontWeight::Semibold {
            style = style.add_modifier(Modifier::BOLD);
        }

        let area = Rect::new(col, row, shown_len.max(1), 1);
        f.render_widget(Paragraph::new(Line::from(Span::styled(shown, style))), area);
    }
}

/// Renders the derived style values under the preview.
pub struct StylePane;

impl StylePane {
    /// Renders the derived style descriptor as labeled lines.
    pub fn render(f: &mut Frame, area: Rect, style: &StyleDescriptor, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .title(" Derived style ");

        let label = |name: &'static str| Span::styled(name, Style::default().fg(theme.primary));
        let value = |text: &str| Span::styled(text.to_string(), Style::default().fg(theme.text));

        let lines = vec![
            Line::from(vec![label("background:  "), value(&style.background)]),
            Line::from(vec![label("box-shadow:  "), value(&style.box_shadow)]),
            Line::from(vec![label("transform:   "), value(&style.transform)]),
            Line::from(vec![label("filter:      "), value(&style.filter)]),
            Line::from(vec![
                label("radius:      "),
                value(&style.border_radius),
                Span::raw("   "),
                label("size: "),
                value(&format!("{} x {}", style.width, style.height)),
            ]),
        ];

        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(ratatui::widgets::Wrap { trim: false }),
            area,
        );
    }
}

/// Interpolates between the two stop opacities (0-100) and normalizes to 0-1.
fn lerp_alpha(from: f64, to: f64, t: f64) -> f64 {
    ((from + (to - from) * t) / 100.0).clamp(0.0, 1.0)
}

/// Blends a color toward the canvas by its alpha.
fn composite(color: RgbColor, alpha: f64) -> RgbColor {
    CANVAS.lerp(&color, alpha.clamp(0.0, 1.0) as f32)
}

/// Approximates the brightness and saturation filters on a cell color.
fn apply_filters(color: RgbColor, card: &Card) -> RgbColor {
    let mut color = color;

    if card.brightness != 100 {
        let factor = f64::from(card.brightness) / 100.0;
        let scale = |c: u8| ((f64::from(c) * factor).round().clamp(0.0, 255.0)) as u8;
        color = RgbColor::new(scale(color.r), scale(color.g), scale(color.b));
    }

    if card.saturation < 100 {
        let luma = (u16::from(color.r) * 30 + u16::from(color.g) * 59 + u16::from(color.b) * 11)
            / 100;
        let gray = RgbColor::new(luma as u8, luma as u8, luma as u8);
        color = gray.lerp(&color, f32::from(card.saturation) / 100.0);
    }

    color
}
