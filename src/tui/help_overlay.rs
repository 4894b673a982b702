//! Help overlay listing keyboard shortcuts by category.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::component::centered_rect;
use crate::tui::Theme;

/// The help overlay widget.
pub struct HelpOverlay;

impl HelpOverlay {
    /// Renders the help overlay centered over the whole frame.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(60, 80, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Help (Esc to close) ");
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ))
        };
        let entry = |keys: &'static str, action: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<14}"), Style::default().fg(theme.accent)),
                Span::styled(action, Style::default().fg(theme.text)),
            ])
        };

        let lines = vec![
            section("Navigation"),
            entry("Tab / S-Tab", "Next / previous panel"),
            entry("1-6", "Jump to panel"),
            entry("Up / Down", "Select field"),
            section("Editing"),
            entry("Left / Right", "Adjust field (Shift for coarse steps)"),
            entry("Enter", "Activate field (picker, text edit, toggle)"),
            entry("Delete", "Clear gradient end color (solid mode)"),
            section("History"),
            entry("u", "Undo"),
            entry("r", "Redo"),
            entry("C", "Clear history"),
            section("Card"),
            entry("n", "Randomize card"),
            entry("d", "Duplicate card"),
            entry("x", "Reset adjustments"),
            section("Export"),
            entry("e", "Export dialog (file)"),
            entry("c", "Copy CSS to clipboard"),
            entry("s", "Save card document"),
            section("View"),
            entry("+ / -", "Zoom in / out"),
            entry("0", "Reset zoom"),
            section("General"),
            entry("?", "Toggle this help"),
            entry("q", "Quit"),
        ];

        f.render_widget(Paragraph::new(lines), inner);
    }
}
