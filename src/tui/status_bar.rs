//! Status bar widget for history position, messages and key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message/error line plus a history/help line.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        // First line: error, status message, or hints
        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else if !state.status_message.is_empty() {
            content_lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.success),
            )));
        } else {
            content_lines.push(Line::from(Span::styled(
                "Tab: panels | arrows: edit | Enter: activate | u/r: undo/redo | e: export | ?: help",
                Style::default().fg(theme.text_muted),
            )));
        }

        // Second line: history position and capabilities
        let timeline = state.editor.timeline();
        let undo_style = if state.editor.can_undo() {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.inactive)
        };
        let redo_style = if state.editor.can_redo() {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.inactive)
        };
        let pending = if state.editor.has_pending_commit() {
            Span::styled(" ~", Style::default().fg(theme.warning))
        } else {
            Span::raw("")
        };

        content_lines.push(Line::from(vec![
            Span::styled("History ", Style::default().fg(theme.primary)),
            Span::styled(
                format!("{}/{}", timeline.cursor() + 1, timeline.len()),
                Style::default().fg(theme.text),
            ),
            pending,
            Span::raw("  "),
            Span::styled("undo", undo_style),
            Span::raw(" / "),
            Span::styled("redo", redo_style),
            Span::raw("  "),
            Span::styled("Zoom ", Style::default().fg(theme.primary)),
            Span::styled(
                format!("{:.0}%", state.editor.zoom() * 100.0),
                Style::default().fg(theme.text),
            ),
        ]));

        let widget = Paragraph::new(content_lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.text_muted)),
        );
        f.render_widget(widget, area);
    }
}
