//! Export dialog: format selection and flags.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::export::{ExportFormat, ExportOptions};
use crate::tui::component::{centered_rect, Component};
use crate::tui::Theme;

/// Event emitted by the export dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDialogEvent {
    /// User confirmed the export with these options
    Confirm(ExportOptions),
    /// User dismissed the dialog
    Cancelled,
}

/// State for the export dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportDialogState {
    /// Index into [`ExportFormat::ALL`]
    format_index: usize,
    /// Keep id/timestamps in JSON output
    include_metadata: bool,
    /// Minify JSON output
    compressed: bool,
}

impl ExportDialogState {
    /// Creates the dialog with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            format_index: 0,
            include_metadata: true,
            compressed: false,
        }
    }

    /// The currently selected options.
    #[must_use]
    pub const fn options(&self) -> ExportOptions {
        ExportOptions {
            format: ExportFormat::ALL[self.format_index],
            include_metadata: self.include_metadata,
            compressed: self.compressed,
        }
    }
}

impl Default for ExportDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ExportDialogState {
    type Event = ExportDialogEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up => {
                self.format_index =
                    (self.format_index + ExportFormat::ALL.len() - 1) % ExportFormat::ALL.len();
            }
            KeyCode::Down => {
                self.format_index = (self.format_index + 1) % ExportFormat::ALL.len();
            }
            KeyCode::Char('m') => self.include_metadata = !self.include_metadata,
            KeyCode::Char('c') => self.compressed = !self.compressed,
            KeyCode::Enter => return Some(ExportDialogEvent::Confirm(self.options())),
            KeyCode::Esc => return Some(ExportDialogEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(40, 45, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Export card ");
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let mut lines: Vec<Line> = Vec::new();
        for (index, format) in ExportFormat::ALL.iter().enumerate() {
            let selected = index == self.format_index;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{} ({})", format.extension(), format.mime_type()),
                style,
            )));
        }
        lines.push(Line::raw(""));

        let flag = |name: &str, on: bool| {
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", if on { "x" } else { " " }),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(name.to_string(), Style::default().fg(theme.text)),
            ])
        };
        lines.push(flag("(m) include metadata", self.include_metadata));
        lines.push(flag("(c) compressed JSON", self.compressed));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Enter: export | Esc: cancel",
            Style::default().fg(theme.text_muted),
        )));

        f.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_defaults() {
        let options = ExportDialogState::new().options();
        assert_eq!(options.format, ExportFormat::Json);
        assert!(options.include_metadata);
        assert!(!options.compressed);
    }

    #[test]
    fn test_format_selection_wraps() {
        let mut state = ExportDialogState::new();
        state.handle_input(key(KeyCode::Up));
        assert_eq!(state.options().format, ExportFormat::Svg);
        state.handle_input(key(KeyCode::Down));
        assert_eq!(state.options().format, ExportFormat::Json);
    }

    #[test]
    fn test_flag_toggles_and_confirm() {
        let mut state = ExportDialogState::new();
        state.handle_input(key(KeyCode::Char('m')));
        state.handle_input(key(KeyCode::Char('c')));
        let event = state.handle_input(key(KeyCode::Enter));
        match event {
            Some(ExportDialogEvent::Confirm(options)) => {
                assert!(!options.include_metadata);
                assert!(options.compressed);
            }
            other => panic!("expected confirm, got {other:?}"),
        }
    }
}
