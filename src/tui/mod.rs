//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod color_picker;
pub mod component;
pub mod export_dialog;
pub mod help_overlay;
pub mod panel;
pub mod preview;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::branding::APP_DISPLAY_NAME;
use crate::config::Config;
use crate::export::{export_card, generate_css, ExportOptions};
use crate::models::{card_presets, Card, CardUpdate, RgbColor, GRADIENT_PRESETS};
use crate::services::{random_card_update, CardDocument, EditorState};
use crate::style::derive_style;

// Re-export TUI components
pub use color_picker::{ColorPickerEvent, ColorPickerState};
pub use component::Component;
pub use export_dialog::{ExportDialogEvent, ExportDialogState};
pub use help_overlay::HelpOverlay;
pub use panel::{ColorTarget, FieldAction, FieldId, Panel, TextTarget};
pub use preview::{CardPreview, StylePane};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Active popup dialog, if any.
#[derive(Debug, Clone)]
pub enum Popup {
    /// Color picker editing one of the card's color fields
    ColorPicker {
        /// Which color field the picker edits
        target: ColorTarget,
        /// Picker state
        state: ColorPickerState,
    },
    /// Export format/flags dialog
    Export(ExportDialogState),
    /// Keyboard shortcut help
    Help,
}

/// Inline text edit in progress on a title/description field.
#[derive(Debug, Clone)]
pub struct TextEdit {
    /// Which text field is being edited
    pub target: TextTarget,
    /// Editing buffer
    pub buffer: String,
}

/// Top-level application state for the TUI editor.
pub struct AppState {
    /// The editor controller owning card, history and zoom
    pub editor: EditorState,
    /// Application configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Currently focused panel
    pub active_panel: Panel,
    /// Focused field index within the panel
    pub field_index: usize,
    /// Selection index within the presets panel
    pub preset_index: usize,
    /// Active popup dialog
    pub popup: Option<Popup>,
    /// Inline text edit in progress
    pub text_edit: Option<TextEdit>,
    /// Transient status message
    pub status_message: String,
    /// Error message overlaying the status line
    pub error_message: Option<String>,
    /// Path of the loaded card document, if any
    pub document_path: Option<PathBuf>,
    /// Unsaved changes indicator
    pub dirty: bool,
    /// Set when the user asked to quit
    pub should_quit: bool,
    rng: SmallRng,
}

impl AppState {
    /// Creates the application state around an initial card.
    pub fn new(card: Card, document_path: Option<PathBuf>, config: Config) -> Self {
        let editor = EditorState::new(
            card,
            config.editor.max_history_size,
            Duration::from_millis(config.editor.debounce_ms),
        );
        let popup = if config.ui.show_help_on_startup {
            Some(Popup::Help)
        } else {
            None
        };
        Self {
            editor,
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            active_panel: Panel::Style,
            field_index: 0,
            preset_index: 0,
            popup,
            text_edit: None,
            status_message: String::new(),
            error_message: None,
            document_path,
            dirty: false,
            should_quit: false,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Sets a transient status message, clearing any error.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Sets an error message shown in place of the status line.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Routes an update through the editor and marks the card dirty.
    pub fn apply_update(&mut self, update: &CardUpdate, immediate: bool) {
        self.editor.update_card(update, immediate);
        self.dirty = true;
    }

    /// The fields of the active panel.
    fn fields(&self) -> &'static [FieldId] {
        self.active_panel.fields()
    }

    /// The focused field, if the active panel has fields.
    fn focused_field(&self) -> Option<FieldId> {
        self.fields().get(self.field_index).copied()
    }

    /// Number of rows in the presets panel (presets plus gradient swatches).
    fn preset_rows(&self) -> usize {
        card_presets().len() + GRADIENT_PRESETS.len()
    }

    fn undo(&mut self) {
        if self.editor.undo() {
            let timeline = self.editor.timeline();
            self.set_status(format!(
                "Undo ({}/{})",
                timeline.cursor() + 1,
                timeline.len()
            ));
            self.dirty = true;
        } else {
            self.set_status("Nothing to undo");
        }
    }

    fn redo(&mut self) {
        if self.editor.redo() {
            let timeline = self.editor.timeline();
            self.set_status(format!(
                "Redo ({}/{})",
                timeline.cursor() + 1,
                timeline.len()
            ));
            self.dirty = true;
        } else {
            self.set_status("Nothing to redo");
        }
    }

    fn randomize(&mut self) {
        let update = random_card_update(&mut self.rng);
        self.apply_update(&update, true);
        self.set_status(format!(
            "Randomized: {}",
            update.title.unwrap_or_default()
        ));
    }

    fn copy_css_to_clipboard(&mut self) {
        let css = generate_css(self.editor.card());
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(css)) {
            Ok(()) => self.set_status("CSS copied to clipboard"),
            Err(e) => self.set_error(format!("Failed to copy to clipboard: {e}")),
        }
    }

    fn export(&mut self, options: ExportOptions) {
        match export_card(self.editor.card(), &options) {
            Ok(artifact) => {
                let dir = self
                    .config
                    .export
                    .output_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("."));
                let path = dir.join(&artifact.filename);
                match std::fs::write(&path, &artifact.content) {
                    Ok(()) => self.set_status(format!("Exported {}", path.display())),
                    Err(e) => self.set_error(format!("Failed to write export: {e}")),
                }
            }
            Err(e) => self.set_error(format!("Export failed: {e}")),
        }
    }

    fn save_document(&mut self) {
        // Flush an in-flight burst so the file matches the committed state
        self.editor.flush_pending();
        let path = self
            .document_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("card-{}.json", self.editor.card().id)));
        match CardDocument::save(self.editor.card(), &path) {
            Ok(()) => {
                self.set_status(format!("Saved {}", path.display()));
                self.document_path = Some(path);
                self.dirty = false;
            }
            Err(e) => self.set_error(format!("Failed to save: {e}")),
        }
    }

    fn apply_color(&mut self, target: ColorTarget, color: RgbColor) {
        let hex = color.to_hex();
        let update = match target {
            ColorTarget::GradientFrom => CardUpdate {
                bg_gradient_from: Some(hex),
                ..CardUpdate::default()
            },
            ColorTarget::GradientTo => CardUpdate {
                bg_gradient_to: Some(Some(hex)),
                ..CardUpdate::default()
            },
            ColorTarget::Shadow => CardUpdate {
                shadow_color: Some(hex),
                ..CardUpdate::default()
            },
        };
        self.apply_update(&update, true);
    }

    fn current_color(&self, target: ColorTarget) -> RgbColor {
        let card = self.editor.card();
        match target {
            ColorTarget::GradientFrom => RgbColor::from_hex_lenient(&card.bg_gradient_from),
            ColorTarget::GradientTo => RgbColor::from_hex_lenient(
                card.bg_gradient_to
                    .as_deref()
                    .unwrap_or(&card.bg_gradient_from),
            ),
            ColorTarget::Shadow => RgbColor::from_hex_lenient(&card.shadow_color),
        }
    }

    fn apply_preset_row(&mut self) {
        let presets = card_presets();
        if self.preset_index < presets.len() {
            let preset = &presets[self.preset_index];
            self.editor.apply_preset(preset);
            self.dirty = true;
            self.set_status(format!("Applied preset: {}", preset.name));
        } else {
            let swatch = GRADIENT_PRESETS[self.preset_index - presets.len()];
            self.apply_update(&swatch.to_update(), true);
            self.set_status(format!("Applied gradient: {}", swatch.name));
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Fire the pending debounced commit once its deadline passes
        state.editor.tick(Instant::now());

        if state.should_quit {
            break;
        }
    }

    // A burst still in flight belongs in history before teardown
    state.editor.flush_pending();

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    // Render popup on top if active
    let full_area = f.area();
    match &state.popup {
        Some(Popup::ColorPicker { state: picker, .. }) => {
            picker.render(f, full_area, &state.theme);
        }
        Some(Popup::Export(dialog)) => dialog.render(f, full_area, &state.theme),
        Some(Popup::Help) => HelpOverlay::render(f, full_area, &state.theme),
        None => {}
    }
}

/// Render title bar with card title and dirty indicator
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let dirty_indicator = if state.dirty { " *" } else { "" };
    let document = state
        .document_path
        .as_ref()
        .map(|p| format!(" - {}", p.display()))
        .unwrap_or_default();
    let title = format!(
        " {APP_DISPLAY_NAME} - {}{document}{dirty_indicator}",
        state.editor.card().title
    );

    let widget = Paragraph::new(title).style(
        Style::default()
            .fg(state.theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(widget, area);
}

/// Render the panel sidebar and the preview column
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(30)])
        .split(area);

    render_sidebar(f, columns[0], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(columns[1]);

    CardPreview::render(
        f,
        right[0],
        state.editor.card(),
        state.editor.zoom(),
        &state.theme,
    );
    let style = derive_style(state.editor.card(), state.editor.zoom());
    StylePane::render(f, right[1], &style, &state.theme);
}

/// Render the tab strip and the active panel's rows
fn render_sidebar(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.primary))
        .title(format!(" {} ", state.active_panel.title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(inner);

    // Tab strip: panel initial + number
    let mut tabs: Vec<Span> = Vec::new();
    for (index, panel) in Panel::ALL.iter().enumerate() {
        let style = if *panel == state.active_panel {
            Style::default()
                .fg(state.theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(state.theme.text_muted)
        };
        tabs.push(Span::styled(
            format!("{}:{} ", index + 1, panel.title()),
            style,
        ));
    }
    f.render_widget(Paragraph::new(Line::from(tabs)), rows[0]);

    if state.active_panel == Panel::Presets {
        render_preset_rows(f, rows[1], state);
    } else {
        render_field_rows(f, rows[1], state);
    }
}

/// Render the focused panel's field rows
fn render_field_rows(f: &mut Frame, area: Rect, state: &AppState) {
    let card = state.editor.card();
    let mut lines: Vec<Line> = Vec::new();

    for (index, field) in state.fields().iter().enumerate() {
        let focused = index == state.field_index;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(state.theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(state.theme.text_secondary)
        };

        // Inline text edit replaces the value with the live buffer
        let value = match (&state.text_edit, field) {
            (Some(edit), FieldId::Title) if edit.target == TextTarget::Title => {
                format!("{}_", edit.buffer)
            }
            (Some(edit), FieldId::Description) if edit.target == TextTarget::Description => {
                format!("{}_", edit.buffer)
            }
            _ => field.value_text(card),
        };

        let mut spans = vec![
            Span::styled(format!("{marker}{:<14}", field.label()), label_style),
            Span::styled(value, Style::default().fg(state.theme.text)),
        ];

        // Color swatch after color-valued fields
        if matches!(
            field,
            FieldId::GradientFrom | FieldId::GradientTo | FieldId::ShadowColor
        ) {
            let hex = field.value_text(card);
            if let Ok(color) = RgbColor::from_hex(&hex) {
                spans.push(Span::raw(" "));
                spans.push(Span::styled("  ", Style::default().bg(color.to_color())));
            }
        }

        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Render the presets panel rows
fn render_preset_rows(f: &mut Frame, area: Rect, state: &AppState) {
    let presets = card_presets();
    let mut lines: Vec<Line> = Vec::new();

    for (index, preset) in presets.iter().enumerate() {
        let focused = index == state.preset_index;
        let marker = if focused { "> " } else { "  " };
        let style = if focused {
            Style::default()
                .fg(state.theme.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(state.theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<14}", preset.name), style),
            Span::styled(
                preset.description,
                Style::default().fg(state.theme.text_muted),
            ),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Gradient swatches",
        Style::default().fg(state.theme.primary),
    )));

    for (index, swatch) in GRADIENT_PRESETS.iter().enumerate() {
        let row = presets.len() + index;
        let focused = row == state.preset_index;
        let marker = if focused { "> " } else { "  " };
        let from = RgbColor::from_hex_lenient(swatch.from);
        let to = RgbColor::from_hex_lenient(swatch.to);
        lines.push(Line::from(vec![
            Span::styled(
                marker,
                Style::default()
                    .fg(state.theme.active)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", Style::default().bg(from.to_color())),
            Span::styled("  ", Style::default().bg(to.to_color())),
            Span::styled(
                format!(" {}", swatch.name),
                if focused {
                    Style::default().fg(state.theme.active)
                } else {
                    Style::default().fg(state.theme.text)
                },
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Handle a key event. Returns true when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Popup dialogs swallow all input first
    if state.popup.is_some() {
        handle_popup_input(state, key);
        return Ok(false);
    }

    // Inline text editing swallows input next
    if state.text_edit.is_some() {
        handle_text_edit_input(state, key);
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char('?') => state.popup = Some(Popup::Help),
        KeyCode::Tab => {
            state.active_panel = state.active_panel.next();
            state.field_index = 0;
        }
        KeyCode::BackTab => {
            state.active_panel = state.active_panel.prev();
            state.field_index = 0;
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as usize) - ('1' as usize);
            state.active_panel = Panel::ALL[index];
            state.field_index = 0;
        }
        KeyCode::Up => move_focus(state, -1),
        KeyCode::Down => move_focus(state, 1),
        KeyCode::Left => adjust_focused(state, -1, key.modifiers.contains(KeyModifiers::SHIFT)),
        KeyCode::Right => adjust_focused(state, 1, key.modifiers.contains(KeyModifiers::SHIFT)),
        KeyCode::Enter => activate_focused(state),
        KeyCode::Delete => {
            if let Some(update) = state.focused_field().and_then(FieldId::clear_action) {
                state.apply_update(&update, true);
                state.set_status("Gradient cleared (solid mode)");
            }
        }
        KeyCode::Char('u') => state.undo(),
        KeyCode::Char('r') => state.redo(),
        KeyCode::Char('C') => {
            state.editor.clear_history();
            state.set_status("History cleared");
        }
        KeyCode::Char('n') => state.randomize(),
        KeyCode::Char('d') => {
            state.editor.duplicate_card();
            state.dirty = true;
            state.set_status("Card duplicated");
        }
        KeyCode::Char('x') => {
            state.editor.reset_adjustments();
            state.dirty = true;
            state.set_status("Adjustments reset");
        }
        KeyCode::Char('e') => state.popup = Some(Popup::Export(ExportDialogState::new())),
        KeyCode::Char('c') => state.copy_css_to_clipboard(),
        KeyCode::Char('s') => state.save_document(),
        KeyCode::Char('+' | '=') => state.editor.adjust_zoom(0.25),
        KeyCode::Char('-') => state.editor.adjust_zoom(-0.25),
        KeyCode::Char('0') => state.editor.set_zoom(1.0),
        _ => {}
    }

    Ok(false)
}

/// Move field/preset focus up or down within the active panel.
fn move_focus(state: &mut AppState, direction: i64) {
    if state.active_panel == Panel::Presets {
        let rows = state.preset_rows() as i64;
        state.preset_index = ((state.preset_index as i64 + direction).rem_euclid(rows)) as usize;
    } else {
        let count = state.fields().len() as i64;
        if count > 0 {
            state.field_index =
                ((state.field_index as i64 + direction).rem_euclid(count)) as usize;
        }
    }
}

/// Adjust the focused field one step left/right.
fn adjust_focused(state: &mut AppState, direction: i64, coarse: bool) {
    if state.active_panel == Panel::Presets {
        return;
    }
    if let Some(field) = state.focused_field() {
        if let Some((update, immediate)) = field.adjust(state.editor.card(), direction, coarse) {
            state.apply_update(&update, immediate);
        }
    }
}

/// Activate the focused row (Enter).
fn activate_focused(state: &mut AppState) {
    if state.active_panel == Panel::Presets {
        state.apply_preset_row();
        return;
    }
    let Some(field) = state.focused_field() else {
        return;
    };
    match field.activate(state.editor.card()) {
        FieldAction::OpenColorPicker(target) => {
            let picker = ColorPickerState::with_color(state.current_color(target));
            state.popup = Some(Popup::ColorPicker {
                target,
                state: picker,
            });
        }
        FieldAction::EditText(target) => {
            let buffer = match target {
                TextTarget::Title => state.editor.card().title.clone(),
                TextTarget::Description => state.editor.card().description.clone(),
            };
            state.text_edit = Some(TextEdit { target, buffer });
        }
        FieldAction::Apply(update) => state.apply_update(&update, true),
        FieldAction::None => {}
    }
}

/// Route input into the active popup and apply its resulting event.
fn handle_popup_input(state: &mut AppState, key: KeyEvent) {
    let Some(mut popup) = state.popup.take() else {
        return;
    };
    let mut keep_open = true;

    match &mut popup {
        Popup::ColorPicker {
            target,
            state: picker,
        } => {
            let target = *target;
            if let Some(event) = picker.handle_input(key) {
                keep_open = false;
                if let ColorPickerEvent::Selected(color) = event {
                    state.apply_color(target, color);
                    state.set_status("Color applied");
                }
            }
        }
        Popup::Export(dialog) => {
            if let Some(event) = dialog.handle_input(key) {
                keep_open = false;
                if let ExportDialogEvent::Confirm(options) = event {
                    state.export(options);
                }
            }
        }
        Popup::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q')) {
                keep_open = false;
            }
        }
    }

    if keep_open {
        state.popup = Some(popup);
    }
}

/// Route input into an inline text edit.
fn handle_text_edit_input(state: &mut AppState, key: KeyEvent) {
    let Some(mut edit) = state.text_edit.take() else {
        return;
    };
    match key.code {
        KeyCode::Enter => {
            let update = match edit.target {
                TextTarget::Title => CardUpdate {
                    title: Some(edit.buffer),
                    ..CardUpdate::default()
                },
                TextTarget::Description => CardUpdate {
                    description: Some(edit.buffer),
                    ..CardUpdate::default()
                },
            };
            state.apply_update(&update, true);
        }
        KeyCode::Esc => {}
        KeyCode::Backspace => {
            edit.buffer.pop();
            state.text_edit = Some(edit);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit.buffer.push(c);
            state.text_edit = Some(edit);
        }
        _ => state.text_edit = Some(edit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(Card::default(), None, Config::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dismiss_help(state: &mut AppState) {
        state.popup = None;
    }

    #[test]
    fn test_tab_cycles_panels() {
        let mut state = test_state();
        dismiss_help(&mut state);
        assert_eq!(state.active_panel, Panel::Style);
        handle_key_event(&mut state, key(KeyCode::Tab)).unwrap();
        assert_eq!(state.active_panel, Panel::Gradient);
        handle_key_event(&mut state, key(KeyCode::BackTab)).unwrap();
        assert_eq!(state.active_panel, Panel::Style);
    }

    #[test]
    fn test_number_jumps_to_panel() {
        let mut state = test_state();
        dismiss_help(&mut state);
        handle_key_event(&mut state, key(KeyCode::Char('5'))).unwrap();
        assert_eq!(state.active_panel, Panel::Effects);
    }

    #[test]
    fn test_slider_key_schedules_debounced_update() {
        let mut state = test_state();
        dismiss_help(&mut state);
        // Style panel, first field is Width
        handle_key_event(&mut state, key(KeyCode::Right)).unwrap();
        assert_eq!(state.editor.card().card_width, 330);
        assert!(state.editor.has_pending_commit());
        assert_eq!(state.editor.timeline().len(), 1);
        assert!(state.dirty);
    }

    #[test]
    fn test_undo_key_reverts_committed_change() {
        let mut state = test_state();
        dismiss_help(&mut state);
        state.apply_update(
            &CardUpdate {
                card_width: Some(500),
                ..CardUpdate::default()
            },
            true,
        );
        handle_key_event(&mut state, key(KeyCode::Char('u'))).unwrap();
        assert_eq!(state.editor.card().card_width, 320);
    }

    #[test]
    fn test_enter_on_color_field_opens_picker() {
        let mut state = test_state();
        dismiss_help(&mut state);
        state.active_panel = Panel::Gradient;
        state.field_index = 0; // GradientFrom
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert!(matches!(
            state.popup,
            Some(Popup::ColorPicker {
                target: ColorTarget::GradientFrom,
                ..
            })
        ));
    }

    #[test]
    fn test_color_picker_confirm_applies_immediately() {
        let mut state = test_state();
        dismiss_help(&mut state);
        state.active_panel = Panel::Gradient;
        state.field_index = 0;
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        let history_before = state.editor.timeline().len();
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert!(state.popup.is_none());
        assert_eq!(state.editor.timeline().len(), history_before + 1);
    }

    #[test]
    fn test_delete_clears_gradient_on_to_field() {
        let mut state = test_state();
        dismiss_help(&mut state);
        state.active_panel = Panel::Gradient;
        state.field_index = 1; // GradientTo
        handle_key_event(&mut state, key(KeyCode::Delete)).unwrap();
        assert!(state.editor.card().bg_gradient_to.is_none());
    }

    #[test]
    fn test_text_edit_flow() {
        let mut state = test_state();
        dismiss_help(&mut state);
        state.active_panel = Panel::Text;
        state.field_index = 0; // Title
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert!(state.text_edit.is_some());

        handle_key_event(&mut state, key(KeyCode::Char('!'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert!(state.text_edit.is_none());
        assert_eq!(state.editor.card().title, "Modern Card!");
    }

    #[test]
    fn test_preset_panel_apply() {
        let mut state = test_state();
        dismiss_help(&mut state);
        state.active_panel = Panel::Presets;
        state.preset_index = 1; // Neon Glow
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert_eq!(
            state.editor.card().bg_gradient_to.as_deref(),
            Some("#3b82f6")
        );
    }

    #[test]
    fn test_zoom_keys() {
        let mut state = test_state();
        dismiss_help(&mut state);
        handle_key_event(&mut state, key(KeyCode::Char('+'))).unwrap();
        assert!((state.editor.zoom() - 1.25).abs() < f64::EPSILON);
        handle_key_event(&mut state, key(KeyCode::Char('0'))).unwrap();
        assert!((state.editor.zoom() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quit_key() {
        let mut state = test_state();
        dismiss_help(&mut state);
        let quit = handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap();
        assert!(quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_help_popup_swallows_other_keys() {
        let mut state = test_state();
        assert!(matches!(state.popup, Some(Popup::Help)));
        handle_key_event(&mut state, key(KeyCode::Char('n'))).unwrap();
        // Randomize did not run while help was open
        assert_eq!(state.editor.timeline().len(), 1);
        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(state.popup.is_none());
    }
}
