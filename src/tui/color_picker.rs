//! Color picker dialog for selecting card colors.
//!
//! Supports two modes:
//! - Palette mode: select from the curated card color pool
//! - Custom RGB mode: fine-tune with RGB sliders

// Allow intentional type casts for color math and terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::models::{RgbColor, COLOR_PALETTE};
use crate::tui::component::{centered_rect, Component};
use crate::tui::Theme;

/// Colors shown per palette row.
const PALETTE_COLUMNS: usize = 5;

/// RGB channel being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    /// Red color channel
    Red,
    /// Green color channel
    Green,
    /// Blue color channel
    Blue,
}

/// Mode of the color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPickerMode {
    /// Selecting from the color palette
    #[default]
    Palette,
    /// Fine-tuning with RGB sliders
    CustomRgb,
}

/// Event emitted by the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPickerEvent {
    /// User confirmed a color
    Selected(RgbColor),
    /// User dismissed the dialog
    Cancelled,
}

/// State for the color picker dialog
#[derive(Debug, Clone)]
pub struct ColorPickerState {
    /// Current mode (Palette or Custom RGB)
    pub mode: ColorPickerMode,
    /// Red channel value (0-255)
    pub r: u8,
    /// Green channel value (0-255)
    pub g: u8,
    /// Blue channel value (0-255)
    pub b: u8,
    /// Currently active RGB channel for editing
    pub active_channel: RgbChannel,
    /// Selected palette index
    pub selected: usize,
}

impl ColorPickerState {
    /// Create a color picker initialized with a specific color.
    #[must_use]
    pub fn with_color(color: RgbColor) -> Self {
        let mut state = Self {
            mode: ColorPickerMode::Palette,
            r: color.r,
            g: color.g,
            b: color.b,
            active_channel: RgbChannel::Red,
            selected: 0,
        };
        state.select_closest_palette_color(color);
        state
    }

    /// The color currently under edit.
    #[must_use]
    pub const fn color(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }

    /// Finds the palette entry closest to the target color.
    fn select_closest_palette_color(&mut self, target: RgbColor) {
        let mut best = 0;
        let mut best_distance = u32::MAX;
        for (index, hex) in COLOR_PALETTE.iter().enumerate() {
            let entry = RgbColor::from_hex_lenient(hex);
            let distance = distance_squared(entry, target);
            if distance < best_distance {
                best_distance = distance;
                best = index;
            }
        }
        self.selected = best;
    }

    /// Adopts the selected palette color into the RGB channels.
    fn sync_channels_from_palette(&mut self) {
        let color = RgbColor::from_hex_lenient(COLOR_PALETTE[self.selected]);
        self.r = color.r;
        self.g = color.g;
        self.b = color.b;
    }

    fn handle_palette_input(&mut self, key: KeyEvent) -> Option<ColorPickerEvent> {
        let columns = PALETTE_COLUMNS;
        let count = COLOR_PALETTE.len();
        match key.code {
            KeyCode::Left => {
                self.selected = (self.selected + count - 1) % count;
                self.sync_channels_from_palette();
            }
            KeyCode::Right => {
                self.selected = (self.selected + 1) % count;
                self.sync_channels_from_palette();
            }
            KeyCode::Up => {
                self.selected = (self.selected + count - columns) % count;
                self.sync_channels_from_palette();
            }
            KeyCode::Down => {
                self.selected = (self.selected + columns) % count;
                self.sync_channels_from_palette();
            }
            KeyCode::Tab => {
                self.sync_channels_from_palette();
                self.mode = ColorPickerMode::CustomRgb;
            }
            KeyCode::Enter => {
                self.sync_channels_from_palette();
                return Some(ColorPickerEvent::Selected(self.color()));
            }
            KeyCode::Esc => return Some(ColorPickerEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn handle_rgb_input(&mut self, key: KeyEvent) -> Option<ColorPickerEvent> {
        let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
        let step: i16 = if coarse { 16 } else { 1 };
        match key.code {
            KeyCode::Up => {
                self.active_channel = match self.active_channel {
                    RgbChannel::Red => RgbChannel::Blue,
                    RgbChannel::Green => RgbChannel::Red,
                    RgbChannel::Blue => RgbChannel::Green,
                };
            }
            KeyCode::Down => {
                self.active_channel = match self.active_channel {
                    RgbChannel::Red => RgbChannel::Green,
                    RgbChannel::Green => RgbChannel::Blue,
                    RgbChannel::Blue => RgbChannel::Red,
                };
            }
            KeyCode::Left => self.adjust_channel(-step),
            KeyCode::Right => self.adjust_channel(step),
            KeyCode::Tab => self.mode = ColorPickerMode::Palette,
            KeyCode::Enter => return Some(ColorPickerEvent::Selected(self.color())),
            KeyCode::Esc => return Some(ColorPickerEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn adjust_channel(&mut self, delta: i16) {
        let channel = match self.active_channel {
            RgbChannel::Red => &mut self.r,
            RgbChannel::Green => &mut self.g,
            RgbChannel::Blue => &mut self.b,
        };
        *channel = (i16::from(*channel) + delta).clamp(0, 255) as u8;
    }
}

impl Component for ColorPickerState {
    type Event = ColorPickerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match self.mode {
            ColorPickerMode::Palette => self.handle_palette_input(key),
            ColorPickerMode::CustomRgb => self.handle_rgb_input(key),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(50, 60, area);
        f.render_widget(Clear, popup);

        let mode_label = match self.mode {
            ColorPickerMode::Palette => "Palette",
            ColorPickerMode::CustomRgb => "Custom RGB",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(format!(" Color picker - {mode_label} (Tab switches) "));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Current color swatch
                Constraint::Min(5),    // Palette grid or sliders
                Constraint::Length(1), // Help line
            ])
            .split(inner);

        // Current color swatch + hex
        let swatch = Line::from(vec![
            Span::styled("      ", Style::default().bg(self.color().to_color())),
            Span::raw(" "),
            Span::styled(self.color().to_hex(), Style::default().fg(theme.text)),
        ]);
        f.render_widget(Paragraph::new(swatch), chunks[0]);

        match self.mode {
            ColorPickerMode::Palette => self.render_palette(f, chunks[1], theme),
            ColorPickerMode::CustomRgb => self.render_sliders(f, chunks[1], theme),
        }

        let help = match self.mode {
            ColorPickerMode::Palette => "arrows: select | Enter: confirm | Esc: cancel",
            ColorPickerMode::CustomRgb => {
                "up/down: channel | left/right: adjust (Shift: x16) | Enter: confirm"
            }
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                help,
                Style::default().fg(theme.text_muted),
            ))),
            chunks[2],
        );
    }
}

impl ColorPickerState {
    fn render_palette(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();
        for (row_index, row) in COLOR_PALETTE.chunks(PALETTE_COLUMNS).enumerate() {
            let mut spans: Vec<Span> = Vec::new();
            for (col_index, hex) in row.iter().enumerate() {
                let index = row_index * PALETTE_COLUMNS + col_index;
                let color = RgbColor::from_hex_lenient(hex);
                let selected = index == self.selected;
                let marker = if selected { "[" } else { " " };
                let closer = if selected { "]" } else { " " };
                spans.push(Span::styled(
                    marker,
                    Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled("    ", Style::default().bg(color.to_color())));
                spans.push(Span::styled(
                    closer,
                    Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::from(spans));
            lines.push(Line::raw(""));
        }
        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_sliders(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let channels = [
            (RgbChannel::Red, "R", self.r),
            (RgbChannel::Green, "G", self.g),
            (RgbChannel::Blue, "B", self.b),
        ];
        for (i, (channel, label, value)) in channels.into_iter().enumerate() {
            let active = self.active_channel == channel;
            let style = if active {
                Style::default().fg(theme.active)
            } else {
                Style::default().fg(theme.inactive)
            };
            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::NONE))
                .gauge_style(style)
                .label(format!("{label}: {value}"))
                .percent(u16::from(value) * 100 / 255);
            f.render_widget(gauge, rows[i]);
        }
    }
}

fn distance_squared(a: RgbColor, b: RgbColor) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}
