//! Export functionality for cards.
//!
//! This module renders a card into one of four textual formats. Each
//! generator produces the string content only; writing the artifact to disk
//! or the clipboard is the caller's concern.

pub mod css;
pub mod html;
pub mod json;
pub mod svg;

pub use css::generate_css;
pub use html::{generate_html, generate_markup};
pub use json::{generate_json, EXPORT_VERSION};
pub use svg::generate_svg;

use anyhow::Result;
use clap::ValueEnum;
use std::fmt;

use crate::models::Card;

/// Target format for a card export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Versioned JSON envelope
    #[default]
    Json,
    /// `.card` rule block plus typography rules
    Css,
    /// Standalone HTML document
    Html,
    /// Standalone SVG document
    Svg,
}

impl ExportFormat {
    /// All formats in display order for the export dialog.
    pub const ALL: [Self; 4] = [Self::Json, Self::Css, Self::Html, Self::Svg];

    /// File extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Html => "html",
            Self::Svg => "svg",
        }
    }

    /// MIME type for this format.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Css => "text/css",
            Self::Html => "text/html",
            Self::Svg => "image/svg+xml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Flags controlling a single export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Target format
    pub format: ExportFormat,
    /// Keep `id`/`createdAt`/`updatedAt` in JSON output
    pub include_metadata: bool,
    /// Minify JSON output instead of pretty-printing
    pub compressed: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            include_metadata: true,
            compressed: false,
        }
    }
}

/// A produced export: content plus the suggested filename and MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// The serialized card
    pub content: String,
    /// Suggested filename, `card-{id}.{ext}`
    pub filename: String,
    /// MIME type of the content
    pub mime_type: &'static str,
}

/// Renders a card in the requested format.
///
/// Out-of-range card values never fail an export; they were either clamped
/// on write or are rendered as-is by the lenient derivation.
pub fn export_card(card: &Card, options: &ExportOptions) -> Result<ExportArtifact> {
    let content = match options.format {
        ExportFormat::Json => generate_json(card, options.include_metadata, options.compressed)?,
        ExportFormat::Css => generate_css(card),
        ExportFormat::Html => generate_html(card),
        ExportFormat::Svg => generate_svg(card),
    };

    Ok(ExportArtifact {
        content,
        filename: format!("card-{}.{}", card.id, options.format.extension()),
        mime_type: options.format.mime_type(),
    })
}

/// Escapes text for embedding in HTML/SVG markup.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
