//! Export command for rendering a card document in another format.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::export::{export_card, ExportFormat, ExportOptions};
use crate::models::Card;
use crate::services::CardDocument;

/// Export a card document to JSON, CSS, HTML or SVG
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to a card JSON document (defaults to the default card)
    #[arg(short, long, value_name = "FILE")]
    pub card: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Output path (defaults to card-{id}.{ext} in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Strip id and timestamps from JSON output
    #[arg(long)]
    pub no_metadata: bool,

    /// Minify JSON output instead of pretty-printing
    #[arg(long)]
    pub compressed: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> Result<()> {
        let card = match &self.card {
            Some(path) => CardDocument::load(path)?,
            None => Card::default(),
        };

        let options = ExportOptions {
            format: self.format,
            include_metadata: !self.no_metadata,
            compressed: self.compressed,
        };

        let artifact = export_card(&card, &options)?;
        let output_path = self.get_output_path(&artifact.filename);

        fs::write(&output_path, &artifact.content).with_context(|| {
            format!("Failed to write export file: {}", output_path.display())
        })?;

        info!(
            format = %self.format,
            mime = artifact.mime_type,
            path = %output_path.display(),
            "card exported"
        );
        println!("Exported card to: {}", output_path.display());

        Ok(())
    }

    /// Get the output file path (either user-specified or the suggested name)
    fn get_output_path(&self, suggested: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(suggested))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_output_path_default() {
        let args = ExportArgs {
            card: None,
            format: ExportFormat::Css,
            output: None,
            no_metadata: false,
            compressed: false,
        };
        assert_eq!(
            args.get_output_path("card-default.css"),
            PathBuf::from("card-default.css")
        );
    }

    #[test]
    fn test_get_output_path_explicit() {
        let args = ExportArgs {
            card: None,
            format: ExportFormat::Css,
            output: Some(PathBuf::from("/tmp/out.css")),
            no_metadata: false,
            compressed: false,
        };
        assert_eq!(
            args.get_output_path("card-default.css"),
            PathBuf::from("/tmp/out.css")
        );
    }
}
