//! Presets command: list named presets or apply one to a card document.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::models::{card_presets, find_preset, Card};
use crate::services::CardDocument;

/// List named styling presets, or apply one to a card document
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Apply the named preset instead of listing
    #[arg(long, value_name = "NAME")]
    pub apply: Option<String>,

    /// Card document to apply the preset to (defaults to the default card)
    #[arg(short, long, value_name = "FILE")]
    pub card: Option<PathBuf>,

    /// Output path (defaults to the input document, or card-{id}.json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self) -> Result<()> {
        match &self.apply {
            None => {
                for preset in card_presets() {
                    println!("{:<14} {}", preset.name, preset.description);
                }
                Ok(())
            }
            Some(name) => self.apply_preset(name),
        }
    }

    fn apply_preset(&self, name: &str) -> Result<()> {
        let preset = find_preset(name)
            .with_context(|| format!("Unknown preset '{name}'. Run `presets` to list them"))?;

        let card = match &self.card {
            Some(path) => CardDocument::load(path)?,
            None => Card::default(),
        };
        let card = card.with_update(&preset.config);

        let output_path = self
            .output
            .clone()
            .or_else(|| self.card.clone())
            .unwrap_or_else(|| PathBuf::from(format!("card-{}.json", card.id)));

        CardDocument::save(&card, &output_path)?;

        info!(preset = preset.name, path = %output_path.display(), "preset applied");
        println!(
            "Applied \"{}\" to: {}",
            preset.name,
            output_path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preset_errors() {
        let args = PresetsArgs {
            apply: Some("does-not-exist".to_string()),
            card: None,
            output: Some(PathBuf::from("/tmp/ignored.json")),
        };
        assert!(args.execute().is_err());
    }
}
