//! Card document I/O.
//!
//! A card document is the JSON export envelope, or a bare card object; the
//! loader accepts both so exports round-trip back into the editor. Loaded
//! values outside their documented ranges are repaired, not rejected.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::export::generate_json;
use crate::models::Card;

/// Service for loading and saving card documents.
pub struct CardDocument;

impl CardDocument {
    /// Loads a card from a JSON document.
    ///
    /// Accepts either the export envelope (`{"card": {...}, ...}`) or a bare
    /// card object. Missing fields fall back to the default card values;
    /// out-of-range values are clamped after load.
    pub fn load(path: &Path) -> Result<Card> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read card document: {}", path.display()))?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse card document: {}", path.display()))?;

        // Envelope or bare card
        let card_value = match value.get("card") {
            Some(inner) => inner.clone(),
            None => value,
        };

        let mut card: Card = serde_json::from_value(card_value)
            .with_context(|| format!("Card document has invalid fields: {}", path.display()))?;
        card.sanitize();

        debug!(id = %card.id, path = %path.display(), "loaded card document");
        Ok(card)
    }

    /// Saves a card as a pretty-printed envelope document, atomically.
    pub fn save(card: &Card, path: &Path) -> Result<()> {
        let content = generate_json(card, true, false)?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write card document: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename card document to: {}", path.display()))?;

        debug!(id = %card.id, path = %path.display(), "saved card document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("card.json");

        let card = Card::new();
        CardDocument::save(&card, &path).unwrap();
        let loaded = CardDocument::load(&path).unwrap();

        assert_eq!(loaded, card);
    }

    #[test]
    fn test_load_bare_card_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bare.json");
        fs::write(&path, r#"{"title": "Bare", "cardWidth": 400}"#).unwrap();

        let card = CardDocument::load(&path).unwrap();
        assert_eq!(card.title, "Bare");
        assert_eq!(card.card_width, 400);
        // Missing fields fall back to defaults
        assert_eq!(card.card_height, 200);
    }

    #[test]
    fn test_load_repairs_out_of_range_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wild.json");
        fs::write(&path, r#"{"gradientAngle": 400, "cardOpacity": 200}"#).unwrap();

        let card = CardDocument::load(&path).unwrap();
        assert_eq!(card.gradient_angle, 40);
        assert_eq!(card.card_opacity, 100);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let result = CardDocument::load(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        assert!(CardDocument::load(&path).is_err());
    }
}
