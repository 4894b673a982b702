//! JSON export: the card wrapped in a versioned envelope.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::models::Card;

/// Version stamped into every export envelope.
pub const EXPORT_VERSION: &str = "2.0.0";

/// The envelope wrapping an exported card.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportEnvelope {
    card: Value,
    exported_at: DateTime<Utc>,
    version: &'static str,
}

/// Serializes a card into the export envelope.
///
/// With `include_metadata` off, `id`, `createdAt` and `updatedAt` are
/// stripped from the embedded card. `compressed` selects minified output
/// over 2-space-indented pretty printing.
pub fn generate_json(card: &Card, include_metadata: bool, compressed: bool) -> Result<String> {
    let mut card_value =
        serde_json::to_value(card).context("Failed to serialize card for export")?;

    if !include_metadata {
        if let Some(object) = card_value.as_object_mut() {
            object.remove("id");
            object.remove("createdAt");
            object.remove("updatedAt");
        }
    }

    let envelope = ExportEnvelope {
        card: card_value,
        exported_at: Utc::now(),
        version: EXPORT_VERSION,
    };

    let content = if compressed {
        serde_json::to_string(&envelope)
    } else {
        serde_json::to_string_pretty(&envelope)
    };

    content.context("Failed to serialize export envelope")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::derive_style;

    #[test]
    fn test_envelope_shape() {
        let json = generate_json(&Card::default(), true, true).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], EXPORT_VERSION);
        assert!(value.get("exportedAt").is_some());
        assert_eq!(value["card"]["id"], "default");
    }

    #[test]
    fn test_metadata_stripped() {
        let json = generate_json(&Card::default(), false, true).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let card = value["card"].as_object().unwrap();
        assert!(!card.contains_key("id"));
        assert!(!card.contains_key("createdAt"));
        assert!(!card.contains_key("updatedAt"));
        assert!(card.contains_key("bgGradientFrom"));
    }

    #[test]
    fn test_compressed_vs_pretty() {
        let pretty = generate_json(&Card::default(), true, false).unwrap();
        let minified = generate_json(&Card::default(), true, true).unwrap();

        assert!(pretty.contains("\n  \"card\""));
        assert!(!minified.contains('\n'));
    }

    #[test]
    fn test_round_trip_reproduces_derived_style() {
        let card = Card::default();
        let original_style = derive_style(&card, 1.0);

        let json = generate_json(&card, false, false).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let reimported: Card = serde_json::from_value(value["card"].clone()).unwrap();

        assert_eq!(derive_style(&reimported, 1.0), original_style);
    }
}
