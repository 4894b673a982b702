//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use cardstudio::models::{Card, CardUpdate, ShadowSettings};
use cardstudio::services::CardDocument;
use chrono::{TimeZone, Utc};
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the cardstudio binary
pub fn cardstudio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_cardstudio")
}

/// Creates a deterministic test card.
///
/// Timestamps are pinned so file comparisons stay stable across runs.
pub fn test_card_basic() -> Card {
    let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let modified = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();

    let mut card = Card::default();
    card.id = "test-card".to_string();
    card.title = "Test Card".to_string();
    card.description = "E2E test card".to_string();
    card.created_at = created;
    card.updated_at = modified;
    card
}

/// Creates a test card with a solid background and a hard shadow.
pub fn test_card_solid() -> Card {
    test_card_basic().with_update(&CardUpdate {
        bg_gradient_to: Some(None),
        bg_gradient_from: Some("#ff0000".to_string()),
        card_opacity: Some(50),
        shadow_settings: Some(ShadowSettings::new(0, 8, 32, 0)),
        shadow_color: Some("#000000".to_string()),
        shadow_opacity: Some(0.1),
        ..CardUpdate::default()
    })
}

/// Writes a card document into a fresh temp dir.
///
/// Returns the document path and the temp dir guard (keep it alive for the
/// duration of the test).
pub fn create_temp_card_file(card: &Card) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("card.json");
    CardDocument::save(card, &path).expect("Failed to write card fixture");
    (path, dir)
}
