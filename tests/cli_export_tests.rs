//! End-to-end tests for `cardstudio export`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

#[test]
fn test_export_css_succeeds() {
    let card = test_card_basic();
    let (card_path, card_temp) = create_temp_card_file(&card);
    let out_path = card_temp.path().join("export.css");

    let output = Command::new(cardstudio_bin())
        .args([
            "export",
            "--card",
            card_path.to_str().unwrap(),
            "--format",
            "css",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(out_path.exists());

    let content = fs::read_to_string(&out_path).expect("Failed to read export file");
    assert!(content.contains(".card {"));
    assert!(content.contains(".card-title {"));
    assert!(content.contains(
        "background: linear-gradient(135deg, rgba(139, 92, 246, 0.9), rgba(6, 182, 212, 0.6));"
    ));
}

#[test]
fn test_export_css_solid_background() {
    let card = test_card_solid();
    let (card_path, card_temp) = create_temp_card_file(&card);
    let out_path = card_temp.path().join("solid.css");

    let output = Command::new(cardstudio_bin())
        .args([
            "export",
            "--card",
            card_path.to_str().unwrap(),
            "--format",
            "css",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let content = fs::read_to_string(&out_path).unwrap();
    assert!(content.contains("background: rgba(255, 0, 0, 0.5);"));
    assert!(content.contains("box-shadow: 0px 8px 32px 0px rgba(0, 0, 0, 0.1);"));
}

#[test]
fn test_export_json_round_trips() {
    let card = test_card_basic();
    let (card_path, card_temp) = create_temp_card_file(&card);
    let out_path = card_temp.path().join("export.json");

    let output = Command::new(cardstudio_bin())
        .args([
            "export",
            "--card",
            card_path.to_str().unwrap(),
            "--format",
            "json",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["version"], "2.0.0");
    assert_eq!(value["card"]["id"], "test-card");
    assert_eq!(value["card"]["bgGradientFrom"], "#8b5cf6");
}

#[test]
fn test_export_json_no_metadata_strips_identity() {
    let card = test_card_basic();
    let (card_path, card_temp) = create_temp_card_file(&card);
    let out_path = card_temp.path().join("anon.json");

    let output = Command::new(cardstudio_bin())
        .args([
            "export",
            "--card",
            card_path.to_str().unwrap(),
            "--format",
            "json",
            "--no-metadata",
            "--compressed",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(&out_path).unwrap();
    assert!(!content.contains('\n'), "compressed output is minified");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(value["card"].get("id").is_none());
    assert!(value["card"].get("createdAt").is_none());
    assert!(value["card"].get("updatedAt").is_none());
}

#[test]
fn test_export_svg_structure() {
    let card = test_card_basic();
    let (card_path, card_temp) = create_temp_card_file(&card);
    let out_path = card_temp.path().join("card.svg");

    let output = Command::new(cardstudio_bin())
        .args([
            "export",
            "--card",
            card_path.to_str().unwrap(),
            "--format",
            "svg",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(&out_path).unwrap();
    assert!(content.starts_with("<svg width=\"320\" height=\"200\""));
    assert!(content.contains("<linearGradient id=\"gradient\""));
    assert!(content.contains("Test Card"));
}

#[test]
fn test_export_html_embeds_css() {
    let card = test_card_basic();
    let (card_path, card_temp) = create_temp_card_file(&card);
    let out_path = card_temp.path().join("card.html");

    let output = Command::new(cardstudio_bin())
        .args([
            "export",
            "--card",
            card_path.to_str().unwrap(),
            "--format",
            "html",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let content = fs::read_to_string(&out_path).unwrap();
    assert!(content.starts_with("<!DOCTYPE html>"));
    assert!(content.contains("<title>Test Card</title>"));
    assert!(content.contains(".card {"));
    assert!(content.contains("<h2 class=\"card-title\">Test Card</h2>"));
}

#[test]
fn test_export_missing_card_fails() {
    let output = Command::new(cardstudio_bin())
        .args(["export", "--card", "/nonexistent/card.json"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
}
