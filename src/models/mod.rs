//! Data models for cards, colors and presets.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod card;
pub mod presets;
pub mod rgb;

// Re-export all model types
pub use card::{
    BorderRadius, Card, CardUpdate, FontFamily, FontWeight, RadiusUnit, ShadowSettings, TextAlign,
};
pub use presets::{card_presets, find_preset, CardPreset, GradientPreset, COLOR_PALETTE, GRADIENT_PRESETS};
pub use rgb::{RgbColor, FALLBACK_COLOR};
