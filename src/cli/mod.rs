//! CLI command handlers for Card Studio.
//!
//! This module provides headless, scriptable access to the core engine
//! for automation, testing, and CI integration.

pub mod export;
pub mod presets;
pub mod random;

// Re-export types used by main.rs and tests
pub use export::ExportArgs;
pub use presets::PresetsArgs;
pub use random::RandomArgs;
