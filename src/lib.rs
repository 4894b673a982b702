//! Card Studio library
//!
//! This library provides the core functionality for the Card Studio
//! application: the card model, undo/redo history, pure style derivation,
//! multi-format export, the editor controller, and the terminal UI.

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod export;
pub mod history;
pub mod models;
pub mod services;
pub mod style;
pub mod tui;
