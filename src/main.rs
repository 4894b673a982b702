//! Card Studio - Terminal-based visual card styler
//!
//! This application provides a visual editor for styled cards: gradients,
//! shadows, typography, transforms and filters, with live preview, undo
//! history and export to JSON/CSS/HTML/SVG.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cardstudio::branding::{APP_BINARY_NAME, APP_DISPLAY_NAME};
use cardstudio::cli::{ExportArgs, PresetsArgs, RandomArgs};
use cardstudio::config::Config;
use cardstudio::models::Card;
use cardstudio::services::CardDocument;
use cardstudio::tui;

/// Card Studio - Terminal-based visual card styler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a card JSON document to open in the editor
    #[arg(value_name = "FILE")]
    card_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Headless subcommands for scripting and CI.
#[derive(Subcommand, Debug)]
enum Command {
    /// Export a card document to JSON/CSS/HTML/SVG
    Export(ExportArgs),
    /// Generate a random card document
    Random(RandomArgs),
    /// List or apply named styling presets
    Presets(PresetsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            init_tracing();
            match command {
                Command::Export(args) => args.execute(),
                Command::Random(args) => args.execute(),
                Command::Presets(args) => args.execute(),
            }
        }
        None => run_editor(cli.card_path),
    }
}

/// Initializes tracing for headless subcommands.
///
/// The TUI path stays silent: log lines would tear the alternate screen.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Launches the interactive editor, optionally on a card document.
fn run_editor(card_path: Option<PathBuf>) -> Result<()> {
    let card = if let Some(path) = &card_path {
        if !path.exists() {
            eprintln!("Error: Card document not found: {}", path.display());
            eprintln!();
            eprintln!("Please provide a valid path to a card JSON document.");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {APP_BINARY_NAME} my_card.json");
            eprintln!("  {APP_BINARY_NAME} random --output my_card.json");
            eprintln!();
            eprintln!("For more options, run:");
            eprintln!("  {APP_BINARY_NAME} --help");
            std::process::exit(1);
        }
        CardDocument::load(path)?
    } else {
        Card::new()
    };

    // Load or create default config
    let config = Config::load().unwrap_or_else(|_| Config::default());

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(card, card_path, config);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before surfacing any error
    tui::restore_terminal(terminal)?;
    result?;

    if app_state.dirty {
        println!("{APP_DISPLAY_NAME}: unsaved changes were discarded (use 's' to save next time)");
    }

    Ok(())
}
