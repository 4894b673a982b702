//! Random command for generating a card document.

use anyhow::Result;
use clap::Args;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

use crate::models::Card;
use crate::services::{random_card_update, CardDocument};

/// Generate a random card document
#[derive(Debug, Clone, Args)]
pub struct RandomArgs {
    /// Seed for reproducible output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Output path (defaults to card-{id}.json in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RandomArgs {
    /// Execute the random command
    pub fn execute(&self) -> Result<()> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let card = Card::new().with_update(&random_card_update(&mut rng));
        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("card-{}.json", card.id)));

        CardDocument::save(&card, &output_path)?;

        info!(id = %card.id, seed = ?self.seed, "random card generated");
        println!("Generated \"{}\" at: {}", card.title, output_path.display());

        Ok(())
    }
}
