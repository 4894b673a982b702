//! Random card generation from fixed pools.
//!
//! Titles, descriptions and colors are sampled uniformly from static pools;
//! the two gradient colors are guaranteed distinct by resampling on
//! collision. The generator takes any `rand::Rng`, so callers can pass a
//! seeded `SmallRng` for reproducible output.

use rand::Rng;

use crate::models::{BorderRadius, CardUpdate, RadiusUnit, COLOR_PALETTE};

/// Title pool for generated cards.
const TITLES: [&str; 8] = [
    "Creative Card",
    "Modern Design",
    "Elegant Style",
    "Dynamic Card",
    "Innovative UI",
    "Digital Art",
    "Future Vision",
    "Bold Statement",
];

/// Description pool for generated cards.
const DESCRIPTIONS: [&str; 7] = [
    "Beautiful and responsive design",
    "Crafted with precision and care",
    "Designed for maximum impact",
    "Built for the future of web",
    "Inspiring creativity through design",
    "Where innovation meets aesthetics",
    "Pushing the boundaries of design",
];

/// Produces a random partial card.
///
/// Jitter ranges: corner radius 5-49px, gradient angle 0-359, rotation
/// -10..10 degrees, card opacity 80-99, gradient stop opacities 70-99 and
/// 40-79. The gradient start and end colors are always distinct.
pub fn random_card_update<R: Rng>(rng: &mut R) -> CardUpdate {
    let title = TITLES[rng.random_range(0..TITLES.len())];
    let description = DESCRIPTIONS[rng.random_range(0..DESCRIPTIONS.len())];

    let from = COLOR_PALETTE[rng.random_range(0..COLOR_PALETTE.len())];
    let mut to = COLOR_PALETTE[rng.random_range(0..COLOR_PALETTE.len())];
    while to == from {
        to = COLOR_PALETTE[rng.random_range(0..COLOR_PALETTE.len())];
    }

    let radius = rng.random_range(5..50);

    CardUpdate {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        bg_gradient_from: Some(from.to_string()),
        bg_gradient_to: Some(Some(to.to_string())),
        gradient_angle: Some(rng.random_range(0..360)),
        rotation: Some(rng.random_range(-10..10)),
        card_border_radius: Some(BorderRadius::uniform(radius, RadiusUnit::Px)),
        card_opacity: Some(rng.random_range(80..100)),
        bg_opacity_from: Some(rng.random_range(70..100)),
        bg_opacity_to: Some(rng.random_range(40..80)),
        ..CardUpdate::default()
    }
}
