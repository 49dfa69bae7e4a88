//! Card colors for the demo strip.
//!
//! Each card gets an opaque color with independently random channels.
use egui::Color32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `count` opaque random colors.
///
/// With a seed the sequence is reproducible; without one a fresh seed is drawn.
pub fn random_colors(count: usize, seed: Option<u64>) -> Vec<Color32> {
    let seed = seed.unwrap_or_else(rand::random);
    log::debug!("generating {} colors from seed {}", count, seed);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Color32::from_rgb(rng.random(), rng.random(), rng.random()))
        .collect()
}
