//! Per-token visual flags derived from the seed

use crate::seed::GenerationSeed;
use serde::Serialize;

/// Number of frame templates
pub const FRAME_STYLE_COUNT: usize = 4;

/// Secondary traits layered on top of the mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisualFlags {
    pub has_glow: bool,
    pub has_particles: bool,
    pub has_pattern_overlay: bool,

    /// Always in `0..FRAME_STYLE_COUNT`
    pub frame_style_index: usize,
}

impl VisualFlags {
    /// Each flag reads the PRF at its own offset from the seed
    pub fn derive(seed: GenerationSeed) -> Self {
        let frame = (seed.sample(4.0) * FRAME_STYLE_COUNT as f64).floor() as usize;

        Self {
            has_glow: seed.sample(1.0) > 0.3,
            has_particles: seed.sample(2.0) > 0.5,
            has_pattern_overlay: seed.sample(3.0) > 0.4,
            frame_style_index: frame.min(FRAME_STYLE_COUNT - 1),
        }
    }
}

/// Catalog index for a seed, `None` if the seed does not hash to a number
pub fn mood_index(seed: GenerationSeed, catalog_len: usize) -> Option<usize> {
    let sample = seed.sample(0.0);
    if !sample.is_finite() {
        return None;
    }
    Some((sample * catalog_len as f64).floor() as usize)
}
