//! Metadata generator
//!
//! Ties the pieces together: seed from token id and clock, mood and flags
//! from the seed, SVG from the mood, metadata around the SVG.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::{MoodDefinition, MOOD_CATALOG};
use crate::clock::{Clock, SystemClock};
use crate::error::{GenerationError, Result};
use crate::flags::{mood_index, VisualFlags};
use crate::metadata::TokenMetadata;
use crate::seed::{parse_token_number, GenerationSeed};
use crate::svg::{compose, SvgInputs};

/// Anything that can produce metadata for a token id
pub trait MetadataSource: Send + Sync {
    fn generate(&self, token_id: &str) -> Result<TokenMetadata>;
}

/// Everything derived for a token at one instant, before rendering
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub seed: GenerationSeed,
    pub mood: &'static MoodDefinition,
    pub flags: VisualFlags,
}

/// Deterministic metadata generator over a read-only mood catalog
pub struct MetadataGenerator<C: Clock = SystemClock> {
    catalog: &'static [MoodDefinition],
    window_ms: u64,
    clock: C,
}

impl MetadataGenerator<SystemClock> {
    /// Generator over the built-in catalog, reading the system clock
    pub fn new(window_ms: u64) -> Self {
        Self::with_clock(SystemClock, window_ms)
    }
}

impl<C: Clock> MetadataGenerator<C> {
    pub fn with_clock(clock: C, window_ms: u64) -> Self {
        Self {
            catalog: &MOOD_CATALOG,
            window_ms: window_ms.max(1),
            clock,
        }
    }

    /// Pick mood and flags for a token at `now`
    pub fn select(&self, token_id: &str, now: DateTime<Utc>) -> Result<Selection> {
        let seed = GenerationSeed::derive(
            parse_token_number(token_id),
            now.timestamp_millis(),
            self.window_ms,
        );

        if !seed.is_finite() {
            return Err(GenerationError::NonNumericToken(token_id.to_string()));
        }

        let index = mood_index(seed, self.catalog.len())
            .ok_or_else(|| GenerationError::NonNumericToken(token_id.to_string()))?;

        let mood = self
            .catalog
            .get(index)
            .ok_or(GenerationError::MoodOutOfRange(index))?;

        Ok(Selection {
            seed,
            mood,
            flags: VisualFlags::derive(seed),
        })
    }

    /// Render the SVG for a token at `now`
    pub fn render_svg_at(&self, token_id: &str, now: DateTime<Utc>) -> Result<String> {
        let selection = self.select(token_id, now)?;
        Ok(self.compose(token_id, &selection))
    }

    /// Full metadata for a token at `now`
    pub fn generate_at(&self, token_id: &str, now: DateTime<Utc>) -> Result<TokenMetadata> {
        let selection = self.select(token_id, now)?;

        debug!(
            "Token {} -> {} (seed {}, flags {:?})",
            token_id, selection.mood.name, selection.seed.value(), selection.flags
        );

        let svg = self.compose(token_id, &selection);

        Ok(TokenMetadata::build(
            token_id,
            selection.mood,
            selection.flags,
            &svg,
            now,
        ))
    }

    fn compose(&self, token_id: &str, selection: &Selection) -> String {
        compose(&SvgInputs {
            mood: selection.mood,
            token_id,
            flags: selection.flags,
            seed: selection.seed,
        })
    }
}

impl<C: Clock> MetadataSource for MetadataGenerator<C> {
    fn generate(&self, token_id: &str) -> Result<TokenMetadata> {
        let now = self.clock.now();
        self.generate_at(token_id, now)
    }
}
