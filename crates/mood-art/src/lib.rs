//! Mood Art
//!
//! Procedural artwork and ERC-721 metadata for Mood NFTs. A token id plus a
//! coarse time bucket seeds a small pseudo-random function which picks a mood
//! from a fixed catalog, derives a handful of visual flags, and composes an
//! animated SVG that is inlined into the metadata as a data URI.
//!
//! Output is stable for a given token within one time window and changes
//! between windows. Nothing here is cryptographically random.

pub mod catalog;
pub mod clock;
pub mod error;
pub mod flags;
pub mod generator;
pub mod metadata;
pub mod seed;
pub mod svg;

pub use catalog::{MoodDefinition, PatternKind, RarityTier, MOOD_CATALOG};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{GenerationError, Result};
pub use flags::VisualFlags;
pub use generator::{MetadataGenerator, MetadataSource};
pub use metadata::{Attribute, TokenMetadata};
pub use seed::{parse_token_number, prf, GenerationSeed, DEFAULT_WINDOW_MS};
