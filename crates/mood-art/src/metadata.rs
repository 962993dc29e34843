//! ERC-721 metadata document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::MoodDefinition;
use crate::flags::VisualFlags;

pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;utf8,";

/// Metadata JSON served for a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,

    /// SVG inlined as a percent-encoded data URI
    pub image: String,

    pub attributes: Vec<Attribute>,
}

/// A single trait
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: &str, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: value.into(),
        }
    }
}

impl TokenMetadata {
    /// Assemble metadata for a token from its mood, flags and rendered SVG
    pub fn build(
        token_id: &str,
        mood: &MoodDefinition,
        flags: VisualFlags,
        svg: &str,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: format!("{} Mood #{}", mood.name, token_id),
            description: format!(
                "A dynamic NFT capturing the essence of {}. This NFT's appearance reflects \
                 real-time market sentiment and evolves with blockchain conditions. Rarity: {}",
                mood.name.to_lowercase(),
                mood.rarity
            ),
            image: encode_data_uri(svg),
            attributes: attributes(mood, flags, generated_at),
        }
    }

    /// Look up a trait value by name
    pub fn attribute(&self, trait_type: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.trait_type == trait_type)
            .map(|a| a.value.as_str())
    }

    /// Decode the inlined SVG, `None` if the image is not an SVG data URI
    pub fn decoded_svg(&self) -> Option<String> {
        let encoded = self.image.strip_prefix(DATA_URI_PREFIX)?;
        urlencoding::decode(encoded).ok().map(|s| s.into_owned())
    }
}

fn attributes(mood: &MoodDefinition, flags: VisualFlags, generated_at: DateTime<Utc>) -> Vec<Attribute> {
    let yes_no = |on: bool| if on { "Yes" } else { "No" };

    vec![
        Attribute::new("Mood", mood.name),
        Attribute::new("Rarity", mood.rarity.label()),
        Attribute::new("Energy Level", mood.energy_level),
        Attribute::new("Primary Color", mood.primary_color),
        Attribute::new("Has Glow Effect", yes_no(flags.has_glow)),
        Attribute::new(
            "Particle System",
            if flags.has_particles { "Active" } else { "None" },
        ),
        Attribute::new(
            "Background Pattern",
            if flags.has_pattern_overlay {
                mood.pattern.label()
            } else {
                "Solid"
            },
        ),
        Attribute::new("Frame Style", format!("Style {}", flags.frame_style_index + 1)),
        Attribute::new("Generation", generated_at.format("%Y-%m-%d").to_string()),
    ]
}

/// Wrap an SVG document in a data URI
///
/// Uses the `encodeURIComponent` character set, so `!'()*` stay literal
/// alongside the RFC 3986 unreserved characters.
pub fn encode_data_uri(svg: &str) -> String {
    let encoded = urlencoding::encode(svg)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*");

    format!("{DATA_URI_PREFIX}{encoded}")
}
