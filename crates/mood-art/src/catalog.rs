//! Static mood catalog
//!
//! Each mood bundles a palette, an energy caption, an emoji and a background
//! pattern. Selection indexes into [`MOOD_CATALOG`] so the order is part of
//! the output contract and must not change.

use serde::Serialize;
use std::fmt;

/// Background pattern drawn behind the main artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Diamonds,
    Rockets,
    Storm,
    Waves,
    Stars,
    Chaos,
    Zen,
    Tribal,
}

impl PatternKind {
    pub const ALL: [PatternKind; 8] = [
        PatternKind::Diamonds,
        PatternKind::Rockets,
        PatternKind::Storm,
        PatternKind::Waves,
        PatternKind::Stars,
        PatternKind::Chaos,
        PatternKind::Zen,
        PatternKind::Tribal,
    ];

    /// Label used in the "Background Pattern" trait
    pub fn label(self) -> &'static str {
        match self {
            PatternKind::Diamonds => "diamonds",
            PatternKind::Rockets => "rockets",
            PatternKind::Storm => "storm",
            PatternKind::Waves => "waves",
            PatternKind::Stars => "stars",
            PatternKind::Chaos => "chaos",
            PatternKind::Zen => "zen",
            PatternKind::Tribal => "tribal",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display-only rarity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RarityTier {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl RarityTier {
    pub fn label(self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Rare => "Rare",
            RarityTier::Epic => "Epic",
            RarityTier::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the mood catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodDefinition {
    pub name: &'static str,

    /// Stroke, fill and text color
    pub primary_color: &'static str,

    /// Middle stop of the background gradient
    pub background_color: &'static str,

    pub energy_level: &'static str,
    pub emoji: &'static str,
    pub pattern: PatternKind,
    pub rarity: RarityTier,
}

pub static MOOD_CATALOG: [MoodDefinition; 8] = [
    MoodDefinition {
        name: "Diamond Hands",
        primary_color: "#00ffff",
        background_color: "#001a1a",
        energy_level: "Legendary",
        emoji: "💎",
        pattern: PatternKind::Diamonds,
        rarity: RarityTier::Legendary,
    },
    MoodDefinition {
        name: "Bull Run",
        primary_color: "#39ff14",
        background_color: "#0a2e0a",
        energy_level: "Extreme",
        emoji: "🚀",
        pattern: PatternKind::Rockets,
        rarity: RarityTier::Epic,
    },
    MoodDefinition {
        name: "Bear Market",
        primary_color: "#ff4444",
        background_color: "#2e0a0a",
        energy_level: "Crushing",
        emoji: "🐻",
        pattern: PatternKind::Storm,
        rarity: RarityTier::Common,
    },
    MoodDefinition {
        name: "Crab Sideways",
        primary_color: "#ffaa00",
        background_color: "#2e1a00",
        energy_level: "Neutral",
        emoji: "🦀",
        pattern: PatternKind::Waves,
        rarity: RarityTier::Uncommon,
    },
    MoodDefinition {
        name: "Moon Mission",
        primary_color: "#ff10f0",
        background_color: "#1a001a",
        energy_level: "Cosmic",
        emoji: "🌙",
        pattern: PatternKind::Stars,
        rarity: RarityTier::Rare,
    },
    MoodDefinition {
        name: "Degen Mode",
        primary_color: "#ff6600",
        background_color: "#2e1100",
        energy_level: "Chaos",
        emoji: "🎲",
        pattern: PatternKind::Chaos,
        rarity: RarityTier::Epic,
    },
    MoodDefinition {
        name: "HODL Strong",
        primary_color: "#6600ff",
        background_color: "#110025",
        energy_level: "Zen",
        emoji: "🧘",
        pattern: PatternKind::Zen,
        rarity: RarityTier::Rare,
    },
    MoodDefinition {
        name: "Ape Together",
        primary_color: "#ff9900",
        background_color: "#2e1700",
        energy_level: "Unity",
        emoji: "🦍",
        pattern: PatternKind::Tribal,
        rarity: RarityTier::Uncommon,
    },
];
