//! SVG composition
//!
//! The document is assembled from fixed templates: gradients and optional
//! glow filters, the background, the pattern overlay, two pulsing rings, the
//! text block, particles and the frame. Only the token id comes from the
//! caller, and it is escaped before it is written.

pub mod frames;
pub mod particles;
pub mod patterns;

use crate::catalog::MoodDefinition;
use crate::flags::VisualFlags;
use crate::seed::GenerationSeed;

pub use frames::frame_fragment;
pub use particles::{particle_fragment, Particle, PARTICLE_COUNT};

/// Join template lines with `\n`, keeping every line's exact whitespace
macro_rules! svg_lines {
    ($first:literal $(, $rest:literal)* $(,)?) => {
        concat!($first $(, "\n", $rest)*)
    };
}

const GLOW_FILTERS: &str = svg_lines!(
    "",
    r#"      <filter id="glow" x="-50%" y="-50%" width="200%" height="200%">"#,
    r#"        <feGaussianBlur stdDeviation="4" result="coloredBlur"/>"#,
    "        <feMerge>\x20",
    r#"          <feMergeNode in="coloredBlur"/>"#,
    r#"          <feMergeNode in="SourceGraphic"/>"#,
    "        </feMerge>",
    "      </filter>",
    r#"      <filter id="strongGlow" x="-100%" y="-100%" width="300%" height="300%">"#,
    r#"        <feGaussianBlur stdDeviation="8" result="coloredBlur"/>"#,
    "        <feMerge>\x20",
    r#"          <feMergeNode in="coloredBlur"/>"#,
    r#"          <feMergeNode in="SourceGraphic"/>"#,
    "        </feMerge>",
    "      </filter>",
    "      ",
);

/// Everything the composer needs for one token
#[derive(Debug, Clone, Copy)]
pub struct SvgInputs<'a> {
    pub mood: &'a MoodDefinition,
    pub token_id: &'a str,
    pub flags: VisualFlags,
    pub seed: GenerationSeed,
}

/// Escape text for use inside element content or attribute values
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the full SVG document
pub fn compose(inputs: &SvgInputs<'_>) -> String {
    let SvgInputs {
        mood,
        token_id,
        flags,
        seed,
    } = *inputs;
    let color = mood.primary_color;

    let pattern = if flags.has_pattern_overlay {
        mood.pattern.render(color)
    } else {
        String::new()
    };

    let particles = if flags.has_particles {
        particle_fragment(seed, color)
    } else {
        String::new()
    };

    let frame = frame_fragment(flags.frame_style_index, color);

    let (filters, glow, strong_glow) = if flags.has_glow {
        (
            GLOW_FILTERS,
            r#"filter="url(#glow)""#,
            r#"filter="url(#strongGlow)""#,
        )
    } else {
        ("", "", "")
    };

    let background = mood.background_color;
    let emoji = mood.emoji;
    let token = escape_xml(token_id);
    let name = mood.name.to_uppercase();
    let rarity = mood.rarity.label().to_uppercase();
    let energy = mood.energy_level;

    format!(
        svg_lines!(
            r#"<svg width="400" height="400" viewBox="0 0 400 400" xmlns="http://www.w3.org/2000/svg">"#,
            "    <defs>",
            r#"      <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">"#,
            r#"        <stop offset="0%" style="stop-color:{color};stop-opacity:0.3" />"#,
            r#"        <stop offset="50%" style="stop-color:{background};stop-opacity:0.8" />"#,
            r#"        <stop offset="100%" style="stop-color:#000000;stop-opacity:1" />"#,
            "      </linearGradient>",
            r#"      <radialGradient id="centerGlow" cx="50%" cy="40%" r="60%">"#,
            r#"        <stop offset="0%" style="stop-color:{color};stop-opacity:0.8" />"#,
            r#"        <stop offset="100%" style="stop-color:transparent;stop-opacity:0" />"#,
            "      </radialGradient>",
            "      {filters}",
            "    </defs>",
            "    ",
            "    <!-- Background -->",
            r#"    <rect width="400" height="400" fill="url(#bg)" />"#,
            r#"    <rect width="400" height="400" fill="url(#centerGlow)" />"#,
            "    ",
            "    <!-- Background Pattern -->",
            "    {pattern}",
            "    ",
            "    <!-- Main Circle -->",
            r#"    <circle cx="200" cy="160" r="90" fill="none" stroke="{color}" stroke-width="3" opacity="0.6">"#,
            r#"      <animate attributeName="r" values="85;95;85" dur="4s" repeatCount="indefinite"/>"#,
            "    </circle>",
            "    ",
            "    <!-- Inner Power Circle -->",
            r#"    <circle cx="200" cy="160" r="60" fill="none" stroke="{color}" stroke-width="2" opacity="0.8" {glow}>"#,
            r#"      <animate attributeName="r" values="55;65;55" dur="3s" repeatCount="indefinite"/>"#,
            r#"      <animate attributeName="opacity" values="0.8;0.4;0.8" dur="2s" repeatCount="indefinite"/>"#,
            "    </circle>",
            "    ",
            "    <!-- Main Emoji -->",
            r#"    <text x="200" y="175" font-family="Arial, sans-serif" font-size="70" text-anchor="middle" {strong_glow}>"#,
            "      {emoji}",
            "    </text>",
            "    ",
            "    <!-- Token ID -->",
            r#"    <text x="200" y="290" font-family="Arial, sans-serif" font-size="28" font-weight="bold" text-anchor="middle" fill="white">"#,
            "      #{token}",
            "    </text>",
            "    ",
            "    <!-- Mood Name -->",
            r#"    <text x="200" y="320" font-family="Arial, sans-serif" font-size="24" font-weight="bold" text-anchor="middle" fill="{color}" {glow}>"#,
            "      {name}",
            "    </text>",
            "    ",
            "    <!-- Rarity Badge -->",
            r#"    <rect x="20" y="20" width="80" height="25" rx="12" fill="{color}" opacity="0.8"/>"#,
            r#"    <text x="60" y="37" font-family="Arial, sans-serif" font-size="12" font-weight="bold" text-anchor="middle" fill="black">"#,
            "      {rarity}",
            "    </text>",
            "    ",
            "    <!-- Energy Level -->",
            r##"    <text x="200" y="350" font-family="Arial, sans-serif" font-size="14" text-anchor="middle" fill="#cccccc">"##,
            "      Energy: {energy}",
            "    </text>",
            "    ",
            "    <!-- Particles -->",
            "    {particles}",
            "    ",
            "    <!-- Frame -->",
            "    {frame}",
            "  </svg>",
        ),
        color = color,
        background = background,
        filters = filters,
        pattern = pattern,
        glow = glow,
        strong_glow = strong_glow,
        emoji = emoji,
        token = token,
        name = name,
        rarity = rarity,
        energy = energy,
        particles = particles,
        frame = frame,
    )
}
