//! Offline renderer for Mood NFT metadata
//!
//! Commands:
//! - metadata: Print the metadata JSON a token would be served at a given instant
//! - svg: Print the decoded SVG artwork for a token

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use mood_art::{Clock, FixedClock, MetadataGenerator, MetadataSource, DEFAULT_WINDOW_MS};

#[derive(Parser)]
#[command(name = "mood-render")]
#[command(about = "Render Mood NFT metadata and artwork without running the service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the metadata JSON for a token
    Metadata(RenderArgs),

    /// Print the SVG artwork for a token
    Svg(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Token identifier, as it would appear in the request path
    token_id: String,

    /// Unix timestamp in milliseconds (defaults to now)
    #[arg(long)]
    at: Option<i64>,

    /// Seed window in milliseconds
    #[arg(long, default_value_t = DEFAULT_WINDOW_MS)]
    window_ms: u64,
}

impl RenderArgs {
    fn clock(&self) -> Result<FixedClock> {
        let millis = self.at.unwrap_or_else(|| Utc::now().timestamp_millis());
        FixedClock::from_millis(millis).with_context(|| format!("Timestamp out of range: {}", millis))
    }

    fn generator(&self) -> Result<MetadataGenerator<FixedClock>> {
        Ok(MetadataGenerator::with_clock(self.clock()?, self.window_ms))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Metadata(args) => print_metadata(&args)?,
        Commands::Svg(args) => print_svg(&args)?,
    }

    Ok(())
}

fn print_metadata(args: &RenderArgs) -> Result<()> {
    let metadata = args
        .generator()?
        .generate(&args.token_id)
        .context("Failed to generate metadata")?;

    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}

fn print_svg(args: &RenderArgs) -> Result<()> {
    let clock = args.clock()?;
    let svg = MetadataGenerator::with_clock(clock, args.window_ms)
        .render_svg_at(&args.token_id, clock.now())
        .context("Failed to render artwork")?;

    println!("{}", svg);
    Ok(())
}
