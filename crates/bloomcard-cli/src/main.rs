//! Bloomcard CLI
//!
//! Thin wrapper around bloomcard-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Build a shareable link
//! bloomcard encode --flower tulip --color '#2a9d8f' --message "hi!"
//!
//! # Decode a link (or a bare token)
//! bloomcard decode 'bloomcard://card?f=eyJ0eXBlIjoi...'
//!
//! # Pick positions for planted flowers
//! bloomcard plant --occupied 35,50,65 --count 3 --seed 7
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bloomcard_core::card::{FlowerKind, DEFAULT_COLOR, DEFAULT_MESSAGE};
use bloomcard_core::placement::{
    pick_position, PLANT_ATTEMPTS, PLANT_MAX_LEFT, PLANT_MIN_GAP, PLANT_MIN_LEFT,
};
use bloomcard_core::share::{self, ShareConfig, DEFAULT_BASE_URL};

/// Bloomcard - animated flower cards shared as links
#[derive(Parser)]
#[command(name = "bloomcard")]
#[command(version = "0.1.0")]
#[command(about = "Bloomcard - animated flower cards shared as links")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a shareable link from a card configuration
    Encode {
        /// Flower kind (rose, tulip, lily)
        #[arg(short, long, default_value = "rose")]
        flower: String,

        /// Petal color as #rrggbb
        #[arg(short, long, default_value = DEFAULT_COLOR)]
        color: String,

        /// Message shown on the card
        #[arg(short, long, default_value = DEFAULT_MESSAGE)]
        message: String,

        /// Base URL for the generated link
        #[arg(short, long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Decode a shared link or bare token
    Decode {
        /// The link (or token) to decode
        link: String,

        /// Print the decoded configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pick gap-respecting positions for planted flowers
    Plant {
        /// Occupied positions in percent, comma separated
        #[arg(short, long, value_delimiter = ',', default_value = "35,50,65")]
        occupied: Vec<i32>,

        /// How many positions to pick
        #[arg(short, long, default_value = "3")]
        count: usize,

        /// Seed the random source for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Encode {
            flower,
            color,
            message,
            base_url,
        } => {
            // The codec passes anything through; flag the likely mistakes
            if flower.parse::<FlowerKind>().is_err() {
                tracing::warn!("'{}' is not a known flower kind; the card will fall back to rose", flower);
            }
            if bloomcard_core::color::Rgb::parse(&color).is_err() {
                tracing::warn!("'{}' is not a #rrggbb color; the card will fall back to the default", color);
            }

            let config = ShareConfig::new(flower, color, message);
            let link = share::share_link(&base_url, &config)?;
            let token = share::token_from_link(&link);

            println!("Share link:");
            println!();
            println!("{}", link);
            println!();
            println!("Token: {}", token);
        }

        Commands::Decode { link, json } => {
            let token = share::token_from_link(&link);
            let config = ShareConfig::decode(token)
                .map_err(|e| anyhow::anyhow!("Not a valid share link: {}", e))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Decoded card:");
                println!("  Flower:  {}", config.flower.as_deref().unwrap_or("(absent)"));
                println!("  Color:   {}", config.color.as_deref().unwrap_or("(absent)"));
                println!("  Message: {}", config.message.as_deref().unwrap_or("(absent)"));
            }
        }

        Commands::Plant {
            occupied,
            count,
            seed,
        } => {
            let mut rng: StdRng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };

            let mut taken = occupied;
            println!("Picked positions:");
            for _ in 0..count {
                let pos = pick_position(
                    &mut rng,
                    &taken,
                    PLANT_MIN_LEFT,
                    PLANT_MAX_LEFT,
                    PLANT_MIN_GAP,
                    PLANT_ATTEMPTS,
                )?;
                println!("  {}%", pos);
                taken.push(pos);
            }
        }
    }

    Ok(())
}
