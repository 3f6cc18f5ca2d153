use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use firstaid_core::NoticeSink;
use tracing_subscriber::EnvFilter;

mod guide;
mod hospitals;
mod notices;

use hospitals::{OutputFormat, SearchTarget};
use notices::TerminalNotices;

#[derive(Debug, Parser)]
#[command(name = "firstaid-cli")]
#[command(about = "First-aid guidance and nearby hospital lookup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Get first-aid steps from an injury photo or a description
    Guide {
        /// PNG, JPEG, or WebP photo of the injury
        #[arg(long)]
        image: Option<PathBuf>,
        /// What happened, in your own words
        #[arg(long, short)]
        description: Option<String>,
    },
    /// Find the nearest hospitals to a place or to coordinates
    Hospitals {
        /// City, address, or landmark
        #[arg(long, conflicts_with_all = ["lat", "lon"], required_unless_present = "lat")]
        location: Option<String>,
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Print the full result as JSON
        #[arg(long, conflicts_with = "geojson")]
        json: bool,
        /// Print map points as a GeoJSON FeatureCollection
        #[arg(long)]
        geojson: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = firstaid_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let notices: Arc<dyn NoticeSink> = Arc::new(TerminalNotices);

    match cli.command {
        Commands::Guide { image, description } => {
            guide::run_guide(&config, notices, image.as_deref(), description.as_deref()).await
        }
        Commands::Hospitals {
            location,
            lat,
            lon,
            json,
            geojson,
        } => {
            let target = SearchTarget::from_args(location, lat, lon)?;
            let format = OutputFormat::from_flags(json, geojson);
            hospitals::run_hospitals(&config, notices, target, format).await
        }
    }
}
