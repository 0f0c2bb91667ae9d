mod lookup;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use waypost_client::MapsClient;
use waypost_core::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "waypost")]
#[command(about = "Geocoding, directions and timezone lookups against the maps web API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Geocode an address and/or component filter in a single request
    Geocode {
        #[arg(long)]
        address: Option<String>,
        /// Component filter, e.g. "country:US|postal_code:36104"
        #[arg(long)]
        components: Option<String>,
        /// Viewport bias, "south,west|north,east"
        #[arg(long)]
        bounds: Option<String>,
        #[arg(long)]
        language: Option<String>,
        /// Region bias as a ccTLD, e.g. "it"
        #[arg(long)]
        region: Option<String>,
    },
    /// Geocode with fallback, dropping constraints until something matches
    Locate {
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        locality: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
        #[arg(long)]
        administrative_area: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        language: Option<String>,
        /// Pause between fallback attempts (defaults to WAYPOST_RETRY_DELAY_MS)
        #[arg(long)]
        retry_delay_ms: Option<u64>,
    },
    /// Find a route between two "lat,lng" coordinates
    Route {
        #[arg(long, allow_hyphen_values = true)]
        origin: String,
        #[arg(long, allow_hyphen_values = true)]
        destination: String,
    },
    /// Look up the timezone at a coordinate
    Timezone {
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
        /// RFC 3339 instant; defaults to now
        #[arg(long, value_parser = parse_timestamp)]
        timestamp: Option<DateTime<Utc>>,
        #[arg(long)]
        language: Option<String>,
    },
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

fn build_client(config: &AppConfig) -> anyhow::Result<MapsClient> {
    MapsClient::from_config(config).context("failed to build maps client")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Also loads `.env`.
    let config = waypost_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = build_client(&config)?;

    match cli.command {
        Commands::Geocode {
            address,
            components,
            bounds,
            language,
            region,
        } => {
            let params = lookup::params_from([
                ("address", address),
                ("components", components),
                ("bounds", bounds),
                ("language", language),
                ("region", region),
            ]);
            lookup::run_geocode(&client, &params).await?;
        }
        Commands::Locate {
            address,
            locality,
            postal_code,
            administrative_area,
            country,
            language,
            retry_delay_ms,
        } => {
            let params = lookup::params_from([
                ("address", address),
                ("locality", locality),
                ("postal_code", postal_code),
                ("administrative_area", administrative_area),
                ("country", country),
                ("language", language),
            ]);
            let retry_delay = retry_delay_ms
                .map_or_else(|| config.retry_delay(), std::time::Duration::from_millis);
            lookup::run_locate(&client, &params, retry_delay).await?;
        }
        Commands::Route {
            origin,
            destination,
        } => {
            lookup::run_route(&client, &origin, &destination).await?;
        }
        Commands::Timezone {
            latitude,
            longitude,
            timestamp,
            language,
        } => {
            lookup::run_timezone(&client, latitude, longitude, timestamp, language).await?;
        }
    }

    Ok(())
}
