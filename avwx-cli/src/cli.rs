use anyhow::Context;
use clap::{Parser, Subcommand};

use avwx_core::{AvwxClient, Config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "avwx", version, about = "AVWX aviation weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the AVWX account token used for all lookups.
    Configure,

    /// Condensed current-plus-forecast conditions for a station.
    Summary {
        /// ICAO ident, e.g. "KJFK", or a "lat,lon" coordinate pair.
        location: String,
    },

    /// Full station record, including runways.
    Station {
        /// ICAO ident, e.g. "KJFK".
        ident: String,
    },

    /// Reporting stations closest to a coordinate, nearest first.
    Near {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        #[arg(allow_negative_numbers = true)]
        longitude: f64,

        /// Maximum number of stations to return.
        #[arg(long)]
        count: Option<u32>,
    },

    /// Search stations by ICAO, IATA, name, city or state.
    Search {
        /// Free text, e.g. "Denver".
        text: String,

        /// Maximum number of stations to return.
        #[arg(long)]
        count: Option<u32>,
    },

    /// Latest decoded METAR for a station.
    Metar {
        /// ICAO ident, e.g. "KJFK", or a "lat,lon" coordinate pair.
        location: String,
    },

    /// Latest decoded TAF for a station.
    Taf {
        /// ICAO ident, e.g. "KJFK", or a "lat,lon" coordinate pair.
        location: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Summary { location } => print_json(&client()?.summary(&location).await?),
            Command::Station { ident } => print_json(&client()?.station(&ident).await?),
            Command::Near {
                latitude,
                longitude,
                count,
            } => print_json(&client()?.nearest_stations(latitude, longitude, count).await?),
            Command::Search { text, count } => {
                print_json(&client()?.station_search(&text, count).await?)
            }
            Command::Metar { location } => print_json(&client()?.metar(&location).await?),
            Command::Taf { location } => print_json(&client()?.taf(&location).await?),
        }
    }
}

fn client() -> anyhow::Result<AvwxClient> {
    let config = Config::load()?;
    AvwxClient::from_config(&config)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("Failed to render response as JSON")?;
    println!("{rendered}");

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let token = inquire::Password::new("AVWX API token")
        .without_confirmation()
        .prompt()
        .context("Failed to read token")?;

    config.set_token(token);
    config.save()?;

    let path = Config::config_file_path()?;
    println!("Token saved to {}", path.display());

    Ok(())
}
