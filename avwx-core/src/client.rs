//! The AVWX client and its six lookups.
//!
//! Each lookup builds one endpoint URL, performs one authenticated GET
//! through the configured [`Fetcher`], gates on the response status, and
//! decodes the body into the matching [`model`](crate::model) shape. Station
//! lookups additionally derive combined runway display names before
//! returning.

use log::{debug, warn};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::{Config, TOKEN_ENV};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::model::{Metar, NearbyStation, Station, Summary, Taf};

const API_BASE: &str = "https://avwx.rest/api";

/// Ways a lookup can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (connection, TLS, read failure).
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
    /// The service answered with a non-OK status. The body is not inspected;
    /// unknown stations, bad tokens and server faults all surface the same
    /// way.
    #[error("Failed to fetch airport information")]
    FetchFailed { status: StatusCode },
    /// The service answered OK but the body did not match the expected shape.
    #[error("Failed to parse AVWX {kind} JSON")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid request URL: {url}")]
    InvalidUrl { url: String },
}

/// Typed client for the AVWX aviation weather REST API.
#[derive(Debug)]
pub struct AvwxClient {
    fetcher: Box<dyn Fetcher>,
}

impl AvwxClient {
    /// Client that talks to the live service with the given account token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_fetcher(Box::new(HttpFetcher::new(token)))
    }

    /// Client over a custom transport.
    pub fn with_fetcher(fetcher: Box<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Client using the token from the environment or the stored config.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let Some(token) = config.resolve_token() else {
            anyhow::bail!(
                "No AVWX token configured.\n\
                 Hint: run `avwx configure`, or set the {TOKEN_ENV} environment variable."
            );
        };
        Ok(Self::new(token))
    }

    /// Condensed current-plus-forecast conditions for one station.
    pub async fn summary(&self, location: &str) -> Result<Summary, Error> {
        let url = endpoint(&format!("summary/{location}"), &[])?;
        self.fetch_json("summary", url).await
    }

    /// Full station record, with combined runway names filled in.
    pub async fn station(&self, ident: &str) -> Result<Station, Error> {
        let url = endpoint(&format!("station/{ident}"), &[])?;
        let mut station: Station = self.fetch_json("station", url).await?;
        station.synthesize_runway_names();
        Ok(station)
    }

    /// Reporting stations closest to a coordinate, nearest first.
    pub async fn nearest_stations(
        &self,
        latitude: f64,
        longitude: f64,
        count: Option<u32>,
    ) -> Result<Vec<NearbyStation>, Error> {
        let url = endpoint(
            &format!("station/near/{latitude},{longitude}"),
            &[("n", count.map(|n| n.to_string()))],
        )?;
        let mut nearby: Vec<NearbyStation> = self.fetch_json("nearest stations", url).await?;
        for entry in &mut nearby {
            entry.station.synthesize_runway_names();
        }
        Ok(nearby)
    }

    /// Stations matching a free-text search.
    pub async fn station_search(
        &self,
        text: &str,
        count: Option<u32>,
    ) -> Result<Vec<Station>, Error> {
        let url = endpoint(
            "search/station",
            &[
                ("text", Some(text.to_owned())),
                ("n", count.map(|n| n.to_string())),
            ],
        )?;
        let mut stations: Vec<Station> = self.fetch_json("station search", url).await?;
        for station in &mut stations {
            station.synthesize_runway_names();
        }
        Ok(stations)
    }

    /// Latest decoded METAR for a station or coordinate pair.
    pub async fn metar(&self, location: &str) -> Result<Metar, Error> {
        let url = endpoint(&format!("metar/{location}"), &[])?;
        self.fetch_json("METAR", url).await
    }

    /// Latest decoded TAF for a station or coordinate pair.
    pub async fn taf(&self, location: &str) -> Result<Taf, Error> {
        let url = endpoint(&format!("taf/{location}"), &[])?;
        self.fetch_json("TAF", url).await
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        kind: &'static str,
        url: Url,
    ) -> Result<T, Error> {
        debug!("GET {url}");
        let response = self.fetcher.get(&url).await?;
        if response.status != StatusCode::OK {
            warn!("AVWX returned {} for {url}", response.status);
            return Err(Error::FetchFailed {
                status: response.status,
            });
        }
        serde_json::from_str(&response.body).map_err(|source| Error::Decode { kind, source })
    }
}

/// Join a path onto the API base and attach the query parameters that are
/// actually present. No parameters means no `?` in the final URL.
fn endpoint(path: &str, query: &[(&str, Option<String>)]) -> Result<Url, Error> {
    let raw = format!("{API_BASE}/{path}");
    let mut url = Url::parse(&raw).map_err(|_| Error::InvalidUrl { url: raw })?;
    let mut pairs = query
        .iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (*name, value)))
        .peekable();
    if pairs.peek().is_some() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(url)
}
