//! Core library for the `avwx` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The fetch seam used to reach the AVWX REST API
//! - Typed report models (station, METAR, TAF, summary)
//! - The lookup client, one operation per consumed endpoint
//!
//! It is used by `avwx-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod fetch;
pub mod model;

pub use client::{AvwxClient, Error};
pub use config::{Config, TOKEN_ENV};
pub use fetch::{FetchResponse, Fetcher, HttpFetcher};
pub use model::{Metar, NearbyStation, Runway, Station, Summary, Taf};

#[cfg(test)]
mod tests {
    // use super::*;

    #[test]
    fn it_works() {}
}
