//! Station records and the nearest-station wrapper.

use serde::{Deserialize, Serialize};

/// One runway of a station.
///
/// The upstream only reports the two end identifiers; [`Runway::synthesize_name`]
/// derives the familiar combined form ("04L/22R") from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runway {
    pub length_ft: Option<f64>,
    pub width_ft: Option<f64>,
    pub ident1: Option<String>,
    pub ident2: Option<String>,
    pub name: Option<String>,
}

impl Runway {
    /// Set `name` to `"{ident1}/{ident2}"` when both end identifiers are
    /// present. Leaves `name` untouched otherwise, and is safe to call more
    /// than once.
    pub fn synthesize_name(&mut self) {
        if let (Some(ident1), Some(ident2)) = (&self.ident1, &self.ident2) {
            self.name = Some(format!("{ident1}/{ident2}"));
        }
    }
}

/// An airport or weather-reporting station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub city: Option<String>,
    pub country: Option<String>,
    pub elevation_ft: Option<f64>,
    pub elevation_m: Option<f64>,
    pub gps: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub latitude: Option<f64>,
    pub local: Option<String>,
    pub longitude: Option<f64>,
    pub name: Option<String>,
    pub note: Option<String>,
    pub reporting: Option<bool>,
    pub runways: Option<Vec<Runway>>,
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub station_type: Option<String>,
    pub website: Option<String>,
    pub wiki: Option<String>,
}

impl Station {
    /// Derive the combined display name of every runway. A station with no
    /// runway list is left as-is.
    pub fn synthesize_runway_names(&mut self) {
        if let Some(runways) = &mut self.runways {
            for runway in runways {
                runway.synthesize_name();
            }
        }
    }
}

/// A station plus its distance from the queried coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyStation {
    pub station: Station,
    pub coordinate_distance: Option<f64>,
    pub nautical_miles: Option<f64>,
    pub miles: Option<f64>,
    pub kilometers: Option<f64>,
}
