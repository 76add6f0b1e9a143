//! Typed shapes of the AVWX response bodies.
//!
//! Every record here is transient and request-scoped: decoded from one
//! response, possibly touched up (runway display names), handed back to the
//! caller, and dropped. Fields mirror the upstream vocabulary; everything the
//! upstream may omit or null out is an `Option`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod metar;
pub mod station;
pub mod summary;
pub mod taf;

pub use metar::Metar;
pub use station::{NearbyStation, Runway, Station};
pub use summary::Summary;
pub use taf::Taf;

/// A raw-text/parsed-value pair, used pervasively across METAR and TAF fields
/// (visibility, wind components, temperature, dewpoint, pressure, weather
/// codes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub repr: Option<String>,
    /// Parsed value in its text form. The upstream reports numbers for some
    /// of these fields and strings for others; decoding renders scalars as
    /// text so the shape stays uniform.
    #[serde(default, deserialize_with = "value_as_text")]
    pub value: Option<String>,
}

/// A raw-text/parsed-timestamp pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeValue {
    pub repr: Option<String>,
    pub dt: Option<DateTime<Utc>>,
}

/// One sky-condition layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudLayer {
    pub repr: Option<String>,
    #[serde(rename = "type")]
    pub layer_type: Option<String>,
    pub altitude: Option<f64>,
    pub modifier: Option<String>,
    pub direction: Option<String>,
}

/// Metadata the upstream attaches to every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub timestamp: Option<DateTime<Utc>>,
}

fn value_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(scalar) => Some(scalar.to_string()),
    })
}
