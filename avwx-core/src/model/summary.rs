//! Condensed current-plus-forecast conditions for one station.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LineItem, ReportMeta};

/// Lowest broken or overcast layer reported by the METAR half of a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ceiling {
    pub repr: Option<String>,
    #[serde(rename = "type")]
    pub layer_type: Option<String>,
    pub altitude: Option<f64>,
    pub modifier: Option<String>,
}

/// Current-conditions half of a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetar {
    pub time: Option<DateTime<Utc>>,
    pub flight_rules: Option<String>,
    #[serde(default)]
    pub wx_codes: Vec<LineItem>,
    pub visibility: Option<LineItem>,
    pub ceiling: Option<Ceiling>,
}

/// One flight-rules window in the forecast half of a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryPeriod {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub flight_rules: Option<String>,
}

/// Forecast half of a summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryTaf {
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub forecast: Vec<SummaryPeriod>,
}

/// Condensed conditions for one station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub meta: Option<ReportMeta>,
    pub metar: Option<SummaryMetar>,
    pub taf: Option<SummaryTaf>,
}
