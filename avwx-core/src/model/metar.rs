//! Decoded METAR observations.

use serde::{Deserialize, Serialize};

use super::{CloudLayer, LineItem, ReportMeta, TimeValue};

/// Altimeter setting, both raw and as spoken text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Altimeter {
    pub repr: Option<String>,
    pub value: Option<f64>,
    pub spoken: Option<String>,
}

/// The decoded remarks section of a METAR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemarksInfo {
    pub maximum_temperature_6: Option<f64>,
    pub minimum_temperature_6: Option<f64>,
    pub pressure_tendency: Option<f64>,
    pub precip_36_hours: Option<f64>,
    pub precip_24_hours: Option<f64>,
    pub sunshine_minutes: Option<f64>,
    #[serde(default)]
    pub codes: Vec<LineItem>,
    pub dewpoint_decimal: Option<LineItem>,
    pub maximum_temperature_24: Option<f64>,
    pub minimum_temperature_24: Option<f64>,
    pub precip_hourly: Option<f64>,
    pub sea_level_pressure: Option<LineItem>,
    pub snow_depth: Option<f64>,
    pub temperature_decimal: Option<LineItem>,
}

/// Units the report's numeric fields are expressed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Units {
    pub accumulation: Option<String>,
    pub altimeter: Option<String>,
    pub altitude: Option<String>,
    pub temperature: Option<String>,
    pub visibility: Option<String>,
    pub wind_speed: Option<String>,
}

/// A decoded METAR observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metar {
    pub meta: Option<ReportMeta>,
    pub altimeter: Option<Altimeter>,
    #[serde(default)]
    pub clouds: Vec<CloudLayer>,
    pub flight_rules: Option<String>,
    #[serde(default)]
    pub other: Vec<String>,
    pub sanitized: Option<String>,
    pub visibility: Option<LineItem>,
    pub wind_direction: Option<LineItem>,
    pub wind_gust: Option<LineItem>,
    pub wind_speed: Option<LineItem>,
    #[serde(default)]
    pub wx_codes: Vec<LineItem>,
    pub raw: Option<String>,
    pub station: Option<String>,
    pub time: Option<TimeValue>,
    pub remarks: Option<String>,
    pub dewpoint: Option<LineItem>,
    pub relative_humidity: Option<f64>,
    pub remarks_info: Option<RemarksInfo>,
    #[serde(default)]
    pub runway_visibility: Vec<String>,
    pub temperature: Option<LineItem>,
    #[serde(default)]
    pub wind_variable_direction: Vec<String>,
    pub density_altitude: Option<f64>,
    pub pressure_altitude: Option<f64>,
    pub units: Option<Units>,
}
