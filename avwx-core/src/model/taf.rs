//! Decoded TAF forecasts.

use serde::{Deserialize, Serialize};

use super::{CloudLayer, LineItem, ReportMeta, TimeValue};

/// One forecast period within a TAF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TafPeriod {
    pub altimeter: Option<f64>,
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
    pub end_time: Option<TimeValue>,
    #[serde(default)]
    pub icing: Vec<String>,
    pub probability: Option<f64>,
    pub raw: Option<String>,
    pub start_time: Option<TimeValue>,
    #[serde(default)]
    pub turbulence: Vec<String>,
    #[serde(rename = "type")]
    pub period_type: Option<String>,
    pub wind_shear: Option<String>,
    pub summary: Option<String>,
}

/// A decoded TAF forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taf {
    pub meta: Option<ReportMeta>,
    pub raw: Option<String>,
    pub station: Option<String>,
    pub time: Option<TimeValue>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub forecast: Vec<TafPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taf_decodes_forecast_periods() {
        let taf: Taf = serde_json::from_str(
            r#"{
                "raw": "KJFK 011730Z 0118/0224 04010KT P6SM SCT250",
                "station": "KJFK",
                "forecast": [
                    { "type": "FROM", "raw": "0118/0224 04010KT P6SM SCT250" },
                    { "type": "TEMPO", "raw": "0200/0204 5SM -RA BR", "probability": 30 }
                ]
            }"#,
        )
        .expect("taf should decode");

        assert_eq!(taf.forecast.len(), 2);
        assert_eq!(taf.forecast[0].period_type.as_deref(), Some("FROM"));
        assert_eq!(taf.forecast[1].probability, Some(30.0));
    }

    #[test]
    fn taf_tolerates_a_missing_forecast_list() {
        let taf: Taf = serde_json::from_str(r#"{ "station": "KJFK" }"#)
            .expect("taf should decode");
        assert!(taf.forecast.is_empty());
    }
}
