//! Serde models for the Weather Explorer backend.
//!
//! Every endpoint answers with a JSON envelope carrying `success` and, on
//! failure, an `error` string. Payload fields default when absent so a failure
//! body (`{"success": false, "error": "..."}`) still decodes into the same
//! struct and can be turned into an [`ApiError::Logical`].

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One weather observation as served by `/api/weather`.
///
/// All fields are optional: the backend emits `null` for missing
/// measurements and the client only formats, never mutates, them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherRecord {
    pub id: Option<i64>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub rainfall: Option<f64>,
    pub evaporation: Option<f64>,
    pub sunshine: Option<f64>,
    pub wind_gust_dir: Option<String>,
    pub wind_gust_speed: Option<f64>,
    pub wind_dir_9am: Option<String>,
    pub wind_dir_3pm: Option<String>,
    pub wind_speed_9am: Option<f64>,
    pub wind_speed_3pm: Option<f64>,
    pub humidity_9am: Option<f64>,
    pub humidity_3pm: Option<f64>,
    pub pressure_9am: Option<f64>,
    pub pressure_3pm: Option<f64>,
    pub cloud_9am: Option<f64>,
    pub cloud_3pm: Option<f64>,
    pub temp_9am: Option<f64>,
    pub temp_3pm: Option<f64>,
    pub rain_today: Option<String>,
    pub rain_tomorrow: Option<String>,
}

/// `GET /api/locations`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationsResponse {
    pub success: bool,
    pub error: Option<String>,
    pub count: Option<u64>,
    pub locations: Vec<String>,
}

/// `GET /api/weather`: one page of records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherPage {
    pub success: bool,
    pub error: Option<String>,
    pub data: Vec<WeatherRecord>,
    /// Total matching records across all pages.
    pub total: u64,
    /// Records in this page.
    pub count: u64,
}

/// Worker-pool summary returned by the concurrent endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConcurrentMetadata {
    pub locations_processed: u64,
    /// Wall-clock seconds spent on the server.
    pub processing_time: f64,
    pub max_workers: u64,
    pub total_records: u64,
}

/// `GET /api/weather/concurrent`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConcurrentResponse {
    pub success: bool,
    pub error: Option<String>,
    pub data: Vec<WeatherRecord>,
    pub metadata: ConcurrentMetadata,
}

/// `GET /api/visualize/{chart_type}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizationResponse {
    pub success: bool,
    pub error: Option<String>,
    /// Base64-encoded PNG.
    pub image: String,
    pub chart_type: String,
    pub location: Option<String>,
}

impl VisualizationResponse {
    /// Inline `data:` URL for an `<img>` element.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.image)
    }

    pub fn alt_text(&self) -> String {
        format!("{} chart", self.chart_type)
    }
}

/// Aggregates from `GET /api/stats`. Averages are rounded server-side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationStatistics {
    pub total_records: Option<u64>,
    pub avg_min_temp: Option<f64>,
    pub avg_max_temp: Option<f64>,
    pub lowest_temp: Option<f64>,
    pub highest_temp: Option<f64>,
    pub avg_rainfall: Option<f64>,
    pub avg_humidity_9am: Option<f64>,
    pub avg_humidity_3pm: Option<f64>,
    pub avg_pressure_9am: Option<f64>,
    pub avg_pressure_3pm: Option<f64>,
}

/// `GET /api/stats`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    pub success: bool,
    pub error: Option<String>,
    /// Location the statistics cover ("All locations" when unfiltered).
    pub location: Option<String>,
    pub statistics: LocationStatistics,
}

/// A JSON envelope with a `success` flag and optional `error` message.
pub trait Envelope: DeserializeOwned {
    fn succeeded(&self) -> bool;
    fn take_error(&mut self) -> Option<String>;
}

macro_rules! impl_envelope {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Envelope for $ty {
                fn succeeded(&self) -> bool {
                    self.success
                }

                fn take_error(&mut self) -> Option<String> {
                    self.error.take()
                }
            }
        )*
    };
}

impl_envelope!(
    LocationsResponse,
    WeatherPage,
    ConcurrentResponse,
    VisualizationResponse,
    StatsResponse,
);

/// Decode a response body into an envelope, classifying failures.
///
/// The body is parsed regardless of HTTP status because the backend reports
/// logical failures as JSON with status 500. A body that is not JSON counts
/// as a transport failure on error statuses and a decode failure otherwise.
pub fn decode_response<T: Envelope>(status: u16, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(body) {
        Ok(mut envelope) => {
            if envelope.succeeded() {
                Ok(envelope)
            } else {
                Err(ApiError::logical(envelope.take_error()))
            }
        }
        Err(e) if (200..300).contains(&status) => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Transport(format!("HTTP {}", status))),
    }
}

/// Charts the backend can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    Temperature,
    Rainfall,
    Humidity,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [
        ChartType::Temperature,
        ChartType::Rainfall,
        ChartType::Humidity,
    ];

    /// Path segment under `/api/visualize/`.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Temperature => "temperature",
            ChartType::Rainfall => "rainfall",
            ChartType::Humidity => "humidity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartType::Temperature => "Temperature Trends",
            ChartType::Rainfall => "Rainfall by Location",
            ChartType::Humidity => "Humidity Comparison",
        }
    }

    /// The rainfall chart compares locations, so it ignores the location filter.
    pub fn accepts_location(self) -> bool {
        !matches!(self, ChartType::Rainfall)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|chart| chart.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown chart type '{}' (expected temperature, rainfall or humidity)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "success": true,
        "count": 2,
        "total": 57,
        "limit": 25,
        "offset": 0,
        "data": [
            {"id": 1, "date": "2008-12-01", "location": "Albury", "min_temp": 13.4,
             "max_temp": 22.9, "rainfall": 0.6, "humidity_9am": 71.0,
             "humidity_3pm": 22.0, "rain_today": "No", "rain_tomorrow": "No"},
            {"id": 2, "location": null, "min_temp": 0, "max_temp": null}
        ]
    }"#;

    #[test]
    fn test_decode_weather_page() {
        let page: WeatherPage = decode_response(200, PAGE_JSON).unwrap();
        assert_eq!(page.total, 57);
        assert_eq!(page.count, 2);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].location.as_deref(), Some("Albury"));
        assert_eq!(page.data[1].min_temp, Some(0.0));
        assert_eq!(page.data[1].max_temp, None);
        // Absent and null decode the same way
        assert_eq!(page.data[1].rainfall, None);
        assert_eq!(page.data[1].location, None);
    }

    #[test]
    fn test_logical_failure_on_error_status() {
        let body = r#"{"success": false, "error": "no such column: foo"}"#;
        let err = decode_response::<WeatherPage>(500, body).unwrap_err();
        assert_eq!(err, ApiError::Logical("no such column: foo".to_string()));
    }

    #[test]
    fn test_non_json_body_classification() {
        let html = "<html><body>Internal Server Error</body></html>";
        assert_eq!(
            decode_response::<LocationsResponse>(502, html).unwrap_err(),
            ApiError::Transport("HTTP 502".to_string())
        );
        assert!(matches!(
            decode_response::<LocationsResponse>(200, html).unwrap_err(),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn test_decode_concurrent_metadata() {
        let body = r#"{
            "success": true,
            "count": 1,
            "data": [{"location": "Sydney", "min_temp": 18.1}],
            "metadata": {"locations_processed": 10, "processing_time": 0.0421,
                         "max_workers": 4, "total_records": 100}
        }"#;
        let response: ConcurrentResponse = decode_response(200, body).unwrap();
        assert_eq!(response.metadata.locations_processed, 10);
        assert_eq!(response.metadata.max_workers, 4);
        assert_eq!(response.metadata.total_records, 100);
        assert!((response.metadata.processing_time - 0.0421).abs() < f64::EPSILON);
    }

    #[test]
    fn test_visualization_data_url() {
        let body = r#"{"success": true, "chart_type": "humidity", "image": "iVBORw0KGgo="}"#;
        let response: VisualizationResponse = decode_response(200, body).unwrap();
        assert_eq!(response.data_url(), "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(response.alt_text(), "humidity chart");
    }

    #[test]
    fn test_chart_type_parsing() {
        assert_eq!("rainfall".parse::<ChartType>(), Ok(ChartType::Rainfall));
        assert_eq!(" Humidity ".parse::<ChartType>(), Ok(ChartType::Humidity));
        assert!("wind".parse::<ChartType>().is_err());
        assert!(!ChartType::Rainfall.accepts_location());
        assert!(ChartType::Temperature.accepts_location());
    }
}
