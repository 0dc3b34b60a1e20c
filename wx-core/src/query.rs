//! Endpoint URLs and fixed query parameters for the Weather Explorer API.

use crate::filters::FilterState;
use crate::models::ChartType;
use url::form_urlencoded;

/// Base path of the backend API when served from the same origin.
pub const API_BASE: &str = "/api";

/// Page size used when the form does not provide a usable `limit`.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Largest `limit` the backend honours.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Records fetched per location by the concurrent endpoint.
pub const CONCURRENT_LIMIT_PER_LOCATION: u32 = 10;

/// Worker threads requested from the concurrent endpoint.
pub const CONCURRENT_MAX_WORKERS: u32 = 4;

/// A weather-records request, in either paged or concurrent mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// `GET /weather` with filters and an offset.
    Page { filters: FilterState, offset: usize },
    /// `GET /weather/concurrent`; not pageable.
    Concurrent { filters: FilterState },
}

impl SearchQuery {
    pub fn is_concurrent(&self) -> bool {
        matches!(self, SearchQuery::Concurrent { .. })
    }

    pub fn filters(&self) -> &FilterState {
        match self {
            SearchQuery::Page { filters, .. } | SearchQuery::Concurrent { filters } => filters,
        }
    }

    /// Full request URL under `base`.
    pub fn url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        let mut params = form_urlencoded::Serializer::new(String::new());
        params.extend_pairs(self.filters().iter());
        match self {
            SearchQuery::Page { offset, .. } => {
                params.append_pair("offset", &offset.to_string());
                format!("{}/weather?{}", base, params.finish())
            }
            SearchQuery::Concurrent { .. } => {
                params.append_pair(
                    "limit_per_location",
                    &CONCURRENT_LIMIT_PER_LOCATION.to_string(),
                );
                params.append_pair("max_workers", &CONCURRENT_MAX_WORKERS.to_string());
                format!("{}/weather/concurrent?{}", base, params.finish())
            }
        }
    }
}

pub fn locations_url(base: &str) -> String {
    format!("{}/locations", base.trim_end_matches('/'))
}

/// Chart URL. The location is dropped when empty or when the chart type
/// does not accept one.
pub fn visualization_url(base: &str, chart: ChartType, location: Option<&str>) -> String {
    let url = format!("{}/visualize/{}", base.trim_end_matches('/'), chart.as_str());
    match location.filter(|loc| !loc.is_empty() && chart.accepts_location()) {
        Some(loc) => with_location(url, loc),
        None => url,
    }
}

/// Aggregate statistics URL, optionally scoped to one location.
pub fn stats_url(base: &str, location: Option<&str>) -> String {
    let url = format!("{}/stats", base.trim_end_matches('/'));
    match location.filter(|loc| !loc.is_empty()) {
        Some(loc) => with_location(url, loc),
        None => url,
    }
}

fn with_location(url: String, location: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("location", location)
        .finish();
    format!("{}?{}", url, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_carries_filters_and_offset() {
        let filters = FilterState::from_pairs([
            ("location", "Alice Springs"),
            ("limit", "25"),
            ("rain_today", ""),
        ]);
        let query = SearchQuery::Page { filters, offset: 50 };
        assert_eq!(
            query.url(API_BASE),
            "/api/weather?location=Alice+Springs&limit=25&offset=50"
        );
    }

    #[test]
    fn test_concurrent_url_appends_fixed_parameters() {
        let filters = FilterState::from_pairs([("rain_today", "Yes")]);
        let query = SearchQuery::Concurrent { filters };
        assert!(query.is_concurrent());
        assert_eq!(
            query.url("http://localhost:5000/api/"),
            "http://localhost:5000/api/weather/concurrent?rain_today=Yes&limit_per_location=10&max_workers=4"
        );
    }

    #[test]
    fn test_visualization_url_location_rules() {
        assert_eq!(
            visualization_url(API_BASE, ChartType::Temperature, Some("Cairns")),
            "/api/visualize/temperature?location=Cairns"
        );
        assert_eq!(
            visualization_url(API_BASE, ChartType::Humidity, Some("")),
            "/api/visualize/humidity"
        );
        assert_eq!(
            visualization_url(API_BASE, ChartType::Rainfall, Some("Cairns")),
            "/api/visualize/rainfall"
        );
    }

    #[test]
    fn test_locations_and_stats_urls() {
        assert_eq!(locations_url(API_BASE), "/api/locations");
        assert_eq!(stats_url(API_BASE, None), "/api/stats");
        assert_eq!(
            stats_url(API_BASE, Some("Wagga Wagga")),
            "/api/stats?location=Wagga+Wagga"
        );
    }
}
