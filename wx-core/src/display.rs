//! Display formatting for weather records, metadata and statistics.

use crate::models::{ConcurrentMetadata, LocationStatistics, WeatherRecord};

/// Substituted for any missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Table placeholder before any search, and after a reset.
pub const INITIAL_PLACEHOLDER: &str = "Use the search form above to find weather data.";

/// Table placeholder when a search matches nothing.
pub const NO_RESULTS: &str = "No results found. Try adjusting your filters.";

pub const COLUMN_HEADERS: [&str; 7] = [
    "Location",
    "Min Temp (°C)",
    "Max Temp (°C)",
    "Rainfall (mm)",
    "Humidity 9am (%)",
    "Humidity 3pm (%)",
    "Rain Today",
];

/// One formatted table row, one cell per entry of [`COLUMN_HEADERS`].
pub type TableRow = [String; 7];

/// What the results area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// Initial message inviting a search.
    Placeholder,
    /// Emptied while a request is in flight.
    Cleared,
    /// The last search returned no records.
    NoResults,
    Table(Vec<TableRow>),
}

impl ResultsView {
    /// Placeholder text, if this view shows one instead of a table.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ResultsView::Placeholder => Some(INITIAL_PLACEHOLDER),
            ResultsView::NoResults => Some(NO_RESULTS),
            ResultsView::Cleared | ResultsView::Table(_) => None,
        }
    }
}

/// Numeric cells show "N/A" only for a missing value; `0` still renders.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Text cells show "N/A" for a missing or empty value.
pub fn format_text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn table_row(record: &WeatherRecord) -> TableRow {
    [
        format_text(record.location.as_deref()),
        format_number(record.min_temp),
        format_number(record.max_temp),
        format_number(record.rainfall),
        format_number(record.humidity_9am),
        format_number(record.humidity_3pm),
        format_text(record.rain_today.as_deref()),
    ]
}

/// Results view for a set of records. No rows are built for an empty set.
pub fn render_results(records: &[WeatherRecord]) -> ResultsView {
    if records.is_empty() {
        return ResultsView::NoResults;
    }
    ResultsView::Table(records.iter().map(table_row).collect())
}

/// Summary panel for the concurrent query mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcurrentSummary {
    pub title: &'static str,
    pub processed: String,
    pub total_records: String,
}

impl From<&ConcurrentMetadata> for ConcurrentSummary {
    fn from(meta: &ConcurrentMetadata) -> Self {
        Self {
            title: "Concurrent Processing",
            processed: format!(
                "Processed {} locations in {}s using {} workers",
                meta.locations_processed, meta.processing_time, meta.max_workers
            ),
            total_records: format!("Total records: {}", meta.total_records),
        }
    }
}

/// Labelled statistics rows, "N/A" for anything the backend left null.
pub fn statistics_rows(stats: &LocationStatistics) -> Vec<(&'static str, String)> {
    vec![
        (
            "Total records",
            stats
                .total_records
                .map(|n| n.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        ("Average min temp (°C)", format_number(stats.avg_min_temp)),
        ("Average max temp (°C)", format_number(stats.avg_max_temp)),
        ("Lowest temp (°C)", format_number(stats.lowest_temp)),
        ("Highest temp (°C)", format_number(stats.highest_temp)),
        ("Average rainfall (mm)", format_number(stats.avg_rainfall)),
        ("Average humidity 9am (%)", format_number(stats.avg_humidity_9am)),
        ("Average humidity 3pm (%)", format_number(stats.avg_humidity_3pm)),
        ("Average pressure 9am (hPa)", format_number(stats.avg_pressure_9am)),
        ("Average pressure 3pm (hPa)", format_number(stats.avg_pressure_3pm)),
    ]
}
