//! Chart export and aggregate statistics.

use anyhow::Context;
use log::info;
use std::path::Path;
use wx_core::client::ApiClient;
use wx_core::display::statistics_rows;
use wx_core::models::{ChartType, VisualizationResponse};

/// Fetch a chart and write it to `output` as a standalone HTML page.
pub async fn run_visualize(
    client: &ApiClient,
    chart: ChartType,
    location: Option<&str>,
    output: &Path,
) -> anyhow::Result<()> {
    if location.is_some() && !chart.accepts_location() {
        log::warn!("The {} chart ignores the location filter", chart);
    }
    let response = client
        .visualize(chart, location)
        .await
        .map_err(|e| anyhow::anyhow!(e.visualization_message()))?;

    std::fs::write(output, chart_page(&response))
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Saved {} chart to {}", response.chart_type, output.display());
    Ok(())
}

pub async fn run_stats(client: &ApiClient, location: Option<&str>) -> anyhow::Result<()> {
    let response = client
        .stats(location)
        .await
        .map_err(|e| anyhow::anyhow!(e.statistics_message()))?;
    println!(
        "Statistics: {}",
        response.location.as_deref().unwrap_or("All locations")
    );
    let rows = statistics_rows(&response.statistics);
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    for (label, value) in rows {
        println!("  {:<width$}  {}", label, value, width = width);
    }
    Ok(())
}

/// Minimal HTML document embedding the chart as a data URL.
fn chart_page(response: &VisualizationResponse) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{alt}</title></head>\n<body>\n<img src=\"{src}\" alt=\"{alt}\"/>\n</body>\n</html>\n",
        alt = response.alt_text(),
        src = response.data_url(),
    )
}
