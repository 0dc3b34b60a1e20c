//! Location listing and the standard/concurrent searches.

use crate::output;
use anyhow::Context;
use log::info;
use std::fs::File;
use std::path::Path;
use wx_core::client::ApiClient;
use wx_core::{ExplorerState, SearchForm};

pub async fn run_locations(client: &ApiClient) -> anyhow::Result<()> {
    let locations = client
        .locations()
        .await
        .map_err(|e| anyhow::anyhow!("Error loading locations: {}", e))?;
    for location in &locations {
        println!("{}", location);
    }
    info!("{} locations", locations.len());
    Ok(())
}

/// Fetch one page of the standard search and print or export it.
pub async fn run_search(
    client: &ApiClient,
    form: &SearchForm,
    page: usize,
    csv: Option<&Path>,
) -> anyhow::Result<()> {
    let mut explorer = ExplorerState::new();
    let mut pending = explorer.submit_search(form.to_filters());
    if page > 1 {
        pending = explorer.go_to_page(page);
    }
    info!(
        "Searching page {} ({} per page) with {} filters",
        page.max(1),
        explorer.page_size(),
        explorer.filters().len()
    );

    let response = client
        .fetch_page(&pending)
        .await
        .map_err(|e| anyhow::anyhow!(e.search_message()))?;
    let view = explorer
        .apply_page(pending.token, &response)
        .context("response arrived for a superseded request")?;

    match csv {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            output::write_csv(file, &response.data)?;
            info!("Wrote {} records to {}", response.data.len(), path.display());
        }
        None => print!("{}", output::render_view(&view)),
    }
    Ok(())
}

/// Run the concurrent search and print the table plus processing summary.
pub async fn run_concurrent(client: &ApiClient, form: &SearchForm) -> anyhow::Result<()> {
    let mut explorer = ExplorerState::new();
    let pending = explorer.submit_concurrent(form.to_filters());
    let response = client
        .fetch_concurrent(&pending)
        .await
        .map_err(|e| anyhow::anyhow!(e.search_message()))?;
    let view = explorer
        .apply_concurrent(pending.token, &response)
        .context("response arrived for a superseded request")?;
    print!("{}", output::render_view(&view));
    Ok(())
}
