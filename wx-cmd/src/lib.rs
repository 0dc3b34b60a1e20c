//! Command implementations for the Weather Explorer CLI.
//!
//! Each subcommand issues one request against the API through
//! [`wx_core::client::ApiClient`] and prints (or exports) the result using the
//! same formatting rules as the web client.

use clap::{Args, Subcommand};
use chrono::NaiveDate;
use std::path::PathBuf;
use wx_core::dates;
use wx_core::models::ChartType;
use wx_core::query::DEFAULT_PAGE_SIZE;
use wx_core::{FormField, SearchForm};

pub mod charts;
pub mod output;
pub mod search;

/// Search filters shared by the standard and concurrent searches.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// Only records for this location
    #[arg(long)]
    pub location: Option<String>,

    /// Earliest observation date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub start_date: Option<NaiveDate>,

    /// Latest observation date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    pub end_date: Option<NaiveDate>,

    /// Lower bound on the minimum temperature (°C)
    #[arg(long, allow_hyphen_values = true)]
    pub min_temp_min: Option<f64>,

    /// Upper bound on the minimum temperature (°C)
    #[arg(long, allow_hyphen_values = true)]
    pub min_temp_max: Option<f64>,

    /// Lower bound on the maximum temperature (°C)
    #[arg(long, allow_hyphen_values = true)]
    pub max_temp_min: Option<f64>,

    /// Upper bound on the maximum temperature (°C)
    #[arg(long, allow_hyphen_values = true)]
    pub max_temp_max: Option<f64>,

    /// Rain today flag
    #[arg(long, value_parser = ["Yes", "No"])]
    pub rain_today: Option<String>,
}

impl FilterArgs {
    /// Fill a search form the way a user would. Unset fields keep the
    /// form's initial values.
    pub fn to_form(&self, limit: Option<usize>) -> anyhow::Result<SearchForm> {
        if dates::is_inverted_range(self.start_date.as_ref(), self.end_date.as_ref()) {
            anyhow::bail!("--start-date must not be after --end-date");
        }

        let mut form = SearchForm::default();
        let number = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        form.set(FormField::Location, self.location.clone().unwrap_or_default());
        form.set(
            FormField::StartDate,
            self.start_date.as_ref().map(dates::format_date).unwrap_or_default(),
        );
        form.set(
            FormField::EndDate,
            self.end_date.as_ref().map(dates::format_date).unwrap_or_default(),
        );
        form.set(FormField::MinTempMin, number(self.min_temp_min));
        form.set(FormField::MinTempMax, number(self.min_temp_max));
        form.set(FormField::MaxTempMin, number(self.max_temp_min));
        form.set(FormField::MaxTempMax, number(self.max_temp_max));
        form.set(FormField::RainToday, self.rain_today.clone().unwrap_or_default());
        if let Some(limit) = limit {
            form.set(FormField::Limit, limit.to_string());
        }
        Ok(form)
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    dates::parse_date(s).map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

#[derive(Subcommand)]
pub enum Command {
    /// List available locations
    Locations,

    /// Fetch one page of weather records
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Records per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: usize,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Write the page's records to this CSV file instead of printing
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Fetch records per location through the concurrent endpoint
    Concurrent {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Render a chart and save it as an HTML page
    Visualize {
        /// temperature, rainfall or humidity
        chart: ChartType,

        /// Location filter (ignored by the rainfall chart)
        #[arg(long)]
        location: Option<String>,

        /// Output HTML path
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Show aggregate statistics
    Stats {
        /// Location filter (all locations when omitted)
        #[arg(long)]
        location: Option<String>,
    },
}

pub async fn run(base_url: &str, command: Command) -> anyhow::Result<()> {
    let client = wx_core::client::ApiClient::new(base_url);
    match command {
        Command::Locations => search::run_locations(&client).await,
        Command::Search {
            filters,
            limit,
            page,
            csv,
        } => {
            let form = filters.to_form(Some(limit))?;
            search::run_search(&client, &form, page, csv.as_deref()).await
        }
        Command::Concurrent { filters } => {
            let form = filters.to_form(None)?;
            search::run_concurrent(&client, &form).await
        }
        Command::Visualize {
            chart,
            location,
            output,
        } => charts::run_visualize(&client, chart, location.as_deref(), &output).await,
        Command::Stats { location } => charts::run_stats(&client, location.as_deref()).await,
    }
}
