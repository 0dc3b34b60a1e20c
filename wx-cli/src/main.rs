//! Weather Explorer CLI - query weather records, charts and statistics.

use clap::Parser;
use wx_core::client::DEFAULT_BASE_URL;

#[derive(Parser)]
#[command(
    name = "wx-cli",
    version,
    about = "Weather Data Explorer command line client"
)]
struct Cli {
    /// API base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: wx_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using API base {}", cli.base_url);
    wx_cmd::run(&cli.base_url, cli.command).await
}
