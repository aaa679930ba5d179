use clap::Parser;
use log::warn;
use roster::core::config::{self, RosterConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "roster", about = "Terminal client for the user directory API")]
struct Args {
    /// Base URL of the user API (e.g. http://localhost:5249/api)
    #[arg(short, long)]
    base_url: Option<String>,

    /// View to open first: "/" (users) or "/nearest"
    #[arg(short, long)]
    view: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roster.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("roster.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Ignoring config file: {}", e);
        RosterConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.view.as_deref());

    log::info!(
        "Roster starting up: api={}, view={}, hotels={}",
        resolved.base_url,
        resolved.initial_view,
        resolved.hotels.len()
    );

    roster::tui::run(resolved)
}
