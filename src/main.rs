use clap::Parser;
use ridefinder::core::config;
use ridefinder::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "ridefinder", about = "Car rental search, opened in your browser")]
struct Args {
    /// Override the search site base URL
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal itself belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("ridefinder.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Config problem, falling back to defaults: {e}");
            config::RideFinderConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("RideFinder starting up, base URL: {}", resolved.base_url);

    tui::run(resolved)
}
