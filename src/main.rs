use clap::Parser;
use marquee::core::config;
use marquee::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee", about = "Multi-item carousel for the terminal")]
struct Args {
    /// Autoplay advance period in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to marquee.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config =
        config::load_config(args.config.as_ref()).map_err(std::io::Error::other)?;
    let resolved = config::resolve(&file_config, args.interval_ms);

    log::info!(
        "Marquee starting up: {} slides, {}ms interval",
        resolved.slides.len(),
        resolved.autoplay_interval_ms
    );

    tui::run(resolved)
}
