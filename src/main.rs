#![forbid(unsafe_code)]

mod cli;
mod constants;
mod gui;
mod ports;
mod qr;
mod state;
mod url_model;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use cli::Args;
use constants::qr::{EC_LEVEL, MODULE_SCALE, QUIET_ZONE_MODULES};
use ports::{DiskSink, ImageSink};
use state::FormState;

/// Renders and saves the QR image without opening a window, printing the
/// derived URL to stdout for scripting.
fn run_export(args: &Args) -> Result<()> {
    let state = FormState::with_initial(&args.base_url, &args.code, &args.id);
    let url = state.derived_url();

    let img = qr::render_qr(&url, MODULE_SCALE, QUIET_ZONE_MODULES, EC_LEVEL)
        .context("Failed to render QR code")?;
    let bytes = qr::png_bytes(&img).context("Failed to encode PNG")?;

    let mut sink = match &args.out_dir {
        Some(dir) => DiskSink::new(dir.clone()),
        None => DiskSink::default_location(),
    };
    let path = sink.save_png(&state.export_filename(), &bytes)?;

    info!(path = %path.display(), "Headless export complete");
    println!("{url}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    if args.export {
        run_export(&args)?;
    } else {
        gui::run_gui(args)?;
    }

    Ok(())
}
