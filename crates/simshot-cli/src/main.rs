//! simshot CLI
//!
//! A thin glue layer over `simshot-core` for cleaning up simulator
//! screenshots from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use simshot_core::{
    ensure_codecs, process_screenshot_with_report, CropSpec, ProcessOptions, DEFAULT_CROP_BOTTOM,
    DEFAULT_CROP_TOP, DEFAULT_QUALITY,
};
use tracing::debug;

/// Rotate a portrait simulator screenshot to landscape, crop the device
/// chrome, and save it as PNG or JPEG.
#[derive(Parser, Debug)]
#[command(name = "simshot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Raw screenshot, e.g. from `xcrun simctl io booted screenshot`
    input: PathBuf,

    /// Destination file; .jpg/.jpeg writes JPEG, anything else PNG
    output: PathBuf,

    /// JPEG quality (1-100), ignored for PNG output
    #[arg(short, long, default_value_t = DEFAULT_QUALITY)]
    quality: u32,

    /// Pixels to crop from the top after rotation (status bar + camera housing)
    #[arg(long, default_value_t = DEFAULT_CROP_TOP)]
    crop_top: u32,

    /// Pixels to crop from the bottom after rotation (home indicator)
    #[arg(long, default_value_t = DEFAULT_CROP_BOTTOM)]
    crop_bottom: u32,

    /// Print a JSON report instead of the one-line summary
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> ProcessOptions {
        ProcessOptions {
            quality: self.quality,
            crop: CropSpec::new(self.crop_top, self.crop_bottom),
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    ensure_codecs()?;

    if !cli.input.exists() {
        bail!("Input file not found: {}", cli.input.display());
    }

    let options = cli.options();
    debug!(?options, "processing {}", cli.input.display());

    let report = process_screenshot_with_report(&cli.input, &cli.output, &options)
        .with_context(|| format!("Failed to process {}", cli.input.display()))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!(
            "Processed: {}x{} -> {}",
            report.width,
            report.height,
            cli.output.display()
        );
    }

    Ok(())
}
