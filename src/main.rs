//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `js_recon` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use js_recon::error_handling::categorize_error;
use js_recon::initialization::init_logger_with;
use js_recon::output::print_to_stdout;
use js_recon::{run_recon, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Exits with status 2 when --url is missing
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let result = run_recon(config).await.and_then(|report| {
        if let Some(path) = report.saved_to.as_ref() {
            println!("\nData saved to {}", path.display());
        }
        print_to_stdout(report.entries.iter().map(String::as_str))
            .context("Failed to write results to stdout")?;
        Ok(report)
    });

    match result {
        Ok(report) => {
            log::info!(
                "Scanned {} in {:.1}s: {} script block(s), {} link(s), {} finding(s)",
                report.url,
                report.elapsed_seconds,
                report.script_blocks,
                report.links_found,
                report.findings_found
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Run aborted ({} error)", categorize_error(&e));
            eprintln!("js_recon error: {:#}", e);
            process::exit(1);
        }
    }
}
