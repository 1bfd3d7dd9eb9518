//! js_recon library: endpoint and secret discovery in a page's inline scripts
//!
//! Fetches one page, collects the text of every `<script>` element, scans each
//! block concurrently for URLs and sensitive-looking strings (emails, hex API
//! keys, IPv4-shaped strings, credential keywords), then projects the merged
//! results for printing and optional saving.
//!
//! # Example
//!
//! ```no_run
//! use js_recon::{run_recon, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com".to_string(),
//!     show_sensitive: true,
//!     ..Default::default()
//! };
//!
//! let report = run_recon(config).await?;
//! for entry in &report.entries {
//!     println!("{entry}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `run_recon` requires a Tokio runtime; extraction runs on its blocking pool.

pub mod config;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod output;
pub mod parse;
pub mod patterns;
pub mod projection;

pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::ReconError;
pub use run::{run_recon, ReconReport};

mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::extract::extract_all;
    use crate::fetch::fetch_page;
    use crate::initialization::init_client;
    use crate::output::save_entries;
    use crate::parse::extract_script_blocks;
    use crate::projection::project;

    /// Results of a scan.
    #[derive(Debug, Clone)]
    pub struct ReconReport {
        /// Page that was scanned
        pub url: String,
        /// Number of `<script>` elements found
        pub script_blocks: usize,
        /// Links found before projection
        pub links_found: usize,
        /// Findings found before projection
        pub findings_found: usize,
        /// Deduplicated lines for the terminal, findings first
        pub entries: Vec<String>,
        /// Output file, when one was written
        pub saved_to: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a scan with the provided configuration.
    ///
    /// Fetches the page, extracts script blocks, scans them concurrently and
    /// projects the merged results. When `config.output` is set the save
    /// projection is written before returning; the print projection is
    /// returned in `ReconReport::entries` for the caller to display.
    ///
    /// # Errors
    ///
    /// Every error is fatal and nothing partial is returned:
    /// - the HTTP client cannot be built
    /// - the request fails or the status is not 200
    /// - the HTML cannot be turned into script blocks
    /// - the output file cannot be created or written
    pub async fn run_recon(config: Config) -> Result<ReconReport> {
        let start_time = std::time::Instant::now();
        let projection_config = config.projection();

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        info!("Fetching {}", config.url);
        let html = fetch_page(&client, &config.url, projection_config.cookie.as_deref())
            .await
            .with_context(|| format!("Failed to fetch {}", config.url))?;

        let blocks = extract_script_blocks(&html).context("Failed to parse HTML")?;
        let script_blocks = blocks.len();
        info!("Found {} script block(s)", script_blocks);

        let results = extract_all(blocks, projection_config.keyword.as_deref()).await;

        let saved_to = match config.output.as_ref() {
            Some(path) => {
                let to_save = project(&results, &projection_config);
                save_entries(path, to_save.entries())
                    .await
                    .context("Failed to save results")?;
                info!("Data saved to {}", path.display());
                Some(path.clone())
            }
            None => None,
        };

        let to_print = project(&results, &projection_config);

        Ok(ReconReport {
            url: config.url,
            script_blocks,
            links_found: results.links.len(),
            findings_found: results.findings.len(),
            entries: to_print.entries().map(str::to_string).collect(),
            saved_to,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
