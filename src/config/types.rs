//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::projection::ProjectionConfig;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration, parsed from the command line.
///
/// Can also be constructed programmatically:
///
/// ```no_run
/// use js_recon::Config;
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     show_as_domain: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "js_recon",
    version,
    about = "Scan and extract endpoint URLs and sensitive data from JS on a website"
)]
pub struct Config {
    /// URL of the website to scan
    #[arg(short = 'u', long)]
    pub url: String,

    /// Only keep links containing this keyword (case-sensitive substring)
    #[arg(long)]
    pub keyword: Option<String>,

    /// Output file to save the results
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Show results as domains instead of full URLs
    #[arg(long)]
    pub show_as_domain: bool,

    /// Show sensitive data found in JS (emails, API keys, IPs, credential keywords)
    #[arg(long)]
    pub show_sensitive: bool,

    /// Custom Cookie header to include in the request
    #[arg(long)]
    pub cookie: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Config {
    /// Builds the read-only projection settings used by both output paths.
    ///
    /// Empty keyword and cookie strings are treated as absent.
    pub fn projection(&self) -> ProjectionConfig {
        ProjectionConfig {
            domain_only: self.show_as_domain,
            sensitive_only: self.show_sensitive,
            keyword: self.keyword.clone().filter(|k| !k.is_empty()),
            cookie: self.cookie.clone().filter(|c| !c.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            keyword: None,
            output: None,
            show_as_domain: false,
            show_sensitive: false,
            cookie: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
