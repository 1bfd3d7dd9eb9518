//! Application initialization and resource setup.
//!
//! - Logger (env_logger, plain or JSON)
//! - HTTP client (user agent and timeout)

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
