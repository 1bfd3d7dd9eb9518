//! Link and sensitive-data extraction from script blocks.
//!
//! - `script`: the per-block extractor (pure, infallible)
//! - `coordinator`: concurrent fan-out with a join barrier

mod coordinator;
mod script;
mod types;

pub use coordinator::extract_all;
pub use script::{extract_script, find_links, find_sensitive};
pub use types::{Finding, ResultSet, ScriptBlock, ScriptExtraction};
