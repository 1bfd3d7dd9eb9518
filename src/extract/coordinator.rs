//! Fan-out over script blocks.
//!
//! One blocking task per block. Each task returns its own `ScriptExtraction`;
//! nothing is shared while the tasks run. After every handle has been awaited
//! the buffers are merged in spawn (document) order.

use std::sync::Arc;

use futures::future::join_all;

use super::script::extract_script;
use super::types::{ResultSet, ScriptBlock};

/// Runs the extractor over every block concurrently and merges the results.
///
/// Extraction is CPU-bound regex scanning, so tasks go to tokio's blocking
/// pool and run in parallel. A task that panics is logged and contributes no
/// results; the remaining blocks are still merged.
pub async fn extract_all(blocks: Vec<ScriptBlock>, keyword: Option<&str>) -> ResultSet {
    let keyword: Option<Arc<str>> = keyword.filter(|k| !k.is_empty()).map(Arc::from);
    let block_count = blocks.len();

    let handles: Vec<_> = blocks
        .into_iter()
        .map(|block| {
            let keyword = keyword.clone();
            tokio::task::spawn_blocking(move || extract_script(block.text(), keyword.as_deref()))
        })
        .collect();

    let mut results = ResultSet::default();
    for (index, joined) in join_all(handles).await.into_iter().enumerate() {
        match joined {
            Ok(extraction) => {
                log::debug!(
                    "Script block {}: {} link(s), {} finding(s)",
                    index,
                    extraction.links.len(),
                    extraction.findings.len()
                );
                results.merge(extraction);
            }
            Err(join_error) => {
                log::warn!("Extraction task for script block {} panicked: {:?}", index, join_error);
            }
        }
    }

    log::info!(
        "Scanned {} script block(s): {} link(s), {} finding(s)",
        block_count,
        results.links.len(),
        results.findings.len()
    );
    results
}
