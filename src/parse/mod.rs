//! HTML parsing into script blocks.

use scraper::{Html, Selector};

use crate::config::SCRIPT_SELECTOR_STR;
use crate::error_handling::ReconError;
use crate::extract::ScriptBlock;


/// Extracts the text content of every `<script>` element, in document order.
///
/// Only inline text is collected; scripts referenced through `src` are not
/// fetched. Elements with no text still produce an (empty) block so the
/// block count matches the element count.
///
/// # Errors
///
/// Returns `ReconError::Parse` if the script selector cannot be built.
pub fn extract_script_blocks(html: &str) -> Result<Vec<ScriptBlock>, ReconError> {
    let selector = Selector::parse(SCRIPT_SELECTOR_STR).map_err(|e| {
        ReconError::Parse(format!(
            "invalid selector '{}': {}",
            SCRIPT_SELECTOR_STR, e
        ))
    })?;

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        log::debug!(
            "html5ever recovered from {} parse error(s)",
            document.errors.len()
        );
    }

    let blocks: Vec<ScriptBlock> = document
        .select(&selector)
        .map(|element| ScriptBlock::new(element.text().collect::<String>()))
        .collect();

    log::debug!("Found {} script elements", blocks.len());
    Ok(blocks)
}
