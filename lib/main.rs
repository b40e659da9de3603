//! piaoread library
//!
//! Core of a small web-novel chapter reader: fetch one chapter page from the
//! configured site, extract its title, body, and navigation links, and render
//! a themed document. The binary in `src/` drives this pipeline.

pub mod chapter;
pub mod client;
pub mod error;
pub mod extract;
pub mod prefs;
pub mod render;
pub mod site;

use crate::{chapter::ChapterRecord, client::Fetch, error::Error, extract::ChapterExtractor};

/// Fetches a chapter page and extracts its record, attaching the fetch URL.
///
/// One call runs to completion before the caller proceeds; a fetch failure
/// surfaces as-is and produces no record.
pub async fn fetch_chapter(
    fetcher: &impl Fetch,
    extractor: &ChapterExtractor,
    url: &str,
) -> Result<ChapterRecord, Error> {
    let raw = fetcher.get(url).await?;
    let mut record = extractor.extract(&raw, url)?;
    record.source_url = url.into();
    log::info!("Loaded: {}", record.title);
    Ok(record)
}
