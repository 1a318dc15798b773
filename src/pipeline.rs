//! The scrape-and-save pipeline.
//!
//! Drives one batch: collect links from the listing page, take the first
//! `batch_limit`, and for each link extract → summarize → score → categorize
//! → persist. Items are processed strictly in sequence; a failed or
//! content-free extraction is logged and skipped without touching the rest
//! of the batch. A persistence failure, by contrast, surfaces immediately —
//! losing saved work silently is worse than stopping.

use crate::analysis::categorize::CategoryTable;
use crate::analysis::sentiment::polarity;
use crate::analysis::summarize::{summarize, SUMMARY_SENTENCES};
use crate::models::{ArticleRecord, ExtractedArticle};
use crate::output::ReportSink;
use crate::scrapers::{article, listing};
use crate::store::ArticleStore;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::error::Error;
use tracing::{info, instrument, warn};

/// Run one scrape-and-save batch and report each saved article through the
/// sink. Returns the number of records persisted.
#[instrument(level = "info", skip(client, store, categories, sink))]
pub async fn scrape_and_save(
    client: &Client,
    store: &ArticleStore,
    categories: &CategoryTable,
    listing_url: &str,
    batch_limit: usize,
    sink: &mut dyn ReportSink,
) -> Result<usize, Box<dyn Error>> {
    let links = listing::collect_links(client, listing_url).await;
    if links.is_empty() {
        warn!(%listing_url, "No article links collected");
        return Ok(0);
    }

    // Fetch one at a time; the store step below must observe links in
    // listing order.
    let extractions: Vec<(String, ExtractedArticle)> =
        stream::iter(links.into_iter().take(batch_limit))
            .then(|link| async move {
                let extracted = article::extract(client, &link).await;
                (link, extracted)
            })
            .collect()
            .await;

    let mut saved = 0;
    for (link, extracted) in extractions {
        let Some(record) = build_record(&extracted, &link, categories) else {
            warn!(url = %link, "No body text extracted; skipping article");
            continue;
        };

        store.append(&record)?;
        saved += 1;
        info!(
            url = %record.url,
            category = %record.category,
            sentiment = record.sentiment,
            summary = %truncate_for_log(&record.summary, 120),
            "Article saved"
        );
        report_saved(sink, &record);
    }

    info!(saved, "Scrape batch complete");
    Ok(saved)
}

/// Analyze one extraction into a persistable record.
///
/// Returns `None` when the body text is empty — the signal that extraction
/// failed or the page had no paragraphs, in which case the item is skipped
/// entirely.
pub fn build_record(
    extracted: &ExtractedArticle,
    url: &str,
    categories: &CategoryTable,
) -> Option<ArticleRecord> {
    if extracted.body.is_empty() {
        return None;
    }

    let summary = summarize(&extracted.body, SUMMARY_SENTENCES);
    let sentiment = polarity(&summary);
    let category = categories.classify(&extracted.title, &extracted.body);

    Some(ArticleRecord {
        title: extracted.title.clone(),
        url: url.to_string(),
        summary,
        sentiment,
        author: extracted.author.clone(),
        image_url: extracted.image_url.clone(),
        category,
    })
}

fn report_saved(sink: &mut dyn ReportSink, record: &ArticleRecord) {
    sink.line("Article saved:");
    sink.line(&format!("  Title:     {}", record.title));
    sink.line(&format!("  Link:      {}", record.url));
    sink.line(&format!("  Author:    {}", record.author));
    sink.line(&format!("  Image:     {}", record.image_url));
    sink.line(&format!("  Summary:   {}", record.summary));
    sink.line(&format!("  Sentiment: {:.2}", record.sentiment));
    sink.line(&format!("  Category:  {}", record.category));
    sink.line(&"-".repeat(60));
}
