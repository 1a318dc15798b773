//! Link collection from the news listing page.
//!
//! The listing page (e.g. the Google News front page) links its stories with
//! `./`-relative hrefs. Those are rewritten to absolute URLs by stripping the
//! leading dot and resolving the remainder against the listing base URL.
//! Every other href — already absolute, fragment, or relative in some other
//! form — passes through unchanged; only the `./` form is normalized.

use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// User-Agent sent with the listing page request. Some news frontends serve
/// a stripped page to clients without a browser-like agent.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Fetch the listing page and collect candidate article URLs.
///
/// Failures are non-fatal: a request error, a non-200 status, or an
/// unparseable listing URL all log a warning and return an empty list.
#[instrument(level = "info", skip(client))]
pub async fn collect_links(client: &Client, listing_url: &str) -> Vec<String> {
    let base_url = match Url::parse(listing_url) {
        Ok(url) => url,
        Err(e) => {
            warn!(error = %e, %listing_url, "Listing URL is not a valid base URL");
            return Vec::new();
        }
    };

    let response = match client
        .get(listing_url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, %listing_url, "Failed to fetch listing page");
            return Vec::new();
        }
    };

    if response.status() != StatusCode::OK {
        warn!(status = %response.status(), %listing_url, "Listing page returned non-200 status");
        return Vec::new();
    }

    let html = match response.text().await {
        Ok(html) => html,
        Err(e) => {
            warn!(error = %e, %listing_url, "Failed to read listing page body");
            return Vec::new();
        }
    };

    let links = links_from_html(&html, &base_url);
    info!(count = links.len(), %listing_url, "Collected article links");
    debug!(links = ?links, "Listing links");
    links
}

/// Extract every anchor href from a listing page, normalizing `./` hrefs
/// against the given base URL.
pub fn links_from_html(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a[href]").unwrap();

    document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| normalize_href(href, base_url))
        .collect()
}

/// Rewrite a `./`-prefixed href by dropping the leading dot and resolving
/// against the base URL. Anything else (and any href the base refuses to
/// join) is returned as-is.
fn normalize_href(href: &str, base_url: &Url) -> String {
    if href.starts_with("./") {
        // "./read/x" becomes "/read/x", resolved against the base origin.
        if let Ok(resolved) = base_url.join(&href[1..]) {
            return resolved.to_string();
        }
    }
    href.to_string()
}
