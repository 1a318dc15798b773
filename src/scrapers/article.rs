//! Single-article fetching and extraction.
//!
//! Each article page is reduced to a title, the concatenated text of its
//! paragraphs, an author, and a lead image URL. Absent values are converted
//! to the sentinel constants in [`crate::models`] here, at the extraction
//! boundary, so nothing downstream deals with missing data.
//!
//! Extraction never fails: a transport error yields the all-sentinel value
//! with an empty body, which the pipeline treats as "skip this item". The
//! response status is deliberately not checked; an error page still gets
//! parsed, it just tends to produce little or no paragraph text.

use crate::models::{ExtractedArticle, NO_IMAGE, NO_TITLE, UNKNOWN_AUTHOR};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, error, instrument};

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static AUTHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="author"]"#).unwrap());
static IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:image"]"#).unwrap());

/// Fetch one article URL and extract its details.
///
/// On any fetch error the all-sentinel [`ExtractedArticle`] is returned and
/// the error is logged; the caller decides whether to skip the item.
#[instrument(level = "info", skip(client), fields(%url))]
pub async fn extract(client: &Client, url: &str) -> ExtractedArticle {
    match fetch(client, url).await {
        Ok(extracted) => {
            debug!(
                bytes = extracted.body.len(),
                title = %extracted.title,
                "Extracted article"
            );
            extracted
        }
        Err(e) => {
            error!(error = %e, %url, "Error fetching article");
            ExtractedArticle::sentinel()
        }
    }
}

async fn fetch(client: &Client, url: &str) -> Result<ExtractedArticle, Box<dyn Error>> {
    let html = client.get(url).send().await?.text().await?;
    Ok(parse_article(&html))
}

/// Parse an article document into title, body text, author, and lead image.
///
/// - title: `<title>` text, trimmed; empty or absent becomes [`NO_TITLE`]
/// - body: the text of every `<p>` in document order, joined by single spaces
/// - author: `meta[name="author"]` content, else [`UNKNOWN_AUTHOR`]
/// - image: `meta[property="og:image"]` content, else [`NO_IMAGE`]
pub fn parse_article(html: &str) -> ExtractedArticle {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let body = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|paragraph| paragraph.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");

    let author = meta_content(&document, &AUTHOR_SELECTOR)
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    let image_url = meta_content(&document, &IMAGE_SELECTOR)
        .unwrap_or_else(|| NO_IMAGE.to_string());

    ExtractedArticle {
        title,
        body,
        author,
        image_url,
    }
}

/// Content attribute of the first element matching `selector`, if any.
fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}
