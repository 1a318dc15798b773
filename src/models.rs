//! Data models for scraped articles and their persisted representations.
//!
//! This module defines the core data structures used throughout the
//! application:
//! - [`ExtractedArticle`]: raw extraction output for a single fetched page
//! - [`ArticleRecord`]: the fully analyzed unit persisted to the archive
//! - [`SavedArticle`]: the row shape returned when listing the archive
//!
//! Missing fields never survive past the extraction boundary: the extractor
//! converts every absent value to one of the sentinel constants below, so a
//! persisted record always has every field populated.

use serde::Serialize;

/// Sentinel stored when a page has no usable `<title>` element.
pub const NO_TITLE: &str = "No Title";
/// Sentinel stored when a page has no `meta[name="author"]` tag.
pub const UNKNOWN_AUTHOR: &str = "Unknown";
/// Sentinel stored when a page has no `meta[property="og:image"]` tag.
pub const NO_IMAGE: &str = "No Image Found";
/// Category assigned when no keyword rule matches.
pub const DEFAULT_CATEGORY: &str = "General";

/// Raw extraction output for one fetched article page.
///
/// An empty `body` marks a failed or content-free extraction; the pipeline
/// skips summarization, scoring, and persistence for such items.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedArticle {
    /// Document title, or [`NO_TITLE`].
    pub title: String,
    /// Paragraph text in document order, joined by single spaces. Empty when
    /// the page had no paragraphs or the fetch failed.
    pub body: String,
    /// Author meta tag content, or [`UNKNOWN_AUTHOR`].
    pub author: String,
    /// Lead image URL from the OpenGraph meta tag, or [`NO_IMAGE`].
    pub image_url: String,
}

impl ExtractedArticle {
    /// The all-sentinel value returned when an article fetch fails.
    pub fn sentinel() -> Self {
        Self {
            title: NO_TITLE.to_string(),
            body: String::new(),
            author: UNKNOWN_AUTHOR.to_string(),
            image_url: NO_IMAGE.to_string(),
        }
    }
}

/// A fully analyzed article, the unit persisted to the archive.
///
/// The `url` acts as a natural identifier but is not enforced unique:
/// re-scraping the same link appends a duplicate row.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleRecord {
    pub title: String,
    pub url: String,
    /// Extractive summary; may be empty when the body held no sentences.
    pub summary: String,
    /// Polarity of the summary, always within [-1.0, 1.0].
    pub sentiment: f64,
    pub author: String,
    pub image_url: String,
    /// One of the configured category labels, or [`DEFAULT_CATEGORY`].
    pub category: String,
}

/// The row shape returned by [`crate::store::ArticleStore::list_all`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedArticle {
    pub title: String,
    pub url: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_extraction_has_empty_body() {
        let extracted = ExtractedArticle::sentinel();
        assert_eq!(extracted.title, NO_TITLE);
        assert!(extracted.body.is_empty());
        assert_eq!(extracted.author, UNKNOWN_AUTHOR);
        assert_eq!(extracted.image_url, NO_IMAGE);
    }
}
