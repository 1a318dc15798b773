//! Fetching and parsing of the listing page and individual articles.
//!
//! Scraping happens in two phases:
//!
//! 1. **Link collection** ([`listing`]): fetch the configured listing page
//!    and harvest candidate article URLs from its anchors, normalizing
//!    `./`-relative hrefs against the listing base URL.
//! 2. **Extraction** ([`article`]): fetch each article URL and pull out the
//!    title, paragraph text, author, and lead image.
//!
//! Both phases degrade instead of failing: a listing fetch problem yields an
//! empty link list, and an article fetch problem yields an all-sentinel
//! extraction that downstream processing skips. Parsing is split out into
//! pure functions over HTML strings so it can be tested without a network.

pub mod article;
pub mod listing;
