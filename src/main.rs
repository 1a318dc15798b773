//! # newsgrab
//!
//! A small news scraping and archiving pipeline: harvest article links from
//! a listing page, download each article, derive a short extractive summary
//! and a polarity score, assign a topic category by keyword rules, and keep
//! the results in a local SQLite archive that can be browsed or searched.
//!
//! ## Usage
//!
//! ```sh
//! newsgrab scrape                 # scrape and save a batch
//! newsgrab list                   # browse the archive
//! newsgrab search health          # filter by category
//! newsgrab                        # interactive menu
//! ```
//!
//! ## Architecture
//!
//! The pipeline is strictly sequential:
//! 1. **Link collection**: harvest anchor hrefs from the listing page
//! 2. **Extraction**: fetch each article and pull title, body, author, image
//! 3. **Analysis**: LSA summary, VADER polarity, ordered keyword category
//! 4. **Persistence**: append to the `articles` table, one row per article
//!
//! One article failing to fetch never aborts the batch; a storage failure
//! does.

use clap::Parser;
use std::error::Error;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod analysis;
mod cli;
mod models;
mod output;
mod pipeline;
mod scrapers;
mod store;
mod utils;

use analysis::categorize::CategoryTable;
use cli::{Cli, Command};
use output::{ConsoleSink, ReportSink};
use store::ArticleStore;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newsgrab starting up");

    let args = Cli::parse();
    debug!(?args.listing_url, ?args.database, args.timeout_secs, args.batch_limit, "Parsed CLI arguments");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;
    let store = ArticleStore::new(&args.database);
    let categories = CategoryTable::default();
    let mut sink = ConsoleSink;

    match args.command {
        Some(Command::Scrape) => {
            let saved = pipeline::scrape_and_save(
                &client,
                &store,
                &categories,
                &args.listing_url,
                args.batch_limit,
                &mut sink,
            )
            .await?;
            info!(saved, "Scrape run finished");
        }
        Some(Command::List { json }) => list_saved(&store, json, &mut sink)?,
        Some(Command::Search { category }) => search_category(&store, &category, &mut sink)?,
        Some(Command::Menu) | None => {
            run_menu(
                &client,
                &store,
                &categories,
                &args.listing_url,
                args.batch_limit,
                &mut sink,
            )
            .await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

/// Write every saved article through the sink, numbered, or as JSON.
fn list_saved(
    store: &ArticleStore,
    json: bool,
    sink: &mut dyn ReportSink,
) -> Result<(), Box<dyn Error>> {
    let rows = store.list_all()?;
    if json {
        sink.line(&serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    if rows.is_empty() {
        sink.line("No articles saved yet.");
        return Ok(());
    }
    sink.line("Saved articles:");
    for (index, row) in rows.iter().enumerate() {
        sink.line(&format!("{}. {} ({})", index + 1, row.title, row.category));
        sink.line(&format!("   {}", row.url));
    }
    Ok(())
}

/// Search the archive by category label, normalizing the user's input
/// ("TECHNOLOGY" and "technology" both become "Technology").
fn search_category(
    store: &ArticleStore,
    raw_category: &str,
    sink: &mut dyn ReportSink,
) -> Result<(), Box<dyn Error>> {
    let category = utils::capitalize(raw_category.trim());
    let rows = store.find_by_category(&category)?;
    if rows.is_empty() {
        sink.line(&format!("No articles found in category {category}."));
        return Ok(());
    }
    sink.line(&format!("Articles in {category}:"));
    for (index, (title, url)) in rows.iter().enumerate() {
        sink.line(&format!("{}. {}", index + 1, title));
        sink.line(&format!("   {url}"));
    }
    Ok(())
}

/// Interactive menu loop over the same actions as the subcommands.
///
/// Invalid input is reported and the loop continues; only "4" (or EOF)
/// exits.
async fn run_menu(
    client: &reqwest::Client,
    store: &ArticleStore,
    categories: &CategoryTable,
    listing_url: &str,
    batch_limit: usize,
    sink: &mut dyn ReportSink,
) -> Result<(), Box<dyn Error>> {
    loop {
        sink.line("");
        sink.line("News scraper menu:");
        sink.line("  1) Scrape & save new articles");
        sink.line("  2) View saved articles");
        sink.line("  3) Search articles by category");
        sink.line("  4) Exit");

        let Some(choice) = prompt("Enter your choice (1-4): ")? else {
            info!("stdin closed; leaving menu");
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let saved = pipeline::scrape_and_save(
                    client,
                    store,
                    categories,
                    listing_url,
                    batch_limit,
                    sink,
                )
                .await?;
                sink.line(&format!("Saved {saved} article(s)."));
            }
            "2" => list_saved(store, false, sink)?,
            "3" => {
                let Some(category) = prompt(
                    "Enter category (Technology, Politics, Sports, Business, Health, General): ",
                )?
                else {
                    return Ok(());
                };
                search_category(store, &category, sink)?;
            }
            "4" => {
                sink.line("Goodbye.");
                return Ok(());
            }
            other => {
                warn!(input = other, "Invalid menu choice");
                sink.line("Invalid choice, enter a number between 1 and 4.");
            }
        }
    }
}

/// Print a prompt and read one trimmed line from stdin. `None` means EOF.
fn prompt(text: &str) -> Result<Option<String>, Box<dyn Error>> {
    print!("{text}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    let read = std::io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleRecord;
    use crate::output::BufferSink;
    use tempfile::TempDir;

    fn seeded_store(dir: &TempDir) -> ArticleStore {
        let store = ArticleStore::new(dir.path().join("scraper.db"));
        store
            .append(&ArticleRecord {
                title: "Vaccine news".to_string(),
                url: "https://a.example/v".to_string(),
                summary: "S.".to_string(),
                sentiment: 0.1,
                author: "Unknown".to_string(),
                image_url: "No Image Found".to_string(),
                category: "Health".to_string(),
            })
            .unwrap();
        store
    }

    #[test]
    fn test_list_saved_numbers_rows() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let mut sink = BufferSink::default();
        list_saved(&store, false, &mut sink).unwrap();
        assert_eq!(sink.lines[0], "Saved articles:");
        assert_eq!(sink.lines[1], "1. Vaccine news (Health)");
        assert_eq!(sink.lines[2], "   https://a.example/v");
    }

    #[test]
    fn test_list_saved_json_output() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let mut sink = BufferSink::default();
        list_saved(&store, true, &mut sink).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&sink.lines[0]).unwrap();
        assert_eq!(parsed[0]["category"], "Health");
    }

    #[test]
    fn test_search_normalizes_input_case() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let mut sink = BufferSink::default();
        search_category(&store, "hEaLtH", &mut sink).unwrap();
        assert_eq!(sink.lines[0], "Articles in Health:");
        assert_eq!(sink.lines[1], "1. Vaccine news");
    }

    #[test]
    fn test_search_unseen_category_reports_empty() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let mut sink = BufferSink::default();
        search_category(&store, "gardening", &mut sink).unwrap();
        assert_eq!(sink.lines[0], "No articles found in category Gardening.");
    }
}
