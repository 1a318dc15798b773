//! Command-line interface definitions.
//!
//! One set of shared flags (listing URL, database path, timeout, batch
//! limit) plus a subcommand per archive action. Running with no subcommand
//! starts the interactive menu.

use clap::{Parser, Subcommand};

/// Command-line arguments for newsgrab.
///
/// # Examples
///
/// ```sh
/// # Scrape the default listing page and save up to 5 articles
/// newsgrab scrape
///
/// # Browse the archive, or dump it as JSON
/// newsgrab list
/// newsgrab list --json
///
/// # Search saved articles by category (input is case-normalized)
/// newsgrab search health
///
/// # Interactive menu (also the default with no subcommand)
/// newsgrab menu
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing page to harvest article links from
    #[arg(short, long, default_value = "https://news.google.com/")]
    pub listing_url: String,

    /// Path to the SQLite archive file
    #[arg(short, long, default_value = "scraper.db")]
    pub database: String,

    /// HTTP timeout in seconds, applied to every fetch
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Maximum number of newly scraped links processed per scrape run
    #[arg(long, default_value_t = 5)]
    pub batch_limit: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape the listing page and save new articles
    Scrape,
    /// List every saved article
    List {
        /// Print the rows as JSON instead of numbered lines
        #[arg(long)]
        json: bool,
    },
    /// Search saved articles by category
    Search {
        /// Category label (Technology, Politics, Sports, Business, Health, General)
        category: String,
    },
    /// Run the interactive menu
    Menu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_subcommand() {
        let cli = Cli::parse_from(["newsgrab"]);
        assert_eq!(cli.listing_url, "https://news.google.com/");
        assert_eq!(cli.database, "scraper.db");
        assert_eq!(cli.timeout_secs, 10);
        assert_eq!(cli.batch_limit, 5);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_scrape_with_overrides() {
        let cli = Cli::parse_from([
            "newsgrab",
            "--listing-url",
            "https://news.example/",
            "--database",
            "/tmp/archive.db",
            "--timeout-secs",
            "3",
            "--batch-limit",
            "2",
            "scrape",
        ]);
        assert_eq!(cli.listing_url, "https://news.example/");
        assert_eq!(cli.database, "/tmp/archive.db");
        assert_eq!(cli.timeout_secs, 3);
        assert_eq!(cli.batch_limit, 2);
        assert!(matches!(cli.command, Some(Command::Scrape)));
    }

    #[test]
    fn test_search_takes_a_category() {
        let cli = Cli::parse_from(["newsgrab", "search", "health"]);
        match cli.command {
            Some(Command::Search { category }) => assert_eq!(category, "health"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_json_flag() {
        let cli = Cli::parse_from(["newsgrab", "list", "--json"]);
        assert!(matches!(cli.command, Some(Command::List { json: true })));
    }
}
