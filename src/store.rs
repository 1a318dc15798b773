//! SQLite-backed article archive.
//!
//! One table, `articles`, holding every saved record. Each operation opens
//! its own connection, runs the idempotent schema statement, does its work,
//! and drops the connection — no pooling, no shared handle, no transaction
//! spanning records. Rows are never updated or deleted, and `url` carries no
//! uniqueness constraint: re-scraping a link appends a duplicate row.

use crate::models::{ArticleRecord, SavedArticle};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

const CREATE_ARTICLES_TABLE: &str = "CREATE TABLE IF NOT EXISTS articles (
    title TEXT,
    url TEXT,
    summary TEXT,
    sentiment REAL,
    author TEXT,
    image_url TEXT,
    category TEXT
)";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Handle to the on-disk archive. Cheap to hold; connections are scoped to
/// each operation.
pub struct ArticleStore {
    db_path: String,
}

impl ArticleStore {
    /// Create a store for the given database path. The file and table are
    /// created lazily by the first operation that needs them.
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_string_lossy().into_owned(),
        }
    }

    /// Open a connection and make sure the schema exists.
    fn connection(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute(CREATE_ARTICLES_TABLE, [])?;
        Ok(conn)
    }

    /// Append one record. Insert failures surface to the caller.
    pub fn append(&self, record: &ArticleRecord) -> Result<(), StoreError> {
        let conn = self.connection()?;
        conn.execute(
            "INSERT INTO articles (title, url, summary, sentiment, author, image_url, category)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.title,
                record.url,
                record.summary,
                record.sentiment,
                record.author,
                record.image_url,
                record.category,
            ],
        )?;
        debug!(url = %record.url, category = %record.category, "Appended article record");
        Ok(())
    }

    /// All saved (title, url, category) rows in insertion order.
    pub fn list_all(&self) -> Result<Vec<SavedArticle>, StoreError> {
        let conn = self.connection()?;
        let mut stmt =
            conn.prepare("SELECT title, url, category FROM articles ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok(SavedArticle {
                title: row.get(0)?,
                url: row.get(1)?,
                category: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// (title, url) rows whose stored category equals `category` exactly,
    /// in insertion order. An unseen category is an empty result, not an
    /// error.
    pub fn find_by_category(&self, category: &str) -> Result<Vec<(String, String)>, StoreError> {
        let conn = self.connection()?;
        let mut stmt = conn
            .prepare("SELECT title, url FROM articles WHERE category = ?1 ORDER BY rowid")?;
        let rows = stmt.query_map(params![category], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(title: &str, url: &str, category: &str) -> ArticleRecord {
        ArticleRecord {
            title: title.to_string(),
            url: url.to_string(),
            summary: "A summary.".to_string(),
            sentiment: 0.25,
            author: "Unknown".to_string(),
            image_url: "No Image Found".to_string(),
            category: category.to_string(),
        }
    }

    fn temp_store() -> (TempDir, ArticleStore) {
        let dir = TempDir::new().unwrap();
        let store = ArticleStore::new(dir.path().join("scraper.db"));
        (dir, store)
    }

    #[test]
    fn test_append_then_list_round_trip() {
        let (_dir, store) = temp_store();
        store.append(&record("First", "https://a.example/1", "Health")).unwrap();
        store.append(&record("Second", "https://a.example/2", "Sports")).unwrap();

        let rows = store.list_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "First");
        assert_eq!(rows[0].url, "https://a.example/1");
        assert_eq!(rows[0].category, "Health");
        assert_eq!(rows[1].title, "Second");
    }

    #[test]
    fn test_duplicate_urls_are_kept() {
        let (_dir, store) = temp_store();
        let rec = record("Same", "https://a.example/dup", "General");
        store.append(&rec).unwrap();
        store.append(&rec).unwrap();

        let rows = store.list_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].url, rows[1].url);
    }

    #[test]
    fn test_find_by_category_matches_exactly() {
        let (_dir, store) = temp_store();
        store.append(&record("H1", "https://a.example/h1", "Health")).unwrap();
        store.append(&record("T1", "https://a.example/t1", "Technology")).unwrap();
        store.append(&record("H2", "https://a.example/h2", "Health")).unwrap();

        let rows = store.find_by_category("Health").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ("H1".to_string(), "https://a.example/h1".to_string()));
        assert_eq!(rows[1], ("H2".to_string(), "https://a.example/h2".to_string()));

        // Exact stored-value match only.
        assert!(store.find_by_category("health").unwrap().is_empty());
    }

    #[test]
    fn test_unseen_category_returns_empty_not_error() {
        let (_dir, store) = temp_store();
        store.append(&record("T1", "https://a.example/t1", "Technology")).unwrap();
        assert!(store.find_by_category("Gardening").unwrap().is_empty());
    }

    #[test]
    fn test_fresh_database_lists_nothing() {
        let (_dir, store) = temp_store();
        assert!(store.list_all().unwrap().is_empty());
        assert!(store.find_by_category("Health").unwrap().is_empty());
    }
}
