//! Keyword-driven topic categorization.
//!
//! Categories are data, not control flow: an ordered list of
//! (label, keywords) pairs scanned in declared order, keyword by keyword,
//! with a case-insensitive substring match against the article title or body.
//! The first hit wins, so declaration order is the tie-break — a title
//! matching both a Technology and a Politics keyword is Technology. No hit
//! at all falls back to [`DEFAULT_CATEGORY`].
//!
//! Substring means substring: "ai" also matches inside longer words. That is
//! intentional, the rules are deliberately blunt.

use crate::models::DEFAULT_CATEGORY;

/// Ordered categorization rules.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    rules: Vec<(String, Vec<String>)>,
}

impl Default for CategoryTable {
    /// The stock rule set, in tie-break order.
    fn default() -> Self {
        Self::new(vec![
            ("Technology", vec!["AI", "tech", "software", "computer", "science"]),
            ("Politics", vec!["election", "government", "president", "policy"]),
            ("Sports", vec!["game", "tournament", "player", "team"]),
            ("Business", vec!["stocks", "market", "finance", "economy"]),
            ("Health", vec!["virus", "vaccine", "doctor", "medicine"]),
        ])
    }
}

impl CategoryTable {
    /// Build a table from (label, keywords) pairs; scan order is the order
    /// given.
    pub fn new(rules: Vec<(&str, Vec<&str>)>) -> Self {
        let rules = rules
            .into_iter()
            .map(|(label, keywords)| {
                let keywords = keywords.into_iter().map(str::to_string).collect();
                (label.to_string(), keywords)
            })
            .collect();
        Self { rules }
    }

    /// Classify an article by its title and body text.
    pub fn classify(&self, title: &str, text: &str) -> String {
        let title = title.to_lowercase();
        let text = text.to_lowercase();

        for (label, keywords) in &self.rules {
            for keyword in keywords {
                let needle = keyword.to_lowercase();
                if title.contains(&needle) || text.contains(&needle) {
                    return label.clone();
                }
            }
        }
        DEFAULT_CATEGORY.to_string()
    }
}
