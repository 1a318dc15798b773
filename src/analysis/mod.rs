//! Text analysis applied to each extracted article.
//!
//! Three independent steps, all deterministic and offline:
//!
//! - [`summarize`]: extractive summary of the body text (LSA salience)
//! - [`sentiment`]: lexicon-based polarity score of the summary
//! - [`categorize`]: ordered keyword rules over title and body

pub mod categorize;
pub mod sentiment;
pub mod summarize;
