//! Extractive summarization by latent semantic analysis.
//!
//! The body text is segmented into sentences (UAX #29), a term–sentence
//! frequency matrix is built, and sentences are scored against the dominant
//! concepts of the text: the top eigenpairs of the Gram matrix AᵀA, found by
//! power iteration with deflation. A sentence's salience is
//! √(Σₖ λₖ·vₖ[j]²) over the kept concepts, the standard LSA ranking. The
//! top-scoring sentences are emitted in their original document order.
//!
//! Everything here is deterministic: fixed start vector, fixed iteration
//! count, and a BTreeMap vocabulary so term indexes never depend on hash
//! order.

use ndarray::{Array1, Array2};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Number of sentences kept in an article summary.
pub const SUMMARY_SENTENCES: usize = 2;

/// Concepts (singular directions) considered when scoring sentences.
const MAX_CONCEPTS: usize = 3;

/// Power iteration steps per eigenpair.
const POWER_ITERATIONS: usize = 64;

/// Produce an extractive summary of `text` with at most `sentence_count`
/// sentences, joined by single spaces.
///
/// If the text segments into `sentence_count` or fewer sentences they are
/// returned unmodified (joined the same way); empty text yields an empty
/// string.
pub fn summarize(text: &str, sentence_count: usize) -> String {
    let sentences: Vec<&str> = text
        .unicode_sentences()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect();

    if sentences.len() <= sentence_count {
        return sentences.join(" ");
    }

    let ranking = rank_sentences(&sentences);
    let mut picked: Vec<usize> = ranking.into_iter().take(sentence_count).collect();
    picked.sort_unstable();

    debug!(
        total = sentences.len(),
        kept = picked.len(),
        "Ranked sentences for summary"
    );

    picked
        .iter()
        .map(|&index| sentences[index])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sentence indexes ordered by descending LSA salience, ties broken by
/// document position.
fn rank_sentences(sentences: &[&str]) -> Vec<usize> {
    let tokenized: Vec<Vec<String>> = sentences
        .iter()
        .map(|sentence| {
            sentence
                .unicode_words()
                .map(|word| word.to_lowercase())
                .collect()
        })
        .collect();

    let mut vocabulary: BTreeMap<&str, usize> = BTreeMap::new();
    for words in &tokenized {
        for word in words {
            let next_index = vocabulary.len();
            vocabulary.entry(word.as_str()).or_insert(next_index);
        }
    }

    if vocabulary.is_empty() {
        return (0..sentences.len()).collect();
    }

    let mut term_matrix = Array2::<f64>::zeros((vocabulary.len(), sentences.len()));
    for (column, words) in tokenized.iter().enumerate() {
        for word in words {
            let row = vocabulary[word.as_str()];
            term_matrix[[row, column]] += 1.0;
        }
    }

    // Gram matrix over sentences; its eigenpairs are the squared singular
    // values and right singular vectors of the term matrix.
    let gram = term_matrix.t().dot(&term_matrix);
    let concepts = MAX_CONCEPTS.min(sentences.len());
    let eigenpairs = dominant_eigenpairs(&gram, concepts);

    let mut scores = vec![0.0f64; sentences.len()];
    for (value, vector) in &eigenpairs {
        let weight = value.max(0.0);
        for (index, component) in vector.iter().enumerate() {
            scores[index] += weight * component * component;
        }
    }
    for score in &mut scores {
        *score = score.sqrt();
    }

    let mut order: Vec<usize> = (0..sentences.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    order
}

/// Top `count` eigenpairs of a symmetric non-negative matrix, largest
/// eigenvalue first, via power iteration with deflation.
fn dominant_eigenpairs(matrix: &Array2<f64>, count: usize) -> Vec<(f64, Array1<f64>)> {
    let n = matrix.nrows();
    let mut deflated = matrix.clone();
    let mut pairs = Vec::new();

    for _ in 0..count.min(n) {
        let mut vector = Array1::<f64>::from_elem(n, 1.0 / (n as f64).sqrt());
        for _ in 0..POWER_ITERATIONS {
            let next = deflated.dot(&vector);
            let norm = next.dot(&next).sqrt();
            if norm <= f64::EPSILON {
                break;
            }
            vector = next / norm;
        }

        let value = vector.dot(&deflated.dot(&vector));
        if value <= f64::EPSILON {
            break;
        }

        for i in 0..n {
            for j in 0..n {
                deflated[[i, j]] -= value * vector[i] * vector[j];
            }
        }
        pairs.push((value, vector));
    }

    pairs
}
