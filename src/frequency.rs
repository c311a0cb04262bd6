/// Corpus-wide term frequencies and the high-frequency token filter.
///
/// This is a batch pass: counts are taken over every document's final
/// per-document tokens before any removal decision is made.
use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::ConfigError;

/// Token occurrence counts across a whole corpus, plus the total token count.
/// Built once per pipeline run and discarded after filtering.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Count every token in every document.
    pub fn from_corpus(corpus: &[Vec<String>]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut total = 0;
        for tokens in corpus {
            for token in tokens {
                *counts.entry(token.clone()).or_insert(0) += 1;
            }
            total += tokens.len();
        }
        FrequencyTable { counts, total }
    }

    /// Occurrences of `token` across the corpus.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Total number of tokens across the corpus.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    pub fn vocab_size(&self) -> usize {
        self.counts.len()
    }

    /// Tokens whose relative frequency strictly exceeds `threshold`.
    /// Equality does not qualify. Empty for an empty corpus.
    pub fn high_frequency(&self, threshold: f64) -> HashSet<String> {
        if self.total == 0 {
            return HashSet::new();
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .filter(|(_, &count)| count as f64 / total > threshold)
            .map(|(token, _)| token.clone())
            .collect()
    }
}

/// Remove every occurrence of the listed tokens from every document,
/// preserving remaining token order and document order.
pub fn remove_tokens(corpus: Vec<Vec<String>>, tokens: &HashSet<String>) -> Vec<Vec<String>> {
    if tokens.is_empty() {
        return corpus;
    }
    corpus
        .into_iter()
        .map(|doc| doc.into_iter().filter(|t| !tokens.contains(t)).collect())
        .collect()
}

/// Remove tokens whose corpus-wide relative frequency exceeds `threshold`.
///
/// The threshold must lie in `[0.0, 1.0]`; it is checked before any document
/// is touched. An empty corpus (zero total tokens) is returned unchanged.
pub fn filter_high_frequency(
    corpus: Vec<Vec<String>>,
    threshold: f64,
) -> Result<Vec<Vec<String>>, ConfigError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ConfigError::ThresholdOutOfRange(threshold));
    }
    let table = FrequencyTable::from_corpus(&corpus);
    if table.total() == 0 {
        return Ok(corpus);
    }
    let high = table.high_frequency(threshold);
    debug!(
        "removing {} high-frequency tokens of {} distinct (threshold {})",
        high.len(),
        table.vocab_size(),
        threshold
    );
    Ok(remove_tokens(corpus, &high))
}
