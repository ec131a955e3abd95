//! Top-N sentence selection
//!
//! Picks the highest-scoring sentences and hands them back in document
//! order. On equal scores the earlier sentence wins, so the same input always
//! produces the same selection.

use super::scorer::SentenceScores;
use crate::types::{SelectedSentence, Sentence, DEFAULT_NUM_SENTENCES};

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select (at least 1)
    pub num_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            num_sentences: DEFAULT_NUM_SENTENCES,
        }
    }
}

/// Frequency-score sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    /// Selection settings
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Selector keeping [`DEFAULT_NUM_SENTENCES`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector built from `config`; a zero count is raised to `1`.
    pub fn with_config(config: SelectorConfig) -> Self {
        Self::new().with_num_sentences(config.num_sentences)
    }

    /// Set number of sentences to select; `0` is raised to `1`.
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n.max(1);
        self
    }

    /// Maximum number of sentences [`SentenceSelector::select`] returns.
    pub fn num_sentences(&self) -> usize {
        self.config.num_sentences
    }

    /// Select up to `num_sentences` scored sentences.
    ///
    /// Only sentences with an entry in `scores` are candidates. Ranking is by
    /// score descending, then index ascending; the result is re-sorted into
    /// document order.
    pub fn select(&self, sentences: &[Sentence], scores: &SentenceScores) -> Vec<SelectedSentence> {
        let mut ranked: Vec<(usize, u64)> = scores
            .ranked_input()
            .into_iter()
            .filter(|&(i, _)| i < sentences.len())
            .collect();

        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.config.num_sentences);

        // Back to document order
        ranked.sort_unstable_by_key(|&(i, _)| i);

        ranked
            .into_iter()
            .map(|(i, score)| SelectedSentence {
                sentence: sentences[i].clone(),
                score: Some(score),
            })
            .collect()
    }
}
