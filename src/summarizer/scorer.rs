//! Sentence scoring
//!
//! A sentence scores the sum of the document frequencies of its eligible
//! words. Sentences without a single eligible word have no entry at all,
//! which is different from scoring zero.

use rustc_hash::FxHashMap;

use super::frequency::WordFrequencies;

/// Sentence index -> frequency score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceScores {
    scores: FxHashMap<usize, u64>,
}

impl SentenceScores {
    /// Score every sentence known to `frequencies`.
    pub fn compute(frequencies: &WordFrequencies) -> Self {
        let mut scores = FxHashMap::default();

        for index in 0..frequencies.num_sentences() {
            let words = frequencies.sentence_words(index);
            if words.is_empty() {
                continue;
            }
            let score = words.iter().map(|w| frequencies.get(w)).sum();
            scores.insert(index, score);
        }

        Self { scores }
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.scores.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// `(index, score)` pairs in ascending index order.
    pub fn ranked_input(&self) -> Vec<(usize, u64)> {
        let mut entries: Vec<_> = self.scores.iter().map(|(&i, &s)| (i, s)).collect();
        entries.sort_unstable_by_key(|&(i, _)| i);
        entries
    }
}

#[cfg(test)]
impl FromIterator<(usize, u64)> for SentenceScores {
    fn from_iter<T: IntoIterator<Item = (usize, u64)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::{Segmenter, UnicodeSegmenter};
    use crate::summarizer::frequency::TokenFilter;

    fn score(text: &str) -> SentenceScores {
        let sentences = UnicodeSegmenter.segment_sentences(text);
        let freq = WordFrequencies::build(&sentences, &UnicodeSegmenter, &TokenFilter::default());
        SentenceScores::compute(&freq)
    }

    #[test]
    fn test_sum_of_document_frequencies() {
        // telescope: 3, galaxy: 2, nebula: 1
        let scores = score(
            "Telescope galaxy. Telescope telescope nebula. Galaxy.",
        );

        assert_eq!(scores.get(0), Some(3 + 2));
        assert_eq!(scores.get(1), Some(3 + 3 + 1));
        assert_eq!(scores.get(2), Some(2));
    }

    #[test]
    fn test_unscorable_sentence_is_absent() {
        let scores = score("Telescope galaxy. It is the. Nebula.");

        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get(0), Some(2));
        assert_eq!(scores.get(1), None);
        assert_eq!(scores.get(2), Some(1));
    }

    #[test]
    fn test_all_stopwords_is_empty() {
        assert!(score("It is. The a. An the.").is_empty());
    }

    #[test]
    fn test_ranked_input_is_index_ordered() {
        let scores: SentenceScores = [(4, 1), (0, 9), (2, 5)].into_iter().collect();

        assert_eq!(scores.ranked_input(), vec![(0, 9), (2, 5), (4, 1)]);
    }
}
