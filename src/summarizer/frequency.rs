//! Word frequency table
//!
//! A word counts toward importance when it is alphanumeric and not a
//! stopword. [`TokenFilter`] is the single place that decision is made: the
//! document-wide frequency table and the per-sentence scores are both built
//! from the same filtered token lists, so the two can never disagree about
//! which words are eligible.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Segmenter;
use crate::types::Sentence;

/// Decides which tokens take part in scoring.
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    stopwords: StopwordFilter,
}

impl TokenFilter {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// `word` must already be lowercased.
    pub fn is_eligible(&self, word: &str) -> bool {
        !word.is_empty()
            && word.chars().all(char::is_alphanumeric)
            && !self.stopwords.is_stopword(word)
    }

    /// Tokenize `text`, lowercase each token and keep the eligible ones.
    pub fn eligible_words<S: Segmenter + ?Sized>(&self, segmenter: &S, text: &str) -> Vec<String> {
        segmenter
            .tokenize_words(text)
            .into_iter()
            .map(|w| w.to_lowercase())
            .filter(|w| self.is_eligible(w))
            .collect()
    }
}

/// Eligible words of every sentence plus their document-wide counts.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: FxHashMap<String, u64>,
    /// Eligible words per sentence, indexed like the input sentences
    sentence_words: Vec<Vec<String>>,
}

impl WordFrequencies {
    /// Tokenize each sentence once and count eligible words across all of them.
    pub fn build<S: Segmenter + ?Sized>(
        sentences: &[Sentence],
        segmenter: &S,
        filter: &TokenFilter,
    ) -> Self {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();

        let sentence_words: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| filter.eligible_words(segmenter, &s.text))
            .collect();

        for word in sentence_words.iter().flatten() {
            *counts.entry(word.clone()).or_insert(0) += 1;
        }

        Self {
            counts,
            sentence_words,
        }
    }

    /// Document frequency of `word`; 0 for words that are not in the table.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Eligible words of the sentence at `index`.
    pub fn sentence_words(&self, index: usize) -> &[String] {
        self.sentence_words
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn num_sentences(&self) -> usize {
        self.sentence_words.len()
    }

    /// Number of distinct eligible words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most frequent word; ties go to the lexicographically smaller word.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(w, &c)| (w.as_str(), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::UnicodeSegmenter;

    fn sentences(text: &str) -> Vec<Sentence> {
        UnicodeSegmenter.segment_sentences(text)
    }

    #[test]
    fn test_eligibility() {
        let filter = TokenFilter::default();

        assert!(filter.is_eligible("telescope"));
        assert!(filter.is_eligible("42"));
        assert!(filter.is_eligible("café"));
        assert!(!filter.is_eligible("the"));
        assert!(!filter.is_eligible("."));
        assert!(!filter.is_eligible("3.14"));
        assert!(!filter.is_eligible(""));
    }

    #[test]
    fn test_eligible_words_lowercases() {
        let filter = TokenFilter::default();
        let words = filter.eligible_words(&UnicodeSegmenter, "The Telescope, the GALAXY!");

        assert_eq!(words, vec!["telescope", "galaxy"]);
    }

    #[test]
    fn test_counts_across_sentences() {
        let sents = sentences("Galaxy telescope. The telescope. A nebula.");
        let freq = WordFrequencies::build(&sents, &UnicodeSegmenter, &TokenFilter::default());

        assert_eq!(freq.get("telescope"), 2);
        assert_eq!(freq.get("galaxy"), 1);
        assert_eq!(freq.get("nebula"), 1);
        assert_eq!(freq.get("the"), 0);
        assert!(!freq.contains("the"));
        assert_eq!(freq.num_sentences(), 3);
        assert_eq!(freq.sentence_words(1), ["telescope".to_string()]);
        assert_eq!(freq.most_frequent(), Some(("telescope", 2)));
    }

    #[test]
    fn test_all_stopwords_gives_empty_table() {
        let sents = sentences("It is. The a. An the.");
        let freq = WordFrequencies::build(&sents, &UnicodeSegmenter, &TokenFilter::default());

        assert!(freq.is_empty());
        assert_eq!(freq.num_sentences(), 3);
        assert!(freq.sentence_words(0).is_empty());
        assert!(freq.most_frequent().is_none());
    }

    #[test]
    fn test_sentence_words_out_of_range() {
        let freq = WordFrequencies::default();
        assert!(freq.sentence_words(5).is_empty());
    }

    #[test]
    fn test_custom_filter_changes_eligibility() {
        let sents = sentences("Telescope galaxy.");
        let filter = TokenFilter::new(StopwordFilter::from_list(&["telescope"]));
        let freq = WordFrequencies::build(&sents, &UnicodeSegmenter, &filter);

        assert_eq!(freq.get("telescope"), 0);
        assert_eq!(freq.get("galaxy"), 1);
    }
}
