//! Sentence and word segmentation
//!
//! The summarizer only needs two operations from a segmenter: split a text
//! into sentences, and split a text into word tokens. [`UnicodeSegmenter`]
//! implements both with the UAX #29 boundary rules from
//! `unicode-segmentation`; callers with their own tokenizer can implement
//! [`Segmenter`] instead.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Sentence;

/// Splits text into sentences and word tokens.
///
/// Both operations must be pure: the same input always yields the same
/// output. Boundary rules (abbreviations, decimals, quotes) are entirely up
/// to the implementation.
pub trait Segmenter {
    /// Split `text` into sentences in document order.
    ///
    /// Returned sentences are trimmed and non-empty, `index` counts from 0
    /// and `start`/`end` are byte offsets into `text`.
    fn segment_sentences(&self, text: &str) -> Vec<Sentence>;

    /// Split `text` into word tokens, punctuation included, whitespace dropped.
    fn tokenize_words(&self, text: &str) -> Vec<String>;
}

/// UAX #29 segmenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment_sentences(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();

        for (offset, piece) in text.split_sentence_bound_indices() {
            let trimmed = piece.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start = offset + (piece.len() - piece.trim_start().len());
            let end = start + trimmed.len();
            let index = sentences.len();
            sentences.push(Sentence::new(trimmed, start, end, index));
        }

        sentences
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_split() {
        let sentences = UnicodeSegmenter.segment_sentences("Hello world. This is great.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Hello world.");
        assert_eq!(sentences[1].text, "This is great.");
        assert_eq!(sentences[1].index, 1);
    }

    #[test]
    fn test_sentence_offsets_point_into_text() {
        let text = "One here. Two there! Three?";
        let sentences = UnicodeSegmenter.segment_sentences(text);

        assert_eq!(sentences.len(), 3);
        for s in &sentences {
            assert_eq!(&text[s.start..s.end], s.text);
        }
        for pair in sentences.windows(2) {
            assert!(pair[0].end <= pair[1].start);
            assert!(pair[0].index < pair[1].index);
        }
    }

    #[test]
    fn test_decimal_does_not_end_sentence() {
        let sentences = UnicodeSegmenter.segment_sentences("Pi is about 3.14 today. Next one.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Pi is about 3.14 today.");
    }

    #[test]
    fn test_empty_text_has_no_sentences() {
        assert!(UnicodeSegmenter.segment_sentences("").is_empty());
        assert!(UnicodeSegmenter.segment_sentences("   ").is_empty());
    }

    #[test]
    fn test_words_keep_punctuation_drop_spaces() {
        let words = UnicodeSegmenter.tokenize_words("Hello, world!");
        assert_eq!(words, vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn test_words_unicode() {
        let words = UnicodeSegmenter.tokenize_words("Café résumé naïve");
        assert_eq!(words, vec!["Café", "résumé", "naïve"]);
    }
}
