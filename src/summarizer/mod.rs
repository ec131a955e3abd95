//! Extractive summarization
//!
//! Ranks sentences by the summed document frequency of their content words
//! and returns the best ones verbatim, in source order.
//!
//! Stages, in order: normalize, segment, count word frequencies, score
//! sentences, select. A document with no more sentences than requested skips
//! everything after segmentation and comes back normalized but otherwise
//! unchanged.

pub mod frequency;
pub mod scorer;
pub mod selector;

use crate::config::SummarizerSpec;
use crate::errors::SummarizeError;
use crate::nlp::normalize::normalize;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{Segmenter, UnicodeSegmenter};
use crate::types::SummaryResult;

use frequency::{TokenFilter, WordFrequencies};
use scorer::SentenceScores;
use selector::{SelectorConfig, SentenceSelector};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_FREQUENCIES: &str = "frequencies";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// Summarize `text` down to at most `num_sentences` sentences.
///
/// Uses English stopwords and UAX #29 segmentation. The returned string is
/// always something to show the user: the summary, the normalized text when
/// it is already short enough, or [`crate::UNSCORABLE_MESSAGE`].
pub fn summarize(text: &str, num_sentences: usize) -> String {
    Summarizer::new()
        .with_num_sentences(num_sentences)
        .summarize(text)
        .text
}

/// Frequency-based extractive summarizer.
#[derive(Debug, Clone)]
pub struct Summarizer<S = UnicodeSegmenter> {
    segmenter: S,
    filter: TokenFilter,
    selector: SentenceSelector,
    /// Minimum word count enforced by [`Summarizer::summarize_checked`]
    min_words: Option<usize>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// English stopwords plus punctuation, five sentences, no word minimum.
    pub fn new() -> Self {
        Self {
            segmenter: UnicodeSegmenter,
            filter: TokenFilter::default(),
            selector: SentenceSelector::new(),
            min_words: None,
        }
    }

    /// Build a summarizer from a validated spec.
    ///
    /// Every validation error is returned together; warnings are logged and
    /// otherwise ignored.
    pub fn from_spec(spec: &SummarizerSpec) -> Result<Self, SummarizeError> {
        let report = spec.validate();

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(code = %warning.code, path = %warning.path, "{}", warning.message);
        }

        if report.has_errors() {
            return Err(SummarizeError::InvalidSpec(report.errors().cloned().collect()));
        }

        let mut stopwords = StopwordFilter::for_language(spec.language())?;
        if spec.stopwords.punctuation {
            stopwords = stopwords.with_punctuation();
        }
        let extra: Vec<&str> = spec.stopwords.extra.iter().map(String::as_str).collect();
        stopwords.add_stopwords(&extra);
        let remove: Vec<&str> = spec.stopwords.remove.iter().map(String::as_str).collect();
        stopwords.remove_stopwords(&remove);

        let mut summarizer = Self::new()
            .with_stopwords(stopwords)
            .with_min_words(spec.input.min_words);
        summarizer.selector = SentenceSelector::with_config(SelectorConfig {
            num_sentences: spec.num_sentences(),
        });
        Ok(summarizer)
    }
}

impl<S: Segmenter> Summarizer<S> {
    /// Number of sentences to keep; `0` is raised to `1`.
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.selector = self.selector.with_num_sentences(n);
        self
    }

    /// Replace the stopword set.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.filter = TokenFilter::new(stopwords);
        self
    }

    /// Require at least `min_words` whitespace-separated words in
    /// [`Summarizer::summarize_checked`].
    pub fn with_min_words(mut self, min_words: Option<usize>) -> Self {
        self.min_words = min_words;
        self
    }

    /// Swap in a different segmenter.
    pub fn with_segmenter<T: Segmenter>(self, segmenter: T) -> Summarizer<T> {
        Summarizer {
            segmenter,
            filter: self.filter,
            selector: self.selector,
            min_words: self.min_words,
        }
    }

    pub fn num_sentences(&self) -> usize {
        self.selector.num_sentences()
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        self.filter.stopwords()
    }

    pub fn min_words(&self) -> Option<usize> {
        self.min_words
    }

    /// Summarize `text`. Never fails; see [`SummaryResult::outcome`] for
    /// which of the three possible answers came back.
    pub fn summarize(&self, text: &str) -> SummaryResult {
        let requested = self.num_sentences();

        let normalized = {
            trace_stage!(STAGE_NORMALIZE);
            normalize(text)
        };

        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            self.segmenter.segment_sentences(&normalized)
        };
        let total = sentences.len();

        if total <= requested {
            trace_event!(debug, sentences = total, requested, "document already short enough");
            return SummaryResult::unchanged(normalized, sentences);
        }

        let frequencies = {
            trace_stage!(STAGE_FREQUENCIES);
            WordFrequencies::build(&sentences, &self.segmenter, &self.filter)
        };

        let scores = {
            trace_stage!(STAGE_SCORE);
            SentenceScores::compute(&frequencies)
        };

        if scores.is_empty() {
            trace_event!(warn, sentences = total, "no scorable words in document");
            return SummaryResult::unscorable(total);
        }

        let selected = {
            trace_stage!(STAGE_SELECT);
            self.selector.select(&sentences, &scores)
        };

        trace_event!(
            debug,
            sentences = total,
            scored = scores.len(),
            vocabulary = frequencies.len(),
            top_word = ?frequencies.most_frequent(),
            selected = selected.len(),
            "summary extracted"
        );

        SummaryResult::extracted(selected, total)
    }

    /// Like [`Summarizer::summarize`], but rejects empty input and input
    /// below the configured word minimum.
    pub fn summarize_checked(&self, text: &str) -> Result<SummaryResult, SummarizeError> {
        let words = text.split_whitespace().count();
        if words == 0 {
            return Err(SummarizeError::EmptyInput);
        }
        if let Some(min_words) = self.min_words {
            if words < min_words {
                return Err(SummarizeError::TooShort { words, min_words });
            }
        }
        Ok(self.summarize(text))
    }
}
