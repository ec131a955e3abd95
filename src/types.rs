//! Core data types shared across the summarizer stages.

use std::fmt;

/// Number of sentences selected when the caller does not ask for a count.
pub const DEFAULT_NUM_SENTENCES: usize = 5;

/// Returned in place of a summary when no sentence has a scoring word.
pub const UNSCORABLE_MESSAGE: &str =
    "Unable to generate summary. Text may be too short or contain mostly stopwords.";

/// A sentence of the normalized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Sentence text, trimmed
    pub text: String,
    /// Start byte offset in the normalized text
    pub start: usize,
    /// End byte offset in the normalized text (exclusive)
    pub end: usize,
    /// Position in document order (0-based)
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// How a [`SummaryResult`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The document had no more sentences than requested; the normalized
    /// text is returned as is.
    Unchanged,
    /// The top-scoring sentences were extracted.
    Extracted,
    /// No sentence contained a scoring word; the text is [`UNSCORABLE_MESSAGE`].
    Unscorable,
}

/// A sentence that made it into the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSentence {
    pub sentence: Sentence,
    /// Frequency score, `None` when the sentence was passed through unscored
    pub score: Option<u64>,
}

/// Result of summarizing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    /// The text to show the user: summary, passthrough or diagnostic
    pub text: String,
    pub outcome: SummaryOutcome,
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Number of sentences the document was segmented into
    pub total_sentences: usize,
}

impl SummaryResult {
    pub(crate) fn unchanged(text: String, sentences: Vec<Sentence>) -> Self {
        let total_sentences = sentences.len();
        Self {
            text,
            outcome: SummaryOutcome::Unchanged,
            sentences: sentences
                .into_iter()
                .map(|sentence| SelectedSentence {
                    sentence,
                    score: None,
                })
                .collect(),
            total_sentences,
        }
    }

    pub(crate) fn unscorable(total_sentences: usize) -> Self {
        Self {
            text: UNSCORABLE_MESSAGE.to_string(),
            outcome: SummaryOutcome::Unscorable,
            sentences: Vec::new(),
            total_sentences,
        }
    }

    pub(crate) fn extracted(selected: Vec<SelectedSentence>, total_sentences: usize) -> Self {
        let text = selected
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            text,
            outcome: SummaryOutcome::Extracted,
            sentences: selected,
            total_sentences,
        }
    }

    /// True when the text is the unscorable diagnostic rather than a summary.
    pub fn is_unscorable(&self) -> bool {
        self.outcome == SummaryOutcome::Unscorable
    }
}

impl fmt::Display for SummaryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
