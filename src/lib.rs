//! # rapid-summarizer
//!
//! Frequency-based extractive summarization.
//!
//! Every sentence is scored by adding up how often each of its content words
//! occurs in the whole document. The top-scoring sentences are returned
//! verbatim and in their original order.
//!
//! ```rust,ignore
//! use rapid_summarizer::summarize;
//!
//! let summary = summarize(article, 3);
//! ```
//!
//! For the selected sentences, their scores, and configuration through a
//! JSON spec, use [`Summarizer`] and [`SummarizerSpec`].

/// Enter a tracing span for a summarizer stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

/// Emit a tracing event at `$level` when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub mod config;
pub mod errors;
pub mod nlp;
pub mod summarizer;
pub mod types;

pub use config::SummarizerSpec;
pub use errors::{ErrorCode, SpecError, SummarizeError};
pub use nlp::stopwords::{Language, StopwordFilter};
pub use nlp::tokenizer::{Segmenter, UnicodeSegmenter};
pub use summarizer::{summarize, Summarizer};
pub use types::{
    SelectedSentence, Sentence, SummaryOutcome, SummaryResult, DEFAULT_NUM_SENTENCES,
    UNSCORABLE_MESSAGE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_spec_applies_settings() {
        let spec = SummarizerSpec::from_json(
            r#"{
                "v": 1,
                "num_sentences": 2,
                "stopwords": { "extra": ["telescope"], "punctuation": true },
                "input": { "min_words": 4 }
            }"#,
        )
        .unwrap();

        let summarizer = Summarizer::from_spec(&spec).unwrap();

        assert_eq!(summarizer.num_sentences(), 2);
        assert_eq!(summarizer.min_words(), Some(4));
        assert!(summarizer.stopwords().is_stopword("telescope"));
        assert!(summarizer.stopwords().is_stopword(","));
        assert!(summarizer.stopwords().is_stopword("the"));
    }

    #[test]
    fn test_from_spec_remove_and_no_punctuation() {
        let spec = SummarizerSpec::from_json(
            r#"{ "v": 1, "stopwords": { "remove": ["the"], "punctuation": false } }"#,
        )
        .unwrap();

        let summarizer = Summarizer::from_spec(&spec).unwrap();

        assert!(!summarizer.stopwords().is_stopword("the"));
        assert!(!summarizer.stopwords().is_stopword(","));
        assert_eq!(summarizer.num_sentences(), DEFAULT_NUM_SENTENCES);
    }

    #[test]
    fn test_from_spec_reports_every_error() {
        let spec =
            SummarizerSpec::from_json(r#"{ "v": 9, "num_sentences": 0, "language": "xx" }"#)
                .unwrap();

        match Summarizer::from_spec(&spec) {
            Err(SummarizeError::InvalidSpec(errors)) => {
                let codes: Vec<_> = errors.iter().map(|e| e.code).collect();
                assert_eq!(
                    codes,
                    vec![
                        ErrorCode::UnsupportedVersion,
                        ErrorCode::InvalidValue,
                        ErrorCode::UnknownLanguage,
                    ]
                );
            }
            other => panic!("expected InvalidSpec, got {other:?}"),
        }
    }

    #[test]
    fn test_from_spec_tolerates_warnings() {
        let spec = SummarizerSpec::from_json(r#"{ "v": 1, "theme": "dark" }"#).unwrap();
        assert!(Summarizer::from_spec(&spec).is_ok());
    }

    #[test]
    fn test_spec_summarizer_gates_input() {
        let spec =
            SummarizerSpec::from_json(r#"{ "v": 1, "input": { "min_words": 50 } }"#).unwrap();
        let summarizer = Summarizer::from_spec(&spec).unwrap();

        let err = summarizer
            .summarize_checked("Far too short to bother with.")
            .unwrap_err();
        assert!(matches!(err, SummarizeError::TooShort { words: 6, min_words: 50 }));
    }
}
