//! Summarizer specification types.
//!
//! A [`SummarizerSpec`] describes the stopword language and adjustments, how
//! many sentences to keep, and the input gate. It is validated by
//! [`super::validation::ValidationEngine`] before a summarizer is built.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "en",
//!   "num_sentences": 5,
//!   "stopwords": { "extra": ["ai"], "remove": [], "punctuation": true },
//!   "input": { "min_words": 50 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validation::{ValidationEngine, ValidationReport};
use crate::errors::SummarizeError;
use crate::types::DEFAULT_NUM_SENTENCES;

/// Spec version understood by this crate.
pub const SPEC_VERSION: u32 = 1;

/// Language used when a spec does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Top-level summarizer specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Stopword language, as an ISO code or English name.
    #[serde(default)]
    pub language: Option<String>,

    /// Number of sentences to keep.
    #[serde(default)]
    pub num_sentences: Option<usize>,

    #[serde(default)]
    pub stopwords: StopwordSpec,

    #[serde(default)]
    pub input: InputSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarizerSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            language: None,
            num_sentences: None,
            stopwords: StopwordSpec::default(),
            input: InputSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarizerSpec {
    /// Parse a spec from JSON. Only syntax and types are checked here; call
    /// [`SummarizerSpec::validate`] for the semantic rules.
    pub fn from_json(json: &str) -> Result<Self, SummarizeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn num_sentences(&self) -> usize {
        self.num_sentences.unwrap_or(DEFAULT_NUM_SENTENCES)
    }

    /// Run the default validation rules.
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }
}

/// Adjustments to the stopword set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopwordSpec {
    /// Words added to the language list.
    #[serde(default)]
    pub extra: Vec<String>,

    /// Words removed from the language list.
    #[serde(default)]
    pub remove: Vec<String>,

    /// Merge ASCII punctuation into the set (default `true`).
    #[serde(default = "default_true")]
    pub punctuation: bool,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for StopwordSpec {
    fn default() -> Self {
        Self {
            extra: Vec::new(),
            remove: Vec::new(),
            punctuation: true,
            unknown_fields: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Input gate applied by `Summarizer::summarize_checked`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSpec {
    /// Minimum number of whitespace-separated words.
    #[serde(default)]
    pub min_words: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = SummarizerSpec::from_json(r#"{ "v": 1 }"#).unwrap();

        assert_eq!(spec.v, 1);
        assert_eq!(spec.language(), "en");
        assert_eq!(spec.num_sentences(), DEFAULT_NUM_SENTENCES);
        assert!(spec.stopwords.punctuation);
        assert!(spec.input.min_words.is_none());
        assert!(!spec.strict);
    }

    #[test]
    fn test_deserialize_full_spec() {
        let json = r#"{
            "v": 1,
            "language": "de",
            "num_sentences": 3,
            "stopwords": { "extra": ["ki"], "remove": ["nicht"], "punctuation": false },
            "input": { "min_words": 50 },
            "strict": true
        }"#;
        let spec = SummarizerSpec::from_json(json).unwrap();

        assert_eq!(spec.language(), "de");
        assert_eq!(spec.num_sentences(), 3);
        assert_eq!(spec.stopwords.extra, vec!["ki"]);
        assert_eq!(spec.stopwords.remove, vec!["nicht"]);
        assert!(!spec.stopwords.punctuation);
        assert_eq!(spec.input.min_words, Some(50));
        assert!(spec.strict);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{
            "v": 1,
            "bogus_top_level": 42,
            "stopwords": { "bogus_stopword": true },
            "input": { "max_words": 10 }
        }"#;
        let spec = SummarizerSpec::from_json(json).unwrap();

        assert!(spec.unknown_fields.contains_key("bogus_top_level"));
        assert!(spec.stopwords.unknown_fields.contains_key("bogus_stopword"));
        assert!(spec.input.unknown_fields.contains_key("max_words"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = SummarizerSpec::from_json(r#"{ "v": 1, "num_sentences": -2 }"#).unwrap_err();
        assert!(matches!(err, SummarizeError::Json(_)));

        let err = SummarizerSpec::from_json("not json").unwrap_err();
        assert!(matches!(err, SummarizeError::Json(_)));
    }

    #[test]
    fn test_default_matches_minimal_json() {
        let spec = SummarizerSpec::default();

        assert_eq!(spec.v, SPEC_VERSION);
        assert!(spec.validate().is_empty());

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["v"], 1);
        assert_eq!(json["stopwords"]["punctuation"], true);
    }
}
