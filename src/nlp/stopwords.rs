//! Stopword filtering
//!
//! Language stopword lists are the NLTK lists shipped by the `stop-words`
//! crate (its `nltk` feature). The summarizer merges them with the ASCII
//! punctuation symbols so a single lookup rejects both kinds of non-content
//! token.

use std::str::FromStr;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::errors::SummarizeError;

/// ASCII punctuation symbols, each treated as a one-character stopword.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Languages with a bundled stopword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Hungarian,
    Turkish,
    Arabic,
}

impl Language {
    /// Every language with a bundled list.
    pub const ALL: [Language; 15] = [
        Self::English,
        Self::German,
        Self::French,
        Self::Spanish,
        Self::Italian,
        Self::Portuguese,
        Self::Dutch,
        Self::Russian,
        Self::Swedish,
        Self::Norwegian,
        Self::Danish,
        Self::Finnish,
        Self::Hungarian,
        Self::Turkish,
        Self::Arabic,
    ];

    /// Comma-separated ISO codes of [`Language::ALL`], for messages.
    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(Language::code)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Dutch => "nl",
            Self::Russian => "ru",
            Self::Swedish => "sv",
            Self::Norwegian => "no",
            Self::Danish => "da",
            Self::Finnish => "fi",
            Self::Hungarian => "hu",
            Self::Turkish => "tr",
            Self::Arabic => "ar",
        }
    }

    /// Matching `stop-words` list selector.
    fn stop_words_language(&self) -> LANGUAGE {
        match self {
            Self::English => LANGUAGE::English,
            Self::German => LANGUAGE::German,
            Self::French => LANGUAGE::French,
            Self::Spanish => LANGUAGE::Spanish,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
            Self::Dutch => LANGUAGE::Dutch,
            Self::Russian => LANGUAGE::Russian,
            Self::Swedish => LANGUAGE::Swedish,
            Self::Norwegian => LANGUAGE::Norwegian,
            Self::Danish => LANGUAGE::Danish,
            Self::Finnish => LANGUAGE::Finnish,
            Self::Hungarian => LANGUAGE::Hungarian,
            Self::Turkish => LANGUAGE::Turkish,
            Self::Arabic => LANGUAGE::Arabic,
        }
    }
}

impl FromStr for Language {
    type Err = SummarizeError;

    /// Accepts ISO codes and English names, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lang = match value.trim().to_lowercase().as_str() {
            "en" | "english" => Self::English,
            "de" | "german" => Self::German,
            "fr" | "french" => Self::French,
            "es" | "spanish" => Self::Spanish,
            "it" | "italian" => Self::Italian,
            "pt" | "portuguese" => Self::Portuguese,
            "nl" | "dutch" => Self::Dutch,
            "ru" | "russian" => Self::Russian,
            "sv" | "swedish" => Self::Swedish,
            "no" | "norwegian" => Self::Norwegian,
            "da" | "danish" => Self::Danish,
            "fi" | "finnish" => Self::Finnish,
            "hu" | "hungarian" => Self::Hungarian,
            "tr" | "turkish" => Self::Turkish,
            "ar" | "arabic" => Self::Arabic,
            _ => return Err(SummarizeError::UnsupportedLanguage(value.to_string())),
        };
        Ok(lang)
    }
}

/// Set of words excluded from frequency scoring
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Stopwords, lowercased unless the filter is case-sensitive
    stopwords: FxHashSet<String>,
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    /// English stopwords plus punctuation.
    fn default() -> Self {
        Self::new(Language::English).with_punctuation()
    }
}

impl StopwordFilter {
    /// Stopwords for `language`, without punctuation.
    pub fn new(language: Language) -> Self {
        let stopwords = get(language.stop_words_language())
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Parse `language` and load its list.
    pub fn for_language(language: &str) -> Result<Self, SummarizeError> {
        Ok(Self::new(language.parse()?))
    }

    /// Filter that excludes nothing.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Filter holding exactly `words`, lowercased.
    pub fn from_list(words: &[&str]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Merge the [`PUNCTUATION`] symbols into the set.
    pub fn with_punctuation(mut self) -> Self {
        self.stopwords
            .extend(PUNCTUATION.chars().map(|c| c.to_string()));
        self
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
