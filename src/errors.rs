//! Error types.
//!
//! [`SummarizeError`] is what the fallible entry points return. Spec
//! validation findings are carried as [`SpecError`]s, each with a stable
//! [`ErrorCode`], a JSON-pointer path, a message and an optional hint.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors returned by the fallible summarizer entry points.
///
/// The plain [`crate::summarize`] call never fails; these errors come from
/// the input gate and from building a summarizer out of a JSON spec.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("no text to summarize")]
    EmptyInput,

    #[error("text is too short to summarize: {words} words, at least {min_words} required")]
    TooShort { words: usize, min_words: usize },

    #[error("unsupported stopword language \"{0}\"")]
    UnsupportedLanguage(String),

    #[error("invalid summarizer spec: {}", join_errors(.0))]
    InvalidSpec(Vec<SpecError>),

    #[error("malformed summarizer spec: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_errors(errors: &[SpecError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Stable machine-readable code for a spec finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnsupportedVersion,
    InvalidValue,
    UnknownLanguage,
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidValue => "invalid_value",
            Self::UnknownLanguage => "unknown_language",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in a [`crate::config::SummarizerSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecError {
    pub code: ErrorCode,
    /// JSON pointer to the offending field, e.g. `/input/min_words`.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " ({hint})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_error_display_with_hint() {
        let err = SpecError::new(ErrorCode::InvalidValue, "/num_sentences", "must be at least 1")
            .with_hint("Set num_sentences to a positive value");

        assert_eq!(
            err.to_string(),
            "[invalid_value] /num_sentences: must be at least 1 (Set num_sentences to a positive value)"
        );
    }

    #[test]
    fn test_invalid_spec_lists_every_error() {
        let err = SummarizeError::InvalidSpec(vec![
            SpecError::new(ErrorCode::UnsupportedVersion, "/v", "unsupported spec version 2"),
            SpecError::new(ErrorCode::UnknownLanguage, "/language", "unknown language \"xx\""),
        ]);

        let msg = err.to_string();
        assert!(msg.contains("/v"));
        assert!(msg.contains("/language"));
    }

    #[test]
    fn test_error_code_serializes_snake_case() {
        let json = serde_json::to_value(ErrorCode::UnknownField).unwrap();
        assert_eq!(json, "unknown_field");
    }

    #[test]
    fn test_too_short_message() {
        let err = SummarizeError::TooShort {
            words: 12,
            min_words: 50,
        };
        assert_eq!(
            err.to_string(),
            "text is too short to summarize: 12 words, at least 50 required"
        );
    }
}
