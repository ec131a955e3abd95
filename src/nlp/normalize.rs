//! Text normalization
//!
//! Collapses whitespace and strips bracketed annotations such as
//! `[citation needed]` or `[12]` before segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").expect("valid regex"));

/// Normalize raw document text.
///
/// Runs of whitespace become a single space, every `[...]` span is removed
/// (non-greedy, so `[a] b [c]` keeps ` b `), and the result is trimmed.
/// Whitespace is collapsed a second time after removal so an annotation
/// between two words never leaves a double space behind.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let stripped = BRACKETED.replace_all(&collapsed, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}
