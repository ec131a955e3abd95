//! Validation engine for summarizer specifications.
//!
//! The engine runs every registered [`ValidationRule`] against a
//! [`SummarizerSpec`] and collects all diagnostics into a
//! [`ValidationReport`]. It never stops at the first error, so users see
//! all problems at once.

use std::collections::HashMap;

use serde::Serialize;

use super::spec::{SummarizerSpec, SPEC_VERSION};
use crate::errors::{ErrorCode, SpecError};
use crate::nlp::stopwords::Language;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A [`SpecError`] tagged with its severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    /// Hard error: the spec is rejected.
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    /// Soft warning: logged, the spec is still accepted.
    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Error-severity diagnostics, in rule order.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.with_severity(Severity::Error)
    }

    /// Warning-severity diagnostics, in rule order.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    /// At least one error-severity diagnostic.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No errors; warnings are acceptable.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Number of diagnostics of either severity.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// No diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule. Rules are stateless and shareable across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"version"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s and collects their diagnostics.
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(NumSentencesRule));
        engine.add_rule(Box::new(LanguageRule));
        engine.add_rule(Box::new(InputLimitsRule));
        engine.add_rule(Box::new(StopwordConflictRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Append a rule; rules run in insertion order.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run every rule against `spec`.
    pub fn validate(&self, spec: &SummarizerSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Only v1 specs are understood ────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set v to {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. At least one sentence ───────────────────────────────────────────────

struct NumSentencesRule;

impl ValidationRule for NumSentencesRule {
    fn name(&self) -> &str {
        "num_sentences"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        if spec.num_sentences != Some(0) {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::InvalidValue,
                "/num_sentences",
                "num_sentences must be at least 1",
            )
            .with_hint("Remove num_sentences to use the default of 5"),
        )]
    }
}

// ─── 3. Stopword language must be bundled ───────────────────────────────────

struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn name(&self) -> &str {
        "language"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        if spec.language().parse::<Language>().is_ok() {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnknownLanguage,
                "/language",
                format!("unknown language \"{}\"", spec.language()),
            )
            .with_hint(format!("Use one of: {}", Language::supported_codes())),
        )]
    }
}

// ─── 4. Input limits must be positive when set ──────────────────────────────

struct InputLimitsRule;

impl ValidationRule for InputLimitsRule {
    fn name(&self) -> &str {
        "input_limits"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        if spec.input.min_words != Some(0) {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::InvalidValue,
                "/input/min_words",
                "min_words must be greater than 0",
            )
            .with_hint("Remove min_words to disable the limit, or set it to a positive value"),
        )]
    }
}

// ─── 5. A word both added and removed ───────────────────────────────────────

struct StopwordConflictRule;

impl ValidationRule for StopwordConflictRule {
    fn name(&self) -> &str {
        "stopword_conflict"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        let removed: Vec<String> = spec
            .stopwords
            .remove
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        spec.stopwords
            .extra
            .iter()
            .enumerate()
            .filter(|(_, w)| removed.contains(&w.to_lowercase()))
            .map(|(i, w)| {
                ValidationDiagnostic::warning(
                    SpecError::new(
                        ErrorCode::InvalidValue,
                        format!("/stopwords/extra/{i}"),
                        format!("\"{w}\" is both added and removed; removal wins"),
                    )
                    .with_hint("List the word in only one of extra or remove"),
                )
            })
            .collect()
    }
}

// ─── 6. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();

        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &SummarizerSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/stopwords",
            &spec.stopwords.unknown_fields,
            spec.strict,
        ));
        out.extend(Self::check_unknowns(
            "/input",
            &spec.input.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
