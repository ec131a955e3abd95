//! JSON configuration
//!
//! A [`SummarizerSpec`] is parsed with serde, checked by the
//! [`ValidationEngine`], and turned into a summarizer with
//! `Summarizer::from_spec`.

pub mod spec;
pub mod validation;

pub use spec::{InputSpec, StopwordSpec, SummarizerSpec};
pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
