//! triage-ai: keyword-based risk triage for patient-reported symptoms.
//!
//! The core is [`triage::Classifier`], a pure function from free text to a
//! LOW / MEDIUM / HIGH risk level. [`server`] exposes it as `POST /predict`.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod triage;

pub use error::{Result, TriageAiError};
