//! Symptom triage: keyword matching, scoring and level mapping.
//!
//! The classifier is a pure function of the request text and two immutable
//! keyword sets; everything else in the crate wraps it.

pub mod classifier;
pub mod config;
pub mod keywords;
pub mod score;
pub mod types;

pub use classifier::{classify, Classifier};
pub use config::{KeywordConfig, ScoringConfig, TriageConfig};
pub use keywords::{KeywordSet, MID_FLAGS, RED_FLAGS};
pub use score::ScoreEngine;
pub use types::{RiskLevel, Sex, TriageRequest, TriageResult, MODEL_VERSION};
