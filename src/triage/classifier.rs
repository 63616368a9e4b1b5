//! Keyword-based symptom classifier.

use crate::error::Result;
use crate::triage::config::TriageConfig;
use crate::triage::keywords::{normalize, KeywordSet};
use crate::triage::score::ScoreEngine;
use crate::triage::types::{TriageRequest, TriageResult};
use once_cell::sync::Lazy;
use tracing::debug;

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| {
    Classifier::new(&TriageConfig::default()).expect("built-in keyword sets are valid")
});

/// Assigns a risk level to free-text symptoms.
///
/// Holds only immutable data, so one instance can be shared across threads
/// and requests.
#[derive(Debug, Clone)]
pub struct Classifier {
    red_flags: KeywordSet,
    mid_flags: KeywordSet,
    engine: ScoreEngine,
}

impl Classifier {
    /// Build a classifier after validating the configuration.
    pub fn new(config: &TriageConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            red_flags: KeywordSet::new(&config.keywords.red_flags)?,
            mid_flags: KeywordSet::new(&config.keywords.mid_flags)?,
            engine: ScoreEngine::new(config.scoring.clone()),
        })
    }

    pub fn red_flags(&self) -> &KeywordSet {
        &self.red_flags
    }

    pub fn mid_flags(&self) -> &KeywordSet {
        &self.mid_flags
    }

    /// Classify one request. Never fails; empty text scores as LOW.
    pub fn classify(&self, request: &TriageRequest) -> TriageResult {
        let text = normalize(&request.text);

        let red = self.red_flags.first_match(&text);
        let mid = match red {
            Some(_) => None,
            None => self.mid_flags.first_match(&text),
        };

        let raw = self.engine.score(red.is_some(), mid.is_some());
        let level = self.engine.level(raw);
        let result = TriageResult::new(level, self.engine.round(raw));

        debug!(
            risk_level = %level,
            risk_score = result.risk_score,
            matched = red.or(mid).unwrap_or(""),
            text_len = request.text.len(),
            "Classified symptom text"
        );
        result
    }
}

/// Classify with the built-in keyword sets and scoring.
pub fn classify(request: &TriageRequest) -> TriageResult {
    DEFAULT_CLASSIFIER.classify(request)
}
