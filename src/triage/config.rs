//! Configuration for the triage classifier.
//!
//! Keyword lists and scoring constants with defaults that reproduce the
//! fixed v0.1 behaviour. Every field can be overridden from a config file.

use crate::error::{Result, TriageAiError};
use crate::triage::keywords::{MID_FLAGS, RED_FLAGS};
use serde::{Deserialize, Serialize};

/// Master configuration for the classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Keyword lists matched against the normalized text.
    pub keywords: KeywordConfig,
    /// Scores, thresholds and output rounding.
    pub scoring: ScoringConfig,
}

impl TriageConfig {
    /// Reject values that cannot produce a sensible classifier.
    pub fn validate(&self) -> Result<()> {
        self.keywords.validate()?;
        self.scoring.validate()
    }
}

/// Keyword lists, in match priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Terms signalling high-urgency symptoms.
    pub red_flags: Vec<String>,
    /// Terms signalling moderate-urgency symptoms.
    pub mid_flags: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            red_flags: RED_FLAGS.iter().map(|s| s.to_string()).collect(),
            mid_flags: MID_FLAGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl KeywordConfig {
    fn validate(&self) -> Result<()> {
        for (list, terms) in [("red_flags", &self.red_flags), ("mid_flags", &self.mid_flags)] {
            if let Some(pos) = terms.iter().position(|t| t.trim().is_empty()) {
                return Err(TriageAiError::InvalidConfig(format!(
                    "{list}[{pos}] is empty"
                )));
            }
        }
        Ok(())
    }
}

/// Scoring and level-mapping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Score when no keyword matches (default: 0.2).
    pub base_score: f64,
    /// Score when any red flag matches (default: 0.85).
    pub red_flag_score: f64,
    /// Score when a mid flag matches and no red flag does (default: 0.55).
    pub mid_flag_score: f64,
    /// Scores at or above this map to HIGH (default: 0.75).
    pub high_threshold: f64,
    /// Scores at or above this, below `high_threshold`, map to MEDIUM (default: 0.45).
    pub medium_threshold: f64,
    /// Decimal places kept in the reported score (default: 3).
    pub decimal_places: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 0.2,
            red_flag_score: 0.85,
            mid_flag_score: 0.55,
            high_threshold: 0.75,
            medium_threshold: 0.45,
            decimal_places: 3,
        }
    }
}

impl ScoringConfig {
    /// Largest supported rounding precision.
    pub const MAX_DECIMAL_PLACES: u32 = 6;

    fn validate(&self) -> Result<()> {
        let unit = [
            ("base_score", self.base_score),
            ("red_flag_score", self.red_flag_score),
            ("mid_flag_score", self.mid_flag_score),
            ("high_threshold", self.high_threshold),
            ("medium_threshold", self.medium_threshold),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(TriageAiError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.medium_threshold > self.high_threshold {
            return Err(TriageAiError::InvalidConfig(format!(
                "medium_threshold ({}) exceeds high_threshold ({})",
                self.medium_threshold, self.high_threshold
            )));
        }
        if self.decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(TriageAiError::InvalidConfig(format!(
                "decimal_places must be at most {}, got {}",
                Self::MAX_DECIMAL_PLACES,
                self.decimal_places
            )));
        }
        Ok(())
    }
}
