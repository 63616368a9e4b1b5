//! Risk scoring and level mapping.

use crate::triage::config::ScoringConfig;
use crate::triage::types::RiskLevel;

/// Scoring engine turning keyword hits into a score and a level.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Raw score: red flags take precedence over mid flags.
    pub fn score(&self, red_hit: bool, mid_hit: bool) -> f64 {
        if red_hit {
            self.config.red_flag_score
        } else if mid_hit {
            self.config.mid_flag_score
        } else {
            self.config.base_score
        }
    }

    /// Map a score to a level, highest threshold first.
    pub fn level(&self, score: f64) -> RiskLevel {
        if score >= self.config.high_threshold {
            RiskLevel::High
        } else if score >= self.config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Round to the configured number of decimal places.
    pub fn round(&self, score: f64) -> f64 {
        let factor = 10f64.powi(self.config.decimal_places as i32);
        (score * factor).round() / factor
    }
}
