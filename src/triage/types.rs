//! Request and result types for symptom triage.
//!
//! Plain serde value types; the HTTP layer decodes into them before the
//! classifier runs.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Version tag reported with every result.
pub const MODEL_VERSION: &str = "v0.1";

/// Discrete triage category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Fixed explanation reported with the level.
    pub fn rationale(&self) -> &'static str {
        match self {
            RiskLevel::High => "Red-flag indicators detected.",
            RiskLevel::Medium => "Moderate risk indicators present.",
            RiskLevel::Low => "No red-flag indicators detected.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient sex as reported by the caller. Unknown codes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    F,
    M,
    X,
    Unrecognized(String),
}

impl From<String> for Sex {
    fn from(s: String) -> Self {
        match s.as_str() {
            "F" => Sex::F,
            "M" => Sex::M,
            "X" => Sex::X,
            _ => Sex::Unrecognized(s),
        }
    }
}

impl From<Sex> for String {
    fn from(s: Sex) -> Self {
        match s {
            Sex::F => "F".into(),
            Sex::M => "M".into(),
            Sex::X => "X".into(),
            Sex::Unrecognized(other) => other,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Free-text symptoms plus optional demographics.
///
/// `age` and `sex` are accepted for callers that send them but do not
/// influence scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub sex: Option<Sex>,
}

impl TriageRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }
}

/// Classification outcome returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub risk_level: RiskLevel,
    /// Score in [0, 1], rounded for output.
    pub risk_score: f64,
    pub rationale: String,
    pub model_version: String,
}

impl TriageResult {
    pub fn new(risk_level: RiskLevel, risk_score: f64) -> Self {
        Self {
            risk_level,
            risk_score,
            rationale: risk_level.rationale().to_string(),
            model_version: MODEL_VERSION.to_string(),
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
