//! Keyword sets and text normalization.
//!
//! Terms are matched as plain substrings of the lower-cased symptom text.
//! A set keeps its terms in priority order so the reported match is the
//! earliest term in the list, not the leftmost one in the text.

use crate::error::{Result, TriageAiError};
use aho_corasick::AhoCorasick;

/// Terms indicating high-urgency symptoms.
pub const RED_FLAGS: &[&str] = &[
    "chest pain",
    "shortness of breath",
    "severe bleeding",
    "loss of consciousness",
    "stroke",
    "one-sided weakness",
];

/// Terms indicating moderate-urgency symptoms.
pub const MID_FLAGS: &[&str] = &[
    "fever",
    "dizziness",
    "vomiting",
    "persistent cough",
    "infection",
];

/// Lower-case free text for matching.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// An immutable, ordered keyword list backed by an Aho-Corasick automaton.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    terms: Vec<String>,
    automaton: AhoCorasick,
}

impl KeywordSet {
    /// Build a set from terms, lower-casing each one.
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| normalize(t.as_ref()))
            .collect();
        if let Some(pos) = terms.iter().position(|t| t.is_empty()) {
            return Err(TriageAiError::InvalidConfig(format!(
                "keyword at position {pos} is empty"
            )));
        }
        let automaton = AhoCorasick::new(&terms)?;
        Ok(Self { terms, automaton })
    }

    /// The built-in red-flag set.
    pub fn red_flags() -> Result<Self> {
        Self::new(RED_FLAGS)
    }

    /// The built-in mid-flag set.
    pub fn mid_flags() -> Result<Self> {
        Self::new(MID_FLAGS)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The first term, in list order, that occurs in already-normalized text.
    pub fn first_match(&self, normalized: &str) -> Option<&str> {
        self.automaton
            .find_overlapping_iter(normalized)
            .map(|m| m.pattern().as_usize())
            .min()
            .map(|idx| self.terms[idx].as_str())
    }
}
