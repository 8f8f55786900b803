use serde::{Deserialize, Serialize};

/// Canonical key of a record in the catalog (lowercase scientific binomial)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(pub String);

impl RecordKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider of an external lookup result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLabel {
    Wikipedia,
}

impl std::fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wikipedia => write!(f, "Wikipedia"),
        }
    }
}

/// Stage of the query pipeline that produced (or failed to produce) an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LocalLookup,
    ExternalLookup,
    Validating,
    Suggesting,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalLookup => write!(f, "local lookup"),
            Self::ExternalLookup => write!(f, "external lookup"),
            Self::Validating => write!(f, "validating"),
            Self::Suggesting => write!(f, "suggesting"),
        }
    }
}

/// Title-case a name the way the presentation layer shows suggestions
/// ("e. coli" -> "E. Coli").
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
