use serde::{Deserialize, Serialize};

use crate::core::record::BacteriumRecord;
use crate::core::types::SourceLabel;

/// Summary retrieved from the external encyclopedic source.
///
/// Built per query and handed straight to the caller; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalResult {
    pub title: String,
    pub description: String,
    pub source_label: SourceLabel,
    pub source_url: String,
}

/// The single result of resolving one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// Found in the curated catalog
    LocalHit { record: BacteriumRecord },

    /// Found through the external lookup
    ExternalHit { result: ExternalResult },

    /// Rejected by the input validator
    Invalid { reason: String },

    /// Plausible but unknown; possibly empty "did you mean" list
    NotFound { suggestions: Vec<String> },
}

impl QueryOutcome {
    /// Short machine-friendly name of the variant
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LocalHit { .. } => "local_hit",
            Self::ExternalHit { .. } => "external_hit",
            Self::Invalid { .. } => "invalid",
            Self::NotFound { .. } => "not_found",
        }
    }
}
