use serde::{Deserialize, Serialize};

use crate::core::types::RecordKey;

/// A curated bacterium entry in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacteriumRecord {
    /// Canonical key, unique across the catalog
    pub key: RecordKey,

    /// Human-readable display name
    pub display_name: String,

    /// Short taxonomic description
    pub classification: String,

    /// Long-form description
    pub description: String,

    /// Common names and abbreviated forms, in match order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl BacteriumRecord {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        classification: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: RecordKey::new(key),
            display_name: display_name.into(),
            classification: classification.into(),
            description: description.into(),
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}
