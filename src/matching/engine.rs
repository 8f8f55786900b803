use crate::catalog::store::BacteriaCatalog;
use crate::core::outcome::QueryOutcome;
use crate::core::types::Stage;
use crate::external::ExternalLookup;
use crate::matching::local::LocalMatcher;
use crate::matching::suggest::{SuggestionEngine, DEFAULT_CUTOFF, DEFAULT_MAX_SUGGESTIONS};
use crate::utils::validation::validate_input;

/// Configuration for the query engine
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct QueryConfig {
    /// Minimum similarity for "did you mean" suggestions
    pub suggestion_cutoff: f64,
    /// Maximum number of suggestions
    pub max_suggestions: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            suggestion_cutoff: DEFAULT_CUTOFF,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Resolves a free-text query to exactly one [`QueryOutcome`].
///
/// Stages run in a fixed order and the first to succeed ends the query:
///
/// 1. local lookup in the curated catalog
/// 2. external lookup
/// 3. input validation (an invalid query ends here with its reason)
/// 4. "did you mean" suggestions
///
/// The engine holds no per-query state, so one catalog can serve any number of
/// concurrent queries.
pub struct QueryEngine<'a, E> {
    catalog: &'a BacteriaCatalog,
    external: &'a E,
    config: QueryConfig,
}

impl<'a, E: ExternalLookup + Sync> QueryEngine<'a, E> {
    /// Create a new query engine with default configuration
    pub fn new(catalog: &'a BacteriaCatalog, external: &'a E) -> Self {
        Self::with_config(catalog, external, QueryConfig::default())
    }

    /// Create a new query engine with custom configuration
    pub fn with_config(catalog: &'a BacteriaCatalog, external: &'a E, config: QueryConfig) -> Self {
        Self {
            catalog,
            external,
            config,
        }
    }

    /// Resolve a raw query
    pub async fn resolve(&self, raw: &str) -> QueryOutcome {
        tracing::debug!("{}: {:?}", Stage::LocalLookup, raw);
        if let Some(record) = LocalMatcher::new(self.catalog).find(raw) {
            tracing::debug!("Local hit: {}", record.key);
            return QueryOutcome::LocalHit {
                record: record.clone(),
            };
        }

        // Nothing to search for; validation reports the empty input
        if !raw.trim().is_empty() {
            tracing::debug!("{}: {:?}", Stage::ExternalLookup, raw);
            if let Some(result) = self.external.lookup(raw).await {
                tracing::debug!("External hit: {}", result.title);
                return QueryOutcome::ExternalHit { result };
            }
        }

        tracing::debug!("{}: {:?}", Stage::Validating, raw);
        if let Err(reason) = validate_input(raw, self.catalog) {
            tracing::debug!("Rejected: {:?}", reason);
            return QueryOutcome::Invalid {
                reason: reason.to_string(),
            };
        }

        tracing::debug!("{}: {:?}", Stage::Suggesting, raw);
        let suggestions = SuggestionEngine::new(self.catalog)
            .with_limits(self.config.suggestion_cutoff, self.config.max_suggestions)
            .suggest(raw);

        QueryOutcome::NotFound { suggestions }
    }
}
