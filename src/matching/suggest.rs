use std::collections::HashSet;

use crate::catalog::store::BacteriaCatalog;
use crate::matching::similarity::ratio;

/// Default minimum similarity for a "did you mean" candidate
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Default number of suggestions returned
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// A candidate name with its similarity to the query
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredName {
    pub name: String,
    pub score: f64,
}

/// Produces "did you mean" candidates from catalog keys and aliases
pub struct SuggestionEngine<'a> {
    catalog: &'a BacteriaCatalog,
    cutoff: f64,
    max_suggestions: usize,
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(catalog: &'a BacteriaCatalog) -> Self {
        Self {
            catalog,
            cutoff: DEFAULT_CUTOFF,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    #[must_use]
    pub fn with_limits(mut self, cutoff: f64, max_suggestions: usize) -> Self {
        self.cutoff = cutoff;
        self.max_suggestions = max_suggestions;
        self
    }

    /// Ranked candidate names for a raw query
    pub fn suggest(&self, raw: &str) -> Vec<String> {
        self.ranked(raw).into_iter().map(|s| s.name).collect()
    }

    /// Candidates scoring at or above the cutoff, best first.
    ///
    /// Each name is scored as `ratio(name, query)` against the lowercased query.
    /// Equal scores keep catalog enumeration order (key, then aliases, record by record).
    pub fn ranked(&self, raw: &str) -> Vec<ScoredName> {
        let query = raw.to_lowercase();
        let mut seen = HashSet::new();

        let mut scored: Vec<ScoredName> = self
            .catalog
            .names()
            .filter(|name| seen.insert(*name))
            .map(|name| ScoredName {
                name: name.to_string(),
                score: ratio(name, &query),
            })
            .filter(|s| s.score >= self.cutoff)
            .collect();

        // Stable sort keeps enumeration order among ties
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.max_suggestions);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> BacteriaCatalog {
        BacteriaCatalog::load_embedded().unwrap()
    }

    #[test]
    fn test_close_misspelling() {
        let catalog = embedded();
        let engine = SuggestionEngine::new(&catalog);

        assert_eq!(
            engine.suggest("vibrio cholera"),
            vec!["vibrio cholerae", "vibrio bacteria", "v cholerae"]
        );
        assert_eq!(
            engine.suggest("Helicobacter pylory"),
            vec!["helicobacter pylori", "helicobacter"]
        );
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        let catalog = embedded();
        let engine = SuggestionEngine::new(&catalog);

        // "staphylococcus aureus" and "s. aureus" both score 2/3
        assert_eq!(
            engine.suggest("staph aurius"),
            vec!["staph aureus", "staphylococcus aureus", "s. aureus"]
        );
    }

    #[test]
    fn test_candidate_scored_against_query() {
        let catalog = embedded();
        let engine = SuggestionEngine::new(&catalog);

        assert_eq!(
            engine.suggest("lbcillus"),
            vec!["bacillus", "hay bacillus", "grass bacillus"]
        );
        // "bacillus" scores 2/3 as candidate-vs-query, 7/12 the other way round
        assert_eq!(
            engine.suggest("bacill. subtilis"),
            vec!["bacillus subtilis", "b. subtilis", "bacillus"]
        );
    }

    #[test]
    fn test_no_suggestions_for_unrelated_text() {
        let catalog = embedded();
        let engine = SuggestionEngine::new(&catalog);

        assert!(engine.suggest("Fakeobacterium zzq").is_empty());
        assert!(engine.suggest("salmonella enterica").is_empty());
    }

    #[test]
    fn test_ranked_invariants() {
        let catalog = embedded();
        let engine = SuggestionEngine::new(&catalog);

        for query in ["strep pneumonia", "lactobacilus", "e. colli", "bacilus", "myco"] {
            let ranked = engine.ranked(query);
            assert!(ranked.len() <= DEFAULT_MAX_SUGGESTIONS);
            for s in &ranked {
                assert!(s.score >= DEFAULT_CUTOFF, "{query}: {s:?}");
                assert!((ratio(&s.name, &query.to_lowercase()) - s.score).abs() < 1e-12);
            }
            for pair in ranked.windows(2) {
                assert!(pair[0].score >= pair[1].score, "{query}: {ranked:?}");
            }
        }
    }

    #[test]
    fn test_duplicate_names_suggested_once() {
        // "bacillus subtilis" is both a key and an alias
        let catalog = embedded();
        let engine = SuggestionEngine::new(&catalog).with_limits(0.0, usize::MAX);

        let names = engine.suggest("bacillus subtilis");
        let occurrences = names.iter().filter(|n| *n == "bacillus subtilis").count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn test_custom_limits() {
        let catalog = embedded();
        let engine = SuggestionEngine::new(&catalog).with_limits(0.9, 1);
        assert_eq!(engine.suggest("e. colli"), vec!["e. coli"]);
    }
}
