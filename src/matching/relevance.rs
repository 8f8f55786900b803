use regex::Regex;
use std::sync::OnceLock;

use crate::catalog::store::BacteriaCatalog;

/// Fragments whose presence marks a query as bacteria-related
pub const BACTERIA_TERMS: &[&str] = &[
    "bacteria",
    "bacterium",
    "bacillus",
    "coccus",
    "vibrio",
    "streptococcus",
    "staphylococcus",
    "mycobacterium",
    "clostridium",
    "lactobacillus",
    "pseudomonas",
    "escherichia",
    "helicobacter",
];

/// "Genus species": two words separated by whitespace
fn two_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w+\s+\w+").expect("two-token regex must compile"))
}

/// Abbreviated genus such as "E. coli" or "s.aureus"
fn abbreviated_genus_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-z]\.\s*\w+").expect("abbreviated genus regex must compile")
    })
}

/// Heuristic gate deciding whether an unmatched query plausibly names a bacterium.
///
/// Errs towards accepting: any two-word phrase passes, while real bacterial names
/// are rarely rejected.
pub struct RelevanceClassifier<'a> {
    catalog: &'a BacteriaCatalog,
}

impl<'a> RelevanceClassifier<'a> {
    pub fn new(catalog: &'a BacteriaCatalog) -> Self {
        Self { catalog }
    }

    pub fn is_bacteria_related(&self, raw: &str) -> bool {
        let lower = raw.to_lowercase();

        contains_bacteria_term(&lower)
            || has_scientific_name_shape(raw)
            || self.overlaps_catalog(&lower)
    }

    /// Query is a substring of a key or alias, or contains one
    fn overlaps_catalog(&self, lower: &str) -> bool {
        if lower.trim().is_empty() {
            return false;
        }
        self.catalog.names().any(|name| {
            let name = name.to_lowercase();
            name.contains(lower) || lower.contains(&name)
        })
    }
}

#[must_use]
pub fn contains_bacteria_term(lower: &str) -> bool {
    BACTERIA_TERMS.iter().any(|term| lower.contains(term))
}

#[must_use]
pub fn has_scientific_name_shape(raw: &str) -> bool {
    two_token_re().is_match(raw) || abbreviated_genus_re().is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(query: &str) -> bool {
        let catalog = BacteriaCatalog::load_embedded().unwrap();
        RelevanceClassifier::new(&catalog).is_bacteria_related(query)
    }

    #[test]
    fn test_indicative_terms() {
        assert!(classify("Fakeobacterium"));
        assert!(classify("Enterococcus"));
        assert!(classify("CLOSTRIDIUM"));
    }

    #[test]
    fn test_two_token_shape() {
        assert!(classify("Salmonella enterica"));
        // Non-bacteria two-word phrases pass too
        assert!(classify("hello world"));
        assert!(!has_scientific_name_shape(" leading space"));
    }

    #[test]
    fn test_abbreviated_genus_shape() {
        assert!(classify("Y. pestis"));
        assert!(classify("y.pestis"));
        assert!(has_scientific_name_shape("E. coli"));
        assert!(!has_scientific_name_shape("Yp"));
    }

    #[test]
    fn test_catalog_overlap() {
        // Substring of the "pneumococcus" alias, and no other rule applies
        assert!(classify("pneumo"));
        // Contains the "mtb" alias
        assert!(classify("xmtbx"));
    }

    #[test]
    fn test_unrelated_single_words() {
        assert!(!classify("banana"));
        assert!(!classify("Salmonella"));
        assert!(!classify("Listeria"));
    }

    #[test]
    fn test_blank_is_not_relevant() {
        assert!(!classify(""));
    }
}
