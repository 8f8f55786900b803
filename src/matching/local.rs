use crate::catalog::store::BacteriaCatalog;
use crate::core::record::BacteriumRecord;
use crate::matching::normalize::{strip_dots, NormalizedQuery};

/// Finds the curated record a query refers to.
///
/// A query matches when it is a substring of an alias (literally or with periods
/// removed on both sides), the canonical key, or the display name. Records are
/// tried in catalog order and the first match wins, so a query that is a
/// substring of names in several records resolves to the earliest one.
pub struct LocalMatcher<'a> {
    records: &'a [BacteriumRecord],
}

impl<'a> LocalMatcher<'a> {
    pub fn new(catalog: &'a BacteriaCatalog) -> Self {
        Self::from_records(&catalog.records)
    }

    pub fn from_records(records: &'a [BacteriumRecord]) -> Self {
        Self { records }
    }

    /// Find the first record matching a raw query
    pub fn find(&self, raw: &str) -> Option<&'a BacteriumRecord> {
        self.find_normalized(&NormalizedQuery::new(raw))
    }

    pub fn find_normalized(&self, query: &NormalizedQuery) -> Option<&'a BacteriumRecord> {
        // An empty needle is contained in everything
        if query.is_empty() {
            return None;
        }

        self.records
            .iter()
            .find(|record| record_matches(record, query))
    }
}

fn record_matches(record: &BacteriumRecord, query: &NormalizedQuery) -> bool {
    let alias_hit = record.aliases.iter().any(|alias| {
        let alias = alias.to_lowercase();
        if alias.contains(&query.lower) {
            return true;
        }
        !query.no_dots.is_empty() && strip_dots(&alias).contains(&query.no_dots)
    });

    alias_hit
        || record.key.as_str().to_lowercase().contains(&query.lower)
        || record.display_name.to_lowercase().contains(&query.lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> BacteriaCatalog {
        BacteriaCatalog::load_embedded().unwrap()
    }

    fn key_of(record: Option<&BacteriumRecord>) -> Option<&str> {
        record.map(|r| r.key.as_str())
    }

    #[test]
    fn test_every_key_resolves_to_its_record() {
        let catalog = embedded();
        let matcher = LocalMatcher::new(&catalog);

        for record in &catalog.records {
            let found = matcher.find(record.key.as_str());
            assert_eq!(key_of(found), Some(record.key.as_str()));
        }
    }

    #[test]
    fn test_aliases_resolve_any_case() {
        let catalog = embedded();
        let matcher = LocalMatcher::new(&catalog);

        for record in &catalog.records {
            for alias in &record.aliases {
                // The earliest record containing this alias as a substring wins
                let expected = catalog
                    .records
                    .iter()
                    .find(|r| record_matches(r, &NormalizedQuery::new(alias)))
                    .map(|r| r.key.as_str());

                assert_eq!(key_of(matcher.find(&alias.to_uppercase())), expected);
                assert_eq!(key_of(matcher.find(alias)), expected);
            }
        }
    }

    #[test]
    fn test_dot_insensitive_alias() {
        let catalog = embedded();
        let matcher = LocalMatcher::new(&catalog);

        assert_eq!(key_of(matcher.find("e coli")), Some("escherichia coli"));
        assert_eq!(key_of(matcher.find("E. coli")), Some("escherichia coli"));
        assert_eq!(key_of(matcher.find("s aureus")), Some("staphylococcus aureus"));
    }

    #[test]
    fn test_display_name_substring() {
        let catalog = embedded();
        let matcher = LocalMatcher::new(&catalog);

        assert_eq!(
            key_of(matcher.find("Mycobacterium")),
            Some("mycobacterium tuberculosis")
        );
    }

    #[test]
    fn test_earlier_record_wins_shared_substring() {
        // "bacillus" is an alias of bacillus subtilis, but "tubercle bacillus"
        // and "lactobacillus acidophilus" also contain it. Bacillus subtilis
        // precedes them in the embedded catalog.
        let catalog = embedded();
        let matcher = LocalMatcher::new(&catalog);
        assert_eq!(key_of(matcher.find("bacillus")), Some("bacillus subtilis"));

        let reordered = BacteriaCatalog::from_records([
            BacteriumRecord::new("second", "Second", "c", "d").with_aliases(["shared name"]),
            BacteriumRecord::new("first", "First", "c", "d").with_aliases(["shared"]),
        ])
        .unwrap();
        let matcher = LocalMatcher::new(&reordered);
        assert_eq!(key_of(matcher.find("shared")), Some("second"));
    }

    #[test]
    fn test_blank_and_dot_only_queries_never_match() {
        let catalog = embedded();
        let matcher = LocalMatcher::new(&catalog);

        assert!(matcher.find("").is_none());
        assert!(matcher.find("   ").is_none());
        // "." dot-strips to empty; only its literal form is compared
        assert!(matcher.find("..").is_none());
    }

    #[test]
    fn test_unknown_query_misses() {
        let catalog = embedded();
        let matcher = LocalMatcher::new(&catalog);
        assert!(matcher.find("Fakeobacterium zzq").is_none());
    }
}
