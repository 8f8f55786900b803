//! Query normalization shared by the matcher and the suggestion engine.

/// A query in the forms used for comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Trimmed and lowercased
    pub lower: String,

    /// `lower` with periods removed, so "e. coli" compares as "e coli"
    pub no_dots: String,
}

impl NormalizedQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let lower = normalize(raw);
        let no_dots = strip_dots(&lower);
        Self { lower, no_dots }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

/// Trim surrounding whitespace and lowercase
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Remove periods and re-trim
#[must_use]
pub fn strip_dots(s: &str) -> String {
    s.replace('.', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  E. Coli \n"), "e. coli");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_strip_dots() {
        assert_eq!(strip_dots("e. coli"), "e coli");
        assert_eq!(strip_dots("s.aureus."), "saureus");
        assert_eq!(strip_dots(". vibrio"), "vibrio");
    }

    #[test]
    fn test_normalized_query() {
        let q = NormalizedQuery::new(" H. Pylori ");
        assert_eq!(q.lower, "h. pylori");
        assert_eq!(q.no_dots, "h pylori");
        assert!(!q.is_empty());
        assert!(NormalizedQuery::new("  ").is_empty());
    }
}
