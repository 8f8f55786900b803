//! Input validation for free-text bacteria queries.

use crate::catalog::store::BacteriaCatalog;
use crate::matching::relevance::RelevanceClassifier;

/// Reasons a query is rejected, in the order the rules are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter a bacteria name.")]
    Empty,
    #[error("Bacteria names typically don't contain numbers. Please check your input.")]
    ContainsDigits,
    #[error(
        "Invalid characters detected. Bacteria names usually only contain letters, spaces, dots, and hyphens."
    )]
    InvalidCharacters,
    #[error(
        "Please enter a valid bacteria name. Your query doesn't appear to be related to bacteria."
    )]
    NotBacteriaRelated,
}

/// Characters allowed in a bacteria name besides ASCII letters and whitespace
fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || c == '.' || c == '-'
}

/// Validate a raw query; the first failing rule wins.
///
/// # Examples
///
/// ```
/// use bactopedia::BacteriaCatalog;
/// use bactopedia::utils::validation::{validate_input, InputError};
///
/// let catalog = BacteriaCatalog::load_embedded().unwrap();
/// assert_eq!(validate_input("E coli 2", &catalog), Err(InputError::ContainsDigits));
/// assert_eq!(validate_input("E. coli", &catalog), Ok(()));
/// ```
///
/// # Errors
///
/// Returns the [`InputError`] of the first rule the query breaks.
pub fn validate_input(raw: &str, catalog: &BacteriaCatalog) -> Result<(), InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::Empty);
    }

    if raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(InputError::ContainsDigits);
    }

    if !raw.chars().all(is_allowed_char) {
        return Err(InputError::InvalidCharacters);
    }

    if !RelevanceClassifier::new(catalog).is_bacteria_related(raw) {
        return Err(InputError::NotBacteriaRelated);
    }

    Ok(())
}
