//! Locale-aware string comparison.
//!
//! Follows the default (root locale) collation in three levels:
//! - primary: base letters, ignoring case and accents (`"Éwé"` sorts with `e`)
//! - secondary: unaccented before accented (`"e" < "é"`)
//! - tertiary: lowercase before uppercase (`"euro" < "Euro"`)
//!
//! Exact code point order only settles strings that are still equal.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case-folded key used for equality lookups.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Primary key: canonical decomposition with combining marks removed, lowercased.
fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Secondary key: lowercased decomposition, marks kept.
fn accent_key(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

/// Tertiary key: uppercase letters weigh more than lowercase ones.
fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// Compare two display strings for sorting.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Case-insensitive equality used by lookups.
pub fn equals_folded(a: &str, b: &str) -> bool {
    a == b || fold(a) == fold(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&'static str]) -> Vec<&'static str> {
        let mut words = words.to_vec();
        words.sort_by(|a, b| locale_cmp(a, b));
        words
    }

    #[test]
    fn case_is_tertiary_lowercase_first() {
        assert_eq!(
            sorted(&["banana", "Banana", "apple", "Cherry"]),
            vec!["apple", "banana", "Banana", "Cherry"]
        );
        assert_eq!(sorted(&["Euro", "euro"]), vec!["euro", "Euro"]);
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Zulu", "Éwé", "Afrikaans"]),
            vec!["Afrikaans", "Éwé", "Zulu"]
        );
        assert_eq!(
            sorted(&["Órganos", "ostrich", "Norway"]),
            vec!["Norway", "Órganos", "ostrich"]
        );
    }

    #[test]
    fn unaccented_before_accented() {
        assert_eq!(sorted(&["résumé", "resume"]), vec!["resume", "résumé"]);
    }

    #[test]
    fn folded_equality() {
        assert!(equals_folded("FRANCE", "france"));
        assert!(equals_folded("Åland Islands", "åland islands"));
        assert!(!equals_folded("France", "Franc"));
    }
}
