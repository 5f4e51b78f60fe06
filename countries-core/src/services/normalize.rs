//! Field normalization
//!
//! Turns the optional, irregularly shaped fields of a [`CountryRecord`] into
//! display-ready lists. Absent fields degrade to empty lists (or `None` for the
//! top-level domain); nothing here fails.

use std::collections::{BTreeMap, HashSet};

use crate::types::{CountryRecord, Currency, NativeName};
use crate::utils::collation::locale_cmp;

/// Display-ready projection of one record, recomputed on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedView {
    /// Currency names, sorted
    pub currencies: Vec<String>,
    /// Common native names, without duplicates
    pub native_names: Vec<String>,
    /// Language names, sorted
    pub languages: Vec<String>,
    /// First top-level domain, if any
    pub domain: Option<String>,
    /// Capitals, empty when missing
    pub capitals: Vec<String>,
}

impl NormalizedView {
    /// Normalize the relevant fields of `record`.
    pub fn from_record(record: &CountryRecord) -> Self {
        normalize(
            record.currencies.as_ref(),
            record.native_names.as_ref(),
            record.languages.as_ref(),
            record.top_level_domains.as_deref(),
            record.capitals.as_deref(),
        )
    }
}

/// Build a [`NormalizedView`] from raw record fields.
pub fn normalize(
    currencies: Option<&BTreeMap<String, Currency>>,
    native_names: Option<&BTreeMap<String, NativeName>>,
    languages: Option<&BTreeMap<String, String>>,
    top_level_domains: Option<&[String]>,
    capitals: Option<&[String]>,
) -> NormalizedView {
    let currencies = currencies
        .map(|map| sorted(map.values().map(|c| c.name.clone())))
        .unwrap_or_default();

    let native_names = native_names
        .map(|map| {
            let mut seen = HashSet::new();
            map.values()
                .filter(|n| seen.insert(n.common.as_str()))
                .map(|n| n.common.clone())
                .collect()
        })
        .unwrap_or_default();

    let languages = languages
        .map(|map| sorted(map.values().cloned()))
        .unwrap_or_default();

    let domain = top_level_domains.and_then(|tlds| tlds.first().cloned());

    let capitals = capitals.map(<[String]>::to_vec).unwrap_or_default();

    NormalizedView {
        currencies,
        native_names,
        languages,
        domain,
        capitals,
    }
}

fn sorted(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut items: Vec<String> = items.collect();
    items.sort_by(|a, b| locale_cmp(a, b));
    items
}

/// Pick the label for a list of `count` items.
///
/// Only a single item takes the singular form; an empty list reads as plural.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{currency, native, sample_countries, strings};

    fn view_with(
        currencies: Option<BTreeMap<String, Currency>>,
        natives: Option<BTreeMap<String, NativeName>>,
    ) -> NormalizedView {
        normalize(currencies.as_ref(), natives.as_ref(), None, None, None)
    }

    #[test]
    fn currencies_sorted_by_name() {
        let map = BTreeMap::from([
            ("a".to_string(), currency("Euro", "€")),
            ("b".to_string(), currency("Dollar", "$")),
        ]);
        assert_eq!(view_with(Some(map), None).currencies, vec!["Dollar", "Euro"]);
    }

    #[test]
    fn currency_sort_is_case_insensitive() {
        let map = BTreeMap::from([
            ("x".to_string(), currency("pound sterling", "£")),
            ("y".to_string(), currency("Manx pound", "£")),
        ]);
        assert_eq!(
            view_with(Some(map), None).currencies,
            vec!["Manx pound", "pound sterling"]
        );
    }

    #[test]
    fn native_names_deduplicated() {
        let map = BTreeMap::from([
            ("de".to_string(), native("Germany")),
            ("en".to_string(), native("Germany")),
        ]);
        assert_eq!(view_with(None, Some(map)).native_names, vec!["Germany"]);
    }

    #[test]
    fn native_names_keep_first_seen_order() {
        let map = BTreeMap::from([
            ("fra".to_string(), native("Suisse")),
            ("gsw".to_string(), native("Schweiz")),
            ("ita".to_string(), native("Svizzera")),
            ("roh".to_string(), native("Schweiz")),
        ]);
        assert_eq!(
            view_with(None, Some(map)).native_names,
            vec!["Suisse", "Schweiz", "Svizzera"]
        );
    }

    #[test]
    fn languages_sorted() {
        let ch = &sample_countries()[2];
        let view = NormalizedView::from_record(ch);
        assert_eq!(
            view.languages,
            vec!["French", "Italian", "Romansh", "Swiss German"]
        );
    }

    #[test]
    fn accented_languages_sort_with_base_letter() {
        let languages = BTreeMap::from([
            ("afr".to_string(), "Afrikaans".to_string()),
            ("ewe".to_string(), "Éwé".to_string()),
            ("zul".to_string(), "Zulu".to_string()),
        ]);
        let view = normalize(None, None, Some(&languages), None, None);
        assert_eq!(view.languages, vec!["Afrikaans", "Éwé", "Zulu"]);
    }

    #[test]
    fn case_only_tie_puts_lowercase_first() {
        let map = BTreeMap::from([
            ("a".to_string(), currency("Euro", "€")),
            ("b".to_string(), currency("euro", "€")),
        ]);
        assert_eq!(view_with(Some(map), None).currencies, vec!["euro", "Euro"]);
    }

    #[test]
    fn first_top_level_domain() {
        let tlds = strings(&[".de", ".eu"]);
        let view = normalize(None, None, None, Some(&tlds), None);
        assert_eq!(view.domain.as_deref(), Some(".de"));

        assert_eq!(normalize(None, None, None, Some(&[]), None).domain, None);
        assert_eq!(normalize(None, None, None, None, None).domain, None);
    }

    #[test]
    fn capitals_passthrough_or_empty() {
        let berlin = strings(&["Berlin"]);
        assert_eq!(
            normalize(None, None, None, None, Some(&berlin)).capitals,
            vec!["Berlin"]
        );
        assert!(normalize(None, None, None, None, Some(&[])).capitals.is_empty());
        assert!(normalize(None, None, None, None, None).capitals.is_empty());
    }

    #[test]
    fn absent_fields_give_empty_view() {
        let view = NormalizedView::from_record(&CountryRecord::named("Nowhere"));
        assert_eq!(view, NormalizedView::default());
    }

    #[test]
    fn normalization_is_deterministic() {
        let de = &sample_countries()[0];
        let first = NormalizedView::from_record(de);
        let second = NormalizedView::from_record(de);
        assert_eq!(first, second);
        assert_eq!(first.currencies, vec!["Euro"]);
        assert_eq!(first.native_names, vec!["Deutschland"]);
        assert_eq!(first.capitals, vec!["Berlin"]);
    }

    #[test]
    fn pluralize_by_count() {
        assert_eq!(pluralize(1, "Capital", "Capitals"), "Capital");
        assert_eq!(pluralize(2, "Capital", "Capitals"), "Capitals");
        assert_eq!(pluralize(0, "Native Name", "Native Names"), "Native Names");
    }
}
