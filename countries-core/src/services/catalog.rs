//! Root view list helpers

use std::collections::BTreeSet;

use crate::types::CountryRecord;
use crate::utils::collation::{equals_folded, fold};

/// Countries whose name contains `query` (ignoring case), optionally
/// restricted to one region. Collection order is kept.
pub fn filter_countries<'a>(
    all: &'a [CountryRecord],
    query: &str,
    region: Option<&str>,
) -> Vec<&'a CountryRecord> {
    let needle = fold(query.trim());
    all.iter()
        .filter(|c| region.map_or(true, |r| equals_folded(&c.region, r)))
        .filter(|c| needle.is_empty() || fold(&c.name).contains(&needle))
        .collect()
}

/// Distinct non-empty regions, sorted.
pub fn regions(all: &[CountryRecord]) -> Vec<String> {
    all.iter()
        .filter(|c| !c.region.is_empty())
        .map(|c| c.region.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_countries;

    fn names(list: &[&CountryRecord]) -> Vec<String> {
        list.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn empty_query_keeps_everything() {
        let all = sample_countries();
        assert_eq!(filter_countries(&all, "  ", None).len(), all.len());
    }

    #[test]
    fn query_matches_substring_ignoring_case() {
        let all = sample_countries();
        assert_eq!(names(&filter_countries(&all, "AN", None)), vec!["Germany", "France", "Switzerland", "Japan"]);
        assert_eq!(names(&filter_countries(&all, "swi", None)), vec!["Switzerland"]);
    }

    #[test]
    fn region_filter() {
        let all = sample_countries();
        assert_eq!(names(&filter_countries(&all, "", Some("asia"))), vec!["Japan"]);
        assert!(filter_countries(&all, "japan", Some("Europe")).is_empty());
    }

    #[test]
    fn distinct_regions() {
        assert_eq!(regions(&sample_countries()), vec!["Asia", "Europe"]);
    }
}
