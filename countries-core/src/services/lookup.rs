//! Country lookup

use crate::types::CountryRecord;
use crate::utils::collation::equals_folded;

/// Find the first record whose name equals `target`, ignoring case.
///
/// Returns `None` for an empty collection or when nothing matches.
pub fn find_country<'a>(all: &'a [CountryRecord], target: &str) -> Option<&'a CountryRecord> {
    let found = all.iter().find(|c| equals_folded(&c.name, target));
    if found.is_none() {
        log::debug!("No country matches {target:?} among {} records", all.len());
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_countries;

    #[test]
    fn lookup_ignores_case() {
        let all = sample_countries();
        let lower = find_country(&all, "france");
        let upper = find_country(&all, "FRANCE");
        assert_eq!(lower.map(|c| c.name.as_str()), Some("France"));
        assert_eq!(lower, upper);
    }

    #[test]
    fn lookup_without_match_is_none() {
        let all = sample_countries();
        assert!(find_country(&all, "Atlantis").is_none());
        assert!(find_country(&all, "Fran").is_none());
        assert!(find_country(&[], "France").is_none());
    }

    #[test]
    fn lookup_returns_first_match() {
        let mut all = sample_countries();
        let mut dup = CountryRecord::named("FRANCE");
        dup.population = 1;
        all.push(dup);
        assert_eq!(find_country(&all, "france").map(|c| c.population), Some(67_391_582));
    }
}
