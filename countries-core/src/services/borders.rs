//! Border country resolution

use crate::types::CountryRecord;
use crate::utils::collation::equals_folded;

/// One neighbor badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderLink {
    /// Identifier as listed in `borders`
    pub id: String,
    /// Name of the matching record, if the collection has one
    pub name: Option<String>,
}

impl BorderLink {
    /// Text on the badge, and the target of its link
    pub fn target(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Map neighbor identifiers to records of the collection.
///
/// An identifier matches a record's code, or failing that its name. Unknown
/// identifiers are kept so the badge still renders (its link then leads to
/// the not-found view).
pub fn resolve_borders(all: &[CountryRecord], borders: &[String]) -> Vec<BorderLink> {
    borders
        .iter()
        .map(|id| {
            let name = all
                .iter()
                .find(|c| c.code.as_deref().is_some_and(|code| equals_folded(code, id)))
                .or_else(|| all.iter().find(|c| equals_folded(&c.name, id)))
                .map(|c| c.name.clone());
            if name.is_none() {
                log::debug!("Unresolved border identifier {id:?}");
            }
            BorderLink {
                id: id.clone(),
                name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_countries, strings};

    #[test]
    fn resolves_codes_to_names() {
        let all = sample_countries();
        let links = resolve_borders(&all, all[0].border_ids());
        let targets: Vec<&str> = links.iter().map(BorderLink::target).collect();
        assert_eq!(targets, vec!["France", "Switzerland", "AUT"]);
        assert!(links[2].name.is_none());
    }

    #[test]
    fn falls_back_to_name_match() {
        let all = sample_countries();
        let links = resolve_borders(&all, &strings(&["japan"]));
        assert_eq!(links[0].name.as_deref(), Some("Japan"));
    }

    #[test]
    fn no_borders_no_links() {
        assert!(resolve_borders(&sample_countries(), &[]).is_empty());
    }
}
