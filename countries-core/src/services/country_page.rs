//! Detail page state machine
//!
//! `Loading` lasts only while the collection itself is still being loaded.
//! Once it is resident the lookup is synchronous and resolves straight to
//! `NotFound` or `Found`.

use crate::types::CountryRecord;

use super::lookup::find_country;

/// What the detail page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryView {
    /// Collection not available yet
    Loading,
    /// No record matches the target
    NotFound { target: String },
    /// Matching record
    Found(CountryRecord),
}

impl CountryView {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn record(&self) -> Option<&CountryRecord> {
        match self {
            Self::Found(record) => Some(record),
            _ => None,
        }
    }
}

/// Detail page bound to one target name.
///
/// The lookup re-runs only when its inputs change: the target, or the
/// collection (tracked through a revision number bumped by the owner on
/// every replacement).
#[derive(Debug, Clone)]
pub struct CountryPage {
    target: String,
    view: CountryView,
    synced_revision: Option<u64>,
}

impl CountryPage {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            view: CountryView::Loading,
            synced_revision: None,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn view(&self) -> &CountryView {
        &self.view
    }

    /// Point the page at another country; the next [`Self::sync`] resolves it.
    pub fn set_target(&mut self, target: impl Into<String>) {
        let target = target.into();
        if target != self.target {
            self.target = target;
            self.synced_revision = None;
        }
    }

    /// Bring the view up to date with the collection.
    ///
    /// `collection` is `None` while it is still loading. Returns `true` when
    /// the lookup actually ran.
    pub fn sync(&mut self, collection: Option<&[CountryRecord]>, revision: u64) -> bool {
        let Some(all) = collection else {
            self.view = CountryView::Loading;
            self.synced_revision = None;
            return false;
        };

        if self.synced_revision == Some(revision) {
            return false;
        }

        self.view = match find_country(all, &self.target) {
            Some(record) => CountryView::Found(record.clone()),
            None => CountryView::NotFound {
                target: self.target.clone(),
            },
        };
        self.synced_revision = Some(revision);
        log::debug!("Resolved country page {:?} at revision {revision}", self.target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_countries;

    #[test]
    fn loading_until_collection_arrives() {
        let mut page = CountryPage::new("germany");
        assert!(!page.sync(None, 0));
        assert!(page.view().is_loading());

        let all = sample_countries();
        assert!(page.sync(Some(all.as_slice()), 1));
        assert_eq!(page.view().record().map(|c| c.name.as_str()), Some("Germany"));
    }

    #[test]
    fn unknown_target_is_not_found() {
        let all = sample_countries();
        let mut page = CountryPage::new("Atlantis");
        page.sync(Some(all.as_slice()), 1);
        assert_eq!(
            page.view(),
            &CountryView::NotFound {
                target: "Atlantis".to_string()
            }
        );
    }

    #[test]
    fn lookup_reruns_only_on_change() {
        let all = sample_countries();
        let mut page = CountryPage::new("France");
        assert!(page.sync(Some(all.as_slice()), 1));
        assert!(!page.sync(Some(all.as_slice()), 1));

        page.set_target("Japan");
        assert!(page.sync(Some(all.as_slice()), 1));
        assert_eq!(page.view().record().map(|c| c.name.as_str()), Some("Japan"));

        page.set_target("Japan");
        assert!(!page.sync(Some(all.as_slice()), 1));
    }

    #[test]
    fn replaced_collection_triggers_lookup() {
        let mut page = CountryPage::new("France");
        page.sync(Some(Vec::new().as_slice()), 1);
        assert!(matches!(page.view(), CountryView::NotFound { .. }));

        let all = sample_countries();
        assert!(page.sync(Some(all.as_slice()), 2));
        assert!(page.view().record().is_some());
    }
}
