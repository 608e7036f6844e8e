// This is intentionally thin:
// no mutation
// no rebuild methods
// runtime reads only

use std::collections::BTreeMap;

use crate::types::{EntityId, Locale, Record};

/// The immutable, indexed collection of all locales and records.
///
/// Built exactly once per instance (see [`DataStore::build`]) and read-only
/// thereafter. Callers construct one store at process startup and pass it by
/// reference into every request-handling context; the crate itself holds no
/// global state.
#[derive(Debug)]
pub struct DataStore {
    pub(crate) locales: Vec<Locale>,
    pub(crate) index: BTreeMap<EntityId, Vec<Record>>,
}

impl DataStore {
    /// All locales, deduplicated and ascending by parsed fips.
    pub fn all_locales(&self) -> &[Locale] {
        &self.locales
    }

    /// At most one locale whose `name` exactly matches, as a 0-or-1-element
    /// sequence. `name` is not guaranteed globally unique; only the first
    /// match in the stored, fips-sorted order is ever surfaced, mirroring
    /// the first-seen-wins deduplication tie-break.
    pub fn locales_named(&self, name: &str) -> Vec<&Locale> {
        self.locales
            .iter()
            .find(|locale| locale.name == name)
            .into_iter()
            .collect()
    }

    /// Records for one locale, ascending by parsed date. Unknown ids yield
    /// an empty slice, not an error.
    pub fn records_for(&self, locale_id: &EntityId) -> &[Record] {
        self.index
            .get(locale_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
