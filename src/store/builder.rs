use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::info;

use crate::hashing::HashError;
use crate::ingest::{self, RawRow};
use crate::store::store::DataStore;
use crate::types::{EntityId, Locale, LocaleKind, Record};

#[derive(Debug, Error)]
pub enum StoreBuildError {
    #[error("Failed to derive entity identity: {0}")]
    Hash(#[from] HashError),
}

impl DataStore {
    /// Build the store from an unordered sequence of raw rows.
    ///
    /// Input rows are not assumed sorted or deduplicated. Construction is
    /// single-threaded and runs exactly once per store instance; the result
    /// is read-only thereafter.
    pub fn build(rows: Vec<RawRow>) -> Result<DataStore, StoreBuildError> {
        // 1. One candidate locale per row, identity derived from the raw
        //    (county, state, fips) text. First occurrence of each id wins.
        let mut locales: Vec<Locale> = Vec::new();
        let mut seen_ids = BTreeSet::new();
        let mut row_locale_ids = Vec::with_capacity(rows.len());

        for row in &rows {
            let id = EntityId::mint(&[&row.county, &row.state, &row.fips])?;

            if seen_ids.insert(id.clone()) {
                locales.push(Locale {
                    id: id.clone(),
                    fips: ingest::parse_count(&row.fips),
                    name: format!("{}, {}", row.county, row.state),
                    kind: LocaleKind::County,
                    subdivisions: Vec::new(),
                });
            }

            row_locale_ids.push(id);
        }

        // 2. Ascending by parsed fips. The sort is stable, so unparseable
        //    fips values (None) land first in first-seen order.
        locales.sort_by_key(|locale| locale.fips);

        debug_assert!(locales.windows(2).all(|w| w[0].fips <= w[1].fips));

        // 3. One record per row, identity derived from the raw (date, fips)
        //    text only — equal date and fips collapse to the same id even
        //    if the locale name text differs. Indexed by locale id.
        let mut index: BTreeMap<EntityId, Vec<Record>> = BTreeMap::new();

        for (row, locale_id) in rows.iter().zip(row_locale_ids) {
            let record = Record {
                id: EntityId::mint(&[&row.date, &row.fips])?,
                locale_id: locale_id.clone(),
                date: ingest::parse_day(&row.date),
                cases: ingest::parse_count(&row.cases),
                deaths: ingest::parse_count(&row.deaths),
            };

            index.entry(locale_id).or_default().push(record);
        }

        // 4. Ascending by parsed date within each bucket, stable.
        for bucket in index.values_mut() {
            bucket.sort_by_key(|record| record.date);
        }

        info!(
            rows = rows.len(),
            locales = locales.len(),
            "built data store"
        );

        Ok(DataStore { locales, index })
    }
}
