use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::identifiers::EntityId;

/// Tag for the level of a geographic entity. Ingestion only ever produces
/// `County`; `State` and `Country` are reserved for hierarchical aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocaleKind {
    County,
    State,
    Country,
}

/// A geographic entity with a stable content-derived identity.
///
/// Identity is fully determined by the raw `(county, state, fips)` text
/// triple. `fips` is `None` when the raw field did not parse as an integer.
/// `subdivisions` is always empty today; the field is part of the exposed
/// shape for forward compatibility and must not be removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    pub id: EntityId,
    pub fips: Option<u32>,
    pub name: String,
    pub kind: LocaleKind,
    pub subdivisions: Vec<Locale>,
}

/// One date-stamped observation tied to exactly one [`Locale`].
///
/// Identity depends only on the raw `(date, fips)` text, never on the
/// county/state strings. `date`, `cases`, and `deaths` are `None` when the
/// raw field did not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: EntityId,
    pub locale_id: EntityId,
    pub date: Option<NaiveDate>,
    pub cases: Option<u32>,
    pub deaths: Option<u32>,
}
