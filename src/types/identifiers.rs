use serde::{Deserialize, Serialize};

use crate::hashing::{self, HashError};

/// Stable content-derived entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Mint an identifier by canonically hashing an ordered tuple of parts.
    ///
    /// Equal part tuples always mint equal identifiers; part order matters.
    pub fn mint<T: Serialize + ?Sized>(parts: &T) -> Result<Self, HashError> {
        Ok(EntityId(hashing::hash(parts)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
