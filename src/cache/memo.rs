use std::collections::HashMap;

use serde::Serialize;

use crate::hashing;

/// Memoization cache keyed by content-hashing an arbitrary key tuple.
///
/// Two calls with structurally equal key parts hit the same entry regardless
/// of in-memory identity — keys are content-hashed, never identity-compared.
/// Entries live for the lifetime of the cache instance: no eviction, no
/// expiry, no size bound. Each instance is exclusively owned by one logical
/// session; `fetch` takes `&mut self`, so the type system rules out shared
/// concurrent mutation and no dogpile protection is needed.
#[derive(Debug)]
pub struct MemoCache<V> {
    /// When false, every call invokes its compute function and nothing is
    /// stored or read.
    pub enabled: bool,
    entries: HashMap<String, V>,
}

impl<V> Default for MemoCache<V> {
    fn default() -> Self {
        Self {
            enabled: true,
            entries: HashMap::new(),
        }
    }
}

impl<V: Clone> MemoCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key_parts`, computing and storing it on
    /// a miss.
    ///
    /// # Panics
    ///
    /// Panics if `key_parts` cannot be canonically serialized. Key tuples
    /// are fixed-shape at every call site, so this signals a programming
    /// error in the caller, not a runtime condition to recover from.
    pub fn fetch<K: Serialize + ?Sized>(
        &mut self,
        key_parts: &K,
        compute: impl FnOnce() -> V,
    ) -> V {
        if !self.enabled {
            return compute();
        }

        let key = hashing::hash(key_parts).expect("cache key must be canonically serializable");

        if let Some(value) = self.entries.get(&key) {
            return value.clone();
        }

        let value = compute();
        self.entries.insert(key, value.clone());

        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
