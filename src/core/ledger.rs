//! Keyed counters that survive text serialization.
//!
//! Session ledgers are keyed by composite values (template + action,
//! position + quest). JSON objects only take string keys, so a `Ledger`
//! serializes as a sorted list of `[key, value]` pairs instead of a map.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hash map with pair-list serialization.
#[derive(Clone, Debug)]
pub struct Ledger<K, V> {
    entries: FxHashMap<K, V>,
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Ledger<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Ledger<K, V> {}

impl<K, V> Default for Ledger<K, V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash, V> Ledger<K, V> {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Is the key present?
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the ledger empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash> Ledger<K, u32> {
    /// Counter value, zero when absent.
    #[must_use]
    pub fn count(&self, key: &K) -> u32 {
        self.entries.get(key).copied().unwrap_or(0)
    }

    /// Increment a counter and return the new value.
    pub fn increment(&mut self, key: K) -> u32 {
        let count = self.entries.entry(key).or_insert(0);
        *count += 1;
        *count
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Ledger<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Serialize for Ledger<K, V>
where
    K: Serialize + Ord,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Sorted so identical ledgers produce identical bytes
        let mut pairs: Vec<(&K, &V)> = self.entries.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs.serialize(serializer)
    }
}

impl<'de, K, V> Deserialize<'de> for Ledger<K, V>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs: Vec<(K, V)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
