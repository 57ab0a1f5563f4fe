//! Fixed-shard concurrent map.
//!
//! Striped locking lets independent writer threads accumulate per-document
//! relevance contributions without coordinating on a global lock. Shard
//! selection is a deterministic hash of the key, so a given key always lands
//! on the same shard; within a shard, entries are ordered by key.

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// A map striped over a fixed number of independently locked shards.
///
/// [`ConcurrentMap::at`] hands out exclusive access to a single value while
/// holding only that value's shard lock, so writers touching different shards
/// proceed in parallel. Reading the merged contents requires ownership
/// ([`ConcurrentMap::into_ordered`]), which statically rules out concurrent
/// access during materialization.
pub struct ConcurrentMap<K, V> {
    shards: Vec<Mutex<BTreeMap<K, V>>>,
}

impl<K: Ord + Hash, V: Default> ConcurrentMap<K, V> {
    /// Creates a map striped over `shard_count` shards (at least one).
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        Self {
            shards: (0..shard_count).map(|_| Mutex::new(BTreeMap::new())).collect(),
        }
    }

    /// Locks the shard owning `key` and returns exclusive access to its value,
    /// inserting `V::default()` if the key is absent.
    ///
    /// The shard stays locked until the returned guard is dropped.
    pub fn at(&self, key: K) -> MappedMutexGuard<'_, V> {
        let guard = self.shards[self.shard_index(&key)].lock();
        MutexGuard::map(guard, |shard| shard.entry(key).or_default())
    }

    /// Removes `key` under its shard lock.
    pub fn erase(&self, key: &K) {
        self.shards[self.shard_index(key)].lock().remove(key);
    }

    /// Consumes the map and merges all shards into a single ordered map.
    pub fn into_ordered(self) -> BTreeMap<K, V> {
        let mut merged = BTreeMap::new();
        for shard in self.shards {
            merged.extend(shard.into_inner());
        }
        merged
    }

    fn shard_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.shards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_at_inserts_default() {
        let map: ConcurrentMap<i32, f64> = ConcurrentMap::new(4);
        *map.at(7) += 1.5;
        *map.at(7) += 0.5;
        let merged = map.into_ordered();
        assert_eq!(merged.get(&7), Some(&2.0));
    }

    #[test]
    fn test_erase_removes_key() {
        let map: ConcurrentMap<i32, f64> = ConcurrentMap::new(4);
        *map.at(1) += 1.0;
        *map.at(2) += 2.0;
        map.erase(&1);
        let merged = map.into_ordered();
        assert!(!merged.contains_key(&1));
        assert_eq!(merged.get(&2), Some(&2.0));
    }

    #[test]
    fn test_erase_unknown_key_is_noop() {
        let map: ConcurrentMap<i32, f64> = ConcurrentMap::new(4);
        map.erase(&99);
        assert!(map.into_ordered().is_empty());
    }

    #[test]
    fn test_into_ordered_merges_shards_in_key_order() {
        let map: ConcurrentMap<i32, f64> = ConcurrentMap::new(8);
        for key in [42, 3, 17, 0, 8, 25] {
            *map.at(key) += key as f64;
        }
        let keys: Vec<i32> = map.into_ordered().into_keys().collect();
        assert_eq!(keys, vec![0, 3, 8, 17, 25, 42]);
    }

    #[test]
    fn test_parallel_accumulation() {
        let map: ConcurrentMap<i32, u64> = ConcurrentMap::new(8);
        (0..1000).into_par_iter().for_each(|i| {
            *map.at(i % 10) += 1;
        });
        let merged = map.into_ordered();
        assert_eq!(merged.len(), 10);
        assert!(merged.values().all(|&count| count == 100));
    }

    #[test]
    fn test_zero_shard_count_is_clamped() {
        let map: ConcurrentMap<i32, f64> = ConcurrentMap::new(0);
        *map.at(1) += 1.0;
        assert_eq!(map.into_ordered().len(), 1);
    }
}
