//! Bounded memoization for the noise, fractal and flow fields.
//!
//! Entries are evicted in insertion order once a cache reaches capacity.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use serde::Serialize;

/// Hit/miss counters and current size of one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Fixed-capacity memo table with FIFO eviction.
#[derive(Debug, Clone)]
pub struct MemoCache<K, V> {
    map: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Copy,
{
    /// Create an empty cache. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.map.get(&key) {
            self.hits += 1;
            return *value;
        }

        self.misses += 1;
        let value = compute();

        if self.map.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.map.remove(&oldest);
                tracing::trace!(capacity = self.capacity, "memo cache evicted oldest entry");
            }
        }
        self.order.push_back(key.clone());
        self.map.insert(key, value);
        value
    }

    /// Look up without computing.
    pub fn get(&self, key: &K) -> Option<V> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.map.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_does_not_recompute() {
        let mut cache: MemoCache<u32, f64> = MemoCache::new(8);
        let mut calls = 0;
        let a = cache.get_or_insert_with(1, || {
            calls += 1;
            0.5
        });
        let b = cache.get_or_insert_with(1, || {
            calls += 1;
            0.9
        });
        assert_eq!(a, 0.5);
        assert_eq!(b, 0.5);
        assert_eq!(calls, 1);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut cache: MemoCache<u32, u32> = MemoCache::new(4);
        for i in 0..100 {
            cache.get_or_insert_with(i, || i * 2);
            assert!(cache.len() <= 4);
        }
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut cache: MemoCache<u32, u32> = MemoCache::new(2);
        cache.get_or_insert_with(1, || 10);
        cache.get_or_insert_with(2, || 20);
        cache.get_or_insert_with(3, || 30);

        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&2), Some(20));
        assert_eq!(cache.get(&3), Some(30));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cache: MemoCache<u32, u32> = MemoCache::new(4);
        cache.get_or_insert_with(1, || 1);
        cache.get_or_insert_with(1, || 1);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 0,
                capacity: 4,
                hits: 0,
                misses: 0
            }
        );
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut cache: MemoCache<u32, u32> = MemoCache::new(0);
        cache.get_or_insert_with(1, || 1);
        cache.get_or_insert_with(2, || 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().capacity, 1);
    }
}
