// Tue Jan 20 2026 - Alex

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::hash::Hash;

/// Owner -> set of entities related to it.
///
/// Sets deduplicate on insert; readers always get the related entities in
/// ascending order.
#[derive(Debug, Clone)]
pub struct UseSet<K, V> {
    uses: AHashMap<K, AHashSet<V>>,
}

impl<K, V> UseSet<K, V>
where
    K: Copy + Eq + Hash + Ord,
    V: Copy + Eq + Hash + Ord,
{
    pub fn new() -> Self {
        Self {
            uses: AHashMap::new(),
        }
    }

    pub fn add(&mut self, obj: K, use_obj: V) {
        self.uses.entry(obj).or_default().insert(use_obj);
    }

    pub fn get(&self, obj: &K) -> Option<&AHashSet<V>> {
        self.uses.get(obj)
    }

    pub fn sorted(&self, obj: &K) -> Vec<V> {
        sorted_list(self.uses.get(obj))
    }

    /// Calls `visitor` once per owner, owners in ascending order.
    pub fn visit<F>(&self, mut visitor: F)
    where
        F: FnMut(K, Vec<V>),
    {
        for (obj, uses) in self.uses.iter().sorted_by_key(|(obj, _)| **obj) {
            if uses.is_empty() {
                continue;
            }
            visitor(*obj, sorted_list(Some(uses)));
        }
    }

    pub fn len(&self) -> usize {
        self.uses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uses.is_empty()
    }

    /// Number of (owner, related) pairs.
    pub fn edge_count(&self) -> usize {
        self.uses.values().map(|uses| uses.len()).sum()
    }
}

impl<K, V> Default for UseSet<K, V>
where
    K: Copy + Eq + Hash + Ord,
    V: Copy + Eq + Hash + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

pub fn sorted_list<V: Copy + Ord>(uses: Option<&AHashSet<V>>) -> Vec<V> {
    match uses {
        Some(uses) if !uses.is_empty() => uses.iter().copied().sorted().collect(),
        _ => Vec::new(),
    }
}
