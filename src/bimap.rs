use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A one-to-one map that can be queried from either side in O(1).
///
/// Both directions are kept in step by [`BiMap::set`], the only mutator.
/// Whenever a pair is installed, the previous partner of the key and the
/// previous partner of the value are evicted, so no two keys ever share a
/// value.
#[derive(Clone)]
pub struct BiMap<K, V> {
    forward: HashMap<K, V>,
    reverse: HashMap<V, K>,
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    /// Builds a bijection from a total key to value mapping.
    ///
    /// Returns `None` if two keys map to the same value.
    pub fn new(pairs: impl IntoIterator<Item = (K, V)>) -> Option<Self> {
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();

        for (key, value) in pairs {
            if reverse.insert(value.clone(), key.clone()).is_some() {
                return None;
            }
            if let Some(stale) = forward.insert(key, value) {
                // Duplicate keys: the later pair wins, the earlier value goes.
                reverse.remove(&stale);
            }
        }

        Some(Self { forward, reverse })
    }

    pub fn set(&mut self, key: K, value: V) {
        if let Some(old_key) = self.reverse.remove(&value) {
            self.forward.remove(&old_key);
        }
        if let Some(old_value) = self.forward.remove(&key) {
            self.reverse.remove(&old_value);
        }

        self.forward.insert(key.clone(), value.clone());
        self.reverse.insert(value, key);

        debug_assert_eq!(self.forward.len(), self.reverse.len());
    }

    pub fn value(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    pub fn key(&self, value: &V) -> Option<&K> {
        self.reverse.get(value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.forward.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.reverse.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.forward.iter()
    }
}

impl<K, V> PartialEq for BiMap<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<K, V> Eq for BiMap<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, V> Hash for BiMap<K, V>
where
    K: Ord + Hash,
    V: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        // HashMap iteration order is unspecified; hash in key order.
        let mut entries: Vec<_> = self.forward.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.len().hash(state);
        for (key, value) in entries {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.forward.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_lookup_both_directions() {
        let map = BiMap::new([(1, 'a'), (2, 'b'), (3, 'c')]).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.value(&2), Some(&'b'));
        assert_eq!(map.key(&'c'), Some(&3));
        assert_eq!(map.value(&4), None);
        assert_eq!(map.key(&'z'), None);
    }

    #[test]
    fn test_duplicate_value_rejected() {
        assert!(BiMap::new([(1, 'a'), (2, 'a')]).is_none());
    }

    #[test]
    fn test_set_evicts_stale_pairs() {
        let mut map = BiMap::new([(1, 'a'), (2, 'b'), (3, 'c')]).unwrap();

        // 'a' moves to key 2, evicting 'b' and leaving key 1 unmapped.
        map.set(2, 'a');
        assert_eq!(map.value(&2), Some(&'a'));
        assert_eq!(map.key(&'a'), Some(&2));
        assert_eq!(map.value(&1), None);
        assert_eq!(map.key(&'b'), None);
        assert_eq!(map.len(), 2);

        map.set(1, 'b');
        assert_eq!(map.len(), 3);
        assert_eq!(map.key(&'b'), Some(&1));
    }

    #[test]
    fn test_set_same_pair_is_noop() {
        let mut map = BiMap::new([(1, 'a'), (2, 'b')]).unwrap();
        let before = map.clone();
        map.set(1, 'a');
        assert_eq!(map, before);
    }

    #[test]
    fn test_equality_and_hash_ignore_insertion_order() {
        let a = BiMap::new([(1, 'a'), (2, 'b'), (3, 'c')]).unwrap();
        let b = BiMap::new([(3, 'c'), (1, 'a'), (2, 'b')]).unwrap();
        let c = BiMap::new([(1, 'b'), (2, 'a'), (3, 'c')]).unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_keys_and_values_cover_every_pair() {
        let map = BiMap::new([(10, "x"), (20, "y")]).unwrap();
        let mut keys: Vec<_> = map.keys().copied().collect();
        let mut values: Vec<_> = map.values().copied().collect();
        keys.sort_unstable();
        values.sort_unstable();

        assert_eq!(keys, vec![10, 20]);
        assert_eq!(values, vec!["x", "y"]);
        assert!(map.contains_key(&10));
        assert!(!map.is_empty());
    }
}
