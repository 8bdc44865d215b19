// vim: tw=80
//! A map that remembers the order in which keys were first inserted.
//!
//! Overload merging and mock synthesis must both produce output that follows
//! source order, no matter how many times an entry is overwritten.  Iterating
//! over a hash based collection would make that order random, and a b-tree
//! would sort it alphabetically.  `InsertionMap` keeps a `Vec` of entries in
//! first-insertion order plus a hash index for lookups.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::mem;

#[derive(Clone, Debug)]
pub struct InsertionMap<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K, V> InsertionMap<K, V> {
    pub fn new() -> Self {
        InsertionMap {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}

impl<K, V> InsertionMap<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Insert a value.  Overwriting an existing key keeps that key's original
    /// position and returns the old value.
    pub fn insert(&mut self, k: K, v: V) -> Option<V> {
        if let Some(&i) = self.index.get(&k) {
            Some(mem::replace(&mut self.entries[i].1, v))
        } else {
            self.index.insert(k.clone(), self.entries.len());
            self.entries.push((k, v));
            None
        }
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains_key(k)
    }

    pub fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.get(k).map(|&i| &self.entries[i].1)
    }
}

impl<K, V> Default for InsertionMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for InsertionMap<K, V>
where
    K: Clone + Eq + Hash,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = InsertionMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod t {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut map = InsertionMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        assert_eq!(Some(1), map.insert("b", 3));
        let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(vec![("b", 3), ("a", 2)], entries);
    }

    #[test]
    fn lookup_by_borrowed_key() {
        let map: InsertionMap<String, u32> =
            [("foo".to_owned(), 7)].into_iter().collect();
        assert!(map.contains_key("foo"));
        assert_eq!(Some(&7), map.get("foo"));
        assert_eq!(None, map.get("bar"));
        assert_eq!(1, map.len());
    }
}
