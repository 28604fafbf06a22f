//! Insertion-ordered key table.
//!
//! The app consumes plain JSON objects, and the builders have always emitted
//! keys in first-seen order: re-assigning an existing key replaces its value
//! but leaves it where it was. `KeyTable` reproduces that, which also pins the
//! output byte-for-byte across runs over the same input.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct KeyTable<K, V> {
    slots: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K, V> KeyTable<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Insert or overwrite `key`, returning the replaced value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.positions.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.slots[position].1, value)),
            None => {
                self.positions.insert(key.clone(), self.slots.len());
                self.slots.push((key, value));
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(key).map(|&position| &self.slots[position].1)
    }

    /// Mutable access to `key`, inserting `default()` first if it is absent.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let position = match self.positions.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.slots.len();
                self.positions.insert(key.clone(), position);
                self.slots.push((key, default()));
                position
            }
        };
        &mut self.slots[position].1
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.slots.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots.iter().map(|(key, value)| (key, value))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.slots.iter_mut().map(|(_, value)| value)
    }
}

impl<K, V> Default for KeyTable<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Serialize for KeyTable<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (key, value) in &self.slots {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut table = KeyTable::new();
        table.insert("b".to_string(), 1);
        table.insert("a".to_string(), 2);
        assert_eq!(table.insert("b".to_string(), 3), Some(1));

        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(table.get("b"), Some(&3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut table = KeyTable::new();
        table.insert("z".to_string(), 1);
        table.insert("a".to_string(), 2);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2}"#);
    }

    #[test]
    fn get_or_insert_with_reuses_existing_slot() {
        let mut table: KeyTable<String, Vec<u32>> = KeyTable::new();
        table.get_or_insert_with("k".into(), Vec::new).push(1);
        table.get_or_insert_with("k".into(), Vec::new).push(2);
        assert_eq!(table.get("k"), Some(&vec![1, 2]));
        assert!(table.contains_key("k"));
    }
}
