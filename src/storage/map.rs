// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Insertion-ordered map over two parallel arrays.

use core::fmt;

use crate::error::{MultiverseError, Result};
use crate::storage::array::{GrowableArray, Iter};

/// Key/value association with linear-scan lookup.
///
/// `keys[i]` always pairs with `values[i]`. Keys are distinct under
/// `PartialEq` and keep the order in which they were first set.
pub struct OrderedMap<K, V> {
    keys: GrowableArray<K>,
    values: GrowableArray<V>,
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            keys: GrowableArray::new(),
            values: GrowableArray::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Overwrites the value of an existing key in place, otherwise appends.
    pub fn set(&mut self, key: K, value: V) {
        match self.position(&key) {
            Some(i) => {
                if let Ok(slot) = self.values.get_mut(i) {
                    *slot = value;
                }
            }
            None => {
                self.keys.append(key);
                self.values.append(value);
            }
        }
    }

    pub fn get(&self, key: &K) -> Result<&V> {
        let i = self.position(key).ok_or(MultiverseError::KeyNotFound)?;
        self.values.get(i)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        let i = self.position(key).ok_or(MultiverseError::KeyNotFound)?;
        self.values.get_mut(i)
    }

    pub fn get_or_default(&self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn delete(&mut self, key: &K) -> Result<()> {
        self.pop(key, None).map(|_| ())
    }

    /// Removes `key` and returns its value.
    ///
    /// A missing key yields `default` when one is supplied, `KeyNotFound`
    /// otherwise.
    pub fn pop(&mut self, key: &K, default: Option<V>) -> Result<V> {
        match self.position(key) {
            Some(i) => {
                let value = self.values.pop(Some(i as isize))?;
                self.keys.pop(Some(i as isize))?;
                Ok(value)
            }
            None => default.ok_or(MultiverseError::KeyNotFound),
        }
    }

    /// Keys in insertion order. The map cannot be mutated while this is alive.
    pub fn keys(&self) -> Iter<'_, K> {
        self.keys.iter()
    }

    pub fn values(&self) -> Iter<'_, V> {
        self.values.iter()
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.keys.iter().zip(self.values.iter())
    }

    /// Values with equal duplicates collapsed, first occurrence first.
    pub fn unique_values(&self) -> GrowableArray<V>
    where
        V: PartialEq + Clone,
    {
        let mut unique = GrowableArray::new();
        for value in self.values.iter() {
            if !unique.contains(value) {
                unique.append(value.clone());
            }
        }
        unique
    }
}

impl<K: PartialEq, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys.iter().zip(self.values.iter()))
            .finish()
    }
}
