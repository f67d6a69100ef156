// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! String-keyed dictionary over two parallel slot arrays.
//!
//! Keys and values live in separate arrays indexed identically. Probing compares keys
//! only; every write and clear touches both arrays at the same index, so `keys[i]` is
//! occupied exactly when `values[i]` holds a value.
//!
//! # Usage
//!
//! ```rust
//! use hashkit::dictionary::HashDictionary;
//! use hashkit::error::ErrorKind;
//!
//! let mut dict = HashDictionary::new(8);
//! dict.put("a", 1).unwrap();
//! dict.put("b", 2).unwrap();
//! assert_eq!(dict.get("a").unwrap(), &1);
//!
//! dict.delete("a").unwrap();
//! assert!(!dict.contains_key("a"));
//! assert_eq!(dict.get("a").unwrap_err().kind(), ErrorKind::NotFound);
//! ```

use std::fmt;

use crate::error::Error;
use crate::hash::ByteLengthHasher;
use crate::hash::ProbeHasher;
use crate::table::Slot;
use crate::table::empty_slots;
use crate::table::find_slot;
use crate::table::seek_slot;

/// Fixed-capacity associative structure keyed by strings.
#[derive(Clone)]
pub struct HashDictionary<V, H = ByteLengthHasher> {
    keys: Vec<Slot<String>>,
    values: Vec<Option<V>>,
    len: usize,
    hasher: H,
}

impl<V> HashDictionary<V> {
    /// Creates a dictionary using the byte-length hash.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, ByteLengthHasher)
    }
}

impl<V, H> HashDictionary<V, H> {
    /// Creates a dictionary using the provided hash strategy.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            keys: empty_slots(capacity),
            values: (0..capacity).map(|_| None).collect(),
            len: 0,
            hasher,
        }
    }

    /// Returns the fixed number of key slots.
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the hash strategy that places keys.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Iterates over `(key, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.keys
            .iter()
            .zip(&self.values)
            .filter_map(|(key, value)| Some((key.value()?.as_str(), value.as_ref()?)))
    }

    /// Iterates over keys in slot order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over values in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Removes every entry, keeping the capacity.
    pub fn clear(&mut self) {
        self.keys.fill_with(|| Slot::Empty);
        self.values.fill_with(|| None);
        self.len = 0;
    }
}

impl<V, H: ProbeHasher<str>> HashDictionary<V, H> {
    fn origin(&self, key: &str) -> usize {
        (self.hasher.hash_value(key) % self.keys.len() as u64) as usize
    }

    fn find(&self, key: &str) -> Option<usize> {
        find_slot(&self.keys, self.origin(key), key)
    }

    /// Associates `value` with `key`, returning the value it replaces.
    ///
    /// # Errors
    ///
    /// Fails with `CapacityExhausted` when the key is new and no free slot is reachable;
    /// the dictionary is not modified.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>, Error> {
        let key = key.into();
        let Some(index) = seek_slot(&self.keys, self.origin(&key), key.as_str()) else {
            return Err(Error::capacity_exhausted(self.capacity()).with_context("key", key));
        };
        if !self.keys[index].is_occupied() {
            self.keys[index] = Slot::Occupied(key);
            self.len += 1;
        }
        Ok(self.values[index].replace(value))
    }

    /// Removes `key` and returns its value.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` when the key is absent.
    pub fn delete(&mut self, key: &str) -> Result<V, Error> {
        let Some(index) = self.find(key) else {
            return Err(Error::not_found("key").with_context("key", key));
        };
        self.keys[index] = Slot::Deleted;
        self.len -= 1;
        match self.values[index].take() {
            Some(value) => Ok(value),
            None => unreachable!("occupied key slot without a value"),
        }
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` when the key is absent.
    pub fn get(&self, key: &str) -> Result<&V, Error> {
        self.find(key)
            .and_then(|index| self.values[index].as_ref())
            .ok_or_else(|| Error::not_found("key").with_context("key", key))
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` when the key is absent.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V, Error> {
        match self.find(key) {
            Some(index) => self.values[index]
                .as_mut()
                .ok_or_else(|| Error::not_found("key").with_context("key", key)),
            None => Err(Error::not_found("key").with_context("key", key)),
        }
    }

    /// Returns true if `key` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashkit::dictionary::HashDictionary;
    /// let mut dict = HashDictionary::new(8);
    /// dict.put("a", 1).unwrap();
    /// assert!(dict.contains_key("a"));
    /// assert!(!dict.contains_key("c"));
    /// ```
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }
}

impl<V: fmt::Debug, H> fmt::Debug for HashDictionary<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
