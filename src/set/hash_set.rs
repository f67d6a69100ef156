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

use std::borrow::Borrow;
use std::fmt;

use crate::error::Error;
use crate::hash::ByteLengthHasher;
use crate::hash::ProbeHasher;
use crate::table::ProbeTable;

/// Value-only membership structure with a fixed capacity.
#[derive(Clone)]
pub struct HashSet<T, H = ByteLengthHasher> {
    table: ProbeTable<T, H>,
}

impl<T> HashSet<T> {
    /// Creates a set using the byte-length hash.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            table: ProbeTable::new(capacity),
        }
    }
}

impl<T, H> HashSet<T, H> {
    /// Creates a set using the provided hash strategy.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            table: ProbeTable::with_hasher(capacity, hasher),
        }
    }

    /// Returns the fixed capacity given at construction.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the hash strategy used to place values.
    pub fn hasher(&self) -> &H {
        self.table.hasher()
    }

    /// Iterates over the values in slot order, which is not insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.table.iter()
    }

    /// Removes every value, keeping the capacity given at construction.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<T: Eq, H: ProbeHasher<T>> HashSet<T, H> {
    /// Adds `value`; adding a present value is a no-op.
    ///
    /// # Errors
    ///
    /// Fails with `CapacityExhausted` when the probe sequence finds no free slot.
    pub fn insert(&mut self, value: T) -> Result<(), Error> {
        self.table.insert(value)
    }

    /// Removes `value`.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` when the value is absent.
    pub fn remove<Q>(&mut self, value: &Q) -> Result<(), Error>
    where
        T: Borrow<Q>,
        H: ProbeHasher<Q>,
        Q: Eq + ?Sized,
    {
        self.table.remove(value).map(|_| ())
    }

    /// Returns true if `value` is in the set.
    ///
    /// The value may be any borrowed form of the set's value type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashkit::set::HashSet;
    /// let mut set = HashSet::new(5);
    /// set.insert(String::from("cat")).unwrap();
    /// assert!(set.contains("cat"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        H: ProbeHasher<Q>,
        Q: Eq + ?Sized,
    {
        self.table.contains(value)
    }
}

impl<T: fmt::Debug, H> fmt::Debug for HashSet<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_insert_contains_remove() {
        let mut set: HashSet<&str> = HashSet::new(5);
        assert!(!set.contains(&"cat"));

        set.insert("cat").unwrap();
        assert!(set.contains(&"cat"));
        assert_eq!(set.len(), 1);

        set.remove(&"cat").unwrap();
        assert!(!set.contains(&"cat"));
        assert!(set.is_empty());

        let err = set.remove(&"cat").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut set: HashSet<i32> = HashSet::new(9);
        set.insert(1).unwrap();
        set.insert(22).unwrap();

        set.clear();
        assert_eq!(set.capacity(), 9);
        assert!(set.is_empty());
        assert!(!set.contains(&1));

        set.insert(333).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_owned_strings_looked_up_by_str() {
        let mut set = HashSet::new(7);
        set.insert(String::from("x")).unwrap();
        set.insert(String::from("yy")).unwrap();

        assert!(set.contains("x"));
        assert!(!set.contains("z"));

        set.remove("x").unwrap();
        assert!(!set.contains("x"));
        assert!(set.contains("yy"));
        assert_eq!(set.remove("x").unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_debug_lists_values() {
        let mut set = HashSet::new(3);
        set.insert("a").unwrap();
        assert_eq!(format!("{set:?}"), "{\"a\"}");
    }
}
