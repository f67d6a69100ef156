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

//! Fixed-capacity open-addressing engine shared by [`HashSet`](crate::set::HashSet) and
//! [`HashDictionary`](crate::dictionary::HashDictionary).
//!
//! A value is placed by hashing it to an origin slot `hash(value) % capacity` and then
//! stepping through the slot array with a fixed stride of [`PROBE_STRIDE`], wrapping around
//! the end, for at most `capacity` steps.
//!
//! # Probe hazards
//!
//! The stride is constant. When `capacity` is even the sequence only ever visits slots of
//! the same parity as the origin, so an insert can fail while half of the table is still
//! empty. Capacities coprime with the stride (any odd capacity) visit every slot.
//!
//! Removal leaves a [`Slot::Deleted`] tombstone rather than an empty slot. Lookups step
//! over tombstones, so a value whose probe path crossed a removed slot stays reachable;
//! inserts reuse the first tombstone on their path once the value is known to be absent.

use std::borrow::Borrow;
use std::fmt;

use crate::error::Error;
use crate::hash::ByteLengthHasher;
use crate::hash::ProbeHasher;

/// Distance between consecutive slots of a probe sequence.
pub const PROBE_STRIDE: usize = 2;

/// State of a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    /// Never occupied since construction or the last clear.
    Empty,
    /// Occupied once, then removed.
    Deleted,
    Occupied(T),
}

impl<T> Slot<T> {
    /// Returns the stored value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Occupied(value) => Some(value),
            _ => None,
        }
    }

    /// Returns whether the slot holds a value; tombstones do not.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }
}

/// Walks the probe sequence starting at `origin` and returns the slot an insert of `target`
/// should write to: the slot already holding `target`, else the first tombstone seen before
/// the first empty slot, else that empty slot.
///
/// Returns `None` when `slots.len()` probes reach neither.
pub(crate) fn seek_slot<T, Q>(slots: &[Slot<T>], origin: usize, target: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Eq + ?Sized,
{
    let capacity = slots.len();
    let mut index = origin;
    let mut reusable = None;
    for _ in 0..capacity {
        match &slots[index] {
            Slot::Empty => return Some(reusable.unwrap_or(index)),
            Slot::Occupied(value) if value.borrow() == target => return Some(index),
            Slot::Deleted if reusable.is_none() => reusable = Some(index),
            _ => {}
        }
        index = (index + PROBE_STRIDE) % capacity;
    }
    reusable
}

/// Walks the probe sequence starting at `origin` and returns the slot holding `target`.
///
/// The walk ends at the first empty slot: an insert would have stopped there.
pub(crate) fn find_slot<T, Q>(slots: &[Slot<T>], origin: usize, target: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Eq + ?Sized,
{
    let capacity = slots.len();
    let mut index = origin;
    for _ in 0..capacity {
        match &slots[index] {
            Slot::Empty => return None,
            Slot::Occupied(value) if value.borrow() == target => return Some(index),
            _ => {}
        }
        index = (index + PROBE_STRIDE) % capacity;
    }
    None
}

pub(crate) fn empty_slots<T>(capacity: usize) -> Vec<Slot<T>> {
    assert!(capacity > 0, "capacity must be greater than 0");
    (0..capacity).map(|_| Slot::Empty).collect()
}

/// Generic fixed-capacity slot array with a pluggable hash and a deterministic probe
/// sequence.
///
/// The capacity is fixed at construction; no operation ever resizes or rehashes.
///
/// # Examples
///
/// ```
/// use hashkit::table::ProbeTable;
///
/// let mut table = ProbeTable::new(5);
/// table.insert("apple").unwrap();
/// assert!(table.contains(&"apple"));
///
/// table.remove(&"apple").unwrap();
/// assert!(!table.contains(&"apple"));
/// assert!(table.remove(&"apple").is_err());
/// ```
#[derive(Clone)]
pub struct ProbeTable<T, H = ByteLengthHasher> {
    slots: Vec<Slot<T>>,
    // Number of occupied slots; tombstones are not counted.
    len: usize,
    hasher: H,
}

impl<T> ProbeTable<T> {
    /// Creates a table using the byte-length hash.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, ByteLengthHasher)
    }
}

impl<T, H> ProbeTable<T, H> {
    /// Creates a table using the provided hash strategy.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
            hasher,
        }
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether no value is stored. Tombstones left by removals do not count.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fraction of slots holding a value.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Returns the hash strategy that places values.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns the slot array, including empty slots and tombstones.
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Iterates over stored values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(Slot::value)
    }

    /// Resets every slot to empty, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| Slot::Empty);
        self.len = 0;
    }
}

impl<T: Eq, H: ProbeHasher<T>> ProbeTable<T, H> {
    /// Returns the origin slot of `value`'s probe sequence.
    ///
    /// The value may be any borrowed form of `T`, as long as the hash strategy hashes the
    /// borrowed form the same way as the owned one (`String` and `str`, for example).
    pub fn hash<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        H: ProbeHasher<Q>,
        Q: ?Sized,
    {
        (self.hasher.hash_value(value) % self.slots.len() as u64) as usize
    }

    /// Returns the slot an insert of `value` would write to, or `None` when the probe
    /// sequence is exhausted.
    pub fn probe<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        H: ProbeHasher<Q>,
        Q: Eq + ?Sized,
    {
        seek_slot(&self.slots, self.hash(value), value)
    }

    /// Stores `value`. Inserting a value that is already present leaves the table as is.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CapacityExhausted`](crate::error::ErrorKind::CapacityExhausted)
    /// when no free slot is reachable; the table is not modified.
    pub fn insert(&mut self, value: T) -> Result<(), Error> {
        let Some(index) = self.probe(&value) else {
            return Err(Error::capacity_exhausted(self.capacity()));
        };
        if !self.slots[index].is_occupied() {
            self.len += 1;
        }
        self.slots[index] = Slot::Occupied(value);
        Ok(())
    }

    /// Removes `value` and returns the stored instance.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound) when the value is
    /// absent; the table is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashkit::table::ProbeTable;
    /// let mut table = ProbeTable::new(5);
    /// table.insert(String::from("apple")).unwrap();
    ///
    /// let stored: String = table.remove("apple").unwrap();
    /// assert_eq!(stored, "apple");
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> Result<T, Error>
    where
        T: Borrow<Q>,
        H: ProbeHasher<Q>,
        Q: Eq + ?Sized,
    {
        let Some(index) = find_slot(&self.slots, self.hash(value), value) else {
            return Err(Error::not_found("value"));
        };
        self.len -= 1;
        match std::mem::replace(&mut self.slots[index], Slot::Deleted) {
            Slot::Occupied(stored) => Ok(stored),
            _ => unreachable!("find_slot only returns occupied slots"),
        }
    }

    /// Returns whether `value` is stored.
    ///
    /// The walk stops at the first empty slot, steps over tombstones and gives up after
    /// `capacity` probes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashkit::table::ProbeTable;
    /// let mut table = ProbeTable::new(5);
    /// table.insert(String::from("apple")).unwrap();
    /// assert!(table.contains("apple"));
    /// assert!(!table.contains("grape"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        H: ProbeHasher<Q>,
        Q: Eq + ?Sized,
    {
        find_slot(&self.slots, self.hash(value), value).is_some()
    }
}

impl<T: fmt::Debug, H> fmt::Debug for ProbeTable<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeTable")
            .field("capacity", &self.slots.len())
            .field("len", &self.len)
            .field("slots", &self.slots)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::hash::MurmurHasher;

    #[test]
    fn test_new_table() {
        let table: ProbeTable<&str> = ProbeTable::new(7);
        assert_eq!(table.capacity(), 7);
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
        assert!(table.slots().iter().all(|s| *s == Slot::Empty));
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity() {
        let _ = ProbeTable::<u32>::new(0);
    }

    #[test]
    fn test_hash_is_byte_length_modulo_capacity() {
        let table: ProbeTable<&str> = ProbeTable::new(5);
        assert_eq!(table.hash(&"abc"), 3);
        assert_eq!(table.hash(&"abcdefg"), 2);
        assert_eq!(table.hash(&""), 0);
    }

    #[test]
    fn test_probe_steps_by_stride() {
        let mut table: ProbeTable<&str> = ProbeTable::new(7);
        assert_eq!(table.probe(&"a"), Some(1));

        table.insert("a").unwrap();
        // "a" itself, then the next free slot for a colliding value
        assert_eq!(table.probe(&"a"), Some(1));
        assert_eq!(table.probe(&"b"), Some(3));

        table.insert("b").unwrap();
        assert_eq!(table.probe(&"c"), Some(5));
        assert_eq!(table.slots()[3], Slot::Occupied("b"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut table = ProbeTable::new(5);
        table.insert("x").unwrap();
        table.insert("x").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![&"x"]);
    }

    #[test]
    fn test_full_table_rejects_insert() {
        let mut table = ProbeTable::new(3);
        for value in ["a", "bb", "ccc"] {
            table.insert(value).unwrap();
        }
        let err = table.insert("dddd").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExhausted);
        assert_eq!(table.len(), 3);
        assert!(!table.contains(&"dddd"));

        // re-inserting a stored value still finds its own slot
        table.insert("bb").unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_remove_leaves_tombstone() {
        let mut table = ProbeTable::new(5);
        table.insert("a").unwrap();
        table.insert("b").unwrap();

        assert_eq!(table.remove(&"a").unwrap(), "a");
        assert_eq!(table.slots()[1], Slot::Deleted);
        assert_eq!(table.len(), 1);
        assert!(!table.contains(&"a"));
        assert!(table.contains(&"b"));

        let err = table.remove(&"a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_insert_reuses_tombstone() {
        let mut table = ProbeTable::new(5);
        table.insert("a").unwrap();
        table.insert("b").unwrap();
        table.remove(&"a").unwrap();

        // "b" lives past the tombstone, so it must be found instead of duplicated
        assert_eq!(table.probe(&"b"), Some(3));
        table.insert("b").unwrap();
        assert_eq!(table.len(), 1);

        assert_eq!(table.probe(&"c"), Some(1));
        table.insert("c").unwrap();
        assert_eq!(table.slots()[1], Slot::Occupied("c"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_tombstones_count_as_free_when_full() {
        let mut table = ProbeTable::new(3);
        for value in ["a", "bb", "ccc"] {
            table.insert(value).unwrap();
        }
        table.remove(&"bb").unwrap();
        assert_eq!(table.probe(&"dddd"), Some(2));
        table.insert("dddd").unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut table = ProbeTable::new(5);
        table.insert("a").unwrap();
        table.insert("b").unwrap();
        table.remove(&"a").unwrap();

        table.clear();
        assert_eq!(table.capacity(), 5);
        assert!(table.is_empty());
        assert!(table.slots().iter().all(|s| *s == Slot::Empty));
        assert!(!table.contains(&"b"));
    }

    #[test]
    fn test_load_factor() {
        let mut table = ProbeTable::new(4);
        assert_eq!(table.load_factor(), 0.0);
        table.insert("a").unwrap();
        table.insert("bb").unwrap();
        assert_eq!(table.load_factor(), 0.5);
    }

    #[test]
    fn test_owned_values_looked_up_by_borrowed_form() {
        let mut table = ProbeTable::with_hasher(11, MurmurHasher::default());
        table.insert(String::from("apple")).unwrap();
        table.insert(String::from("pear")).unwrap();

        assert_eq!(table.hash("apple"), table.hash(&String::from("apple")));
        assert!(table.contains("apple"));
        assert_eq!(table.remove("apple").unwrap(), "apple");
        assert!(!table.contains("apple"));
        assert!(table.contains("pear"));
    }

    #[test]
    fn test_with_murmur_hasher() {
        let mut table = ProbeTable::with_hasher(101, MurmurHasher::default());
        for i in 0..50u64 {
            table.insert(i).unwrap();
        }
        assert_eq!(table.len(), 50);
        assert!((0..50u64).all(|i| table.contains(&i)));
        assert!(!table.contains(&50u64));
    }
}
