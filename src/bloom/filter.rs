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

use crate::bloom::BloomFilterBuilder;

/// A Bloom filter with two salted hash streams.
///
/// Use [`BloomFilter::new`] for the default salts or [`BloomFilterBuilder`] to size the
/// filter by accuracy or to choose the salts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// Number of bits in the filter
    filter_len: u64,
    salts: [u64; 2],
    /// Count of bits set to 1
    num_bits_set: u64,
    bit_array: Vec<u64>,
}

impl BloomFilter {
    /// Creates an empty filter of `filter_len` bits using the default salts.
    ///
    /// # Panics
    ///
    /// Panics if `filter_len` is 0 or exceeds [`MAX_FILTER_LEN`](crate::bloom::MAX_FILTER_LEN).
    pub fn new(filter_len: u64) -> Self {
        BloomFilterBuilder::with_len(filter_len).build()
    }

    pub(super) fn from_parts(filter_len: u64, salts: [u64; 2]) -> Self {
        let num_words = filter_len.div_ceil(64) as usize;
        BloomFilter {
            filter_len,
            salts,
            num_bits_set: 0,
            bit_array: vec![0u64; num_words],
        }
    }

    // ========================================================================
    // Update Operations
    // ========================================================================

    /// Adds an item. Afterwards `contains(item)` returns `true` until the next clear.
    pub fn add(&mut self, item: &str) {
        for bit_index in self.positions(item) {
            self.set_bit(bit_index);
        }
    }

    /// Tests and adds an item in a single pass.
    ///
    /// Returns whether the item was possibly present before the call.
    pub fn contains_and_add(&mut self, item: &str) -> bool {
        let positions = self.positions(item);
        let was_present = positions.iter().all(|&bit| self.get_bit(bit));
        for bit_index in positions {
            self.set_bit(bit_index);
        }
        was_present
    }

    /// Resets every bit to zero, keeping the length and salts.
    pub fn clear(&mut self) {
        self.bit_array.fill(0);
        self.num_bits_set = 0;
    }

    // ========================================================================
    // Query Operations
    // ========================================================================

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: the item was **possibly** added (or a false positive)
    /// - `false`: the item was **definitely not** added
    pub fn contains(&self, item: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        self.positions(item).iter().all(|&bit| self.get_bit(bit))
    }

    // ========================================================================
    // Set Operations
    // ========================================================================

    /// Merges another filter into this one via bitwise OR.
    ///
    /// # Panics
    ///
    /// Panics if the filters are not compatible (different length or salts).
    pub fn union(&mut self, other: &BloomFilter) {
        assert!(
            self.is_compatible(other),
            "Cannot union incompatible Bloom filters"
        );

        for (word, other_word) in self.bit_array.iter_mut().zip(&other.bit_array) {
            *word |= *other_word;
        }
        self.recount_bits_set();
    }

    /// Intersects this filter with another via bitwise AND.
    ///
    /// Items added to both filters stay members; the false positive guarantee of the
    /// result is no better than that of either input.
    ///
    /// # Panics
    ///
    /// Panics if the filters are not compatible (different length or salts).
    pub fn intersect(&mut self, other: &BloomFilter) {
        assert!(
            self.is_compatible(other),
            "Cannot intersect incompatible Bloom filters"
        );

        for (word, other_word) in self.bit_array.iter_mut().zip(&other.bit_array) {
            *word &= *other_word;
        }
        self.recount_bits_set();
    }

    /// Checks if two filters hash items to the same positions.
    pub fn is_compatible(&self, other: &BloomFilter) -> bool {
        self.filter_len == other.filter_len && self.salts == other.salts
    }

    // ========================================================================
    // Statistics and Properties
    // ========================================================================

    /// Returns whether no bit is set.
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Returns the number of bits set to 1.
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
    }

    /// Returns the number of bits in the filter.
    pub fn filter_len(&self) -> u64 {
        self.filter_len
    }

    /// Returns the salts of the two hash streams.
    pub fn salts(&self) -> [u64; 2] {
        self.salts
    }

    /// Returns the fraction of bits set.
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / self.filter_len as f64
    }

    /// Estimates the current false positive probability.
    ///
    /// A non-member is reported when both of its positions hit set bits. Assuming the two
    /// positions are independent and uniform, that happens with probability `load^2`.
    pub fn estimated_fpp(&self) -> f64 {
        let load = self.load_factor();
        load * load
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Computes the bit position of each hash stream.
    fn positions(&self, item: &str) -> [u64; 2] {
        self.salts
            .map(|salt| rolling_hash(item, salt, self.filter_len))
    }

    fn get_bit(&self, bit_index: u64) -> bool {
        let word_index = (bit_index / 64) as usize;
        let mask = 1u64 << (bit_index % 64);
        (self.bit_array[word_index] & mask) != 0
    }

    /// Sets a single bit and updates the count if it wasn't already set.
    fn set_bit(&mut self, bit_index: u64) {
        let word_index = (bit_index / 64) as usize;
        let mask = 1u64 << (bit_index % 64);

        if (self.bit_array[word_index] & mask) == 0 {
            self.bit_array[word_index] |= mask;
            self.num_bits_set += 1;
        }
    }

    fn recount_bits_set(&mut self) {
        self.num_bits_set = self
            .bit_array
            .iter()
            .map(|word| word.count_ones() as u64)
            .sum();
    }
}

/// Polynomial rolling hash over the characters of `item`, reduced modulo `modulus` at
/// every step.
fn rolling_hash(item: &str, salt: u64, modulus: u64) -> u64 {
    let (salt, modulus) = (salt as u128, modulus as u128);
    item.chars().fold(0u128, |hash, c| {
        (hash * salt + u128::from(u32::from(c))) % modulus
    }) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_filter() {
        let filter = BloomFilter::new(100);
        assert_eq!(filter.filter_len(), 100);
        assert_eq!(filter.bit_array.len(), 2);
        assert_eq!(filter.salts(), [17, 223]);
        assert!(filter.is_empty());
        assert!(!filter.contains(""));
    }

    #[test]
    fn test_rolling_hash() {
        assert_eq!(rolling_hash("", 17, 64), 0);
        // 'a' = 97
        assert_eq!(rolling_hash("a", 17, 64), 33);
        assert_eq!(rolling_hash("ab", 17, 1000), (97 * 17 + 98) % 1000);
        // 'к' = 1082
        assert_eq!(rolling_hash("к", 223, 2000), 1082);
    }

    #[test]
    fn test_positions() {
        let filter = BloomFilter::new(64);
        assert_eq!(filter.positions("cat"), [40, 22]);
    }

    #[test]
    fn test_add_sets_both_bits() {
        let mut filter = BloomFilter::new(64);
        filter.add("cat");
        assert!(filter.get_bit(40));
        assert!(filter.get_bit(22));
        assert_eq!(filter.bits_used(), 2);

        // re-adding sets nothing new
        filter.add("cat");
        assert_eq!(filter.bits_used(), 2);
    }

    #[test]
    fn test_contains_needs_both_bits() {
        let mut filter = BloomFilter::new(64);
        filter.set_bit(40);
        assert!(!filter.contains("cat"));
        filter.set_bit(22);
        assert!(filter.contains("cat"));
    }

    #[test]
    fn test_contains_and_add() {
        let mut filter = BloomFilter::new(64);
        assert!(!filter.contains_and_add("cat"));
        assert!(filter.contains_and_add("cat"));
    }

    #[test]
    fn test_clear() {
        let mut filter = BloomFilter::new(64);
        filter.add("cat");
        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.filter_len(), 64);
        assert!(!filter.contains("cat"));
    }

    #[test]
    fn test_statistics() {
        let mut filter = BloomFilter::new(64);
        assert_eq!(filter.load_factor(), 0.0);
        assert_eq!(filter.estimated_fpp(), 0.0);

        filter.add("cat");
        assert_eq!(filter.load_factor(), 2.0 / 64.0);
        assert_eq!(filter.estimated_fpp(), (2.0 / 64.0) * (2.0 / 64.0));
    }

    #[test]
    fn test_union_and_intersect() {
        let mut f1 = BloomFilter::new(128);
        let mut f2 = BloomFilter::new(128);
        f1.add("a");
        f1.add("b");
        f2.add("b");
        f2.add("c");

        let mut merged = f1.clone();
        merged.union(&f2);
        for item in ["a", "b", "c"] {
            assert!(merged.contains(item));
        }

        f1.intersect(&f2);
        assert!(f1.contains("b"));
    }

    #[test]
    #[should_panic(expected = "Cannot union incompatible Bloom filters")]
    fn test_union_incompatible() {
        let mut f1 = BloomFilter::new(64);
        let f2 = BloomFilter::new(128);
        f1.union(&f2);
    }
}
