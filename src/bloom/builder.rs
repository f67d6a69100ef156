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

use crate::bloom::BloomFilter;
use crate::bloom::DEFAULT_SALTS;
use crate::bloom::MAX_FILTER_LEN;

/// Builder for creating [`BloomFilter`] instances.
///
/// Provides two sizing modes:
/// - [`with_len()`](Self::with_len): an exact number of bits
/// - [`with_accuracy()`](Self::with_accuracy): target item count and false positive rate
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder {
    filter_len: u64,
    salts: [u64; 2],
}

impl BloomFilterBuilder {
    /// Creates a builder for a filter of exactly `filter_len` bits.
    ///
    /// # Panics
    ///
    /// Panics if `filter_len` is 0 or exceeds [`MAX_FILTER_LEN`].
    pub fn with_len(filter_len: u64) -> Self {
        assert!(filter_len > 0, "filter_len must be greater than 0");
        assert!(
            filter_len <= MAX_FILTER_LEN,
            "filter_len must not exceed {MAX_FILTER_LEN}"
        );
        BloomFilterBuilder {
            filter_len,
            salts: DEFAULT_SALTS,
        }
    }

    /// Creates a builder sized so that `max_items` insertions keep the false positive
    /// probability at about `fpp`.
    ///
    /// # Panics
    ///
    /// Panics if `max_items` is 0 or `fpp` is not in (0.0, 1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashkit::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(10_000, 0.05).build();
    /// assert!(filter.is_empty());
    /// ```
    pub fn with_accuracy(max_items: u64, fpp: f64) -> Self {
        assert!(max_items > 0, "max_items must be greater than 0");
        assert!(
            fpp > 0.0 && fpp < 1.0,
            "fpp must be between 0.0 and 1.0 (exclusive)"
        );
        Self::with_len(Self::suggest_filter_len(max_items, fpp))
    }

    /// Sets the salts of the two hash streams (default: 17 and 223).
    ///
    /// **Important**: filters with different salts cannot be merged.
    ///
    /// # Panics
    ///
    /// Panics if both salts are equal, which would collapse the two streams into one.
    pub fn salts(mut self, first: u64, second: u64) -> Self {
        assert_ne!(first, second, "salts must differ");
        self.salts = [first, second];
        self
    }

    /// Creates an empty filter with the configured length and salts.
    pub fn build(self) -> BloomFilter {
        BloomFilter::from_parts(self.filter_len, self.salts)
    }

    /// Suggests the filter length for `max_items` items at false positive rate `fpp`.
    ///
    /// With two hashes the rate after `n` insertions into `m` bits is
    /// `p = (1 - e^(-2n/m))^2`, hence `m = -2n / ln(1 - sqrt(p))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashkit::bloom::BloomFilterBuilder;
    /// let len = BloomFilterBuilder::suggest_filter_len(1000, 0.01);
    /// assert!(len > 18_900 && len < 19_100); // ~18982 bits
    /// ```
    pub fn suggest_filter_len(max_items: u64, fpp: f64) -> u64 {
        let n = max_items as f64;
        let len = (-2.0 * n / (1.0 - fpp.sqrt()).ln()).ceil() as u64;
        len.clamp(1, MAX_FILTER_LEN)
    }
}
