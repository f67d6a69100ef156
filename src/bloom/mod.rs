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

//! Two-hash Bloom filter for approximate string membership.
//!
//! Each item is hashed twice with salted polynomial rolling hashes over its characters,
//! `hash = (hash * salt + char_code) mod filter_len`, and the two resulting bits are set.
//! Membership holds when both bits are set, so an added item is always reported (no false
//! negatives) while a never-added item may be reported by coincidence (false positive).
//! Bits are never cleared individually; there is no deletion.
//!
//! # Usage
//!
//! ```rust
//! use hashkit::bloom::BloomFilter;
//! use hashkit::bloom::BloomFilterBuilder;
//!
//! let mut filter = BloomFilter::new(64);
//! filter.add("cat");
//! assert!(filter.contains("cat"));
//!
//! filter.clear();
//! assert!(!filter.contains("cat"));
//!
//! // Sized for 1000 items at a 1% false positive rate
//! let filter = BloomFilterBuilder::with_accuracy(1000, 0.01)
//!     .salts(31, 131)
//!     .build();
//! assert!(filter.filter_len() > 18_000);
//! ```

mod builder;
mod filter;

pub use self::builder::BloomFilterBuilder;
pub use self::filter::BloomFilter;

/// Salts of the two hash streams used unless configured otherwise.
pub const DEFAULT_SALTS: [u64; 2] = [17, 223];

/// Largest supported filter length in bits.
pub const MAX_FILTER_LEN: u64 = 1 << 35;
