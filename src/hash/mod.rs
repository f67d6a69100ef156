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

//! Hash strategies that place values into probe tables.
//!
//! A [`ProbeHasher`] maps a value to a 64-bit magnitude; the table reduces it modulo its
//! capacity to obtain the origin of the probe sequence. Two strategies are provided:
//!
//! - [`ByteLengthHasher`]: the length in bytes of the value's textual form. Deliberately
//!   weak and collision-prone; the probe sequence carries all of the correctness burden.
//! - [`MurmurHasher`]: MurmurHash3 x64/128 over the value's [`Hash`](std::hash::Hash)
//!   representation.
//!
//! # Usage
//!
//! ```rust
//! use hashkit::hash::ByteLengthHasher;
//! use hashkit::hash::MurmurHasher;
//! use hashkit::hash::ProbeHasher;
//!
//! assert_eq!(ByteLengthHasher.hash_value("abc"), 3);
//! assert_eq!(ByteLengthHasher.hash_value(&1234), 4);
//!
//! let murmur = MurmurHasher::default();
//! assert_eq!(murmur.hash_value("abc"), murmur.hash_value("abc"));
//! ```

mod byte_length;
mod murmurhash;

pub use self::byte_length::ByteLengthHasher;
pub use self::murmurhash::DEFAULT_SEED;
pub use self::murmurhash::MurmurHasher;

/// Strategy computing the content-derived magnitude of a value.
///
/// Implementations must be deterministic: the same value hashes to the same magnitude for
/// the lifetime of a table, otherwise stored values become unreachable.
pub trait ProbeHasher<T: ?Sized> {
    /// Returns the hash magnitude of `value`.
    fn hash_value(&self, value: &T) -> u64;
}
