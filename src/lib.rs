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

//! Fixed-capacity hash structures.
//!
//! - [`table::ProbeTable`]: open-addressing slot array with a pluggable hash and a
//!   fixed-stride probe sequence; the engine beneath the set and the dictionary.
//! - [`set::HashSet`]: value set with intersection, union, difference and subset tests
//!   built on membership and insertion alone.
//! - [`dictionary::HashDictionary`]: string-keyed dictionary over parallel key and value
//!   arrays.
//! - [`bloom::BloomFilter`]: two-hash approximate membership filter.
//!
//! Capacities are fixed at construction and nothing is ever resized. Commands report
//! failures through [`error::Error`] and leave the structure unchanged when they fail.
//!
//! # Usage
//!
//! ```rust
//! use hashkit::set::HashSet;
//!
//! let mut set = HashSet::new(11);
//! set.insert("apple").unwrap();
//! assert!(set.contains(&"apple"));
//! assert_eq!(set.len(), 1);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bloom;
pub mod dictionary;
pub mod error;
pub mod hash;
pub mod set;
pub mod table;
