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

//! Fixed-capacity value set with derived set algebra.
//!
//! [`HashSet`] stores values in a [`ProbeTable`](crate::table::ProbeTable). Intersection,
//! union, difference and the subset test are built only from `insert`, `contains` and
//! iteration, and always materialize a freshly allocated result.
//!
//! # Usage
//!
//! ```rust
//! use hashkit::set::HashSet;
//!
//! let mut a = HashSet::new(7);
//! let mut b = HashSet::new(7);
//! for v in ["x", "yy", "zzz"] {
//!     a.insert(v).unwrap();
//! }
//! b.insert("yy").unwrap();
//!
//! let common = a.intersection(&b).unwrap();
//! assert!(common.contains(&"yy"));
//! assert!(common.is_subset(&a));
//! assert!(b.is_subset(&a));
//! assert!(!a.is_subset(&b));
//! ```

mod algebra;
mod hash_set;

pub use self::hash_set::HashSet;
