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

use crate::error::Error;
use crate::hash::ProbeHasher;
use crate::set::HashSet;

// Result capacities are derived from the operands' capacities. They bound the number of
// values the result receives, but a clustering hash combined with the fixed probe stride
// can still leave an insert without a reachable slot, which is reported as an error.
impl<T, H> HashSet<T, H>
where
    T: Clone + Eq,
    H: ProbeHasher<T> + Clone,
{
    /// Returns the values present in both `self` and `other`.
    ///
    /// The result has capacity `max(self.capacity(), other.capacity())`.
    ///
    /// # Errors
    ///
    /// Fails with `CapacityExhausted` if a value cannot be placed in the result.
    pub fn intersection(&self, other: &Self) -> Result<Self, Error> {
        let mut result = self.empty_like(self.capacity().max(other.capacity()));
        for value in self.iter().filter(|v| other.contains(*v)) {
            result.insert(value.clone())?;
        }
        Ok(result)
    }

    /// Returns the values present in `self` or `other`.
    ///
    /// The result has capacity `self.capacity() + other.capacity()`.
    ///
    /// # Errors
    ///
    /// Fails with `CapacityExhausted` if a value cannot be placed in the result.
    pub fn union(&self, other: &Self) -> Result<Self, Error> {
        let mut result = self.empty_like(self.capacity() + other.capacity());
        for value in self.iter().chain(other.iter()) {
            result.insert(value.clone())?;
        }
        Ok(result)
    }

    /// Returns the values present in `self` but not in `other`.
    ///
    /// The result has capacity `self.capacity()`.
    ///
    /// # Errors
    ///
    /// Fails with `CapacityExhausted` if a value cannot be placed in the result.
    pub fn difference(&self, other: &Self) -> Result<Self, Error> {
        let mut result = self.empty_like(self.capacity());
        for value in self.iter().filter(|v| !other.contains(*v)) {
            result.insert(value.clone())?;
        }
        Ok(result)
    }

    /// Returns true if every value of `self` is contained in `other`.
    ///
    /// `self` is the candidate subset and `other` the superset.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|v| other.contains(v))
    }

    fn empty_like(&self, capacity: usize) -> Self {
        HashSet::with_hasher(capacity, self.hasher().clone())
    }
}
