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

use std::hash::Hash;

use crate::hash::ProbeHasher;

/// Default seed for [`MurmurHasher`].
pub const DEFAULT_SEED: u32 = 9001;

/// MurmurHash3 x64/128 over the [`Hash`] stream of a value, keeping the low 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MurmurHasher {
    seed: u32,
}

impl MurmurHasher {
    /// Creates a hasher using the provided seed.
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Returns the seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for MurmurHasher {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl<T: Hash + ?Sized> ProbeHasher<T> for MurmurHasher {
    fn hash_value(&self, value: &T) -> u64 {
        let mut hasher = mur3::Hasher128::with_seed(self.seed);
        value.hash(&mut hasher);
        let (h1, _) = hasher.finish128();
        h1
    }
}
