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

use std::fmt;
use std::fmt::Write;

use crate::hash::ProbeHasher;

/// Hashes a value to the number of UTF-8 bytes in its [`Display`](fmt::Display) form.
///
/// Every value of the same printed width collides, so `"a"`, `"b"` and `7` all share an
/// origin slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ByteLengthHasher;

impl<T: fmt::Display + ?Sized> ProbeHasher<T> for ByteLengthHasher {
    fn hash_value(&self, value: &T) -> u64 {
        let mut counter = ByteCounter(0);
        // Counting never fails; only a broken Display impl could report an error.
        let _ = write!(counter, "{value}");
        counter.0 as u64
    }
}

/// Sink that measures formatted output without allocating it.
struct ByteCounter(usize);

impl Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}
