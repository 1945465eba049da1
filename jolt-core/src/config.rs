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

use crate::buffer::{escape_json, EscapeFn};

/// Smallest input buffer the reader accepts. Must hold the longest literal.
pub const MIN_BUFFER_CAPACITY: usize = 16;

/// How `\u` escapes inside string literals are decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnicodeEscape {
    /// Four hex digits, surrogate pairs combined into one scalar value.
    #[default]
    Full,
    /// Only `\u00XX` is accepted and maps to U+00XX.
    Latin1,
}

/// Configuration for a [`Jolt`](crate::jolt::Jolt) instance.
///
/// Shared by reference with every `WriteContext` / `ReadContext` created by
/// that instance so that all nested serializers see the same options.
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum nesting depth of arrays and objects accepted on decode and
    /// produced on encode.
    pub max_depth: u32,
    /// Capacity of the reader's fixed input buffer.
    pub buffer_capacity: usize,
    /// Reject unknown keys instead of skipping them.
    pub deny_unknown_fields: bool,
    pub unicode_escape: UnicodeEscape,
    /// Escaping primitive used for every string literal the writer emits.
    pub escape: EscapeFn,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: 128,
            buffer_capacity: 8192,
            deny_unknown_fields: false,
            unicode_escape: UnicodeEscape::Full,
            escape: escape_json,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Buffer capacity clamped to [`MIN_BUFFER_CAPACITY`].
    #[inline(always)]
    pub fn buffer_capacity(&self) -> usize {
        self.buffer_capacity.max(MIN_BUFFER_CAPACITY)
    }

    #[inline(always)]
    pub fn is_deny_unknown_fields(&self) -> bool {
        self.deny_unknown_fields
    }

    #[inline(always)]
    pub fn unicode_escape(&self) -> UnicodeEscape {
        self.unicode_escape
    }
}
