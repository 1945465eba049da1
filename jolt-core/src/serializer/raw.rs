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
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::struct_::{read_raw, write_raw};
use crate::serializer::Serializer;
use std::fmt;

/// JSON text carried through encode and decode unchanged.
///
/// The writer emits the text as is, so it must already be valid JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawJson(pub String);

impl RawJson {
    pub fn new<S: Into<String>>(text: S) -> Self {
        RawJson(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RawJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serializer for RawJson {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_raw(&self.0, context)
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        read_raw(context).map(RawJson)
    }
}
