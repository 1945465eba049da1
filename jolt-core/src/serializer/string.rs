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
use crate::resolver::context::ReadContext;
use crate::resolver::context::WriteContext;
use crate::serializer::Serializer;

impl Serializer for String {
    #[inline]
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.put_string(self);
        Ok(())
    }

    #[inline]
    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        context.reader.skip_whitespace()?;
        context.reader.consume_string()
    }

    #[inline(always)]
    fn jolt_is_string_like() -> bool {
        true
    }
}

impl Serializer for char {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        let mut tmp = [0u8; 4];
        context.writer.put_string(self.encode_utf8(&mut tmp));
        Ok(())
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        context.reader.skip_whitespace()?;
        let at = context.reader.position();
        let s = context.reader.consume_string()?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::invalid_data(format!(
                "expected a single character at byte {}, found {:?}",
                at, s
            ))),
        }
    }

    #[inline(always)]
    fn jolt_is_string_like() -> bool {
        true
    }
}
