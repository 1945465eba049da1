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
use crate::serializer::Serializer;

impl<T: Serializer> Serializer for Option<T> {
    #[inline]
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        match self {
            Some(v) => v.jolt_write(context),
            None => {
                context.writer.put_null();
                Ok(())
            }
        }
    }

    #[inline]
    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        context.reader.skip_whitespace()?;
        if context.reader.match_literal("null")? {
            context.reader.consume_null()?;
            return Ok(None);
        }
        Ok(Some(T::jolt_read(context)?))
    }

    /// `None` is written as `null`, so optional keys never use the object form.
    #[inline(always)]
    fn jolt_is_string_like() -> bool {
        false
    }

    #[inline(always)]
    fn jolt_is_none(&self) -> bool {
        self.is_none()
    }

    #[inline(always)]
    fn jolt_missing() -> Option<Self> {
        Some(None)
    }
}
