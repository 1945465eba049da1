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

//! Enumerated constants travel as their declared member name.

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};

#[inline]
pub fn write_name(name: &str, context: &mut WriteContext) -> Result<(), Error> {
    context.writer.put_string(name);
    Ok(())
}

/// Reads a member name and resolves it with `lookup`.
pub fn read_name<T>(
    context: &mut ReadContext,
    ty: &'static str,
    lookup: impl FnOnce(&str) -> Option<T>,
) -> Result<T, Error> {
    context.reader.skip_whitespace()?;
    let at = context.reader.position();
    let name = context.reader.consume_string()?;
    lookup(&name).ok_or_else(|| {
        Error::unknown_enum(format!(
            "unknown variant {:?} of {} at byte {}",
            name, ty, at
        ))
    })
}
