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

//! Shared array encoding for every sequence-like container.

use crate::buffer::display_byte;
use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::Serializer;

pub fn write_collection<'a, T: Serializer + 'a, I: IntoIterator<Item = &'a T>>(
    iter: I,
    context: &mut WriteContext,
) -> Result<(), Error> {
    context.inc_depth()?;
    context.writer.begin_array();
    for item in iter {
        context.writer.begin_element();
        item.jolt_write(context)?;
    }
    context.writer.end_array();
    context.dec_depth();
    Ok(())
}

/// Reads `[a, b, ...]`, handing each element to `push`.
pub fn read_elements<T, F>(context: &mut ReadContext, mut push: F) -> Result<(), Error>
where
    T: Serializer,
    F: FnMut(T),
{
    context.reader.skip_whitespace()?;
    context.reader.consume_char(b'[')?;
    context.inc_depth()?;
    context.reader.skip_whitespace()?;
    if context.reader.current_char()? == b']' {
        context.reader.advance(1);
        context.dec_depth();
        return Ok(());
    }
    loop {
        push(T::jolt_read(context)?);
        context.reader.skip_whitespace()?;
        let at = context.reader.position();
        match context.reader.next_byte()? {
            b',' => continue,
            b']' => break,
            other => {
                return Err(Error::malformed(
                    at,
                    format!("expected ',' or ']', found '{}'", display_byte(other)),
                ))
            }
        }
    }
    context.dec_depth();
    Ok(())
}

pub fn read_collection<C, T>(context: &mut ReadContext) -> Result<C, Error>
where
    T: Serializer,
    C: Default + Extend<T>,
{
    let mut out = C::default();
    read_elements::<T, _>(context, |item| out.extend(std::iter::once(item)))?;
    Ok(out)
}
