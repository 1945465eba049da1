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

//! Runtime support for `#[derive(JoltObject)]` on plain aggregates.

use crate::buffer::display_byte;
use crate::error::Error;
use crate::resolver::codec_registry::{read_with_registry, write_with_registry};
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::StructSerializer;

#[inline]
pub fn write<T: StructSerializer>(value: &T, context: &mut WriteContext) -> Result<(), Error> {
    if let Some(result) = write_with_registry(value, context) {
        return result;
    }
    context.inc_depth()?;
    context.writer.begin_object();
    value.jolt_write_fields(context)?;
    context.writer.end_object();
    context.dec_depth();
    Ok(())
}

#[inline]
pub fn read<T: StructSerializer>(context: &mut ReadContext) -> Result<T, Error> {
    if let Some(result) = read_with_registry::<T>(context) {
        return result;
    }
    context.reader.skip_whitespace()?;
    context.reader.consume_char(b'{')?;
    context.inc_depth()?;
    let value = T::jolt_read_fields(context)?;
    context.dec_depth();
    Ok(value)
}

/// Advances to the next key of the current object and consumes it together
/// with its colon. Separators and whitespace are skipped. Returns `None`
/// after consuming the closing `}`.
pub fn next_key(context: &mut ReadContext) -> Result<Option<String>, Error> {
    loop {
        context.reader.skip_whitespace()?;
        match context.reader.current_char()? {
            b'}' => {
                context.reader.advance(1);
                return Ok(None);
            }
            b',' => context.reader.advance(1),
            b'"' => {
                let key = context.reader.consume_string()?;
                context.reader.skip_whitespace()?;
                context.reader.consume_char(b':')?;
                return Ok(Some(key));
            }
            other => {
                return Err(Error::malformed(
                    context.reader.position(),
                    format!("expected object key, found '{}'", display_byte(other)),
                ))
            }
        }
    }
}

/// Handles a key that no field claims: skipped with a debug diagnostic, or
/// rejected when unknown fields are denied by the type or the configuration.
pub fn skip_unknown(
    context: &mut ReadContext,
    ty: &'static str,
    key: &str,
    deny: bool,
) -> Result<(), Error> {
    if deny || context.config().is_deny_unknown_fields() {
        return Err(Error::unknown_field(ty, key));
    }
    log::debug!(
        "skipping unknown field {:?} of {} at byte {}",
        key,
        ty,
        context.reader.position()
    );
    context.reader.skip_value()
}

/// Copies the next value verbatim.
pub fn read_raw(context: &mut ReadContext) -> Result<String, Error> {
    let mut captured = Vec::new();
    context.reader.consume_raw_json(Some(&mut captured))?;
    String::from_utf8(captured).map_err(|e| Error::invalid_data(e.to_string()))
}

/// Emits `raw` as a value without escaping. An empty passthrough is `null`.
pub fn write_raw(raw: &str, context: &mut WriteContext) -> Result<(), Error> {
    if raw.is_empty() {
        context.writer.put_null();
    } else {
        context.writer.put_raw(raw);
    }
    Ok(())
}
