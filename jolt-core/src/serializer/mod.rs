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

mod bool;
mod box_;
pub mod collection;
pub mod datetime;
pub mod enum_;
mod list;
pub mod map;
mod number;
mod option;
pub mod polymorphic;
mod raw;
mod set;
mod string;
pub mod struct_;
mod tuple;

pub use raw::RawJson;

/// Core trait of the mapping engine: how one Rust type reads and writes its
/// JSON form.
///
/// `jolt_read` implementations skip leading whitespace themselves and leave
/// the reader on the first byte after the value, so container serializers
/// never need to know what kind of token comes next.
pub trait Serializer: Sized + 'static {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error>;

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error>;

    /// Whether the wire form is a JSON string. Maps keyed by string-like
    /// types are written as objects, all other maps as arrays of pairs.
    #[inline(always)]
    fn jolt_is_string_like() -> bool {
        false
    }

    #[inline(always)]
    fn jolt_is_none(&self) -> bool {
        false
    }

    /// Value used when an object omits the field entirely. `None` makes the
    /// field required.
    #[inline(always)]
    fn jolt_missing() -> Option<Self> {
        None
    }
}

/// Implemented by derived plain aggregates. Gives access to the bare field
/// list so that polymorphic encodings can splice the fields of a payload into
/// an object that also carries the discriminator.
pub trait StructSerializer: Serializer {
    /// Writes the entries of `self` into an object that is already open.
    fn jolt_write_fields(&self, context: &mut WriteContext) -> Result<(), Error>;

    /// Reads entries up to and including the closing `}`. The opening `{`
    /// (and possibly some leading entries) has already been consumed.
    fn jolt_read_fields(context: &mut ReadContext) -> Result<Self, Error>;
}

/// Extension map that collects the keys a derived aggregate does not declare.
pub trait ExtraFields: Default + 'static {
    /// Writes each entry as a key of the enclosing object. `reserved` holds
    /// every key the aggregate itself claims; an entry under one of them is
    /// an error.
    fn jolt_write_extra(&self, reserved: &[&str], context: &mut WriteContext)
        -> Result<(), Error>;

    /// Reads the value of `key` (the reader sits after the colon) and stores it.
    fn jolt_read_extra(&mut self, key: String, context: &mut ReadContext) -> Result<(), Error>;
}

/// Writes one extension entry unless a declared member already owns `key`.
pub fn write_extra_entry<V: Serializer>(
    key: &str,
    value: &V,
    reserved: &[&str],
    context: &mut WriteContext,
) -> Result<(), Error> {
    if reserved.contains(&key) {
        return Err(Error::invalid_data(format!(
            "extension key {:?} collides with a declared member",
            key
        )));
    }
    context.writer.put_key(key);
    value.jolt_write(context)
}

/// Decodes the argument of a setter method, inferring its type from the
/// method signature.
#[inline(always)]
pub fn read_setter_arg<S, T: Serializer>(
    _setter: fn(&mut S, T),
    context: &mut ReadContext,
) -> Result<T, Error> {
    T::jolt_read(context)
}

/// Fills in a field that was absent from the input.
#[inline]
pub fn missing_field<T: Serializer>(ty: &'static str, field: &'static str) -> Result<T, Error> {
    T::jolt_missing().ok_or_else(|| Error::missing_field(ty, field))
}

impl Serializer for () {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.put_null();
        Ok(())
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        context.reader.skip_whitespace()?;
        context.reader.consume_null()
    }
}
