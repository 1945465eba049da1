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

//! Polymorphic hierarchies: a closed enum whose variants each wrap one
//! concrete subtype, tagged on the wire by a discriminator string.
//!
//! Three wire shapes are supported:
//!
//! ```text
//! WrapperObject   {"name":"<d>","value":{<fields>}}
//! WrapperArray    ["<d>",{<fields>}]
//! Property(key)   {"<key>":"<d>",<fields>}
//! ```
//!
//! The discriminator is always read first. For the wrapper object the
//! `"name"` entry must precede `"value"`, and for the property shape the
//! discriminator key must be the first key of the object.
//!
//! The property shape splices the payload's own fields next to the
//! discriminator, so a payload whose encoding is taken over by a runtime
//! codec cannot use it; that combination fails with
//! [`Error::Unsupported`].

use crate::error::Error;
use crate::jolt::Jolt;
use crate::resolver::codec_registry::{read_with_registry, write_with_registry};
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::struct_::{next_key, skip_unknown};
use crate::serializer::{Serializer, StructSerializer};

pub const WRAPPER_NAME_KEY: &str = "name";
pub const WRAPPER_VALUE_KEY: &str = "value";

/// What the discriminator string identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscriminatorMode {
    /// Fully qualified Rust type name of the payload.
    Class,
    /// Declared short name of the variant.
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    WrapperObject,
    WrapperArray,
    Property(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolyDescriptor {
    pub base: &'static str,
    pub mode: DiscriminatorMode,
    pub shape: WireShape,
}

/// Implemented by `#[derive(JoltObject)]` for enums marked
/// `#[jolt(polymorphic(...))]`.
pub trait PolymorphicSerializer: Serializer {
    fn jolt_descriptor() -> &'static PolyDescriptor;

    fn jolt_discriminator(&self) -> &'static str;

    /// Writes the payload. For [`WireShape::Property`] this writes the bare
    /// fields into the open object, otherwise a complete value.
    fn jolt_write_payload(&self, context: &mut WriteContext) -> Result<(), Error>;

    /// Resolves `discriminator` and reads the matching payload, failing with
    /// [`Error::UnresolvedDiscriminator`] when no subtype matches.
    fn jolt_read_payload(discriminator: &str, context: &mut ReadContext) -> Result<Self, Error>;
}

pub fn write<T: PolymorphicSerializer>(value: &T, context: &mut WriteContext) -> Result<(), Error> {
    if let Some(result) = write_with_registry(value, context) {
        return result;
    }
    let descriptor = T::jolt_descriptor();
    let discriminator = value.jolt_discriminator();
    context.inc_depth()?;
    match descriptor.shape {
        WireShape::WrapperObject => {
            context.writer.begin_object();
            context.writer.put_key(WRAPPER_NAME_KEY);
            context.writer.put_string(discriminator);
            context.writer.put_key(WRAPPER_VALUE_KEY);
            value.jolt_write_payload(context)?;
            context.writer.end_object();
        }
        WireShape::WrapperArray => {
            context.writer.begin_array();
            context.writer.begin_element();
            context.writer.put_string(discriminator);
            context.writer.begin_element();
            value.jolt_write_payload(context)?;
            context.writer.end_array();
        }
        WireShape::Property(key) => {
            context.writer.begin_object();
            context.writer.put_key(key);
            context.writer.put_string(discriminator);
            value.jolt_write_payload(context)?;
            context.writer.end_object();
        }
    }
    context.dec_depth();
    Ok(())
}

fn expect_key(
    context: &mut ReadContext,
    descriptor: &PolyDescriptor,
    expected: &'static str,
) -> Result<(), Error> {
    let at = context.reader.position();
    match next_key(context)? {
        Some(key) if key == expected => Ok(()),
        Some(key) => Err(Error::malformed(
            at,
            format!(
                "expected key {:?} of polymorphic {}, found {:?}",
                expected, descriptor.base, key
            ),
        )),
        None => Err(Error::malformed(
            at,
            format!(
                "expected key {:?} of polymorphic {}, found end of object",
                expected, descriptor.base
            ),
        )),
    }
}

pub fn read<T: PolymorphicSerializer>(context: &mut ReadContext) -> Result<T, Error> {
    if let Some(result) = read_with_registry::<T>(context) {
        return result;
    }
    let descriptor = T::jolt_descriptor();
    context.reader.skip_whitespace()?;
    let value = match descriptor.shape {
        WireShape::WrapperObject => {
            context.reader.consume_char(b'{')?;
            context.inc_depth()?;
            expect_key(context, descriptor, WRAPPER_NAME_KEY)?;
            let discriminator = String::jolt_read(context)?;
            expect_key(context, descriptor, WRAPPER_VALUE_KEY)?;
            let value = T::jolt_read_payload(&discriminator, context)?;
            while let Some(key) = next_key(context)? {
                skip_unknown(context, descriptor.base, &key, false)?;
            }
            value
        }
        WireShape::WrapperArray => {
            context.reader.consume_char(b'[')?;
            context.inc_depth()?;
            let discriminator = String::jolt_read(context)?;
            context.reader.skip_whitespace()?;
            context.reader.consume_char(b',')?;
            let value = T::jolt_read_payload(&discriminator, context)?;
            context.reader.skip_whitespace()?;
            context.reader.consume_char(b']')?;
            value
        }
        WireShape::Property(key) => {
            context.reader.consume_char(b'{')?;
            context.inc_depth()?;
            expect_key(context, descriptor, key)?;
            let discriminator = String::jolt_read(context)?;
            // the payload consumes its own fields and the closing brace
            T::jolt_read_payload(&discriminator, context)?
        }
    };
    context.dec_depth();
    Ok(value)
}

/// Error for a discriminator that matches no variant of `T`.
#[cold]
pub fn unresolved<T: PolymorphicSerializer>(discriminator: &str) -> Error {
    Error::unresolved_discriminator(T::jolt_descriptor().base, discriminator)
}

fn reject_registered_payload<T, P>(jolt: &Jolt) -> Result<(), Error>
where
    T: PolymorphicSerializer,
    P: 'static,
{
    if jolt.has_codec::<P>() {
        return Err(Error::unsupported(format!(
            "{} has a runtime codec and cannot be a property-shaped payload of {}",
            std::any::type_name::<P>(),
            T::jolt_descriptor().base
        )));
    }
    Ok(())
}

/// Writes the fields of a property-shaped payload into the open object.
pub fn write_property_payload<T: PolymorphicSerializer, P: StructSerializer>(
    payload: &P,
    context: &mut WriteContext,
) -> Result<(), Error> {
    reject_registered_payload::<T, P>(context.get_jolt())?;
    payload.jolt_write_fields(context)
}

/// Reads the remaining fields of a property-shaped payload.
pub fn read_property_payload<T: PolymorphicSerializer, P: StructSerializer>(
    context: &mut ReadContext,
) -> Result<P, Error> {
    reject_registered_payload::<T, P>(context.get_jolt())?;
    P::jolt_read_fields(context)
}
