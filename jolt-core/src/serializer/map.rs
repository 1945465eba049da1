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

//! Maps keyed by string-like types are JSON objects. Any other key type is
//! written as an array of `[key, value]` pairs.

use crate::buffer::display_byte;
use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::collection::read_elements;
use crate::serializer::{write_extra_entry, ExtraFields, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

pub fn write_map_data<'a, K, V, I>(iter: I, context: &mut WriteContext) -> Result<(), Error>
where
    K: Serializer + 'a,
    V: Serializer + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    context.inc_depth()?;
    if K::jolt_is_string_like() {
        context.writer.begin_object();
        for (k, v) in iter {
            context.writer.begin_key();
            k.jolt_write(context)?;
            context.writer.put_colon();
            v.jolt_write(context)?;
        }
        context.writer.end_object();
    } else {
        context.writer.begin_array();
        for (k, v) in iter {
            context.writer.begin_element();
            context.writer.begin_array();
            context.writer.begin_element();
            k.jolt_write(context)?;
            context.writer.begin_element();
            v.jolt_write(context)?;
            context.writer.end_array();
        }
        context.writer.end_array();
    }
    context.dec_depth();
    Ok(())
}

/// Reads the next key of an object whose keys are decoded as `K`.
/// Returns `None` once the closing `}` has been consumed.
fn next_map_key<K: Serializer>(context: &mut ReadContext) -> Result<Option<K>, Error> {
    loop {
        context.reader.skip_whitespace()?;
        match context.reader.current_char()? {
            b'}' => {
                context.reader.advance(1);
                return Ok(None);
            }
            b',' => context.reader.advance(1),
            b'"' => {
                let key = K::jolt_read(context)?;
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

struct Pair<K, V>(K, V);

impl<K: Serializer, V: Serializer> Serializer for Pair<K, V> {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.begin_array();
        context.writer.begin_element();
        self.0.jolt_write(context)?;
        context.writer.begin_element();
        self.1.jolt_write(context)?;
        context.writer.end_array();
        Ok(())
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        context.reader.skip_whitespace()?;
        context.reader.consume_char(b'[')?;
        let k = K::jolt_read(context)?;
        context.reader.skip_whitespace()?;
        context.reader.consume_char(b',')?;
        let v = V::jolt_read(context)?;
        context.reader.skip_whitespace()?;
        context.reader.consume_char(b']')?;
        Ok(Pair(k, v))
    }
}

pub fn read_map_data<K, V, F>(context: &mut ReadContext, mut insert: F) -> Result<(), Error>
where
    K: Serializer,
    V: Serializer,
    F: FnMut(K, V),
{
    if !K::jolt_is_string_like() {
        return read_elements::<Pair<K, V>, _>(context, |pair| insert(pair.0, pair.1));
    }
    context.reader.skip_whitespace()?;
    context.reader.consume_char(b'{')?;
    context.inc_depth()?;
    while let Some(key) = next_map_key::<K>(context)? {
        let value = V::jolt_read(context)?;
        insert(key, value);
    }
    context.dec_depth();
    Ok(())
}

impl<K, V, S> Serializer for HashMap<K, V, S>
where
    K: Serializer + Eq + Hash,
    V: Serializer,
    S: BuildHasher + Default + 'static,
{
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_map_data(self.iter(), context)
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        let mut map = HashMap::with_hasher(S::default());
        read_map_data(context, |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }
}

impl<K, V> Serializer for BTreeMap<K, V>
where
    K: Serializer + Ord,
    V: Serializer,
{
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_map_data(self.iter(), context)
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        let mut map = BTreeMap::new();
        read_map_data(context, |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }
}

impl<V: Serializer> ExtraFields for BTreeMap<String, V> {
    fn jolt_write_extra(&self, reserved: &[&str], context: &mut WriteContext) -> Result<(), Error> {
        for (k, v) in self {
            write_extra_entry(k, v, reserved, context)?;
        }
        Ok(())
    }

    fn jolt_read_extra(&mut self, key: String, context: &mut ReadContext) -> Result<(), Error> {
        let value = V::jolt_read(context)?;
        self.insert(key, value);
        Ok(())
    }
}

impl<V: Serializer, S: BuildHasher + Default + 'static> ExtraFields for HashMap<String, V, S> {
    fn jolt_write_extra(&self, reserved: &[&str], context: &mut WriteContext) -> Result<(), Error> {
        for (k, v) in self {
            write_extra_entry(k, v, reserved, context)?;
        }
        Ok(())
    }

    fn jolt_read_extra(&mut self, key: String, context: &mut ReadContext) -> Result<(), Error> {
        let value = V::jolt_read(context)?;
        self.insert(key, value);
        Ok(())
    }
}
