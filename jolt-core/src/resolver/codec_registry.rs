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

//! Per-instance table of codecs that override derived aggregates at runtime.

use super::context::{ReadContext, WriteContext};
use crate::error::Error;
use crate::serializer::Serializer;
use crate::value::Value;
use std::any::{Any, TypeId};
use std::collections::HashMap;

pub type WriteFn = Box<dyn Fn(&dyn Any, &mut WriteContext) -> Result<(), Error> + Send + Sync>;
pub type ReadFn = Box<dyn Fn(&mut ReadContext) -> Result<Box<dyn Any>, Error> + Send + Sync>;

/// Type-erased write/read pair registered for one Rust type.
pub struct RuntimeCodec {
    type_name: &'static str,
    write_fn: WriteFn,
    read_fn: ReadFn,
}

impl RuntimeCodec {
    /// Erases a typed write/read pair.
    pub fn new<T, W, R>(write: W, read: R) -> RuntimeCodec
    where
        T: 'static,
        W: Fn(&T, &mut WriteContext) -> Result<(), Error> + Send + Sync + 'static,
        R: Fn(&mut ReadContext) -> Result<T, Error> + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<T>();
        let write_fn: WriteFn = Box::new(move |value, context| {
            match value.downcast_ref::<T>() {
                Some(v) => write(v, context),
                None => Err(Error::type_mismatch(type_name)),
            }
        });
        let read_fn: ReadFn = Box::new(move |context| {
            read(context).map(|v| Box::new(v) as Box<dyn Any>)
        });
        RuntimeCodec {
            type_name,
            write_fn,
            read_fn,
        }
    }

    /// Builds a codec that maps through the dynamic [`Value`] tree.
    pub fn from_value_fns<T, W, R>(to_value: W, from_value: R) -> RuntimeCodec
    where
        T: 'static,
        W: Fn(&T) -> Result<Value, Error> + Send + Sync + 'static,
        R: Fn(Value) -> Result<T, Error> + Send + Sync + 'static,
    {
        RuntimeCodec::new::<T, _, _>(
            move |value: &T, context: &mut WriteContext| to_value(value)?.jolt_write(context),
            move |context: &mut ReadContext| from_value(Value::jolt_read(context)?),
        )
    }

    #[inline(always)]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline(always)]
    pub fn get_write_fn(&self) -> &WriteFn {
        &self.write_fn
    }

    #[inline(always)]
    pub fn get_read_fn(&self) -> &ReadFn {
        &self.read_fn
    }
}

#[derive(Default)]
pub struct CodecRegistry {
    codecs: HashMap<TypeId, RuntimeCodec>,
}

impl CodecRegistry {
    /// Registers `codec` for `T`. The last registration for a type wins.
    pub fn register<T: 'static>(&mut self, codec: RuntimeCodec) {
        log::trace!("registering runtime codec for {}", codec.type_name());
        if self.codecs.insert(TypeId::of::<T>(), codec).is_some() {
            log::debug!(
                "runtime codec for {} replaced by a newer registration",
                std::any::type_name::<T>()
            );
        }
    }

    pub fn unregister<T: 'static>(&mut self) -> bool {
        self.codecs.remove(&TypeId::of::<T>()).is_some()
    }

    #[inline]
    pub fn get<T: 'static>(&self) -> Option<&RuntimeCodec> {
        if self.codecs.is_empty() {
            return None;
        }
        self.codecs.get(&TypeId::of::<T>())
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.codecs.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

/// Writes `value` through its runtime codec, if one is registered.
#[inline]
pub fn write_with_registry<T: 'static>(
    value: &T,
    context: &mut WriteContext,
) -> Option<Result<(), Error>> {
    let codec = context.get_jolt().codec_registry().get::<T>()?;
    Some((codec.get_write_fn())(value, context))
}

/// Reads a `T` through its runtime codec, if one is registered.
#[inline]
pub fn read_with_registry<T: 'static>(context: &mut ReadContext) -> Option<Result<T, Error>> {
    let codec = context.get_jolt().codec_registry().get::<T>()?;
    Some((codec.get_read_fn())(context).and_then(|boxed| {
        boxed
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::type_mismatch(std::any::type_name::<T>()))
    }))
}
