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

//! Owning pointers are transparent on the wire.

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::Serializer;
use std::rc::Rc;
use std::sync::Arc;

macro_rules! impl_pointer_serializer {
    ($($ptr:ident),+) => {
        $(
            impl<T: Serializer> Serializer for $ptr<T> {
                #[inline(always)]
                fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
                    T::jolt_write(self, context)
                }

                #[inline(always)]
                fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
                    Ok($ptr::new(T::jolt_read(context)?))
                }

                #[inline(always)]
                fn jolt_is_string_like() -> bool {
                    T::jolt_is_string_like()
                }

                #[inline(always)]
                fn jolt_is_none(&self) -> bool {
                    T::jolt_is_none(self)
                }

                #[inline(always)]
                fn jolt_missing() -> Option<Self> {
                    T::jolt_missing().map($ptr::new)
                }
            }
        )+
    };
}

impl_pointer_serializer!(Box, Rc, Arc);
