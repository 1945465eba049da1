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

//! Tuples are fixed-arity records: an object keyed by positional index.

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::struct_::{next_key, skip_unknown};
use crate::serializer::{missing_field, Serializer};

macro_rules! impl_tuple_serializer {
    ($(($idx:tt, $name:literal, $T:ident, $var:ident)),+) => {
        impl<$($T: Serializer),+> Serializer for ($($T,)+) {
            fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
                context.inc_depth()?;
                context.writer.begin_object();
                $(
                    context.writer.put_key($name);
                    self.$idx.jolt_write(context)?;
                )+
                context.writer.end_object();
                context.dec_depth();
                Ok(())
            }

            fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
                context.reader.skip_whitespace()?;
                context.reader.consume_char(b'{')?;
                context.inc_depth()?;
                $(let mut $var: Option<$T> = None;)+
                while let Some(key) = next_key(context)? {
                    match key.as_str() {
                        $($name => $var = Some($T::jolt_read(context)?),)+
                        _ => skip_unknown(context, "tuple", &key, false)?,
                    }
                }
                context.dec_depth();
                Ok(($(
                    match $var {
                        Some(v) => v,
                        None => missing_field::<$T>("tuple", $name)?,
                    },
                )+))
            }
        }
    };
}

impl_tuple_serializer!((0, "0", T0, v0));
impl_tuple_serializer!((0, "0", T0, v0), (1, "1", T1, v1));
impl_tuple_serializer!((0, "0", T0, v0), (1, "1", T1, v1), (2, "2", T2, v2));
impl_tuple_serializer!(
    (0, "0", T0, v0),
    (1, "1", T1, v1),
    (2, "2", T2, v2),
    (3, "3", T3, v3)
);
impl_tuple_serializer!(
    (0, "0", T0, v0),
    (1, "1", T1, v1),
    (2, "2", T2, v2),
    (3, "3", T3, v3),
    (4, "4", T4, v4)
);
impl_tuple_serializer!(
    (0, "0", T0, v0),
    (1, "1", T1, v1),
    (2, "2", T2, v2),
    (3, "3", T3, v3),
    (4, "4", T4, v4),
    (5, "5", T5, v5)
);
impl_tuple_serializer!(
    (0, "0", T0, v0),
    (1, "1", T1, v1),
    (2, "2", T2, v2),
    (3, "3", T3, v3),
    (4, "4", T4, v4),
    (5, "5", T5, v5),
    (6, "6", T6, v6)
);
impl_tuple_serializer!(
    (0, "0", T0, v0),
    (1, "1", T1, v1),
    (2, "2", T2, v2),
    (3, "3", T3, v3),
    (4, "4", T4, v4),
    (5, "5", T5, v5),
    (6, "6", T6, v6),
    (7, "7", T7, v7)
);
