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
use crate::resolver::context::ReadContext;
use crate::resolver::context::WriteContext;
use crate::serializer::Serializer;

macro_rules! impl_int_serializer {
    ($($ty:ty),+) => {
        $(
            impl Serializer for $ty {
                #[inline(always)]
                fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
                    context.writer.put_display(self);
                    Ok(())
                }

                #[inline(always)]
                fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
                    context.reader.skip_whitespace()?;
                    context
                        .reader
                        .consume_int::<$ty>()
                        .map_err(Error::enhance_invalid_data::<$ty>)
                }
            }
        )+
    };
}

impl_int_serializer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_serializer {
    ($($ty:ty),+) => {
        $(
            impl Serializer for $ty {
                #[inline]
                fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
                    if !self.is_finite() {
                        crate::not_allowed!("{} cannot be represented in JSON", self);
                    }
                    // Debug keeps the fraction and switches to exponents for extreme magnitudes
                    context.writer.put_raw(&format!("{:?}", self));
                    Ok(())
                }

                #[inline]
                fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
                    context.reader.skip_whitespace()?;
                    let text = context.reader.consume_number_raw()?;
                    text.parse::<$ty>().map_err(|_| {
                        Error::invalid_data(format!(
                            "{} is not a valid {}",
                            text,
                            stringify!($ty)
                        ))
                    })
                }
            }
        )+
    };
}

impl_float_serializer!(f32, f64);
