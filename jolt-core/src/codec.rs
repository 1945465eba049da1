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

//! Custom codecs bound with `#[jolt(with = ...)]`.
//!
//! The attribute takes any expression, so a codec can carry its own
//! construction arguments:
//!
//! ```rust, ignore
//! #[derive(JoltObject)]
//! struct Invoice {
//!     #[jolt(with = "DateFormat::new(\"%d/%m/%Y\")")]
//!     due: NaiveDate,
//!     #[jolt(with = "Stringified")]
//!     amount_cents: u64,
//! }
//! ```

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use std::fmt::Display;
use std::str::FromStr;

/// User-supplied encode/decode pair for values of type `T`.
pub trait Codec<T> {
    fn encode(&self, value: &T, context: &mut WriteContext) -> Result<(), Error>;

    fn decode(&self, context: &mut ReadContext) -> Result<T, Error>;
}

/// Writes a value as the string form of its `Display` impl and parses it
/// back with `FromStr`. Useful for integers that exceed what JSON consumers
/// can represent exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stringified;

impl<T: Display + FromStr> Codec<T> for Stringified {
    fn encode(&self, value: &T, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.put_string(&value.to_string());
        Ok(())
    }

    fn decode(&self, context: &mut ReadContext) -> Result<T, Error> {
        context.reader.skip_whitespace()?;
        let at = context.reader.position();
        let text = context.reader.consume_string()?;
        text.parse::<T>().map_err(|_| {
            Error::invalid_data(format!(
                "cannot parse {:?} at byte {} as {}",
                text,
                at,
                std::any::type_name::<T>()
            ))
        })
    }
}
