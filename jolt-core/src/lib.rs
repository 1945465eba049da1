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

//! # Jolt Core
//!
//! Runtime of the Jolt JSON data binder. Types opt in through
//! `#[derive(JoltObject)]` (from the `jolt-derive` crate), which generates
//! [`Serializer`] implementations on top of the building blocks here.
//!
//! ## Architecture
//!
//! - **`buffer`**: the buffered [`Reader`](buffer::Reader) over a pluggable
//!   [`Source`](buffer::Source), and the structural [`Writer`](buffer::Writer)
//!   that inserts separators and escapes strings
//! - **`token`**: token consumers on the reader (strings, numbers, literals,
//!   raw values, skipping)
//! - **`serializer`**: the mapping engine, one module per family of types,
//!   plus polymorphic hierarchies
//! - **`resolver`**: per-call contexts and the runtime codec registry
//! - **`codec`**: per-field and per-type custom codecs
//! - **`value`**: a dynamic JSON tree
//! - **`jolt`**: the [`Jolt`] entry point
//!
//! ## Mapping priority
//!
//! For a given type the first applicable rule wins:
//!
//! 1. a type-level `#[jolt(ignore)]`
//! 2. a type-level `#[jolt(with = ...)]` codec
//! 3. a codec registered at runtime on the [`Jolt`] instance
//! 4. polymorphic enums
//! 5. the generated structural encoding
//!
//! ## Usage
//!
//! ```rust
//! use jolt_core::Jolt;
//! use std::collections::BTreeMap;
//!
//! let jolt = Jolt::default();
//! let mut scores = BTreeMap::new();
//! scores.insert("ada".to_string(), vec![3, 5]);
//! let text = jolt.encode_to_string(&scores).unwrap();
//! assert_eq!(text, r#"{"ada":[3,5]}"#);
//! let back: BTreeMap<String, Vec<i32>> = jolt.decode_str(&text).unwrap();
//! assert_eq!(back, scores);
//! ```

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod jolt;
pub mod resolver;
pub mod serializer;
pub mod token;
pub mod value;

pub use buffer::{FnSink, FnSource, IoSink, IoSource, Reader, Sink, Source, Writer};
pub use codec::{Codec, Stringified};
pub use config::{Config, UnicodeEscape};
pub use error::Error;
pub use jolt::Jolt;
pub use resolver::context::{ReadContext, WriteContext};
pub use serializer::datetime::DateFormat;
pub use serializer::polymorphic::{
    DiscriminatorMode, PolyDescriptor, PolymorphicSerializer, WireShape,
};
pub use serializer::{ExtraFields, RawJson, Serializer, StructSerializer};
pub use value::{Number, Value};
