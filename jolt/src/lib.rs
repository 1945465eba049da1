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

//! # Jolt
//!
//! Jolt maps Rust types to JSON text and back. The binding of a type is
//! declared with `#[derive(JoltObject)]` and `#[jolt(...)]` attributes, and
//! all encode/decode calls go through a [`Jolt`] instance that carries the
//! configuration and the runtime codec registry.
//!
//! ## Key Features
//!
//! - **Streaming decode**: a fixed-capacity buffer refilled from any
//!   [`Source`], so large documents never need to be held in memory at once
//! - **Lenient by default**: unknown keys are skipped, or rejected with
//!   `deny_unknown_fields`
//! - **Aliases and renames** for evolving wire names
//! - **Polymorphism**: wrapper object, wrapper array or sibling property
//!   discriminators, by variant name or by Rust type name
//! - **Custom codecs** per field or per type, and runtime codecs that
//!   override derived bindings
//!
//! ## Object binding
//!
//! ```rust
//! use jolt::{Error, Jolt, JoltObject};
//! use std::collections::HashMap;
//!
//! #[derive(JoltObject, Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: i32,
//!     address: Address,
//!     hobbies: Vec<String>,
//!     metadata: HashMap<String, String>,
//! }
//!
//! #[derive(JoltObject, Debug, PartialEq)]
//! struct Address {
//!     street: String,
//!     #[jolt(alias = "town")]
//!     city: String,
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let jolt = Jolt::default();
//! let text = r#"{
//!     "name": "John Doe",
//!     "age": 30,
//!     "address": {"street": "123 Main St", "town": "New York"},
//!     "hobbies": ["reading", "coding"],
//!     "metadata": {"level": "senior"},
//!     "ignored": [1, 2, {"deep": null}]
//! }"#;
//! let person: Person = jolt.decode_str(text)?;
//! assert_eq!(person.address.city, "New York");
//!
//! let encoded = jolt.encode_to_string(&person)?;
//! let back: Person = jolt.decode_str(&encoded)?;
//! assert_eq!(person, back);
//! # Ok(())
//! # }
//! ```
//!
//! ## Polymorphism
//!
//! ```rust
//! use jolt::{Jolt, JoltObject};
//!
//! #[derive(JoltObject, Debug, PartialEq)]
//! struct Dog { bark: String }
//!
//! #[derive(JoltObject, Debug, PartialEq)]
//! struct Cat { lives: u8 }
//!
//! #[derive(JoltObject, Debug, PartialEq)]
//! #[jolt(polymorphic(mode = "name", shape = "wrapper_object"))]
//! enum Animal {
//!     #[jolt(rename = "dog")]
//!     Dog(Dog),
//!     #[jolt(rename = "cat")]
//!     Cat(Cat),
//! }
//!
//! let jolt = Jolt::default();
//! let dog = Animal::Dog(Dog { bark: "woof".into() });
//! let text = jolt.encode_to_string(&dog).unwrap();
//! assert_eq!(text, r#"{"name":"dog","value":{"bark":"woof"}}"#);
//! assert_eq!(jolt.decode_str::<Animal>(&text).unwrap(), dog);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use jolt::{Jolt, UnicodeEscape};
//!
//! let jolt = Jolt::default()
//!     .max_depth(32)
//!     .buffer_capacity(1024)
//!     .deny_unknown_fields(true)
//!     .unicode_escape(UnicodeEscape::Latin1);
//! assert_eq!(jolt.config().max_depth(), 32);
//! ```
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade; Jolt
//! never installs a logger itself.

pub use jolt_core::{
    buffer, codec, config, error, resolver, serializer, token, value, Codec, Config, DateFormat,
    DiscriminatorMode, Error, ExtraFields, FnSink, FnSource, IoSink, IoSource, Jolt, Number,
    PolyDescriptor, PolymorphicSerializer, RawJson, ReadContext, Reader, Serializer, Sink, Source,
    Stringified, StructSerializer, UnicodeEscape, Value, WireShape, WriteContext, Writer,
};
pub use jolt_derive::JoltObject;
