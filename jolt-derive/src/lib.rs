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

//! # Jolt Derive Macros
//!
//! `#[derive(JoltObject)]` generates the JSON binding of a type at compile
//! time from its declaration and its `#[jolt(...)]` attributes.
//!
//! **Supported Types:**
//! - Structs with named fields, encoded as objects in declaration order
//! - Tuple structs, encoded as objects keyed `"0"`, `"1"`, ...
//! - Unit structs, encoded as `{}`
//! - Unit-only enums, encoded as the variant name
//! - Enums of newtype variants marked `#[jolt(polymorphic(...))]`
//!
//! **Field attributes:** `rename`, `alias`, `skip`, `raw`, `with`, `default`,
//! `extra`.
//!
//! **Type attributes:** `ignore`, `with`, `polymorphic(mode, shape, key)`,
//! `getter(name, method)`, `setter(name, method, alias)`, `default`,
//! `deny_unknown_fields`.
//!
//! ```rust, ignore
//! use jolt::JoltObject;
//! use std::collections::BTreeMap;
//!
//! #[derive(JoltObject, Debug, PartialEq)]
//! #[jolt(getter(name = "display", method = display))]
//! struct Person {
//!     #[jolt(rename = "full_name", alias = "name")]
//!     name: String,
//!     age: Option<u8>,
//!     #[jolt(skip)]
//!     cached: Vec<u8>,
//!     #[jolt(extra)]
//!     rest: BTreeMap<String, jolt::Value>,
//! }
//!
//! #[derive(JoltObject, Debug, PartialEq)]
//! #[jolt(polymorphic(mode = "name", shape = "property", key = "kind"))]
//! enum Animal {
//!     #[jolt(rename = "dog")]
//!     Dog(Dog),
//!     #[jolt(rename = "cat")]
//!     Cat(Cat),
//! }
//! ```
//!
//! Ambiguous configurations are compile errors: unions, data enums without
//! `polymorphic`, polymorphic variants that do not wrap exactly one type, and
//! two members claiming the same wire name or alias.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derive macro for JSON binding.
///
/// Implements `jolt_core::Serializer` for the annotated type, plus
/// `StructSerializer` for structs and `PolymorphicSerializer` for polymorphic
/// enums.
///
/// # Example
///
/// ```rust, ignore
/// use jolt::JoltObject;
///
/// #[derive(JoltObject, Debug, PartialEq)]
/// struct Address {
///     street: String,
///     #[jolt(alias = "town")]
///     city: String,
/// }
/// ```
#[proc_macro_derive(JoltObject, attributes(jolt))]
pub fn proc_macro_derive_jolt_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_serializer(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
