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

//! Type-level `#[jolt(...)]` attributes.
//!
//! ```text
//! #[jolt(ignore)]
//! #[jolt(with = "MoneyCodec")]
//! #[jolt(default, deny_unknown_fields)]
//! #[jolt(getter(name = "area", method = area))]
//! #[jolt(setter(name = "size", method = set_size, alias = "extent"))]
//! #[jolt(polymorphic(mode = "name", shape = "property", key = "kind"))]
//! ```

use crate::object::field_meta::{parse_expr, parse_lit_str};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, Ident};

pub const DEFAULT_PROPERTY_KEY: &str = "type";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyMode {
    Class,
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyShape {
    WrapperObject,
    WrapperArray,
    Property(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyMeta {
    pub mode: PolyMode,
    pub shape: PolyShape,
}

/// A computed member: `getter(...)` or `setter(...)`.
#[derive(Debug, Clone)]
pub struct AccessorMeta {
    pub name: String,
    pub method: Ident,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct JoltTypeMeta {
    pub ignore: bool,
    pub with: Option<Expr>,
    pub polymorphic: Option<PolyMeta>,
    pub getters: Vec<AccessorMeta>,
    pub setters: Vec<AccessorMeta>,
    pub default: bool,
    pub deny_unknown_fields: bool,
}

fn parse_accessor(nested: &ParseNestedMeta, allow_alias: bool) -> syn::Result<AccessorMeta> {
    let mut name = None;
    let mut method = None;
    let mut aliases = Vec::new();
    nested.parse_nested_meta(|inner| {
        if inner.path.is_ident("name") {
            name = Some(parse_lit_str(&inner)?);
        } else if inner.path.is_ident("method") {
            let input = inner.value()?;
            method = Some(if input.peek(syn::LitStr) {
                input.parse::<syn::LitStr>()?.parse::<Ident>()?
            } else {
                input.parse::<Ident>()?
            });
        } else if allow_alias && inner.path.is_ident("alias") {
            aliases.push(parse_lit_str(&inner)?);
        } else {
            return Err(inner.error("expected `name`, `method` or `alias`"));
        }
        Ok(())
    })?;
    let method = method.ok_or_else(|| nested.error("missing `method = ...`"))?;
    let name = name.unwrap_or_else(|| {
        let method = method.to_string();
        method
            .strip_prefix(if allow_alias { "set_" } else { "get_" })
            .map(str::to_string)
            .unwrap_or(method)
    });
    Ok(AccessorMeta {
        name,
        method,
        aliases,
    })
}

fn parse_polymorphic(nested: &ParseNestedMeta) -> syn::Result<PolyMeta> {
    let mut mode = PolyMode::Name;
    let mut shape = None;
    let mut key = None;
    if nested.input.is_empty() || nested.input.peek(syn::Token![,]) {
        return Ok(PolyMeta {
            mode,
            shape: PolyShape::WrapperObject,
        });
    }
    nested.parse_nested_meta(|inner| {
        if inner.path.is_ident("mode") {
            mode = match parse_lit_str(&inner)?.as_str() {
                "class" => PolyMode::Class,
                "name" => PolyMode::Name,
                other => {
                    return Err(inner.error(format!(
                        "unknown polymorphic mode `{}`, expected \"class\" or \"name\"",
                        other
                    )))
                }
            };
        } else if inner.path.is_ident("shape") {
            shape = Some(parse_lit_str(&inner)?);
        } else if inner.path.is_ident("key") {
            key = Some(parse_lit_str(&inner)?);
        } else if inner.path.is_ident("property") {
            shape = Some("property".to_string());
            key = Some(parse_lit_str(&inner)?);
        } else {
            return Err(inner.error("expected `mode`, `shape`, `key` or `property`"));
        }
        Ok(())
    })?;
    let shape = match shape.as_deref().unwrap_or("wrapper_object") {
        "wrapper_object" => PolyShape::WrapperObject,
        "wrapper_array" => PolyShape::WrapperArray,
        "property" => PolyShape::Property(key.take().unwrap_or_else(|| DEFAULT_PROPERTY_KEY.into())),
        other => {
            return Err(nested.error(format!(
                "unknown polymorphic shape `{}`, expected \"wrapper_object\", \"wrapper_array\" or \"property\"",
                other
            )))
        }
    };
    if key.is_some() {
        return Err(nested.error("`key` only applies to the property shape"));
    }
    Ok(PolyMeta { mode, shape })
}

pub fn parse_type_meta(attrs: &[Attribute]) -> syn::Result<JoltTypeMeta> {
    let mut meta = JoltTypeMeta::default();
    for attr in attrs {
        if !attr.path().is_ident("jolt") {
            continue;
        }
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("ignore") {
                meta.ignore = true;
            } else if nested.path.is_ident("with") {
                meta.with = Some(parse_expr(&nested)?);
            } else if nested.path.is_ident("polymorphic") {
                meta.polymorphic = Some(parse_polymorphic(&nested)?);
            } else if nested.path.is_ident("getter") {
                meta.getters.push(parse_accessor(&nested, false)?);
            } else if nested.path.is_ident("setter") {
                meta.setters.push(parse_accessor(&nested, true)?);
            } else if nested.path.is_ident("default") {
                meta.default = true;
            } else if nested.path.is_ident("deny_unknown_fields") {
                meta.deny_unknown_fields = true;
            } else {
                return Err(nested.error("unknown jolt type attribute"));
            }
            Ok(())
        })?;
    }
    let exclusive = [
        meta.ignore,
        meta.with.is_some(),
        meta.polymorphic.is_some(),
    ];
    if exclusive.iter().filter(|b| **b).count() > 1 {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "`ignore`, `with` and `polymorphic` are mutually exclusive",
        ));
    }
    Ok(meta)
}
