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

//! Field-level metadata parsing for `#[jolt(...)]` attributes.
//!
//! - `rename = "wire"`: name used on the wire
//! - `alias = "old"`: extra name accepted on decode, repeatable
//! - `skip`: not encoded, filled with `Default` on decode
//! - `raw`: `String` field copied verbatim as JSON text
//! - `with = <expr>`: custom codec expression
//! - `default`: a missing field falls back to `Default`
//! - `extra`: extension map collecting undeclared keys

use crate::util::{ident_name, SourceField};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, Field, Fields, LitStr, Variant};

#[derive(Debug, Clone, Default)]
pub struct JoltFieldMeta {
    pub rename: Option<String>,
    pub aliases: Vec<String>,
    pub skip: bool,
    pub raw: bool,
    pub with: Option<Expr>,
    pub default: bool,
    pub extra: bool,
}

/// Naming metadata of an enum variant: only `rename` and `alias` apply.
#[derive(Debug, Clone, Default)]
pub struct JoltVariantMeta {
    pub rename: Option<String>,
    pub aliases: Vec<String>,
}

/// A source field together with its parsed metadata and resolved wire name.
pub struct BoundField<'a> {
    pub source: SourceField<'a>,
    pub meta: JoltFieldMeta,
    pub wire_name: String,
}

impl BoundField<'_> {
    /// Whether the field owns a key of its own on the wire.
    pub fn is_keyed(&self) -> bool {
        !self.meta.skip && !self.meta.extra
    }
}

pub(crate) fn parse_lit_str(nested: &ParseNestedMeta) -> syn::Result<String> {
    let lit: LitStr = nested.value()?.parse()?;
    Ok(lit.value())
}

/// Accepts both `with = "expr"` and `with = expr`.
pub(crate) fn parse_expr(nested: &ParseNestedMeta) -> syn::Result<Expr> {
    let input = nested.value()?;
    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        lit.parse()
    } else {
        input.parse()
    }
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<JoltFieldMeta> {
    let mut meta = JoltFieldMeta::default();
    for attr in attrs {
        if !attr.path().is_ident("jolt") {
            continue;
        }
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                meta.rename = Some(parse_lit_str(&nested)?);
            } else if nested.path.is_ident("alias") {
                meta.aliases.push(parse_lit_str(&nested)?);
            } else if nested.path.is_ident("skip") {
                meta.skip = true;
            } else if nested.path.is_ident("raw") {
                meta.raw = true;
            } else if nested.path.is_ident("with") {
                meta.with = Some(parse_expr(&nested)?);
            } else if nested.path.is_ident("default") {
                meta.default = true;
            } else if nested.path.is_ident("extra") {
                meta.extra = true;
            } else {
                return Err(nested.error(format!(
                    "unknown jolt field attribute `{}`",
                    nested
                        .path
                        .get_ident()
                        .map(|i| i.unraw().to_string())
                        .unwrap_or_default()
                )));
            }
            Ok(())
        })?;
    }
    Ok(meta)
}

/// Parse `#[jolt(...)]` attributes from a field
pub fn parse_field_meta(field: &Field) -> syn::Result<JoltFieldMeta> {
    let meta = parse_field_attrs(&field.attrs)?;
    let fail = |msg: &str| Err(syn::Error::new_spanned(field, msg));
    if meta.raw && meta.with.is_some() {
        return fail("`raw` and `with` cannot be combined");
    }
    if meta.skip && (meta.raw || meta.with.is_some() || meta.extra) {
        return fail("a skipped field takes no other jolt attributes");
    }
    if meta.extra
        && (meta.raw || meta.with.is_some() || meta.rename.is_some() || !meta.aliases.is_empty())
    {
        return fail("`extra` cannot be combined with naming or codec attributes");
    }
    Ok(meta)
}

pub fn parse_variant_meta(variant: &Variant) -> syn::Result<JoltVariantMeta> {
    let meta = parse_field_attrs(&variant.attrs)?;
    if meta.skip || meta.raw || meta.with.is_some() || meta.default || meta.extra {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "only `rename` and `alias` are supported on enum variants",
        ));
    }
    Ok(JoltVariantMeta {
        rename: meta.rename,
        aliases: meta.aliases,
    })
}

/// Parses the metadata of every field and resolves its wire name: the
/// `rename` if present, else the identifier, else the positional index.
pub fn bind_fields(fields: &Fields) -> syn::Result<Vec<BoundField<'_>>> {
    let mut bound = Vec::new();
    let mut has_extra = false;
    for source in crate::util::source_fields(fields) {
        let meta = parse_field_meta(source.field)?;
        if meta.extra {
            if has_extra {
                return Err(syn::Error::new_spanned(
                    source.field,
                    "only one field can be marked `extra`",
                ));
            }
            has_extra = true;
        }
        let wire_name = meta
            .rename
            .clone()
            .unwrap_or_else(|| match &source.field.ident {
                Some(ident) => ident_name(ident),
                None => source.original_index.to_string(),
            });
        bound.push(BoundField {
            source,
            meta,
            wire_name,
        });
    }
    Ok(bound)
}
