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

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use std::collections::HashMap;
use syn::ext::IdentExt;
use syn::{Field, Fields, GenericArgument, Ident, Index, Member, PathArguments, Type};

/// Source field with its original index preserved.
///
/// For tuple structs the member is the positional index, for named structs
/// the field identifier.
#[derive(Clone)]
pub struct SourceField<'a> {
    pub original_index: usize,
    pub field: &'a Field,
    pub member: Member,
}

impl<'a> SourceField<'a> {
    /// Local variable holding the decoded value before construction.
    pub fn slot(&self) -> Ident {
        format_ident!("__field_{}", self.original_index)
    }

    /// Identifier text, or the positional index of a tuple field.
    pub fn member_name(&self) -> String {
        match &self.member {
            Member::Named(ident) => ident_name(ident),
            Member::Unnamed(index) => index.index.to_string(),
        }
    }

    /// `member: value`, valid for named and tuple structs alike.
    pub fn field_init(&self, value: TokenStream) -> TokenStream {
        let member = &self.member;
        quote! { #member: #value }
    }
}

/// Returns source fields in declaration order, which is also the wire order.
pub fn source_fields(fields: &Fields) -> Vec<SourceField<'_>> {
    fields
        .iter()
        .enumerate()
        .map(|(idx, field)| SourceField {
            original_index: idx,
            field,
            member: match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index::from(idx)),
            },
        })
        .collect()
}

/// Identifier text without the `r#` prefix.
pub fn ident_name(ident: &Ident) -> String {
    ident.unraw().to_string()
}

/// Returns true if the outer type is Option, regardless of inner type
pub fn is_option_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(seg) = type_path.path.segments.last() {
            return seg.ident == "Option"
                && matches!(&seg.arguments, PathArguments::AngleBracketed(args)
                    if matches!(args.args.first(), Some(GenericArgument::Type(_))));
        }
    }
    false
}

/// Tracks every name a type claims on the wire and rejects the second claim
/// of the same name.
#[derive(Default)]
pub struct NameClaims {
    claimed: HashMap<String, String>,
}

impl NameClaims {
    pub fn claim(&mut self, name: &str, owner: &str, span: Span) -> syn::Result<()> {
        if let Some(previous) = self.claimed.get(name) {
            return Err(syn::Error::new(
                span,
                format!(
                    "wire name {:?} of `{}` is already used by `{}`",
                    name, owner, previous
                ),
            ));
        }
        self.claimed.insert(name.to_string(), owner.to_string());
        Ok(())
    }
}
