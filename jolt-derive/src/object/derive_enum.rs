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

use crate::object::field_meta::parse_variant_meta;
use crate::object::type_meta::{PolyMeta, PolyMode, PolyShape};
use crate::util::{ident_name, NameClaims};
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{DataEnum, Fields, Ident, Type};

struct EnumVariant<'a> {
    ident: &'a Ident,
    wire_name: String,
    aliases: Vec<String>,
    payload: Option<&'a Type>,
}

fn collect_variants(data_enum: &DataEnum) -> syn::Result<Vec<EnumVariant<'_>>> {
    let mut claims = NameClaims::default();
    let mut variants = Vec::with_capacity(data_enum.variants.len());
    for variant in &data_enum.variants {
        let meta = parse_variant_meta(variant)?;
        let wire_name = meta.rename.unwrap_or_else(|| ident_name(&variant.ident));
        let owner = variant.ident.to_string();
        claims.claim(&wire_name, &owner, variant.ident.span())?;
        for alias in &meta.aliases {
            claims.claim(alias, &owner, variant.ident.span())?;
        }
        let payload = match &variant.fields {
            Fields::Unit => None,
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Some(&fields.unnamed[0].ty),
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "polymorphic variants must wrap exactly one payload type, like `Dog(Dog)`",
                ))
            }
        };
        variants.push(EnumVariant {
            ident: &variant.ident,
            wire_name,
            aliases: meta.aliases,
            payload,
        });
    }
    Ok(variants)
}

/// Enumerated constants: every variant is a unit, written as its name.
pub fn gen_unit_enum(data_enum: &DataEnum, type_name: &str) -> syn::Result<(TokenStream, TokenStream)> {
    if data_enum.variants.is_empty() {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "JoltObject cannot be derived for an enum without variants",
        ));
    }
    if let Some(v) = data_enum.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return Err(syn::Error::new_spanned(
            v,
            "enums with data variants need #[jolt(polymorphic(...))]",
        ));
    }
    let variants = collect_variants(data_enum)?;
    let idents: Vec<_> = variants.iter().map(|v| v.ident).collect();
    let names: Vec<_> = variants.iter().map(|v| &v.wire_name).collect();
    let alias_patterns = variants.iter().map(|v| {
        let aliases = &v.aliases;
        quote! { #(| #aliases)* }
    });
    let write = quote! {
        if let Some(result) = ::jolt_core::resolver::codec_registry::write_with_registry(self, context) {
            return result;
        }
        let name = match self {
            #(Self::#idents => #names,)*
        };
        ::jolt_core::serializer::enum_::write_name(name, context)
    };
    let read = quote! {
        if let Some(result) = ::jolt_core::resolver::codec_registry::read_with_registry::<Self>(context) {
            return result;
        }
        ::jolt_core::serializer::enum_::read_name(context, #type_name, |name| match name {
            #(#names #alias_patterns => Some(Self::#idents),)*
            _ => None,
        })
    };
    Ok((write, read))
}

/// Generated pieces of a polymorphic enum: the `PolymorphicSerializer` body.
pub fn gen_polymorphic(
    data_enum: &DataEnum,
    type_name: &str,
    poly: &PolyMeta,
) -> syn::Result<TokenStream> {
    let variants = collect_variants(data_enum)?;
    let mut payloads = Vec::with_capacity(variants.len());
    for (variant, source) in variants.iter().zip(&data_enum.variants) {
        match variant.payload {
            Some(ty) => payloads.push(ty),
            None => {
                return Err(syn::Error::new_spanned(
                    source,
                    "polymorphic variants must wrap exactly one payload type, like `Dog(Dog)`",
                ))
            }
        }
    }
    if poly.mode == PolyMode::Class {
        let mut claims = NameClaims::default();
        for (variant, ty) in variants.iter().zip(&payloads) {
            let text = ty.to_token_stream().to_string();
            claims.claim(&text, &variant.ident.to_string(), variant.ident.span())?;
        }
    }
    if variants.is_empty() {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "a polymorphic enum needs at least one variant",
        ));
    }

    let idents: Vec<_> = variants.iter().map(|v| v.ident).collect();
    let mode = match poly.mode {
        PolyMode::Class => quote! { ::jolt_core::DiscriminatorMode::Class },
        PolyMode::Name => quote! { ::jolt_core::DiscriminatorMode::Name },
    };
    let (shape, is_property) = match &poly.shape {
        PolyShape::WrapperObject => (quote! { ::jolt_core::WireShape::WrapperObject }, false),
        PolyShape::WrapperArray => (quote! { ::jolt_core::WireShape::WrapperArray }, false),
        PolyShape::Property(key) => (quote! { ::jolt_core::WireShape::Property(#key) }, true),
    };

    let discriminators: Vec<TokenStream> = match poly.mode {
        PolyMode::Name => variants
            .iter()
            .map(|v| {
                let name = &v.wire_name;
                quote! { #name }
            })
            .collect(),
        PolyMode::Class => payloads
            .iter()
            .map(|ty| quote! { ::std::any::type_name::<#ty>() })
            .collect(),
    };

    let write_payload = if is_property {
        quote! { ::jolt_core::serializer::polymorphic::write_property_payload::<Self, _>(payload, context) }
    } else {
        quote! { ::jolt_core::Serializer::jolt_write(payload, context) }
    };
    let read_payloads: Vec<TokenStream> = payloads
        .iter()
        .map(|ty| {
            if is_property {
                quote! { ::jolt_core::serializer::polymorphic::read_property_payload::<Self, #ty>(context)? }
            } else {
                quote! { <#ty as ::jolt_core::Serializer>::jolt_read(context)? }
            }
        })
        .collect();

    let read_payload = match poly.mode {
        PolyMode::Name => {
            let alias_patterns = variants.iter().map(|v| {
                let aliases = &v.aliases;
                quote! { #(| #aliases)* }
            });
            quote! {
                match discriminator {
                    #(#discriminators #alias_patterns => Ok(Self::#idents(#read_payloads)),)*
                    _ => Err(::jolt_core::serializer::polymorphic::unresolved::<Self>(discriminator)),
                }
            }
        }
        PolyMode::Class => quote! {
            #(
                if discriminator == #discriminators {
                    return Ok(Self::#idents(#read_payloads));
                }
            )*
            Err(::jolt_core::serializer::polymorphic::unresolved::<Self>(discriminator))
        },
    };

    Ok(quote! {
        fn jolt_descriptor() -> &'static ::jolt_core::PolyDescriptor {
            static DESCRIPTOR: ::jolt_core::PolyDescriptor = ::jolt_core::PolyDescriptor {
                base: #type_name,
                mode: #mode,
                shape: #shape,
            };
            &DESCRIPTOR
        }

        fn jolt_discriminator(&self) -> &'static str {
            match self {
                #(Self::#idents(_) => #discriminators,)*
            }
        }

        fn jolt_write_payload(&self, context: &mut ::jolt_core::WriteContext) -> ::std::result::Result<(), ::jolt_core::Error> {
            match self {
                #(Self::#idents(payload) => #write_payload,)*
            }
        }

        fn jolt_read_payload(discriminator: &str, context: &mut ::jolt_core::ReadContext) -> ::std::result::Result<Self, ::jolt_core::Error> {
            #read_payload
        }
    })
}
