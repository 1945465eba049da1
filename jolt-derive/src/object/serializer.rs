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

use crate::object::field_meta::{bind_fields, BoundField};
use crate::object::type_meta::{parse_type_meta, JoltTypeMeta};
use crate::object::{derive_enum, read, write};
use crate::util::{ident_name, NameClaims};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Generics};

fn union_error(u: &syn::DataUnion) -> syn::Error {
    syn::Error::new(u.union_token.span, "JoltObject cannot be derived for unions")
}

/// Every type parameter must itself be serializable.
fn add_trait_bounds(mut generics: Generics) -> Generics {
    let params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for param in params {
        where_clause
            .predicates
            .push(syn::parse_quote! { #param: ::jolt_core::Serializer });
    }
    generics
}

/// Rejects two members claiming the same key: wire names, aliases, getters
/// and setters share one namespace.
fn check_wire_names(fields: &[BoundField], type_meta: &JoltTypeMeta) -> syn::Result<()> {
    let mut decode = NameClaims::default();
    let mut encode = NameClaims::default();
    for field in fields.iter().filter(|f| f.is_keyed()) {
        let span = syn::spanned::Spanned::span(field.source.field);
        let owner = field.source.member_name();
        encode.claim(&field.wire_name, &owner, span)?;
        decode.claim(&field.wire_name, &owner, span)?;
        for alias in &field.meta.aliases {
            decode.claim(alias, &owner, span)?;
        }
    }
    for getter in &type_meta.getters {
        encode.claim(&getter.name, &getter.method.to_string(), getter.method.span())?;
    }
    for setter in &type_meta.setters {
        let owner = setter.method.to_string();
        decode.claim(&setter.name, &owner, setter.method.span())?;
        for alias in &setter.aliases {
            decode.claim(alias, &owner, setter.method.span())?;
        }
    }
    Ok(())
}

pub fn derive_serializer(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let type_name = ident_name(name);
    let type_meta = parse_type_meta(&ast.attrs)?;
    let generics = add_trait_bounds(ast.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    if let Data::Union(u) = &ast.data {
        return Err(union_error(u));
    }
    if !matches!(ast.data, Data::Struct(_))
        && (!type_meta.getters.is_empty() || !type_meta.setters.is_empty())
    {
        return Err(syn::Error::new_spanned(
            name,
            "getters and setters are only supported on structs",
        ));
    }

    if matches!(ast.data, Data::Struct(_)) && type_meta.polymorphic.is_some() {
        return Err(syn::Error::new_spanned(
            name,
            "`polymorphic` applies to enums whose variants wrap the subtypes",
        ));
    }

    // Type-level `ignore` and `with` take over both directions.
    let (write_ts, read_ts) = if type_meta.ignore {
        (
            quote! {
                let _ = context;
                Err(::jolt_core::Error::ignored_type(#type_name))
            },
            quote! {
                let _ = context;
                Err(::jolt_core::Error::ignored_type(#type_name))
            },
        )
    } else if let Some(codec) = &type_meta.with {
        (
            quote! { ::jolt_core::Codec::<Self>::encode(&(#codec), self, context) },
            quote! { ::jolt_core::Codec::<Self>::decode(&(#codec), context) },
        )
    } else {
        match &ast.data {
            Data::Struct(s) => {
                let fields = bind_fields(&s.fields)?;
                check_wire_names(&fields, &type_meta)?;
                let write_fields_ts = write::gen_write_fields(&fields, &type_meta);
                let read_fields_ts = read::gen_read_fields(&fields, &type_name, &type_meta);
                return Ok(quote! {
                    impl #impl_generics ::jolt_core::Serializer for #name #ty_generics #where_clause {
                        #[inline(always)]
                        fn jolt_write(&self, context: &mut ::jolt_core::WriteContext) -> ::std::result::Result<(), ::jolt_core::Error> {
                            ::jolt_core::serializer::struct_::write::<Self>(self, context)
                        }

                        #[inline(always)]
                        fn jolt_read(context: &mut ::jolt_core::ReadContext) -> ::std::result::Result<Self, ::jolt_core::Error> {
                            ::jolt_core::serializer::struct_::read::<Self>(context)
                        }
                    }

                    impl #impl_generics ::jolt_core::StructSerializer for #name #ty_generics #where_clause {
                        fn jolt_write_fields(&self, context: &mut ::jolt_core::WriteContext) -> ::std::result::Result<(), ::jolt_core::Error> {
                            #write_fields_ts
                        }

                        fn jolt_read_fields(context: &mut ::jolt_core::ReadContext) -> ::std::result::Result<Self, ::jolt_core::Error> {
                            #read_fields_ts
                        }
                    }
                });
            }
            Data::Enum(e) => match &type_meta.polymorphic {
                Some(poly) => {
                    let poly_ts = derive_enum::gen_polymorphic(e, &type_name, poly)?;
                    return Ok(quote! {
                        impl #impl_generics ::jolt_core::PolymorphicSerializer for #name #ty_generics #where_clause {
                            #poly_ts
                        }

                        impl #impl_generics ::jolt_core::Serializer for #name #ty_generics #where_clause {
                            #[inline(always)]
                            fn jolt_write(&self, context: &mut ::jolt_core::WriteContext) -> ::std::result::Result<(), ::jolt_core::Error> {
                                ::jolt_core::serializer::polymorphic::write::<Self>(self, context)
                            }

                            #[inline(always)]
                            fn jolt_read(context: &mut ::jolt_core::ReadContext) -> ::std::result::Result<Self, ::jolt_core::Error> {
                                ::jolt_core::serializer::polymorphic::read::<Self>(context)
                            }
                        }
                    });
                }
                None => {
                    let (write_ts, read_ts) = derive_enum::gen_unit_enum(e, &type_name)?;
                    return Ok(quote! {
                        impl #impl_generics ::jolt_core::Serializer for #name #ty_generics #where_clause {
                            fn jolt_write(&self, context: &mut ::jolt_core::WriteContext) -> ::std::result::Result<(), ::jolt_core::Error> {
                                #write_ts
                            }

                            fn jolt_read(context: &mut ::jolt_core::ReadContext) -> ::std::result::Result<Self, ::jolt_core::Error> {
                                #read_ts
                            }

                            #[inline(always)]
                            fn jolt_is_string_like() -> bool {
                                true
                            }
                        }
                    });
                }
            },
            Data::Union(u) => return Err(union_error(u)),
        }
    };

    Ok(quote! {
        impl #impl_generics ::jolt_core::Serializer for #name #ty_generics #where_clause {
            fn jolt_write(&self, context: &mut ::jolt_core::WriteContext) -> ::std::result::Result<(), ::jolt_core::Error> {
                #write_ts
            }

            fn jolt_read(context: &mut ::jolt_core::ReadContext) -> ::std::result::Result<Self, ::jolt_core::Error> {
                #read_ts
            }
        }
    })
}
