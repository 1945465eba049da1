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

use crate::object::field_meta::BoundField;
use crate::object::type_meta::JoltTypeMeta;
use crate::util::is_option_type;
use proc_macro2::TokenStream;
use quote::quote;

fn gen_read_value(bound: &BoundField) -> TokenStream {
    let ty = &bound.source.field.ty;
    if let Some(codec) = &bound.meta.with {
        quote! { ::jolt_core::Codec::<#ty>::decode(&(#codec), context)? }
    } else if bound.meta.raw {
        quote! { ::jolt_core::serializer::struct_::read_raw(context)? }
    } else {
        quote! { <#ty as ::jolt_core::Serializer>::jolt_read(context)? }
    }
}

/// Value used for a field once the object is exhausted.
fn gen_finish_field(bound: &BoundField, type_name: &str, type_meta: &JoltTypeMeta) -> TokenStream {
    let ty = &bound.source.field.ty;
    let member = &bound.source.member;
    if bound.meta.extra {
        return quote! { __extra };
    }
    if bound.meta.skip {
        return if type_meta.default {
            quote! { __default.#member }
        } else {
            quote! { ::core::default::Default::default() }
        };
    }
    let slot = bound.source.slot();
    let wire = &bound.wire_name;
    let fallback = if bound.meta.default {
        quote! { ::core::default::Default::default() }
    } else if type_meta.default {
        quote! { __default.#member }
    } else if bound.meta.with.is_some() || bound.meta.raw {
        if is_option_type(ty) {
            quote! { ::core::option::Option::None }
        } else {
            quote! {
                return Err(::jolt_core::Error::missing_field(#type_name, #wire))
            }
        }
    } else {
        quote! { ::jolt_core::serializer::missing_field::<#ty>(#type_name, #wire)? }
    };
    quote! {
        match #slot {
            Some(value) => value,
            None => #fallback,
        }
    }
}

/// Body of `jolt_read_fields`. Keys are dispatched by wire name, then
/// aliases, then setters. Getter keys are dropped; anything else goes to the
/// extension map or is skipped.
pub fn gen_read_fields(
    fields: &[BoundField],
    type_name: &str,
    type_meta: &JoltTypeMeta,
) -> TokenStream {
    let keyed: Vec<&BoundField> = fields.iter().filter(|f| f.is_keyed()).collect();

    let declare_slots = keyed.iter().map(|f| {
        let slot = f.source.slot();
        let ty = &f.source.field.ty;
        quote! { let mut #slot: ::core::option::Option<#ty> = None; }
    });

    let field_arms = keyed.iter().map(|f| {
        let slot = f.source.slot();
        let wire = &f.wire_name;
        let aliases = &f.meta.aliases;
        let value = gen_read_value(f);
        quote! {
            #wire #(| #aliases)* => {
                #slot = Some(#value);
            }
        }
    });

    let has_setters = !type_meta.setters.is_empty();
    let setter_arms = type_meta.setters.iter().map(|setter| {
        let name = &setter.name;
        let aliases = &setter.aliases;
        let method = &setter.method;
        quote! {
            #name #(| #aliases)* => {
                let arg = ::jolt_core::serializer::read_setter_arg(Self::#method, context)?;
                __setters.push(Box::new(move |this: &mut Self| Self::#method(this, arg)));
            }
        }
    });

    // getter output coming back in is neither a field nor an extension entry
    let decode_names: Vec<&String> = keyed
        .iter()
        .flat_map(|f| std::iter::once(&f.wire_name).chain(&f.meta.aliases))
        .chain(
            type_meta
                .setters
                .iter()
                .flat_map(|s| std::iter::once(&s.name).chain(&s.aliases)),
        )
        .collect();
    let getter_names: Vec<&String> = type_meta
        .getters
        .iter()
        .map(|g| &g.name)
        .filter(|name| !decode_names.contains(name))
        .collect();
    let getter_arm = (!getter_names.is_empty()).then(|| {
        quote! {
            #(#getter_names)|* => context.reader.skip_value()?,
        }
    });

    let extra = fields.iter().find(|f| f.meta.extra);
    let declare_extra = extra.map(|f| {
        let ty = &f.source.field.ty;
        quote! { let mut __extra: #ty = ::core::default::Default::default(); }
    });
    let fallback_arm = if extra.is_some() {
        quote! {
            _ => ::jolt_core::ExtraFields::jolt_read_extra(&mut __extra, __key, context)?,
        }
    } else {
        let deny = type_meta.deny_unknown_fields;
        quote! {
            _ => ::jolt_core::serializer::struct_::skip_unknown(context, #type_name, &__key, #deny)?,
        }
    };

    let declare_setters = has_setters.then(|| {
        quote! {
            let mut __setters: Vec<Box<dyn FnOnce(&mut Self)>> = Vec::new();
        }
    });
    let apply_setters = has_setters.then(|| {
        quote! {
            for setter in __setters {
                setter(&mut value);
            }
        }
    });
    let declare_default = type_meta.default.then(|| {
        quote! { let __default: Self = ::core::default::Default::default(); }
    });

    let field_inits = fields.iter().map(|f| {
        let value = gen_finish_field(f, type_name, type_meta);
        f.source.field_init(value)
    });

    quote! {
        #(#declare_slots)*
        #declare_extra
        #declare_setters
        while let Some(__key) = ::jolt_core::serializer::struct_::next_key(context)? {
            match __key.as_str() {
                #(#field_arms)*
                #(#setter_arms)*
                #getter_arm
                #fallback_arm
            }
        }
        #declare_default
        #[allow(unused_mut)]
        let mut value = Self {
            #(#field_inits),*
        };
        #apply_setters
        Ok(value)
    }
}
