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
use proc_macro2::TokenStream;
use quote::quote;

fn gen_write_field(bound: &BoundField) -> TokenStream {
    let member = &bound.source.member;
    let wire = &bound.wire_name;
    let ty = &bound.source.field.ty;
    let value = if let Some(codec) = &bound.meta.with {
        quote! {
            ::jolt_core::Codec::<#ty>::encode(&(#codec), &self.#member, context)?;
        }
    } else if bound.meta.raw {
        quote! {
            ::jolt_core::serializer::struct_::write_raw(&self.#member, context)?;
        }
    } else {
        quote! {
            ::jolt_core::Serializer::jolt_write(&self.#member, context)?;
        }
    };
    quote! {
        context.writer.put_key(#wire);
        #value
    }
}

/// Keys an extension map must not produce: anything a field, getter or
/// setter answers to in either direction.
fn reserved_keys(fields: &[BoundField], type_meta: &JoltTypeMeta) -> Vec<String> {
    let mut keys = Vec::new();
    for field in fields.iter().filter(|f| f.is_keyed()) {
        keys.push(field.wire_name.clone());
        keys.extend(field.meta.aliases.iter().cloned());
    }
    for getter in &type_meta.getters {
        keys.push(getter.name.clone());
    }
    for setter in &type_meta.setters {
        keys.push(setter.name.clone());
        keys.extend(setter.aliases.iter().cloned());
    }
    keys.sort();
    keys.dedup();
    keys
}

/// Body of `jolt_write_fields`: declared fields in order, then getters, then
/// the extension map spread inline.
pub fn gen_write_fields(fields: &[BoundField], type_meta: &JoltTypeMeta) -> TokenStream {
    let field_writes = fields
        .iter()
        .filter(|f| f.is_keyed())
        .map(gen_write_field);
    let getter_writes = type_meta.getters.iter().map(|getter| {
        let name = &getter.name;
        let method = &getter.method;
        quote! {
            context.writer.put_key(#name);
            self.#method().jolt_write(context)?;
        }
    });
    let extra_write = fields.iter().find(|f| f.meta.extra).map(|f| {
        let member = &f.source.member;
        let reserved = reserved_keys(fields, type_meta);
        quote! {
            ::jolt_core::ExtraFields::jolt_write_extra(&self.#member, &[#(#reserved),*], context)?;
        }
    });
    quote! {
        #[allow(unused_imports)]
        use ::jolt_core::Serializer as _;
        #(#field_writes)*
        #(#getter_writes)*
        #extra_write
        Ok(())
    }
}
