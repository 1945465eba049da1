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

use jolt::{Error, Jolt, JoltObject};
use std::collections::BTreeMap;

#[derive(JoltObject, Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
enum Color {
    Red,
    #[jolt(rename = "GREEN", alias = "verde")]
    Green,
    Blue,
}

#[test]
fn test_unit_enum() {
    let jolt = Jolt::default();
    assert_eq!(jolt.encode_to_string(&Color::Red).unwrap(), r#""Red""#);
    assert_eq!(jolt.encode_to_string(&Color::Green).unwrap(), r#""GREEN""#);
    assert_eq!(jolt.decode_str::<Color>(r#""Blue""#).unwrap(), Color::Blue);
    assert_eq!(jolt.decode_str::<Color>(r#"  "GREEN""#).unwrap(), Color::Green);
    assert_eq!(jolt.decode_str::<Color>(r#""verde""#).unwrap(), Color::Green);
}

#[test]
fn test_unknown_variant() {
    let jolt = Jolt::default();
    let err = jolt.decode_str::<Color>(r#""Purple""#).unwrap_err();
    assert!(matches!(err, Error::UnknownEnum(_)));
    assert!(err.to_string().contains("Purple"));
    // the renamed variant no longer answers to its Rust name
    assert!(jolt.decode_str::<Color>(r#""Green""#).is_err());
    // names are strings, not ordinals
    assert!(jolt.decode_str::<Color>("0").is_err());
}

#[test]
fn test_enum_in_struct() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Light {
        color: Color,
        fallback: Option<Color>,
        history: Vec<Color>,
    }

    let jolt = Jolt::default();
    let light = Light {
        color: Color::Green,
        fallback: None,
        history: vec![Color::Red, Color::Blue],
    };
    let text = jolt.encode_to_string(&light).unwrap();
    assert_eq!(
        text,
        r#"{"color":"GREEN","fallback":null,"history":["Red","Blue"]}"#
    );
    assert_eq!(jolt.decode_str::<Light>(&text).unwrap(), light);
}

#[test]
fn test_enum_map_key() {
    let jolt = Jolt::default();
    let mut counts = BTreeMap::new();
    counts.insert(Color::Red, 2u32);
    counts.insert(Color::Green, 5u32);
    let text = jolt.encode_to_string(&counts).unwrap();
    assert_eq!(text, r#"{"Red":2,"GREEN":5}"#);
    assert_eq!(
        jolt.decode_str::<BTreeMap<Color, u32>>(r#"{"verde":5,"Red":2}"#)
            .unwrap(),
        counts
    );
}
