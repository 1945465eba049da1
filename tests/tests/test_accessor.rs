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

#[derive(JoltObject, Debug, PartialEq, Default)]
#[jolt(default)]
#[jolt(getter(name = "area", method = area), getter(method = get_label))]
#[jolt(setter(name = "size", method = set_size, alias = "extent"))]
struct Square {
    side: u32,
    #[jolt(skip)]
    resized: bool,
}

impl Square {
    fn area(&self) -> u32 {
        self.side * self.side
    }

    fn get_label(&self) -> String {
        format!("{0}x{0}", self.side)
    }

    fn set_size(&mut self, size: u32) {
        self.side = size;
        self.resized = true;
    }
}

#[test]
fn test_getters_are_encoded_after_fields() {
    let jolt = Jolt::default();
    let square = Square {
        side: 3,
        resized: false,
    };
    assert_eq!(
        jolt.encode_to_string(&square).unwrap(),
        r#"{"side":3,"area":9,"label":"3x3"}"#
    );
}

#[test]
fn test_setters_run_on_decode() {
    let jolt = Jolt::default();
    let square: Square = jolt.decode_str(r#"{"size":4}"#).unwrap();
    assert_eq!(
        square,
        Square {
            side: 4,
            resized: true
        }
    );

    let square: Square = jolt.decode_str(r#"{"extent":5}"#).unwrap();
    assert_eq!(square.side, 5);
    assert!(square.resized);
}

#[test]
fn test_setter_applies_after_fields() {
    let jolt = Jolt::default();
    let square: Square = jolt.decode_str(r#"{"size":7,"side":2}"#).unwrap();
    assert_eq!(square.side, 7);
}

#[test]
fn test_getter_output_is_ignored_on_decode() {
    let jolt = Jolt::default();
    let square: Square = jolt
        .decode_str(r#"{"side":3,"area":9,"label":"3x3"}"#)
        .unwrap();
    assert_eq!(
        square,
        Square {
            side: 3,
            resized: false
        }
    );
}

#[test]
fn test_setter_argument_errors() {
    let jolt = Jolt::default();
    assert!(matches!(
        jolt.decode_str::<Square>(r#"{"size":-1}"#),
        Err(Error::InvalidData(_))
    ));
}
