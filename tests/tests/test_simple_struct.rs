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

// Test 1: Simple struct with one primitive field
#[test]
fn test_one_field_primitive() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Data {
        value: i32,
    }

    let jolt = Jolt::default();
    let data = Data { value: 42 };
    let text = jolt.encode_to_string(&data).unwrap();
    assert_eq!(text, r#"{"value":42}"#);
    let result: Data = jolt.decode_str(&text).unwrap();
    assert_eq!(data, result);
}

// Test 2: Fields are written in declaration order
#[test]
fn test_declaration_order() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Data {
        zeta: bool,
        alpha: String,
        mid: f64,
        list: Vec<i64>,
    }

    let jolt = Jolt::default();
    let data = Data {
        zeta: true,
        alpha: "a \"quoted\" word".to_string(),
        mid: 1.5,
        list: vec![-1, 0, 1],
    };
    let text = jolt.encode_to_string(&data).unwrap();
    assert_eq!(
        text,
        r#"{"zeta":true,"alpha":"a \"quoted\" word","mid":1.5,"list":[-1,0,1]}"#
    );
    assert_eq!(jolt.decode_str::<Data>(&text).unwrap(), data);
}

// Test 3: Keys may come in any order and with arbitrary whitespace
#[test]
fn test_decode_any_order() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Data {
        a: u8,
        b: String,
    }

    let jolt = Jolt::default();
    let result: Data = jolt
        .decode_str("\n{ \"b\" : \"x\" ,\t\"a\" : 7 }\r\n")
        .unwrap();
    assert_eq!(
        result,
        Data {
            a: 7,
            b: "x".to_string()
        }
    );
}

// Test 4: Nested aggregates
#[test]
fn test_nested_struct() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Address {
        street: String,
        zip: u32,
    }

    #[derive(JoltObject, Debug, PartialEq)]
    struct Person {
        name: String,
        address: Address,
        previous: Vec<Address>,
        manager: Option<Box<Person>>,
    }

    let jolt = Jolt::default();
    let person = Person {
        name: "Ada".to_string(),
        address: Address {
            street: "Main".to_string(),
            zip: 12345,
        },
        previous: vec![Address {
            street: "Old".to_string(),
            zip: 1,
        }],
        manager: Some(Box::new(Person {
            name: "Grace".to_string(),
            address: Address {
                street: "Navy".to_string(),
                zip: 2,
            },
            previous: vec![],
            manager: None,
        })),
    };
    let text = jolt.encode_to_string(&person).unwrap();
    assert!(text.contains(r#""manager":{"name":"Grace""#));
    assert!(text.ends_with(r#""previous":[],"manager":null}}"#));
    assert_eq!(jolt.decode_str::<Person>(&text).unwrap(), person);
}

// Test 5: Missing Option fields become None, other fields are required
#[test]
fn test_missing_fields() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Data {
        id: u64,
        note: Option<String>,
    }

    let jolt = Jolt::default();
    let data: Data = jolt.decode_str(r#"{"id":3}"#).unwrap();
    assert_eq!(data, Data { id: 3, note: None });

    let err = jolt.decode_str::<Data>(r#"{"note":"x"}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingField {
            ty: "Data",
            field: "id"
        }
    ));
}

// Test 6: A duplicated key keeps the last occurrence
#[test]
fn test_duplicate_key_last_wins() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Data {
        v: i32,
    }

    let jolt = Jolt::default();
    let data: Data = jolt.decode_str(r#"{"v":1,"v":2}"#).unwrap();
    assert_eq!(data.v, 2);
}

#[test]
fn test_tuple_struct() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Pair(#[jolt(rename = "left")] i32, String);

    let jolt = Jolt::default();
    let pair = Pair(1, "x".to_string());
    let text = jolt.encode_to_string(&pair).unwrap();
    assert_eq!(text, r#"{"left":1,"1":"x"}"#);
    assert_eq!(jolt.decode_str::<Pair>(r#"{"1":"x","left":1}"#).unwrap(), pair);
}

#[test]
fn test_unit_struct() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Marker;

    let jolt = Jolt::default();
    assert_eq!(jolt.encode_to_string(&Marker).unwrap(), "{}");
    assert_eq!(jolt.decode_str::<Marker>(r#"{"x":[1,{}]}"#).unwrap(), Marker);
}

#[test]
fn test_generic_struct() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Envelope<T> {
        id: u32,
        body: T,
    }

    let jolt = Jolt::default();
    let env = Envelope {
        id: 9,
        body: vec!["a".to_string()],
    };
    let text = jolt.encode_to_string(&env).unwrap();
    assert_eq!(text, r#"{"id":9,"body":["a"]}"#);
    assert_eq!(jolt.decode_str::<Envelope<Vec<String>>>(&text).unwrap(), env);
}

#[test]
fn test_type_level_default() {
    #[derive(JoltObject, Debug, PartialEq)]
    #[jolt(default)]
    struct Settings {
        retries: u32,
        name: String,
    }

    impl Default for Settings {
        fn default() -> Self {
            Settings {
                retries: 3,
                name: "default".to_string(),
            }
        }
    }

    let jolt = Jolt::default();
    let settings: Settings = jolt.decode_str(r#"{"name":"custom"}"#).unwrap();
    assert_eq!(
        settings,
        Settings {
            retries: 3,
            name: "custom".to_string()
        }
    );
}

#[test]
fn test_decode_from_bytes_and_reader() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Data {
        words: Vec<String>,
    }

    let jolt = Jolt::default();
    let bytes = br#"{"words":["one","two"]}"#;
    let from_bytes: Data = jolt.decode(bytes).unwrap();
    let from_reader: Data = jolt.decode_reader(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(from_bytes, from_reader);
}

#[test]
fn test_shared_across_threads() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Data {
        n: usize,
    }

    let jolt = std::sync::Arc::new(Jolt::default());
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let jolt = jolt.clone();
            std::thread::spawn(move || {
                let text = jolt.encode_to_string(&Data { n }).unwrap();
                jolt.decode_str::<Data>(&text).unwrap()
            })
        })
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Data { n });
    }
}
