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

use jolt::{DateFormat, Error, Jolt, JoltObject, RawJson, Stringified, Value};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_rename_and_alias() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct User {
        #[jolt(rename = "user_name", alias = "name", alias = "login")]
        name: String,
        #[jolt(alias = "years")]
        age: u8,
    }

    let jolt = Jolt::default();
    let user = User {
        name: "ada".to_string(),
        age: 36,
    };
    let text = jolt.encode_to_string(&user).unwrap();
    assert_eq!(text, r#"{"user_name":"ada","age":36}"#);

    for input in [
        r#"{"user_name":"ada","age":36}"#,
        r#"{"name":"ada","years":36}"#,
        r#"{"login":"ada","age":36}"#,
    ] {
        assert_eq!(jolt.decode_str::<User>(input).unwrap(), user);
    }
}

#[test]
fn test_raw_identifier_field() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Token {
        r#type: String,
    }

    let jolt = Jolt::default();
    let token = Token {
        r#type: "word".to_string(),
    };
    assert_eq!(jolt.encode_to_string(&token).unwrap(), r#"{"type":"word"}"#);
}

#[test]
fn test_raw_passthrough() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Envelope {
        id: u32,
        #[jolt(raw)]
        payload: String,
    }

    let jolt = Jolt::default();
    let input = r#"{"id":1,"payload":{"a":[1, 2],"s":"}]"}}"#;
    let env: Envelope = jolt.decode_str(input).unwrap();
    assert_eq!(env.payload, r#"{"a":[1, 2],"s":"}]"}"#);
    assert_eq!(jolt.encode_to_string(&env).unwrap(), input);

    let empty = Envelope {
        id: 2,
        payload: String::new(),
    };
    assert_eq!(
        jolt.encode_to_string(&empty).unwrap(),
        r#"{"id":2,"payload":null}"#
    );
}

#[test]
fn test_raw_json_type() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Holder {
        items: Vec<RawJson>,
    }

    let jolt = Jolt::default();
    let holder: Holder = jolt
        .decode_str(r#"{"items":[1, "two", [3], {"four":4}, null]}"#)
        .unwrap();
    let texts: Vec<&str> = holder.items.iter().map(RawJson::as_str).collect();
    assert_eq!(texts, ["1", r#""two""#, "[3]", r#"{"four":4}"#, "null"]);
    assert_eq!(
        jolt.encode_to_string(&holder).unwrap(),
        r#"{"items":[1,"two",[3],{"four":4},null]}"#
    );
}

#[test]
fn test_field_codec() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Invoice {
        #[jolt(with = "DateFormat::new(\"%d/%m/%Y\")")]
        due: NaiveDate,
        #[jolt(with = Stringified)]
        amount: u128,
    }

    let jolt = Jolt::default();
    let invoice = Invoice {
        due: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        amount: 340282366920938463463374607431768211455,
    };
    let text = r#"{"due":"29/02/2024","amount":"340282366920938463463374607431768211455"}"#;
    assert_eq!(jolt.decode_str::<Invoice>(text).unwrap(), invoice);
    let err = jolt
        .decode_str::<Invoice>(r#"{"due":"2024-02-29","amount":"1"}"#)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[test]
fn test_field_default() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Job {
        name: String,
        #[jolt(default)]
        retries: u32,
        #[jolt(default)]
        tags: Vec<String>,
    }

    let jolt = Jolt::default();
    let job: Job = jolt.decode_str(r#"{"name":"build"}"#).unwrap();
    assert_eq!(
        job,
        Job {
            name: "build".to_string(),
            retries: 0,
            tags: vec![],
        }
    );
}

#[test]
fn test_extra_btree_map() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Open {
        id: u32,
        #[jolt(extra)]
        rest: BTreeMap<String, Value>,
    }

    let jolt = Jolt::default();
    let open: Open = jolt
        .decode_str(r#"{"z":true,"id":7,"a":[1,"x"]}"#)
        .unwrap();
    assert_eq!(open.id, 7);
    assert_eq!(open.rest.len(), 2);
    assert_eq!(open.rest["z"], Value::Bool(true));
    assert_eq!(
        jolt.encode_to_string(&open).unwrap(),
        r#"{"id":7,"a":[1,"x"],"z":true}"#
    );
}

#[test]
fn test_extra_typed_hash_map() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Counters {
        total: u64,
        #[jolt(extra)]
        by_name: HashMap<String, u64>,
    }

    let jolt = Jolt::default();
    let counters: Counters = jolt
        .decode_str(r#"{"total":3,"gets":2,"puts":1}"#)
        .unwrap();
    assert_eq!(counters.by_name.get("gets"), Some(&2));
    assert_eq!(counters.by_name.get("puts"), Some(&1));

    assert!(jolt
        .decode_str::<Counters>(r#"{"total":3,"bad":"x"}"#)
        .is_err());
}

#[test]
fn test_extra_key_colliding_with_declared_member() {
    #[derive(JoltObject, Debug, PartialEq)]
    #[jolt(getter(name = "double", method = double))]
    struct Tagged {
        #[jolt(alias = "alpha")]
        a: u32,
        #[jolt(extra)]
        rest: BTreeMap<String, u32>,
    }

    impl Tagged {
        fn double(&self) -> u32 {
            self.a * 2
        }
    }

    let jolt = Jolt::default();
    for key in ["a", "alpha", "double"] {
        let mut rest = BTreeMap::new();
        rest.insert(key.to_string(), 9);
        let tagged = Tagged { a: 1, rest };
        let err = jolt.encode_to_string(&tagged).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.to_string().contains(key));
    }

    let mut rest = BTreeMap::new();
    rest.insert("b".to_string(), 9);
    let tagged = Tagged { a: 1, rest };
    let text = jolt.encode_to_string(&tagged).unwrap();
    assert_eq!(text, r#"{"a":1,"double":2,"b":9}"#);
    assert_eq!(jolt.decode_str::<Tagged>(&text).unwrap(), tagged);
}
