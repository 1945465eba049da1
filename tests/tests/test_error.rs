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

#[derive(JoltObject, Debug, PartialEq)]
#[jolt(ignore)]
struct Secret {
    token: String,
}

#[derive(JoltObject, Debug, PartialEq)]
struct Tree {
    children: Vec<Tree>,
}

#[test]
fn test_trailing_characters() {
    let jolt = Jolt::default();
    assert!(matches!(
        jolt.decode_str::<Vec<u8>>("[1] [2]"),
        Err(Error::TrailingCharacters(4))
    ));
    assert_eq!(jolt.decode_str::<Vec<u8>>(" [1] \n\t").unwrap(), vec![1]);
}

#[test]
fn test_unexpected_eof() {
    let jolt = Jolt::default();
    assert!(matches!(
        jolt.decode_str::<Tree>(r#"{"children":["#),
        Err(Error::UnexpectedEof(_))
    ));
    assert!(matches!(jolt.decode_str::<i32>(""), Err(Error::UnexpectedEof(0))));
    assert!(matches!(
        jolt.decode_str::<bool>(" fals"),
        Err(Error::UnexpectedEof(_))
    ));
}

#[test]
fn test_malformed() {
    let jolt = Jolt::default();
    let err = jolt.decode_str::<bool>("yes").unwrap_err();
    assert!(matches!(err, Error::Malformed(0, _)));
    assert_eq!(err.to_string(), "malformed input at byte 0: expected boolean, found 'y'");

    assert!(matches!(
        jolt.decode_str::<Tree>(r#"{children:[]}"#),
        Err(Error::Malformed(1, _))
    ));
    assert!(matches!(
        jolt.decode_str::<String>("'single'"),
        Err(Error::Malformed(..))
    ));
}

#[test]
fn test_ignored_type() {
    let jolt = Jolt::default();
    let secret = Secret {
        token: "abc".to_string(),
    };
    assert!(matches!(
        jolt.encode(&secret),
        Err(Error::IgnoredType("Secret"))
    ));
    let err = jolt.decode_str::<Secret>(r#"{"token":"abc"}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type Secret is ignored and cannot be encoded or decoded"
    );
    // an ignored type inside a container fails the whole call
    assert!(jolt.encode(&vec![secret]).is_err());
}

#[test]
fn test_depth_limit() {
    let jolt = Jolt::default().max_depth(4);
    let shallow: Tree = jolt.decode_str(r#"{"children":[{"children":[]}]}"#).unwrap();
    assert_eq!(shallow.children.len(), 1);

    let deep = r#"{"children":[{"children":[{"children":[{"children":[]}]}]}]}"#;
    assert!(matches!(
        jolt.decode_str::<Tree>(deep),
        Err(Error::DepthExceed(_))
    ));

    let mut tree = Tree { children: vec![] };
    for _ in 0..4 {
        tree = Tree {
            children: vec![tree],
        };
    }
    assert!(matches!(jolt.encode(&tree), Err(Error::DepthExceed(_))));
    assert!(Jolt::default().encode(&tree).is_ok());
}

#[test]
fn test_non_finite_floats() {
    let jolt = Jolt::default();
    assert!(matches!(jolt.encode(&f64::NAN), Err(Error::Unsupported(_))));
    assert!(matches!(
        jolt.encode(&vec![1.0f32, f32::INFINITY]),
        Err(Error::Unsupported(_))
    ));
    assert!(jolt.decode_str::<f64>("NaN").is_err());
}

#[test]
fn test_number_range() {
    let jolt = Jolt::default();
    assert!(matches!(jolt.decode_str::<u8>("256"), Err(Error::InvalidData(_))));
    assert!(matches!(jolt.decode_str::<u32>("-1"), Err(Error::InvalidData(_))));
    assert!(matches!(jolt.decode_str::<i64>("1.5"), Err(Error::InvalidData(_))));
    assert_eq!(jolt.decode_str::<i8>("-128").unwrap(), -128);
    assert_eq!(jolt.decode_str::<f32>("-2.5e2").unwrap(), -250.0);
    assert_eq!(
        jolt.decode_str::<u128>("340282366920938463463374607431768211455").unwrap(),
        u128::MAX
    );
}

#[test]
fn test_missing_field_message() {
    #[derive(JoltObject, Debug)]
    struct Login {
        #[allow(dead_code)]
        user: String,
    }

    let jolt = Jolt::default();
    let err = jolt.decode_str::<Login>("{}").unwrap_err();
    assert_eq!(err.to_string(), r#"missing field "user" for Login"#);
}
