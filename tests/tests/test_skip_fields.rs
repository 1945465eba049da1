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
use std::sync::Mutex;

static LOGGED: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Debug
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            LOGGED.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

#[derive(JoltObject, Debug, PartialEq)]
struct Known {
    known: i32,
    known2: i32,
}

#[test]
fn test_skip_field_not_encoded() {
    #[derive(JoltObject, Debug, PartialEq)]
    struct Session {
        user: String,
        #[jolt(skip)]
        cache: Vec<u8>,
    }

    let jolt = Jolt::default();
    let session = Session {
        user: "ada".to_string(),
        cache: vec![1, 2, 3],
    };
    assert_eq!(jolt.encode_to_string(&session).unwrap(), r#"{"user":"ada"}"#);

    let decoded: Session = jolt
        .decode_str(r#"{"user":"ada","cache":[9]}"#)
        .unwrap();
    assert_eq!(decoded.cache, Vec::<u8>::new());
}

#[test]
fn test_lenient_unknown_skip() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Debug);

    let jolt = Jolt::default();
    let known: Known = jolt
        .decode_str(r#"{"known":1,"mystery":{"a":[1,2]},"known2":2}"#)
        .unwrap();
    assert_eq!(known, Known { known: 1, known2: 2 });

    let logged = LOGGED.lock().unwrap();
    assert!(logged
        .iter()
        .any(|line| line.contains("mystery") && line.contains("Known")));
}

#[test]
fn test_skip_every_value_kind() {
    let jolt = Jolt::default();
    let input = r#"{
        "s": "with \"escapes\" and } ] brackets",
        "n": -12.5e-3,
        "t": true, "f": false, "z": null,
        "arr": [[], {}, [{"deep": [1, [2, [3]]]}]],
        "known": 5,
        "obj": {"k": {"k": {"k": "v"}}},
        "known2": 6
    }"#;
    let known: Known = jolt.decode_str(input).unwrap();
    assert_eq!(known, Known { known: 5, known2: 6 });
}

#[test]
fn test_skip_rejects_unbalanced_value() {
    let jolt = Jolt::default();
    let err = jolt
        .decode_str::<Known>(r#"{"known":1,"junk":[1,2},"known2":2}"#)
        .unwrap_err();
    assert!(matches!(err, Error::StructuralImbalance(_)));
}

#[test]
fn test_deny_unknown_fields_by_type() {
    #[derive(JoltObject, Debug, PartialEq)]
    #[jolt(deny_unknown_fields)]
    struct Strict {
        a: i32,
    }

    let jolt = Jolt::default();
    assert!(jolt.decode_str::<Strict>(r#"{"a":1}"#).is_ok());
    let err = jolt.decode_str::<Strict>(r#"{"a":1,"b":2}"#).unwrap_err();
    match err {
        Error::UnknownField { ty, field } => {
            assert_eq!(ty, "Strict");
            assert_eq!(field, "b");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_deny_unknown_fields_by_config() {
    let jolt = Jolt::default().deny_unknown_fields(true);
    let err = jolt
        .decode_str::<Known>(r#"{"known":1,"extra":0,"known2":2}"#)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownField { .. }));
}
