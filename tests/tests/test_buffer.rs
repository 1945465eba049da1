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

use jolt::{Error, FnSink, FnSource, IoSink, Jolt, JoltObject, UnicodeEscape, Value};
use std::collections::BTreeMap;
use std::io::Cursor;

#[derive(JoltObject, Debug, PartialEq)]
struct Document {
    title: String,
    body: String,
    tags: Vec<String>,
    score: f64,
    meta: BTreeMap<String, Value>,
}

fn sample() -> Document {
    let mut meta = BTreeMap::new();
    meta.insert("nested".to_string(), Value::from(vec![1i64, -2, 3]));
    meta.insert("flag".to_string(), Value::from(true));
    Document {
        title: "A \"quoted\" title\twith\ttabs".to_string(),
        body: "line one\nline two\\ and a long tail ".repeat(20) + "héllo 😀",
        tags: (0..10).map(|i| format!("tag-{i}")).collect(),
        score: -1234.5e-3,
        meta,
    }
}

/// Feeds `text` to the decoder one byte per refill.
fn decode_trickle<T: jolt::Serializer>(jolt: &Jolt, text: &str) -> Result<T, Error> {
    let bytes = text.as_bytes();
    let mut offset = 0;
    let mut source = FnSource(|chunk: &mut [u8]| {
        if offset >= bytes.len() || chunk.is_empty() {
            return 0;
        }
        chunk[0] = bytes[offset];
        offset += 1;
        1
    });
    jolt.decode_from(&mut source)
}

#[test]
fn test_tokens_straddle_refills() {
    let jolt = Jolt::default().buffer_capacity(16);
    let doc = sample();
    let text = jolt.encode_to_string(&doc).unwrap();
    assert!(text.len() > 16 * 10);
    assert_eq!(decode_trickle::<Document>(&jolt, &text).unwrap(), doc);
    assert_eq!(jolt.decode_str::<Document>(&text).unwrap(), doc);
}

#[test]
fn test_escapes_across_refills() {
    let jolt = Jolt::default().buffer_capacity(16);
    let text = r#"  "abcdefghijklmn\u00e9\ud83d\ude00\/\b\f\r\n\t\\\"z"  "#;
    let decoded: String = decode_trickle(&jolt, text).unwrap();
    assert_eq!(decoded, "abcdefghijklmn\u{e9}\u{1F600}/\u{8}\u{c}\r\n\t\\\"z");
}

#[test]
fn test_literals_across_refills() {
    let jolt = Jolt::default().buffer_capacity(16);
    let text = "[             true,            false,           null, 12345678901234567890]";
    let decoded: Vec<Value> = decode_trickle(&jolt, text).unwrap();
    assert_eq!(decoded.len(), 4);
    assert_eq!(decoded[0], Value::Bool(true));
    assert_eq!(decoded[1], Value::Bool(false));
    assert!(decoded[2].is_null());
    assert_eq!(decoded[3].as_u64(), Some(12345678901234567890));
}

#[test]
fn test_truncated_input() {
    let jolt = Jolt::default().buffer_capacity(16);
    let err = decode_trickle::<String>(&jolt, r#""unterminated"#).unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof(_)));
    let err = decode_trickle::<bool>(&jolt, "tru").unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof(_)));
}

#[test]
fn test_io_reader_source() {
    let jolt = Jolt::default().buffer_capacity(32);
    let text = jolt.encode_to_string(&sample()).unwrap();
    let doc: Document = jolt.decode_reader(Cursor::new(text.into_bytes())).unwrap();
    assert_eq!(doc, sample());
}

#[test]
fn test_unicode_escape_modes() {
    let full = Jolt::default();
    assert_eq!(full.decode_str::<String>(r#""\u4e2d""#).unwrap(), "中");
    assert!(matches!(
        full.decode_str::<String>(r#""\ud83d x""#),
        Err(Error::InvalidData(_))
    ));
    assert!(full.decode_str::<String>(r#""\ude00""#).is_err());

    let latin1 = Jolt::default().unicode_escape(UnicodeEscape::Latin1);
    assert_eq!(latin1.decode_str::<String>(r#""caf\u00e9""#).unwrap(), "café");
    assert!(matches!(
        latin1.decode_str::<String>(r#""\u4e2d""#),
        Err(Error::InvalidData(_))
    ));
}

#[test]
fn test_invalid_escape() {
    let jolt = Jolt::default();
    assert!(matches!(
        jolt.decode_str::<String>(r#""\x41""#),
        Err(Error::Malformed(..))
    ));
    assert!(matches!(
        jolt.decode_str::<String>(r#""\u12g4""#),
        Err(Error::Malformed(..))
    ));
}

#[test]
fn test_writer_escaping() {
    let jolt = Jolt::default();
    let text = jolt
        .encode_to_string(&"q\"b\\n\nc\u{1}é".to_string())
        .unwrap();
    assert_eq!(text, r#""q\"b\\n\nc\u0001é""#);
}

fn ascii_only(s: &str, out: &mut Vec<u8>) {
    for c in s.chars() {
        match c {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            ' '..='~' => out.push(c as u8),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.extend_from_slice(format!("\\u{:04x}", unit).as_bytes());
                }
            }
        }
    }
}

#[test]
fn test_custom_escape_fn() {
    let jolt = Jolt::default().escape_fn(ascii_only);
    let text = jolt.encode_to_string(&"é😀".to_string()).unwrap();
    assert_eq!(text, r#""\u00e9\ud83d\ude00""#);
    assert_eq!(jolt.decode_str::<String>(&text).unwrap(), "é😀");
}

#[test]
fn test_sinks() {
    let jolt = Jolt::default();
    let mut out = IoSink(Vec::new());
    jolt.encode_to(&vec![Some(1), None], &mut out).unwrap();
    assert_eq!(out.0, b"[1,null]");

    let mut collected = Vec::new();
    jolt.encode_to(
        &("a".to_string(), 2u8),
        &mut FnSink(|bytes: &[u8]| collected.extend_from_slice(bytes)),
    )
    .unwrap();
    assert_eq!(collected, br#"{"0":"a","1":2}"#);
}
