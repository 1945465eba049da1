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

//! Dynamic JSON tree, used wherever the shape of a value is only known at
//! runtime: value-based runtime codecs and open extension maps.

use crate::buffer::display_byte;
use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::collection::{read_elements, write_collection};
use crate::serializer::map::{read_map_data, write_map_data};
use crate::serializer::Serializer;
use std::collections::BTreeMap;
use std::fmt;

/// `NegInt` only holds values below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Classifies raw number text. Integers that overflow 64 bits fall back
    /// to `Float`.
    pub fn parse(text: &str) -> Result<Number, Error> {
        let is_integer = !text.contains(['.', 'e', 'E']);
        if is_integer {
            if text.starts_with('-') {
                match text.parse::<i64>() {
                    // "-0"
                    Ok(0) => return Ok(Number::PosInt(0)),
                    Ok(v) => return Ok(Number::NegInt(v)),
                    Err(_) => {}
                }
            } else if let Ok(v) = text.parse::<u64>() {
                return Ok(Number::PosInt(v));
            }
        }
        text.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| Error::invalid_data(format!("{} is not a valid number", text)))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::PosInt(v) => i64::try_from(v).ok(),
            Number::NegInt(v) => Some(v),
            Number::Float(_) => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::PosInt(v) => Some(v),
            Number::NegInt(v) => u64::try_from(v).ok(),
            Number::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::PosInt(v) => write!(f, "{}", v),
            Number::NegInt(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when `self` is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        if v < 0 {
            Value::Number(Number::NegInt(v))
        } else {
            Value::Number(Number::PosInt(v as u64))
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Number(Number::PosInt(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(Number::Float(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Object(v)
    }
}

impl Serializer for Value {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        match self {
            Value::Null => context.writer.put_null(),
            Value::Bool(b) => return b.jolt_write(context),
            Value::Number(Number::Float(v)) => return v.jolt_write(context),
            Value::Number(n) => context.writer.put_display(n),
            Value::String(s) => context.writer.put_string(s),
            Value::Array(items) => return write_collection(items, context),
            Value::Object(map) => return write_map_data(map.iter(), context),
        }
        Ok(())
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        context.reader.skip_whitespace()?;
        match context.reader.current_char()? {
            b'n' => {
                context.reader.consume_null()?;
                Ok(Value::Null)
            }
            b't' | b'f' => Ok(Value::Bool(context.reader.consume_boolean()?)),
            b'"' => Ok(Value::String(context.reader.consume_string()?)),
            b'-' | b'0'..=b'9' => {
                let text = context.reader.consume_number_raw()?;
                Ok(Value::Number(Number::parse(&text)?))
            }
            b'[' => {
                let mut items = Vec::new();
                read_elements::<Value, _>(context, |item| items.push(item))?;
                Ok(Value::Array(items))
            }
            b'{' => {
                let mut map = BTreeMap::new();
                read_map_data::<String, Value, _>(context, |k, v| {
                    map.insert(k, v);
                })?;
                Ok(Value::Object(map))
            }
            other => Err(Error::malformed(
                context.reader.position(),
                format!("expected value, found '{}'", display_byte(other)),
            )),
        }
    }

    fn jolt_is_none(&self) -> bool {
        self.is_null()
    }

    fn jolt_missing() -> Option<Self> {
        Some(Value::Null)
    }
}
