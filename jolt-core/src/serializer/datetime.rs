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

//! Dates and times are string-like: ISO 8601 text by default, or any
//! `strftime` pattern through the [`DateFormat`] codec.

use crate::codec::Codec;
use crate::error::Error;
use crate::resolver::context::ReadContext;
use crate::resolver::context::WriteContext;
use crate::serializer::Serializer;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt::{self, Write};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const TIME_FORMAT: &str = "%H:%M:%S%.f";

fn read_text(context: &mut ReadContext) -> Result<(usize, String), Error> {
    context.reader.skip_whitespace()?;
    let at = context.reader.position();
    Ok((at, context.reader.consume_string()?))
}

fn parse_error(text: &str, at: usize, what: &str, e: chrono::ParseError) -> Error {
    Error::invalid_data(format!("invalid {} {:?} at byte {}: {}", what, text, at, e))
}

impl Serializer for NaiveDate {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.put_string(&self.format(DATE_FORMAT).to_string());
        Ok(())
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        let (at, text) = read_text(context)?;
        NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|e| parse_error(&text, at, "date", e))
    }

    fn jolt_is_string_like() -> bool {
        true
    }
}

impl Serializer for NaiveDateTime {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        context
            .writer
            .put_string(&self.format(DATETIME_FORMAT).to_string());
        Ok(())
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        let (at, text) = read_text(context)?;
        NaiveDateTime::parse_from_str(&text, DATETIME_FORMAT)
            .map_err(|e| parse_error(&text, at, "datetime", e))
    }

    fn jolt_is_string_like() -> bool {
        true
    }
}

impl Serializer for NaiveTime {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.put_string(&self.format(TIME_FORMAT).to_string());
        Ok(())
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        let (at, text) = read_text(context)?;
        NaiveTime::parse_from_str(&text, TIME_FORMAT).map_err(|e| parse_error(&text, at, "time", e))
    }

    fn jolt_is_string_like() -> bool {
        true
    }
}

impl Serializer for DateTime<Utc> {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.writer.put_string(&self.to_rfc3339());
        Ok(())
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        let (at, text) = read_text(context)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| parse_error(&text, at, "timestamp", e))
    }

    fn jolt_is_string_like() -> bool {
        true
    }
}

/// Codec that formats dates with a custom `strftime` pattern.
#[derive(Debug, Clone, Copy)]
pub struct DateFormat {
    pattern: &'static str,
}

impl DateFormat {
    pub const fn new(pattern: &'static str) -> Self {
        DateFormat { pattern }
    }

    /// Formats into a string; chrono reports a bad pattern as `fmt::Error`.
    fn render(&self, formatted: impl fmt::Display) -> Result<String, Error> {
        let mut text = String::new();
        write!(text, "{}", formatted).map_err(|_| {
            Error::invalid_data(format!("invalid date format pattern {:?}", self.pattern))
        })?;
        Ok(text)
    }
}

impl Codec<NaiveDate> for DateFormat {
    fn encode(&self, value: &NaiveDate, context: &mut WriteContext) -> Result<(), Error> {
        let text = self.render(value.format(self.pattern))?;
        context.writer.put_string(&text);
        Ok(())
    }

    fn decode(&self, context: &mut ReadContext) -> Result<NaiveDate, Error> {
        let (at, text) = read_text(context)?;
        NaiveDate::parse_from_str(&text, self.pattern).map_err(|e| parse_error(&text, at, "date", e))
    }
}

impl Codec<NaiveDateTime> for DateFormat {
    fn encode(&self, value: &NaiveDateTime, context: &mut WriteContext) -> Result<(), Error> {
        let text = self.render(value.format(self.pattern))?;
        context.writer.put_string(&text);
        Ok(())
    }

    fn decode(&self, context: &mut ReadContext) -> Result<NaiveDateTime, Error> {
        let (at, text) = read_text(context)?;
        NaiveDateTime::parse_from_str(&text, self.pattern)
            .map_err(|e| parse_error(&text, at, "datetime", e))
    }
}
