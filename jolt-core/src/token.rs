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

//! Token consumers built on top of [`Reader`].
//!
//! Each consumer expects the cursor on the first byte of its token (callers
//! skip whitespace first) and leaves it on the first byte after the token.
//! Number consumers never consume the delimiter that ends them.

use crate::buffer::{display_byte, Reader};
use crate::config::UnicodeEscape;
use crate::error::Error;
use std::str::FromStr;

impl<'a> Reader<'a> {
    /// Reads a string literal and resolves its escapes.
    pub fn consume_string(&mut self) -> Result<String, Error> {
        let start = self.position();
        self.consume_char(b'"')?;
        let mut out: Vec<u8> = Vec::new();
        loop {
            self.fill_if_needed()?;
            let chunk = self.buffered();
            match chunk
                .iter()
                .position(|&b| b == b'"' || b == b'\\' || b < 0x20)
            {
                Some(i) => {
                    let stop = chunk[i];
                    if stop < 0x20 {
                        return Err(Error::malformed(
                            self.position() + i,
                            format!("unescaped control character 0x{:02x} in string", stop),
                        ));
                    }
                    out.extend_from_slice(&chunk[..i]);
                    self.advance(i + 1);
                    if stop == b'"' {
                        break;
                    }
                    self.consume_escape(&mut out)?;
                }
                None => {
                    let n = chunk.len();
                    out.extend_from_slice(chunk);
                    self.advance(n);
                }
            }
        }
        String::from_utf8(out).map_err(|_| {
            Error::invalid_data(format!("invalid UTF-8 in string starting at byte {}", start))
        })
    }

    fn consume_escape(&mut self, out: &mut Vec<u8>) -> Result<(), Error> {
        let at = self.position();
        let simple = match self.next_byte()? {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0c,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                let c = self.consume_unicode_escape(at)?;
                let mut tmp = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
                return Ok(());
            }
            other => {
                return Err(Error::malformed(
                    at,
                    format!("invalid escape '\\{}'", display_byte(other)),
                ))
            }
        };
        out.push(simple);
        Ok(())
    }

    fn consume_hex4(&mut self) -> Result<u16, Error> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let at = self.position();
            let b = self.next_byte()?;
            let digit = (b as char)
                .to_digit(16)
                .ok_or_else(|| Error::malformed(at, format!("invalid hex digit '{}'", display_byte(b))))?;
            value = (value << 4) | digit as u16;
        }
        Ok(value)
    }

    fn consume_unicode_escape(&mut self, at: usize) -> Result<char, Error> {
        let unit = self.consume_hex4()?;
        match self.unicode_escape {
            UnicodeEscape::Latin1 => {
                if unit > 0xff {
                    return Err(Error::invalid_data(format!(
                        "escape \\u{:04x} at byte {} is outside Latin-1",
                        unit, at
                    )));
                }
                Ok(unit as u8 as char)
            }
            UnicodeEscape::Full => match unit {
                0xd800..=0xdbff => {
                    if !self.match_literal("\\u")? {
                        return Err(Error::invalid_data(format!(
                            "unpaired surrogate \\u{:04x} at byte {}",
                            unit, at
                        )));
                    }
                    self.skip(2)?;
                    let low = self.consume_hex4()?;
                    if !(0xdc00..=0xdfff).contains(&low) {
                        return Err(Error::invalid_data(format!(
                            "invalid low surrogate \\u{:04x} at byte {}",
                            low, at
                        )));
                    }
                    let code = 0x10000 + (((unit as u32) - 0xd800) << 10) + ((low as u32) - 0xdc00);
                    char::from_u32(code)
                        .ok_or_else(|| Error::invalid_data(format!("invalid code point {:x}", code)))
                }
                0xdc00..=0xdfff => Err(Error::invalid_data(format!(
                    "unpaired surrogate \\u{:04x} at byte {}",
                    unit, at
                ))),
                _ => char::from_u32(unit as u32)
                    .ok_or_else(|| Error::invalid_data(format!("invalid code point {:x}", unit))),
            },
        }
    }

    pub fn consume_boolean(&mut self) -> Result<bool, Error> {
        match self.current_char()? {
            b't' => {
                self.consume("true")?;
                Ok(true)
            }
            b'f' => {
                self.consume("false")?;
                Ok(false)
            }
            other => Err(Error::malformed(
                self.position(),
                format!("expected boolean, found '{}'", display_byte(other)),
            )),
        }
    }

    pub fn consume_null(&mut self) -> Result<(), Error> {
        self.consume("null")
    }

    /// Appends a run of ASCII digits to `out`; returns how many were read.
    fn take_digits(&mut self, out: &mut String) -> Result<usize, Error> {
        let mut n = 0;
        while let Some(b) = self.peek_opt()? {
            if !b.is_ascii_digit() {
                break;
            }
            out.push(b as char);
            self.advance(1);
            n += 1;
        }
        Ok(n)
    }

    fn require_digits(&mut self, out: &mut String) -> Result<(), Error> {
        if self.take_digits(out)? == 0 {
            let at = self.position();
            return Err(match self.peek_opt()? {
                Some(b) => Error::malformed(at, format!("expected digit, found '{}'", display_byte(b))),
                None => Error::unexpected_eof(at),
            });
        }
        Ok(())
    }

    /// Reads an optionally negative integer and converts it with `FromStr`.
    ///
    /// Out-of-range values, a sign on an unsigned target and a fraction or
    /// exponent part are all data errors.
    pub fn consume_int<T: FromStr>(&mut self) -> Result<T, Error> {
        let start = self.position();
        let mut text = String::new();
        if self.current_char()? == b'-' {
            text.push('-');
            self.advance(1);
        }
        self.require_digits(&mut text)?;
        if let Some(b'.' | b'e' | b'E') = self.peek_opt()? {
            return Err(Error::invalid_data(format!(
                "expected integer at byte {}, found fractional number",
                start
            )));
        }
        text.parse::<T>().map_err(|_| {
            Error::invalid_data(format!("integer {} at byte {} is out of range", text, start))
        })
    }

    /// Reads a JSON number and returns its text unmodified.
    pub fn consume_number_raw(&mut self) -> Result<String, Error> {
        let mut text = String::new();
        if self.current_char()? == b'-' {
            text.push('-');
            self.advance(1);
        }
        self.require_digits(&mut text)?;
        if let Some(b'.') = self.peek_opt()? {
            text.push('.');
            self.advance(1);
            self.require_digits(&mut text)?;
        }
        if let Some(b @ (b'e' | b'E')) = self.peek_opt()? {
            text.push(b as char);
            self.advance(1);
            if let Some(sign @ (b'+' | b'-')) = self.peek_opt()? {
                text.push(sign as char);
                self.advance(1);
            }
            self.require_digits(&mut text)?;
        }
        Ok(text)
    }

    /// Skips one value of unknown shape, or copies it verbatim into `capture`.
    ///
    /// Containers are scanned with a stack of expected closing delimiters;
    /// brackets inside string literals are not counted.
    pub fn consume_raw_json(&mut self, mut capture: Option<&mut Vec<u8>>) -> Result<(), Error> {
        self.skip_whitespace()?;
        let at = self.position();
        match self.current_char()? {
            b'{' | b'[' => self.scan_container(capture),
            b'"' => {
                self.advance(1);
                if let Some(out) = capture.as_deref_mut() {
                    out.push(b'"');
                }
                self.scan_string_tail(capture)
            }
            b't' | b'f' | b'n' => {
                let literal = match self.current_char()? {
                    b't' => "true",
                    b'f' => "false",
                    _ => "null",
                };
                self.consume(literal)?;
                if let Some(out) = capture {
                    out.extend_from_slice(literal.as_bytes());
                }
                Ok(())
            }
            b'-' | b'0'..=b'9' => {
                let number = self.consume_number_raw()?;
                if let Some(out) = capture {
                    out.extend_from_slice(number.as_bytes());
                }
                Ok(())
            }
            other => Err(Error::malformed(
                at,
                format!("expected value, found '{}'", display_byte(other)),
            )),
        }
    }

    /// Skips one value without capturing it.
    #[inline]
    pub fn skip_value(&mut self) -> Result<(), Error> {
        self.consume_raw_json(None)
    }

    fn scan_container(&mut self, mut capture: Option<&mut Vec<u8>>) -> Result<(), Error> {
        let mut closers: Vec<u8> = Vec::new();
        loop {
            let at = self.position();
            let b = self.next_byte()?;
            if let Some(out) = capture.as_deref_mut() {
                out.push(b);
            }
            match b {
                b'{' => closers.push(b'}'),
                b'[' => closers.push(b']'),
                b'}' | b']' => match closers.pop() {
                    Some(expected) if expected == b => {
                        if closers.is_empty() {
                            return Ok(());
                        }
                    }
                    Some(expected) => {
                        return Err(Error::structural(format!(
                            "mismatched '{}' at byte {}, expected '{}'",
                            b as char, at, expected as char
                        )))
                    }
                    None => {
                        return Err(Error::structural(format!(
                            "unbalanced '{}' at byte {}",
                            b as char, at
                        )))
                    }
                },
                b'"' => self.scan_string_tail(capture.as_deref_mut())?,
                _ => {}
            }
        }
    }

    fn scan_string_tail(&mut self, mut capture: Option<&mut Vec<u8>>) -> Result<(), Error> {
        loop {
            let b = self.next_byte()?;
            if let Some(out) = capture.as_deref_mut() {
                out.push(b);
            }
            match b {
                b'"' => return Ok(()),
                b'\\' => {
                    let escaped = self.next_byte()?;
                    if let Some(out) = capture.as_deref_mut() {
                        out.push(escaped);
                    }
                }
                b if b < 0x20 => {
                    return Err(Error::malformed(
                        self.position() - 1,
                        format!("unescaped control character 0x{:02x} in string", b),
                    ))
                }
                _ => {}
            }
        }
    }
}
