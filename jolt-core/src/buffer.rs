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

use crate::config::{UnicodeEscape, MIN_BUFFER_CAPACITY};
use crate::error::Error;
use std::io;

/// Escaping primitive applied to every string literal the [`Writer`] emits.
pub type EscapeFn = fn(&str, &mut Vec<u8>);

/// Default JSON escaping: quote, backslash and control characters.
pub fn escape_json(s: &str, out: &mut Vec<u8>) {
    let bytes = s.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let escaped: &[u8] = match b {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            0x08 => b"\\b",
            0x0c => b"\\f",
            0x00..=0x1f => {
                out.extend_from_slice(&bytes[start..i]);
                out.extend_from_slice(b"\\u00");
                out.push(HEX[(b >> 4) as usize]);
                out.push(HEX[(b & 0xf) as usize]);
                start = i + 1;
                continue;
            }
            _ => continue,
        };
        out.extend_from_slice(&bytes[start..i]);
        out.extend_from_slice(escaped);
        start = i + 1;
    }
    out.extend_from_slice(&bytes[start..]);
}

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Accumulates encoded JSON.
///
/// Each open container keeps a count of the entries written so far, which
/// is all the writer needs to place separators.
pub struct Writer {
    pub(crate) bf: Vec<u8>,
    frames: Vec<usize>,
    escape: EscapeFn,
}

impl Default for Writer {
    fn default() -> Self {
        Writer::new(escape_json)
    }
}

impl Writer {
    pub fn new(escape: EscapeFn) -> Writer {
        Writer {
            bf: Vec::new(),
            frames: Vec::new(),
            escape,
        }
    }

    pub fn reset(&mut self) {
        // keep capacity and reset len to 0
        self.bf.clear();
        self.frames.clear();
    }

    pub fn dump(&self) -> Vec<u8> {
        self.bf.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bf
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    /// Number of containers currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    fn separator(&mut self) {
        if let Some(count) = self.frames.last_mut() {
            if *count > 0 {
                self.bf.push(b',');
            }
            *count += 1;
        }
    }

    pub fn begin_object(&mut self) {
        self.bf.push(b'{');
        self.frames.push(0);
    }

    pub fn end_object(&mut self) {
        self.frames.pop();
        self.bf.push(b'}');
    }

    pub fn begin_array(&mut self) {
        self.bf.push(b'[');
        self.frames.push(0);
    }

    pub fn end_array(&mut self) {
        self.frames.pop();
        self.bf.push(b']');
    }

    /// Starts the next array element, writing `,` when it is not the first.
    #[inline]
    pub fn begin_element(&mut self) {
        self.separator();
    }

    /// Writes `,"key":` (or `"key":` for the first entry).
    pub fn put_key(&mut self, key: &str) {
        self.separator();
        self.put_string(key);
        self.bf.push(b':');
    }

    /// Starts an object entry whose key is written by a serializer.
    /// Must be followed by the key and [`Writer::put_colon`].
    pub fn begin_key(&mut self) {
        self.separator();
    }

    pub fn put_colon(&mut self) {
        self.bf.push(b':');
    }

    pub fn put_raw(&mut self, raw: &str) {
        self.bf.extend_from_slice(raw.as_bytes());
    }

    /// Writes a value through its `Display` impl without quoting.
    pub fn put_display<T: std::fmt::Display + ?Sized>(&mut self, value: &T) {
        use std::io::Write as _;
        // writing into a Vec<u8> cannot fail
        let _ = write!(self.bf, "{}", value);
    }

    pub fn put_string(&mut self, s: &str) {
        self.bf.push(b'"');
        (self.escape)(s, &mut self.bf);
        self.bf.push(b'"');
    }

    pub fn put_null(&mut self) {
        self.bf.extend_from_slice(b"null");
    }
}

/// Destination for encoded bytes.
pub trait Sink {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

impl Sink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapts any [`io::Write`] into a [`Sink`].
pub struct IoSink<W: io::Write>(pub W);

impl<W: io::Write> Sink for IoSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.0.write_all(bytes)?;
        self.0.flush()?;
        Ok(())
    }
}

/// Adapts a byte callback into a [`Sink`].
pub struct FnSink<F: FnMut(&[u8])>(pub F);

impl<F: FnMut(&[u8])> Sink for FnSink<F> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        (self.0)(bytes);
        Ok(())
    }
}

/// Supplier of input bytes for the [`Reader`].
///
/// `fill_chunk` writes up to `chunk.len()` bytes and returns how many were
/// written. Returning `0` signals end of input.
pub trait Source {
    fn fill_chunk(&mut self, chunk: &mut [u8]) -> Result<usize, Error>;
}

impl Source for &[u8] {
    fn fill_chunk(&mut self, chunk: &mut [u8]) -> Result<usize, Error> {
        let n = chunk.len().min(self.len());
        let (head, tail) = self.split_at(n);
        chunk[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

/// Adapts any [`io::Read`] into a [`Source`].
pub struct IoSource<R: io::Read>(pub R);

impl<R: io::Read> Source for IoSource<R> {
    fn fill_chunk(&mut self, chunk: &mut [u8]) -> Result<usize, Error> {
        loop {
            match self.0.read(chunk) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Adapts a fill callback into a [`Source`].
pub struct FnSource<F: FnMut(&mut [u8]) -> usize>(pub F);

impl<F: FnMut(&mut [u8]) -> usize> Source for FnSource<F> {
    fn fill_chunk(&mut self, chunk: &mut [u8]) -> Result<usize, Error> {
        Ok((self.0)(chunk))
    }
}

/// Pull-based reader over a fixed-capacity buffer.
///
/// Invariant: `cursor <= len <= bf.len()`. Bytes before `cursor` are
/// discarded on the next refill, which moves the unread tail to the front so
/// that a token may straddle any number of refills.
pub struct Reader<'a> {
    source: &'a mut dyn Source,
    bf: Box<[u8]>,
    len: usize,
    cursor: usize,
    consumed: usize,
    exhausted: bool,
    pub(crate) unicode_escape: UnicodeEscape,
}

impl<'a> Reader<'a> {
    pub fn new(source: &'a mut dyn Source, capacity: usize) -> Reader<'a> {
        Reader {
            source,
            bf: vec![0; capacity.max(MIN_BUFFER_CAPACITY)].into_boxed_slice(),
            len: 0,
            cursor: 0,
            consumed: 0,
            exhausted: false,
            unicode_escape: UnicodeEscape::Full,
        }
    }

    /// Selects how `\u` escapes are decoded by the string consumer.
    pub fn with_unicode_escape(mut self, mode: UnicodeEscape) -> Self {
        self.unicode_escape = mode;
        self
    }

    /// Absolute offset of the cursor in the input.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.consumed + self.cursor
    }

    #[inline(always)]
    fn remaining(&self) -> usize {
        self.len - self.cursor
    }

    /// Pulls more bytes from the source. Returns `false` at end of input.
    fn try_fill(&mut self) -> Result<bool, Error> {
        if self.exhausted {
            return Ok(false);
        }
        if self.cursor > 0 {
            self.bf.copy_within(self.cursor..self.len, 0);
            self.consumed += self.cursor;
            self.len -= self.cursor;
            self.cursor = 0;
        }
        if self.len == self.bf.len() {
            return Ok(true);
        }
        let n = self.source.fill_chunk(&mut self.bf[self.len..])?;
        if n == 0 {
            self.exhausted = true;
            return Ok(false);
        }
        self.len += n.min(self.bf.len() - self.len);
        Ok(true)
    }

    /// Refills the buffer; running out of input is fatal.
    pub fn fill(&mut self) -> Result<(), Error> {
        if self.try_fill()? {
            Ok(())
        } else {
            Err(Error::unexpected_eof(self.position()))
        }
    }

    #[inline]
    pub fn fill_if_needed(&mut self) -> Result<(), Error> {
        if self.cursor >= self.len {
            self.fill()?;
        }
        Ok(())
    }

    /// Buffers at least `n` unread bytes.
    fn ensure(&mut self, n: usize) -> Result<(), Error> {
        if n > self.bf.len() {
            return Err(Error::unsupported(format!(
                "lookahead of {} bytes exceeds reader capacity {}",
                n,
                self.bf.len()
            )));
        }
        while self.remaining() < n {
            self.fill()?;
        }
        Ok(())
    }

    fn try_ensure(&mut self, n: usize) -> Result<bool, Error> {
        while self.remaining() < n {
            if !self.try_fill()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn is_at_end(&mut self) -> Result<bool, Error> {
        Ok(self.cursor >= self.len && !self.try_fill()?)
    }

    #[inline]
    pub fn current_char(&mut self) -> Result<u8, Error> {
        self.fill_if_needed()?;
        Ok(self.bf[self.cursor])
    }

    #[inline]
    pub fn next_char(&mut self) -> Result<u8, Error> {
        self.peek_at(1)
    }

    pub fn peek_at(&mut self, offset: usize) -> Result<u8, Error> {
        self.ensure(offset + 1)?;
        Ok(self.bf[self.cursor + offset])
    }

    /// Like [`Reader::current_char`] but reports end of input as `None`.
    #[inline]
    pub fn peek_opt(&mut self) -> Result<Option<u8>, Error> {
        if self.cursor >= self.len && !self.try_fill()? {
            return Ok(None);
        }
        Ok(Some(self.bf[self.cursor]))
    }

    /// Consumes and returns the current byte.
    #[inline]
    pub fn next_byte(&mut self) -> Result<u8, Error> {
        self.fill_if_needed()?;
        let b = self.bf[self.cursor];
        self.cursor += 1;
        Ok(b)
    }

    pub fn skip(&mut self, mut n: usize) -> Result<(), Error> {
        while n > 0 {
            self.fill_if_needed()?;
            let step = n.min(self.remaining());
            self.cursor += step;
            n -= step;
        }
        Ok(())
    }

    pub fn skip_whitespace(&mut self) -> Result<(), Error> {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek_opt()? {
            self.cursor += 1;
        }
        Ok(())
    }

    pub fn consume_char(&mut self, expected: u8) -> Result<(), Error> {
        let found = self.current_char()?;
        if found != expected {
            return Err(Error::malformed(
                self.position(),
                format!(
                    "expected '{}', found '{}'",
                    expected as char,
                    display_byte(found)
                ),
            ));
        }
        self.cursor += 1;
        Ok(())
    }

    pub fn consume(&mut self, literal: &str) -> Result<(), Error> {
        let lit = literal.as_bytes();
        self.ensure(lit.len())?;
        if &self.bf[self.cursor..self.cursor + lit.len()] != lit {
            return Err(Error::malformed(
                self.position(),
                format!("expected literal `{}`", literal),
            ));
        }
        self.cursor += lit.len();
        Ok(())
    }

    /// Tests whether `literal` comes next without consuming it.
    ///
    /// A prefix that stops matching returns `false` before any further refill,
    /// so a short tail at the end of input is not an error.
    pub fn match_literal(&mut self, literal: &str) -> Result<bool, Error> {
        let lit = literal.as_bytes();
        if lit.len() > self.bf.len() {
            return Err(Error::unsupported(format!(
                "literal `{}` exceeds reader capacity {}",
                literal,
                self.bf.len()
            )));
        }
        for (i, &expected) in lit.iter().enumerate() {
            if !self.try_ensure(i + 1)? || self.bf[self.cursor + i] != expected {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Unread bytes currently buffered.
    #[inline]
    pub(crate) fn buffered(&self) -> &[u8] {
        &self.bf[self.cursor..self.len]
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.cursor += n;
    }
}

pub(crate) fn display_byte(b: u8) -> String {
    if b.is_ascii_graphic() || b == b' ' {
        (b as char).to_string()
    } else {
        format!("\\x{:02x}", b)
    }
}
