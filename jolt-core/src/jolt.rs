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

use crate::buffer::{EscapeFn, IoSource, Reader, Sink, Source, Writer};
use crate::config::{Config, UnicodeEscape};
use crate::error::Error;
use crate::resolver::codec_registry::{CodecRegistry, RuntimeCodec};
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::Serializer;
use crate::value::Value;
use std::io;

/// The main entry point of the data binder.
///
/// A `Jolt` owns its configuration and its runtime codec registry. It is
/// meant to be built once, configured with the builder methods, and then
/// shared: encode and decode only need `&self`, so a `Jolt` can be used from
/// many threads at once. Registering codecs needs `&mut self`.
///
/// # Examples
///
/// ```rust, ignore
/// use jolt::{Jolt, JoltObject};
///
/// #[derive(JoltObject, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let jolt = Jolt::default();
/// let text = jolt.encode_to_string(&Point { x: 1, y: 2 })?;
/// assert_eq!(text, r#"{"x":1,"y":2}"#);
/// let back: Point = jolt.decode_str(&text)?;
/// ```
#[derive(Default)]
pub struct Jolt {
    config: Config,
    codec_registry: CodecRegistry,
}

impl Jolt {
    /// Sets the maximum nesting depth of arrays and objects (default 128).
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Sets the capacity of the decode buffer (default 8192, at least 16).
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.config.buffer_capacity = capacity;
        self
    }

    /// Rejects unknown keys for every aggregate instead of skipping them.
    pub fn deny_unknown_fields(mut self, deny: bool) -> Self {
        self.config.deny_unknown_fields = deny;
        self
    }

    pub fn unicode_escape(mut self, mode: UnicodeEscape) -> Self {
        self.config.unicode_escape = mode;
        self
    }

    /// Replaces the escaping primitive used for every string literal.
    pub fn escape_fn(mut self, escape: EscapeFn) -> Self {
        self.config.escape = escape;
        self
    }

    #[inline(always)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline(always)]
    pub fn codec_registry(&self) -> &CodecRegistry {
        &self.codec_registry
    }

    /// Encodes `value` to JSON bytes.
    pub fn encode<T: Serializer>(&self, value: &T) -> Result<Vec<u8>, Error> {
        let mut writer = Writer::new(self.config.escape);
        self.encode_with_writer(value, &mut writer)?;
        Ok(writer.into_bytes())
    }

    pub fn encode_to_string<T: Serializer>(&self, value: &T) -> Result<String, Error> {
        String::from_utf8(self.encode(value)?)
            .map_err(|e| Error::invalid_data(format!("encoded output is not UTF-8: {}", e)))
    }

    /// Encodes `value` and hands the bytes to `sink`.
    pub fn encode_to<T: Serializer>(&self, value: &T, sink: &mut dyn Sink) -> Result<(), Error> {
        let mut writer = Writer::new(self.config.escape);
        self.encode_with_writer(value, &mut writer)?;
        sink.write_bytes(writer.as_slice())
    }

    pub fn encode_with_writer<T: Serializer>(
        &self,
        value: &T,
        writer: &mut Writer,
    ) -> Result<(), Error> {
        let mut context = WriteContext::new(self, writer);
        value.jolt_write(&mut context)
    }

    pub fn decode<T: Serializer>(&self, bf: &[u8]) -> Result<T, Error> {
        let mut source = bf;
        self.decode_from(&mut source)
    }

    pub fn decode_str<T: Serializer>(&self, text: &str) -> Result<T, Error> {
        self.decode(text.as_bytes())
    }

    pub fn decode_reader<T: Serializer, R: io::Read>(&self, reader: R) -> Result<T, Error> {
        let mut source = IoSource(reader);
        self.decode_from(&mut source)
    }

    /// Decodes one value from `source`. Only whitespace may follow it.
    pub fn decode_from<T: Serializer>(&self, source: &mut dyn Source) -> Result<T, Error> {
        let reader = Reader::new(source, self.config.buffer_capacity())
            .with_unicode_escape(self.config.unicode_escape());
        let mut context = ReadContext::new(self, reader);
        let value = T::jolt_read(&mut context)?;
        context.reader.skip_whitespace()?;
        if !context.reader.is_at_end()? {
            return Err(Error::trailing_characters(context.reader.position()));
        }
        Ok(value)
    }

    /// Registers a runtime codec for `T`, taking precedence over its derived
    /// encoding. Registering again for the same type replaces the codec.
    ///
    /// ```rust, ignore
    /// jolt.register_codec::<Money>(
    ///     |m, ctx| { ctx.writer.put_string(&m.to_string()); Ok(()) },
    ///     |ctx| String::jolt_read(ctx)?.parse().map_err(|e: ParseMoneyError| Error::custom(e.to_string())),
    /// );
    /// ```
    pub fn register_codec<T, W, R>(&mut self, write: W, read: R)
    where
        T: 'static,
        W: Fn(&T, &mut WriteContext) -> Result<(), Error> + Send + Sync + 'static,
        R: Fn(&mut ReadContext) -> Result<T, Error> + Send + Sync + 'static,
    {
        self.codec_registry
            .register::<T>(RuntimeCodec::new::<T, W, R>(write, read));
    }

    /// Registers a runtime codec for `T` expressed as conversions to and from
    /// the dynamic [`Value`] tree.
    pub fn register_value_codec<T, W, R>(&mut self, to_value: W, from_value: R)
    where
        T: 'static,
        W: Fn(&T) -> Result<Value, Error> + Send + Sync + 'static,
        R: Fn(Value) -> Result<T, Error> + Send + Sync + 'static,
    {
        self.codec_registry
            .register::<T>(RuntimeCodec::from_value_fns::<T, W, R>(to_value, from_value));
    }

    /// Removes the runtime codec for `T`. Returns whether one was registered.
    pub fn unregister_codec<T: 'static>(&mut self) -> bool {
        self.codec_registry.unregister::<T>()
    }

    pub fn has_codec<T: 'static>(&self) -> bool {
        self.codec_registry.contains::<T>()
    }
}
