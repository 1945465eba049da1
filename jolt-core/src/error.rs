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

//! Error type shared by the reader, the writer and every serializer.
//!
//! Constructors are `#[cold]` so that the happy path of the token consumers
//! stays small. Every error aborts the current operation; the only
//! non-fatal condition in the engine is a lenient skip of an unknown key,
//! which never produces an `Error` at all.

use std::borrow::Cow;

use thiserror::Error;

/// Set `JOLT_PANIC_ON_ERROR=1` at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("JOLT_PANIC_ON_ERROR").is_some();

#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for Jolt encoding and decoding.
///
/// Always build errors through the static constructor functions
/// (`Error::malformed`, `Error::missing_field`, ...). They accept anything
/// convertible into `Cow<'static, str>` and honour `JOLT_PANIC_ON_ERROR`:
///
/// ```bash
/// RUST_BACKTRACE=1 JOLT_PANIC_ON_ERROR=1 cargo test
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Unexpected character or a literal that does not match.
    #[error("malformed input at byte {0}: {1}")]
    Malformed(usize, Cow<'static, str>),

    /// The source ran dry while a token still needed bytes.
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEof(usize),

    /// Mismatched `}` / `]` while scanning a value of unknown shape.
    #[error("{0}")]
    StructuralImbalance(Cow<'static, str>),

    /// No subtype of a polymorphic base matches the wire discriminator.
    #[error("cannot resolve subtype of {base} from discriminator {discriminator:?}")]
    UnresolvedDiscriminator {
        base: &'static str,
        discriminator: String,
    },

    /// The type is marked `#[jolt(ignore)]`.
    #[error("type {0} is ignored and cannot be encoded or decoded")]
    IgnoredType(&'static str),

    #[error("{0}")]
    Unsupported(Cow<'static, str>),

    /// A string did not name any member of an enumeration.
    #[error("{0}")]
    UnknownEnum(Cow<'static, str>),

    /// Unknown key while unknown fields are denied.
    #[error("unknown field {field:?} for {ty}")]
    UnknownField { ty: &'static str, field: String },

    /// A required field was absent from the object.
    #[error("missing field {field:?} for {ty}")]
    MissingField {
        ty: &'static str,
        field: &'static str,
    },

    /// Numbers that overflow, bad escapes, invalid UTF-8 and similar.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),

    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// Non-whitespace content after the top-level value.
    #[error("trailing characters at byte {0}")]
    TrailingCharacters(usize),

    /// A runtime codec produced a value of the wrong type.
    #[error("type mismatch: expected {expected}, runtime codec produced another type")]
    TypeMismatch { expected: &'static str },

    /// Raised by user codecs.
    #[error("{0}")]
    Custom(Cow<'static, str>),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

macro_rules! raise {
    ($err:expr) => {{
        let err = $err;
        if PANIC_ON_ERROR {
            panic!("JOLT_PANIC_ON_ERROR: {}", err);
        }
        err
    }};
}

impl Error {
    /// Creates a new [`Error::Malformed`] at the given byte offset.
    ///
    /// # Example
    /// ```
    /// use jolt_core::error::Error;
    ///
    /// let err = Error::malformed(3, "expected ':'");
    /// assert_eq!(err.to_string(), "malformed input at byte 3: expected ':'");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn malformed<S: Into<Cow<'static, str>>>(position: usize, s: S) -> Self {
        raise!(Error::Malformed(position, s.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unexpected_eof(position: usize) -> Self {
        raise!(Error::UnexpectedEof(position))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn structural<S: Into<Cow<'static, str>>>(s: S) -> Self {
        raise!(Error::StructuralImbalance(s.into()))
    }

    /// Creates a new [`Error::UnresolvedDiscriminator`] naming both the base type
    /// and the discriminator that failed to match.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unresolved_discriminator<S: Into<String>>(base: &'static str, discriminator: S) -> Self {
        raise!(Error::UnresolvedDiscriminator {
            base,
            discriminator: discriminator.into(),
        })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn ignored_type(ty: &'static str) -> Self {
        raise!(Error::IgnoredType(ty))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported<S: Into<Cow<'static, str>>>(s: S) -> Self {
        raise!(Error::Unsupported(s.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_enum<S: Into<Cow<'static, str>>>(s: S) -> Self {
        raise!(Error::UnknownEnum(s.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_field<S: Into<String>>(ty: &'static str, field: S) -> Self {
        raise!(Error::UnknownField {
            ty,
            field: field.into(),
        })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn missing_field(ty: &'static str, field: &'static str) -> Self {
        raise!(Error::MissingField { ty, field })
    }

    /// Creates a new [`Error::InvalidData`] from a string or static message.
    ///
    /// # Example
    /// ```
    /// use jolt_core::error::Error;
    ///
    /// let err = Error::invalid_data(format!("number out of range: {}", "300"));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        raise!(Error::InvalidData(s.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        raise!(Error::DepthExceed(s.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn trailing_characters(position: usize) -> Self {
        raise!(Error::TrailingCharacters(position))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_mismatch(expected: &'static str) -> Self {
        raise!(Error::TypeMismatch { expected })
    }

    /// Creates a new [`Error::Custom`]. Intended for user codecs.
    ///
    /// # Example
    /// ```
    /// use jolt_core::error::Error;
    ///
    /// let err = Error::custom("date out of range");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn custom<S: Into<Cow<'static, str>>>(s: S) -> Self {
        raise!(Error::Custom(s.into()))
    }

    /// Appends the Rust type name to data errors raised while decoding `T`.
    #[inline(never)]
    pub fn enhance_invalid_data<T: ?Sized + 'static>(err: Error) -> Error {
        if let Error::InvalidData(s) = err {
            let mut msg = s.into_owned();
            msg.push_str(" (type: ");
            msg.push_str(std::any::type_name::<T>());
            msg.push(')');
            Error::InvalidData(msg.into())
        } else {
            err
        }
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use jolt_core::ensure;
/// use jolt_core::error::Error;
///
/// fn check_len(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, "length must be positive");
///     ensure!(n < 10, "length {} too large", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::invalid_data(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with an [`Error::Custom`].
///
/// # Examples
/// ```
/// use jolt_core::bail;
/// use jolt_core::error::Error;
///
/// fn fail_fast() -> Result<(), Error> {
///     bail!("something went wrong");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::custom($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::custom(format!($fmt, $($arg)*)))
    };
}

/// Returns early with an [`Error::Unsupported`].
#[macro_export]
macro_rules! not_allowed {
    ($err:expr) => {
        return Err($crate::error::Error::unsupported($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::unsupported(format!($fmt, $($arg)*)))
    };
}
