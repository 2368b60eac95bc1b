//! Error types for template parsing, rendering and assembly.
//!
//! Every failure is reported by the call that caused it and no partial output
//! is ever returned alongside an error.
//!
//! ## Error Categories
//!
//! - **Template errors**: [`Error::MalformedSpecifier`] and
//!   [`Error::UnterminatedSpecifier`] mean the template itself is invalid
//! - **Arity errors**: [`Error::ArgumentExhausted`] and [`Error::SurplusArguments`]
//!   mean the argument count does not match the conversions
//! - **Type errors**: [`Error::TypeMismatch`] means an argument cannot be
//!   rendered by its conversion (no implicit coercion is ever applied)
//! - **Capacity errors**: [`Error::OutputTooLong`] means the result would exceed
//!   the configured capacity
//!
//! ## Examples
//!
//! ```rust
//! use sformat::{format, Argument, ErrorKind};
//!
//! let err = format("%d", &[Argument::from("text")]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TypeMismatch);
//! assert!(err.to_string().contains("expected signed integer"));
//! ```

use crate::value::ArgumentKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A `%` is followed by something that is not a valid conversion.
    #[error("Malformed specifier at offset {position}: {msg}")]
    MalformedSpecifier { position: usize, msg: String },

    /// The template ends before the conversion character of a specifier.
    #[error("Unterminated specifier at offset {position}: template ends before the conversion character")]
    UnterminatedSpecifier { position: usize },

    /// An argument's kind is not accepted by its conversion.
    #[error("Type mismatch for argument {index}: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: String,
        found: ArgumentKind,
    },

    /// A conversion needs an argument but none remain.
    #[error("Argument exhausted: argument {index} is missing (only {index} supplied)")]
    ArgumentExhausted { index: usize },

    /// Arguments remain after the last conversion was rendered.
    #[error("Surplus arguments: template consumes {expected}, {supplied} supplied")]
    SurplusArguments { expected: usize, supplied: usize },

    /// The result would be longer than the configured capacity.
    #[error("Output too long: result exceeds capacity of {capacity} characters")]
    OutputTooLong { capacity: usize },

    /// IO error while writing a finished message
    #[error("IO error: {0}")]
    Io(String),
}

/// The fieldless discriminant of an [`Error`].
///
/// Useful for comparing against expected failures in test vectors, where
/// offsets and counts are not interesting.
///
/// # Examples
///
/// ```rust
/// use sformat::{format, ErrorKind};
///
/// let err = format("%d", &[]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ArgumentExhausted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    MalformedSpecifier,
    UnterminatedSpecifier,
    TypeMismatch,
    ArgumentExhausted,
    SurplusArguments,
    OutputTooLong,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Error {
    /// Creates a malformed-specifier error for the `%` at `position`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sformat::Error;
    ///
    /// let err = Error::malformed(4, "unknown conversion character 'q'");
    /// assert!(err.to_string().contains("offset 4"));
    /// ```
    pub fn malformed(position: usize, msg: &str) -> Self {
        Error::MalformedSpecifier {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an unterminated-specifier error for the `%` at `position`.
    pub fn unterminated(position: usize) -> Self {
        Error::UnterminatedSpecifier { position }
    }

    /// Creates a type mismatch error for the argument at `index`.
    ///
    /// `expected` describes what the conversion accepts, `found` is the kind
    /// actually supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sformat::{ArgumentKind, Error};
    ///
    /// let err = Error::type_mismatch(0, "signed integer", ArgumentKind::Str);
    /// assert!(err.to_string().contains("found string"));
    /// ```
    pub fn type_mismatch(index: usize, expected: &str, found: ArgumentKind) -> Self {
        Error::TypeMismatch {
            index,
            expected: expected.to_string(),
            found,
        }
    }

    /// Creates an error for a conversion that needs the (zero-based)
    /// argument `index` when only `index` arguments exist.
    pub fn argument_exhausted(index: usize) -> Self {
        Error::ArgumentExhausted { index }
    }

    pub fn surplus_arguments(expected: usize, supplied: usize) -> Self {
        Error::SurplusArguments { expected, supplied }
    }

    pub fn output_too_long(capacity: usize) -> Self {
        Error::OutputTooLong { capacity }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the fieldless kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedSpecifier { .. } => ErrorKind::MalformedSpecifier,
            Error::UnterminatedSpecifier { .. } => ErrorKind::UnterminatedSpecifier,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::ArgumentExhausted { .. } => ErrorKind::ArgumentExhausted,
            Error::SurplusArguments { .. } => ErrorKind::SurplusArguments,
            Error::OutputTooLong { .. } => ErrorKind::OutputTooLong,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns `true` if the template itself is invalid, independent of any
    /// argument list.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedSpecifier { .. } | Error::UnterminatedSpecifier { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Error::malformed(0, "x").kind(), ErrorKind::MalformedSpecifier);
        assert_eq!(Error::unterminated(3).kind(), ErrorKind::UnterminatedSpecifier);
        assert_eq!(
            Error::type_mismatch(1, "character", ArgumentKind::Signed).kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(Error::argument_exhausted(0).kind(), ErrorKind::ArgumentExhausted);
        assert_eq!(Error::surplus_arguments(1, 2).kind(), ErrorKind::SurplusArguments);
        assert_eq!(Error::output_too_long(8).kind(), ErrorKind::OutputTooLong);
        assert_eq!(Error::io("broken pipe").kind(), ErrorKind::Io);
    }

    #[test]
    fn test_template_errors() {
        assert!(Error::unterminated(0).is_template_error());
        assert!(Error::malformed(0, "x").is_template_error());
        assert!(!Error::surplus_arguments(0, 1).is_template_error());
    }

    #[test]
    fn test_messages() {
        let err = Error::surplus_arguments(1, 2);
        assert_eq!(
            err.to_string(),
            "Surplus arguments: template consumes 1, 2 supplied"
        );

        let err = Error::output_too_long(16);
        assert!(err.to_string().contains("capacity of 16"));

        let err = Error::argument_exhausted(2);
        assert_eq!(
            err.to_string(),
            "Argument exhausted: argument 2 is missing (only 2 supplied)"
        );
    }

    #[test]
    fn test_error_kind_from_json() {
        let kind: ErrorKind = serde_json::from_str("\"OutputTooLong\"").unwrap();
        assert_eq!(kind, ErrorKind::OutputTooLong);
    }
}
