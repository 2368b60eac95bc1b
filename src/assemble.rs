//! Output assembly.
//!
//! Walks the tokens of a template in order, binds arguments to conversions and
//! accumulates the result in a capacity-bounded [`OutputBuffer`].
//!
//! Arity is strict: a conversion with no argument left fails with
//! [`Error::ArgumentExhausted`] and arguments left over after the last token
//! fail with [`Error::SurplusArguments`]. Nothing is returned on failure.
//!
//! ```rust
//! use sformat::{assemble, parse, Argument, FormatOptions};
//!
//! let tokens = parse("%s=%u").unwrap();
//! let args = [Argument::from("count"), Argument::from(3u8)];
//! let text = assemble(&tokens, &args, &FormatOptions::default()).unwrap();
//! assert_eq!(text, "count=3");
//! ```

use crate::parse::Token;
use crate::render::{render_at, RenderedField};
use crate::{Argument, Error, FormatOptions, Result};
use log::{debug, trace};

/// An append-only string that refuses to grow past a fixed capacity.
///
/// Length and capacity are counted in characters.
///
/// # Examples
///
/// ```rust
/// use sformat::{ErrorKind, OutputBuffer};
///
/// let mut buffer = OutputBuffer::new(5);
/// buffer.push_str("abc").unwrap();
/// assert_eq!(buffer.remaining(), 2);
///
/// let err = buffer.push_str("def").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::OutputTooLong);
/// assert_eq!(buffer.as_str(), "abc");
/// ```
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

impl OutputBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        OutputBuffer {
            // Reserve up front only for typical message sizes
            text: String::with_capacity(capacity.min(256)),
            len: 0,
            capacity,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn reserve(&mut self, additional: usize) -> Result<()> {
        if additional > self.remaining() {
            return Err(Error::output_too_long(self.capacity));
        }
        self.len += additional;
        Ok(())
    }

    /// Appends `s` verbatim. The buffer is unchanged on error.
    pub fn push_str(&mut self, s: &str) -> Result<()> {
        self.reserve(s.chars().count())?;
        self.text.push_str(s);
        Ok(())
    }

    /// Appends a rendered field. The buffer is unchanged on error.
    pub fn push_field(&mut self, field: &RenderedField) -> Result<()> {
        self.reserve(field.len())?;
        field.write_into(&mut self.text);
        Ok(())
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Renders `tokens` with `arguments` into a new string.
///
/// # Errors
///
/// - [`Error::ArgumentExhausted`] / [`Error::SurplusArguments`] on arity mismatch
/// - [`Error::TypeMismatch`] when an argument does not fit its conversion
/// - [`Error::OutputTooLong`] when the result exceeds `options.capacity`
pub fn assemble(
    tokens: &[Token<'_>],
    arguments: &[Argument],
    options: &FormatOptions,
) -> Result<String> {
    assemble_tokens(tokens, arguments, options.capacity).map_err(|err| {
        debug!("formatting failed: {}", err);
        err
    })
}

fn assemble_tokens(tokens: &[Token<'_>], arguments: &[Argument], capacity: usize) -> Result<String> {
    let mut buffer = OutputBuffer::new(capacity);
    let mut consumed = 0;

    for token in tokens {
        match token {
            Token::Literal(text) => {
                trace!("literal {:?}", text);
                buffer.push_str(text)?;
            }
            Token::Conversion(conv) => {
                let index = consumed;
                let argument = if conv.kind.consumes_argument() {
                    let argument = arguments
                        .get(index)
                        .ok_or(Error::argument_exhausted(index))?;
                    consumed += 1;
                    Some(argument)
                } else {
                    None
                };

                let field = render_at(conv, argument, index)?;
                buffer.push_field(&field)?;
                trace!("{} -> {} chars", conv, field.len());
            }
        }
    }

    if consumed != arguments.len() {
        return Err(Error::surplus_arguments(consumed, arguments.len()));
    }

    Ok(buffer.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use crate::ErrorKind;

    fn run(template: &str, args: &[Argument], capacity: usize) -> Result<String> {
        let tokens = parse(template).unwrap();
        assemble(&tokens, args, &FormatOptions::new().with_capacity(capacity))
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(run("hello", &[], 16).unwrap(), "hello");
        assert_eq!(run("", &[], 0).unwrap(), "");
    }

    #[test]
    fn test_arguments_bound_in_order() {
        let args = [Argument::from(1), Argument::from("two"), Argument::from('3')];
        assert_eq!(run("%d %s %c", &args, 64).unwrap(), "1 two 3");
    }

    #[test]
    fn test_percent_consumes_nothing() {
        assert_eq!(run("%d%%", &[Argument::from(50)], 8).unwrap(), "50%");
    }

    #[test]
    fn test_exhausted_reports_index() {
        let err = run("%d and %d", &[Argument::from(1)], 64).unwrap_err();
        assert_eq!(err, Error::argument_exhausted(1));
    }

    #[test]
    fn test_surplus() {
        let args = [Argument::from(1), Argument::from(2), Argument::from(3)];
        let err = run("%d", &args, 64).unwrap_err();
        assert_eq!(err, Error::surplus_arguments(1, 3));
    }

    #[test]
    fn test_type_mismatch_reports_index() {
        let args = [Argument::from(1), Argument::from(2)];
        let err = run("%d %c", &args, 64).unwrap_err();
        match err {
            Error::TypeMismatch { index, .. } => assert_eq!(index, 1),
            other => panic!("Expected type mismatch, found {:?}", other),
        }
    }

    #[test]
    fn test_capacity_boundary() {
        assert_eq!(run("%5d", &[Argument::from(1)], 5).unwrap(), "    1");
        let err = run("%6d", &[Argument::from(1)], 5).unwrap_err();
        assert_eq!(err, Error::output_too_long(5));
    }

    #[test]
    fn test_capacity_counts_characters() {
        assert_eq!(run("µµµ", &[], 3).unwrap(), "µµµ");
        assert_eq!(run("µµµ!", &[], 3).unwrap_err().kind(), ErrorKind::OutputTooLong);
    }

    #[test]
    fn test_huge_width_fails_cleanly() {
        let template = format!("%{}d", usize::MAX);
        let err = run(&template, &[Argument::from(1)], 1024).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutputTooLong);
    }

    #[test]
    fn test_buffer_unchanged_on_overflow() {
        let mut buffer = OutputBuffer::new(4);
        buffer.push_str("ab").unwrap();
        assert!(buffer.push_str("cde").is_err());
        assert_eq!(buffer.len(), 2);
        buffer.push_str("cd").unwrap();
        assert_eq!(buffer.remaining(), 0);
        assert_eq!(buffer.into_string(), "abcd");
    }
}
