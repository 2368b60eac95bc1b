//! # sformat
//!
//! C-like formatted string construction (an analogue of `sprintf`) for
//! hardware simulation testbenches.
//!
//! ## What is it for?
//!
//! Testbenches report what they see: bus values, cycle counts, simulation
//! times, state names. `sformat` turns a template such as
//! `"addr=%08x data=%b at %t"` plus typed values into a single message
//! string, deterministically and without any runtime reflection.
//!
//! ## Key Features
//!
//! - **Typed arguments**: integers, bit vectors, time values, strings,
//!   characters and booleans, with no implicit coercion between them
//! - **Strict arity**: missing and surplus arguments are both errors
//! - **Bounded output**: results never grow past a fixed capacity
//! - **Reusable templates**: parse once with [`Template`], render many times
//!
//! ## Quick Start
//!
//! ```rust
//! use sformat::{format, sformat, Argument, BitVector, TimeUnit, TimeValue};
//!
//! let msg = format("%d", &[Argument::from(42)]).unwrap();
//! assert_eq!(msg, "42");
//!
//! let data = BitVector::from_bit_str("0000_1010").unwrap();
//! let now = TimeValue::new(125, TimeUnit::Ns);
//! let msg = sformat!("addr=%08x data=%b at %t", 0x40u32, data, now).unwrap();
//! assert_eq!(msg, "addr=00000040 data=00001010 at 125ns");
//! ```
//!
//! ### Errors Instead of Surprises
//!
//! ```rust
//! use sformat::{sformat, ErrorKind};
//!
//! assert_eq!(sformat!("%d").unwrap_err().kind(), ErrorKind::ArgumentExhausted);
//! assert_eq!(sformat!("%d", 1, 2).unwrap_err().kind(), ErrorKind::SurplusArguments);
//! assert_eq!(sformat!("%d", "text").unwrap_err().kind(), ErrorKind::TypeMismatch);
//! assert_eq!(sformat!("%x", 255).unwrap_err().kind(), ErrorKind::TypeMismatch);
//! assert_eq!(sformat!("%x", 255u8).unwrap(), "ff");
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parse`] scans the template into [`Token`]s
//! 2. [`render`] turns one argument into a [`RenderedField`]
//! 3. [`assemble`] binds arguments to tokens and collects the result in an
//!    [`OutputBuffer`]
//!
//! Every call is a pure function of its inputs: no state survives between
//! calls. See the [`syntax`] module for the full template language.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: one `trace` record per token and
//! a `debug` record for each failed call. Install any `log` backend to see them.

pub mod assemble;
pub mod error;
pub mod macros;
pub mod options;
pub mod parse;
pub mod render;
pub mod syntax;
pub mod value;

pub use assemble::{assemble, OutputBuffer};
pub use error::{Error, ErrorKind, Result};
pub use options::{FormatOptions, DEFAULT_CAPACITY};
pub use parse::{parse, Conversion, ConversionKind, Modifiers, Template, Token};
pub use render::{render, Placement, RenderedField};
pub use value::{Argument, ArgumentKind, BitVector, TimeUnit, TimeValue};

use std::io;

/// Formats `template` with `arguments` using [`DEFAULT_CAPACITY`].
///
/// # Examples
///
/// ```rust
/// use sformat::{format, Argument};
///
/// assert_eq!(format("%05d", &[Argument::from(42)]).unwrap(), "00042");
/// assert_eq!(format("%-5d|", &[Argument::from(42)]).unwrap(), "42   |");
/// assert_eq!(format("%%", &[]).unwrap(), "%");
/// ```
///
/// # Errors
///
/// Returns an error if the template is invalid, the arguments do not match its
/// conversions, or the result would exceed the capacity.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format(template: &str, arguments: &[Argument]) -> Result<String> {
    format_with_options(template, arguments, FormatOptions::default())
}

/// Formats `template` with `arguments` and custom options.
///
/// # Examples
///
/// ```rust
/// use sformat::{format_with_options, Argument, ErrorKind, FormatOptions};
///
/// let options = FormatOptions::new().with_capacity(3);
/// assert_eq!(format_with_options("%3s", &[Argument::from("ok")], options.clone()).unwrap(), " ok");
///
/// let err = format_with_options("%4s", &[Argument::from("ok")], options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::OutputTooLong);
/// ```
///
/// # Errors
///
/// Returns an error if the template is invalid, the arguments do not match its
/// conversions, or the result would exceed `options.capacity`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_with_options(
    template: &str,
    arguments: &[Argument],
    options: FormatOptions,
) -> Result<String> {
    let tokens = parse(template)?;
    assemble(&tokens, arguments, &options)
}

/// Formats a message and writes it to `writer`.
///
/// Nothing is written if formatting fails.
///
/// # Examples
///
/// ```rust
/// use sformat::{format_to_writer, Argument};
///
/// let mut transcript = Vec::new();
/// format_to_writer(&mut transcript, "tick %u\n", &[Argument::from(3u32)]).unwrap();
/// assert_eq!(transcript, b"tick 3\n");
/// ```
///
/// # Errors
///
/// Returns an error if formatting fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_to_writer<W>(mut writer: W, template: &str, arguments: &[Argument]) -> Result<()>
where
    W: io::Write,
{
    let message = format(template, arguments)?;
    writer
        .write_all(message.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
