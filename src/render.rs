//! Argument rendering.
//!
//! Converts one [`Argument`] under one [`Conversion`] into a [`RenderedField`].
//!
//! ## Per-Kind Rules
//!
//! - **`%d`**: base 10 with a leading `-` for negatives
//! - **`%u` / `%x` / `%b` / `%o`**: unsigned magnitude, lowercase hex digits,
//!   bit vectors keep all their digits (leading zeros included)
//! - **`%s`**: verbatim, booleans as `true` / `false`
//! - **`%c`**: the character itself
//! - **`%t`**: `<magnitude><unit>`, e.g. `-20ns`
//! - **`%%`**: a single `%`
//!
//! Width is a minimum: shorter fields are padded, longer ones are left alone,
//! except for `%.Ns` which cuts the string to `N` characters. Zero padding goes
//! between the sign and the digits.
//!
//! ## Examples
//!
//! ```rust
//! use sformat::{parse, render, Argument, Token};
//!
//! let tokens = parse("%06d").unwrap();
//! let Token::Conversion(conv) = &tokens[0] else { unreachable!() };
//!
//! let field = render(conv, Some(&Argument::from(-42))).unwrap();
//! assert_eq!(field.to_string(), "-00042");
//! assert_eq!(field.len(), 6);
//! ```

use crate::parse::{Conversion, ConversionKind};
use crate::{Argument, Error, Result};
use std::fmt;

/// Where the padding of a field goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Spaces before the sign (right-justified, the default).
    Leading,
    /// Zeros between the sign and the digits.
    Internal,
    /// Spaces after the text (left-justified).
    Trailing,
}

impl Placement {
    #[inline]
    const fn fill(&self) -> char {
        match self {
            Placement::Internal => '0',
            Placement::Leading | Placement::Trailing => ' ',
        }
    }
}

/// The text of one rendered conversion.
///
/// Padding is kept as a count and only expanded when the field is written,
/// so a large width costs nothing until the capacity check has passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedField {
    sign: Option<char>,
    body: String,
    body_len: usize,
    padding: usize,
    placement: Placement,
}

impl RenderedField {
    fn new(sign: Option<char>, body: String, conversion: &Conversion) -> Self {
        let body_len = body.chars().count();
        let natural = body_len + usize::from(sign.is_some());
        let modifiers = &conversion.modifiers;
        let padding = modifiers.width.map_or(0, |width| width.saturating_sub(natural));

        // '-' overrides '0'
        let placement = if modifiers.left_justify {
            Placement::Trailing
        } else if modifiers.zero_pad {
            Placement::Internal
        } else {
            Placement::Leading
        };

        RenderedField {
            sign,
            body,
            body_len,
            padding,
            placement,
        }
    }

    /// Length in characters, padding included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.sign.is_some()) + self.body_len + self.padding
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Appends the field to `out`.
    pub fn write_into(&self, out: &mut String) {
        let fill = std::iter::repeat(self.placement.fill()).take(self.padding);
        if self.placement == Placement::Leading {
            out.extend(fill.clone());
        }
        if let Some(sign) = self.sign {
            out.push(sign);
        }
        if self.placement == Placement::Internal {
            out.extend(fill.clone());
        }
        out.push_str(&self.body);
        if self.placement == Placement::Trailing {
            out.extend(fill);
        }
    }
}

impl fmt::Display for RenderedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.len());
        self.write_into(&mut out);
        f.write_str(&out)
    }
}

/// Renders `argument` under `conversion`.
///
/// `argument` is ignored for `%%` and required for every other conversion.
/// Errors report the argument as index 0; use the crate-level functions to get
/// positions within a full argument list.
///
/// # Errors
///
/// - [`Error::ArgumentExhausted`] if `argument` is `None` for a conversion that
///   consumes one
/// - [`Error::TypeMismatch`] if the conversion does not accept the argument's kind
pub fn render(conversion: &Conversion, argument: Option<&Argument>) -> Result<RenderedField> {
    render_at(conversion, argument, 0)
}

pub(crate) fn render_at(
    conversion: &Conversion,
    argument: Option<&Argument>,
    index: usize,
) -> Result<RenderedField> {
    if conversion.kind == ConversionKind::Percent {
        return Ok(RenderedField::new(None, "%".to_string(), conversion));
    }

    let argument = argument.ok_or(Error::argument_exhausted(index))?;
    if !conversion.kind.accepts(argument.kind()) {
        return Err(Error::type_mismatch(
            index,
            conversion.kind.expected(),
            argument.kind(),
        ));
    }

    let (sign, body) = match argument {
        Argument::Signed(value) => signed_parts(*value, ""),
        Argument::Unsigned(value) => (None, unsigned_digits(conversion.kind, *value)),
        Argument::Bits(bits) => {
            let body = match conversion.kind {
                ConversionKind::Hex => {
                    format!("{:0w$x}", bits.value(), w = bits.digit_count(4))
                }
                ConversionKind::Binary => {
                    format!("{:0w$b}", bits.value(), w = bits.digit_count(1))
                }
                ConversionKind::Octal => {
                    format!("{:0w$o}", bits.value(), w = bits.digit_count(3))
                }
                _ => bits.value().to_string(),
            };
            (None, body)
        }
        Argument::Str(text) => (None, truncated(text, conversion)),
        Argument::Bool(flag) => (None, truncated(if *flag { "true" } else { "false" }, conversion)),
        Argument::Char(ch) => (None, ch.to_string()),
        Argument::Time(time) => signed_parts(time.magnitude, time.unit.suffix()),
    };

    Ok(RenderedField::new(sign, body, conversion))
}

/// Splits a signed value into its sign and `<digits><suffix>`.
fn signed_parts(value: i64, suffix: &str) -> (Option<char>, String) {
    let sign = (value < 0).then_some('-');
    let mut body = value.unsigned_abs().to_string();
    body.push_str(suffix);
    (sign, body)
}

fn unsigned_digits(kind: ConversionKind, value: u64) -> String {
    match kind {
        ConversionKind::Hex => format!("{:x}", value),
        ConversionKind::Binary => format!("{:b}", value),
        ConversionKind::Octal => format!("{:o}", value),
        _ => value.to_string(),
    }
}

fn truncated(text: &str, conversion: &Conversion) -> String {
    match conversion.modifiers.width {
        Some(width) if conversion.modifiers.truncate => text.chars().take(width).collect(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Modifiers;
    use crate::{ArgumentKind, BitVector, ErrorKind, TimeUnit, TimeValue};

    fn conv_with(kind: ConversionKind, width: Option<usize>, zero_pad: bool, left: bool) -> Conversion {
        Conversion::new(kind).with_modifiers(Modifiers {
            width,
            zero_pad,
            left_justify: left,
            truncate: false,
        })
    }

    fn text(conv: &Conversion, arg: Argument) -> String {
        render(conv, Some(&arg)).unwrap().to_string()
    }

    #[test]
    fn test_signed() {
        let plain = Conversion::new(ConversionKind::Signed);
        assert_eq!(text(&plain, Argument::from(42)), "42");
        assert_eq!(text(&plain, Argument::from(0)), "0");
        assert_eq!(text(&plain, Argument::from(-7)), "-7");
        assert_eq!(text(&plain, Argument::from(i64::MIN)), "-9223372036854775808");
    }

    #[test]
    fn test_signed_padding() {
        let zero = conv_with(ConversionKind::Signed, Some(5), true, false);
        assert_eq!(text(&zero, Argument::from(42)), "00042");
        assert_eq!(text(&zero, Argument::from(-42)), "-0042");

        let right = conv_with(ConversionKind::Signed, Some(5), false, false);
        assert_eq!(text(&right, Argument::from(-42)), "  -42");

        let left = conv_with(ConversionKind::Signed, Some(5), false, true);
        assert_eq!(text(&left, Argument::from(-42)), "-42  ");
    }

    #[test]
    fn test_left_justify_overrides_zero_pad() {
        let conv = conv_with(ConversionKind::Signed, Some(4), true, true);
        let field = render(&conv, Some(&Argument::from(7))).unwrap();
        assert_eq!(field.placement(), Placement::Trailing);
        assert_eq!(field.to_string(), "7   ");
    }

    #[test]
    fn test_width_is_minimum() {
        let conv = conv_with(ConversionKind::Signed, Some(2), true, false);
        assert_eq!(text(&conv, Argument::from(123456)), "123456");
    }

    #[test]
    fn test_unsigned_bases() {
        let value = Argument::from(255u32);
        assert_eq!(text(&Conversion::new(ConversionKind::Unsigned), value.clone()), "255");
        assert_eq!(text(&Conversion::new(ConversionKind::Hex), value.clone()), "ff");
        assert_eq!(text(&Conversion::new(ConversionKind::Binary), value.clone()), "11111111");
        assert_eq!(text(&Conversion::new(ConversionKind::Octal), value), "377");

        let max = Argument::from(u64::MAX);
        assert_eq!(text(&Conversion::new(ConversionKind::Hex), max), "ffffffffffffffff");
    }

    #[test]
    fn test_unsigned_zero_pad() {
        let conv = conv_with(ConversionKind::Hex, Some(4), true, false);
        assert_eq!(text(&conv, Argument::from(0xau8)), "000a");
    }

    #[test]
    fn test_bit_vector_keeps_leading_zeros() {
        let bits = Argument::from(BitVector::new(5, 8).unwrap());
        assert_eq!(text(&Conversion::new(ConversionKind::Binary), bits.clone()), "00000101");
        assert_eq!(text(&Conversion::new(ConversionKind::Hex), bits.clone()), "05");
        assert_eq!(text(&Conversion::new(ConversionKind::Octal), bits.clone()), "005");
        assert_eq!(text(&Conversion::new(ConversionKind::Unsigned), bits), "5");

        let odd = Argument::from(BitVector::from_bit_str("1_0000_0000").unwrap());
        assert_eq!(text(&Conversion::new(ConversionKind::Hex), odd), "100");
    }

    #[test]
    fn test_string() {
        let conv = conv_with(ConversionKind::String, Some(6), false, false);
        assert_eq!(text(&conv, Argument::from("ab")), "    ab");

        let conv = conv_with(ConversionKind::String, Some(6), false, true);
        assert_eq!(text(&conv, Argument::from("ab")), "ab    ");

        let conv = conv_with(ConversionKind::String, Some(2), false, false);
        assert_eq!(text(&conv, Argument::from("longer")), "longer");
    }

    #[test]
    fn test_string_truncation() {
        let mut conv = conv_with(ConversionKind::String, Some(3), false, false);
        conv.modifiers.truncate = true;
        assert_eq!(text(&conv, Argument::from("abcdef")), "abc");
        assert_eq!(text(&conv, Argument::from("a")), "  a");
        assert_eq!(text(&conv, Argument::from("ΔΔΔΔ")), "ΔΔΔ");
        assert_eq!(text(&conv, Argument::from(false)), "fal");
    }

    #[test]
    fn test_bool() {
        let conv = Conversion::new(ConversionKind::String);
        assert_eq!(text(&conv, Argument::from(true)), "true");
        assert_eq!(text(&conv, Argument::from(false)), "false");
    }

    #[test]
    fn test_character() {
        let conv = conv_with(ConversionKind::Character, Some(3), false, false);
        assert_eq!(text(&conv, Argument::from('Z')), "  Z");
        let field = render(&conv, Some(&Argument::from('µ'))).unwrap();
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn test_time() {
        let conv = Conversion::new(ConversionKind::Time);
        assert_eq!(text(&conv, Argument::from(TimeValue::new(10, TimeUnit::Ns))), "10ns");
        assert_eq!(text(&conv, Argument::from(TimeValue::new(-3, TimeUnit::Us))), "-3us");

        let zero = conv_with(ConversionKind::Time, Some(7), true, false);
        assert_eq!(
            text(&zero, Argument::from(TimeValue::new(-5, TimeUnit::Ps))),
            "-0005ps"
        );
    }

    #[test]
    fn test_percent() {
        let conv = Conversion::new(ConversionKind::Percent);
        assert_eq!(render(&conv, None).unwrap().to_string(), "%");

        let wide = conv_with(ConversionKind::Percent, Some(3), false, false);
        assert_eq!(render(&wide, None).unwrap().to_string(), "  %");
    }

    #[test]
    fn test_type_mismatch() {
        let err = render(&Conversion::new(ConversionKind::Signed), Some(&Argument::from("text")))
            .unwrap_err();
        assert_eq!(
            err,
            Error::type_mismatch(0, "signed integer", ArgumentKind::Str)
        );

        let err = render(&Conversion::new(ConversionKind::Hex), Some(&Argument::from(255)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        let err = render(&Conversion::new(ConversionKind::Signed), Some(&Argument::from(1u8)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_missing_argument() {
        let err = render(&Conversion::new(ConversionKind::Character), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentExhausted);
    }

    #[test]
    fn test_huge_width_is_not_expanded() {
        let conv = conv_with(ConversionKind::Signed, Some(usize::MAX), false, false);
        let field = render(&conv, Some(&Argument::from(1))).unwrap();
        assert_eq!(field.len(), usize::MAX);
    }
}
