//! Template parsing.
//!
//! This module turns a template string into an ordered list of [`Token`]s:
//! literal text runs and conversion specifiers.
//!
//! ## Overview
//!
//! - **Single-pass**: one left-to-right scan, no backtracking
//! - **Merged literals**: consecutive non-`%` characters form one token
//! - **No argument binding**: a template can be validated without arguments
//!
//! ## Usage
//!
//! ```rust
//! use sformat::{parse, ConversionKind, Token};
//!
//! let tokens = parse("t=%t id=%04x").unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0], Token::Literal("t="));
//!
//! match &tokens[3] {
//!     Token::Conversion(conv) => {
//!         assert_eq!(conv.kind, ConversionKind::Hex);
//!         assert_eq!(conv.modifiers.width, Some(4));
//!         assert!(conv.modifiers.zero_pad);
//!     }
//!     _ => panic!("Expected conversion"),
//! }
//! ```
//!
//! Parse once and render many times with [`Template`]:
//!
//! ```rust
//! use sformat::{Argument, Template};
//!
//! let template = Template::parse("cycle %d").unwrap();
//! assert_eq!(template.argument_count(), 1);
//! assert_eq!(template.render(&[Argument::from(3)]).unwrap(), "cycle 3");
//! ```

use crate::value::ArgumentKind;
use crate::{Argument, Error, FormatOptions, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of conversions a specifier can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionKind {
    /// `%d`
    Signed,
    /// `%u`
    Unsigned,
    /// `%x`
    Hex,
    /// `%b`
    Binary,
    /// `%o`
    Octal,
    /// `%s`
    String,
    /// `%c`
    Character,
    /// `%t`
    Time,
    /// `%%`
    Percent,
}

impl ConversionKind {
    /// Maps a conversion character to its kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sformat::ConversionKind;
    ///
    /// assert_eq!(ConversionKind::from_char('x'), Some(ConversionKind::Hex));
    /// assert_eq!(ConversionKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'd' => Some(ConversionKind::Signed),
            'u' => Some(ConversionKind::Unsigned),
            'x' => Some(ConversionKind::Hex),
            'b' => Some(ConversionKind::Binary),
            'o' => Some(ConversionKind::Octal),
            's' => Some(ConversionKind::String),
            'c' => Some(ConversionKind::Character),
            't' => Some(ConversionKind::Time),
            '%' => Some(ConversionKind::Percent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            ConversionKind::Signed => 'd',
            ConversionKind::Unsigned => 'u',
            ConversionKind::Hex => 'x',
            ConversionKind::Binary => 'b',
            ConversionKind::Octal => 'o',
            ConversionKind::String => 's',
            ConversionKind::Character => 'c',
            ConversionKind::Time => 't',
            ConversionKind::Percent => '%',
        }
    }

    /// Returns `false` only for `%%`.
    #[inline]
    #[must_use]
    pub const fn consumes_argument(&self) -> bool {
        !matches!(self, ConversionKind::Percent)
    }

    /// Returns `true` if an argument of `kind` can be rendered by this conversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sformat::{ArgumentKind, ConversionKind};
    ///
    /// assert!(ConversionKind::Hex.accepts(ArgumentKind::Unsigned));
    /// assert!(ConversionKind::Hex.accepts(ArgumentKind::Bits));
    /// assert!(!ConversionKind::Hex.accepts(ArgumentKind::Signed));
    /// assert!(ConversionKind::String.accepts(ArgumentKind::Bool));
    /// ```
    #[must_use]
    pub const fn accepts(&self, kind: ArgumentKind) -> bool {
        match self {
            ConversionKind::Signed => matches!(kind, ArgumentKind::Signed),
            ConversionKind::Unsigned
            | ConversionKind::Hex
            | ConversionKind::Binary
            | ConversionKind::Octal => matches!(kind, ArgumentKind::Unsigned | ArgumentKind::Bits),
            ConversionKind::String => matches!(kind, ArgumentKind::Str | ArgumentKind::Bool),
            ConversionKind::Character => matches!(kind, ArgumentKind::Char),
            ConversionKind::Time => matches!(kind, ArgumentKind::Time),
            ConversionKind::Percent => false,
        }
    }

    /// Describes the accepted argument kinds, for error messages.
    #[must_use]
    pub const fn expected(&self) -> &'static str {
        match self {
            ConversionKind::Signed => "signed integer",
            ConversionKind::Unsigned
            | ConversionKind::Hex
            | ConversionKind::Binary
            | ConversionKind::Octal => "unsigned integer or bit vector",
            ConversionKind::String => "string or boolean",
            ConversionKind::Character => "character",
            ConversionKind::Time => "time value",
            ConversionKind::Percent => "no argument",
        }
    }
}

/// Width, padding and justification qualifiers of a specifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    /// Minimum field width in characters.
    pub width: Option<usize>,
    /// `0`: pad with zeros instead of spaces.
    pub zero_pad: bool,
    /// `-`: pad on the right instead of the left.
    pub left_justify: bool,
    /// `.`: cut strings longer than the width (strings only).
    pub truncate: bool,
}

/// A parsed `%` specifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conversion {
    pub kind: ConversionKind,
    pub modifiers: Modifiers,
}

impl Conversion {
    /// A conversion with no modifiers.
    #[must_use]
    pub fn new(kind: ConversionKind) -> Self {
        Conversion {
            kind,
            modifiers: Modifiers::default(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl fmt::Display for Conversion {
    /// Writes the specifier back in its canonical form, e.g. `%-08s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        if self.modifiers.left_justify {
            f.write_str("-")?;
        }
        if self.modifiers.zero_pad {
            f.write_str("0")?;
        }
        if self.modifiers.truncate {
            f.write_str(".")?;
        }
        if let Some(width) = self.modifiers.width {
            write!(f, "{}", width)?;
        }
        write!(f, "{}", self.kind.as_char())
    }
}

/// One element of a parsed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied verbatim; never contains `%`.
    Literal(&'a str),
    Conversion(Conversion),
}

impl Token<'_> {
    /// Returns `true` if rendering this token takes an argument.
    #[inline]
    #[must_use]
    pub fn consumes_argument(&self) -> bool {
        match self {
            Token::Literal(_) => false,
            Token::Conversion(conv) => conv.kind.consumes_argument(),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => f.write_str(text),
            Token::Conversion(conv) => fmt::Display::fmt(conv, f),
        }
    }
}

/// Scans a template into tokens.
struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser { input, position: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn parse_literal(&mut self) -> &'a str {
        let start = self.position;
        let end = self.input[start..]
            .find('%')
            .map_or(self.input.len(), |offset| start + offset);
        self.position = end;
        &self.input[start..end]
    }

    fn parse_conversion(&mut self) -> Result<Conversion> {
        let start = self.position;
        self.next_char(); // '%'

        let mut modifiers = Modifiers::default();
        loop {
            match self.peek_char() {
                Some('-') => modifiers.left_justify = true,
                Some('0') => modifiers.zero_pad = true,
                Some('.') => modifiers.truncate = true,
                _ => break,
            }
            self.next_char();
        }

        modifiers.width = self.parse_width(start)?;

        let ch = self.next_char().ok_or(Error::unterminated(start))?;
        let kind = ConversionKind::from_char(ch).ok_or_else(|| {
            Error::malformed(start, &format!("unknown conversion character {:?}", ch))
        })?;

        if modifiers.truncate && kind != ConversionKind::String {
            return Err(Error::malformed(
                start,
                &format!("truncate flag '.' does not apply to %{}", kind.as_char()),
            ));
        }
        if modifiers.truncate && modifiers.width.is_none() {
            return Err(Error::malformed(start, "truncate flag '.' needs a width"));
        }

        Ok(Conversion { kind, modifiers })
    }

    fn parse_width(&mut self, start: usize) -> Result<Option<usize>> {
        let mut width: Option<usize> = None;
        while let Some(digit) = self.peek_char().and_then(|ch| ch.to_digit(10)) {
            let next = width
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|w| w.checked_add(digit as usize))
                .ok_or_else(|| Error::malformed(start, "field width overflows"))?;
            width = Some(next);
            self.next_char();
        }
        Ok(width)
    }

    fn parse_tokens(mut self) -> Result<Vec<Token<'a>>> {
        let mut tokens = Vec::new();
        while !self.at_end() {
            if self.peek_char() == Some('%') {
                tokens.push(Token::Conversion(self.parse_conversion()?));
            } else {
                tokens.push(Token::Literal(self.parse_literal()));
            }
        }
        Ok(tokens)
    }
}

/// Parses `template` into literal and conversion tokens.
///
/// # Errors
///
/// - [`Error::UnterminatedSpecifier`] if the template ends inside a specifier
/// - [`Error::MalformedSpecifier`] for an unknown conversion character, a
///   width that overflows `usize`, or `.` on anything but `%s` or without a width
///
/// # Examples
///
/// ```rust
/// use sformat::{parse, ErrorKind};
///
/// assert!(parse("plain text").is_ok());
/// assert_eq!(parse("50%").unwrap_err().kind(), ErrorKind::UnterminatedSpecifier);
/// assert_eq!(parse("%q").unwrap_err().kind(), ErrorKind::MalformedSpecifier);
/// ```
pub fn parse(template: &str) -> Result<Vec<Token<'_>>> {
    Parser::new(template).parse_tokens()
}

/// A parsed template that can be rendered any number of times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> Template<'a> {
    /// Parses `source`. See [`parse`] for the errors returned.
    pub fn parse(source: &'a str) -> Result<Self> {
        let tokens = parse(source)?;
        Ok(Template { source, tokens })
    }

    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Number of arguments a render call must supply.
    #[must_use]
    pub fn argument_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| token.consumes_argument())
            .count()
    }

    /// Renders with the default options.
    pub fn render(&self, arguments: &[Argument]) -> Result<String> {
        self.render_with_options(arguments, FormatOptions::default())
    }

    pub fn render_with_options(
        &self,
        arguments: &[Argument],
        options: FormatOptions,
    ) -> Result<String> {
        crate::assemble::assemble(&self.tokens, arguments, &options)
    }
}
