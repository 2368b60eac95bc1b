//! Template Syntax
//!
//! This module documents the template language understood by
//! [`format`](crate::format) and [`parse`](crate::parse).
//!
//! # Overview
//!
//! A template is ordinary text with embedded conversion specifiers, much like
//! C's `printf`. Text outside specifiers is copied verbatim. Each specifier
//! (except `%%`) takes exactly one argument, in order.
//!
//! ```text
//! "req %d granted at %t"   + [7, 40 ns]   ->  "req 7 granted at 40ns"
//! ```
//!
//! # Specifier Grammar
//!
//! ```text
//! specifier := '%' flag* width? conversion
//! flag      := '-' | '0' | '.'
//! width     := digit+
//! conversion:= 'd' | 'u' | 'x' | 'b' | 'o' | 's' | 'c' | 't' | '%'
//! ```
//!
//! Flags may appear in any order and repeat. A `0` seen before any other
//! digit is the zero-pad flag, so `%05d` is zero-pad with width 5 and `%50d`
//! is width 50.
//!
//! ## Conversions
//!
//! | Char | Kind | Accepts | Example |
//! |------|------|---------|---------|
//! | `d` | signed decimal | `i8`..`i64`, `isize` | `-42` |
//! | `u` | unsigned decimal | `u8`..`u64`, `usize`, [`BitVector`](crate::BitVector) | `42` |
//! | `x` | lowercase hex | unsigned, bit vector | `2a` |
//! | `b` | binary | unsigned, bit vector | `101010` |
//! | `o` | octal | unsigned, bit vector | `52` |
//! | `s` | string | `&str`, `String`, `bool` | `ready`, `true` |
//! | `c` | character | `char` | `Z` |
//! | `t` | time | [`TimeValue`](crate::TimeValue) | `40ns` |
//! | `%` | literal percent | nothing | `%` |
//!
//! Signed and unsigned integers are distinct kinds: `%x` of an `i32` is a
//! type mismatch, as is `%d` of a `u32`. No conversion is ever applied
//! implicitly.
//!
//! Bit vectors keep their declared width under `%b`, `%o` and `%x`, so an
//! 8-bit vector holding 5 renders `00000101`, `005` and `05`.
//!
//! Time values render their magnitude by the `%d` rules followed directly by
//! the unit suffix: `fs`, `ps`, `ns`, `us`, `ms`, `sec`, `min`, `hr`.
//!
//! ## Flags
//!
//! | Flag | Effect |
//! |------|--------|
//! | `-` | left-justify: pad with spaces on the right |
//! | `0` | pad with zeros; after the sign for signed values |
//! | `.` | `%s` only: cut strings longer than the width; needs a width |
//!
//! `-` wins over `0`: `%-05d` of 7 is `7    `. A `.` with no width, as in
//! `%.s`, is a malformed specifier.
//!
//! ## Width
//!
//! The width is a minimum. Shorter fields are padded, longer fields are kept
//! whole. The one exception is `%.Ns`, which cuts the string to `N`
//! characters (and still pads shorter strings to `N`):
//!
//! ```text
//! %6s   "abc"      -> "   abc"
//! %-6s  "abc"      -> "abc   "
//! %2s   "abcdef"   -> "abcdef"
//! %.2s  "abcdef"   -> "ab"
//! %05d  -42        -> "-0042"
//! %3%              -> "  %"
//! ```
//!
//! # Errors
//!
//! | Error | Cause |
//! |-------|-------|
//! | `MalformedSpecifier` | unknown conversion, width overflow, `.` on non-`%s` or without width |
//! | `UnterminatedSpecifier` | template ends inside a specifier, e.g. `"50%"` |
//! | `TypeMismatch` | argument kind not accepted by its conversion |
//! | `ArgumentExhausted` | more conversions than arguments |
//! | `SurplusArguments` | more arguments than conversions |
//! | `OutputTooLong` | result longer than the capacity |
//!
//! # Capacity
//!
//! Results are bounded by [`FormatOptions::capacity`](crate::FormatOptions),
//! [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY) characters unless configured.
//! A result of exactly the capacity succeeds; one character more fails.
//! Lengths are counted in characters, not bytes.

// This module contains only documentation; no implementation code
