//! Typed argument values.
//!
//! This module provides the [`Argument`] enum, the closed set of value types a
//! template conversion can render, together with the simulation-domain types
//! it carries:
//!
//! - [`BitVector`]: a fixed-width unsigned vector of up to 64 bits
//! - [`TimeValue`]: a signed magnitude paired with a [`TimeUnit`]
//!
//! ## Creating Arguments
//!
//! ```rust
//! use sformat::{Argument, ArgumentKind, BitVector, TimeUnit, TimeValue};
//!
//! assert_eq!(Argument::from(-3).kind(), ArgumentKind::Signed);
//! assert_eq!(Argument::from(7u8).kind(), ArgumentKind::Unsigned);
//! assert_eq!(Argument::from("ready").kind(), ArgumentKind::Str);
//! assert_eq!(Argument::from('x').kind(), ArgumentKind::Char);
//! assert_eq!(Argument::from(true).kind(), ArgumentKind::Bool);
//!
//! let bus = BitVector::from_bit_str("1010_0001").unwrap();
//! assert_eq!(Argument::from(bus).kind(), ArgumentKind::Bits);
//!
//! let period = TimeValue::new(10, TimeUnit::Ns);
//! assert_eq!(Argument::from(period).kind(), ArgumentKind::Time);
//! ```
//!
//! Signed and unsigned native integers map to different kinds on purpose:
//! `%d` only takes signed values and `%u`/`%x`/`%b`/`%o` only take unsigned
//! ones, so the Rust type of an argument decides which conversions accept it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed value supplied to a formatting call.
///
/// Arguments are read-only to the engine; the caller keeps ownership.
///
/// # Examples
///
/// ```rust
/// use sformat::Argument;
///
/// let arg = Argument::from(42);
/// assert_eq!(arg.as_i64(), Some(42));
/// assert_eq!(arg.as_str(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
    Signed(i64),
    Unsigned(u64),
    Bits(BitVector),
    Str(String),
    Char(char),
    Bool(bool),
    Time(TimeValue),
}

/// The type tag of an [`Argument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentKind {
    Signed,
    Unsigned,
    Bits,
    Str,
    Char,
    Bool,
    Time,
}

impl ArgumentKind {
    /// Returns a human-readable name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ArgumentKind::Signed => "signed integer",
            ArgumentKind::Unsigned => "unsigned integer",
            ArgumentKind::Bits => "bit vector",
            ArgumentKind::Str => "string",
            ArgumentKind::Char => "character",
            ArgumentKind::Bool => "boolean",
            ArgumentKind::Time => "time value",
        }
    }
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Argument {
    /// Returns the type tag of this argument.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ArgumentKind {
        match self {
            Argument::Signed(_) => ArgumentKind::Signed,
            Argument::Unsigned(_) => ArgumentKind::Unsigned,
            Argument::Bits(_) => ArgumentKind::Bits,
            Argument::Str(_) => ArgumentKind::Str,
            Argument::Char(_) => ArgumentKind::Char,
            Argument::Bool(_) => ArgumentKind::Bool,
            Argument::Time(_) => ArgumentKind::Time,
        }
    }

    /// If the argument is a signed integer, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Argument::Signed(v) => Some(*v),
            _ => None,
        }
    }

    /// If the argument is an unsigned integer or a bit vector, returns its
    /// magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sformat::{Argument, BitVector};
    ///
    /// assert_eq!(Argument::from(9u32).as_u64(), Some(9));
    /// let bits = BitVector::from_bit_str("0110").unwrap();
    /// assert_eq!(Argument::from(bits).as_u64(), Some(6));
    /// assert_eq!(Argument::from(9).as_u64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Argument::Unsigned(v) => Some(*v),
            Argument::Bits(bits) => Some(bits.value()),
            _ => None,
        }
    }

    /// If the argument is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Argument::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the argument is a time value, returns it.
    #[inline]
    #[must_use]
    pub fn as_time(&self) -> Option<TimeValue> {
        match self {
            Argument::Time(t) => Some(*t),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Argument {
                fn from(value: $source) -> Self {
                    Argument::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Signed, i64: i8, i16, i32, i64, isize);
impl_from_int!(Unsigned, u64: u8, u16, u32, u64, usize);

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Str(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Str(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Self {
        Argument::Str(value.clone())
    }
}

impl From<char> for Argument {
    fn from(value: char) -> Self {
        Argument::Char(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl From<BitVector> for Argument {
    fn from(value: BitVector) -> Self {
        Argument::Bits(value)
    }
}

impl From<TimeValue> for Argument {
    fn from(value: TimeValue) -> Self {
        Argument::Time(value)
    }
}

impl From<chrono::TimeDelta> for Argument {
    fn from(value: chrono::TimeDelta) -> Self {
        Argument::Time(TimeValue::from(value))
    }
}

impl From<std::time::Duration> for Argument {
    /// Uses nanoseconds when the count fits an `i64`, otherwise the finest of
    /// us, ms or sec that fits (truncating). Saturates at `i64::MAX` seconds.
    fn from(value: std::time::Duration) -> Self {
        let time = TimeValue::try_from(value).unwrap_or_else(|_| {
            [
                (value.as_micros(), TimeUnit::Us),
                (value.as_millis(), TimeUnit::Ms),
                (u128::from(value.as_secs()), TimeUnit::Sec),
            ]
            .into_iter()
            .find_map(|(count, unit)| {
                i64::try_from(count)
                    .ok()
                    .map(|magnitude| TimeValue::new(magnitude, unit))
            })
            .unwrap_or(TimeValue::new(i64::MAX, TimeUnit::Sec))
        });
        Argument::Time(time)
    }
}

/// A fixed-width unsigned bit vector of 1 to 64 bits.
///
/// The value is always masked to the width. Rendered with `%b`, `%o` or `%x`
/// a bit vector keeps its leading zeros, so an 8-bit vector holding `5`
/// renders as `00000101` under `%b` and `05` under `%x`.
///
/// Serialized as a string of binary digits, most significant bit first.
///
/// # Examples
///
/// ```rust
/// use sformat::BitVector;
///
/// let bits = BitVector::new(0x1ff, 8).unwrap();
/// assert_eq!(bits.value(), 0xff);
/// assert_eq!(bits.width(), 8);
///
/// assert!(BitVector::new(1, 0).is_none());
/// assert!(BitVector::new(1, 65).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitVector {
    value: u64,
    width: u32,
}

impl BitVector {
    pub const MAX_WIDTH: u32 = u64::BITS;

    /// Creates a vector of `width` bits holding the low bits of `value`.
    ///
    /// Returns `None` when `width` is zero or wider than 64 bits.
    #[must_use]
    pub fn new(value: u64, width: u32) -> Option<Self> {
        if width == 0 || width > Self::MAX_WIDTH {
            return None;
        }
        let mask = if width == Self::MAX_WIDTH {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        Some(BitVector {
            value: value & mask,
            width,
        })
    }

    /// Parses a bit-string literal such as `"1010_0001"`.
    ///
    /// Underscores are separators and ignored. Every other character must be
    /// `0` or `1`, and the literal must hold 1 to 64 bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sformat::BitVector;
    ///
    /// let bits = BitVector::from_bit_str("1010_0001").unwrap();
    /// assert_eq!(bits.value(), 0xa1);
    /// assert_eq!(bits.width(), 8);
    ///
    /// assert!(BitVector::from_bit_str("10x1").is_none());
    /// assert!(BitVector::from_bit_str("__").is_none());
    /// ```
    #[must_use]
    pub fn from_bit_str(s: &str) -> Option<Self> {
        let mut value = 0u64;
        let mut width = 0u32;
        for ch in s.chars() {
            let bit = match ch {
                '0' => 0,
                '1' => 1,
                '_' => continue,
                _ => return None,
            };
            if width == Self::MAX_WIDTH {
                return None;
            }
            value = (value << 1) | bit;
            width += 1;
        }
        Self::new(value, width)
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of digits needed to show every bit of the vector in a
    /// power-of-two radix with `bits_per_digit` bits per digit.
    #[inline]
    pub(crate) const fn digit_count(&self, bits_per_digit: u32) -> usize {
        self.width.div_ceil(bits_per_digit) as usize
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width as usize)
    }
}

impl TryFrom<String> for BitVector {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        BitVector::from_bit_str(&value)
            .ok_or_else(|| format!("invalid bit string literal: {value:?}"))
    }
}

impl From<BitVector> for String {
    fn from(value: BitVector) -> Self {
        value.to_string()
    }
}

/// Simulation time units, finest first.
///
/// The suffixes match the physical time units of a simulation kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Fs,
    Ps,
    Ns,
    Us,
    Ms,
    Sec,
    Min,
    Hr,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 8] = [
        TimeUnit::Fs,
        TimeUnit::Ps,
        TimeUnit::Ns,
        TimeUnit::Us,
        TimeUnit::Ms,
        TimeUnit::Sec,
        TimeUnit::Min,
        TimeUnit::Hr,
    ];

    /// Returns the suffix appended to rendered magnitudes.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Fs => "fs",
            TimeUnit::Ps => "ps",
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
            TimeUnit::Sec => "sec",
            TimeUnit::Min => "min",
            TimeUnit::Hr => "hr",
        }
    }

    /// Looks a unit up by its suffix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sformat::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::from_suffix("us"), Some(TimeUnit::Us));
    /// assert_eq!(TimeUnit::from_suffix("s"), None);
    /// ```
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.suffix() == suffix)
    }

    /// Length of one unit in femtoseconds.
    #[must_use]
    pub const fn femtoseconds(&self) -> i128 {
        match self {
            TimeUnit::Fs => 1,
            TimeUnit::Ps => 1_000,
            TimeUnit::Ns => 1_000_000,
            TimeUnit::Us => 1_000_000_000,
            TimeUnit::Ms => 1_000_000_000_000,
            TimeUnit::Sec => 1_000_000_000_000_000,
            TimeUnit::Min => 60_000_000_000_000_000,
            TimeUnit::Hr => 3_600_000_000_000_000_000,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A simulation time: a signed magnitude in a given unit.
///
/// Renders as `<magnitude><unit>` with no separating space.
///
/// # Examples
///
/// ```rust
/// use sformat::{TimeUnit, TimeValue};
///
/// let t = TimeValue::new(1500, TimeUnit::Ps);
/// assert_eq!(t.to_string(), "1500ps");
/// assert_eq!(t.to_unit(TimeUnit::Fs), Some(TimeValue::new(1_500_000, TimeUnit::Fs)));
/// assert_eq!(t.to_unit(TimeUnit::Ns), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeValue {
    pub magnitude: i64,
    pub unit: TimeUnit,
}

impl TimeValue {
    #[must_use]
    pub const fn new(magnitude: i64, unit: TimeUnit) -> Self {
        TimeValue { magnitude, unit }
    }

    /// The value expressed in femtoseconds.
    #[must_use]
    pub const fn as_femtoseconds(&self) -> i128 {
        self.magnitude as i128 * self.unit.femtoseconds()
    }

    /// Converts to `unit` if the result is exact and fits in an `i64`.
    #[must_use]
    pub fn to_unit(&self, unit: TimeUnit) -> Option<TimeValue> {
        let fs = self.as_femtoseconds();
        let per_unit = unit.femtoseconds();
        if fs % per_unit != 0 {
            return None;
        }
        let magnitude = i64::try_from(fs / per_unit).ok()?;
        Some(TimeValue::new(magnitude, unit))
    }

    /// Rescales to the coarsest unit that still represents the value exactly.
    ///
    /// Zero is kept in its own unit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sformat::{TimeUnit, TimeValue};
    ///
    /// let t = TimeValue::new(3_000_000, TimeUnit::Ps);
    /// assert_eq!(t.normalized(), TimeValue::new(3, TimeUnit::Us));
    /// ```
    #[must_use]
    pub fn normalized(&self) -> TimeValue {
        if self.magnitude == 0 {
            return *self;
        }
        TimeUnit::ALL
            .into_iter()
            .rev()
            .filter(|unit| *unit >= self.unit)
            .find_map(|unit| self.to_unit(unit))
            .unwrap_or(*self)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

impl TryFrom<std::time::Duration> for TimeValue {
    type Error = std::num::TryFromIntError;

    /// Converts to nanoseconds, failing if the count does not fit an `i64`.
    fn try_from(value: std::time::Duration) -> std::result::Result<Self, Self::Error> {
        let nanos = i64::try_from(value.as_nanos())?;
        Ok(TimeValue::new(nanos, TimeUnit::Ns))
    }
}

impl From<chrono::TimeDelta> for TimeValue {
    /// Uses the finest of ns, us or ms whose count fits an `i64`.
    fn from(value: chrono::TimeDelta) -> Self {
        if let Some(nanos) = value.num_nanoseconds() {
            TimeValue::new(nanos, TimeUnit::Ns)
        } else if let Some(micros) = value.num_microseconds() {
            TimeValue::new(micros, TimeUnit::Us)
        } else {
            TimeValue::new(value.num_milliseconds(), TimeUnit::Ms)
        }
    }
}
