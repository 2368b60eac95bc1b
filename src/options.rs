//! Configuration options for formatting calls.
//!
//! The only tunable is the output capacity: the maximum number of characters
//! a single formatted message may hold. Results that would grow past it fail
//! with [`Error::OutputTooLong`](crate::Error::OutputTooLong) instead of being
//! truncated.
//!
//! ## Examples
//!
//! ```rust
//! use sformat::{format_with_options, Argument, FormatOptions};
//!
//! let options = FormatOptions::new().with_capacity(4);
//! assert_eq!(format_with_options("%d", &[Argument::from(1234)], options.clone()).unwrap(), "1234");
//! assert!(format_with_options("%d", &[Argument::from(12345)], options).is_err());
//! ```

use serde::{Deserialize, Serialize};

/// Capacity used by [`format`](crate::format) and the `sformat!` macro.
///
/// Large enough for a report line of a simulation transcript.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Configuration options for a formatting call.
///
/// # Examples
///
/// ```rust
/// use sformat::{FormatOptions, DEFAULT_CAPACITY};
///
/// let options = FormatOptions::new();
/// assert_eq!(options.capacity, DEFAULT_CAPACITY);
///
/// let options = FormatOptions::new().with_capacity(80);
/// assert_eq!(options.capacity, 80);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Maximum length of the result, in characters.
    pub capacity: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl FormatOptions {
    /// Creates default options (capacity of [`DEFAULT_CAPACITY`] characters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum result length in characters.
    ///
    /// A capacity of zero only admits templates that render to the empty string.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
