/// Builds a `Vec<Argument>` from a list of expressions.
///
/// Every expression goes through `Argument::from`, so its Rust type picks the
/// argument kind.
///
/// ```rust
/// use sformat::{args, Argument};
///
/// let list = args![1, "two", '3'];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list[1], Argument::from("two"));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Argument>::new()
    };

    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::Argument::from($arg)),+]
    };
}

/// Formats a template with inline arguments, like `sprintf`.
///
/// Expands to [`format`](crate::format) with the default capacity and returns
/// its `Result<String>`.
///
/// ```rust
/// use sformat::{sformat, TimeUnit, TimeValue};
///
/// let msg = sformat!("req %d granted at %t", 7, TimeValue::new(40, TimeUnit::Ns)).unwrap();
/// assert_eq!(msg, "req 7 granted at 40ns");
///
/// assert_eq!(sformat!("100%%").unwrap(), "100%");
/// ```
#[macro_export]
macro_rules! sformat {
    ($template:expr) => {
        $crate::format($template, &[])
    };

    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format($template, &[$($crate::Argument::from($arg)),+])
    };
}
