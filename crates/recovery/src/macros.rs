//! Raise helpers

/// Raise a formatted signal and return it from the enclosing function
///
/// ```ignore
/// if divisor.is_zero() {
///     raise!(cx, ErrorKind::DivisionByZero, "Division by zero in {}", "zdiv");
/// }
/// ```
#[macro_export]
macro_rules! raise {
    ($cx:expr, $kind:expr, $($arg:tt)+) => {
        return ::core::result::Result::Err($cx.raise($kind, ::std::format!($($arg)+)))
    };
}

/// Raise unless `cond` holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $cx:expr, $kind:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::raise!($cx, $kind, $($arg)+);
        }
    };
}
