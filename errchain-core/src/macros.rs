//! Convenience macros for building records
//!
//! These mirror `format!` so call sites read like the message they produce.
//! Only [`wrap!`](crate::wrap) establishes a cause link; interpolating an
//! error into [`record!`](crate::record) embeds its text and nothing else.

/// Create a root record with a formatted message
#[macro_export]
macro_rules! record {
    ($($arg:tt)*) => {
        $crate::ErrorRecord::new(format!($($arg)*))
    };
}

/// Wrap a cause under a formatted message
#[macro_export]
macro_rules! wrap {
    ($cause:expr, $($arg:tt)*) => {
        $crate::ErrorRecord::wrap(format!($($arg)*), $cause)
    };
}

/// Return early with a formatted record if a condition does not hold
#[macro_export]
macro_rules! ensure_record {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::record!($($arg)*).into());
        }
    };
}
