//! Context extension traits for `Result` and `Option`
//!
//! These turn the [`ErrorRecord`] constructors into the usual method-chaining
//! style, so a call site reads `load().wrap_err("loading profile")?`.

use crate::record::ErrorRecord;

/// Trait for wrapping the error of a `Result` in a new record
pub trait WrapContext<T> {
    /// Wrap the error under a static message
    fn wrap_err(self, msg: impl Into<String>) -> Result<T, ErrorRecord>;

    /// Wrap the error under a lazily built message
    fn with_wrap<F, M>(self, f: F) -> Result<T, ErrorRecord>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> WrapContext<T> for Result<T, E>
where
    E: Into<ErrorRecord>,
{
    fn wrap_err(self, msg: impl Into<String>) -> Result<T, ErrorRecord> {
        self.map_err(|e| ErrorRecord::wrap(msg, e.into()))
    }

    fn with_wrap<F, M>(self, f: F) -> Result<T, ErrorRecord>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|e| ErrorRecord::wrap(f(), e.into()))
    }
}

/// Extension trait for Options to convert to records
pub trait OptionContext<T> {
    /// Convert None to a root record
    fn or_record(self, msg: impl Into<String>) -> Result<T, ErrorRecord>;
}

impl<T> OptionContext<T> for Option<T> {
    fn or_record(self, msg: impl Into<String>) -> Result<T, ErrorRecord> {
        self.ok_or_else(|| ErrorRecord::new(msg))
    }
}

/// Logging helpers for results that carry a record
pub trait ResultLogging<T> {
    /// Log error with context and return it
    fn log_error(self, context: &str) -> Self;

    /// Log error as a warning and return it
    fn log_if_error(self, context: &str) -> Self;
}

impl<T> ResultLogging<T> for Result<T, ErrorRecord> {
    fn log_error(self, context: &str) -> Self {
        if let Err(ref e) = self {
            tracing::error!(
                depth = e.depth(),
                root_cause = %e.root_cause(),
                "{}: {}",
                context,
                e
            );
        }
        self
    }

    fn log_if_error(self, context: &str) -> Self {
        if let Err(ref e) = self {
            tracing::warn!(
                depth = e.depth(),
                root_cause = %e.root_cause(),
                "{}: {}",
                context,
                e
            );
        }
        self
    }
}
