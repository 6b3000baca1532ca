//! Domain-specific error kinds and the lookups that fail with them

use errchain_core::ErrorRecord;
use thiserror::Error;
use tracing::debug;

/// A failure with nothing more to say than its message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{err}")]
pub struct UnknownError {
    pub err: String,
}

/// A missing resource, with the reason it went missing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{err}: {cause}")]
pub struct NotFoundError {
    pub err: String,
    pub cause: String,
}

impl From<UnknownError> for ErrorRecord {
    fn from(err: UnknownError) -> Self {
        ErrorRecord::from_kind(err)
    }
}

impl From<NotFoundError> for ErrorRecord {
    fn from(err: NotFoundError) -> Self {
        ErrorRecord::from_kind(err)
    }
}

/// Lookup that fails with an [`UnknownError`]
pub fn find_something() -> Result<(), ErrorRecord> {
    debug!("looking up something");
    Err(UnknownError {
        err: "unknown error".to_string(),
    }
    .into())
}

/// Lookup that fails with a [`NotFoundError`]
pub fn find_hoge() -> Result<(), ErrorRecord> {
    debug!("looking up hoge");
    Err(NotFoundError {
        err: "not found error".to_string(),
        cause: "i dont know".to_string(),
    }
    .into())
}
