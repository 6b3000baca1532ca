//! Demonstration suite for the error-chain primitives
//!
//! The interesting material is in `tests/`: each test documents how
//! construct, wrap, identity lookup and kind lookup behave. This crate only
//! supplies the domain kinds those tests extract.

pub mod scenarios;

pub use errchain_core::{ErrorRecord, Report, WrapContext};
pub use scenarios::{find_hoge, find_something, NotFoundError, UnknownError};
