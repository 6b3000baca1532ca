//! Immutable error chains with identity and type-directed lookup
//!
//! An [`ErrorRecord`] is a message plus an optional structural cause. Wrapping
//! builds a singly-linked chain from the newest record to the root, and the
//! [`chain`] module answers two questions about it:
//!
//! - does the chain contain *this exact* record ([`chain::is`])
//! - does the chain contain a record of *this kind* ([`chain::as_kind`])
//!
//! Membership is structural. Interpolating an error's text into a new message
//! yields a record with no cause, and neither query will find the embedded
//! error through it.

pub mod error;
pub mod record;
pub mod chain;
pub mod context;
pub mod macros;
pub mod report;
pub mod config;
pub mod observability;

pub use error::{ChainError, ChainResult};
pub use record::ErrorRecord;
pub use chain::{as_kind, find_kind, find_source, is, std_chain, Chain, Sources};
pub use context::{OptionContext, ResultLogging, WrapContext};
pub use report::{ChainSnapshot, Report};
pub use config::ReportConfig;
