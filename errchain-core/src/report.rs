//! Human and structured renderings of a chain

use crate::config::{ReportConfig, MAX_INDENT};
use crate::error::ChainResult;
use crate::record::ErrorRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multi-line rendering of a record and its causes
///
/// ```text
/// two wrap: one wrap: this is error
///
/// Caused by:
///     0: one wrap: this is error
///     1: this is error
/// ```
pub struct Report<'a> {
    record: &'a ErrorRecord,
    config: ReportConfig,
}

impl<'a> Report<'a> {
    pub fn new(record: &'a ErrorRecord) -> Self {
        Self {
            record,
            config: ReportConfig::default(),
        }
    }

    pub fn with_config(mut self, config: &ReportConfig) -> Self {
        self.config = config.clone();
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record)?;

        if !self.config.show_causes || self.record.is_root() {
            return Ok(());
        }

        let causes = self.record.depth() - 1;
        let listed = self.config.max_depth.map_or(causes, |max| max.min(causes));
        let pad = " ".repeat(self.config.indent.min(MAX_INDENT));

        write!(f, "\n\n{}", self.config.header)?;
        for (index, cause) in self.record.chain().skip(1).take(listed).enumerate() {
            write!(f, "\n{}{}: {}", pad, index, cause)?;
        }
        if listed < causes {
            write!(f, "\n{}... {} more", pad, causes - listed)?;
        }
        Ok(())
    }
}

/// Serializable view of a chain for structured logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    /// Rendered text of each record, newest first
    pub messages: Vec<String>,
    /// Payload type name of each record, if typed
    pub kinds: Vec<Option<String>>,
    pub depth: usize,
}

impl ChainSnapshot {
    pub fn capture(record: &ErrorRecord) -> Self {
        let messages: Vec<String> = record.chain().map(|r| r.text().to_string()).collect();
        let kinds = record
            .chain()
            .map(|r| r.kind_name().map(str::to_string))
            .collect();
        Self {
            depth: messages.len(),
            messages,
            kinds,
        }
    }

    pub fn to_json(&self) -> ChainResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
