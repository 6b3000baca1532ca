//! Report rendering configuration with TOML support
//!
//! Every field has a default, so an empty document is a valid configuration.

use crate::error::{ChainError, ChainResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest accepted indent for listed causes
pub const MAX_INDENT: usize = 16;

/// Controls how [`Report`](crate::Report) renders a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Line introducing the list of causes
    pub header: String,

    /// Spaces before each listed cause
    pub indent: usize,

    /// List causes below the top record
    pub show_causes: bool,

    /// Cap on listed causes
    pub max_depth: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            header: "Caused by:".to_string(),
            indent: 4,
            show_causes: true,
            max_depth: None,
        }
    }
}

impl ReportConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> ChainResult<Self> {
        let config: ReportConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> ChainResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ChainError::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded report configuration");
        Ok(config)
    }

    pub fn validate(&self) -> ChainResult<()> {
        if self.header.trim().is_empty() {
            return Err(ChainError::config("header", "must not be empty"));
        }
        if self.indent > MAX_INDENT {
            return Err(ChainError::config(
                "indent",
                format!("must be at most {}, got {}", MAX_INDENT, self.indent),
            ));
        }
        Ok(())
    }
}
