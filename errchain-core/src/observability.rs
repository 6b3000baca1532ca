//! Tracing setup and spans for chain work

use tracing::Span;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "errchain_core=info,errchain=info";

/// Initialize tracing with environment-based configuration
///
/// Returns whether this call installed the subscriber. Later calls leave the
/// first subscriber in place and return `false`.
pub fn init_tracing() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match Registry::default().with(env_filter).with(fmt_layer).try_init() {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("tracing already initialized: {}", e);
            false
        }
    }
}

/// Create a span for an operation over a chain
#[inline]
pub fn chain_span(operation: &str, depth: usize) -> Span {
    tracing::debug_span!(
        "chain",
        operation = %operation,
        depth = depth,
        found = tracing::field::Empty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorRecord;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_chain_span_fields() {
        let record = ErrorRecord::wrap("outer", ErrorRecord::new("inner"));
        {
            let span = chain_span("lookup", record.depth());
            let _guard = span.enter();
            span.record("found", true);
            tracing::debug!("walking chain");
        }
        assert!(logs_contain("chain"));
        assert!(logs_contain("operation=lookup"));
        assert!(logs_contain("depth=2"));
    }

    #[traced_test]
    #[test]
    fn test_queries_emit_trace_events() {
        let root = ErrorRecord::new("root");
        let top = ErrorRecord::wrap("top", root.clone());
        assert!(top.is(&root));
        assert!(logs_contain("identity lookup"));
        assert!(logs_contain("walked=2"));
    }
}
