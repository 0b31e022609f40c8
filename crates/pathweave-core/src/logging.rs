//! Structured logging setup and search statistics

use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Work counters collected by a search engine instance.
///
/// Counters accumulate across repeated queries against the same instance,
/// just like the distance and predecessor maps do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes removed from the frontier
    pub pops: u64,
    /// Successful relaxations (distance improved or tie recorded)
    pub relaxations: u64,
    /// Neighbor enumerations performed
    pub expansions: u64,
}

impl SearchStats {
    pub fn record_pop(&mut self) {
        self.pops += 1;
    }

    pub fn record_relaxation(&mut self) {
        self.relaxations += 1;
    }

    pub fn record_expansion(&mut self) {
        self.expansions += 1;
    }
}

/// Log search statistics at debug level.
///
/// Usage:
/// ```rust,ignore
/// log_search_stats!(engine.stats(), "dijkstra");
/// ```
#[macro_export]
macro_rules! log_search_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            pops = $stats.pops,
            relaxations = $stats.relaxations,
            expansions = $stats.expansions,
            "search_stats"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", nodes = result.distance.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "debug",
        (false, None) => "warn",
        (_, Some(level)) => level,
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // PATHWEAVE_LOG takes precedence over RUST_LOG and the CLI level
    let filter = EnvFilter::try_from_env("PATHWEAVE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("pathweave={level},pathweave_core={level}")
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_stats_counters() {
        let mut stats = SearchStats::default();
        stats.record_pop();
        stats.record_pop();
        stats.record_relaxation();
        stats.record_expansion();
        assert_eq!(stats.pops, 2);
        assert_eq!(stats.relaxations, 1);
        assert_eq!(stats.expansions, 1);
    }
}
