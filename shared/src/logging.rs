//! Shared logging utilities for consistent tracing across billing components

use crate::errors::{SharedError, SharedResult};
use crate::types::CallContext;
use chrono::{DateTime, Utc};
use tracing::error;

/// Crates whose events are enabled by the default filter
const TRACED_CRATES: &[&str] = &["usage_optimizer", "shared"];

/// Build the filter directive for the given base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    TRACED_CRATES
        .iter()
        .map(|krate| format!("{krate}={base_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize a compact stdout tracing subscriber with an optional log level
///
/// Fails instead of panicking when the host already installed a global
/// subscriber.
pub fn init_tracing_with_level(log_level: Option<&str>) -> SharedResult<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let directive = filter_directive(log_level);
    let env_filter = EnvFilter::try_new(&directive).map_err(|e| SharedError::InvalidConfig {
        field: "log_level".to_string(),
        value: format!("{directive} ({e})"),
    })?;

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .map_err(|e| SharedError::TracingInitError { message: e.to_string() })
}

/// Initialize tracing at the default level
pub fn init_tracing() -> SharedResult<()> {
    init_tracing_with_level(None)
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for context-aware warning logging
#[macro_export]
macro_rules! context_warn {
    ($context:expr, $($arg:tt)*) => {
        tracing::warn!(
            account_record_id = $context.account_record_id,
            tenant_record_id = $context.tenant_record_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for context-aware debug logging
#[macro_export]
macro_rules! context_debug {
    ($context:expr, $($arg:tt)*) => {
        tracing::debug!(
            account_record_id = $context.account_record_id,
            tenant_record_id = $context.tenant_record_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &CallContext, operation: &str, error: &dyn std::fmt::Display) {
    error!(
        account_record_id = context.account_record_id,
        tenant_record_id = context.tenant_record_id,
        timestamp = format_timestamp(),
        error = %error,
        "{} failed: {}",
        operation,
        error
    );
}
