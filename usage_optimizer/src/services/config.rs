//! Invoice configuration implementation
//!
//! ## Configuration Sources
//! Settings are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Keys
//! - `INVOICE_MAX_RAW_USAGE_PREVIOUS_PERIOD`: whole billing periods of slack
//!   kept before the latest billed boundary (default 2). A negative value
//!   disables the optimization and always reads the full usage history.
//!
//! Per-tenant overrides are registered programmatically.

use shared::CallContext;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{UsageOptimizerError, UsageOptimizerResult};
use crate::traits::InvoiceConfig;

/// Invoice settings with optional per-tenant overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSettings {
    max_raw_usage_previous_period: i32,
    tenant_overrides: HashMap<u64, i32>,
}

impl InvoiceSettings {
    pub const MAX_RAW_USAGE_PREVIOUS_PERIOD_KEY: &'static str = "INVOICE_MAX_RAW_USAGE_PREVIOUS_PERIOD";
    pub const DEFAULT_MAX_RAW_USAGE_PREVIOUS_PERIOD: i32 = 2;

    pub fn new(max_raw_usage_previous_period: i32) -> Self {
        Self {
            max_raw_usage_previous_period,
            tenant_overrides: HashMap::new(),
        }
    }

    /// Override the look-back bound for one tenant
    pub fn with_tenant_override(mut self, tenant_record_id: u64, max_raw_usage_previous_period: i32) -> Self {
        self.tenant_overrides
            .insert(tenant_record_id, max_raw_usage_previous_period);
        self
    }

    /// Load settings from the process environment, reading `.env` first
    pub fn from_env() -> UsageOptimizerResult<Self> {
        // Silently ignored when no .env file exists
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings after applying a specific env file
    pub fn from_env_file(path: impl AsRef<Path>) -> UsageOptimizerResult<Self> {
        let path = path.as_ref();
        dotenv::from_path(path).map_err(|e| UsageOptimizerError::config(format!("{}: {e}", path.display())))?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> UsageOptimizerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_raw_usage_previous_period = match lookup(Self::MAX_RAW_USAGE_PREVIOUS_PERIOD_KEY) {
            Some(raw) => raw.trim().parse::<i32>().map_err(|_| {
                UsageOptimizerError::config(format!(
                    "{} must be an integer, got '{raw}'",
                    Self::MAX_RAW_USAGE_PREVIOUS_PERIOD_KEY
                ))
            })?,
            None => Self::DEFAULT_MAX_RAW_USAGE_PREVIOUS_PERIOD,
        };
        Ok(Self::new(max_raw_usage_previous_period))
    }
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RAW_USAGE_PREVIOUS_PERIOD)
    }
}

impl InvoiceConfig for InvoiceSettings {
    fn max_raw_usage_previous_period(&self, context: &CallContext) -> i32 {
        self.tenant_overrides
            .get(&context.tenant_record_id)
            .copied()
            .unwrap_or(self.max_raw_usage_previous_period)
    }
}
