//! Usage optimizer error types

use chrono::NaiveDate;
use shared::{BillingPeriod, InvoiceItemId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsageOptimizerError {
    #[error("Missing usage definition '{usage_name}' referenced by invoice item {item_id}")]
    MissingUsageDefinition { usage_name: String, item_id: InvoiceItemId },

    #[error("Usage invoice item {item_id} has no usage name")]
    MissingUsageName { item_id: InvoiceItemId },

    #[error("Date out of range: {date} moved by {periods} x {billing_period}")]
    DateOutOfRange {
        date: NaiveDate,
        billing_period: BillingPeriod,
        periods: u32,
    },

    #[error("Usage source read failed: {message}")]
    UsageSourceError { message: String },

    #[error("Tracking store read failed: {message}")]
    TrackingStoreError { message: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },
}

impl UsageOptimizerError {
    pub fn usage_source(message: impl Into<String>) -> Self {
        Self::UsageSourceError { message: message.into() }
    }

    pub fn tracking_store(message: impl Into<String>) -> Self {
        Self::TrackingStoreError { message: message.into() }
    }

    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }
}

pub type UsageOptimizerResult<T> = Result<T, UsageOptimizerError>;
