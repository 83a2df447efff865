//! Shared error types for the usage billing components

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid billing period: {input}")]
    InvalidBillingPeriod { input: String },

    #[error("Duplicate usage definition in catalog: {usage_name}")]
    DuplicateUsageDefinition { usage_name: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Tracing initialization failed: {message}")]
    TracingInitError { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
