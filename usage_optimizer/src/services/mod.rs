//! Service implementations
//!
//! This module contains real implementations of the collaborator traits that
//! a host can use directly: configuration, in-memory stores and the tracing
//! anomaly reporter.

pub mod config;
pub mod memory;
pub mod reporter;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use config::InvoiceSettings;
pub use memory::{InMemoryTrackingStore, InMemoryUsageSource};
pub use reporter::TracingAnomalyReporter;
