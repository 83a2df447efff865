//! Raw usage window optimizer for usage-based invoicing
//!
//! Computes how far back raw usage data must be re-read when an invoice is
//! generated, given the usage charges already billed, and fetches the usage
//! facts and tracking records for that window from injected collaborators.

pub mod coordinator;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use coordinator::{OptimizationResult, UsageWindowCoordinator};
pub use core::StartDateOptimizer;
pub use error::{UsageOptimizerError, UsageOptimizerResult};
pub use traits::{
    AnomalyReporter, InvoiceConfig, MockAnomalyReporter, MockInvoiceConfig, MockTrackingStore, MockUsageSource,
    TrackingStore, UsageSource,
};
