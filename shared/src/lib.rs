//! Shared types for usage-based invoicing
//!
//! Contains the billing value types exchanged between the invoice pipeline
//! and the raw usage optimizer: billing periods, the usage catalog, invoice
//! items, raw usage and tracking records, plus logging setup.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
