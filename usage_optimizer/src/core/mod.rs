//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod optimizer;

pub use optimizer::StartDateOptimizer;
