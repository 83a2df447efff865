//! Trait definitions with mockall annotations for testing
//!
//! The optimizer only computes; everything it reads or reports goes through
//! these collaborator traits, injected by the invoice pipeline.

use chrono::NaiveDate;
use shared::{CallContext, InvoiceItem, InvoiceTrackingRecord, RawUsageRecord};

use crate::error::UsageOptimizerResult;

/// Source of raw metered usage facts
#[mockall::automock]
#[async_trait::async_trait]
pub trait UsageSource: Send + Sync {
    /// Return every raw usage fact of the context's account whose date falls
    /// in the inclusive window `[start_date, end_date]`. Ordering is not
    /// guaranteed.
    async fn get_raw_usage(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        context: &CallContext,
    ) -> UsageOptimizerResult<Vec<RawUsageRecord>>;
}

/// Store of tracking records marking usage facts as already invoiced
#[mockall::automock]
#[async_trait::async_trait]
pub trait TrackingStore: Send + Sync {
    /// Return every tracking record of the context's account with a record
    /// date in the inclusive window `[start_date, end_date]`.
    async fn get_trackings_by_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        context: &CallContext,
    ) -> UsageOptimizerResult<Vec<InvoiceTrackingRecord>>;
}

/// Invoice configuration resolved per call context
#[mockall::automock]
pub trait InvoiceConfig: Send + Sync {
    /// Maximum number of whole billing periods to look back past the latest
    /// billed boundary. Negative disables the optimization.
    fn max_raw_usage_previous_period(&self, context: &CallContext) -> i32;
}

/// Receiver of data-quality anomalies found while scanning invoice items
#[mockall::automock]
pub trait AnomalyReporter: Send + Sync {
    /// An item that is not a usage charge showed up among the usage items
    fn unexpected_item_kind(&self, item: &InvoiceItem);
}
