//! Usage window coordination
//!
//! Resolves the optimized start date for a context, then reads raw usage and
//! tracking records for `[start, target]` from the injected collaborators.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{context_debug, context_warn, logging, CallContext, InvoiceItem, RawUsageRecord, TrackingRecordId, UsageCatalog};
use std::collections::HashSet;

use crate::{
    core::StartDateOptimizer,
    error::UsageOptimizerResult,
    traits::{AnomalyReporter, InvoiceConfig, TrackingStore, UsageSource},
};

/// Raw usage window computed for one invoice run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    raw_usage_start_date: NaiveDate,
    raw_usage: Vec<RawUsageRecord>,
    existing_tracking_ids: HashSet<TrackingRecordId>,
}

impl OptimizationResult {
    pub fn new(
        raw_usage_start_date: NaiveDate,
        raw_usage: Vec<RawUsageRecord>,
        existing_tracking_ids: HashSet<TrackingRecordId>,
    ) -> Self {
        Self {
            raw_usage_start_date,
            raw_usage,
            existing_tracking_ids,
        }
    }

    pub fn raw_usage_start_date(&self) -> NaiveDate {
        self.raw_usage_start_date
    }

    pub fn raw_usage(&self) -> &[RawUsageRecord] {
        &self.raw_usage
    }

    pub fn existing_tracking_ids(&self) -> &HashSet<TrackingRecordId> {
        &self.existing_tracking_ids
    }

    pub fn into_parts(self) -> (NaiveDate, Vec<RawUsageRecord>, HashSet<TrackingRecordId>) {
        (self.raw_usage_start_date, self.raw_usage, self.existing_tracking_ids)
    }
}

/// Coordinates the optimizer with the usage and tracking collaborators
pub struct UsageWindowCoordinator<U, T, C, R>
where
    U: UsageSource,
    T: TrackingStore,
    C: InvoiceConfig,
    R: AnomalyReporter,
{
    usage_source: U,
    tracking_store: T,
    config: C,
    optimizer: StartDateOptimizer<R>,
}

impl<U, T, C, R> UsageWindowCoordinator<U, T, C, R>
where
    U: UsageSource,
    T: TrackingStore,
    C: InvoiceConfig,
    R: AnomalyReporter,
{
    /// Create new coordinator with injected dependencies
    pub fn new(usage_source: U, tracking_store: T, config: C, reporter: R) -> Self {
        Self {
            usage_source,
            tracking_store,
            config,
            optimizer: StartDateOptimizer::new(reporter),
        }
    }

    /// Compute the raw usage window for an invoice run and fetch its data
    ///
    /// A negative configured look-back disables the optimization and reads
    /// the full history from `first_event_start_date`. Collaborator failures
    /// are returned unchanged.
    pub async fn get_usage_window(
        &self,
        first_event_start_date: NaiveDate,
        target_date: NaiveDate,
        existing_usage_items: &[InvoiceItem],
        usage_catalog: &UsageCatalog,
        context: &CallContext,
    ) -> UsageOptimizerResult<OptimizationResult> {
        let max_previous_periods = self.config.max_raw_usage_previous_period(context);

        let optimized_start_date = match u32::try_from(max_previous_periods) {
            Ok(periods) => self.optimizer.compute_optimized_start_date(
                first_event_start_date,
                target_date,
                existing_usage_items,
                usage_catalog,
                periods,
            )?,
            Err(_) => first_event_start_date,
        };

        if first_event_start_date > target_date {
            context_warn!(
                context,
                %first_event_start_date,
                %target_date,
                "First usage event is after the target date"
            );
        }

        context_debug!(
            context,
            max_previous_periods,
            %first_event_start_date,
            %optimized_start_date,
            %target_date,
            "Computed raw usage window"
        );

        let (raw_usage, trackings) = tokio::try_join!(
            self.usage_source.get_raw_usage(optimized_start_date, target_date, context),
            self.tracking_store
                .get_trackings_by_date_range(optimized_start_date, target_date, context),
        )
        .inspect_err(|e| logging::log_error(context, "Raw usage window fetch", e))?;

        let existing_tracking_ids: HashSet<TrackingRecordId> =
            trackings.iter().map(TrackingRecordId::from).collect();

        Ok(OptimizationResult::new(optimized_start_date, raw_usage, existing_tracking_ids))
    }
}
