//! Test helpers and builder patterns for usage optimizer tests
//!
//! This module provides convenient helper functions and builder patterns
//! to reduce test boilerplate and improve maintainability.
use chrono::NaiveDate;
use shared::{InvoiceItem, UsageCatalog};
use usage_optimizer::{
    MockAnomalyReporter, MockInvoiceConfig, MockTrackingStore, MockUsageSource, StartDateOptimizer, UsageWindowCoordinator,
};

/// Builder pattern for creating test coordinators with sensible defaults
pub struct CoordinatorBuilder {
    usage_source: MockUsageSource,
    tracking_store: MockTrackingStore,
    config: MockInvoiceConfig,
    reporter: MockAnomalyReporter,
}

impl CoordinatorBuilder {
    /// Create a new builder with empty collaborators and a look-back of one period
    pub fn new() -> Self {
        let mut usage_source = MockUsageSource::new();
        let mut tracking_store = MockTrackingStore::new();
        let mut config = MockInvoiceConfig::new();
        let mut reporter = MockAnomalyReporter::new();

        // Set up default successful behaviors to prevent panics
        usage_source
            .expect_get_raw_usage()
            .returning(|_, _, _| Ok(vec![]))
            .times(0..);

        tracking_store
            .expect_get_trackings_by_date_range()
            .returning(|_, _, _| Ok(vec![]))
            .times(0..);

        config
            .expect_max_raw_usage_previous_period()
            .return_const(1)
            .times(0..);

        reporter.expect_unexpected_item_kind().return_const(()).times(0..);

        Self {
            usage_source,
            tracking_store,
            config,
            reporter,
        }
    }

    /// Replace the usage source mock with a configured one
    pub fn with_usage_source<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockUsageSource),
    {
        let mut usage_source = MockUsageSource::new();
        setup(&mut usage_source);
        self.usage_source = usage_source;
        self
    }

    /// Replace the tracking store mock with a configured one
    pub fn with_tracking_store<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockTrackingStore),
    {
        let mut tracking_store = MockTrackingStore::new();
        setup(&mut tracking_store);
        self.tracking_store = tracking_store;
        self
    }

    /// Configure a fixed look-back bound
    pub fn with_max_previous_periods(mut self, max_previous_periods: i32) -> Self {
        let mut config = MockInvoiceConfig::new();
        config
            .expect_max_raw_usage_previous_period()
            .return_const(max_previous_periods)
            .times(1);
        self.config = config;
        self
    }

    /// Replace the anomaly reporter mock with a configured one
    pub fn with_reporter<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockAnomalyReporter),
    {
        let mut reporter = MockAnomalyReporter::new();
        setup(&mut reporter);
        self.reporter = reporter;
        self
    }

    pub fn build(
        self,
    ) -> UsageWindowCoordinator<MockUsageSource, MockTrackingStore, MockInvoiceConfig, MockAnomalyReporter> {
        UsageWindowCoordinator::new(self.usage_source, self.tracking_store, self.config, self.reporter)
    }
}

/// Common test helper functions
pub struct TestHelpers;

impl TestHelpers {
    /// Optimizer whose reporter must never be called
    pub fn quiet_optimizer() -> StartDateOptimizer<MockAnomalyReporter> {
        let mut reporter = MockAnomalyReporter::new();
        reporter.expect_unexpected_item_kind().times(0);
        StartDateOptimizer::new(reporter)
    }

    /// Optimizer tolerating any number of anomaly reports
    pub fn tolerant_optimizer() -> StartDateOptimizer<MockAnomalyReporter> {
        let mut reporter = MockAnomalyReporter::new();
        reporter.expect_unexpected_item_kind().return_const(()).times(0..);
        StartDateOptimizer::new(reporter)
    }

    /// Run the optimizer and unwrap its result
    pub fn start_date(
        first_event_start_date: NaiveDate,
        target_date: NaiveDate,
        items: &[InvoiceItem],
        catalog: &UsageCatalog,
        max_previous_periods: u32,
    ) -> NaiveDate {
        Self::tolerant_optimizer()
            .compute_optimized_start_date(first_event_start_date, target_date, items, catalog, max_previous_periods)
            .expect("optimization should succeed")
    }
}
