//! In-memory collaborator implementations
//!
//! Account-scoped stores for hosts that preload usage and tracking data, keyed
//! by `account_record_id`. Reads return records dated inside the inclusive
//! `[start, end]` window.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{CallContext, InvoiceTrackingRecord, RawUsageRecord};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::UsageOptimizerResult;
use crate::traits::{TrackingStore, UsageSource};

/// Raw usage facts held in memory per account
#[derive(Debug, Default)]
pub struct InMemoryUsageSource {
    records: RwLock<HashMap<u64, Vec<RawUsageRecord>>>,
}

impl InMemoryUsageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, account_record_id: u64, record: RawUsageRecord) {
        self.records
            .write()
            .await
            .entry(account_record_id)
            .or_default()
            .push(record);
    }
}

#[async_trait]
impl UsageSource for InMemoryUsageSource {
    async fn get_raw_usage(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        context: &CallContext,
    ) -> UsageOptimizerResult<Vec<RawUsageRecord>> {
        let records = self.records.read().await;
        let in_window: Vec<RawUsageRecord> = records
            .get(&context.account_record_id)
            .map(|account_records| {
                account_records
                    .iter()
                    .filter(|record| (start_date..=end_date).contains(&record.record_day()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(in_window)
    }
}

/// Tracking records held in memory per account
#[derive(Debug, Default)]
pub struct InMemoryTrackingStore {
    trackings: RwLock<HashMap<u64, Vec<InvoiceTrackingRecord>>>,
}

impl InMemoryTrackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, account_record_id: u64, tracking: InvoiceTrackingRecord) {
        self.trackings
            .write()
            .await
            .entry(account_record_id)
            .or_default()
            .push(tracking);
    }
}

#[async_trait]
impl TrackingStore for InMemoryTrackingStore {
    async fn get_trackings_by_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        context: &CallContext,
    ) -> UsageOptimizerResult<Vec<InvoiceTrackingRecord>> {
        let trackings = self.trackings.read().await;
        Ok(trackings
            .get(&context.account_record_id)
            .into_iter()
            .flatten()
            .filter(|tracking| (start_date..=end_date).contains(&tracking.record_date))
            .cloned()
            .collect())
    }
}
