//! Test fixtures and data for usage optimizer tests
//!
//! This module provides consistent test data and fixtures used across all test suites.

use chrono::{NaiveDate, TimeZone, Utc};
use shared::{
    BillingPeriod, CallContext, InvoiceId, InvoiceItem, InvoiceItemType, InvoiceTrackingRecord, RawUsageRecord,
    SubscriptionId, UsageCatalog, UsageDefinition,
};
use uuid::Uuid;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Standard subscription and invoice IDs using proper UUID format
    pub const SUBSCRIPTION_1: &'static str = "550e8400-e29b-41d4-a716-446655440001";
    pub const INVOICE_1: &'static str = "550e8400-e29b-41d4-a716-446655440101";

    /// Standard context values
    pub const ACCOUNT_RECORD_ID: u64 = 11;
    pub const TENANT_RECORD_ID: u64 = 1;

    /// Usage type names
    pub const MONTHLY_USAGE: &'static str = "api-calls";
    pub const QUARTERLY_USAGE: &'static str = "support-hours";
    pub const ANNUAL_USAGE: &'static str = "archive-tb";

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn context() -> CallContext {
        CallContext::new(Self::ACCOUNT_RECORD_ID, Self::TENANT_RECORD_ID)
    }

    pub fn subscription_id() -> SubscriptionId {
        SubscriptionId::from_string(Self::SUBSCRIPTION_1).unwrap()
    }

    pub fn invoice_id() -> InvoiceId {
        InvoiceId::from_string(Self::INVOICE_1).unwrap()
    }

    /// Catalog with one monthly usage type
    pub fn monthly_catalog() -> UsageCatalog {
        UsageCatalog::from_definitions(vec![UsageDefinition::new(Self::MONTHLY_USAGE, BillingPeriod::Monthly)])
            .unwrap()
    }

    /// Catalog with a monthly and a quarterly usage type
    pub fn monthly_and_quarterly_catalog() -> UsageCatalog {
        UsageCatalog::from_definitions(vec![
            UsageDefinition::new(Self::MONTHLY_USAGE, BillingPeriod::Monthly),
            UsageDefinition::new(Self::QUARTERLY_USAGE, BillingPeriod::Quarterly),
        ])
        .unwrap()
    }

    /// Catalog with monthly, quarterly and annual usage types
    pub fn full_catalog() -> UsageCatalog {
        UsageCatalog::from_definitions(vec![
            UsageDefinition::new(Self::MONTHLY_USAGE, BillingPeriod::Monthly),
            UsageDefinition::new(Self::QUARTERLY_USAGE, BillingPeriod::Quarterly),
            UsageDefinition::new(Self::ANNUAL_USAGE, BillingPeriod::Annual),
        ])
        .unwrap()
    }

    /// Usage item billed under `usage_name` and ending on `end_date`
    pub fn usage_item(usage_name: &str, end_date: NaiveDate) -> InvoiceItem {
        InvoiceItem::usage(
            Self::invoice_id(),
            Self::subscription_id(),
            usage_name,
            end_date.pred_opt().unwrap(),
            end_date,
        )
    }

    /// Non-usage item that may legitimately sit among usage items
    pub fn recurring_item(end_date: NaiveDate) -> InvoiceItem {
        let mut item = Self::usage_item(Self::MONTHLY_USAGE, end_date);
        item.item_type = InvoiceItemType::Recurring;
        item.usage_name = None;
        item
    }

    /// Monthly usage history ending on the first of each given month of 2020
    pub fn monthly_history(months: &[u32]) -> Vec<InvoiceItem> {
        months
            .iter()
            .map(|&month| Self::usage_item(Self::MONTHLY_USAGE, Self::date(2020, month, 1)))
            .collect()
    }

    pub fn raw_usage(day: NaiveDate, tracking_id: &str) -> RawUsageRecord {
        RawUsageRecord {
            subscription_id: Self::subscription_id(),
            record_date: Utc.from_utc_datetime(&day.and_hms_opt(8, 30, 0).unwrap()),
            unit_type: Self::MONTHLY_USAGE.to_string(),
            amount: 42.0,
            tracking_id: tracking_id.to_string(),
        }
    }

    pub fn tracking(day: NaiveDate, tracking_id: &str) -> InvoiceTrackingRecord {
        InvoiceTrackingRecord {
            id: Uuid::new_v4(),
            tracking_id: tracking_id.to_string(),
            invoice_id: Self::invoice_id(),
            subscription_id: Self::subscription_id(),
            unit_type: Self::MONTHLY_USAGE.to_string(),
            record_date: day,
            created_date: Utc::now(),
        }
    }
}
