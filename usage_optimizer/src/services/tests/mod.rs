//! Service-specific tests
//!
//! Each service has its own test file with dedicated fixtures.


// Common test utilities for services
pub mod common {
    use chrono::{NaiveDate, TimeZone, Utc};
    use shared::{InvoiceId, InvoiceTrackingRecord, RawUsageRecord, SubscriptionId};
    use uuid::Uuid;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Valid test date")
    }

    /// Raw usage fact at noon UTC of the given day
    pub fn raw_usage(day: NaiveDate, tracking_id: &str) -> RawUsageRecord {
        RawUsageRecord {
            subscription_id: SubscriptionId::new(),
            record_date: Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).expect("Valid test time")),
            unit_type: "api-calls".to_string(),
            amount: 10.0,
            tracking_id: tracking_id.to_string(),
        }
    }

    pub fn tracking(day: NaiveDate, tracking_id: &str) -> InvoiceTrackingRecord {
        InvoiceTrackingRecord {
            id: Uuid::new_v4(),
            tracking_id: tracking_id.to_string(),
            invoice_id: InvoiceId::new(),
            subscription_id: SubscriptionId::new(),
            unit_type: "api-calls".to_string(),
            record_date: day,
            created_date: Utc::now(),
        }
    }
}
