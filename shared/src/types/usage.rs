//! Raw usage facts and the tracking records that mark them as invoiced

use super::{InvoiceId, SubscriptionId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unprocessed metering fact from the usage source of truth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawUsageRecord {
    pub subscription_id: SubscriptionId,
    pub record_date: DateTime<Utc>,
    pub unit_type: String,
    pub amount: f64,
    pub tracking_id: String,
}

impl RawUsageRecord {
    /// Calendar day the fact belongs to
    pub fn record_day(&self) -> NaiveDate {
        self.record_date.date_naive()
    }
}

/// Identity of an already-invoiced usage fact, used to avoid double charging
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackingRecordId {
    pub tracking_id: String,
    pub invoice_id: InvoiceId,
    pub subscription_id: SubscriptionId,
    pub unit_type: String,
    pub record_date: NaiveDate,
}

/// Tracking row as persisted by the invoice tracking store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTrackingRecord {
    pub id: Uuid,
    pub tracking_id: String,
    pub invoice_id: InvoiceId,
    pub subscription_id: SubscriptionId,
    pub unit_type: String,
    pub record_date: NaiveDate,
    pub created_date: DateTime<Utc>,
}

impl From<&InvoiceTrackingRecord> for TrackingRecordId {
    fn from(record: &InvoiceTrackingRecord) -> Self {
        Self {
            tracking_id: record.tracking_id.clone(),
            invoice_id: record.invoice_id,
            subscription_id: record.subscription_id,
            unit_type: record.unit_type.clone(),
            record_date: record.record_date,
        }
    }
}
