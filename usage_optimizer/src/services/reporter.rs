//! Anomaly reporter backed by tracing

use shared::InvoiceItem;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

use crate::traits::AnomalyReporter;

/// Emits a warning event for every anomalous invoice item
#[derive(Debug, Default)]
pub struct TracingAnomalyReporter {
    reported: AtomicU64,
}

impl TracingAnomalyReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of anomalies reported so far
    pub fn reported_count(&self) -> u64 {
        self.reported.load(Ordering::Relaxed)
    }
}

impl AnomalyReporter for TracingAnomalyReporter {
    fn unexpected_item_kind(&self, item: &InvoiceItem) {
        self.reported.fetch_add(1, Ordering::Relaxed);
        warn!(
            item_id = %item.id,
            invoice_id = %item.invoice_id,
            subscription_id = item.subscription_id.as_ref().map(tracing::field::display),
            item_type = %item.item_type,
            "Expected a usage invoice item, got {}",
            item.item_type
        );
    }
}
