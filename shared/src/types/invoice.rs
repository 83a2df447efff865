//! Invoice line items produced by earlier invoice runs

use super::{InvoiceId, InvoiceItemId, SubscriptionId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an invoice line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceItemType {
    Fixed,
    Recurring,
    Usage,
    RepairAdjustment,
    ItemAdjustment,
    CreditAdjustment,
    CbaAdjustment,
    Tax,
}

impl fmt::Display for InvoiceItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceItemType::Fixed => write!(f, "FIXED"),
            InvoiceItemType::Recurring => write!(f, "RECURRING"),
            InvoiceItemType::Usage => write!(f, "USAGE"),
            InvoiceItemType::RepairAdjustment => write!(f, "REPAIR_ADJ"),
            InvoiceItemType::ItemAdjustment => write!(f, "ITEM_ADJ"),
            InvoiceItemType::CreditAdjustment => write!(f, "CREDIT_ADJ"),
            InvoiceItemType::CbaAdjustment => write!(f, "CBA_ADJ"),
            InvoiceItemType::Tax => write!(f, "TAX"),
        }
    }
}

/// A line item of a previously generated invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    pub invoice_id: InvoiceId,
    pub subscription_id: Option<SubscriptionId>,
    pub item_type: InvoiceItemType,
    /// Usage type the item was billed under; only set on usage items
    pub usage_name: Option<String>,
    pub start_date: NaiveDate,
    /// Inclusive end of the period covered by the item
    pub end_date: NaiveDate,
}

impl InvoiceItem {
    /// Create a usage charge item
    pub fn usage(
        invoice_id: InvoiceId,
        subscription_id: SubscriptionId,
        usage_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: InvoiceItemId::new(),
            invoice_id,
            subscription_id: Some(subscription_id),
            item_type: InvoiceItemType::Usage,
            usage_name: Some(usage_name.into()),
            start_date,
            end_date,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.item_type == InvoiceItemType::Usage
    }
}
