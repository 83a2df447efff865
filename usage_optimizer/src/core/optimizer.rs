//! Start date optimization for raw usage re-reads
//!
//! Each billing period recurs independently. Once the latest billed boundary
//! of a period is known, in-arrear charges of that period cannot reference
//! usage older than a bounded number of periods before it. The window start is
//! the earliest such point across all periods in use, floored at the first
//! usage event of the subscription.

use chrono::NaiveDate;
use shared::{BillingPeriod, InvoiceItem, UsageCatalog};
use std::collections::BTreeMap;

use crate::error::{UsageOptimizerError, UsageOptimizerResult};
use crate::traits::AnomalyReporter;

/// Pure computation of the optimized raw usage start date
///
/// Holds no state besides the anomaly reporter; the same inputs always give
/// the same output.
pub struct StartDateOptimizer<R>
where
    R: AnomalyReporter,
{
    reporter: R,
}

impl<R> StartDateOptimizer<R>
where
    R: AnomalyReporter,
{
    /// Create new optimizer reporting anomalies to `reporter`
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    /// Earliest date from which raw usage must be re-read
    ///
    /// # Parameters
    /// - `first_event_start_date`: first usage event of the subscription, the floor of the window
    /// - `target_date`: invoice target date, the ceiling of the window
    /// - `existing_usage_items`: usage items billed by earlier invoice runs, in any order
    /// - `usage_catalog`: usage definitions in effect for this computation
    /// - `max_previous_periods`: whole periods of slack before each latest billed boundary
    ///
    /// # Returns
    /// A date in `[first_event_start_date, target_date]`, or
    /// `first_event_start_date` itself when it falls after `target_date`.
    /// Fails when an item references a usage type missing from the catalog.
    pub fn compute_optimized_start_date(
        &self,
        first_event_start_date: NaiveDate,
        target_date: NaiveDate,
        existing_usage_items: &[InvoiceItem],
        usage_catalog: &UsageCatalog,
        max_previous_periods: u32,
    ) -> UsageOptimizerResult<NaiveDate> {
        // Nothing invoiced yet: the whole history is needed
        if existing_usage_items.is_empty() {
            return Ok(first_event_start_date);
        }

        // Usage starts after the target: nothing in the window can be re-read
        if first_event_start_date > target_date {
            return Ok(first_event_start_date);
        }

        let boundaries = self.latest_billed_boundaries(existing_usage_items, usage_catalog)?;
        let earliest = Self::earliest_candidate(&boundaries, max_previous_periods)?;

        Ok(match earliest {
            Some(candidate) => candidate.min(target_date).max(first_event_start_date),
            None => first_event_start_date,
        })
    }

    /// Latest end date billed for every recurring period of the catalog
    ///
    /// Periods in use without any billed item map to `None`; periods absent
    /// from the catalog have no entry at all.
    fn latest_billed_boundaries(
        &self,
        existing_usage_items: &[InvoiceItem],
        usage_catalog: &UsageCatalog,
    ) -> UsageOptimizerResult<BTreeMap<BillingPeriod, Option<NaiveDate>>> {
        let mut boundaries: BTreeMap<BillingPeriod, Option<NaiveDate>> = usage_catalog
            .billing_periods()
            .into_iter()
            .filter(|period| period.is_recurring())
            .map(|period| (period, None))
            .collect();

        for item in existing_usage_items {
            if !item.is_usage() {
                self.reporter.unexpected_item_kind(item);
                continue;
            }

            let usage_name = item
                .usage_name
                .as_deref()
                .ok_or(UsageOptimizerError::MissingUsageName { item_id: item.id })?;
            let definition = usage_catalog
                .get(usage_name)
                .ok_or_else(|| UsageOptimizerError::MissingUsageDefinition {
                    usage_name: usage_name.to_string(),
                    item_id: item.id,
                })?;

            // NoBillingPeriod has no slot and never constrains the window
            if let Some(slot) = boundaries.get_mut(&definition.billing_period) {
                if slot.map_or(true, |latest| item.end_date > latest) {
                    *slot = Some(item.end_date);
                }
            }
        }

        Ok(boundaries)
    }

    /// Minimum over all filled boundaries receded by `max_previous_periods`
    fn earliest_candidate(
        boundaries: &BTreeMap<BillingPeriod, Option<NaiveDate>>,
        max_previous_periods: u32,
    ) -> UsageOptimizerResult<Option<NaiveDate>> {
        let mut earliest: Option<NaiveDate> = None;

        for (&billing_period, boundary) in boundaries {
            let Some(boundary) = *boundary else {
                continue;
            };
            let candidate = billing_period
                .recede_by(boundary, max_previous_periods)
                .ok_or(UsageOptimizerError::DateOutOfRange {
                    date: boundary,
                    billing_period,
                    periods: max_previous_periods,
                })?;
            earliest = Some(earliest.map_or(candidate, |current| current.min(candidate)));
        }

        Ok(earliest)
    }
}
