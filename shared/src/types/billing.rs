//! Billing periods and the calendar arithmetic attached to them

use crate::errors::SharedError;
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recurring cadence over which a usage charge aggregates raw facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingPeriod {
    Daily,
    Weekly,
    Biweekly,
    ThirtyDays,
    ThirtyOneDays,
    SixtyDays,
    NinetyDays,
    Monthly,
    Bimestrial,
    Quarterly,
    Triannual,
    Biannual,
    Annual,
    Sesquiennial,
    Biennial,
    Triennial,
    /// Marker for charges that do not recur; never used in date arithmetic
    NoBillingPeriod,
}

/// Calendar length of a single billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodLength {
    Days(u64),
    Months(u32),
}

impl BillingPeriod {
    /// Every billing period, including the `NoBillingPeriod` marker
    pub const ALL: [BillingPeriod; 17] = [
        BillingPeriod::Daily,
        BillingPeriod::Weekly,
        BillingPeriod::Biweekly,
        BillingPeriod::ThirtyDays,
        BillingPeriod::ThirtyOneDays,
        BillingPeriod::SixtyDays,
        BillingPeriod::NinetyDays,
        BillingPeriod::Monthly,
        BillingPeriod::Bimestrial,
        BillingPeriod::Quarterly,
        BillingPeriod::Triannual,
        BillingPeriod::Biannual,
        BillingPeriod::Annual,
        BillingPeriod::Sesquiennial,
        BillingPeriod::Biennial,
        BillingPeriod::Triennial,
        BillingPeriod::NoBillingPeriod,
    ];

    /// Billing periods that actually recur
    pub fn recurring() -> impl Iterator<Item = BillingPeriod> {
        Self::ALL.into_iter().filter(|period| period.is_recurring())
    }

    pub fn is_recurring(self) -> bool {
        self != BillingPeriod::NoBillingPeriod
    }

    /// Length of one period, `None` for `NoBillingPeriod`
    pub fn length(self) -> Option<PeriodLength> {
        let length = match self {
            BillingPeriod::Daily => PeriodLength::Days(1),
            BillingPeriod::Weekly => PeriodLength::Days(7),
            BillingPeriod::Biweekly => PeriodLength::Days(14),
            BillingPeriod::ThirtyDays => PeriodLength::Days(30),
            BillingPeriod::ThirtyOneDays => PeriodLength::Days(31),
            BillingPeriod::SixtyDays => PeriodLength::Days(60),
            BillingPeriod::NinetyDays => PeriodLength::Days(90),
            BillingPeriod::Monthly => PeriodLength::Months(1),
            BillingPeriod::Bimestrial => PeriodLength::Months(2),
            BillingPeriod::Quarterly => PeriodLength::Months(3),
            BillingPeriod::Triannual => PeriodLength::Months(4),
            BillingPeriod::Biannual => PeriodLength::Months(6),
            BillingPeriod::Annual => PeriodLength::Months(12),
            BillingPeriod::Sesquiennial => PeriodLength::Months(18),
            BillingPeriod::Biennial => PeriodLength::Months(24),
            BillingPeriod::Triennial => PeriodLength::Months(36),
            BillingPeriod::NoBillingPeriod => return None,
        };
        Some(length)
    }

    /// Move `date` forward by `periods` whole periods.
    ///
    /// Steps are applied one period at a time, so month-based periods clamp to
    /// the end of a shorter month at every step. Returns `None` for
    /// `NoBillingPeriod` or when the result leaves the representable range.
    pub fn advance_by(self, date: NaiveDate, periods: u32) -> Option<NaiveDate> {
        let length = self.length()?;
        (0..periods).try_fold(date, |current, _| match length {
            PeriodLength::Days(days) => current.checked_add_days(Days::new(days)),
            PeriodLength::Months(months) => current.checked_add_months(Months::new(months)),
        })
    }

    /// Move `date` backward by `periods` whole periods (see [`Self::advance_by`])
    pub fn recede_by(self, date: NaiveDate, periods: u32) -> Option<NaiveDate> {
        let length = self.length()?;
        (0..periods).try_fold(date, |current, _| match length {
            PeriodLength::Days(days) => current.checked_sub_days(Days::new(days)),
            PeriodLength::Months(months) => current.checked_sub_months(Months::new(months)),
        })
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BillingPeriod::Daily => "DAILY",
            BillingPeriod::Weekly => "WEEKLY",
            BillingPeriod::Biweekly => "BIWEEKLY",
            BillingPeriod::ThirtyDays => "THIRTY_DAYS",
            BillingPeriod::ThirtyOneDays => "THIRTY_ONE_DAYS",
            BillingPeriod::SixtyDays => "SIXTY_DAYS",
            BillingPeriod::NinetyDays => "NINETY_DAYS",
            BillingPeriod::Monthly => "MONTHLY",
            BillingPeriod::Bimestrial => "BIMESTRIAL",
            BillingPeriod::Quarterly => "QUARTERLY",
            BillingPeriod::Triannual => "TRIANNUAL",
            BillingPeriod::Biannual => "BIANNUAL",
            BillingPeriod::Annual => "ANNUAL",
            BillingPeriod::Sesquiennial => "SESQUIENNIAL",
            BillingPeriod::Biennial => "BIENNIAL",
            BillingPeriod::Triennial => "TRIENNIAL",
            BillingPeriod::NoBillingPeriod => "NO_BILLING_PERIOD",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BillingPeriod {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|period| period.to_string() == normalized)
            .ok_or_else(|| SharedError::InvalidBillingPeriod { input: s.to_string() })
    }
}
