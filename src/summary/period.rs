//! Period totals and period-over-period deltas

use chrono::NaiveDate;
use serde::Serialize;

use super::category::CategorySummary;
use super::numeric::percent_half_up;
use crate::models::{DateRange, Money};

/// Totals for one budget period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budgeted: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    /// Whole percent, rounded half-up; 0 when nothing was budgeted
    pub percent_used: i64,
}

/// Change between two values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaSummary {
    pub prior_value: Money,
    pub current_value: Money,
    pub absolute_change: Money,
    /// `None` when the prior value is zero: there is no baseline to compare to
    pub percent_change: Option<f64>,
}

impl DeltaSummary {
    pub fn is_increase(&self) -> bool {
        self.absolute_change.is_positive()
    }
}

/// Sum category summaries into period totals.
///
/// Totals are exact cent sums; only `percent_used` is rounded. Sums clamp at
/// the bounds of [`Money`], which summaries from `aggregate` never reach.
pub fn summarize(categories: &[CategorySummary], range: &DateRange) -> PeriodSummary {
    let total_budgeted = saturating_total(categories.iter().map(|c| c.allocated));
    let total_spent = saturating_total(categories.iter().map(|c| c.spent));
    let total_remaining = saturating_total(categories.iter().map(|c| c.remaining));

    PeriodSummary {
        start_date: range.start,
        end_date: range.end,
        total_budgeted,
        total_spent,
        total_remaining,
        percent_used: percent_half_up(total_spent, total_budgeted),
    }
}

fn saturating_total(amounts: impl Iterator<Item = Money>) -> Money {
    amounts.fold(Money::zero(), Money::saturating_add)
}

/// Compare a current value against a prior one
pub fn delta(current: Money, prior: Money) -> DeltaSummary {
    let absolute_change = current - prior;
    let percent_change = if prior.is_zero() {
        None
    } else {
        Some(absolute_change.cents() as f64 / prior.cents() as f64 * 100.0)
    };

    DeltaSummary {
        prior_value: prior,
        current_value: current,
        absolute_change,
        percent_change,
    }
}
