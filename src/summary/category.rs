//! Category aggregation
//!
//! Groups income and expense records by category and sets the summed
//! magnitudes against the budget plan.

use serde::Serialize;
use std::collections::HashMap;

use super::numeric::{ratio, validated_amount};
use crate::error::{PersonanceError, PersonanceResult};
use crate::models::{BudgetPlan, Money, Record};

/// Allocated vs. spent for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: String,
    pub allocated: Money,
    pub spent: Money,
    /// Always `allocated - spent`
    pub remaining: Money,
    /// `spent / allocated`, unclamped; `None` when nothing was allocated
    pub progress_ratio: Option<f64>,
}

impl CategorySummary {
    pub fn new(category: impl Into<String>, allocated: Money, spent: Money) -> Self {
        Self {
            category: category.into(),
            allocated,
            spent,
            remaining: allocated - spent,
            progress_ratio: ratio(spent, allocated),
        }
    }

    /// Spent more than allocated (ratio above 1)
    pub fn is_over_budget(&self) -> bool {
        self.progress_ratio.is_some_and(|r| r > 1.0)
    }

    /// Progress for a bar: ratio clamped at zero, as a percentage.
    /// Unallocated categories show 0.
    pub fn display_percent(&self) -> f64 {
        self.progress_ratio.map_or(0.0, |r| r.max(0.0) * 100.0)
    }
}

/// Aggregate records into per-category summaries.
///
/// Every record is validated first, and the summed magnitudes must fit in
/// [`Money`] or the record that overflows them is reported. Income and expense records contribute the
/// magnitude of their amount to `spent`; asset and liability records are
/// skipped. Output order is plan order followed by categories that only
/// appear in records, in first-seen order.
pub fn aggregate(records: &[Record], plan: &BudgetPlan) -> PersonanceResult<Vec<CategorySummary>> {
    let mut amounts = Vec::with_capacity(records.len());
    // Running total of every magnitude; bounds each category and the period totals
    let mut total = Money::zero();
    for record in records {
        let amount = validated_amount(record)?;
        if record.kind.is_cash_flow() {
            total = total.checked_add(amount.abs()).ok_or_else(|| {
                PersonanceError::invalid_record(record.id, "amounts overflow the category totals")
            })?;
            amounts.push((record.category.trim(), amount.abs()));
        }
    }

    if Money::checked_sum(plan.iter().map(|a| a.amount)).is_none() {
        return Err(PersonanceError::Validation(
            "budget plan total is out of range".to_string(),
        ));
    }

    let mut order: Vec<(&str, Money, Money)> = plan
        .iter()
        .map(|a| (a.category.as_str(), a.amount, Money::zero()))
        .collect();
    let mut index: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, (name, _, _))| (*name, i))
        .collect();

    for (category, amount) in amounts {
        let slot = *index.entry(category).or_insert_with(|| {
            order.push((category, Money::zero(), Money::zero()));
            order.len() - 1
        });
        order[slot].2 += amount;
    }

    Ok(order
        .into_iter()
        .map(|(name, allocated, spent)| CategorySummary::new(name, allocated, spent))
        .collect())
}

/// Categories whose spending exceeds their allocation
pub fn over_budget(categories: &[CategorySummary]) -> Vec<&CategorySummary> {
    categories.iter().filter(|c| c.is_over_budget()).collect()
}
