//! Percent-of-whole breakdowns and progress toward a goal

use serde::Serialize;

use crate::error::{PersonanceError, PersonanceResult};
use crate::models::Money;

/// A named group value to break down, e.g. an asset class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupValue {
    pub name: String,
    pub total_value: Money,
}

impl GroupValue {
    pub fn new(name: impl Into<String>, total_value: Money) -> Self {
        Self {
            name: name.into(),
            total_value,
        }
    }
}

/// One slice of an allocation chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBreakdown {
    pub group_name: String,
    pub total_value: Money,
    pub percent_of_total: f64,
}

/// Break group values down into percentages of their sum.
///
/// The denominator is the sum of the groups passed to this call. No groups,
/// or groups summing to zero, produce an empty breakdown.
pub fn compose(groups: &[GroupValue]) -> Vec<AllocationBreakdown> {
    // i128 so any number of groups can be summed
    let total: i128 = groups.iter().map(|g| i128::from(g.total_value.cents())).sum();
    if total == 0 {
        return Vec::new();
    }

    groups
        .iter()
        .map(|g| AllocationBreakdown {
            group_name: g.name.clone(),
            total_value: g.total_value,
            percent_of_total: g.total_value.cents() as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Percent of the way from zero to `target`, clamped to `[0, 100]`.
///
/// Fails when `target` is not positive.
pub fn progress_to_goal(current: Money, target: Money) -> PersonanceResult<f64> {
    if !target.is_positive() {
        return Err(PersonanceError::InvalidGoal { target });
    }

    let ratio = current.cents() as f64 / target.cents() as f64;
    Ok(ratio.clamp(0.0, 1.0) * 100.0)
}
