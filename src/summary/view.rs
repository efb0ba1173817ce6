//! View models for the three summary pages
//!
//! Plain immutable data; the display and export modules render them.

use chrono::NaiveDate;
use serde::Serialize;

use super::allocation::AllocationBreakdown;
use super::category::CategorySummary;
use super::period::{DeltaSummary, PeriodSummary};
use super::snapshot::{Holding, HoldingGroup, NetWorthSummary};
use crate::models::{Money, RecordKind, UserId};

/// Budget progress for one period
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetingView {
    pub user: UserId,
    pub period: String,
    pub summary: PeriodSummary,
    pub categories: Vec<CategorySummary>,
    /// Names of categories with a progress ratio above 1
    pub over_budget: Vec<String>,
}

/// Net worth, its changes, and the asset allocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthView {
    pub user: UserId,
    pub as_of: NaiveDate,
    pub net_worth: NetWorthSummary,
    /// Against the end of the previous period
    pub period_change: DeltaSummary,
    /// Against the end of the same period a year earlier
    pub yearly_change: DeltaSummary,
    pub allocation: Vec<AllocationBreakdown>,
    pub asset_groups: Vec<HoldingGroup>,
    pub liabilities: Vec<Holding>,
    pub independence_target: Option<Money>,
    pub independence_progress: Option<f64>,
}

/// A row of the income or expense table. Amount is `None` for listed
/// sources with nothing recorded yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub amount: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    pub date: NaiveDate,
    pub kind: RecordKind,
    pub category: String,
    pub description: String,
    /// Signed: positive income, negative expense
    pub amount: Money,
}

/// Cash flow, passive income progress, debts and recent activity
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub user: UserId,
    pub period: String,
    pub income: Vec<LineItem>,
    pub expenses: Vec<LineItem>,
    pub total_income: Money,
    /// Negative, or zero when nothing was spent
    pub total_expenses: Money,
    pub cash_flow: Money,
    pub passive_income: Money,
    pub passive_income_target: Money,
    pub passive_income_progress: f64,
    pub liabilities: Vec<Holding>,
    pub recent: Vec<RecentTransaction>,
}
