//! Summary service
//!
//! Reads records and plans through a [`RecordStore`] and composes the view
//! model for each summary page. Store failures pass through unchanged.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::PersonanceResult;
use crate::models::{BudgetPeriod, BudgetPlan, DateRange, Money, Record, RecordKind, UserId};
use crate::storage::RecordStore;
use crate::summary::numeric::validated_amount;
use crate::summary::{
    aggregate, compose, delta, group_holdings, holdings_as_of, net_worth, over_budget,
    progress_to_goal, summarize, BudgetingView, CategorySummary, DashboardView, GroupValue,
    Holding, HoldingGroup, LineItem, NetWorthSummary, RecentTransaction, WealthView,
};

/// Service composing the budgeting, wealth and dashboard pages
pub struct SummaryService<'a> {
    store: &'a dyn RecordStore,
    settings: &'a Settings,
}

impl<'a> SummaryService<'a> {
    pub fn new(store: &'a dyn RecordStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Spending against the plan for `period`
    pub fn budgeting(&self, user: &UserId, period: &BudgetPeriod) -> PersonanceResult<BudgetingView> {
        let range = period.range();
        let plan = self.store.fetch_budget_plan(user, period)?;
        let expenses = of_kind(&self.store.fetch_records(user, &range)?, RecordKind::Expense);

        let categories = aggregate(&expenses, &plan)?;
        let summary = summarize(&categories, &range);
        let overspent = over_budget(&categories)
            .into_iter()
            .map(|c| c.category.clone())
            .collect();

        tracing::debug!(
            %user,
            %period,
            categories = categories.len(),
            percent_used = summary.percent_used,
            "built budgeting view"
        );

        Ok(BudgetingView {
            user: user.clone(),
            period: period.to_string(),
            summary,
            categories,
            over_budget: overspent,
        })
    }

    /// Net worth at the end of `period` and how it moved
    pub fn wealth(&self, user: &UserId, period: &BudgetPeriod) -> PersonanceResult<WealthView> {
        let as_of = period.end_date();
        let records = self.store.fetch_records(user, &DateRange::through(as_of))?;

        let holdings = holdings_as_of(&records, as_of)?;
        let current = net_worth(&holdings)?;
        let prior = net_worth_on(&records, period.prev().end_date())?;
        let year_ago = net_worth_on(&records, period.year_ago().end_date())?;

        let asset_groups = group_holdings(&holdings, RecordKind::Asset);
        let group_values: Vec<GroupValue> =
            asset_groups.iter().map(HoldingGroup::group_value).collect();
        let allocation = compose(&group_values);

        let independence_target = self.settings.goals.net_worth_target;
        let independence_progress = independence_target
            .map(|target| progress_to_goal(current.net_worth, target))
            .transpose()?;

        tracing::debug!(
            %user,
            %as_of,
            net_worth = %current.net_worth,
            holdings = holdings.len(),
            "built wealth view"
        );

        Ok(WealthView {
            user: user.clone(),
            as_of,
            net_worth: current,
            period_change: delta(current.net_worth, prior.net_worth),
            yearly_change: delta(current.net_worth, year_ago.net_worth),
            allocation,
            asset_groups,
            liabilities: of_holding_kind(holdings, RecordKind::Liability),
            independence_target,
            independence_progress,
        })
    }

    /// Cash flow for `period`, passive income progress, debts and recent activity
    pub fn dashboard(&self, user: &UserId, period: &BudgetPeriod) -> PersonanceResult<DashboardView> {
        let end = period.end_date();
        let records = self.store.fetch_records(user, &DateRange::through(end))?;
        let in_period: Vec<Record> = records
            .iter()
            .filter(|r| r.kind.is_cash_flow() && period.contains(r.date()))
            .cloned()
            .collect();

        let income_summaries = aggregate(&of_kind(&in_period, RecordKind::Income), &BudgetPlan::new())?;
        let expense_summaries = aggregate(&of_kind(&in_period, RecordKind::Expense), &BudgetPlan::new())?;

        let total_income: Money = income_summaries.iter().map(|c| c.spent).sum();
        let total_expenses: Money = -expense_summaries.iter().map(|c| c.spent).sum::<Money>();
        let passive_income: Money = income_summaries
            .iter()
            .filter(|c| self.settings.is_passive_income(&c.category))
            .map(|c| c.spent)
            .sum();

        let passive_income_target = self.settings.goals.passive_income_target;
        let passive_income_progress = progress_to_goal(passive_income, passive_income_target)?;

        let liabilities = of_holding_kind(holdings_as_of(&records, end)?, RecordKind::Liability);
        let recent = self.recent_transactions(&in_period)?;

        tracing::debug!(
            %user,
            %period,
            income = %total_income,
            expenses = %total_expenses,
            "built dashboard view"
        );

        Ok(DashboardView {
            user: user.clone(),
            period: period.to_string(),
            income: self.income_rows(&income_summaries),
            expenses: expense_summaries
                .iter()
                .map(|c| LineItem {
                    name: c.category.clone(),
                    amount: Some(-c.spent),
                })
                .collect(),
            total_income,
            total_expenses,
            cash_flow: total_income + total_expenses,
            passive_income,
            passive_income_target,
            passive_income_progress,
            liabilities,
            recent,
        })
    }

    /// Recorded income categories, then configured passive sources with nothing recorded
    fn income_rows(&self, summaries: &[CategorySummary]) -> Vec<LineItem> {
        let mut rows: Vec<LineItem> = summaries
            .iter()
            .map(|c| LineItem {
                name: c.category.clone(),
                amount: Some(c.spent),
            })
            .collect();

        for source in &self.settings.passive_income_categories {
            if !rows.iter().any(|row| row.name.eq_ignore_ascii_case(source)) {
                rows.push(LineItem {
                    name: source.clone(),
                    amount: None,
                });
            }
        }
        rows
    }

    /// Newest first, at most `recent_transactions_limit`
    fn recent_transactions(&self, records: &[Record]) -> PersonanceResult<Vec<RecentTransaction>> {
        records
            .iter()
            .rev()
            .take(self.settings.recent_transactions_limit)
            .map(|r| {
                Ok(RecentTransaction {
                    date: r.date(),
                    kind: r.kind,
                    category: r.category.clone(),
                    description: r.description.clone(),
                    amount: validated_amount(r)?,
                })
            })
            .collect()
    }
}

fn of_kind(records: &[Record], kind: RecordKind) -> Vec<Record> {
    records.iter().filter(|r| r.kind == kind).cloned().collect()
}

fn of_holding_kind(holdings: Vec<Holding>, kind: RecordKind) -> Vec<Holding> {
    holdings.into_iter().filter(|h| h.kind == kind).collect()
}

fn net_worth_on(records: &[Record], date: NaiveDate) -> PersonanceResult<NetWorthSummary> {
    net_worth(&holdings_as_of(records, date)?)
}
