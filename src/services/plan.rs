//! Budget plan service
//!
//! Edits one category of a period's plan at a time.

use crate::error::PersonanceResult;
use crate::models::{BudgetPeriod, BudgetPlan, Money, UserId};
use crate::storage::RecordStore;

pub struct PlanService<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> PlanService<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn get(&self, user: &UserId, period: &BudgetPeriod) -> PersonanceResult<BudgetPlan> {
        Ok(self.store.fetch_budget_plan(user, period)?)
    }

    /// Set one category's allocation, keeping the rest of the plan
    pub fn set_allocation(
        &self,
        user: &UserId,
        period: &BudgetPeriod,
        category: &str,
        amount: Money,
    ) -> PersonanceResult<BudgetPlan> {
        let mut plan = self.store.fetch_budget_plan(user, period)?;
        let before = plan.get(category.trim());
        plan.set(category, amount)?;
        self.store.save_budget_plan(user, period, &plan)?;

        tracing::info!(
            %user,
            %period,
            category = category.trim(),
            before = ?before.map(|m| m.to_string()),
            after = %amount,
            "set allocation"
        );
        Ok(plan)
    }

    /// Drop one category, returning its former allocation
    pub fn remove_allocation(
        &self,
        user: &UserId,
        period: &BudgetPeriod,
        category: &str,
    ) -> PersonanceResult<Option<Money>> {
        let mut plan = self.store.fetch_budget_plan(user, period)?;
        let removed = plan.remove(category.trim());
        if removed.is_some() {
            self.store.save_budget_plan(user, period, &plan)?;
            tracing::info!(%user, %period, category = category.trim(), "removed allocation");
        }
        Ok(removed)
    }

    /// Remove the whole plan for `period`
    pub fn clear(&self, user: &UserId, period: &BudgetPeriod) -> PersonanceResult<()> {
        self.store.save_budget_plan(user, period, &BudgetPlan::new())?;
        tracing::info!(%user, %period, "cleared plan");
        Ok(())
    }
}
