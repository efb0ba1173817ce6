//! In-memory index of records and plans shared by every adapter
//!
//! The file adapters load a `Ledger` on open and write it back after each
//! change; the memory adapter only ever holds one.

use std::collections::HashMap;

use crate::models::{BudgetPeriod, BudgetPlan, DateRange, Record, UserId};

#[derive(Debug, Default, Clone)]
pub struct Ledger {
    records: HashMap<UserId, Vec<Record>>,
    plans: HashMap<(UserId, BudgetPeriod), BudgetPlan>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of `user` dated within `range`, oldest first
    pub fn records_in(&self, user: &UserId, range: &DateRange) -> Vec<Record> {
        let mut records: Vec<Record> = self
            .records
            .get(user)
            .map(|all| {
                all.iter()
                    .filter(|r| range.contains(r.date()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by_key(|r| r.timestamp);
        records
    }

    pub fn push_record(&mut self, user: UserId, record: Record) {
        self.records.entry(user).or_default().push(record);
    }

    /// Undo the most recent `push_record` for `user`
    pub fn pop_record(&mut self, user: &UserId) -> Option<Record> {
        self.records.get_mut(user)?.pop()
    }

    pub fn plan(&self, user: &UserId, period: &BudgetPeriod) -> Option<&BudgetPlan> {
        self.plans.get(&(user.clone(), period.clone()))
    }

    /// Store a plan, returning the one it replaced. Empty plans are removed.
    pub fn set_plan(
        &mut self,
        user: UserId,
        period: BudgetPeriod,
        plan: BudgetPlan,
    ) -> Option<BudgetPlan> {
        if plan.is_empty() {
            self.plans.remove(&(user, period))
        } else {
            self.plans.insert((user, period), plan)
        }
    }

    /// Restore a plan slot to what `set_plan` returned
    pub fn restore_plan(&mut self, user: UserId, period: BudgetPeriod, previous: Option<BudgetPlan>) {
        match previous {
            Some(plan) => {
                self.plans.insert((user, period), plan);
            }
            None => {
                self.plans.remove(&(user, period));
            }
        }
    }

    /// Every record with its owner, users in sorted order, records oldest first
    pub fn all_records(&self) -> Vec<(&UserId, &Record)> {
        let mut users: Vec<&UserId> = self.records.keys().collect();
        users.sort();

        users
            .into_iter()
            .flat_map(|user| {
                let mut records: Vec<&Record> = self.records[user].iter().collect();
                records.sort_by_key(|r| r.timestamp);
                records.into_iter().map(move |r| (user, r))
            })
            .collect()
    }

    /// Every plan with its owner and period, sorted by user then period
    pub fn all_plans(&self) -> Vec<(&UserId, &BudgetPeriod, &BudgetPlan)> {
        let mut plans: Vec<_> = self
            .plans
            .iter()
            .map(|((user, period), plan)| (user, period, plan))
            .collect();
        plans.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(b.1)));
        plans
    }

    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }
}
