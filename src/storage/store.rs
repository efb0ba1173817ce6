//! A [`RecordStore`] over a [`Ledger`] held behind a lock
//!
//! Persistence is delegated to a [`LedgerBackend`]. Every change is written
//! through immediately; if the write fails the in-memory change is undone so
//! memory and disk stay in step.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::ledger::Ledger;
use super::RecordStore;
use crate::config::StoreBackend;
use crate::error::RecordStoreError;
use crate::models::{BudgetPeriod, BudgetPlan, DateRange, Record, UserId};

/// Where a ledger is loaded from and written back to
pub trait LedgerBackend: Send + Sync {
    fn kind(&self) -> StoreBackend;

    fn load(&self) -> Result<Ledger, RecordStoreError>;

    fn save_records(&self, ledger: &Ledger) -> Result<(), RecordStoreError>;

    fn save_plans(&self, ledger: &Ledger) -> Result<(), RecordStoreError>;
}

pub struct LedgerStore<B: LedgerBackend> {
    backend: B,
    ledger: RwLock<Ledger>,
}

impl<B: LedgerBackend> LedgerStore<B> {
    /// Load the ledger from `backend`
    pub fn open(backend: B) -> Result<Self, RecordStoreError> {
        let ledger = backend.load()?;
        tracing::info!(
            backend = %backend.kind(),
            records = ledger.record_count(),
            "opened record store"
        );

        Ok(Self::from_ledger(backend, ledger))
    }

    pub(super) fn from_ledger(backend: B, ledger: Ledger) -> Self {
        Self {
            backend,
            ledger: RwLock::new(ledger),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Ledger>, RecordStoreError> {
        self.ledger
            .read()
            .map_err(|e| RecordStoreError::Lock(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Ledger>, RecordStoreError> {
        self.ledger
            .write()
            .map_err(|e| RecordStoreError::Lock(format!("Failed to acquire write lock: {}", e)))
    }
}

impl<B: LedgerBackend> RecordStore for LedgerStore<B> {
    fn backend(&self) -> StoreBackend {
        self.backend.kind()
    }

    fn fetch_records(
        &self,
        user: &UserId,
        range: &DateRange,
    ) -> Result<Vec<Record>, RecordStoreError> {
        let records = self.read()?.records_in(user, range);
        tracing::debug!(%user, start = %range.start, end = %range.end, count = records.len(), "fetched records");
        Ok(records)
    }

    fn append_record(&self, user: &UserId, record: Record) -> Result<(), RecordStoreError> {
        let mut ledger = self.write()?;
        let id = record.id;
        ledger.push_record(user.clone(), record);

        if let Err(e) = self.backend.save_records(&ledger) {
            ledger.pop_record(user);
            tracing::warn!(%user, error = %e, "failed to persist record, change rolled back");
            return Err(e);
        }

        tracing::debug!(%user, record = %id, "appended record");
        Ok(())
    }

    fn fetch_budget_plan(
        &self,
        user: &UserId,
        period: &BudgetPeriod,
    ) -> Result<BudgetPlan, RecordStoreError> {
        Ok(self.read()?.plan(user, period).cloned().unwrap_or_default())
    }

    fn save_budget_plan(
        &self,
        user: &UserId,
        period: &BudgetPeriod,
        plan: &BudgetPlan,
    ) -> Result<(), RecordStoreError> {
        let mut ledger = self.write()?;
        let previous = ledger.set_plan(user.clone(), period.clone(), plan.clone());

        if let Err(e) = self.backend.save_plans(&ledger) {
            ledger.restore_plan(user.clone(), period.clone(), previous);
            tracing::warn!(%user, %period, error = %e, "failed to persist plan, change rolled back");
            return Err(e);
        }

        tracing::debug!(%user, %period, categories = plan.len(), "saved budget plan");
        Ok(())
    }
}
