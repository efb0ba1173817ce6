//! In-process adapter, nothing is written to disk

use super::ledger::Ledger;
use super::store::{LedgerBackend, LedgerStore};
use crate::config::StoreBackend;
use crate::error::RecordStoreError;

pub type MemoryRecordStore = LedgerStore<Volatile>;

/// Backend that starts empty and drops every write
#[derive(Debug, Default, Clone, Copy)]
pub struct Volatile;

impl LedgerBackend for Volatile {
    fn kind(&self) -> StoreBackend {
        StoreBackend::Memory
    }

    fn load(&self) -> Result<Ledger, RecordStoreError> {
        Ok(Ledger::new())
    }

    fn save_records(&self, _ledger: &Ledger) -> Result<(), RecordStoreError> {
        Ok(())
    }

    fn save_plans(&self, _ledger: &Ledger) -> Result<(), RecordStoreError> {
        Ok(())
    }
}

impl LedgerStore<Volatile> {
    pub fn in_memory() -> Self {
        Self::from_ledger(Volatile, Ledger::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, Record, RecordKind, UserId};
    use crate::storage::RecordStore;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_concurrent_appends() {
        let store = Arc::new(MemoryRecordStore::in_memory());
        let user = UserId::new("alice");

        let handles: Vec<_> = (1..=8)
            .map(|day| {
                let store = Arc::clone(&store);
                let user = user.clone();
                thread::spawn(move || {
                    let ts = Utc.with_ymd_and_hms(2025, 5, day, 8, 0, 0).unwrap();
                    store
                        .append_record(&user, Record::new(RecordKind::Expense, "Food", -1.0, ts))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let records = store
            .fetch_records(&user, &BudgetPeriod::monthly(2025, 5).range())
            .unwrap();
        assert_eq!(records.len(), 8);
        assert!(records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(store.backend(), StoreBackend::Memory);
    }
}
