//! JSON file adapter
//!
//! `records.json` and `plans.json` in the data directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::file_io::{read_json, write_json_atomic};
use super::ledger::Ledger;
use super::store::{LedgerBackend, LedgerStore};
use crate::config::{PersonancePaths, StoreBackend};
use crate::error::RecordStoreError;
use crate::models::{BudgetPeriod, BudgetPlan, Record, UserId};

pub type JsonRecordStore = LedgerStore<JsonFiles>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordsFile {
    #[serde(default)]
    records: Vec<StoredRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    user: UserId,
    record: Record,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PlansFile {
    #[serde(default)]
    plans: Vec<StoredPlan>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPlan {
    user: UserId,
    period: BudgetPeriod,
    allocations: BudgetPlan,
}

/// Locations of the JSON data files
#[derive(Debug, Clone)]
pub struct JsonFiles {
    records_path: PathBuf,
    plans_path: PathBuf,
}

impl JsonFiles {
    pub fn new(records_path: PathBuf, plans_path: PathBuf) -> Self {
        Self {
            records_path,
            plans_path,
        }
    }

    pub fn from_paths(paths: &PersonancePaths) -> Self {
        Self::new(paths.records_json(), paths.plans_json())
    }
}

impl LedgerBackend for JsonFiles {
    fn kind(&self) -> StoreBackend {
        StoreBackend::Json
    }

    fn load(&self) -> Result<Ledger, RecordStoreError> {
        let records: RecordsFile = read_json(&self.records_path)?;
        let plans: PlansFile = read_json(&self.plans_path)?;

        let mut ledger = Ledger::new();
        for stored in records.records {
            ledger.push_record(stored.user, stored.record);
        }
        for stored in plans.plans {
            ledger.set_plan(stored.user, stored.period, stored.allocations);
        }
        Ok(ledger)
    }

    fn save_records(&self, ledger: &Ledger) -> Result<(), RecordStoreError> {
        let file = RecordsFile {
            records: ledger
                .all_records()
                .into_iter()
                .map(|(user, record)| StoredRecord {
                    user: user.clone(),
                    record: record.clone(),
                })
                .collect(),
        };
        write_json_atomic(&self.records_path, &file)
    }

    fn save_plans(&self, ledger: &Ledger) -> Result<(), RecordStoreError> {
        let file = PlansFile {
            plans: ledger
                .all_plans()
                .into_iter()
                .map(|(user, period, plan)| StoredPlan {
                    user: user.clone(),
                    period: period.clone(),
                    allocations: plan.clone(),
                })
                .collect(),
        };
        write_json_atomic(&self.plans_path, &file)
    }
}
