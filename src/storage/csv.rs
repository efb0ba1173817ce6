//! CSV file adapter
//!
//! One row per record in `records.csv` and one row per allocation in
//! `plans.csv`. Plans keep their category order through row order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::file_io::{read_csv, write_csv_atomic};
use super::ledger::Ledger;
use super::store::{LedgerBackend, LedgerStore};
use crate::config::{PersonancePaths, StoreBackend};
use crate::error::RecordStoreError;
use crate::models::{BudgetPeriod, BudgetPlan, Money, Record, RecordId, RecordKind, UserId};

pub type CsvRecordStore = LedgerStore<CsvFiles>;

#[derive(Debug, Serialize, Deserialize)]
struct RecordRow {
    user: UserId,
    id: RecordId,
    kind: RecordKind,
    category: String,
    description: String,
    amount: f64,
    timestamp: DateTime<Utc>,
}

impl RecordRow {
    fn new(user: &UserId, record: &Record) -> Self {
        Self {
            user: user.clone(),
            id: record.id,
            kind: record.kind,
            category: record.category.clone(),
            description: record.description.clone(),
            amount: record.amount,
            timestamp: record.timestamp,
        }
    }

    fn into_parts(self) -> (UserId, Record) {
        let record = Record {
            id: self.id,
            category: self.category,
            amount: self.amount,
            kind: self.kind,
            timestamp: self.timestamp,
            description: self.description,
        };
        (self.user, record)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PlanRow {
    user: UserId,
    period: String,
    category: String,
    amount_cents: i64,
}

/// Locations of the CSV data files
#[derive(Debug, Clone)]
pub struct CsvFiles {
    records_path: PathBuf,
    plans_path: PathBuf,
}

impl CsvFiles {
    pub fn new(records_path: PathBuf, plans_path: PathBuf) -> Self {
        Self {
            records_path,
            plans_path,
        }
    }

    pub fn from_paths(paths: &PersonancePaths) -> Self {
        Self::new(paths.records_csv(), paths.plans_csv())
    }

    fn load_plans(&self, ledger: &mut Ledger) -> Result<(), RecordStoreError> {
        let location = self.plans_path.display().to_string();
        let rows: Vec<PlanRow> = read_csv(&self.plans_path)?;

        // Rows of one plan are contiguous; collect them before inserting
        let mut current: Option<(UserId, BudgetPeriod, BudgetPlan)> = None;
        for row in rows {
            let period = BudgetPeriod::parse(&row.period)
                .map_err(|e| RecordStoreError::corrupt(&location, e.to_string()))?;

            let same_plan = matches!(&current, Some((user, p, _)) if *user == row.user && *p == period);
            if !same_plan {
                if let Some((user, period, plan)) = current.take() {
                    ledger.set_plan(user, period, plan);
                }
                current = Some((row.user.clone(), period, BudgetPlan::new()));
            }

            if let Some((_, _, plan)) = current.as_mut() {
                plan.set(row.category, Money::from_cents(row.amount_cents))
                    .map_err(|e| RecordStoreError::corrupt(&location, e.to_string()))?;
            }
        }

        if let Some((user, period, plan)) = current {
            ledger.set_plan(user, period, plan);
        }
        Ok(())
    }
}

impl LedgerBackend for CsvFiles {
    fn kind(&self) -> StoreBackend {
        StoreBackend::Csv
    }

    fn load(&self) -> Result<Ledger, RecordStoreError> {
        let mut ledger = Ledger::new();

        let rows: Vec<RecordRow> = read_csv(&self.records_path)?;
        for row in rows {
            let (user, record) = row.into_parts();
            ledger.push_record(user, record);
        }

        self.load_plans(&mut ledger)?;
        Ok(ledger)
    }

    fn save_records(&self, ledger: &Ledger) -> Result<(), RecordStoreError> {
        let rows: Vec<RecordRow> = ledger
            .all_records()
            .into_iter()
            .map(|(user, record)| RecordRow::new(user, record))
            .collect();
        write_csv_atomic(&self.records_path, &rows)
    }

    fn save_plans(&self, ledger: &Ledger) -> Result<(), RecordStoreError> {
        let rows: Vec<PlanRow> = ledger
            .all_plans()
            .into_iter()
            .flat_map(|(user, period, plan)| {
                plan.iter().map(move |allocation| PlanRow {
                    user: user.clone(),
                    period: period.to_string(),
                    category: allocation.category.clone(),
                    amount_cents: allocation.amount.cents(),
                })
            })
            .collect();
        write_csv_atomic(&self.plans_path, &rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RecordStore;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn files(temp_dir: &TempDir) -> CsvFiles {
        CsvFiles::from_paths(&PersonancePaths::with_base_dir(temp_dir.path().to_path_buf()))
    }

    #[test]
    fn test_records_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let user = UserId::new("alice");
        let ts = Utc.with_ymd_and_hms(2025, 5, 1, 9, 30, 0).unwrap();
        let record = Record::new(RecordKind::Asset, "Investments", 25000.0, ts)
            .with_description("S&P 500, index fund");

        {
            let store = CsvRecordStore::open(files(&temp_dir)).unwrap();
            store.append_record(&user, record.clone()).unwrap();
        }

        let contents = std::fs::read_to_string(temp_dir.path().join("data").join("records.csv")).unwrap();
        assert!(contents.starts_with("user,id,kind,category,description,amount,timestamp"));

        let store = CsvRecordStore::open(files(&temp_dir)).unwrap();
        let loaded = store
            .fetch_records(&user, &BudgetPeriod::monthly(2025, 5).range())
            .unwrap();
        assert_eq!(loaded, vec![record]);
    }

    #[test]
    fn test_plans_keep_category_order() {
        let temp_dir = TempDir::new().unwrap();
        let user = UserId::new("alice");
        let may = BudgetPeriod::monthly(2025, 5);
        let june = BudgetPeriod::monthly(2025, 6);
        let plan = BudgetPlan::from_pairs([
            ("Housing", Money::from_dollars(1200)),
            ("Food", Money::from_dollars(600)),
            ("Utilities", Money::from_dollars(250)),
        ])
        .unwrap();
        let june_plan = BudgetPlan::from_pairs([("Food", Money::from_dollars(550))]).unwrap();

        {
            let store = CsvRecordStore::open(files(&temp_dir)).unwrap();
            store.save_budget_plan(&user, &may, &plan).unwrap();
            store.save_budget_plan(&user, &june, &june_plan).unwrap();
        }

        let store = CsvRecordStore::open(files(&temp_dir)).unwrap();
        assert_eq!(store.fetch_budget_plan(&user, &may).unwrap(), plan);
        assert_eq!(store.fetch_budget_plan(&user, &june).unwrap(), june_plan);
    }

    #[test]
    fn test_bad_period_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(
            data_dir.join("plans.csv"),
            "user,period,category,amount_cents\nalice,2025-13,Food,60000\n",
        )
        .unwrap();

        assert!(matches!(
            CsvRecordStore::open(files(&temp_dir)),
            Err(RecordStoreError::Corrupt { .. })
        ));
    }
}
