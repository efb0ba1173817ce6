//! Record store adapters
//!
//! Every summary is computed from records and plans read through the
//! [`RecordStore`] trait. Three adapters exist: JSON files, CSV files and an
//! in-process store. Which one is used is decided by configuration and
//! [`open_store`] builds it.

pub mod csv;
pub mod file_io;
pub mod json;
pub mod ledger;
pub mod memory;
pub mod seed;
pub mod store;

pub use self::csv::{CsvFiles, CsvRecordStore};
pub use json::{JsonFiles, JsonRecordStore};
pub use ledger::Ledger;
pub use memory::MemoryRecordStore;
pub use seed::{demo_period, seed_demo};
pub use store::{LedgerBackend, LedgerStore};

use crate::config::{PersonancePaths, StoreBackend};
use crate::error::RecordStoreError;
use crate::models::{BudgetPeriod, BudgetPlan, DateRange, Record, UserId};

/// Source of a user's records and budget plans
///
/// Implementations must be safe to share between threads; summaries only
/// ever read through `&self`.
pub trait RecordStore: Send + Sync {
    /// Which adapter this is
    fn backend(&self) -> StoreBackend;

    /// Records of `user` dated within `range`, oldest first
    fn fetch_records(&self, user: &UserId, range: &DateRange)
        -> Result<Vec<Record>, RecordStoreError>;

    fn append_record(&self, user: &UserId, record: Record) -> Result<(), RecordStoreError>;

    /// The plan for `period`, empty when none has been saved
    fn fetch_budget_plan(
        &self,
        user: &UserId,
        period: &BudgetPeriod,
    ) -> Result<BudgetPlan, RecordStoreError>;

    /// Replace the plan for `period`. Saving an empty plan clears it.
    fn save_budget_plan(
        &self,
        user: &UserId,
        period: &BudgetPeriod,
        plan: &BudgetPlan,
    ) -> Result<(), RecordStoreError>;
}

/// Open the configured adapter
pub fn open_store(
    backend: StoreBackend,
    paths: &PersonancePaths,
) -> Result<Box<dyn RecordStore>, RecordStoreError> {
    tracing::debug!(%backend, base_dir = %paths.base_dir().display(), "opening record store");

    let store: Box<dyn RecordStore> = match backend {
        StoreBackend::Json => Box::new(JsonRecordStore::open(JsonFiles::from_paths(paths))?),
        StoreBackend::Csv => Box::new(CsvRecordStore::open(CsvFiles::from_paths(paths))?),
        StoreBackend::Memory => Box::new(MemoryRecordStore::in_memory()),
    };
    Ok(store)
}
