//! Personance - personal-finance summaries
//!
//! Turns a user's income, expense, asset and liability records into the
//! figures a finance dashboard shows: budget progress per category, period
//! totals, net worth and its changes, asset allocation and progress toward
//! financial goals.
//!
//! # Architecture
//!
//! - `models`: records, money, periods and budget plans
//! - `summary`: pure computations and the view models they produce
//! - `storage`: the `RecordStore` trait and its JSON, CSV and memory adapters
//! - `services`: page composition and validated edits over a store
//! - `config`: settings and path management
//! - `display` / `export`: terminal tables and JSON, YAML and CSV output
//! - `cli`: command handlers for the `personance` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use personance::config::Settings;
//! use personance::models::{BudgetPeriod, UserId};
//! use personance::services::SummaryService;
//! use personance::storage::MemoryRecordStore;
//!
//! let store = MemoryRecordStore::in_memory();
//! let settings = Settings::default();
//! let view = SummaryService::new(&store, &settings)
//!     .budgeting(&UserId::new("me"), &BudgetPeriod::monthly(2025, 5))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod summary;

pub use error::{Activity, PersonanceError, PersonanceResult, RecordStoreError};
