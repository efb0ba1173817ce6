//! Configuration module for Personance
//!
//! - Path resolution (`PERSONANCE_DATA_DIR` or the platform config directory)
//! - User settings persistence, goals, and store adapter selection

pub mod paths;
pub mod settings;

pub use paths::PersonancePaths;
pub use settings::{BudgetPeriodType, Goals, Settings, StoreBackend};
