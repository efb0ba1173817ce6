//! Core data models for Personance
//!
//! Records, money, periods and budget plans: the inputs of the summary layer.

pub mod ids;
pub mod money;
pub mod period;
pub mod plan;
pub mod record;

pub use ids::{RecordId, UserId};
pub use money::Money;
pub use period::{BudgetPeriod, DateRange};
pub use plan::{Allocation, BudgetPlan};
pub use record::{Record, RecordKind};
