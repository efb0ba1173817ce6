//! Service layer for Personance
//!
//! Business logic on top of the record store: composing the summary pages,
//! validating new records and editing budget plans.

pub mod plan;
pub mod record;
pub mod summary;

pub use plan::PlanService;
pub use record::{NewRecord, RecordService};
pub use summary::SummaryService;
