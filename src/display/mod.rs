//! Display formatting for terminal output
//!
//! Renders the summary view models and stored data as text tables.

pub mod budget;
pub mod dashboard;
pub mod format;
pub mod record;
pub mod wealth;

pub use budget::{format_budgeting, format_plan};
pub use dashboard::format_dashboard;
pub use record::format_record_list;
pub use wealth::format_wealth;
