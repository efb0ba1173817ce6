//! Financial summary computation
//!
//! Stateless transforms from records to the figures the summary pages show:
//!
//! - [`category`]: allocated vs. spent per category
//! - [`period`]: period totals and period-over-period deltas
//! - [`allocation`]: percent-of-total breakdowns and progress toward a goal
//! - [`snapshot`]: holding values and net worth as of a date
//!
//! None of these functions keep state or do I/O, so they are safe to call
//! from any number of threads at once.

pub mod allocation;
pub mod category;
pub mod numeric;
pub mod period;
pub mod snapshot;
pub mod view;

pub use allocation::{compose, progress_to_goal, AllocationBreakdown, GroupValue};
pub use category::{aggregate, over_budget, CategorySummary};
pub use period::{delta, summarize, DeltaSummary, PeriodSummary};
pub use snapshot::{group_holdings, holdings_as_of, net_worth, Holding, HoldingGroup, NetWorthSummary};
pub use view::{BudgetingView, DashboardView, LineItem, RecentTransaction, WealthView};
