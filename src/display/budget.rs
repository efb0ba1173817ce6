//! Budgeting page rendering

use tabled::Tabled;

use super::format::{format_bar, format_percentage, heading, table};
use crate::config::Settings;
use crate::models::BudgetPlan;
use crate::summary::{BudgetingView, CategorySummary};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

impl CategoryRow {
    fn new(summary: &CategorySummary, symbol: &str) -> Self {
        let progress = match summary.progress_ratio {
            Some(_) => {
                let pct = summary.display_percent();
                format!("{} {}", format_bar(pct, 100.0, 10), format_percentage(pct))
            }
            None => "unbudgeted".to_string(),
        };

        Self {
            category: summary.category.clone(),
            allocated: summary.allocated.format_with_symbol(symbol),
            spent: summary.spent.format_with_symbol(symbol),
            remaining: summary.remaining.format_with_symbol(symbol),
            progress,
        }
    }
}

/// Format the budgeting page
pub fn format_budgeting(view: &BudgetingView, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let summary = &view.summary;

    let mut output = heading(&format!(
        "Budget {} ({} to {})",
        view.period,
        settings.format_date(summary.start_date),
        settings.format_date(summary.end_date)
    ));
    output.push('\n');

    if view.categories.is_empty() {
        output.push_str("No budget or spending for this period.\n");
        return output;
    }

    output.push_str(&table(
        view.categories.iter().map(|c| CategoryRow::new(c, symbol)),
    ));
    output.push_str("\n\n");

    output.push_str(&format!(
        "Budgeted {}   Spent {}   Remaining {}   {}% used\n",
        summary.total_budgeted.format_with_symbol(symbol),
        summary.total_spent.format_with_symbol(symbol),
        summary.total_remaining.format_with_symbol(symbol),
        summary.percent_used
    ));

    if !view.over_budget.is_empty() {
        output.push_str(&format!("Over budget: {}\n", view.over_budget.join(", ")));
    }

    output
}

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Allocated")]
    amount: String,
}

/// Format a stored plan on its own
pub fn format_plan(plan: &BudgetPlan, period: &str, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = heading(&format!("Plan {}", period));

    if plan.is_empty() {
        output.push_str("No allocations.\n");
        return output;
    }

    output.push_str(&table(plan.iter().map(|a| AllocationRow {
        category: a.category.clone(),
        amount: a.amount.format_with_symbol(symbol),
    })));
    output.push_str(&format!("\nTotal {}\n", plan.total().format_with_symbol(symbol)));
    output
}
