//! Dashboard page rendering

use tabled::Tabled;

use super::format::{format_amount, format_bar, format_percentage, heading, table};
use crate::config::Settings;
use crate::summary::{DashboardView, LineItem};

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Source")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct RecentRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn line_rows<'a>(items: &'a [LineItem], symbol: &'a str) -> impl Iterator<Item = LineRow> + 'a {
    items.iter().map(move |item| LineRow {
        name: item.name.clone(),
        amount: format_amount(item.amount, symbol),
    })
}

/// Format the dashboard page
pub fn format_dashboard(view: &DashboardView, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = heading(&format!("Dashboard {}", view.period));

    output.push_str(&format!(
        "Income {}   Expenses {}   Cash flow {}\n\n",
        view.total_income.format_with_symbol(symbol),
        view.total_expenses.format_with_symbol(symbol),
        view.cash_flow.format_with_symbol(symbol)
    ));

    output.push_str(&heading("Income"));
    output.push_str(&table(line_rows(&view.income, symbol)));
    output.push_str("\n\n");

    output.push_str(&heading("Expenses"));
    if view.expenses.is_empty() {
        output.push_str("No expenses recorded.\n");
    } else {
        output.push_str(&table(line_rows(&view.expenses, symbol)));
        output.push('\n');
    }
    output.push('\n');

    output.push_str(&format!(
        "Passive income {} of {} {} {}\n\n",
        view.passive_income.format_with_symbol(symbol),
        view.passive_income_target.format_with_symbol(symbol),
        format_bar(view.passive_income_progress, 100.0, 20),
        format_percentage(view.passive_income_progress)
    ));

    if !view.liabilities.is_empty() {
        output.push_str(&heading("Debts"));
        output.push_str(&table(view.liabilities.iter().map(|h| LineRow {
            name: h.name.clone(),
            amount: h.value.format_with_symbol(symbol),
        })));
        output.push_str("\n\n");
    }

    output.push_str(&heading("Recent transactions"));
    if view.recent.is_empty() {
        output.push_str("No transactions this period.\n");
    } else {
        output.push_str(&table(view.recent.iter().map(|t| RecentRow {
            date: settings.format_date(t.date),
            description: t.description.clone(),
            category: t.category.clone(),
            amount: t.amount.format_with_symbol(symbol),
        })));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SummaryService;
    use crate::storage::{demo_period, seed_demo, MemoryRecordStore};

    #[test]
    fn test_format_dashboard_demo() {
        let store = MemoryRecordStore::in_memory();
        let user = "demo".into();
        seed_demo(&store, &user).unwrap();
        let settings = Settings::default();
        let view = SummaryService::new(&store, &settings)
            .dashboard(&user, &demo_period())
            .unwrap();

        let out = format_dashboard(&view, &settings);
        assert!(out.starts_with("Dashboard 2025-05"));
        assert!(out.contains("Cash flow $1,270.00"));
        assert!(out.contains("Real Estate/Business"));
        assert!(out.contains("Passive income $120.00 of $2,000.00"));
        assert!(out.contains("Warehouse Club"));
        assert!(out.contains("-$293.32"));
    }
}
