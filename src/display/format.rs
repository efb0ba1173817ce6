//! Formatting helpers shared by the summary renderers

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::summary::DeltaSummary;

/// Render rows as a rounded table with every column after the first right-aligned
pub fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 0.1 && pct != 0.0 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Money with the configured symbol; a dash for missing amounts
pub fn format_amount(amount: Option<Money>, symbol: &str) -> String {
    match amount {
        Some(amount) => amount.format_with_symbol(symbol),
        None => "-".to_string(),
    }
}

/// "+$3,500.00 (+2.56%)", or just the amount when there is no baseline
pub fn format_change(change: &DeltaSummary, symbol: &str) -> String {
    let sign = if change.absolute_change.is_positive() { "+" } else { "" };
    let amount = format!("{}{}", sign, change.absolute_change.format_with_symbol(symbol));

    match change.percent_change {
        Some(pct) => format!("{} ({}{:.2}%)", amount, if pct > 0.0 { "+" } else { "" }, pct),
        None => format!("{} (no prior value)", amount),
    }
}

/// Format a header line with a rule underneath
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "─".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::delta;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(62.0), "62%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);

        let over = format_bar(150.0, 100.0, 10);
        assert_eq!(over.chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn test_format_change() {
        let up = delta(Money::from_dollars(140_000), Money::from_dollars(136_500));
        assert_eq!(format_change(&up, "$"), "+$3,500.00 (+2.56%)");

        let from_nothing = delta(Money::from_dollars(10), Money::zero());
        assert_eq!(format_change(&from_nothing, "$"), "+$10.00 (no prior value)");

        let down = delta(Money::from_dollars(90), Money::from_dollars(100));
        assert_eq!(format_change(&down, "$"), "-$10.00 (-10.00%)");
    }

    #[test]
    fn test_table_alignment() {
        #[derive(Tabled)]
        struct Row {
            name: &'static str,
            value: &'static str,
        }

        let out = table([
            Row { name: "a", value: "1" },
            Row { name: "b", value: "100" },
        ]);
        assert!(out.contains("╭"));
        assert!(out.contains("│ a    │     1 │"));
    }
}
