//! Wealth page rendering

use tabled::Tabled;

use super::format::{format_bar, format_change, format_percentage, heading, table};
use crate::config::Settings;
use crate::summary::{Holding, WealthView};

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl HoldingRow {
    fn new(holding: &Holding, settings: &Settings) -> Self {
        Self {
            name: holding.name.clone(),
            category: holding.category.clone(),
            value: holding.value.format_with_symbol(&settings.currency_symbol),
            updated: settings.format_date(holding.last_updated),
        }
    }
}

/// Format the wealth page
pub fn format_wealth(view: &WealthView, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let worth = &view.net_worth;

    let mut output = heading(&format!(
        "Net worth as of {}",
        settings.format_date(view.as_of)
    ));
    output.push_str(&format!(
        "Assets       {}\nLiabilities  {}\nNet worth    {}\n\n",
        worth.total_assets.format_with_symbol(symbol),
        worth.total_liabilities.format_with_symbol(symbol),
        worth.net_worth.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Since last period  {}\nSince last year    {}\n",
        format_change(&view.period_change, symbol),
        format_change(&view.yearly_change, symbol)
    ));

    if let (Some(target), Some(progress)) = (view.independence_target, view.independence_progress) {
        output.push_str(&format!(
            "Independence       {} {} of {}\n",
            format_bar(progress, 100.0, 20),
            format_percentage(progress),
            target.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    output.push_str(&heading("Asset allocation"));
    if view.allocation.is_empty() {
        output.push_str("No assets recorded.\n");
    } else {
        output.push_str(&table(view.allocation.iter().map(|a| AllocationRow {
            group: a.group_name.clone(),
            value: a.total_value.format_with_symbol(symbol),
            share: format!(
                "{} {:.2}%",
                format_bar(a.percent_of_total, 100.0, 10),
                a.percent_of_total
            ),
        })));
        output.push('\n');
    }

    let holdings: Vec<&Holding> = view.asset_groups.iter().flat_map(|g| &g.items).collect();
    if !holdings.is_empty() {
        output.push('\n');
        output.push_str(&heading("Assets"));
        output.push_str(&table(holdings.into_iter().map(|h| HoldingRow::new(h, settings))));
        output.push('\n');
    }

    if !view.liabilities.is_empty() {
        output.push('\n');
        output.push_str(&heading("Liabilities"));
        output.push_str(&table(view.liabilities.iter().map(|h| HoldingRow::new(h, settings))));
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
    fn test_format_wealth_demo() {
        let store = MemoryRecordStore::in_memory();
        let user = "demo".into();
        seed_demo(&store, &user).unwrap();
        let settings = Settings::default();
        let view = SummaryService::new(&store, &settings)
            .wealth(&user, &demo_period())
            .unwrap();

        let out = format_wealth(&view, &settings);
        assert!(out.starts_with("Net worth as of May 31, 2025"));
        assert!(out.contains("Net worth    $140,000.00"));
        assert!(out.contains("+$3,500.00 (+2.56%)"));
        assert!(out.contains("+$22,000.00 (+18.64%)"));
        assert!(out.contains("76.92%"));
        assert!(out.contains("Primary Mortgage"));
    }
}
