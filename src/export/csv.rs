//! CSV export of summary views
//!
//! Each page flattens to one table. Amounts are written as decimal strings.

use serde::Serialize;
use std::io::Write;

use crate::error::{PersonanceError, PersonanceResult};
use crate::models::{Money, RecordKind};
use crate::summary::{BudgetingView, DashboardView, WealthView};

/// A view that flattens to CSV rows
pub trait CsvExport {
    fn write_csv<W: Write>(&self, writer: W) -> PersonanceResult<()>;
}

fn decimal(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, amount.dollars().abs(), amount.cents_part())
}

fn write_rows<W, R, I>(writer: W, rows: I) -> PersonanceResult<()>
where
    W: Write,
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| PersonanceError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| PersonanceError::Export(e.to_string()))
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    category: &'a str,
    allocated: String,
    spent: String,
    remaining: String,
    progress_ratio: Option<f64>,
}

impl CsvExport for BudgetingView {
    fn write_csv<W: Write>(&self, writer: W) -> PersonanceResult<()> {
        write_rows(
            writer,
            self.categories.iter().map(|c| CategoryRow {
                category: &c.category,
                allocated: decimal(c.allocated),
                spent: decimal(c.spent),
                remaining: decimal(c.remaining),
                progress_ratio: c.progress_ratio,
            }),
        )
    }
}

#[derive(Serialize)]
struct HoldingRow<'a> {
    kind: RecordKind,
    group: &'a str,
    name: &'a str,
    value: String,
    last_updated: String,
    percent_of_assets: Option<f64>,
}

impl CsvExport for WealthView {
    fn write_csv<W: Write>(&self, writer: W) -> PersonanceResult<()> {
        let assets = self.asset_groups.iter().flat_map(|group| {
            let share = self
                .allocation
                .iter()
                .find(|a| a.group_name == group.name)
                .map(|a| a.percent_of_total);
            group.items.iter().map(move |h| (h, share))
        });
        let liabilities = self.liabilities.iter().map(|h| (h, None));

        write_rows(
            writer,
            assets.chain(liabilities).map(|(h, share)| HoldingRow {
                kind: h.kind,
                group: &h.category,
                name: &h.name,
                value: decimal(h.value),
                last_updated: h.last_updated.to_string(),
                percent_of_assets: share,
            }),
        )
    }
}

#[derive(Serialize)]
struct CashFlowRow<'a> {
    section: &'static str,
    name: &'a str,
    amount: Option<String>,
}

impl CsvExport for DashboardView {
    fn write_csv<W: Write>(&self, writer: W) -> PersonanceResult<()> {
        let mut rows: Vec<CashFlowRow<'_>> = Vec::new();
        for item in &self.income {
            rows.push(CashFlowRow {
                section: "income",
                name: &item.name,
                amount: item.amount.map(decimal),
            });
        }
        for item in &self.expenses {
            rows.push(CashFlowRow {
                section: "expense",
                name: &item.name,
                amount: item.amount.map(decimal),
            });
        }
        for (name, amount) in [
            ("Total income", self.total_income),
            ("Total expenses", self.total_expenses),
            ("Cash flow", self.cash_flow),
            ("Passive income", self.passive_income),
        ] {
            rows.push(CashFlowRow {
                section: "total",
                name,
                amount: Some(decimal(amount)),
            });
        }
        for holding in &self.liabilities {
            rows.push(CashFlowRow {
                section: "debt",
                name: &holding.name,
                amount: Some(decimal(holding.value)),
            });
        }

        write_rows(writer, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::SummaryService;
    use crate::storage::{demo_period, seed_demo, MemoryRecordStore};

    fn demo() -> (MemoryRecordStore, Settings) {
        let store = MemoryRecordStore::in_memory();
        seed_demo(&store, &"demo".into()).unwrap();
        (store, Settings::default())
    }

    fn render<V: CsvExport>(view: &V) -> String {
        let mut buffer = Vec::new();
        view.write_csv(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_decimal() {
        assert_eq!(decimal(Money::from_cents(129332)), "1293.32");
        assert_eq!(decimal(Money::from_cents(-5)), "-0.05");
    }

    #[test]
    fn test_budgeting_csv() {
        let (store, settings) = demo();
        let view = SummaryService::new(&store, &settings)
            .budgeting(&"demo".into(), &demo_period())
            .unwrap();

        let text = render(&view);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("category,allocated,spent,remaining,progress_ratio")
        );
        assert_eq!(lines.next(), Some("Housing,1200.00,1200.00,0.00,1.0"));
    }

    #[test]
    fn test_wealth_csv() {
        let (store, settings) = demo();
        let view = SummaryService::new(&store, &settings)
            .wealth(&"demo".into(), &demo_period())
            .unwrap();

        let text = render(&view);
        assert!(text.starts_with("kind,group,name,value,last_updated,percent_of_assets"));
        assert!(text.contains("asset,Real Estate,Primary Home,250000.00,2025-04-15,"));
        assert!(text.contains("liability,Home Mortgage,Primary Mortgage,177000.00,2025-05-01,\n"));
    }

    #[test]
    fn test_dashboard_csv() {
        let (store, settings) = demo();
        let view = SummaryService::new(&store, &settings)
            .dashboard(&"demo".into(), &demo_period())
            .unwrap();

        let text = render(&view);
        assert!(text.contains("income,Real Estate/Business,\n"));
        assert!(text.contains("total,Cash flow,1270.00"));
    }
}
