//! Demo dataset
//!
//! One user's May 2025: a budget plan, a month of cash flow, and holding
//! valuations taken a year earlier, mid-April and during May.

use chrono::{DateTime, NaiveDate, Utc};

use super::RecordStore;
use crate::error::{PersonanceResult, RecordStoreError};
use crate::models::{BudgetPeriod, BudgetPlan, Money, Record, RecordKind, UserId};

/// The period the demo data is built around
pub fn demo_period() -> BudgetPeriod {
    BudgetPeriod::monthly(2025, 5)
}

const PLAN: &[(&str, i64)] = &[
    ("Housing", 1200),
    ("Food", 600),
    ("Transportation", 200),
    ("Entertainment", 300),
    ("Utilities", 250),
    ("Personal", 450),
];

type Row = (RecordKind, (i32, u32, u32), &'static str, &'static str, f64);

const CASH_FLOW: &[Row] = &[
    (RecordKind::Income, (2025, 5, 1), "Salary", "Police Officer Salary", 3000.0),
    (RecordKind::Income, (2025, 5, 15), "Interest/Dividends", "Index Fund Dividends", 120.0),
    (RecordKind::Expense, (2025, 5, 1), "Housing", "Mortgage Payment", -1200.0),
    (RecordKind::Expense, (2025, 5, 3), "Food", "Grocery Store", -50.68),
    (RecordKind::Expense, (2025, 5, 6), "Food", "Coffee Shop", -6.00),
    (RecordKind::Expense, (2025, 5, 8), "Transportation", "Gas Station", -120.0),
    (RecordKind::Expense, (2025, 5, 10), "Entertainment", "Concert Tickets", -180.0),
    (RecordKind::Expense, (2025, 5, 17), "Food", "Warehouse Club", -293.32),
];

const REAL_ESTATE: &str = "Real Estate";
const INVESTMENTS: &str = "Investments";
const CASH: &str = "Cash & Equivalents";

const VALUATIONS: &[Row] = &[
    // A year back
    (RecordKind::Asset, (2024, 5, 1), REAL_ESTATE, "Primary Home", 245000.0),
    (RecordKind::Asset, (2024, 5, 1), INVESTMENTS, "S&P 500 Index Fund", 18000.0),
    (RecordKind::Asset, (2024, 5, 1), INVESTMENTS, "Tech Stocks", 12000.0),
    (RecordKind::Asset, (2024, 5, 1), INVESTMENTS, "Bond Fund", 5000.0),
    (RecordKind::Asset, (2024, 5, 1), CASH, "Emergency Fund", 12000.0),
    (RecordKind::Asset, (2024, 5, 1), CASH, "Checking", 5000.0),
    (RecordKind::Asset, (2024, 5, 1), CASH, "High-Yield Savings", 14000.0),
    (RecordKind::Liability, (2024, 5, 1), "Home Mortgage", "Primary Mortgage", 180000.0),
    (RecordKind::Liability, (2024, 5, 1), "Car Loans", "Auto Loan", 10000.0),
    (RecordKind::Liability, (2024, 5, 1), "Credit Cards", "Visa", 2000.0),
    (RecordKind::Liability, (2024, 5, 1), "Retail Debt", "Store Card", 1000.0),
    // Previous month
    (RecordKind::Asset, (2025, 4, 15), REAL_ESTATE, "Primary Home", 250000.0),
    (RecordKind::Asset, (2025, 4, 15), INVESTMENTS, "S&P 500 Index Fund", 23000.0),
    (RecordKind::Asset, (2025, 4, 15), INVESTMENTS, "Tech Stocks", 14000.0),
    (RecordKind::Asset, (2025, 4, 15), INVESTMENTS, "Bond Fund", 5000.0),
    (RecordKind::Asset, (2025, 4, 15), CASH, "Emergency Fund", 15000.0),
    (RecordKind::Asset, (2025, 4, 15), CASH, "Checking", 5000.0),
    (RecordKind::Asset, (2025, 4, 15), CASH, "High-Yield Savings", 10000.0),
    (RecordKind::Liability, (2025, 4, 15), "Home Mortgage", "Primary Mortgage", 178000.0),
    (RecordKind::Liability, (2025, 4, 15), "Car Loans", "Auto Loan", 5500.0),
    (RecordKind::Liability, (2025, 4, 15), "Credit Cards", "Visa", 1000.0),
    (RecordKind::Liability, (2025, 4, 15), "Retail Debt", "Store Card", 1000.0),
    // This month
    (RecordKind::Liability, (2025, 5, 1), "Home Mortgage", "Primary Mortgage", 177000.0),
    (RecordKind::Liability, (2025, 5, 1), "Car Loans", "Auto Loan", 5000.0),
    (RecordKind::Liability, (2025, 5, 1), "Credit Cards", "Visa", 2000.0),
    (RecordKind::Asset, (2025, 5, 16), INVESTMENTS, "S&P 500 Index Fund", 25000.0),
    (RecordKind::Asset, (2025, 5, 16), INVESTMENTS, "Tech Stocks", 15000.0),
];

/// Write the demo plan and records for `user`, returning how many records were added
pub fn seed_demo(store: &dyn RecordStore, user: &UserId) -> PersonanceResult<usize> {
    let plan = BudgetPlan::from_pairs(
        PLAN.iter()
            .map(|(category, dollars)| (*category, Money::from_dollars(*dollars))),
    )?;
    store.save_budget_plan(user, &demo_period(), &plan)?;

    let mut count = 0;
    for (kind, (year, month, day), category, description, amount) in
        CASH_FLOW.iter().chain(VALUATIONS.iter())
    {
        let record = Record::new(*kind, *category, *amount, at_noon(*year, *month, *day)?)
            .with_description(*description);
        store.append_record(user, record)?;
        count += 1;
    }

    tracing::info!(%user, records = count, "seeded demo data");
    Ok(count)
}

fn at_noon(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, RecordStoreError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            RecordStoreError::corrupt(
                "demo data",
                format!("invalid date {:04}-{:02}-{:02}", year, month, day),
            )
        })
}
