//! Holding valuations as of a date
//!
//! Asset and liability records are dated snapshots of a holding's value. A
//! holding is identified by kind, category and description; its value on a
//! date is the latest snapshot taken on or before that date.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use super::allocation::GroupValue;
use super::numeric::validated_amount;
use crate::error::{PersonanceError, PersonanceResult};
use crate::models::{Money, Record, RecordId, RecordKind};

/// Value of one asset or liability on a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub kind: RecordKind,
    pub category: String,
    pub name: String,
    pub value: Money,
    pub last_updated: NaiveDate,
    /// Snapshot record the value came from
    #[serde(skip)]
    pub source: RecordId,
}

/// Assets, liabilities and their difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub net_worth: Money,
}

/// Holdings of one category, e.g. "Investments"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingGroup {
    pub name: String,
    pub total_value: Money,
    pub items: Vec<Holding>,
}

impl HoldingGroup {
    pub fn group_value(&self) -> GroupValue {
        GroupValue::new(self.name.clone(), self.total_value)
    }
}

/// Resolve every holding's value as of `as_of`.
///
/// Income and expense records are skipped. Valuation records are validated and
/// must not be negative. When two snapshots share a date the later one in
/// `records` wins. Holdings come out in first-seen order.
pub fn holdings_as_of(records: &[Record], as_of: NaiveDate) -> PersonanceResult<Vec<Holding>> {
    let mut holdings: Vec<Holding> = Vec::new();
    let mut index: HashMap<(RecordKind, &str, &str), usize> = HashMap::new();

    for record in records.iter().filter(|r| r.kind.is_valuation()) {
        let value = validated_amount(record)?;
        if value.is_negative() {
            return Err(PersonanceError::invalid_record(
                record.id,
                "valuation cannot be negative",
            ));
        }

        let date = record.date();
        if date > as_of {
            continue;
        }

        let category = record.category.trim();
        let key = (record.kind, category, record.description.trim());
        match index.get(&key) {
            Some(&slot) => {
                let holding = &mut holdings[slot];
                if date >= holding.last_updated {
                    holding.value = value;
                    holding.last_updated = date;
                    holding.source = record.id;
                }
            }
            None => {
                index.insert(key, holdings.len());
                holdings.push(Holding {
                    kind: record.kind,
                    category: category.to_string(),
                    name: record.label().trim().to_string(),
                    value,
                    last_updated: date,
                    source: record.id,
                });
            }
        }
    }

    Ok(holdings)
}

/// Total assets minus total liabilities.
///
/// Fails with the holding whose value pushes a total out of range.
pub fn net_worth(holdings: &[Holding]) -> PersonanceResult<NetWorthSummary> {
    let total_assets = checked_total(holdings, RecordKind::Asset)?;
    let total_liabilities = checked_total(holdings, RecordKind::Liability)?;

    Ok(NetWorthSummary {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
    })
}

fn checked_total(holdings: &[Holding], kind: RecordKind) -> PersonanceResult<Money> {
    let mut total = Money::zero();
    for holding in holdings.iter().filter(|h| h.kind == kind) {
        total = total.checked_add(holding.value).ok_or_else(|| {
            PersonanceError::invalid_record(holding.source, "valuations overflow the net worth total")
        })?;
    }
    Ok(total)
}

/// Group holdings of one kind by category, in first-seen order
pub fn group_holdings(holdings: &[Holding], kind: RecordKind) -> Vec<HoldingGroup> {
    let mut groups: Vec<HoldingGroup> = Vec::new();

    for holding in holdings.iter().filter(|h| h.kind == kind) {
        match groups.iter_mut().find(|g| g.name == holding.category) {
            Some(group) => {
                group.total_value = group.total_value.saturating_add(holding.value);
                group.items.push(holding.clone());
            }
            None => groups.push(HoldingGroup {
                name: holding.category.clone(),
                total_value: holding.value,
                items: vec![holding.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn snapshot(kind: RecordKind, category: &str, name: &str, value: f64, ymd: (i32, u32, u32)) -> Record {
        let ts = Utc.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 9, 0, 0).unwrap();
        Record::new(kind, category, value, ts).with_description(name)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records() -> Vec<Record> {
        vec![
            snapshot(RecordKind::Asset, "Investments", "Index Fund", 23000.0, (2025, 4, 15)),
            snapshot(RecordKind::Asset, "Cash", "Checking", 5000.0, (2025, 4, 15)),
            snapshot(RecordKind::Liability, "Loans", "Car Loan", 5500.0, (2025, 4, 15)),
            snapshot(RecordKind::Asset, "Investments", "Index Fund", 25000.0, (2025, 5, 16)),
            snapshot(RecordKind::Liability, "Loans", "Car Loan", 5000.0, (2025, 5, 1)),
            snapshot(RecordKind::Asset, "Investments", "Bond Fund", 5000.0, (2025, 5, 16)),
        ]
    }

    #[test]
    fn test_latest_snapshot_on_or_before_date_wins() {
        let april = holdings_as_of(&records(), date(2025, 4, 30)).unwrap();
        assert_eq!(april.len(), 3);
        assert_eq!(april[0].value, Money::from_dollars(23000));

        let may = holdings_as_of(&records(), date(2025, 5, 31)).unwrap();
        assert_eq!(may.len(), 4);
        assert_eq!(may[0].value, Money::from_dollars(25000));
        assert_eq!(may[0].last_updated, date(2025, 5, 16));
        assert_eq!(may[2].value, Money::from_dollars(5000));
    }

    #[test]
    fn test_net_worth() {
        let may = holdings_as_of(&records(), date(2025, 5, 31)).unwrap();
        let summary = net_worth(&may).unwrap();

        assert_eq!(summary.total_assets, Money::from_dollars(35000));
        assert_eq!(summary.total_liabilities, Money::from_dollars(5000));
        assert_eq!(summary.net_worth, Money::from_dollars(30000));
        assert_eq!(net_worth(&[]).unwrap(), NetWorthSummary::default());
    }

    #[test]
    fn test_group_holdings_first_seen_order() {
        let may = holdings_as_of(&records(), date(2025, 5, 31)).unwrap();
        let groups = group_holdings(&may, RecordKind::Asset);

        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Investments", "Cash"]);
        assert_eq!(groups[0].total_value, Money::from_dollars(30000));
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].group_value().total_value, Money::from_dollars(30000));
    }

    #[test]
    fn test_same_day_snapshot_later_record_wins() {
        let records = vec![
            snapshot(RecordKind::Asset, "Cash", "Savings", 100.0, (2025, 5, 1)),
            snapshot(RecordKind::Asset, "Cash", "Savings", 150.0, (2025, 5, 1)),
        ];
        let holdings = holdings_as_of(&records, date(2025, 5, 1)).unwrap();
        assert_eq!(holdings[0].value, Money::from_dollars(150));
    }

    #[test]
    fn test_overflowing_net_worth_is_invalid() {
        let records: Vec<_> = (0..110)
            .map(|i| {
                snapshot(
                    RecordKind::Asset,
                    "Investments",
                    &format!("Fund {i}"),
                    900_000_000_000_000.0,
                    (2025, 5, 1),
                )
            })
            .collect();
        let holdings = holdings_as_of(&records, date(2025, 5, 31)).unwrap();
        let err = net_worth(&holdings).unwrap_err();
        assert!(err.is_invalid_record());
        assert!(err.to_string().contains(&holdings[102].source.to_string()));
    }

    #[test]
    fn test_negative_valuation_is_invalid() {
        let records = vec![snapshot(RecordKind::Liability, "Cards", "Visa", -200.0, (2025, 5, 1))];
        assert!(holdings_as_of(&records, date(2025, 5, 31))
            .unwrap_err()
            .is_invalid_record());
    }
}
