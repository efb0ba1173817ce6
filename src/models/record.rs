//! Financial records
//!
//! A record is an immutable fact handed over by the record store. Income and
//! expense records carry a signed cash amount; asset and liability records
//! carry the unsigned value of a holding on the record's date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::RecordId;

/// What a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
    Asset,
    Liability,
}

impl RecordKind {
    /// Income and expense records are cash flows within a period
    pub fn is_cash_flow(&self) -> bool {
        matches!(self, Self::Income | Self::Expense)
    }

    /// Asset and liability records are dated valuations of a holding
    pub fn is_valuation(&self) -> bool {
        matches!(self, Self::Asset | Self::Liability)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Asset => write!(f, "asset"),
            Self::Liability => write!(f, "liability"),
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "asset" => Ok(Self::Asset),
            "liability" | "debt" => Ok(Self::Liability),
            other => Err(format!("Unknown record kind: {}", other)),
        }
    }
}

/// A single financial record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,

    /// Budget category or asset/liability group name
    pub category: String,

    /// Signed for income (+) and expense (-); magnitude for asset/liability
    pub amount: f64,

    pub kind: RecordKind,

    pub timestamp: DateTime<Utc>,

    /// Income source, holding name, or payee
    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a new record with a fresh ID
    pub fn new(
        kind: RecordKind,
        category: impl Into<String>,
        amount: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            category: category.into(),
            amount,
            kind,
            timestamp,
            description: String::new(),
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Calendar date of the record
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Display name: the description when present, otherwise the category
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.category
        } else {
            &self.description
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_kind_parse() {
        assert_eq!("Income".parse::<RecordKind>().unwrap(), RecordKind::Income);
        assert_eq!("debt".parse::<RecordKind>().unwrap(), RecordKind::Liability);
        assert!("transfer".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_kind_classification() {
        assert!(RecordKind::Expense.is_cash_flow());
        assert!(!RecordKind::Expense.is_valuation());
        assert!(RecordKind::Asset.is_valuation());
    }

    #[test]
    fn test_label_falls_back_to_category() {
        let ts = Utc.with_ymd_and_hms(2025, 5, 16, 0, 0, 0).unwrap();
        let record = Record::new(RecordKind::Asset, "Investments", 25000.0, ts);
        assert_eq!(record.label(), "Investments");

        let record = record.with_description("S&P 500 Index Fund");
        assert_eq!(record.label(), "S&P 500 Index Fund");
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2025, 5, 16).unwrap());
    }

    #[test]
    fn test_serialization_defaults_description() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "category": "Food",
            "amount": -50.68,
            "kind": "expense",
            "timestamp": "2025-05-10T12:00:00Z"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, RecordKind::Expense);
        assert_eq!(record.amount, -50.68);
        assert!(record.description.is_empty());
    }
}
