//! Record service
//!
//! Validates records before they reach the store, so a summary never trips
//! over something entered through this crate.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{PersonanceError, PersonanceResult};
use crate::models::{DateRange, Record, RecordKind, UserId};
use crate::storage::RecordStore;
use crate::summary::numeric::validated_amount;

/// Input for a new record. Amounts are entered as magnitudes; the sign is
/// derived from the kind.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub kind: RecordKind,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
}

pub struct RecordService<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> RecordService<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Validate and store a record
    pub fn add(&self, user: &UserId, input: NewRecord) -> PersonanceResult<Record> {
        if input.amount < 0.0 {
            return Err(PersonanceError::Validation(format!(
                "Amount must not be negative: {}",
                input.amount
            )));
        }

        let amount = match input.kind {
            RecordKind::Expense => -input.amount,
            _ => input.amount,
        };
        let timestamp = at_noon(input.date)?;
        let record = Record::new(input.kind, input.category.trim(), amount, timestamp)
            .with_description(input.description.trim());

        validated_amount(&record).map_err(|e| PersonanceError::Validation(e.to_string()))?;

        self.store.append_record(user, record.clone())?;
        tracing::info!(%user, record = %record.id, kind = %record.kind, "added record");
        Ok(record)
    }

    /// Records within `range`, optionally of one kind, oldest first
    pub fn list(
        &self,
        user: &UserId,
        range: &DateRange,
        kind: Option<RecordKind>,
    ) -> PersonanceResult<Vec<Record>> {
        let records = self.store.fetch_records(user, range)?;
        Ok(match kind {
            Some(kind) => records.into_iter().filter(|r| r.kind == kind).collect(),
            None => records,
        })
    }
}

fn at_noon(date: NaiveDate) -> PersonanceResult<DateTime<Utc>> {
    date.and_hms_opt(12, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| PersonanceError::Validation(format!("Invalid date: {}", date)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetPeriod;
    use crate::storage::MemoryRecordStore;

    fn input(kind: RecordKind, category: &str, amount: f64) -> NewRecord {
        NewRecord {
            kind,
            category: category.to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
            description: " Farmers Market ".to_string(),
        }
    }

    #[test]
    fn test_expense_is_stored_negative() {
        let store = MemoryRecordStore::in_memory();
        let service = RecordService::new(&store);
        let user = UserId::new("alice");

        let record = service
            .add(&user, input(RecordKind::Expense, " Food ", 42.5))
            .unwrap();
        assert_eq!(record.amount, -42.5);
        assert_eq!(record.category, "Food");
        assert_eq!(record.description, "Farmers Market");

        let listed = service
            .list(&user, &BudgetPeriod::monthly(2025, 5).range(), None)
            .unwrap();
        assert_eq!(listed, vec![record]);
    }

    #[test]
    fn test_rejects_bad_input() {
        let store = MemoryRecordStore::in_memory();
        let service = RecordService::new(&store);
        let user = UserId::new("alice");

        assert!(service
            .add(&user, input(RecordKind::Income, "Salary", -1.0))
            .unwrap_err()
            .is_validation());
        assert!(service
            .add(&user, input(RecordKind::Income, "  ", 1.0))
            .unwrap_err()
            .is_validation());
        assert!(service
            .add(&user, input(RecordKind::Asset, "Cash", f64::INFINITY))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_list_by_kind() {
        let store = MemoryRecordStore::in_memory();
        let service = RecordService::new(&store);
        let user = UserId::new("alice");

        service.add(&user, input(RecordKind::Income, "Salary", 3000.0)).unwrap();
        service.add(&user, input(RecordKind::Expense, "Food", 20.0)).unwrap();

        let range = BudgetPeriod::monthly(2025, 5).range();
        let income = service.list(&user, &range, Some(RecordKind::Income)).unwrap();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].category, "Salary");
    }
}
