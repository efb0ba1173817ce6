//! Record list rendering

use tabled::Tabled;

use super::format::table;
use crate::config::Settings;
use crate::models::Record;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format records as a table, oldest first
pub fn format_record_list(records: &[Record], settings: &Settings) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = table(records.iter().map(|r| RecordRow {
        date: settings.format_date(r.date()),
        kind: r.kind.to_string(),
        category: r.category.clone(),
        description: r.description.clone(),
        amount: format!("{:.2}", r.amount),
        id: r.id.to_string(),
    }));
    output.push_str(&format!("\n{} record(s)\n", records.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordKind;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_record_list() {
        let ts = Utc.with_ymd_and_hms(2025, 5, 3, 12, 0, 0).unwrap();
        let records = vec![
            Record::new(RecordKind::Expense, "Food", -50.68, ts).with_description("Grocery Store"),
        ];

        let out = format_record_list(&records, &Settings::default());
        assert!(out.contains("May 03, 2025"));
        assert!(out.contains("expense"));
        assert!(out.contains("-50.68"));
        assert!(out.contains("1 record(s)"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_record_list(&[], &Settings::default()), "No records found.\n");
    }
}
