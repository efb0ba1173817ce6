//! JSON export of summary views

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{PersonanceError, PersonanceResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A view wrapped with export metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewExport<'a, V: Serialize> {
    pub schema_version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub app_version: &'static str,
    /// "budgeting", "wealth" or "dashboard"
    pub page: &'static str,
    pub data: &'a V,
}

impl<'a, V: Serialize> ViewExport<'a, V> {
    pub fn new(page: &'static str, data: &'a V) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            page,
            data,
        }
    }
}

/// Write a view as pretty-printed JSON
pub fn export_json<V, W>(page: &'static str, view: &V, writer: &mut W) -> PersonanceResult<()>
where
    V: Serialize,
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, &ViewExport::new(page, view))
        .map_err(|e| PersonanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PersonanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::summary::{delta, CategorySummary};

    #[test]
    fn test_export_json_envelope() {
        let view = delta(Money::from_dollars(140_000), Money::zero());
        let mut buffer = Vec::new();
        export_json("wealth", &view, &mut buffer).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["schemaVersion"], EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed["page"], "wealth");
        assert_eq!(parsed["data"]["currentValue"], 14_000_000);
        assert!(parsed["data"]["percentChange"].is_null());
    }

    #[test]
    fn test_unallocated_ratio_is_null() {
        let summary = CategorySummary::new("Dining", Money::zero(), Money::from_dollars(45));
        let mut buffer = Vec::new();
        export_json("budgeting", &vec![summary], &mut buffer).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(parsed["data"][0]["progressRatio"].is_null());
        assert_eq!(parsed["data"][0]["remaining"], -4500);
    }
}
