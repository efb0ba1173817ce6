//! YAML export of summary views

use serde::Serialize;
use std::io::Write;

use super::json::ViewExport;
use crate::error::{PersonanceError, PersonanceResult};

/// Write a view as YAML, preceded by a comment header
pub fn export_yaml<V, W>(page: &'static str, view: &V, writer: &mut W) -> PersonanceResult<()>
where
    V: Serialize,
    W: Write,
{
    let export = ViewExport::new(page, view);
    let io_err = |e: std::io::Error| PersonanceError::Export(e.to_string());

    writeln!(writer, "# Personance {} summary", page).map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.generated_at).map_err(io_err)?;
    writeln!(writer, "# Amounts are in cents").map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PersonanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::summary::{compose, GroupValue};

    #[test]
    fn test_export_yaml() {
        let breakdown = compose(&[
            GroupValue::new("Real Estate", Money::from_dollars(250_000)),
            GroupValue::new("Investments", Money::from_dollars(45_000)),
        ]);

        let mut buffer = Vec::new();
        export_yaml("wealth", &breakdown, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Personance wealth summary"));
        assert!(text.contains("groupName: Real Estate"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed["data"][1]["totalValue"].as_i64(), Some(4_500_000));
    }
}
