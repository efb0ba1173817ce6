//! Export of summary views
//!
//! - JSON: the view wrapped with schema metadata
//! - YAML: the same document with a comment header
//! - CSV: one flattened table per page

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::io::Write;

pub use self::csv::CsvExport;
pub use json::{export_json, ViewExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use crate::error::{PersonanceError, PersonanceResult};

/// How a view is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Text tables for the terminal
    #[default]
    Terminal,
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => write!(f, "terminal"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Write a view in a machine-readable format
pub fn export_view<V, W>(
    page: &'static str,
    view: &V,
    format: OutputFormat,
    writer: &mut W,
) -> PersonanceResult<()>
where
    V: Serialize + CsvExport,
    W: Write,
{
    match format {
        OutputFormat::Json => export_json(page, view, writer),
        OutputFormat::Yaml => export_yaml(page, view, writer),
        OutputFormat::Csv => view.write_csv(writer),
        OutputFormat::Terminal => Err(PersonanceError::Export(
            "terminal output is rendered as tables, not exported".into(),
        )),
    }
}
