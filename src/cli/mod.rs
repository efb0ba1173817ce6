//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers receive a
//! [`CliContext`] holding the resolved paths, settings, store and user.

pub mod budget;
pub mod record;
pub mod setup;
pub mod summary;

pub use budget::{handle_budget_command, BudgetCommands};
pub use record::{handle_record_command, RecordCommands};
pub use setup::{handle_config, handle_init};
pub use summary::{handle_dashboard, handle_wealth};

use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::{PersonancePaths, Settings};
use crate::error::{PersonanceError, PersonanceResult};
use crate::export::{export_view, CsvExport, OutputFormat};
use crate::models::{BudgetPeriod, UserId};
use crate::storage::RecordStore;

/// Everything a command needs, resolved once in `main`
pub struct CliContext {
    pub paths: PersonancePaths,
    pub settings: Settings,
    pub store: Box<dyn RecordStore>,
    pub user: UserId,
}

/// Options shared by the summary pages
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Period (e.g. "2025-05", "2025-W19", "2025-05-01..2025-05-15", "current", "last")
    #[arg(short, long)]
    pub period: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse a period argument, defaulting to the current period
pub fn parse_period(arg: Option<&str>, settings: &Settings) -> PersonanceResult<BudgetPeriod> {
    let current = settings.current_period();

    match arg.map(str::trim) {
        None | Some("current") => Ok(current),
        Some("last") | Some("prev") => Ok(current.prev()),
        Some("next") => Ok(current.next()),
        Some(other) => BudgetPeriod::parse(other)
            .map_err(|e| PersonanceError::Validation(format!("Invalid period: {}", e))),
    }
}

/// Write a view to stdout or `args.output`, as tables or an export format
pub fn emit_view<V>(
    page: &'static str,
    view: &V,
    args: &ViewArgs,
    render: impl FnOnce(&V) -> String,
) -> PersonanceResult<()>
where
    V: Serialize + CsvExport,
{
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            PersonanceError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Terminal => write!(out, "{}", render(view))?,
        format => export_view(page, view, format, &mut out)?,
    }
    out.flush()?;
    drop(out);

    if let Some(path) = &args.output {
        println!("Wrote {} {} to {}", page, args.format, path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period() {
        let settings = Settings::default();
        let current = settings.current_period();

        assert_eq!(parse_period(None, &settings).unwrap(), current);
        assert_eq!(parse_period(Some("last"), &settings).unwrap(), current.prev());
        assert_eq!(
            parse_period(Some("2025-05"), &settings).unwrap(),
            BudgetPeriod::monthly(2025, 5)
        );
        assert!(parse_period(Some("2025-13"), &settings)
            .unwrap_err()
            .is_validation());
    }
}
