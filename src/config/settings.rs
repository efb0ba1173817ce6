//! User settings for Personance
//!
//! Settings live in `config.json` under the base directory. Every field has a
//! serde default so older files keep loading as fields are added.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::PersonancePaths;
use crate::error::PersonanceError;
use crate::models::{BudgetPeriod, Money, UserId};

/// Environment variable selecting the record store adapter
pub const STORE_ENV: &str = "PERSONANCE_STORE";

/// Which record store adapter to open at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// JSON files in the data directory (default)
    #[default]
    Json,
    /// CSV files in the data directory
    Csv,
    /// Process-local store, nothing persisted
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = PersonanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(PersonanceError::Config(format!(
                "Unknown store backend '{}' (expected json, csv or memory)",
                other
            ))),
        }
    }
}

/// Budget period type preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriodType {
    #[default]
    Monthly,
    Weekly,
}

/// Progress-bar denominators shown on the dashboard and wealth views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goals {
    /// Monthly passive income needed to cover expenses
    #[serde(default = "default_passive_income_target")]
    pub passive_income_target: Money,

    /// Financial-independence net worth target
    #[serde(default = "default_net_worth_target")]
    pub net_worth_target: Option<Money>,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            passive_income_target: default_passive_income_target(),
            net_worth_target: default_net_worth_target(),
        }
    }
}

/// User settings for Personance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Record store adapter
    #[serde(default)]
    pub store_backend: StoreBackend,

    #[serde(default)]
    pub budget_period_type: BudgetPeriodType,

    /// User summarised when `--user` is not given
    #[serde(default = "default_user")]
    pub default_user: String,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub goals: Goals,

    /// Income categories counted as passive income
    #[serde(default = "default_passive_income_categories")]
    pub passive_income_categories: Vec<String>,

    /// How many recent transactions the dashboard lists
    #[serde(default = "default_recent_limit")]
    pub recent_transactions_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_user() -> String {
    "me".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Format a date, or `None` when the strftime string is invalid for dates
fn try_format_date(date: NaiveDate, format: &str) -> Option<String> {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

fn default_passive_income_target() -> Money {
    Money::from_dollars(2000)
}

fn default_net_worth_target() -> Option<Money> {
    Some(Money::from_dollars(400_000))
}

fn default_passive_income_categories() -> Vec<String> {
    vec![
        "Interest/Dividends".to_string(),
        "Real Estate/Business".to_string(),
    ]
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            store_backend: StoreBackend::default(),
            budget_period_type: BudgetPeriodType::default(),
            default_user: default_user(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            goals: Goals::default(),
            passive_income_categories: default_passive_income_categories(),
            recent_transactions_limit: default_recent_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PersonancePaths) -> Result<Self, PersonanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PersonanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PersonanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PersonancePaths) -> Result<(), PersonanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PersonanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            PersonanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject values that would fail later, when a page is rendered
    pub fn validate(&self) -> Result<(), PersonanceError> {
        let sample = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap_or_default();
        if try_format_date(sample, &self.date_format).is_none() {
            return Err(PersonanceError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Format a date with `date_format`, falling back to the default format
    /// when it is invalid
    pub fn format_date(&self, date: NaiveDate) -> String {
        try_format_date(date, &self.date_format)
            .unwrap_or_else(|| date.format(DEFAULT_DATE_FORMAT).to_string())
    }

    /// Store adapter to open: `PERSONANCE_STORE` wins over the settings file
    pub fn resolve_store_backend(&self) -> Result<StoreBackend, PersonanceError> {
        match std::env::var(STORE_ENV) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(self.store_backend),
        }
    }

    /// The period summaries default to when none is given
    pub fn current_period(&self) -> BudgetPeriod {
        match self.budget_period_type {
            BudgetPeriodType::Monthly => BudgetPeriod::current_month(),
            BudgetPeriodType::Weekly => BudgetPeriod::current_week(),
        }
    }

    pub fn default_user_id(&self) -> UserId {
        UserId::new(self.default_user.clone())
    }

    /// Whether an income category counts toward passive income
    pub fn is_passive_income(&self, category: &str) -> bool {
        self.passive_income_categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }
}
