//! Budget period representation
//!
//! Supports monthly, ISO-weekly and custom date-range periods, plus the
//! inclusive [`DateRange`] the record store is queried with.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Everything up to and including `end`
    pub fn through(end: NaiveDate) -> Self {
        Self {
            start: NaiveDate::MIN,
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Represents a budget period
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum BudgetPeriod {
    /// Monthly period (e.g., "2025-05")
    Monthly { year: i32, month: u32 },

    /// ISO week period (e.g., "2025-W19")
    Weekly { year: i32, week: u32 },

    /// Custom date range (e.g., "2025-05-01..2025-05-15")
    Custom { start: NaiveDate, end: NaiveDate },
}

impl BudgetPeriod {
    pub fn monthly(year: i32, month: u32) -> Self {
        Self::Monthly { year, month }
    }

    pub fn weekly(year: i32, week: u32) -> Self {
        Self::Weekly { year, week }
    }

    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Custom { start, end }
    }

    /// Get the current monthly period
    pub fn current_month() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::Monthly {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Get the current weekly period
    pub fn current_week() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::Weekly {
            year: today.iso_week().year(),
            week: today.iso_week().week(),
        }
    }

    /// Get the start date of this period
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Monthly { year, month } => {
                NaiveDate::from_ymd_opt(*year, *month, 1).unwrap_or(NaiveDate::MIN)
            }
            Self::Weekly { year, week } => NaiveDate::from_isoywd_opt(*year, *week, Weekday::Mon)
                .unwrap_or(NaiveDate::MIN),
            Self::Custom { start, .. } => *start,
        }
    }

    /// Get the end date of this period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Self::Monthly { .. } => self
                .start_date()
                .checked_add_months(Months::new(1))
                .map(|next| next - Duration::days(1))
                .unwrap_or(NaiveDate::MAX),
            Self::Weekly { year, week } => NaiveDate::from_isoywd_opt(*year, *week, Weekday::Sun)
                .unwrap_or_else(|| self.start_date() + Duration::days(6)),
            Self::Custom { end, .. } => *end,
        }
    }

    /// The inclusive date range covered by this period
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date(), self.end_date())
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.range().contains(date)
    }

    /// Get the next period
    pub fn next(&self) -> Self {
        match self {
            Self::Monthly { year, month } => {
                if *month == 12 {
                    Self::monthly(*year + 1, 1)
                } else {
                    Self::monthly(*year, *month + 1)
                }
            }
            Self::Weekly { year, week } => {
                if *week >= weeks_in_year(*year) {
                    Self::weekly(*year + 1, 1)
                } else {
                    Self::weekly(*year, *week + 1)
                }
            }
            Self::Custom { start, end } => {
                let duration = *end - *start;
                Self::Custom {
                    start: *end + Duration::days(1),
                    end: *end + duration + Duration::days(1),
                }
            }
        }
    }

    /// Get the previous period
    pub fn prev(&self) -> Self {
        match self {
            Self::Monthly { year, month } => {
                if *month == 1 {
                    Self::monthly(*year - 1, 12)
                } else {
                    Self::monthly(*year, *month - 1)
                }
            }
            Self::Weekly { year, week } => {
                if *week == 1 {
                    Self::weekly(*year - 1, weeks_in_year(*year - 1))
                } else {
                    Self::weekly(*year, *week - 1)
                }
            }
            Self::Custom { start, end } => {
                let duration = *end - *start;
                Self::Custom {
                    start: *start - duration - Duration::days(1),
                    end: *start - Duration::days(1),
                }
            }
        }
    }

    /// The same period one year earlier
    pub fn year_ago(&self) -> Self {
        match self {
            Self::Monthly { year, month } => Self::monthly(*year - 1, *month),
            Self::Weekly { year, week } => {
                Self::weekly(*year - 1, (*week).min(weeks_in_year(*year - 1)))
            }
            Self::Custom { start, end } => {
                let shift = |d: NaiveDate| d.checked_sub_months(Months::new(12)).unwrap_or(d);
                Self::Custom {
                    start: shift(*start),
                    end: shift(*end),
                }
            }
        }
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Monthly: "2025-05"
    /// - Weekly: "2025-W19"
    /// - Custom: "2025-05-01..2025-05-15"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let invalid = || PeriodParseError::InvalidFormat(s.to_string());

        if let Some((start, end)) = s.split_once("..") {
            let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").map_err(|_| invalid())?;
            let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").map_err(|_| invalid())?;
            if end < start {
                return Err(PeriodParseError::EmptyRange(s.to_string()));
            }
            return Ok(Self::Custom { start, end });
        }

        if let Some((year, week)) = s.split_once("-W") {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            let week: u32 = week.parse().map_err(|_| invalid())?;
            if week == 0 || week > weeks_in_year(year) {
                return Err(PeriodParseError::InvalidWeek(week));
            }
            return Ok(Self::Weekly { year, week });
        }

        if let Some((year, month)) = s.split_once('-') {
            let year: i32 = year.parse().map_err(|_| invalid())?;
            let month: u32 = month.parse().map_err(|_| invalid())?;
            if !(1..=12).contains(&month) {
                return Err(PeriodParseError::InvalidMonth(month));
            }
            return Ok(Self::Monthly { year, month });
        }

        Err(invalid())
    }
}

fn weeks_in_year(year: i32) -> u32 {
    // Dec 28 always falls in the last ISO week of its year
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|d| d.iso_week().week())
        .unwrap_or(52)
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Weekly { year, week } => write!(f, "{:04}-W{:02}", year, week),
            Self::Custom { start, end } => {
                write!(
                    f,
                    "{}..{}",
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d")
                )
            }
        }
    }
}

impl Ord for BudgetPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start_date()
            .cmp(&other.start_date())
            .then_with(|| self.end_date().cmp(&other.end_date()))
    }
}

impl PartialOrd for BudgetPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    InvalidWeek(u32),
    EmptyRange(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::InvalidWeek(w) => write!(f, "Invalid ISO week: {}", w),
            PeriodParseError::EmptyRange(s) => write!(f, "Range ends before it starts: {}", s),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_period() {
        let period = BudgetPeriod::monthly(2025, 5);
        assert_eq!(period.start_date(), date(2025, 5, 1));
        assert_eq!(period.end_date(), date(2025, 5, 31));

        let feb = BudgetPeriod::monthly(2024, 2);
        assert_eq!(feb.end_date(), date(2024, 2, 29));

        let dec = BudgetPeriod::monthly(2024, 12);
        assert_eq!(dec.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_monthly_navigation() {
        let jan = BudgetPeriod::monthly(2025, 1);
        assert_eq!(jan.next(), BudgetPeriod::monthly(2025, 2));
        assert_eq!(jan.prev(), BudgetPeriod::monthly(2024, 12));
        assert_eq!(
            BudgetPeriod::monthly(2024, 12).next(),
            BudgetPeriod::monthly(2025, 1)
        );
    }

    #[test]
    fn test_year_ago() {
        assert_eq!(
            BudgetPeriod::monthly(2025, 5).year_ago(),
            BudgetPeriod::monthly(2024, 5)
        );
        // 2020 has 53 ISO weeks, 2019 only 52
        assert_eq!(
            BudgetPeriod::weekly(2020, 53).year_ago(),
            BudgetPeriod::weekly(2019, 52)
        );
        let custom = BudgetPeriod::custom(date(2024, 2, 29), date(2024, 3, 10));
        assert_eq!(
            custom.year_ago(),
            BudgetPeriod::custom(date(2023, 2, 28), date(2023, 3, 10))
        );
    }

    #[test]
    fn test_weekly_period() {
        let period = BudgetPeriod::weekly(2025, 1);
        // ISO week 1 of 2025 starts on Monday December 30, 2024
        assert_eq!(period.start_date(), date(2024, 12, 30));
        assert_eq!(period.end_date(), date(2025, 1, 5));
        assert_eq!(period.prev(), BudgetPeriod::weekly(2024, 52));
    }

    #[test]
    fn test_contains() {
        let may = BudgetPeriod::monthly(2025, 5);
        assert!(may.contains(date(2025, 5, 15)));
        assert!(may.contains(date(2025, 5, 31)));
        assert!(!may.contains(date(2025, 6, 1)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            BudgetPeriod::parse("2025-05").unwrap(),
            BudgetPeriod::monthly(2025, 5)
        );
        assert_eq!(
            BudgetPeriod::parse("2025-W03").unwrap(),
            BudgetPeriod::weekly(2025, 3)
        );
        assert_eq!(
            BudgetPeriod::parse("2025-05-01..2025-05-15").unwrap(),
            BudgetPeriod::custom(date(2025, 5, 1), date(2025, 5, 15))
        );
        assert_eq!(
            BudgetPeriod::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(BudgetPeriod::parse("2025-05-15..2025-05-01").is_err());
        assert!(BudgetPeriod::parse("May").is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let periods = [
            BudgetPeriod::monthly(2025, 1),
            BudgetPeriod::weekly(2025, 3),
            BudgetPeriod::custom(date(2025, 5, 1), date(2025, 5, 15)),
        ];
        for period in periods {
            assert_eq!(BudgetPeriod::parse(&period.to_string()).unwrap(), period);
        }
    }

    #[test]
    fn test_date_range_through() {
        let range = DateRange::through(date(2025, 4, 30));
        assert!(range.contains(date(1999, 1, 1)));
        assert!(range.contains(date(2025, 4, 30)));
        assert!(!range.contains(date(2025, 5, 1)));
    }
}
