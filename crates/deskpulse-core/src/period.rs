//! Period identifiers and ISO calendar arithmetic

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

/// A reporting period at one of three granularities.
///
/// Days and weeks are primary; a month is derived from the week containing
/// it (a week belongs to the month of its Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodId {
    Day(NaiveDate),
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl PeriodId {
    /// Canonical storage key: `YYYY-MM-DD`, `YYYY-Www` or `YYYY-MM`.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// First calendar day of the period.
    pub fn start_date(&self) -> NaiveDate {
        match *self {
            PeriodId::Day(date) => date,
            PeriodId::Week { year, week } => iso_week_monday(year, week),
            PeriodId::Month { year, month } => first_of_month(year, month),
        }
    }

    /// Last calendar day of the period (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        match *self {
            PeriodId::Day(date) => date,
            PeriodId::Week { year, week } => iso_week_monday(year, week) + Duration::days(6),
            PeriodId::Month { year, month } => {
                let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
                first_of_month(ny, nm) - Duration::days(1)
            }
        }
    }

    /// The `YYYY-MM` key of the month this period belongs to.
    ///
    /// A week spanning a month boundary is attributed to the month containing
    /// its Monday, never its Sunday.
    pub fn month_key(&self) -> String {
        match *self {
            PeriodId::Day(date) => format!("{:04}-{:02}", date.year(), date.month()),
            PeriodId::Week { year, week } => week_to_month(year, week),
            PeriodId::Month { year, month } => format!("{year:04}-{month:02}"),
        }
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PeriodId::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            PeriodId::Week { year, week } => write!(f, "{year:04}-W{week:02}"),
            PeriodId::Month { year, month } => write!(f, "{year:04}-{month:02}"),
        }
    }
}

/// A string that is not a canonical period key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a period identifier: {0:?}")]
pub struct ParsePeriodError(pub String);

impl FromStr for PeriodId {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePeriodError(s.to_string());

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            // Reject non-canonical spellings like 2026-1-2.
            if date.format("%Y-%m-%d").to_string() == s {
                return Ok(PeriodId::Day(date));
            }
            return Err(err());
        }

        let (year_part, rest) = s.split_once('-').ok_or_else(err)?;
        if year_part.len() != 4 {
            return Err(err());
        }
        let year: i32 = year_part.parse().map_err(|_| err())?;

        if let Some(week_part) = rest.strip_prefix('W') {
            if week_part.len() != 2 {
                return Err(err());
            }
            let week: u32 = week_part.parse().map_err(|_| err())?;
            if !(1..=53).contains(&week) {
                return Err(err());
            }
            return Ok(PeriodId::Week { year, week });
        }

        if rest.len() == 2 {
            let month: u32 = rest.parse().map_err(|_| err())?;
            if (1..=12).contains(&month) {
                return Ok(PeriodId::Month { year, month });
            }
        }

        Err(err())
    }
}

/// Monday of ISO week `week` in ISO year `year`.
///
/// January 4th is always inside ISO week 1, so week 1's Monday is Jan 4 minus
/// its weekday offset; every other week is a whole number of weeks later.
pub fn iso_week_monday(year: i32, week: u32) -> NaiveDate {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).expect("Jan 4 exists in every year");
    let monday_w1 = jan4 - Duration::days(jan4.weekday().num_days_from_monday() as i64);
    monday_w1 + Duration::weeks(i64::from(week) - 1)
}

/// Sunday closing ISO week `week` in ISO year `year`.
pub fn week_sunday(year: i32, week: u32) -> NaiveDate {
    iso_week_monday(year, week) + Duration::days(6)
}

/// `YYYY-MM` of the month containing the week's Monday.
pub fn week_to_month(year: i32, week: u32) -> String {
    let monday = iso_week_monday(year, week);
    format!("{:04}-{:02}", monday.year(), monday.month())
}

/// Zero-padded week label, e.g. `2026-W05`.
pub fn week_label(year: i32, week: u32) -> String {
    format!("{year:04}-W{week:02}")
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("month is validated to 1..=12")
}

/// Share of `total` as a percentage rounded to one decimal; 0 when the total
/// is zero.
pub fn pct(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(count as f64 / total as f64 * 100.0)
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
