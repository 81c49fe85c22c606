use crate::utils::error::{LiturgiaError, Result};
use chrono::{Days, Months, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Selectable range for date pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}

/// Strict `YYYY-MM-DD` parsing.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    // chrono accepts unpadded fields, the API path does not
    if trimmed.len() != 10 {
        return Err(LiturgiaError::InvalidDateError {
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| LiturgiaError::InvalidDateError {
        value: value.to_string(),
    })
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// One year back to one year ahead of `today`.
pub fn date_picker_bounds(today: NaiveDate) -> DateRange {
    DateRange {
        min: today.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN),
        max: today.checked_add_months(Months::new(12)).unwrap_or(NaiveDate::MAX),
    }
}

/// Replaces the last path segment with `date`.
pub fn navigate_to_date(current_path: &str, date: NaiveDate) -> String {
    let base = match current_path.rfind('/') {
        Some(idx) => &current_path[..idx],
        None => "",
    };
    format!("{}/{}", base, format_calendar_date(date))
}

/// Rejects dates the date picker would not offer around `today`.
pub fn check_selectable(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
    let range = date_picker_bounds(today);
    if range.contains(date) {
        Ok(date)
    } else {
        Err(LiturgiaError::DateOutOfRangeError {
            value: format_calendar_date(date),
            min: format_calendar_date(range.min),
            max: format_calendar_date(range.max),
        })
    }
}

pub fn go_to_today(current_path: &str, today: NaiveDate) -> String {
    navigate_to_date(current_path, today)
}

pub fn adjacent_dates(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let prev = date.checked_sub_days(Days::new(1)).unwrap_or(date);
    let next = date.checked_add_days(Days::new(1)).unwrap_or(date);
    (prev, next)
}
