//! A Jalali (Shamsi) calendar engine and terminal renderer.
//!
//! The engine converts between the proleptic Gregorian and Jalali calendars,
//! decides Jalali leap years from the cycle-break table and lays months out
//! as Saturday-first week grids:
//!
//! ```
//! use scal::{JalaliDate, gregorian_to_jalali, is_leap_year, month_calendar};
//!
//! assert_eq!(gregorian_to_jalali(2025, 3, 21), JalaliDate::new(1404, 1, 1));
//! assert!(is_leap_year(1403));
//!
//! let grid = month_calendar(1404, 1);
//! assert_eq!(grid.weeks()[0], [0, 0, 0, 0, 0, 0, 1]);
//! ```

mod consts;
mod convert;
mod grid;
mod prelude;
mod render;
mod request;
mod types;

pub use consts::*;
pub use convert::{
    day_of_week, days_in_month, gregorian_to_jalali, gregorian_weekday, is_gregorian_leap_year,
    is_leap_year, jalali_to_gregorian,
};
pub use grid::{MonthGrid, Week, month_calendar, next_month, previous_month};
pub use render::Renderer;
pub use request::{DisplayMode, Request, RequestError, RequestOptions};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// A date in the Jalali calendar.
///
/// Construction through [`JalaliDate::new`] is unchecked; parsing validates
/// every component. Dates order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct JalaliDate {
    year: i32,
    month: u8,
    day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be {}-{})", "_0", FARVARDIN, MAX_MONTH)]
    InvalidMonth(i32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl JalaliDate {
    /// Creates a date from known components without validation
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from validated components
    pub fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self::new(year.get(), month.get(), day.get())
    }

    /// Converts a proleptic Gregorian date
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Self {
        gregorian_to_jalali(year, month, day)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The Gregorian equivalent as `(year, month, day)`
    pub fn to_gregorian(&self) -> (i32, u8, u8) {
        jalali_to_gregorian(self.year, self.month, self.day)
    }

    /// The Gregorian equivalent, if chrono can represent it
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.to_gregorian();
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
    }

    /// Weekday, Saturday as 0 through Friday as 6
    pub fn weekday(&self) -> u8 {
        day_of_week(self.year, self.month, self.day)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Days in this date's month
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }
}

impl From<NaiveDate> for JalaliDate {
    fn from(date: NaiveDate) -> Self {
        // chrono guarantees month in 1..=12 and day in 1..=31
        gregorian_to_jalali(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(SLASH_SEPARATOR);

        let separator = match (has_hyphen, has_slash) {
            (true, true) => {
                return Err(ParseError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {SLASH_SEPARATOR})"
                )));
            }
            (true, false) => DATE_SEPARATOR,
            (false, true) => SLASH_SEPARATOR,
            (false, false) => return Err(ParseError::InvalidFormat(trimmed.to_owned())),
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected year{separator}month{separator}day, found {} parts",
                parts.len()
            )));
        };

        let year = Year::new(Self::parse_i32(year)?)?;
        let month = Month::new(Self::parse_i32(month)?)?;
        let day = Day::new(Self::parse_u8(day)?, year, month)?;

        Ok(Self::from_parts(year, month, day))
    }
}

impl JalaliDate {
    /// Parses a year or month component
    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Parses a day component
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
