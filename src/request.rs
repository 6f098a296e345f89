use tracing::debug;

use crate::consts::{FARVARDIN, MAX_MONTH, MAX_YEAR, MIN_YEAR};
use crate::prelude::*;
use crate::{JalaliDate, Month, Year};

/// What the calendar should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DisplayMode {
    /// One month with its year in the header
    #[display(fmt = "month")]
    Month,
    /// The requested month between its neighbours
    #[display(fmt = "three months")]
    ThreeMonths,
    /// All twelve months, three per row
    #[display(fmt = "year")]
    Year,
}

/// Error type for resolving a display request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Month outside Farvardin..=Esfand.
    #[error("month must be between {min} and {max}", min = FARVARDIN, max = MAX_MONTH)]
    InvalidMonth(i32),

    /// Year outside the supported range.
    #[error("year must be between {min} and {max}", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),
}

/// Raw, unvalidated choices as they come from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub three: bool,
    pub full_year: bool,
}

/// A validated request: what to show and for which month.
///
/// In [`DisplayMode::Year`] the month is still validated but only the year is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub mode: DisplayMode,
    pub year: Year,
    pub month: Month,
}

impl RequestOptions {
    /// Chooses the display mode.
    ///
    /// An explicit full-year flag wins over the three-month flag, and a year
    /// given without a month also selects the full year.
    pub const fn mode(&self) -> DisplayMode {
        if self.full_year {
            DisplayMode::Year
        } else if self.three {
            DisplayMode::ThreeMonths
        } else if self.year.is_some() && self.month.is_none() {
            DisplayMode::Year
        } else {
            DisplayMode::Month
        }
    }

    /// Fills missing values from `today` and validates them.
    ///
    /// # Errors
    /// Returns `RequestError::InvalidMonth` or `RequestError::InvalidYear`
    /// (checked in that order) when a value is out of range.
    pub fn resolve(self, today: JalaliDate) -> Result<Request, RequestError> {
        let year = self.year.unwrap_or(today.year());
        let month = self.month.unwrap_or_else(|| i32::from(today.month()));

        let month = Month::new(month).map_err(|_| RequestError::InvalidMonth(month))?;
        let year = Year::new(year).map_err(|_| RequestError::InvalidYear(year))?;
        let mode = self.mode();

        debug!(%mode, %year, %month, "resolved display request");
        Ok(Request { mode, year, month })
    }
}
