//! Month grids: weeks of Saturday-first day slots.

use serde::Serialize;

use crate::consts::{DAYS_IN_WEEK, ESFAND, FARVARDIN, MAX_YEAR, MIN_DAY, MIN_YEAR, NO_DAY};
use crate::convert::{day_of_week, days_in_month};

/// One week of a month grid, Saturday first. Empty slots hold [`NO_DAY`].
pub type Week = [u8; DAYS_IN_WEEK];

/// The layout of one Jalali month as rows of weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month: u8,
    first_weekday: u8,
    days_in_month: u8,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Weekday of the 1st, Saturday as 0
    pub const fn first_weekday(&self) -> u8 {
        self.first_weekday
    }

    pub const fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// The day numbers of the month in grid order, skipping empty slots
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.weeks
            .iter()
            .flatten()
            .copied()
            .filter(|&day| day != NO_DAY)
    }
}

/// Lays out a Jalali month.
///
/// The grid has `ceil((days_in_month + first_weekday) / 7)` weeks. Slots
/// before the 1st and after the last day are [`NO_DAY`].
///
/// # Panics
/// Panics if `month` is 0 or greater than 12.
pub fn month_calendar(year: i32, month: u8) -> MonthGrid {
    let days_in_month = days_in_month(year, month);
    let first_weekday = day_of_week(year, month, MIN_DAY);

    let leading = usize::from(first_weekday);
    let week_count = (usize::from(days_in_month) + leading).div_ceil(DAYS_IN_WEEK);
    let mut weeks = vec![[NO_DAY; DAYS_IN_WEEK]; week_count];

    let mut day = MIN_DAY;
    for slot in weeks.iter_mut().flatten().skip(leading) {
        if day > days_in_month {
            break;
        }
        *slot = day;
        day += 1;
    }

    MonthGrid {
        year,
        month,
        first_weekday,
        days_in_month,
        weeks,
    }
}

/// The month before `(year, month)`, or `None` before `MIN_YEAR`.
pub const fn previous_month(year: i32, month: u8) -> Option<(i32, u8)> {
    if month > FARVARDIN {
        Some((year, month - 1))
    } else if year > MIN_YEAR {
        Some((year - 1, ESFAND))
    } else {
        None
    }
}

/// The month after `(year, month)`, or `None` past `MAX_YEAR`.
pub const fn next_month(year: i32, month: u8) -> Option<(i32, u8)> {
    if month < ESFAND {
        Some((year, month + 1))
    } else if year < MAX_YEAR {
        Some((year + 1, FARVARDIN))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farvardin_1404() {
        // starts on a Friday: six blanks, then the 1st in the last column
        let grid = month_calendar(1404, 1);
        assert_eq!(grid.first_weekday(), 6);
        assert_eq!(grid.days_in_month(), 31);
        assert_eq!(grid.week_count(), 6);
        assert_eq!(grid.weeks()[0], [0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(grid.weeks()[1], [2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(grid.weeks()[5], [30, 31, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_leap_esfand_has_thirty_days() {
        let grid = month_calendar(1403, 12);
        assert_eq!(grid.days_in_month(), 30);
        assert_eq!(grid.days().last(), Some(30));

        let grid = month_calendar(1404, 12);
        assert_eq!(grid.days_in_month(), 29);
        assert_eq!(grid.days().last(), Some(29));
    }

    #[test]
    fn test_grid_shape_for_many_months() {
        for year in [1, 979, 1210, 1348, 1403, 1404, 1635, 3000, 9999] {
            for month in 1..=12 {
                let grid = month_calendar(year, month);
                let first = day_of_week(year, month, 1);
                let length = days_in_month(year, month);

                assert_eq!(grid.first_weekday(), first);
                assert_eq!(
                    grid.week_count(),
                    (usize::from(length) + usize::from(first)).div_ceil(7),
                    "{year}-{month}"
                );

                // strictly increasing 1..=N across the flattened grid
                let days: Vec<u8> = grid.days().collect();
                assert_eq!(days, (1..=length).collect::<Vec<u8>>(), "{year}-{month}");

                // leading blanks line up with the first weekday
                let leading = grid.weeks()[0].iter().take_while(|&&d| d == NO_DAY).count();
                assert_eq!(leading, usize::from(first));

                // the last week is never fully blank
                assert!(grid.weeks().last().unwrap().iter().any(|&d| d != NO_DAY));
            }
        }
    }

    #[test]
    fn test_columns_match_weekday() {
        let grid = month_calendar(1404, 7);
        for week in grid.weeks() {
            for (column, &day) in week.iter().enumerate() {
                if day != NO_DAY {
                    assert_eq!(usize::from(day_of_week(1404, 7, day)), column);
                }
            }
        }
    }

    #[test]
    fn test_serialize() {
        let grid = month_calendar(1404, 1);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["year"], 1404);
        assert_eq!(json["month"], 1);
        assert_eq!(json["first_weekday"], 6);
        assert_eq!(json["weeks"].as_array().unwrap().len(), 6);
        assert_eq!(json["weeks"][0][6], 1);
    }

    #[test]
    fn test_previous_month() {
        assert_eq!(previous_month(1404, 5), Some((1404, 4)));
        assert_eq!(previous_month(1404, 1), Some((1403, 12)));
        assert_eq!(previous_month(1, 1), None);
    }

    #[test]
    fn test_next_month() {
        assert_eq!(next_month(1404, 5), Some((1404, 6)));
        assert_eq!(next_month(1404, 12), Some((1405, 1)));
        assert_eq!(next_month(9999, 12), None);
    }
}
