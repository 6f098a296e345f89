//! Gregorian ⇄ Jalali conversion.
//!
//! Both directions go through a continuous day number (days since
//! 1600-01-01, proleptic Gregorian). The Jalali side is anchored on the day
//! number of 1 Farvardin, which the break table yields for every year, so the
//! leap years seen by [`is_leap_year`] are exactly the ones the conversions
//! use.

use crate::JalaliDate;
use crate::consts::{
    BREAKS, CENTURY_CYCLE, CYCLE_YEARS, DAYS_IN_MONTH, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS,
    DAYS_PER_4_YEARS, DAYS_PER_YEAR, EPOCH_GREGORIAN_YEAR, ESFAND, ESFAND_DAYS_LEAP,
    FIRST_HALF_DAYS, FIRST_HALF_MONTH_DAYS, GREGORIAN_CYCLE, GREGORIAN_MONTH_OFFSETS,
    GREGORIAN_MONTH_OFFSETS_LEAP, GREGORIAN_OFFSET, LEAP_YEAR_CYCLE, LEAP_YEAR_INDICATOR,
    LEAPS_PER_CYCLE, SECOND_HALF_MONTH_DAYS,
};

/// Outcome of walking the break table for one Jalali year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JalCal {
    /// Position of the year in its 4-year sub-cycle; [`LEAP_YEAR_INDICATOR`] marks a leap year.
    leap: i32,
    /// Gregorian year in which the Jalali year begins.
    gy: i32,
    /// Day of March of `gy` on which 1 Farvardin falls.
    march: i32,
}

/// Walks [`BREAKS`] for `jy`.
///
/// All operands are non-negative for years at or after the first break, so
/// Rust's truncating `/` and `%` are the intended semantics.
fn jal_cal(jy: i32) -> JalCal {
    let gy = jy + GREGORIAN_OFFSET;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / CYCLE_YEARS * LEAPS_PER_CYCLE + jump % CYCLE_YEARS / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / CYCLE_YEARS * LEAPS_PER_CYCLE + (n % CYCLE_YEARS + 3) / 4;
    if jump % CYCLE_YEARS == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Gregorian leap days since the same reference, 4/100/400 rule
    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    // the last few years of a segment belong to the next segment's cycle;
    // past the final break there is no next segment
    if jy < BREAKS[BREAKS.len() - 1] && jump - n < 6 {
        n = n - jump + (jump + 4) / CYCLE_YEARS * CYCLE_YEARS;
    }
    let mut leap = ((n + 1) % CYCLE_YEARS - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    JalCal { leap, gy, march }
}

/// Gregorian leap year rule.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days since 1600-01-01 for a proleptic Gregorian date (negative before it).
fn day_number(year: i32, month: u8, day: i32) -> i32 {
    let y = year - EPOCH_GREGORIAN_YEAR;
    let mut days = DAYS_PER_YEAR * y + (y + 3).div_euclid(4) - (y + 99).div_euclid(100)
        + (y + 399).div_euclid(400);
    days += GREGORIAN_MONTH_OFFSETS[usize::from(month) - 1] + day - 1;
    if month > 2 && is_gregorian_leap_year(year) {
        days += 1;
    }
    days
}

/// Inverse of [`day_number`].
fn gregorian_from_day_number(day_number: i32) -> (i32, u8, u8) {
    let mut year =
        EPOCH_GREGORIAN_YEAR + GREGORIAN_CYCLE * day_number.div_euclid(DAYS_PER_400_YEARS);
    let mut days = day_number.rem_euclid(DAYS_PER_400_YEARS);

    // the first year of every 400-year cycle is leap
    let mut leap = true;
    if days > DAYS_PER_100_YEARS {
        days -= 1;
        year += CENTURY_CYCLE * (days / DAYS_PER_100_YEARS);
        days %= DAYS_PER_100_YEARS;
        if days >= DAYS_PER_YEAR {
            days += 1;
        } else {
            leap = false;
        }
    }

    year += LEAP_YEAR_CYCLE * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;

    if days > DAYS_PER_YEAR {
        leap = false;
        days -= 1;
        year += days / DAYS_PER_YEAR;
        days %= DAYS_PER_YEAR;
    }

    let offsets = if leap {
        &GREGORIAN_MONTH_OFFSETS_LEAP
    } else {
        &GREGORIAN_MONTH_OFFSETS
    };
    let month_index = offsets
        .iter()
        .rposition(|&offset| days >= offset)
        .unwrap_or(0);
    let day = days - offsets[month_index] + 1;

    (year, month_index as u8 + 1, day as u8)
}

/// Day number of 1 Farvardin of `year`.
fn new_year_day_number(year: i32) -> i32 {
    let JalCal { gy, march, .. } = jal_cal(year);
    day_number(gy, 3, march)
}

/// Days in the Jalali year before the first of `month`.
const fn days_before_month(month: u8) -> i32 {
    let month = month as i32;
    if month <= 7 {
        (month - 1) * FIRST_HALF_MONTH_DAYS
    } else {
        FIRST_HALF_DAYS + (month - 7) * SECOND_HALF_MONTH_DAYS
    }
}

/// Splits a zero-based day of the Jalali year into (month, day).
const fn month_day_from_ordinal(ordinal: i32) -> (u8, u8) {
    if ordinal < FIRST_HALF_DAYS {
        (
            (1 + ordinal / FIRST_HALF_MONTH_DAYS) as u8,
            (1 + ordinal % FIRST_HALF_MONTH_DAYS) as u8,
        )
    } else {
        let ordinal = ordinal - FIRST_HALF_DAYS;
        (
            (7 + ordinal / SECOND_HALF_MONTH_DAYS) as u8,
            (1 + ordinal % SECOND_HALF_MONTH_DAYS) as u8,
        )
    }
}

/// Converts a proleptic Gregorian date to the Jalali calendar.
///
/// The input is expected to be a real date; anything else gives an
/// unspecified result.
///
/// # Panics
/// Panics if `month` is 0 or greater than 12.
pub fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> JalaliDate {
    let target = day_number(year, month, i32::from(day));

    // 1 Farvardin falls in March, so the date belongs either to the Jalali
    // year that starts in `year` or to the one before it
    let mut jalali_year = year - GREGORIAN_OFFSET;
    let mut new_year = new_year_day_number(jalali_year);
    if target < new_year {
        jalali_year -= 1;
        new_year = new_year_day_number(jalali_year);
    }

    let (month, day) = month_day_from_ordinal(target - new_year);
    JalaliDate::new(jalali_year, month, day)
}

/// Converts a Jalali date to the proleptic Gregorian calendar as `(year, month, day)`.
///
/// The month must be in `1..=12` and the day valid for it; neither is checked.
pub fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    let target = new_year_day_number(year) + days_before_month(month) + i32::from(day) - 1;
    gregorian_from_day_number(target)
}

/// Whether `year` is a Jalali leap year (Esfand has 30 days).
///
/// This follows the break table, not a fixed 4-year or 33-year rule.
pub fn is_leap_year(year: i32) -> bool {
    jal_cal(year).leap == LEAP_YEAR_INDICATOR
}

/// Number of days in a Jalali month.
///
/// # Panics
/// Panics if `month` is 0 or greater than 12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if month == ESFAND && is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[usize::from(month) - 1]
    }
}

/// Gregorian weekday with Sunday as 0.
///
/// # Panics
/// Panics if `month` is 0 or greater than 12.
pub fn gregorian_weekday(year: i32, month: u8, day: u8) -> u8 {
    // 1600-01-01 was a Saturday
    (day_number(year, month, i32::from(day)) + 6).rem_euclid(7) as u8
}

/// Day of the week of a Jalali date, Saturday (Shanbe) as 0 through Friday (Jome) as 6.
pub fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    let (gy, gm, gd) = jalali_to_gregorian(year, month, day);
    (gregorian_weekday(gy, gm, gd) + 1) % 7
}
