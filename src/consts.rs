/// Minimum valid Jalali year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid Jalali year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin, the first month of the Jalali year
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand, the only month whose length depends on the leap year
pub const ESFAND: u8 = 12;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Jalali month of a common year (index 0 is Farvardin)
pub const DAYS_IN_MONTH: [u8; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Days in the first half of the year (six months of 31 days)
pub(crate) const FIRST_HALF_DAYS: i32 = 186;
/// Length of every month in the first half of the year
pub(crate) const FIRST_HALF_MONTH_DAYS: i32 = 31;
/// Length of every month in the second half of the year (a leap Esfand overflows into day 30)
pub(crate) const SECOND_HALF_MONTH_DAYS: i32 = 30;

/// Jalali years at which the leap-cycle period changes.
///
/// The table is the usual astronomical approximation of the Jalali leap
/// pattern: between two consecutive entries the leap years follow 33-year
/// cycles, and the remainder of each segment forms one shorter cycle.
/// Years at or past the last entry are extrapolated from the final segment.
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Jalali year `y` starts in Gregorian year `y + GREGORIAN_OFFSET`
pub(crate) const GREGORIAN_OFFSET: i32 = 621;

/// Leap position reported by the break-table walk for a leap year
pub(crate) const LEAP_YEAR_INDICATOR: i32 = 0;

/// Length of a full leap cycle in years
pub(crate) const CYCLE_YEARS: i32 = 33;
/// Leap years in a full 33-year cycle
pub(crate) const LEAPS_PER_CYCLE: i32 = 8;

/// Cumulative day offsets of Gregorian months in a common year
pub const GREGORIAN_MONTH_OFFSETS: [i32; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Cumulative day offsets of Gregorian months in a leap year
pub const GREGORIAN_MONTH_OFFSETS_LEAP: [i32; 12] =
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Gregorian year the day numbers are counted from (1600-01-01 is day 0)
pub(crate) const EPOCH_GREGORIAN_YEAR: i32 = 1600;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;
/// Days in a Gregorian century that does not start with a leap year
pub(crate) const DAYS_PER_100_YEARS: i32 = 36_524;
/// Days in 4 Gregorian years
pub(crate) const DAYS_PER_4_YEARS: i32 = 1461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i32 = 365;

/// Days in a week
pub const DAYS_IN_WEEK: usize = 7;

/// Grid slot value meaning "no day" (padding before the 1st and after the last day)
pub const NO_DAY: u8 = 0;

/// Jalali month names, Farvardin first
pub const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Weekday names, Saturday (Shanbe) first
pub const WEEKDAY_NAMES: [&str; DAYS_IN_WEEK] =
    ["Shanbe", "Yek", "Do", "Se", "Chahar", "Panj", "Jome"];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternative separator commonly used for Jalali dates (`1404/01/01`)
pub const SLASH_SEPARATOR: char = '/';
