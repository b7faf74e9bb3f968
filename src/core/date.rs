//! # Date Engine
//!
//! Calendar arithmetic for the proleptic Gregorian calendar, starting at
//! `1-1-1`. A `Date` is always valid: construction checks the ranges, and every
//! stepping method keeps the cached month length in sync.
//!
//! ```text
//! add_day / subtract_day      one day, rolls into the adjacent month
//! add_week / subtract_week    seven single-day steps
//! add_month / subtract_month  month only, day clamped to the new month
//! ```
//!
//! Dates run from `1-1-1` to `9999-12-31`. Nothing steps past either end;
//! it clamps there instead.

use std::fmt;

use chrono::{Datelike, Local, Month};

/// Reasons a year/month/day triple is not a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    YearOutOfRange(i32),
    MonthOutOfRange(u32),
    DayOutOfRange { year: i32, month: u8, day: u32 },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::YearOutOfRange(year) => {
                write!(f, "invalid date: year must be between 1 and {MAX_YEAR}, got {year}")
            }
            DateError::MonthOutOfRange(month) => {
                write!(f, "invalid date: month must be between 1 and 12, got {month}")
            }
            DateError::DayOutOfRange { year, month, day } => {
                write!(f, "invalid date: day for {year} {month} cannot be {day}")
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Last representable year.
pub const MAX_YEAR: i32 = 9999;

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`.
///
/// # Panics
///
/// On a month outside `1..=12`. Callers only pass months of a valid `Date`
/// or results of the month-stepping functions below.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("invalid month {month}"),
    }
}

/// Day of the week, 0 = Sunday … 6 = Saturday.
///
/// January and February count as months of the previous year, which moves
/// the leap day to the end of the cycle.
pub fn weekday(year: i32, month: u8, day: u8) -> u8 {
    let m = i64::from(month);
    let mut y = i64::from(year);
    let mut d = i64::from(day);
    if month < 3 {
        d += y;
        y -= 1;
    } else {
        d += y - 2;
    }
    let wd = (23 * m / 9 + d + 4 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400))
        .rem_euclid(7);
    wd as u8
}

/// Remaps a Sunday-based weekday (see [`weekday`]) to Monday = 0 … Sunday = 6.
pub fn monday_based(weekday: u8) -> u8 {
    (weekday + 6) % 7
}

/// Next month of a bare year/month pair. `(MAX_YEAR, 12)` stays put.
pub fn add_month(year: i32, month: u8) -> (i32, u8) {
    if month >= 12 {
        if year >= MAX_YEAR {
            return (MAX_YEAR, 12);
        }
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Previous month of a bare year/month pair. `(1, 1)` stays `(1, 1)`.
pub fn subtract_month(year: i32, month: u8) -> (i32, u8) {
    if month <= 1 {
        if year <= 1 {
            return (1, 1);
        }
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Canonical key of a date as used by the event index: `2024-3-9`.
pub fn date_key(year: i32, month: u8, day: u8) -> String {
    format!("{year}-{month}-{day}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
    days_in_month: u8,
}

impl Date {
    pub const EPOCH: Date = Date {
        year: 1,
        month: 1,
        day: 1,
        days_in_month: 31,
    };

    pub const LAST: Date = Date {
        year: MAX_YEAR,
        month: 12,
        day: 31,
        days_in_month: 31,
    };

    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::MonthOutOfRange(month));
        }
        let month = month as u8;
        let days_in_month = days_in_month(year, month);
        if day < 1 || day > u32::from(days_in_month) {
            return Err(DateError::DayOutOfRange { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day: day as u8,
            days_in_month,
        })
    }

    /// Today's date from the local clock.
    pub fn today() -> Result<Self, DateError> {
        let now = Local::now();
        Self::new(now.year(), now.month(), now.day())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    pub fn add_day(&mut self) {
        if *self == Self::LAST {
            return;
        }
        self.day += 1;
        if self.day > self.days_in_month {
            self.day = 1;
            (self.year, self.month) = add_month(self.year, self.month);
            self.days_in_month = days_in_month(self.year, self.month);
        }
    }

    pub fn subtract_day(&mut self) {
        if self.day > 1 {
            self.day -= 1;
            return;
        }
        if self.year <= 1 && self.month == 1 {
            *self = Self::EPOCH;
            return;
        }
        (self.year, self.month) = subtract_month(self.year, self.month);
        self.days_in_month = days_in_month(self.year, self.month);
        self.day = self.days_in_month;
    }

    pub fn add_week(&mut self) {
        for _ in 0..7 {
            self.add_day();
        }
    }

    pub fn subtract_week(&mut self) {
        for _ in 0..7 {
            self.subtract_day();
        }
    }

    /// Moves to the same day of the next month, or its last day if shorter.
    pub fn add_month(&mut self) {
        if self.year >= MAX_YEAR && self.month == 12 {
            *self = Self::LAST;
            return;
        }
        (self.year, self.month) = add_month(self.year, self.month);
        self.clamp_day();
    }

    pub fn subtract_month(&mut self) {
        if self.year <= 1 && self.month == 1 {
            *self = Self::EPOCH;
            return;
        }
        (self.year, self.month) = subtract_month(self.year, self.month);
        self.clamp_day();
    }

    fn clamp_day(&mut self) {
        self.days_in_month = days_in_month(self.year, self.month);
        self.day = self.day.min(self.days_in_month);
    }

    /// Day of the week, 0 = Sunday.
    pub fn weekday(&self) -> u8 {
        weekday(self.year, self.month, self.day)
    }

    pub fn key(&self) -> String {
        date_key(self.year, self.month, self.day)
    }

    /// True if this date is `year-month-day`.
    pub fn is(&self, year: i32, month: u8, day: u8) -> bool {
        self.year == year && self.month == month && self.day == day
    }

    /// Long label used in list headers, e.g. `October 18, 2026`.
    pub fn label(&self) -> String {
        format!("{} {}, {}", month_name(self.month), self.day, self.year)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// English month name, `"January"` for 1.
pub fn month_name(month: u8) -> &'static str {
    Month::try_from(month).map(|m| m.name()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::new(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_in_february() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    #[should_panic(expected = "invalid month 13")]
    fn test_days_in_month_rejects_month_13() {
        days_in_month(2024, 13);
    }

    #[test]
    fn test_weekday_reference_dates() {
        // 0 = Sunday
        assert_eq!(weekday(1970, 1, 1), 4); // Thursday
        assert_eq!(weekday(2000, 2, 29), 2); // Tuesday
        assert_eq!(weekday(2000, 3, 1), 3); // Wednesday
        assert_eq!(weekday(1900, 3, 1), 4); // Thursday
        assert_eq!(weekday(2023, 12, 31), 0); // Sunday
        assert_eq!(weekday(2024, 1, 1), 1); // Monday
        assert_eq!(weekday(1969, 7, 20), 0); // Sunday
    }

    #[test]
    fn test_monday_based() {
        assert_eq!(monday_based(0), 6);
        assert_eq!(monday_based(1), 0);
        assert_eq!(monday_based(6), 5);
    }

    #[test]
    fn test_new_rejects_invalid_dates() {
        assert_eq!(Date::new(0, 1, 1), Err(DateError::YearOutOfRange(0)));
        assert_eq!(
            Date::new(MAX_YEAR + 1, 1, 1),
            Err(DateError::YearOutOfRange(MAX_YEAR + 1))
        );
        assert_eq!(
            Date::new(i32::MAX, 12, 31),
            Err(DateError::YearOutOfRange(i32::MAX))
        );
        assert_eq!(Date::new(2024, 13, 1), Err(DateError::MonthOutOfRange(13)));
        assert_eq!(Date::new(2024, 0, 1), Err(DateError::MonthOutOfRange(0)));
        assert!(matches!(
            Date::new(2023, 2, 29),
            Err(DateError::DayOutOfRange { day: 29, .. })
        ));
        assert!(matches!(Date::new(2023, 2, 0), Err(DateError::DayOutOfRange { .. })));
    }

    #[test]
    fn test_add_day_across_february() {
        let mut d = date(2024, 2, 28);
        d.add_day();
        assert_eq!(d, date(2024, 2, 29));
        d.add_day();
        assert_eq!(d, date(2024, 3, 1));

        let mut d = date(2021, 2, 28);
        d.add_day();
        assert_eq!(d, date(2021, 3, 1));
    }

    #[test]
    fn test_add_day_across_year() {
        let mut d = date(2023, 12, 31);
        d.add_day();
        assert_eq!(d, date(2024, 1, 1));
        assert_eq!(d.days_in_month(), 31);
    }

    #[test]
    fn test_subtract_day_across_year() {
        let mut d = date(2024, 1, 1);
        d.subtract_day();
        assert_eq!(d, date(2023, 12, 31));
    }

    #[test]
    fn test_subtract_day_clamps_at_epoch() {
        let mut d = Date::EPOCH;
        d.subtract_day();
        assert_eq!(d, Date::EPOCH);
    }

    #[test]
    fn test_subtract_week_clamps_like_single_steps() {
        let mut d = date(1, 1, 4);
        d.subtract_week();
        assert_eq!(d, Date::EPOCH);
    }

    #[test]
    fn test_add_month_clamps_day() {
        let mut d = date(2023, 1, 31);
        d.add_month();
        assert_eq!(d, date(2023, 2, 28));

        let mut d = date(2023, 12, 15);
        d.add_month();
        assert_eq!(d, date(2024, 1, 15));
    }

    #[test]
    fn test_subtract_month_clamps_day() {
        let mut d = date(2024, 3, 31);
        d.subtract_month();
        assert_eq!(d, date(2024, 2, 29));

        let mut d = date(2024, 1, 31);
        d.subtract_month();
        assert_eq!(d, date(2023, 12, 31));
    }

    #[test]
    fn test_subtract_month_below_year_one_clamps_to_epoch() {
        let mut d = date(1, 1, 20);
        d.subtract_month();
        assert_eq!(d, Date::EPOCH);
    }

    #[test]
    fn test_add_day_clamps_at_last_date() {
        let mut d = date(MAX_YEAR, 12, 30);
        d.add_day();
        assert_eq!(d, Date::LAST);
        d.add_day();
        assert_eq!(d, Date::LAST);
    }

    #[test]
    fn test_add_week_clamps_like_single_steps() {
        let mut d = date(MAX_YEAR, 12, 28);
        d.add_week();
        assert_eq!(d, Date::LAST);
    }

    #[test]
    fn test_add_month_past_last_year_clamps_to_last() {
        let mut d = date(MAX_YEAR, 12, 5);
        d.add_month();
        assert_eq!(d, Date::LAST);

        let mut d = date(MAX_YEAR, 11, 30);
        d.add_month();
        assert_eq!(d, date(MAX_YEAR, 12, 30));
    }

    #[test]
    fn test_bare_month_stepping() {
        assert_eq!(add_month(2023, 12), (2024, 1));
        assert_eq!(add_month(2023, 5), (2023, 6));
        assert_eq!(subtract_month(2024, 1), (2023, 12));
        assert_eq!(subtract_month(2024, 7), (2024, 6));
        assert_eq!(subtract_month(1, 1), (1, 1));
        assert_eq!(add_month(MAX_YEAR, 12), (MAX_YEAR, 12));
        assert_eq!(add_month(i32::MAX, 12), (MAX_YEAR, 12));
    }

    #[test]
    fn test_key_has_no_padding() {
        assert_eq!(date(2024, 3, 9).key(), "2024-3-9");
        assert_eq!(date(987, 11, 20).key(), "987-11-20");
    }

    #[test]
    fn test_label_and_display() {
        let d = date(2026, 10, 18);
        assert_eq!(d.label(), "October 18, 2026");
        assert_eq!(d.to_string(), "2026-10-18");
    }

    fn valid_date() -> impl Strategy<Value = Date> {
        let year = prop_oneof![
            8 => 1i32..=MAX_YEAR,
            1 => 1i32..=2,
            1 => MAX_YEAR - 1..=MAX_YEAR,
        ];
        (year, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
            let d = d.min(u32::from(days_in_month(y, m as u8)));
            Date::new(y, m, d).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract_day_is_identity(d in valid_date()) {
            prop_assume!(d != Date::LAST);
            let mut stepped = d;
            stepped.add_day();
            stepped.subtract_day();
            prop_assert_eq!(stepped, d);
        }

        #[test]
        fn prop_add_then_subtract_week_is_identity(d in valid_date()) {
            prop_assume!(d.year() < MAX_YEAR);
            let mut stepped = d;
            stepped.add_week();
            stepped.subtract_week();
            prop_assert_eq!(stepped, d);
        }

        #[test]
        fn prop_subtract_then_add_week_above_floor(d in valid_date()) {
            prop_assume!(d.year() > 1);
            let mut stepped = d;
            stepped.subtract_week();
            stepped.add_week();
            prop_assert_eq!(stepped, d);
        }

        #[test]
        fn prop_stepping_keeps_dates_valid(d in valid_date(), steps in 0usize..40) {
            let mut stepped = d;
            for i in 0..steps {
                match i % 6 {
                    0 => stepped.add_day(),
                    1 => stepped.subtract_week(),
                    2 => stepped.add_month(),
                    3 => stepped.subtract_day(),
                    4 => stepped.subtract_month(),
                    _ => stepped.add_week(),
                }
                let rebuilt = Date::new(
                    stepped.year(),
                    u32::from(stepped.month()),
                    u32::from(stepped.day()),
                );
                prop_assert_eq!(rebuilt, Ok(stepped));
            }
        }

        #[test]
        fn prop_weekday_advances_with_day(d in valid_date()) {
            prop_assume!(d != Date::LAST);
            let mut next = d;
            next.add_day();
            prop_assert_eq!(next.weekday(), (d.weekday() + 1) % 7);
        }
    }
}
