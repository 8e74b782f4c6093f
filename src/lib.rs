mod clock;
mod consts;
mod epoch;
mod iso;
mod prelude;
mod range;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use iso::{days_in_iso_month, is_iso_leap_year, IsoDate};
pub use range::{Days, EthiopicDateRange, RangeError};
pub use types::{
    day_of_year, days_in_month, days_in_year, is_leap_year, is_valid_date, leap_year_on_or_after,
    month_day_from_day_of_year, Day, Locale, Month,
};

use crate::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A date in the Ethiopic (Ethiopian) calendar.
///
/// Thirteen months per year: twelve 30-day months followed by Pagumen,
/// which holds the intercalary days (5, or 6 in a leap year). The year is
/// a proleptic signed integer, so dates before year 1 are representable.
/// Values are immutable; every arithmetic operation returns a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthiopicDate {
    year: i32,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {month} (must be 1-{max})")]
    InvalidMonth { month: u8, max: u8 },
    #[display(fmt = "Invalid day {day} for month {year}-{month:02} (must be 1-{max_day})")]
    InvalidDay {
        day: u8,
        month: u8,
        year: i32,
        max_day: u8,
    },
    #[display(fmt = "Invalid day of year {day_of_year} for year {year} (must be 1-{max})")]
    InvalidDayOfYear {
        day_of_year: u16,
        year: i32,
        max: u16,
    },
    #[display(fmt = "Epoch day {epoch_day} is outside the representable date range")]
    EpochDayOutOfRange { epoch_day: i64 },
    #[display(fmt = "Year {year} is outside the representable range")]
    YearOutOfRange { year: i64 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl EthiopicDate {
    /// Creates a date from its components, validating them.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` naming
    /// the offending value and its valid bound.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let month = Month::new(month)?;
        let day = Day::new(day, year, month.get())?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from components already known to be valid.
    pub(crate) const fn from_valid_parts(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(is_valid_date(year, month, day));
        Self {
            year,
            month: Month::new_unchecked(month),
            day: Day::new_unchecked(day),
        }
    }

    /// Creates the date at the given ISO epoch day (days since 1970-01-01
    /// Gregorian).
    ///
    /// # Errors
    /// Returns `DateError::EpochDayOutOfRange` if the day falls outside the
    /// representable year range.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        let (year, month, day) = epoch::from_epoch_day(epoch_day)?;
        Ok(Self::from_valid_parts(year, month, day))
    }

    /// Creates a date from a year and a 1-based day-of-year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDayOfYear` if `day_of_year` exceeds the
    /// length of `year`.
    pub fn from_day_of_year(year: i32, day_of_year: u16) -> Result<Self, DateError> {
        let (month, day) = month_day_from_day_of_year(year, day_of_year)?;
        Ok(Self::from_valid_parts(year, month, day))
    }

    /// Creates the Ethiopic date for a proleptic Gregorian (ISO) date.
    ///
    /// The ISO components are validated by the Gregorian collaborator; the
    /// conversion itself travels through the shared epoch day.
    ///
    /// # Errors
    /// Returns `DateError` if the ISO components are invalid or the result
    /// is out of range.
    pub fn from_iso(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let iso = IsoDate::new(year, month, day)?;
        Self::from_epoch_day(iso.to_epoch_day())
    }

    /// Returns today's date according to the system clock.
    ///
    /// # Errors
    /// Propagates `DateError::EpochDayOutOfRange` for a clock reading far
    /// outside the representable range.
    pub fn now() -> Result<Self, DateError> {
        Self::now_with(&SystemClock)
    }

    /// Returns today's date according to the given clock.
    ///
    /// # Errors
    /// Propagates `DateError::EpochDayOutOfRange` for a clock reading far
    /// outside the representable range.
    pub fn now_with(clock: &impl Clock) -> Result<Self, DateError> {
        Self::from_epoch_day(clock.epoch_day())
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number (1..=13)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day within the month (1..=30)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(self) -> Day {
        self.day
    }

    /// Returns the 1-based day-of-year (1..=366)
    pub const fn day_of_year(self) -> u16 {
        day_of_year(self.month.get(), self.day.get())
    }

    /// Returns true if this date's year is a leap year
    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the month name in the given locale
    pub const fn month_name(self, locale: Locale) -> &'static str {
        self.month.name(locale)
    }

    /// Returns this date as an ISO epoch day (days since 1970-01-01
    /// Gregorian).
    pub fn to_epoch_day(self) -> i64 {
        epoch::to_epoch_day(self.year, self.month.get(), self.day.get())
    }

    /// Returns the equivalent proleptic Gregorian (ISO) date.
    ///
    /// # Errors
    /// Returns `DateError::EpochDayOutOfRange` when the ISO year would not
    /// fit the supported integer width (only near the extreme ends of the
    /// proleptic range).
    pub fn to_iso(self) -> Result<IsoDate, DateError> {
        IsoDate::from_epoch_day(self.to_epoch_day())
    }

    /// Formats as `"{day} {month name} {year}"` in the given locale.
    pub fn format(self, locale: Locale) -> String {
        format!("{} {} {}", self.day, self.month.name(locale), self.year)
    }
}

// --- arithmetic ---
impl EthiopicDate {
    /// Returns the date `days` days after this one.
    ///
    /// Defined as an epoch-day round-trip, so month and year boundaries and
    /// leap years need no special handling here.
    ///
    /// # Errors
    /// Returns `DateError::EpochDayOutOfRange` on overflow.
    pub fn plus_days(self, days: i64) -> Result<Self, DateError> {
        Self::from_epoch_day(self.to_epoch_day().saturating_add(days))
    }

    /// Returns the date `days` days before this one.
    ///
    /// # Errors
    /// Returns `DateError::EpochDayOutOfRange` on overflow.
    pub fn minus_days(self, days: i64) -> Result<Self, DateError> {
        Self::from_epoch_day(self.to_epoch_day().saturating_sub(days))
    }

    /// Returns the date `months` months after this one.
    ///
    /// Month overflow carries into the year. When the target month is
    /// shorter than the current day, the day clamps to the month's last day
    /// and never rolls into the following month: one month after day 30 of
    /// a regular month can land on Pagumen 5 (or 6).
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` on overflow.
    pub fn plus_months(self, months: i64) -> Result<Self, DateError> {
        self.with_month_count(self.month_count().saturating_add(months))
    }

    /// Returns the date `months` months before this one; clamps like
    /// [`Self::plus_months`].
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` on overflow.
    pub fn minus_months(self, months: i64) -> Result<Self, DateError> {
        self.with_month_count(self.month_count().saturating_sub(months))
    }

    /// Returns the date `years` years after this one.
    ///
    /// The day clamps exactly as in [`Self::plus_months`]: Pagumen 6 moved
    /// to a non-leap year becomes Pagumen 5.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` on overflow.
    pub fn plus_years(self, years: i64) -> Result<Self, DateError> {
        self.with_year(i64::from(self.year).saturating_add(years))
    }

    /// Returns the date `years` years before this one; clamps like
    /// [`Self::plus_years`].
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` on overflow.
    pub fn minus_years(self, years: i64) -> Result<Self, DateError> {
        self.with_year(i64::from(self.year).saturating_sub(years))
    }

    /// Returns the number of days from this date until `other`.
    ///
    /// Positive when `other` is later; `a.days_until(b) == -b.days_until(a)`.
    pub fn days_until(self, other: Self) -> i64 {
        other.to_epoch_day() - self.to_epoch_day()
    }

    /// Index of this date's month on a continuous 13-months-per-year scale.
    const fn month_count(self) -> i64 {
        self.year as i64 * MONTHS_PER_YEAR as i64 + (self.month.get() - 1) as i64
    }

    fn with_month_count(self, months: i64) -> Result<Self, DateError> {
        let per_year = i64::from(MONTHS_PER_YEAR);
        let year64 = months.div_euclid(per_year);
        let month = months.rem_euclid(per_year) as u8 + 1;
        let year = i32::try_from(year64).map_err(|_| DateError::YearOutOfRange { year: year64 })?;
        let day = self.day.get().min(days_in_month(year, month));
        Ok(Self::from_valid_parts(year, month, day))
    }

    fn with_year(self, year64: i64) -> Result<Self, DateError> {
        let year = i32::try_from(year64).map_err(|_| DateError::YearOutOfRange { year: year64 })?;
        let month = self.month.get();
        let day = self.day.get().min(days_in_month(year, month));
        Ok(Self::from_valid_parts(year, month, day))
    }
}

// --- derived calendar positions ---
impl EthiopicDate {
    /// Returns the first day of this date's month.
    pub const fn first_of_month(self) -> Self {
        Self::from_valid_parts(self.year, self.month.get(), MIN_DAY)
    }

    /// Returns the last day of this date's month (30, or Pagumen's 5/6).
    pub const fn last_of_month(self) -> Self {
        let month = self.month.get();
        Self::from_valid_parts(self.year, month, days_in_month(self.year, month))
    }

    /// Returns Meskerem 1 of this date's year.
    pub const fn first_of_year(self) -> Self {
        Self::from_valid_parts(self.year, MESKEREM, MIN_DAY)
    }

    /// Returns the last day of Pagumen of this date's year.
    pub const fn last_of_year(self) -> Self {
        Self::from_valid_parts(self.year, PAGUMEN, days_in_month(self.year, PAGUMEN))
    }

    /// Returns true if both dates fall in the same month of the same year.
    pub fn is_same_month(self, other: Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Returns true if both dates fall in the same year.
    pub const fn is_same_year(self, other: Self) -> bool {
        self.year == other.year
    }

    /// Returns the number of whole months from this date until `other`.
    ///
    /// A month only counts once `other`'s day-of-month reaches this date's,
    /// so the result is zero for any span shorter than a full month.
    pub fn months_until(self, other: Self) -> i64 {
        let mut months = other.month_count() - self.month_count();
        if months > 0 && other.day < self.day {
            months -= 1;
        } else if months < 0 && other.day > self.day {
            months += 1;
        }
        months
    }

    /// Returns the number of whole years from this date until `other`.
    ///
    /// This is the age calculation: with a birth date as `self` and today
    /// as `other`, the count drops by one while this year's anniversary
    /// (compared as a `(month, day)` pair) is still ahead.
    pub fn years_until(self, other: Self) -> i64 {
        let mut years = i64::from(other.year) - i64::from(self.year);
        let from = (self.month, self.day);
        let to = (other.month, other.day);
        if years > 0 && to < from {
            years -= 1;
        } else if years < 0 && to > from {
            years += 1;
        }
        years
    }

    /// Returns the next date strictly after this one whose day-of-month is
    /// `day`.
    ///
    /// Months too short for `day` are skipped (Pagumen, for most values).
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is outside 1..=30, or
    /// `DateError::YearOutOfRange` at the end of the representable range.
    pub fn next_occurrence_of_day(self, day: u8) -> Result<Self, DateError> {
        let target = Day::try_from(day)?;
        let mut year = self.year;
        let mut month = self.month.get();
        if self.day >= target || target.get() > days_in_month(year, month) {
            loop {
                if month == MONTHS_PER_YEAR {
                    month = MESKEREM;
                    year = year.checked_add(1).ok_or(DateError::YearOutOfRange {
                        year: i64::from(self.year) + 1,
                    })?;
                } else {
                    month += 1;
                }
                if target.get() <= days_in_month(year, month) {
                    break;
                }
            }
        }
        Ok(Self::from_valid_parts(year, month, target.get()))
    }
}

impl fmt::Display for EthiopicDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(
                f,
                "-{:04}-{:02}-{:02}",
                -i64::from(self.year),
                self.month.get(),
                self.day.get()
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}",
                self.year,
                self.month.get(),
                self.day.get()
            )
        }
    }
}

impl FromStr for EthiopicDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // A leading separator is the year's sign, not a field boundary
        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(|p| p.trim()).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected year{sep}month{sep}day, found {count} {sep} separators",
                sep = DATE_SEPARATOR,
                count = parts.len() - 1,
            )));
        }

        let magnitude = Self::parse_i32(parts[0])?;
        let year = if negative { -magnitude } else { magnitude };
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl EthiopicDate {
    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, DateError> {
        s.parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl PartialOrd for EthiopicDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EthiopicDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Chronological order is exactly epoch-day order
        self.to_epoch_day().cmp(&other.to_epoch_day())
    }
}

impl serde::Serialize for EthiopicDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EthiopicDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_basic() {
        let d = EthiopicDate::new(2016, 3, 15).unwrap();
        assert_eq!(d.year(), 2016);
        assert_eq!(d.month(), 3);
        assert_eq!(d.day(), 15);
        assert_eq!(d.day_of_year(), 75);
        assert!(!d.is_leap_year());
    }

    #[test]
    fn test_new_invalid_month() {
        assert!(matches!(
            EthiopicDate::new(2016, 0, 1),
            Err(DateError::InvalidMonth { month: 0, max: 13 })
        ));
        assert!(matches!(
            EthiopicDate::new(2016, 14, 1),
            Err(DateError::InvalidMonth { month: 14, max: 13 })
        ));
    }

    #[test]
    fn test_new_invalid_day() {
        assert!(matches!(
            EthiopicDate::new(2016, 1, 31),
            Err(DateError::InvalidDay {
                day: 31,
                month: 1,
                year: 2016,
                max_day: 30,
            })
        ));
        assert!(matches!(
            EthiopicDate::new(2016, 1, 0),
            Err(DateError::InvalidDay { .. })
        ));
        // Pagumen only reaches day 6 in a leap year
        assert!(EthiopicDate::new(2015, 13, 6).is_ok());
        assert!(matches!(
            EthiopicDate::new(2016, 13, 6),
            Err(DateError::InvalidDay {
                day: 6,
                month: 13,
                year: 2016,
                max_day: 5,
            })
        ));
    }

    #[test]
    fn test_error_messages_name_bounds() {
        let err = EthiopicDate::new(2016, 13, 6).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid day 6 for month 2016-13 (must be 1-5)"
        );

        let err = EthiopicDate::new(2016, 14, 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid month: 14 (must be 1-13)");
    }

    #[test]
    fn test_epoch_day_anchors() {
        // Ethiopian Millennium: 1 Meskerem 2000 = 12 September 2007
        assert_eq!(date(2000, 1, 1).to_epoch_day(), 13_768);
        // The unix epoch falls on Tahsas 23, 1962
        assert_eq!(date(1962, 4, 23).to_epoch_day(), 0);
        assert_eq!(EthiopicDate::from_epoch_day(0).unwrap(), date(1962, 4, 23));
        assert_eq!(
            EthiopicDate::from_epoch_day(13_768).unwrap(),
            date(2000, 1, 1)
        );
    }

    #[test]
    fn test_epoch_day_roundtrip_negative_years() {
        for d in [date(-1, 13, 6), date(0, 1, 1), date(-400, 7, 15)] {
            assert_eq!(EthiopicDate::from_epoch_day(d.to_epoch_day()).unwrap(), d);
            assert!(d.to_epoch_day() < 0);
        }
    }

    #[test]
    fn test_from_day_of_year() {
        assert_eq!(EthiopicDate::from_day_of_year(2016, 75).unwrap(), date(2016, 3, 15));
        assert_eq!(
            EthiopicDate::from_day_of_year(2015, 366).unwrap(),
            date(2015, 13, 6)
        );
        assert!(matches!(
            EthiopicDate::from_day_of_year(2016, 366),
            Err(DateError::InvalidDayOfYear { .. })
        ));
    }

    #[test]
    fn test_from_iso() {
        assert_eq!(EthiopicDate::from_iso(2007, 9, 12).unwrap(), date(2000, 1, 1));
        assert_eq!(EthiopicDate::from_iso(1970, 1, 1).unwrap(), date(1962, 4, 23));
        assert_eq!(EthiopicDate::from_iso(2024, 9, 11).unwrap(), date(2017, 1, 1));
        // Invalid Gregorian input is rejected by the collaborator
        assert!(matches!(
            EthiopicDate::from_iso(2023, 2, 29),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_to_iso() {
        let iso = date(2000, 1, 1).to_iso().unwrap();
        assert_eq!((iso.year(), iso.month(), iso.day()), (2007, 9, 12));

        let iso = date(1962, 4, 23).to_iso().unwrap();
        assert_eq!((iso.year(), iso.month(), iso.day()), (1970, 1, 1));
    }

    #[test]
    fn test_iso_roundtrip() {
        for d in [date(2016, 3, 15), date(1, 1, 1), date(-100, 13, 5)] {
            let iso = d.to_iso().unwrap();
            assert_eq!(
                EthiopicDate::from_iso(iso.year(), iso.month(), iso.day()).unwrap(),
                d
            );
        }
    }

    #[test]
    fn test_now_with_fixed_clock() {
        assert_eq!(
            EthiopicDate::now_with(&FixedClock(0)).unwrap(),
            date(1962, 4, 23)
        );
        assert_eq!(
            EthiopicDate::now_with(&FixedClock(13_768)).unwrap(),
            date(2000, 1, 1)
        );
    }

    #[test]
    fn test_plus_days_boundaries() {
        // Regular month boundary
        assert_eq!(date(2016, 1, 30).plus_days(1).unwrap(), date(2016, 2, 1));
        // Across Pagumen into the new year
        assert_eq!(date(2016, 13, 5).plus_days(1).unwrap(), date(2017, 1, 1));
        assert_eq!(date(2015, 13, 6).plus_days(1).unwrap(), date(2016, 1, 1));
        // And back
        assert_eq!(date(2016, 1, 1).minus_days(1).unwrap(), date(2015, 13, 6));
    }

    #[test]
    fn test_plus_days_monotonic() {
        let base = date(2016, 7, 11);
        for n in -800..=800 {
            let moved = base.plus_days(n).unwrap();
            assert_eq!(
                moved.to_epoch_day(),
                base.to_epoch_day() + n,
                "plus_days({n}) must shift the epoch day by exactly {n}"
            );
        }
    }

    #[test]
    fn test_plus_days_overflow() {
        assert!(matches!(
            date(2016, 1, 1).plus_days(i64::MAX),
            Err(DateError::EpochDayOutOfRange { .. })
        ));
        assert!(matches!(
            date(2016, 1, 1).minus_days(i64::MAX),
            Err(DateError::EpochDayOutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_arithmetic_is_identity() {
        let d = date(2015, 13, 6);
        assert_eq!(d.plus_days(0).unwrap(), d);
        assert_eq!(d.minus_days(0).unwrap(), d);
        assert_eq!(d.plus_months(0).unwrap(), d);
        assert_eq!(d.plus_years(0).unwrap(), d);
    }

    #[test]
    fn test_plus_months_normalization() {
        // Overflow past Pagumen carries into the next year
        assert_eq!(date(2016, 12, 10).plus_months(2).unwrap(), date(2017, 1, 10));
        assert_eq!(date(2016, 1, 10).plus_months(13).unwrap(), date(2017, 1, 10));
        // Underflow borrows from the previous year
        assert_eq!(date(2016, 1, 10).minus_months(1).unwrap(), date(2015, 13, 6));
        assert_eq!(date(2016, 2, 10).minus_months(2).unwrap(), date(2015, 13, 6));
    }

    #[test]
    fn test_plus_months_clamps_into_pagumen() {
        // Day 30 clamps to Pagumen's last day instead of rolling over
        assert_eq!(date(2015, 12, 30).plus_months(1).unwrap(), date(2015, 13, 6));
        assert_eq!(date(2016, 12, 30).plus_months(1).unwrap(), date(2016, 13, 5));
    }

    #[test]
    fn test_plus_years_clamps_leap_pagumen() {
        // Pagumen 6 exists only in leap years
        assert_eq!(date(2015, 13, 6).plus_years(1).unwrap(), date(2016, 13, 5));
        assert_eq!(date(2015, 13, 6).plus_years(4).unwrap(), date(2019, 13, 6));
        assert_eq!(date(2015, 13, 6).minus_years(1).unwrap(), date(2014, 13, 5));
    }

    #[test]
    fn test_plus_years_overflow() {
        assert!(matches!(
            date(2016, 1, 1).plus_years(i64::MAX),
            Err(DateError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            date(2016, 1, 1).plus_months(i64::MAX),
            Err(DateError::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn test_days_until() {
        let a = date(2016, 1, 1);
        let b = date(2016, 1, 6);
        assert_eq!(a.days_until(b), 5);
        assert_eq!(b.days_until(a), -5);
        assert_eq!(a.days_until(a), 0);

        // Across the leap day
        assert_eq!(date(2015, 13, 1).days_until(date(2016, 1, 1)), 6);
        assert_eq!(date(2016, 13, 1).days_until(date(2017, 1, 1)), 5);
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2015, 13, 6) < date(2016, 1, 1));
        assert!(date(2016, 1, 30) < date(2016, 2, 1));
        assert!(date(-1, 13, 6) < date(0, 1, 1));
        assert_eq!(date(2016, 7, 11).cmp(&date(2016, 7, 11)), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2016, 3, 15).to_string(), "2016-03-15");
        assert_eq!(date(1, 1, 1).to_string(), "0001-01-01");
        assert_eq!(date(-1, 13, 6).to_string(), "-0001-13-06");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2016-03-15".parse::<EthiopicDate>().unwrap(), date(2016, 3, 15));
        assert_eq!(" 2016 - 03 - 15 ".parse::<EthiopicDate>().unwrap(), date(2016, 3, 15));
        assert_eq!("-0001-13-06".parse::<EthiopicDate>().unwrap(), date(-1, 13, 6));
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for d in [date(2016, 3, 15), date(1, 1, 1), date(0, 13, 5), date(-1, 13, 6)] {
            assert_eq!(d.to_string().parse::<EthiopicDate>().unwrap(), d);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<EthiopicDate>(), Err(DateError::EmptyInput)));
        assert!(matches!(
            "  ".parse::<EthiopicDate>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "2016-03".parse::<EthiopicDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2016-03-15-4".parse::<EthiopicDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2016-0x-15".parse::<EthiopicDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        // Well-formed but not a real date
        assert!(matches!(
            "2016-13-06".parse::<EthiopicDate>(),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2016, 3, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2016-03-15""#);
        let parsed: EthiopicDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Day 6 of Pagumen is rejected outside leap years
        let result: Result<EthiopicDate, _> = serde_json::from_str(r#""2016-13-06""#);
        assert!(result.is_err());

        let result: Result<EthiopicDate, _> = serde_json::from_str(r#""2015-13-06""#);
        assert!(result.is_ok());

        let result: Result<EthiopicDate, _> = serde_json::from_str(r#""2016-14-01""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_localized() {
        let d = date(2000, 1, 1);
        assert_eq!(d.format(Locale::English), "1 Meskerem 2000");
        assert_eq!(d.format(Locale::Amharic), "1 መስከረም 2000");
        assert_eq!(date(2015, 13, 6).format(Locale::English), "6 Pagumen 2015");
        assert_eq!(d.month_name(Locale::English), "Meskerem");
    }

    #[test]
    fn test_first_and_last_of_month() {
        let d = date(2016, 3, 15);
        assert_eq!(d.first_of_month(), date(2016, 3, 1));
        assert_eq!(d.last_of_month(), date(2016, 3, 30));

        // Pagumen's length follows the leap flag
        assert_eq!(date(2015, 13, 2).last_of_month(), date(2015, 13, 6));
        assert_eq!(date(2016, 13, 2).last_of_month(), date(2016, 13, 5));
    }

    #[test]
    fn test_first_and_last_of_year() {
        let d = date(2015, 7, 11);
        assert_eq!(d.first_of_year(), date(2015, 1, 1));
        assert_eq!(d.last_of_year(), date(2015, 13, 6));
        assert_eq!(date(2016, 7, 11).last_of_year(), date(2016, 13, 5));
    }

    #[test]
    fn test_same_month_and_year() {
        let a = date(2016, 3, 1);
        let b = date(2016, 3, 30);
        let c = date(2016, 4, 1);
        let d = date(2017, 3, 1);

        assert!(a.is_same_month(b));
        assert!(!a.is_same_month(c));
        assert!(!a.is_same_month(d));

        assert!(a.is_same_year(c));
        assert!(!a.is_same_year(d));
    }

    #[test]
    fn test_months_until() {
        assert_eq!(date(2016, 1, 15).months_until(date(2016, 3, 15)), 2);
        // One day short of the second month
        assert_eq!(date(2016, 1, 15).months_until(date(2016, 3, 14)), 1);
        assert_eq!(date(2016, 3, 15).months_until(date(2016, 1, 15)), -2);
        assert_eq!(date(2016, 1, 15).months_until(date(2016, 1, 20)), 0);
        // A full Ethiopic year is 13 months
        assert_eq!(date(2016, 1, 1).months_until(date(2017, 1, 1)), 13);
    }

    #[test]
    fn test_years_until_is_age() {
        let birth = date(2008, 7, 11);
        // Anniversary not yet reached
        assert_eq!(birth.years_until(date(2016, 7, 10)), 7);
        // Anniversary day
        assert_eq!(birth.years_until(date(2016, 7, 11)), 8);
        assert_eq!(birth.years_until(date(2016, 7, 12)), 8);
        // Reversed direction mirrors the count
        assert_eq!(date(2016, 7, 11).years_until(birth), -8);

        // A leap-day birthday only recurs every 4 years; in between, the
        // anniversary (13, 6) stays ahead of Pagumen 5
        let leap_birth = date(2015, 13, 6);
        assert_eq!(leap_birth.years_until(date(2016, 13, 5)), 0);
        assert_eq!(leap_birth.years_until(date(2017, 1, 1)), 1);
    }

    #[test]
    fn test_next_occurrence_of_day() {
        // Later in the same month
        assert_eq!(
            date(2016, 1, 15).next_occurrence_of_day(20).unwrap(),
            date(2016, 1, 20)
        );
        // Already passed: next month
        assert_eq!(
            date(2016, 1, 15).next_occurrence_of_day(10).unwrap(),
            date(2016, 2, 10)
        );
        // Same day does not count as "next"
        assert_eq!(
            date(2016, 1, 15).next_occurrence_of_day(15).unwrap(),
            date(2016, 2, 15)
        );
        // Pagumen is too short for most targets
        assert_eq!(
            date(2016, 12, 20).next_occurrence_of_day(10).unwrap(),
            date(2017, 1, 10)
        );
        assert_eq!(
            date(2016, 13, 1).next_occurrence_of_day(3).unwrap(),
            date(2016, 13, 3)
        );
        assert!(matches!(
            date(2016, 1, 15).next_occurrence_of_day(31),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_typed_accessors() {
        let d = date(2015, 13, 6);
        assert_eq!(d.month_typed().get(), 13);
        assert!(d.month_typed().is_pagumen());
        assert_eq!(d.day_typed().get(), 6);
    }
}
