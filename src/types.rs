use crate::consts::{
    DAYS_PER_LEAP_YEAR, DAYS_PER_MONTH, DAYS_PER_YEAR, LEAP_YEAR_CYCLE, LEAP_YEAR_REMAINDER,
    MESKEREM, MIN_DAY, MONTHS_PER_YEAR, MONTH_NAMES, MONTH_NAMES_AMHARIC, PAGUMEN, PAGUMEN_DAYS,
    PAGUMEN_DAYS_LEAP,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Locale for month-name lookup.
///
/// Month names are static data; adding a locale means adding another
/// 13-entry table, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Romanized month names (Meskerem, Tikimt, ...)
    #[default]
    English,
    /// Amharic month names (መስከረም, ጥቅምት, ...)
    Amharic,
}

impl Locale {
    /// Returns the month-name table for this locale, keyed by `month - 1`.
    pub const fn month_names(self) -> &'static [&'static str; 13] {
        match self {
            Self::English => &MONTH_NAMES,
            Self::Amharic => &MONTH_NAMES_AMHARIC,
        }
    }
}

/// A month value guaranteed to be in the range `1..=13`
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= 13
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > 13.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth {
            month: value,
            max: MONTHS_PER_YEAR,
        })?;
        if value > MONTHS_PER_YEAR {
            return Err(DateError::InvalidMonth {
                month: value,
                max: MONTHS_PER_YEAR,
            });
        }
        Ok(Self(non_zero))
    }

    /// Wraps a month value already known to be in `1..=13`.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value >= MESKEREM && value <= MONTHS_PER_YEAR);
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the 0-based index into the month-name tables
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Returns true for Pagumen, the short 13th month
    pub const fn is_pagumen(self) -> bool {
        self.0.get() == PAGUMEN
    }

    /// Returns the month name in the given locale
    pub const fn name(self, locale: Locale) -> &'static str {
        locale.month_names()[self.index()]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// Pagumen (month 13) accepts 1..=5, or 1..=6 when `year` is a leap year;
    /// every other month accepts 1..=30.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, DateError> {
        let max_day = days_in_month(year, month);
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            day: value,
            month,
            year,
            max_day,
        })?;

        if value > max_day {
            return Err(DateError::InvalidDay {
                day: value,
                month,
                year,
                max_day,
            });
        }

        Ok(Self(non_zero))
    }

    /// Wraps a day value already known to be valid for its month and year.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value >= MIN_DAY && value <= DAYS_PER_MONTH);
        match NonZeroU8::new(value) {
            Some(non_zero) => Self(non_zero),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against Pagumen without year/month context, so only
        // check the bound every month shares
        if !(MIN_DAY..=DAYS_PER_MONTH).contains(&value) {
            return Err(DateError::InvalidDay {
                day: value,
                month: 0,
                year: 0,
                max_day: DAYS_PER_MONTH,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            day: value,
            month: 0,
            year: 0,
            max_day: DAYS_PER_MONTH,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- calendar rules ---

/// Returns true if `year` is an Ethiopic leap year.
///
/// A year is leap iff its floor-mod-4 remainder is 3 — an exact 4-year
/// cycle with no century correction. Floor-mod keeps the cycle continuous
/// through zero and negative proleptic years.
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == LEAP_YEAR_REMAINDER
}

/// Returns the number of days in the given month.
///
/// Months 1..=12 always have 30 days; Pagumen (13) has 5, or 6 in a leap
/// year. `month` must already be in `1..=13`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month >= MESKEREM && month <= MONTHS_PER_YEAR);

    if month == PAGUMEN {
        if is_leap_year(year) {
            PAGUMEN_DAYS_LEAP
        } else {
            PAGUMEN_DAYS
        }
    } else {
        DAYS_PER_MONTH
    }
}

/// Returns the number of days in the given year (365, or 366 if leap).
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_PER_LEAP_YEAR
    } else {
        DAYS_PER_YEAR
    }
}

/// Returns true if `(year, month, day)` names a real calendar date.
///
/// Pure predicate for callers that want validation without a construction
/// failure.
pub const fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if month < MESKEREM || month > MONTHS_PER_YEAR {
        return false;
    }
    day >= MIN_DAY && day <= days_in_month(year, month)
}

/// Returns the 1-based day-of-year for a month/day pair.
///
/// Every month slot is 30 days wide, so this is `(month - 1) * 30 + day`;
/// the result is in `1..=366`. `(month, day)` must already be valid.
pub const fn day_of_year(month: u8, day: u8) -> u16 {
    debug_assert!(month >= MESKEREM && month <= MONTHS_PER_YEAR);
    debug_assert!(day >= MIN_DAY && day <= DAYS_PER_MONTH);
    (month as u16 - 1) * DAYS_PER_MONTH as u16 + day as u16
}

/// Splits a 1-based day-of-year back into a `(month, day)` pair.
///
/// # Errors
/// Returns `DateError::InvalidDayOfYear` if `day_of_year` is 0 or exceeds
/// the length of `year` (365, or 366 when leap).
pub fn month_day_from_day_of_year(year: i32, day_of_year: u16) -> Result<(u8, u8), DateError> {
    let max = days_in_year(year);
    if !(1..=max).contains(&day_of_year) {
        return Err(DateError::InvalidDayOfYear {
            day_of_year,
            year,
            max,
        });
    }
    let zero_based = day_of_year - 1;
    let month = (zero_based / DAYS_PER_MONTH as u16) as u8 + 1;
    let day = (zero_based % DAYS_PER_MONTH as u16) as u8 + 1;
    Ok((month, day))
}

/// Returns the first leap year greater than or equal to `year`.
pub const fn leap_year_on_or_after(year: i64) -> i64 {
    let cycle = LEAP_YEAR_CYCLE as i64;
    year + (LEAP_YEAR_REMAINDER as i64 - year.rem_euclid(cycle))
}
