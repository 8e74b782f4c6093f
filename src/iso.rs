//! Proleptic Gregorian (ISO) dates, used as the conversion collaborator.
//!
//! The Ethiopic core never touches Gregorian calendar rules; everything
//! crossing the calendar boundary travels as an ISO epoch day, and this
//! module owns the Gregorian side of that exchange.

use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum valid ISO month (December)
const MAX_ISO_MONTH: u8 = 12;

/// Days in February for leap years
const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each ISO month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
const DAYS_IN_ISO_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_iso_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_iso_leap_year(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Returns the number of days in the given ISO month.
/// `month` must already be in `1..=12`.
pub const fn days_in_iso_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_ISO_MONTH);

    if month == 2 && is_iso_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_ISO_MONTH[month as usize]
    }
}

/// A date in the proleptic Gregorian (ISO) calendar.
///
/// Exists so that Ethiopic dates can be exchanged with the outside world;
/// it carries just enough behavior to validate its components and convert
/// to and from the shared epoch-day scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct IsoDate {
    year: i32,
    month: u8,
    day: u8,
}

impl IsoDate {
    /// Creates a new ISO date, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay` when a
    /// component is out of range for the proleptic Gregorian calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=MAX_ISO_MONTH).contains(&month) {
            return Err(DateError::InvalidMonth {
                month,
                max: MAX_ISO_MONTH,
            });
        }
        let max_day = days_in_iso_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Converts this date to an ISO epoch day (days since 1970-01-01).
    ///
    /// Standard civil-to-days computation over 400-year eras; exact for the
    /// whole proleptic range, so it cannot overflow for `i32` years.
    pub fn to_epoch_day(self) -> i64 {
        let year = i64::from(self.year) - i64::from(self.month <= 2);
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let month = i64::from(self.month);
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };
        let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(self.day) - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * 146_097 + day_of_era - 719_468
    }

    /// Converts an ISO epoch day to a date, the inverse of [`Self::to_epoch_day`].
    ///
    /// # Errors
    /// Returns `DateError::EpochDayOutOfRange` when the resulting year does
    /// not fit in an `i32`.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        let out_of_range = DateError::EpochDayOutOfRange { epoch_day };

        let shifted = epoch_day
            .checked_add(719_468)
            .ok_or(out_of_range.clone())?;
        let era = shifted.div_euclid(146_097);
        let day_of_era = shifted.rem_euclid(146_097);
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
        let month = if shifted_month < 10 {
            (shifted_month + 3) as u8
        } else {
            (shifted_month - 9) as u8
        };
        let year64 = year_of_era + era * 400 + i64::from(month <= 2);
        let year = i32::try_from(year64).map_err(|_| out_of_range)?;
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(
                f,
                "-{:04}-{:02}-{:02}",
                -i64::from(self.year),
                self.month,
                self.day
            )
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}
