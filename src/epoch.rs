//! Conversion between Ethiopic dates and the ISO epoch day scale.
//!
//! The epoch day — a signed count of days since 1970-01-01 Gregorian — is
//! the interchange currency for everything in this crate: cross-calendar
//! conversion and all day-granularity arithmetic go through it.

use crate::consts::{DAYS_PER_LEAP_CYCLE, DAYS_PER_MONTH, DAYS_PER_YEAR, ISO_EPOCH_OFFSET};
use crate::types::is_valid_date;
use crate::DateError;

/// Converts an Ethiopic `(year, month, day)` triple to an ISO epoch day.
///
/// Counts `(year - 1) * 365` regular days plus one intercalary day per
/// completed 4-year cycle (`floor(year / 4)`), adds the 0-based day-of-year
/// position, and shifts onto the ISO scale. The components must already
/// form a valid date; any `i32` year is representable, so the conversion
/// itself cannot fail.
pub(crate) fn to_epoch_day(year: i32, month: u8, day: u8) -> i64 {
    debug_assert!(is_valid_date(year, month, day));

    let year = i64::from(year);
    let day_of_year0 = i64::from(month - 1) * i64::from(DAYS_PER_MONTH) + i64::from(day - 1);
    (year - 1) * i64::from(DAYS_PER_YEAR) + year.div_euclid(4) + day_of_year0 - ISO_EPOCH_OFFSET
}

/// Converts an ISO epoch day back to an Ethiopic `(year, month, day)` triple.
///
/// Inverse of [`to_epoch_day`]. Works on the shifted Ethiopic day count:
/// multiplying by 4 and dividing by 1461 (the days in one leap cycle)
/// recovers the year, and the remainder within the year splits into
/// uniform 30-day month slots. `div_euclid`/`rem_euclid` round toward
/// negative infinity, so epoch days far below zero resolve to the same
/// continuous progression as positive ones.
///
/// # Errors
/// Returns [`DateError::EpochDayOutOfRange`] when the resulting year does
/// not fit in an `i32` (or the intermediate day count overflows `i64`).
pub(crate) fn from_epoch_day(epoch_day: i64) -> Result<(i32, u8, u8), DateError> {
    let out_of_range = DateError::EpochDayOutOfRange { epoch_day };

    let shifted = epoch_day
        .checked_add(ISO_EPOCH_OFFSET)
        .ok_or(out_of_range.clone())?;
    let year64 = shifted
        .checked_mul(4)
        .and_then(|scaled| scaled.checked_add(DAYS_PER_LEAP_CYCLE + 2))
        .ok_or(out_of_range.clone())?
        .div_euclid(DAYS_PER_LEAP_CYCLE);
    let year = i32::try_from(year64).map_err(|_| out_of_range)?;

    let start_of_year = (year64 - 1) * i64::from(DAYS_PER_YEAR) + year64.div_euclid(4);
    let day_of_year0 = shifted - start_of_year;
    debug_assert!((0..=365).contains(&day_of_year0));

    let month = (day_of_year0 / i64::from(DAYS_PER_MONTH)) as u8 + 1;
    let day = (day_of_year0 % i64::from(DAYS_PER_MONTH)) as u8 + 1;
    Ok((year, month, day))
}
