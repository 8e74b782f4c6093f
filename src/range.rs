use std::{cmp::Ordering, iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{DateError, EthiopicDate, RANGE_SEPARATOR, prelude::*};

/// An inclusive range between two Ethiopic dates.
///
/// The range is empty when `start` is after `end`; construction never
/// fails. Iteration is lazy and restartable: every call to [`Self::days`]
/// or [`Self::step_by_days`] starts over from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct EthiopicDateRange {
    start: EthiopicDate,
    end:   EthiopicDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Step must advance the iteration forward.
    #[error("Invalid step: {step} (must be a positive number of days)")]
    InvalidStep { step: i64 },

    /// Error validating a date component.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl EthiopicDateRange {
    /// Creates a new inclusive date range.
    ///
    /// `start > end` is allowed and yields the empty range.
    pub const fn new(start: EthiopicDate, end: EthiopicDate) -> Self {
        Self { start, end }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> EthiopicDate {
        self.start
    }

    /// Returns the end date of the range (inclusive)
    pub const fn end(&self) -> EthiopicDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (EthiopicDate, EthiopicDate) {
        (self.start, self.end)
    }

    /// Returns true if the range contains no dates (start after end)
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Returns the number of dates in the range (0 when empty)
    pub fn num_days(&self) -> i64 {
        (self.start.days_until(self.end) + 1).max(0)
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &EthiopicDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range shares at least one date with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.start <= other.end && other.start <= self.end
    }

    /// Iterates the range one day at a time, from `start` to `end`.
    pub fn days(&self) -> Days {
        Days {
            next: self.start.to_epoch_day(),
            last: self.end.to_epoch_day(),
            step: 1,
        }
    }

    /// Iterates the range `step` days at a time.
    ///
    /// The first item is always `start`; the last is the highest
    /// `start + k * step` that does not pass `end`, so the iteration lands
    /// on `end` only when `step` divides the range length evenly.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidStep` if `step` is zero or negative.
    pub fn step_by_days(&self, step: i64) -> Result<Days, RangeError> {
        if step < 1 {
            return Err(RangeError::InvalidStep { step });
        }
        Ok(Days {
            next: self.start.to_epoch_day(),
            last: self.end.to_epoch_day(),
            step,
        })
    }
}

/// Lazy iterator over the dates of an [`EthiopicDateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: i64,
    last: i64,
    step: i64,
}

impl Iterator for Days {
    type Item = EthiopicDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        // Every epoch day between two valid dates is itself a valid date
        let date = EthiopicDate::from_epoch_day(self.next).ok()?;
        self.next = self.next.checked_add(self.step).unwrap_or(i64::MAX);
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next > self.last {
            return (0, Some(0));
        }
        let remaining = (self.last - self.next) / self.step + 1;
        usize::try_from(remaining).map_or((usize::MAX, None), |n| (n, Some(n)))
    }
}

impl FusedIterator for Days {}

impl IntoIterator for EthiopicDateRange {
    type Item = EthiopicDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

impl IntoIterator for &EthiopicDateRange {
    type Item = EthiopicDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

impl FromStr for EthiopicDateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                // SAFETY: We just verified separator_count == 1, so find() must succeed
                let pos = trimmed.find(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                let start_str = trimmed[..pos].trim();
                let end_str = trimmed[pos + 1..].trim();

                let start = start_str.parse::<EthiopicDate>()?;
                let end = end_str.parse::<EthiopicDate>()?;

                Ok(Self::new(start, end))
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for EthiopicDateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EthiopicDateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for EthiopicDateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EthiopicDateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
