use crate::CalendarError;
use crate::calendar::month_table;
use crate::consts::{
    CENTURY_CYCLE, ERA_AEV, ERA_PEV, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTH_COUNT,
    MONTH_NAMES, VIOLA, VIOLA_DAYS, VIOLA_DAYS_LEAP,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A Flores Solis month index guaranteed to be in the range `0..=11`.
/// Index 0 is Narcissus, index 11 is Viola.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    /// Narcissus, the month the year starts with
    pub const FIRST: Self = Self(0);
    /// Viola, the leap-dependent final month
    pub const LAST: Self = Self(VIOLA);

    /// Creates a new Month, validating that it's <= 11
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 12 or more.
    pub const fn new(value: u8) -> Result<Self, CalendarError> {
        if value >= MONTH_COUNT {
            return Err(CalendarError::InvalidMonth { month: value });
        }
        Ok(Self(value))
    }

    /// Returns the zero-based month index
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// Looks a month up by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        MONTH_NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .and_then(|i| u8::try_from(i).ok())
            .map(Self)
    }

    /// Next month, wrapping Viola back to Narcissus
    pub const fn succ(self) -> Self {
        if self.0 == VIOLA {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    /// Previous month, wrapping Narcissus back to Viola
    pub const fn pred(self) -> Self {
        if self.0 == 0 { Self::LAST } else { Self(self.0 - 1) }
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..MONTH_COUNT).map(Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the month table of `year`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i64, month: Month) -> Result<Self, CalendarError> {
        let max_day = month_table(year).length(month);
        let invalid = CalendarError::InvalidDay {
            year,
            month: month.get(),
            day: value,
            max_day,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > max_day {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Builds a day from a value already known to be in range, clamping 0 up to 1
    pub(crate) fn clamped(value: u8, max_day: u8) -> Self {
        let value = value.min(max_day);
        Self(NonZeroU8::new(value).unwrap_or(NonZeroU8::MIN))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
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

/// Display-only sign indicator of a Flores Solis year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Era {
    /// Years >= 0
    #[display(fmt = "{}", ERA_PEV)]
    #[serde(rename = "PEV")]
    Pev,
    /// Years < 0
    #[display(fmt = "{}", ERA_AEV)]
    #[serde(rename = "AEV")]
    Aev,
}

impl Era {
    pub const fn of(year: i64) -> Self {
        if year < 0 { Self::Aev } else { Self::Pev }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case(ERA_PEV) {
            Some(Self::Pev)
        } else if label.eq_ignore_ascii_case(ERA_AEV) {
            Some(Self::Aev)
        } else {
            None
        }
    }
}

// Helper functions

#[allow(clippy::cast_lossless)]
pub const fn is_leap_year(year: i64) -> bool {
    is_leap_wide(year as i128)
}

const fn is_leap_wide(year: i128) -> bool {
    let (four, century, gregorian) = (
        LEAP_YEAR_CYCLE as i128,
        CENTURY_CYCLE as i128,
        GREGORIAN_CYCLE as i128,
    );
    (year % four == 0 && year % century != 0) || (year % gregorian == 0)
}

/// Length of Viola in Flores Solis year `year`.
///
/// Viola ends in the February/March of Gregorian year `year + 1`, so that
/// year's leap status decides whether it has 30 days.
#[allow(clippy::cast_lossless)]
pub const fn viola_length(year: i64) -> u8 {
    if is_leap_wide(year as i128 + 1) {
        VIOLA_DAYS_LEAP
    } else {
        VIOLA_DAYS
    }
}
