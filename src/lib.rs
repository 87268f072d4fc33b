mod calendar;
mod consts;
mod convert;
mod error;
mod gregorian;
mod lunar;
mod navigation;
mod prelude;
mod time_source;
mod types;

pub use calendar::{MonthInfo, MonthTable, month_table};
pub use consts::*;
pub use convert::{anchor, flores_to_gregorian, gregorian_to_flores};
pub use error::{CalendarError, ParseError};
pub use gregorian::{GregorianDate, Timestamp, Weekday, days_in_gregorian_month};
pub use lunar::{LunarPhase, lunar_age, phase_at, phase_of};
pub use navigation::{Command, Mode, NavigationState, Snapshot};
pub use time_source::{Clock, FixedClock, SystemClock, UtcOffset, displayed_instant};
pub use types::{Day, Era, Month, is_leap_year, viola_length};

use std::fmt;
use std::str::FromStr;

/// A date in the Flores Solis calendar.
///
/// The day is always within the length of its month for that year; every
/// constructor and every navigation step preserves this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FloresDate {
    year: i64,
    month: Month,
    day: Day,
}

impl FloresDate {
    /// Creates a date from a year, a zero-based month index and a day.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange`, `CalendarError::InvalidMonth`
    /// or `CalendarError::InvalidDay` if a component is out of range.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = validate_year(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Assembles a date from parts already checked against the month table
    pub(crate) const fn from_parts(year: i64, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i64 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub const fn era(&self) -> Era {
        Era::of(self.year)
    }

    /// Year magnitude as shown next to the era label
    pub const fn display_year(&self) -> u64 {
        self.year.unsigned_abs()
    }

    pub fn month_table(&self) -> MonthTable {
        month_table(self.year)
    }

    pub fn to_gregorian(self) -> GregorianDate {
        flores_to_gregorian(self)
    }

    pub fn from_gregorian(date: GregorianDate) -> Self {
        gregorian_to_flores(date)
    }

    /// Converts to columns: (year, month index, day)
    pub const fn to_columns(&self) -> (i64, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }
}

pub(crate) const fn validate_year(year: i64) -> Result<i64, CalendarError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(CalendarError::YearOutOfRange { year });
    }
    Ok(year)
}

impl fmt::Display for FloresDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.day,
            self.month,
            self.display_year(),
            self.era()
        )
    }
}

impl FromStr for FloresDate {
    type Err = CalendarError;

    /// Parses `<day> <month name> <year> [PEV|AEV]`, e.g. `12 Viola 2023 PEV`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let (day, month, year, era) = match parts.as_slice() {
            [day, month, year] => (*day, *month, *year, Era::Pev),
            [day, month, year, era] => {
                let era = Era::from_label(era)
                    .ok_or_else(|| ParseError::UnknownEra((*era).to_owned()))?;
                (*day, *month, *year, era)
            }
            _ => {
                return Err(ParseError::InvalidFormat(format!(
                    "Expected '<day> <month> <year> [era]', found {} component(s)",
                    parts.len()
                ))
                .into());
            }
        };

        let day = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(day.to_owned()))?;
        let month =
            Month::from_name(month).ok_or_else(|| ParseError::UnknownMonth(month.to_owned()))?;
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(year.to_owned()).into());
        }
        let magnitude = year
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidFormat(year.to_owned()))?;
        let year = match era {
            Era::Pev => magnitude,
            Era::Aev => -magnitude,
        };

        Self::new(year, month.get(), day)
    }
}

impl serde::Serialize for FloresDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for FloresDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
