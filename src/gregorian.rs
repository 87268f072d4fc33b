//! Gregorian civil dates and instants.
//!
//! [`GregorianDate`] is a whole-day count since 1970-01-01 and carries no
//! time of day. [`Timestamp`] is a count of seconds since the Unix epoch and
//! is what clocks and the lunar estimator work with. The standard leap rule is
//! applied to every year, including zero and negative years.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::{
    ANCHOR_DAY, ANCHOR_MONTH, DATE_SEPARATOR, GREGORIAN_DAYS_IN_MONTH,
    GREGORIAN_MONTH_ABBREVIATIONS, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTH_FIRST_SEPARATOR,
    SECONDS_PER_DAY,
};
use crate::prelude::*;
use crate::types::is_leap_year;
use crate::{CalendarError, ParseError};

const DAYS_PER_ERA: i64 = 146_097;
const YEARS_PER_ERA: i64 = 400;
/// Days from 0000-03-01 to 1970-01-01
const UNIX_EPOCH_SHIFT: i64 = 719_468;

/// A Gregorian calendar date, stored as days since 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate(i64);

/// Day of the week of a Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "Sun")]
    Sunday,
    #[display(fmt = "Mon")]
    Monday,
    #[display(fmt = "Tue")]
    Tuesday,
    #[display(fmt = "Wed")]
    Wednesday,
    #[display(fmt = "Thu")]
    Thursday,
    #[display(fmt = "Fri")]
    Friday,
    #[display(fmt = "Sat")]
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];
}

pub const fn days_in_gregorian_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == 2 && is_leap_year(year) {
        29
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

// Howard Hinnant's days_from_civil / civil_from_days, in whole days.
const fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let (m, d) = (month as i64, day as i64);
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(YEARS_PER_ERA);
    let yoe = y - era * YEARS_PER_ERA;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_SHIFT
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * YEARS_PER_ERA + if month <= 2 { 1 } else { 0 };
    // month is 1..=12 and day 1..=31 by construction
    (year, month as u8, day as u8)
}

impl GregorianDate {
    /// 1970-01-01
    pub const UNIX_EPOCH: Self = Self(0);

    /// First day of Flores Solis year `MIN_YEAR`
    pub const MIN: Self = Self(days_from_civil(MIN_YEAR, ANCHOR_MONTH, ANCHOR_DAY));

    /// Last day of Flores Solis year `MAX_YEAR`
    pub const MAX: Self = Self(days_from_civil(MAX_YEAR + 1, ANCHOR_MONTH, ANCHOR_DAY) - 1);

    /// Creates a date from an explicit year, month (1-12) and day.
    ///
    /// The year is taken literally: year 50 is year 50, not 1950.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidGregorianDate` if the month or day does not exist,
    /// or `CalendarError::YearOutOfRange` if the date lies outside `MIN..=MAX`.
    pub const fn from_ymd(year: i64, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year < MIN_YEAR || year > MAX_YEAR + 1 {
            return Err(CalendarError::YearOutOfRange { year });
        }
        if month == 0 || month > 12 || day < MIN_DAY || day > days_in_gregorian_month(year, month)
        {
            return Err(CalendarError::InvalidGregorianDate { year, month, day });
        }
        let days = days_from_civil(year, month, day);
        if days < Self::MIN.0 || days > Self::MAX.0 {
            return Err(CalendarError::YearOutOfRange { year });
        }
        Ok(Self(days))
    }

    /// Builds a date from components the caller has already validated
    pub(crate) const fn from_ymd_unchecked(year: i64, month: u8, day: u8) -> Self {
        Self(days_from_civil(year, month, day))
    }

    /// Saturates at `MIN` and `MAX`
    pub const fn from_days_since_epoch(days: i64) -> Self {
        if days < Self::MIN.0 {
            Self::MIN
        } else if days > Self::MAX.0 {
            Self::MAX
        } else {
            Self(days)
        }
    }

    pub const fn days_since_epoch(self) -> i64 {
        self.0
    }

    /// Returns `(year, month, day)` with a 1-based month
    pub const fn to_ymd(self) -> (i64, u8, u8) {
        civil_from_days(self.0)
    }

    pub const fn year(self) -> i64 {
        civil_from_days(self.0).0
    }

    pub const fn month(self) -> u8 {
        civil_from_days(self.0).1
    }

    pub const fn day(self) -> u8 {
        civil_from_days(self.0).2
    }

    /// Saturates at `MIN` and `MAX`
    #[must_use]
    pub const fn add_days(self, days: i64) -> Self {
        Self::from_days_since_epoch(self.0.saturating_add(days))
    }

    /// Whole days from `other` to `self`
    pub const fn days_since(self, other: Self) -> i64 {
        self.0 - other.0
    }

    pub const fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday
        Weekday::ALL[(self.0 + 4).rem_euclid(7) as usize]
    }

    /// The instant at which this date starts (midnight)
    pub const fn midnight(self) -> Timestamp {
        Timestamp(self.0 * SECONDS_PER_DAY)
    }

    /// Long form such as `Wed Mar 20 2024`
    pub fn to_long_string(self) -> String {
        let (year, month, day) = self.to_ymd();
        format!(
            "{} {} {:02} {}",
            self.weekday(),
            GREGORIAN_MONTH_ABBREVIATIONS[usize::from(month - 1)],
            day,
            PaddedYear(year)
        )
    }
}

/// Year formatted with at least four digits and a leading `-` when negative
struct PaddedYear(i64);

impl fmt::Display for PaddedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{:04}", self.0.unsigned_abs())
        } else {
            write!(f, "{:04}", self.0)
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.to_ymd();
        write!(f, "{}-{month:02}-{day:02}", PaddedYear(year))
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        if trimmed.contains(MONTH_FIRST_SEPARATOR) {
            // Month-first format: MM/DD/YYYY
            let parts: Vec<&str> = trimmed.split(MONTH_FIRST_SEPARATOR).map(str::trim).collect();
            return Self::parse_month_first(&parts);
        }

        // ISO format: [+|-]YYYY-MM-DD; a leading sign belongs to the year
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
        Self::parse_iso(&parts, negative)
    }
}

impl GregorianDate {
    fn parse_i64(s: &str) -> Result<i64, ParseError> {
        s.parse::<i64>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        // Signs are only meaningful on the year
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_iso(parts: &[&str], negative: bool) -> Result<Self, CalendarError> {
        let [year, month, day] = parts else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY-MM-DD, found {} component(s)",
                parts.len()
            ))
            .into());
        };
        if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat((*year).to_owned()).into());
        }

        let magnitude = Self::parse_i64(year)?;
        let year = if negative { -magnitude } else { magnitude };
        Self::from_ymd(year, Self::parse_u8(month)?, Self::parse_u8(day)?)
    }

    fn parse_month_first(parts: &[&str]) -> Result<Self, CalendarError> {
        let [month, day, year] = parts else {
            return Err(ParseError::InvalidFormat(parts.join("/")).into());
        };
        Self::from_ymd(
            Self::parse_i64(year)?,
            Self::parse_u8(month)?,
            Self::parse_u8(day)?,
        )
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An instant, in whole seconds since 1970-01-01T00:00:00 UTC.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub const fn unix_seconds(self) -> i64 {
        self.0
    }

    /// Reads a `SystemTime`, flooring to whole seconds
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(i64::try_from(after.as_secs()).unwrap_or(i64::MAX)),
            Err(before) => {
                let before = before.duration();
                let whole = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
                let carry = i64::from(before.subsec_nanos() > 0);
                Self(-whole - carry)
            }
        }
    }

    #[must_use]
    pub const fn add_seconds(self, seconds: i64) -> Self {
        Self(self.0.saturating_add(seconds))
    }

    /// The calendar date containing this instant, time of day discarded
    pub const fn date(self) -> GregorianDate {
        GregorianDate::from_days_since_epoch(self.0.div_euclid(SECONDS_PER_DAY))
    }

    pub const fn seconds_of_day(self) -> i64 {
        self.0.rem_euclid(SECONDS_PER_DAY)
    }
}

impl From<GregorianDate> for Timestamp {
    fn from(date: GregorianDate) -> Self {
        date.midnight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn date(year: i64, month: u8, day: u8) -> GregorianDate {
        GregorianDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_epoch_is_day_zero() {
        assert_eq!(date(1970, 1, 1), GregorianDate::UNIX_EPOCH);
        assert_eq!(date(1970, 1, 2).days_since_epoch(), 1);
        assert_eq!(date(1969, 12, 31).days_since_epoch(), -1);
    }

    #[test]
    fn test_known_day_counts() {
        assert_eq!(date(2000, 1, 1).days_since_epoch(), 10_957);
        assert_eq!(date(2024, 3, 20).days_since_epoch(), 19_802);
        assert_eq!(date(0, 3, 1).days_since_epoch(), -719_468);
    }

    #[test]
    fn test_ymd_round_trip_across_eras() {
        for days in (-800_000..800_000).step_by(997) {
            let d = GregorianDate::from_days_since_epoch(days);
            let (y, m, dd) = d.to_ymd();
            assert_eq!(GregorianDate::from_ymd(y, m, dd), Ok(d), "day {days}");
        }
    }

    #[test]
    fn test_two_digit_years_are_literal() {
        let d = date(50, 3, 20);
        assert_eq!(d.year(), 50);
        assert_ne!(d, date(1950, 3, 20));
        assert_eq!(d.to_string(), "0050-03-20");
    }

    #[test]
    fn test_from_ymd_rejects_invalid() {
        assert!(GregorianDate::from_ymd(2023, 2, 29).is_err());
        assert!(GregorianDate::from_ymd(2024, 2, 29).is_ok());
        assert!(GregorianDate::from_ymd(2024, 13, 1).is_err());
        assert!(GregorianDate::from_ymd(2024, 0, 1).is_err());
        assert!(GregorianDate::from_ymd(2024, 4, 31).is_err());
        assert_eq!(
            GregorianDate::from_ymd(1900, 2, 29),
            Err(CalendarError::InvalidGregorianDate {
                year: 1900,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn test_supported_range() {
        assert_eq!(GregorianDate::MIN.to_ymd(), (MIN_YEAR, 3, 20));
        assert_eq!(GregorianDate::MAX.to_ymd(), (MAX_YEAR + 1, 3, 19));
        assert_eq!(
            GregorianDate::from_ymd(MAX_YEAR + 1, 3, 20),
            Err(CalendarError::YearOutOfRange { year: MAX_YEAR + 1 })
        );
        assert_eq!(
            GregorianDate::from_ymd(i64::MIN, 1, 1),
            Err(CalendarError::YearOutOfRange { year: i64::MIN })
        );
        assert_eq!(GregorianDate::from_days_since_epoch(i64::MAX), GregorianDate::MAX);
        assert_eq!(GregorianDate::MIN.add_days(-1), GregorianDate::MIN);
        assert_eq!(Timestamp::from_unix_seconds(i64::MIN).date(), GregorianDate::MIN);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(GregorianDate::UNIX_EPOCH.weekday(), Weekday::Thursday);
        assert_eq!(date(2024, 3, 20).weekday(), Weekday::Wednesday);
        assert_eq!(date(1969, 12, 28).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_to_long_string() {
        assert_eq!(date(2024, 3, 20).to_long_string(), "Wed Mar 20 2024");
        assert_eq!(date(1970, 1, 1).to_long_string(), "Thu Jan 01 1970");
    }

    #[test]
    fn test_display_negative_year() {
        assert_eq!(date(-44, 3, 15).to_string(), "-0044-03-15");
        assert_eq!(date(12345, 1, 1).to_string(), "12345-01-01");
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!("2024-03-20".parse::<GregorianDate>(), Ok(date(2024, 3, 20)));
        assert_eq!(" 2024-03-20 ".parse::<GregorianDate>(), Ok(date(2024, 3, 20)));
        assert_eq!("+2024-03-20".parse::<GregorianDate>(), Ok(date(2024, 3, 20)));
        assert_eq!("-0044-03-15".parse::<GregorianDate>(), Ok(date(-44, 3, 15)));
        assert_eq!("0050-01-01".parse::<GregorianDate>(), Ok(date(50, 1, 1)));
    }

    #[test]
    fn test_parse_month_first() {
        assert_eq!("03/20/2024".parse::<GregorianDate>(), Ok(date(2024, 3, 20)));
        assert_eq!("3/20/-44".parse::<GregorianDate>(), Ok(date(-44, 3, 20)));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(
            "".parse::<GregorianDate>(),
            Err(CalendarError::Parse(ParseError::EmptyInput))
        );
        assert!(matches!(
            "2024/03-20".parse::<GregorianDate>(),
            Err(CalendarError::Parse(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            "2024-03".parse::<GregorianDate>(),
            Err(CalendarError::Parse(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            "not a date".parse::<GregorianDate>(),
            Err(CalendarError::Parse(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            "2024-+3-20".parse::<GregorianDate>(),
            Err(CalendarError::Parse(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            "2023-02-29".parse::<GregorianDate>(),
            Err(CalendarError::InvalidGregorianDate { .. })
        ));
    }

    #[test]
    fn test_serde() {
        let d = date(2024, 3, 20);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-03-20\"");
        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
        assert!(serde_json::from_str::<GregorianDate>("\"2024-02-30\"").is_err());
    }

    #[test]
    fn test_timestamp_date_floors() {
        let noon = date(2024, 3, 20).midnight().add_seconds(12 * 3_600);
        assert_eq!(noon.date(), date(2024, 3, 20));
        assert_eq!(noon.seconds_of_day(), 43_200);

        let before_epoch = Timestamp::from_unix_seconds(-1);
        assert_eq!(before_epoch.date(), date(1969, 12, 31));
        assert_eq!(before_epoch.seconds_of_day(), 86_399);
    }

    #[test]
    fn test_timestamp_from_system_time() {
        let after = UNIX_EPOCH + Duration::from_millis(86_400_500);
        assert_eq!(Timestamp::from_system_time(after).unix_seconds(), 86_400);

        let before = UNIX_EPOCH - Duration::from_millis(1_500);
        assert_eq!(Timestamp::from_system_time(before).unix_seconds(), -2);
    }

    #[test]
    fn test_timestamp_serde_is_plain_integer() {
        let t = Timestamp::from(1_700_000_000_i64);
        assert_eq!(serde_json::to_string(&t).unwrap(), "1700000000");
        let raw: i64 = t.into();
        assert_eq!(raw, 1_700_000_000);
    }
}
