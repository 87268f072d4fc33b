//! Error types for the flores_solis crate.

/// Failure to parse a date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Unknown month name: {0}")]
    UnknownMonth(String),

    #[error("Unknown era label: {0} (expected PEV or AEV)")]
    UnknownEra(String),
}

/// Error type for all fallible operations in the crate.
///
/// Everything else (conversion, month tables, navigation steps) is total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Year outside the supported `MIN_YEAR..=MAX_YEAR` span.
    #[error("Year {year} is outside the supported range")]
    YearOutOfRange { year: i64 },

    /// Month index outside `0..=11`.
    #[error("Invalid month index: {month} (must be 0-11)")]
    InvalidMonth { month: u8 },

    /// Day outside `1..=max_day` for the given Flores Solis year and month.
    #[error("Invalid day {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        year: i64,
        month: u8,
        day: u8,
        max_day: u8,
    },

    /// Gregorian year/month/day triple that does not name a real day.
    #[error("Invalid Gregorian date: {year}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i64, month: u8, day: u8 },

    /// UTC offset that is not a finite quarter-hour value within -12..=14.
    #[error("Invalid UTC offset: {hours} hours")]
    InvalidUtcOffset { hours: f64 },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
